use chrono::{DateTime, Utc};

use crate::model::{
    Field, FormValues, Rules, SubmittedValues, validate_on_change, validate_on_submit,
};

use super::errors::ErrorSet;

/// Where the form is in its edit/submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Values are being entered; the initial phase.
    #[default]
    Editing,
    /// The last submit succeeded and nothing has been edited since.
    Submitted,
}

/// Inputs to [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A field's value was replaced.
    FieldChanged { field: Field, value: String },
    /// The user asked to submit the form.
    Submit,
    /// Clear all values, errors and the submitted snapshot.
    Reset,
}

/// Complete state of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    rules: Rules,
    values: FormValues,
    errors: ErrorSet,
    phase: Phase,
    submitted: Option<SubmittedValues>,
}

impl FormState {
    /// Creates an empty form validated with `rules`.
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Applies `event` in place; see [`reduce`].
    pub fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(self);
        *self = reduce(state, event);
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The values accepted by the last successful submit, if any.
    pub fn submitted(&self) -> Option<&SubmittedValues> {
        self.submitted.as_ref()
    }
}

/// Computes the state that follows `event`, stamping any new submission with
/// the current time.
pub fn reduce(state: FormState, event: Event) -> FormState {
    reduce_at(state, event, Utc::now())
}

/// Same as [`reduce`] with an explicit submission timestamp.
pub fn reduce_at(mut state: FormState, event: Event, now: DateTime<Utc>) -> FormState {
    match event {
        Event::FieldChanged { field, value } => {
            tracing::debug!(%field, len = value.chars().count(), "field changed");
            let result = validate_on_change(field, &value, &state.rules);
            state.values.set(field, value);
            state.errors.apply(field, result);
            state.phase = Phase::Editing;
        }
        Event::Submit => {
            let rules = state.rules;
            state.errors = Field::all()
                .iter()
                .map(|&field| {
                    let value = state.values.get(field);
                    (field, validate_on_submit(field, value, &rules))
                })
                .collect();

            if state.errors.is_empty() {
                tracing::info!(%now, "submit accepted");
                state.submitted = Some(SubmittedValues::snapshot(&state.values, now));
                state.phase = Phase::Submitted;
            } else {
                tracing::debug!(errors = state.errors.len(), "submit rejected");
                state.phase = Phase::Editing;
            }
        }
        Event::Reset => {
            tracing::debug!("form reset");
            state = FormState::new(state.rules);
        }
    }
    state
}
