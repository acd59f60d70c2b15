use chrono::{DateTime, Utc};

use super::field::Field;

/// Current contents of the four form inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    /// Returns the value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// A snapshot of [`FormValues`] accepted by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedValues {
    pub values: FormValues,
    pub submitted_at: DateTime<Utc>,
}

impl SubmittedValues {
    /// Copies `values` as they are at `submitted_at`.
    pub fn snapshot(values: &FormValues, submitted_at: DateTime<Utc>) -> Self {
        Self {
            values: values.clone(),
            submitted_at,
        }
    }

    /// The message, or `None` when it was left blank.
    pub fn message(&self) -> Option<&str> {
        let message = self.values.message.as_str();
        (!message.trim().is_empty()).then_some(message)
    }
}
