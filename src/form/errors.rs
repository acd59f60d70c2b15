use std::collections::BTreeMap;

use crate::model::{Field, ValidationError};

/// Active validation errors keyed by field, iterated in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorSet {
    errors: BTreeMap<Field, ValidationError>,
}

impl ErrorSet {
    /// Records the outcome of validating `field`: stores the error or clears
    /// any previous one.
    pub fn apply(&mut self, field: Field, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }

    /// Returns the error for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(&field, e)| (field, e))
    }

    /// Display lines, one per failing field (`Error: ...`).
    pub fn messages(&self) -> Vec<String> {
        self.errors.values().map(|e| format!("Error: {e}")).collect()
    }
}

impl FromIterator<(Field, Result<(), ValidationError>)> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = (Field, Result<(), ValidationError>)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (field, result) in iter {
            set.apply(field, result);
        }
        set
    }
}
