//! Whole-record validator contract.

use std::collections::HashMap;

use serde_json::Value;

/// Field name -> messages collected for that field.
pub type ErrorFields = HashMap<String, Vec<String>>;

/// Capability of validating a raw record as a whole.
///
/// Implementors run `validate` and then expose what it produced: `errors` when
/// the record was rejected, `validated_data` when it was accepted. Both are unset
/// until `validate` has run.
pub trait ValidatorFields<T> {
    fn errors(&self) -> Option<&ErrorFields>;

    fn validated_data(&self) -> Option<&T>;

    /// Returns whether `data` was accepted.
    fn validate(&mut self, data: &Value) -> bool;
}

/// Storage for the two outputs of a [`ValidatorFields`] implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorFieldsState<T> {
    pub errors: Option<ErrorFields>,
    pub validated_data: Option<T>,
}

impl<T> Default for ValidatorFieldsState<T> {
    fn default() -> Self {
        Self {
            errors: None,
            validated_data: None,
        }
    }
}

impl<T> ValidatorFieldsState<T> {
    /// Record a rejection; clears any previously accepted data.
    pub fn reject(&mut self, errors: ErrorFields) {
        self.errors = Some(errors);
        self.validated_data = None;
    }

    /// Record an acceptance; clears any previous errors.
    pub fn accept(&mut self, data: T) {
        self.errors = None;
        self.validated_data = Some(data);
    }
}
