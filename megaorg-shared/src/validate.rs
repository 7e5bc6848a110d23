/// Field-scoped validation error collection
///
/// The derive-based schemas report failures per field; this module flattens
/// them into the `field -> message` shape the form dialogs render inline.
/// Validation is synchronous and local: a payload with a non-empty error
/// list must never reach the network.

use chrono::NaiveDate;
use validator::{ValidationErrors, ValidationErrorsKind};

/// One failed constraint, scoped to the field that declared it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as declared on the payload struct
    pub field: String,

    /// Display message for the inline error line
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flattens `ValidationErrors` into field-scoped messages
///
/// Nested and list errors do not occur in these flat payload structs, so
/// only direct field errors are collected.
pub fn collect(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, kind) in errors.errors() {
        if let ValidationErrorsKind::Field(field_errors) = kind {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                out.push(FieldError::new(field.to_string(), message));
            }
        }
    }
    out
}

/// Returns the first message recorded for `field`, if any
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

/// Checks that a string is an ISO calendar date (`YYYY-MM-DD`)
pub fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}
