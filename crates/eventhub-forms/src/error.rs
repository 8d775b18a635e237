// File: src/error.rs
// Purpose: Field-level validation errors and construction errors

use eventhub_validation::group_thousands;
use thiserror::Error;

/// One violated rule. `Display` is the text written into the field's error slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Event date must be in the future")]
    DateInPast,

    #[error("Number of guests must be between {} and {}", grouped(.min), grouped(.max))]
    GuestsOutOfRange { min: i64, max: i64 },
}

fn grouped(value: &i64) -> String {
    group_thousands(*value)
}

impl FieldError {
    /// Stable machine-readable code, handed to JavaScript alongside the message
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::InvalidEmail => "email",
            FieldError::InvalidPhone => "tel",
            FieldError::DateInPast => "date",
            FieldError::GuestsOutOfRange { .. } => "guests",
        }
    }
}

/// Problems building a validator from host-supplied descriptors
#[derive(Debug, Error)]
pub enum FormsError {
    #[error("duplicate field id '{0}'")]
    DuplicateField(String),

    #[error("field id must not be empty")]
    EmptyFieldId,

    #[error("invalid guest range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}
