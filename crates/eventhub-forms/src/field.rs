// File: src/field.rs
// Purpose: Host-declared field descriptors and the rules derived from them

use crate::config::ValidationConfig;
use crate::error::FieldError;
use chrono::NaiveDate;
use eventhub_validation as checks;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Declared input type of a field.
///
/// Anything that is not one of the checked types (`select`, `textarea`, `password`, ...)
/// is treated as plain text. Deserializes from any `type` attribute spelling,
/// case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum InputKind {
    Email,
    Tel,
    Date,
    Number,
    #[default]
    Text,
}

impl From<String> for InputKind {
    fn from(value: String) -> Self {
        InputKind::from_html_type(&value)
    }
}

impl From<InputKind> for String {
    fn from(kind: InputKind) -> Self {
        kind.as_str().to_string()
    }
}

impl InputKind {
    /// Maps an HTML `type` attribute (or tag name) to a kind
    pub fn from_html_type(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "email" => InputKind::Email,
            "tel" => InputKind::Tel,
            "date" => InputKind::Date,
            "number" => InputKind::Number,
            _ => InputKind::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Date => "date",
            InputKind::Number => "number",
        }
    }
}

/// A field as declared by the host page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: String,

    #[serde(default, alias = "type")]
    pub kind: InputKind,

    #[serde(default)]
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>, kind: InputKind) -> Self {
        Self {
            id: id.into(),
            kind,
            required: false,
        }
    }

    /// Marks the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Which checks a validation pass applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Every rule: required, email, phone, date, guest count
    Full,
    /// Required, email and phone only
    Format,
}

/// Rule set of one field, derived from its descriptor and the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub required: bool,
    pub kind: InputKind,
    /// Only set for the guest-count number field
    pub number_range: Option<RangeInclusive<i64>>,
    /// Only set for phone fields; raw character count
    pub min_length: Option<usize>,
}

impl FieldRule {
    pub fn derive(descriptor: &FieldDescriptor, config: &ValidationConfig) -> Self {
        let number_range = (descriptor.kind == InputKind::Number
            && descriptor.id == config.guests_field)
            .then(|| config.guests_min..=config.guests_max);

        let min_length = (descriptor.kind == InputKind::Tel).then_some(config.phone_min_length);

        Self {
            required: descriptor.required,
            kind: descriptor.kind,
            number_range,
            min_length,
        }
    }

    /// Applies the rules in fixed order and returns the first failure.
    ///
    /// Type checks only run on a non-empty value; the required check trims whitespace
    /// first, so a blank required field reports `Required` and nothing else.
    pub fn check(&self, value: &str, today: NaiveDate, scope: RuleScope) -> Result<(), FieldError> {
        if self.required && value.trim().is_empty() {
            return Err(FieldError::Required);
        }

        if value.is_empty() {
            return Ok(());
        }

        match (self.kind, scope) {
            (InputKind::Email, _) if !checks::is_valid_email(value) => {
                Err(FieldError::InvalidEmail)
            }
            (InputKind::Tel, _)
                if !checks::is_valid_phone(value, self.min_length.unwrap_or_default()) =>
            {
                Err(FieldError::InvalidPhone)
            }
            (InputKind::Date, RuleScope::Full) if !checks::is_not_before(value, today) => {
                Err(FieldError::DateInPast)
            }
            (InputKind::Number, RuleScope::Full) => self.check_range(value),
            _ => Ok(()),
        }
    }

    fn check_range(&self, value: &str) -> Result<(), FieldError> {
        let Some(range) = &self.number_range else {
            return Ok(());
        };

        // No leading integer compares false against both bounds
        match checks::parse_leading_int(value) {
            Some(n) if !checks::is_in_range(n, *range.start(), *range.end()) => {
                Err(FieldError::GuestsOutOfRange {
                    min: *range.start(),
                    max: *range.end(),
                })
            }
            _ => Ok(()),
        }
    }
}
