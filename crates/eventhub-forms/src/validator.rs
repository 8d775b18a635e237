// File: src/validator.rs
// Purpose: Submit-time, blur-time and edit-time validation passes over a form surface

use crate::clock::{Clock, SystemClock};
use crate::config::{BlurChecks, ValidationConfig};
use crate::error::{FieldError, FormsError};
use crate::field::{FieldDescriptor, FieldRule, RuleScope};
use crate::surface::FormSurface;
use std::collections::HashSet;

/// Outcome of a whole-form pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Failures in document order, at most one per field
    pub errors: Vec<(String, FieldError)>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<(String, FieldError)>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(id, _)| id == field)
            .map(|(_, error)| error)
    }
}

/// Validates the fields a host page declared.
///
/// Holds no field state of its own: every pass reads live values from the surface and
/// overwrites the error slots it touches.
#[derive(Debug, Clone)]
pub struct FormValidator<C = SystemClock> {
    fields: Vec<(FieldDescriptor, FieldRule)>,
    blur_scope: RuleScope,
    clock: C,
}

impl<C: Clock> FormValidator<C> {
    /// Builds a validator for `descriptors`, kept in the given (document) order
    pub fn new(
        descriptors: Vec<FieldDescriptor>,
        config: &ValidationConfig,
        clock: C,
    ) -> Result<Self, FormsError> {
        if config.guests_min > config.guests_max {
            return Err(FormsError::InvalidRange {
                min: config.guests_min,
                max: config.guests_max,
            });
        }

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if descriptor.id.is_empty() {
                return Err(FormsError::EmptyFieldId);
            }
            if !seen.insert(descriptor.id.clone()) {
                return Err(FormsError::DuplicateField(descriptor.id));
            }
            let rule = FieldRule::derive(&descriptor, config);
            fields.push((descriptor, rule));
        }

        let blur_scope = match config.blur_checks {
            BlurChecks::Format => RuleScope::Format,
            BlurChecks::Full => RuleScope::Full,
        };

        Ok(Self {
            fields,
            blur_scope,
            clock,
        })
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().map(|(descriptor, _)| descriptor)
    }

    pub fn rule(&self, id: &str) -> Option<&FieldRule> {
        self.fields
            .iter()
            .find(|(descriptor, _)| descriptor.id == id)
            .map(|(_, rule)| rule)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Checks a value against a field's rules without touching any surface
    pub fn check_value(&self, id: &str, value: &str, scope: RuleScope) -> Result<(), FieldError> {
        match self.rule(id) {
            Some(rule) => rule.check(value, self.clock.today(), scope),
            None => Ok(()),
        }
    }

    /// Submit-time pass: every field, every rule, no short-circuit.
    ///
    /// Each field's slot is cleared before its rules run, so the surface ends up showing
    /// exactly the errors in the returned result.
    pub fn validate_all<S: FormSurface + ?Sized>(&self, form: &mut S) -> ValidationResult {
        let today = self.clock.today();
        let mut errors = Vec::new();

        for (descriptor, rule) in &self.fields {
            let Some(value) = form.value(&descriptor.id) else {
                tracing::warn!(field = %descriptor.id, "declared field missing from form, skipping");
                continue;
            };

            form.clear_error(&descriptor.id);
            if let Err(error) = rule.check(&value, today, RuleScope::Full) {
                tracing::debug!(field = %descriptor.id, code = error.code(), "field failed validation");
                form.show_error(&descriptor.id, &error.to_string());
                errors.push((descriptor.id.clone(), error));
            }
        }

        let result = ValidationResult::from_errors(errors);
        tracing::debug!(
            valid = result.is_valid,
            failed = result.errors.len(),
            "form validated"
        );
        result
    }

    /// Blur-time pass over a single field; other fields are left alone
    pub fn validate_field<S: FormSurface + ?Sized>(
        &self,
        form: &mut S,
        id: &str,
    ) -> Result<(), FieldError> {
        let Some(rule) = self.rule(id) else {
            tracing::warn!(field = %id, "blur on undeclared field ignored");
            return Ok(());
        };
        let Some(value) = form.value(id) else {
            tracing::warn!(field = %id, "declared field missing from form, skipping");
            return Ok(());
        };

        form.clear_error(id);
        let outcome = rule.check(&value, self.clock.today(), self.blur_scope);
        if let Err(error) = &outcome {
            tracing::debug!(field = %id, code = error.code(), "field failed validation on blur");
            form.show_error(id, &error.to_string());
        }
        outcome
    }

    /// Edit-time hook: drops a shown error without re-running any rule.
    ///
    /// Returns whether an error was cleared.
    pub fn clear_field_error_on_edit<S: FormSurface + ?Sized>(&self, form: &mut S, id: &str) -> bool {
        if !form.has_error(id) {
            return false;
        }
        form.clear_error(id);
        tracing::trace!(field = %id, "error cleared on edit");
        true
    }
}
