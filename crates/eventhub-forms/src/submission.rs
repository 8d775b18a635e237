// File: src/submission.rs
// Purpose: Page-level controllers that wire validation to submit, blur and input events

use crate::clock::Clock;
use crate::config::NotificationConfig;
use crate::error::FieldError;
use crate::notification::{Notification, Notifier};
use crate::surface::FormSurface;
use crate::validator::{FormValidator, ValidationResult};
use eventhub_validation::{format_iso_date, is_valid_email};

/// What happened to a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Valid: success toast shown and form reset. Nothing is sent anywhere.
    Accepted,
    /// Invalid: errors are on the form
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// The event request form on the contact page
#[derive(Debug, Clone)]
pub struct EventRequestForm<C> {
    validator: FormValidator<C>,
    success_message: String,
}

impl<C: Clock> EventRequestForm<C> {
    pub fn new(validator: FormValidator<C>, notifications: &NotificationConfig) -> Self {
        Self {
            validator,
            success_message: notifications.event_success.clone(),
        }
    }

    pub fn validator(&self) -> &FormValidator<C> {
        &self.validator
    }

    pub fn handle_submit<S, N>(&self, form: &mut S, notifier: &mut N, now_ms: u64) -> SubmitOutcome
    where
        S: FormSurface + ?Sized,
        N: Notifier + ?Sized,
    {
        let result = self.validator.validate_all(form);
        if !result.is_valid {
            return SubmitOutcome::Rejected(result);
        }

        tracing::info!("event request accepted");
        notifier.notify(Notification::success(self.success_message.clone()), now_ms);
        form.reset();
        SubmitOutcome::Accepted
    }

    pub fn handle_blur<S: FormSurface + ?Sized>(&self, form: &mut S, id: &str) -> Result<(), FieldError> {
        self.validator.validate_field(form, id)
    }

    pub fn handle_input<S: FormSurface + ?Sized>(&self, form: &mut S, id: &str) -> bool {
        self.validator.clear_field_error_on_edit(form, id)
    }

    /// Value for the event date input's `min` attribute
    pub fn min_event_date(&self) -> String {
        min_event_date(self.validator.clock())
    }
}

/// Today's date as `YYYY-MM-DD`
pub fn min_event_date<C: Clock + ?Sized>(clock: &C) -> String {
    format_iso_date(clock.today())
}

/// Single-input newsletter signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterForm {
    success_message: String,
    invalid_message: String,
}

impl NewsletterForm {
    pub fn new(notifications: &NotificationConfig) -> Self {
        Self {
            success_message: notifications.newsletter_success.clone(),
            invalid_message: notifications.newsletter_invalid.clone(),
        }
    }

    /// Returns whether the address was accepted; the caller clears the input on `true`
    pub fn handle_submit<N: Notifier + ?Sized>(&self, email: &str, notifier: &mut N, now_ms: u64) -> bool {
        if !email.is_empty() && is_valid_email(email) {
            tracing::info!("newsletter subscription accepted");
            notifier.notify(Notification::success(self.success_message.clone()), now_ms);
            true
        } else {
            notifier.notify(Notification::error(self.invalid_message.clone()), now_ms);
            false
        }
    }
}
