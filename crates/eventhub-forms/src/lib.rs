//! # eventhub-forms
//!
//! Form validation for the event request and newsletter forms of an event-hub site.
//!
//! The host page describes its fields explicitly and hands them to a [`FormValidator`].
//! The validator reads values from, and writes error slots to, anything implementing
//! [`FormSurface`]: the in-memory [`FormState`] here, or a live DOM form in the WASM crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use eventhub_forms::{
//!     EventRequestForm, FieldDescriptor, FixedClock, FormState, FormValidator, FormsConfig,
//!     InputKind, NotificationCenter,
//! };
//!
//! let fields = vec![
//!     FieldDescriptor::new("name", InputKind::Text).required(),
//!     FieldDescriptor::new("email", InputKind::Email).required(),
//!     FieldDescriptor::new("guests", InputKind::Number),
//! ];
//! let config = FormsConfig::default();
//! let clock = FixedClock::ymd(2026, 10, 17);
//! let validator = FormValidator::new(fields.clone(), &config.validation, clock).unwrap();
//! let form = EventRequestForm::new(validator, &config.notifications);
//!
//! let mut state = FormState::from_descriptors(&fields);
//! state.set_value("name", "Ada");
//! state.set_value("email", "ada@example");
//!
//! let mut toasts = NotificationCenter::default();
//! assert!(!form.handle_submit(&mut state, &mut toasts, 0).is_accepted());
//! assert_eq!(state.error("email"), Some("Please enter a valid email address"));
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod field;
pub mod notification;
pub mod submission;
pub mod surface;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BlurChecks, FormsConfig, NotificationConfig, ValidationConfig};
pub use error::{FieldError, FormsError};
pub use field::{FieldDescriptor, FieldRule, InputKind, RuleScope};
pub use notification::{
    Notification, NotificationCenter, NotificationKind, Notifier, ToastPhase,
};
pub use submission::{min_event_date, EventRequestForm, NewsletterForm, SubmitOutcome};
pub use surface::{FieldState, FormState, FormSurface};
pub use validator::{FormValidator, ValidationResult};

// Re-export the predicate crate for hosts that want the raw checks
pub use eventhub_validation as predicates;
