//! Integration tests for eventhub-forms
//!
//! Exercise the validator through the public API against the in-memory form, the way a
//! host page drives it: submit, blur, input.

use eventhub_forms::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

const REQUIRED: &str = "This field is required";
const EMAIL: &str = "Please enter a valid email address";
const PHONE: &str = "Please enter a valid phone number";
const DATE: &str = "Event date must be in the future";
const GUESTS: &str = "Number of guests must be between 1 and 10,000";

fn contact_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("name", InputKind::Text).required(),
        FieldDescriptor::new("email", InputKind::Email).required(),
        FieldDescriptor::new("phone", InputKind::Tel),
        FieldDescriptor::new("event-date", InputKind::Date).required(),
        FieldDescriptor::new("guests", InputKind::Number),
        FieldDescriptor::new("message", InputKind::Text),
    ]
}

#[fixture]
fn validator() -> FormValidator<FixedClock> {
    FormValidator::new(
        contact_fields(),
        &ValidationConfig::default(),
        FixedClock::ymd(2026, 10, 17),
    )
    .unwrap()
}

fn valid_form() -> FormState {
    FormState::from_descriptors(&contact_fields())
        .with_field("name", "Ada Lovelace")
        .with_field("email", "ada@example.com")
        .with_field("phone", "123-456-7890")
        .with_field("event-date", "2026-12-01")
        .with_field("guests", "120")
        .with_field("message", "Gala dinner")
}

#[rstest]
fn test_valid_form_passes(validator: FormValidator<FixedClock>) {
    let mut form = valid_form();
    let result = validator.validate_all(&mut form);
    assert!(result.is_valid);
    assert!(form.errors().is_empty());
}

#[rstest]
fn test_all_errors_shown_at_once(validator: FormValidator<FixedClock>) {
    let mut form = FormState::from_descriptors(&contact_fields())
        .with_field("email", "a.com")
        .with_field("phone", "12345")
        .with_field("event-date", "2026-10-16")
        .with_field("guests", "0");

    let result = validator.validate_all(&mut form);

    assert!(!result.is_valid);
    assert_eq!(
        form.errors(),
        vec![
            ("name", REQUIRED),
            ("email", EMAIL),
            ("phone", PHONE),
            ("event-date", DATE),
            ("guests", GUESTS),
        ]
    );
    assert_eq!(result.errors.len(), 5);
    assert_eq!(result.get_error("phone"), Some(&FieldError::InvalidPhone));
}

#[rstest]
fn test_idempotent(validator: FormValidator<FixedClock>) {
    let mut form = valid_form().with_field("email", "a@b").with_field("guests", "10001");

    let first = validator.validate_all(&mut form);
    let shown_first: Vec<(String, String)> = form
        .errors()
        .into_iter()
        .map(|(id, e)| (id.to_string(), e.to_string()))
        .collect();

    let second = validator.validate_all(&mut form);
    let shown_second: Vec<(String, String)> = form
        .errors()
        .into_iter()
        .map(|(id, e)| (id.to_string(), e.to_string()))
        .collect();

    assert_eq!(first, second);
    assert_eq!(shown_first, shown_second);
}

#[rstest]
fn test_fixing_a_field_clears_its_old_error(validator: FormValidator<FixedClock>) {
    let mut form = valid_form().with_field("email", "a@b");
    assert!(!validator.validate_all(&mut form).is_valid);
    assert_eq!(form.error("email"), Some(EMAIL));

    form.set_value("email", "a@b.com");
    assert!(validator.validate_all(&mut form).is_valid);
    assert_eq!(form.error("email"), None);
}

#[rstest]
#[case("", REQUIRED)]
#[case("   ", REQUIRED)]
fn test_required_blank_on_every_kind(
    validator: FormValidator<FixedClock>,
    #[case] value: &str,
    #[case] expected: &str,
) {
    let mut form = valid_form()
        .with_field("name", value)
        .with_field("email", value)
        .with_field("event-date", value);
    validator.validate_all(&mut form);
    assert_eq!(form.error("name"), Some(expected));
    assert_eq!(form.error("email"), Some(expected));
    assert_eq!(form.error("event-date"), Some(expected));
}

#[rstest]
#[case("a@b.com", None)]
#[case("a@b", Some(EMAIL))]
#[case("a.com", Some(EMAIL))]
#[case("a@b.c ", Some(EMAIL))]
fn test_email(validator: FormValidator<FixedClock>, #[case] value: &str, #[case] expected: Option<&str>) {
    let mut form = valid_form().with_field("email", value);
    validator.validate_all(&mut form);
    assert_eq!(form.error("email"), expected);
}

#[rstest]
#[case("123-456-7890", None)]
#[case("12345", Some(PHONE))]
#[case("123-abc-7890", Some(PHONE))]
#[case("", None)]
fn test_phone(validator: FormValidator<FixedClock>, #[case] value: &str, #[case] expected: Option<&str>) {
    let mut form = valid_form().with_field("phone", value);
    validator.validate_all(&mut form);
    assert_eq!(form.error("phone"), expected);
}

#[rstest]
#[case("2026-10-17", None)]
#[case("2026-10-16", Some(DATE))]
#[case("2026-10-18", None)]
fn test_event_date(validator: FormValidator<FixedClock>, #[case] value: &str, #[case] expected: Option<&str>) {
    let mut form = valid_form().with_field("event-date", value);
    validator.validate_all(&mut form);
    assert_eq!(form.error("event-date"), expected);
}

#[rstest]
#[case("0", Some(GUESTS))]
#[case("10001", Some(GUESTS))]
#[case("1", None)]
#[case("10000", None)]
fn test_guests(validator: FormValidator<FixedClock>, #[case] value: &str, #[case] expected: Option<&str>) {
    let mut form = valid_form().with_field("guests", value);
    validator.validate_all(&mut form);
    assert_eq!(form.error("guests"), expected);
}

#[test]
fn test_range_only_applies_to_configured_guest_field() {
    let fields = vec![
        FieldDescriptor::new("guests", InputKind::Number),
        FieldDescriptor::new("tables", InputKind::Number),
    ];
    let validator = FormValidator::new(
        fields.clone(),
        &ValidationConfig::default(),
        FixedClock::ymd(2026, 10, 17),
    )
    .unwrap();
    let mut form = FormState::from_descriptors(&fields)
        .with_field("guests", "5")
        .with_field("tables", "0");
    assert!(validator.validate_all(&mut form).is_valid);
}

#[rstest]
fn test_blur_checks_format_rules_only(validator: FormValidator<FixedClock>) {
    let mut form = valid_form()
        .with_field("event-date", "2020-01-01")
        .with_field("guests", "0")
        .with_field("phone", "12345");

    assert_eq!(validator.validate_field(&mut form, "event-date"), Ok(()));
    assert_eq!(validator.validate_field(&mut form, "guests"), Ok(()));
    assert_eq!(
        validator.validate_field(&mut form, "phone"),
        Err(FieldError::InvalidPhone)
    );
    assert_eq!(form.errors(), vec![("phone", PHONE)]);
}

#[test]
fn test_blur_full_checks_when_configured() {
    let config = ValidationConfig {
        blur_checks: BlurChecks::Full,
        ..ValidationConfig::default()
    };
    let validator =
        FormValidator::new(contact_fields(), &config, FixedClock::ymd(2026, 10, 17)).unwrap();
    let mut form = valid_form().with_field("event-date", "2020-01-01");

    assert_eq!(
        validator.validate_field(&mut form, "event-date"),
        Err(FieldError::DateInPast)
    );
    assert_eq!(form.error("event-date"), Some(DATE));
}

#[rstest]
fn test_blur_replaces_previous_error(validator: FormValidator<FixedClock>) {
    let mut form = valid_form().with_field("email", "");
    validator.validate_field(&mut form, "email").unwrap_err();
    assert_eq!(form.error("email"), Some(REQUIRED));

    form.set_value("email", "a@b");
    validator.validate_field(&mut form, "email").unwrap_err();
    assert_eq!(form.error("email"), Some(EMAIL));

    form.set_value("email", "a@b.com");
    validator.validate_field(&mut form, "email").unwrap();
    assert_eq!(form.error("email"), None);
}

#[rstest]
fn test_input_clears_error_without_revalidating(validator: FormValidator<FixedClock>) {
    let mut form = valid_form().with_field("email", "a@b");
    validator.validate_all(&mut form);
    assert!(form.has_error("email"));

    // still invalid, but editing acknowledges the change
    form.set_value("email", "a@bb");
    assert!(validator.clear_field_error_on_edit(&mut form, "email"));
    assert!(!form.has_error("email"));
    assert_eq!(form.error("email"), None);
}

#[rstest]
fn test_submit_accepted_notifies_and_resets(validator: FormValidator<FixedClock>) {
    let controller = EventRequestForm::new(validator, &NotificationConfig::default());
    let mut form = valid_form();
    let mut toasts = NotificationCenter::default();

    let outcome = controller.handle_submit(&mut form, &mut toasts, 10);

    assert!(outcome.is_accepted());
    let toast = toasts.current(10).unwrap();
    assert_eq!(toast.kind, NotificationKind::Success);
    assert_eq!(
        toast.message,
        "Event request submitted successfully! We will contact you within 24 hours."
    );
    assert!(form.iter().all(|(_, field)| field.value.is_empty() && !field.has_error()));
}

#[rstest]
fn test_submit_rejected_keeps_values(validator: FormValidator<FixedClock>) {
    let controller = EventRequestForm::new(validator, &NotificationConfig::default());
    let mut form = valid_form().with_field("guests", "20000");
    let mut toasts = NotificationCenter::default();

    let outcome = controller.handle_submit(&mut form, &mut toasts, 0);

    match outcome {
        SubmitOutcome::Rejected(result) => {
            assert_eq!(
                result.errors,
                vec![(
                    "guests".to_string(),
                    FieldError::GuestsOutOfRange { min: 1, max: 10_000 }
                )]
            );
        }
        SubmitOutcome::Accepted => panic!("expected rejection"),
    }
    assert_eq!(toasts.current(0), None);
    assert_eq!(form.value("name"), Some("Ada Lovelace".to_string()));
}

#[rstest]
fn test_controller_blur_and_input(validator: FormValidator<FixedClock>) {
    let controller = EventRequestForm::new(validator, &NotificationConfig::default());
    let mut form = valid_form().with_field("name", " ");

    assert_eq!(controller.handle_blur(&mut form, "name"), Err(FieldError::Required));
    assert!(controller.handle_input(&mut form, "name"));
    assert!(!form.has_error("name"));
    assert_eq!(controller.min_event_date(), "2026-10-17");
}

#[test]
fn test_custom_guest_range_message() {
    let config = FormsConfig::from_toml_str(
        r#"
        [validation]
        guests_min = 10
        guests_max = 2500
        "#,
    )
    .unwrap();
    let fields = vec![FieldDescriptor::new("guests", InputKind::Number)];
    let validator =
        FormValidator::new(fields.clone(), &config.validation, FixedClock::ymd(2026, 10, 17))
            .unwrap();
    let mut form = FormState::from_descriptors(&fields).with_field("guests", "5");

    validator.validate_all(&mut form);
    assert_eq!(
        form.error("guests"),
        Some("Number of guests must be between 10 and 2,500")
    );
}
