//! Event Hub Forms WASM
//!
//! WebAssembly bindings for the event-hub form validator.
//! The host page constructs an [`EventForm`] with an explicit list of field descriptors;
//! the bindings then handle submit, blur and input events on the live form.

mod dom;
mod toast;

use dom::DomForm;
use eventhub_forms::{
    min_event_date, EventRequestForm, FieldDescriptor, FieldError, FormValidator, FormsConfig,
    InputKind, NewsletterForm, Notification, NotificationKind, Notifier, RuleScope, SystemClock,
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use toast::DomToaster;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, Window};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, error: &FieldError) -> Self {
        Self {
            field: field.to_string(),
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_config(config_toml: Option<String>) -> Result<FormsConfig, JsValue> {
    match config_toml {
        Some(text) => FormsConfig::from_toml_str(&text).map_err(|e| js_error(format!("{:#}", e))),
        None => Ok(FormsConfig::default()),
    }
}

fn browser() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| js_error("no global window"))?;
    let document = window.document().ok_or_else(|| js_error("window has no document"))?;
    Ok((window, document))
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Checks one value against a descriptor with the submit-time rule set, off-DOM
pub fn check_value(
    descriptor: &FieldDescriptor,
    value: &str,
    config: &FormsConfig,
) -> Result<Vec<ValidationError>, JsValue> {
    let validator = FormValidator::new(vec![descriptor.clone()], &config.validation, SystemClock)
        .map_err(js_error)?;

    Ok(validator
        .check_value(&descriptor.id, value, RuleScope::Full)
        .err()
        .map(|e| ValidationError::new(&descriptor.id, &e))
        .into_iter()
        .collect())
}

/// Check a single value with the submit-time rule set
///
/// # Arguments
/// * `field` - Descriptor object `{ id, type, required }`
/// * `value` - The value to check
/// * `config_toml` - Optional `eventhub.toml` text overriding rule parameters
///
/// # Returns
/// Array of validation errors (empty if valid, at most one entry)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = checkValue({ id: 'email', type: 'email', required: true }, 'a@b');
/// ```
#[wasm_bindgen(js_name = checkValue)]
pub fn check_value_js(
    field: JsValue,
    value: &str,
    config_toml: Option<String>,
) -> Result<JsValue, JsValue> {
    let descriptor: FieldDescriptor = serde_wasm_bindgen::from_value(field)
        .map_err(|e| js_error(format!("Failed to parse field: {}", e)))?;
    let config = parse_config(config_toml)?;
    let errors = check_value(&descriptor, value, &config)?;
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    eventhub_validation::is_valid_email(email)
}

/// Quick phone validation with the default minimum length
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(phone: &str) -> bool {
    eventhub_validation::is_valid_phone(phone, eventhub_validation::DEFAULT_PHONE_MIN_LENGTH)
}

/// Today's date for a date input's `min` attribute
#[wasm_bindgen(js_name = minEventDate)]
pub fn min_event_date_js() -> String {
    min_event_date(&SystemClock)
}

/// Show a toast (`type` is "success", "error" or "info")
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) -> Result<(), JsValue> {
    let kind = match kind.as_deref() {
        Some("success") => NotificationKind::Success,
        Some("error") => NotificationKind::Error,
        _ => NotificationKind::Info,
    };
    let (window, document) = browser()?;
    let mut toaster = DomToaster::new(window, document, &FormsConfig::default().notifications);
    toaster.notify(Notification::new(message, kind), now_ms());
    Ok(())
}

struct Inner {
    controller: EventRequestForm<SystemClock>,
    field_ids: Vec<String>,
    form: HtmlFormElement,
    window: Window,
    document: Document,
    config: FormsConfig,
}

impl Inner {
    fn surface(&self) -> DomForm<'_> {
        DomForm::new(&self.document, &self.form, &self.field_ids)
    }

    fn toaster(&self) -> DomToaster {
        DomToaster::new(
            self.window.clone(),
            self.document.clone(),
            &self.config.notifications,
        )
    }

    fn on_submit(&self) -> bool {
        let mut surface = self.surface();
        let mut toaster = self.toaster();
        self.controller
            .handle_submit(&mut surface, &mut toaster, now_ms())
            .is_accepted()
    }
}

/// Validation bound to a live `<form>`
#[wasm_bindgen]
pub struct EventForm {
    inner: Rc<Inner>,
}

#[wasm_bindgen]
impl EventForm {
    /// Attach validation to the form with id `form_id`.
    ///
    /// `fields` is an array of `{ id, type, required }` in document order.
    /// `config_toml` optionally overrides rule parameters and messages.
    #[wasm_bindgen(constructor)]
    pub fn new(
        form_id: &str,
        fields: JsValue,
        config_toml: Option<String>,
    ) -> Result<EventForm, JsValue> {
        let descriptors: Vec<FieldDescriptor> = serde_wasm_bindgen::from_value(fields)
            .map_err(|e| js_error(format!("Failed to parse fields: {}", e)))?;
        let config = parse_config(config_toml)?;
        let (window, document) = browser()?;

        let form = document
            .get_element_by_id(form_id)
            .ok_or_else(|| js_error(format!("no element with id '{}'", form_id)))?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| js_error(format!("'{}' is not a form", form_id)))?;

        let field_ids = descriptors.iter().map(|d| d.id.clone()).collect();
        let validator = FormValidator::new(descriptors, &config.validation, SystemClock)
            .map_err(js_error)?;
        let controller = EventRequestForm::new(validator, &config.notifications);

        let inner = Rc::new(Inner {
            controller,
            field_ids,
            form,
            window,
            document,
            config,
        });

        attach_listeners(&inner)?;
        Ok(EventForm { inner })
    }

    /// Run the submit-time pass without submitting
    pub fn validate(&self) -> bool {
        let mut surface = self.inner.surface();
        self.inner.controller.validator().validate_all(&mut surface).is_valid
    }

    /// Run the blur-time pass on one field; returns its error message, if any
    #[wasm_bindgen(js_name = validateField)]
    pub fn validate_one(&self, id: &str) -> Option<String> {
        let mut surface = self.inner.surface();
        self.inner
            .controller
            .handle_blur(&mut surface, id)
            .err()
            .map(|e| e.to_string())
    }

    /// Submit programmatically; returns whether the request was accepted
    pub fn submit(&self) -> bool {
        self.inner.on_submit()
    }
}

fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // the form lives as long as the page
    closure.forget();
    Ok(())
}

fn attach_listeners(inner: &Rc<Inner>) -> Result<(), JsValue> {
    let submit_inner = Rc::clone(inner);
    listen(&inner.form, "submit", move |event: Event| {
        event.prevent_default();
        submit_inner.on_submit();
    })?;

    let min_date = inner.controller.min_event_date();
    for descriptor in inner.controller.validator().descriptors() {
        let Some(control) = inner.document.get_element_by_id(&descriptor.id) else {
            web_sys::console::warn_1(&js_error(format!(
                "field '{}' not found, it will be skipped",
                descriptor.id
            )));
            continue;
        };

        if descriptor.kind == InputKind::Date {
            control.set_attribute("min", &min_date)?;
        }

        let id = descriptor.id.clone();
        let blur_inner = Rc::clone(inner);
        listen(&control, "blur", move |_| {
            let mut surface = blur_inner.surface();
            let _ = blur_inner.controller.handle_blur(&mut surface, &id);
        })?;

        let id = descriptor.id.clone();
        let input_inner = Rc::clone(inner);
        listen(&control, "input", move |_| {
            let mut surface = input_inner.surface();
            input_inner.controller.handle_input(&mut surface, &id);
        })?;
    }

    Ok(())
}

/// Attach the newsletter signup behaviour to a form matched by `selector`
#[wasm_bindgen(js_name = bindNewsletter)]
pub fn bind_newsletter(selector: &str, config_toml: Option<String>) -> Result<bool, JsValue> {
    let config = parse_config(config_toml)?;
    let (window, document) = browser()?;
    let Some(form) = document.query_selector(selector)? else {
        return Ok(false);
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| js_error(format!("'{}' is not a form", selector)))?;

    let newsletter = NewsletterForm::new(&config.notifications);
    let target = form.clone();
    listen(&target, "submit", move |event: Event| {
        event.prevent_default();
        let email = form
            .query_selector("input[type=\"email\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();

        let mut toaster = DomToaster::new(window.clone(), document.clone(), &config.notifications);
        if newsletter.handle_submit(&email, &mut toaster, now_ms()) {
            form.reset();
        }
    })?;

    Ok(true)
}
