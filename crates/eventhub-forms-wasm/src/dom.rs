//! DOM-backed form surface
//!
//! Each field is the element whose id matches its descriptor. Its error slot is the
//! `.error-message` element inside the nearest `.form-group` ancestor.

use eventhub_forms::FormSurface;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

pub const GROUP_SELECTOR: &str = ".form-group";
pub const ERROR_SLOT_SELECTOR: &str = ".error-message";
pub const ERROR_CLASS: &str = "error";

/// A live `<form>` plus the ids of the fields the validator knows about.
///
/// Built fresh for every event; it caches nothing from the page.
pub struct DomForm<'a> {
    document: &'a Document,
    form: &'a HtmlFormElement,
    field_ids: &'a [String],
}

impl<'a> DomForm<'a> {
    pub fn new(document: &'a Document, form: &'a HtmlFormElement, field_ids: &'a [String]) -> Self {
        Self {
            document,
            form,
            field_ids,
        }
    }

    fn control(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn error_slot(control: &Element) -> Option<Element> {
        control
            .closest(GROUP_SELECTOR)
            .ok()
            .flatten()?
            .query_selector(ERROR_SLOT_SELECTOR)
            .ok()
            .flatten()
    }

    fn set_slot(control: &Element, message: Option<&str>) {
        // marker and text always change together
        let classes = control.class_list();
        let _ = match message {
            Some(_) => classes.add_1(ERROR_CLASS),
            None => classes.remove_1(ERROR_CLASS),
        };

        if let Some(slot) = Self::error_slot(control) {
            slot.set_text_content(Some(message.unwrap_or("")));
            if let Some(slot) = slot.dyn_ref::<HtmlElement>() {
                let opacity = if message.is_some() { "1" } else { "0" };
                let _ = slot.style().set_property("opacity", opacity);
            }
        }
    }
}

/// Reads the value of an input, select or textarea
pub fn control_value(control: &Element) -> Option<String> {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else {
        control
            .dyn_ref::<HtmlTextAreaElement>()
            .map(HtmlTextAreaElement::value)
    }
}

impl FormSurface for DomForm<'_> {
    fn value(&self, id: &str) -> Option<String> {
        self.control(id).as_ref().and_then(control_value)
    }

    fn show_error(&mut self, id: &str, message: &str) {
        if let Some(control) = self.control(id) {
            Self::set_slot(&control, Some(message));
        }
    }

    fn clear_error(&mut self, id: &str) {
        if let Some(control) = self.control(id) {
            Self::set_slot(&control, None);
        }
    }

    fn has_error(&self, id: &str) -> bool {
        self.control(id)
            .is_some_and(|control| control.class_list().contains(ERROR_CLASS))
    }

    fn reset(&mut self) {
        self.form.reset();
        for id in self.field_ids {
            self.clear_error(id);
        }
    }
}
