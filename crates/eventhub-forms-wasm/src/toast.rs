//! Toast rendering for the browser

use eventhub_forms::{Notification, NotificationConfig, Notifier};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

const TOAST_SELECTOR: &str = ".notification";

/// Renders notifications as a fixed-position toast; a new toast removes the old one
pub struct DomToaster {
    window: Window,
    document: Document,
    visible_ms: u64,
    lifetime_ms: u64,
}

impl DomToaster {
    pub fn new(window: Window, document: Document, config: &NotificationConfig) -> Self {
        Self {
            window,
            document,
            visible_ms: config.visible_ms,
            lifetime_ms: config.visible_ms.saturating_add(config.exit_ms),
        }
    }

    fn build(&self, notification: &Notification) -> Result<Element, JsValue> {
        let toast = self.document.create_element("div")?;
        toast.set_class_name(&notification.kind.class_name());
        toast.set_text_content(Some(&notification.message));

        if let Some(el) = toast.dyn_ref::<HtmlElement>() {
            let style = el.style();
            style.set_property("position", "fixed")?;
            style.set_property("top", "20px")?;
            style.set_property("right", "20px")?;
            style.set_property("padding", "1rem 2rem")?;
            style.set_property("background", notification.kind.background())?;
            style.set_property("color", "white")?;
            style.set_property("border-radius", "10px")?;
            style.set_property("z-index", "10000")?;
            style.set_property("max-width", "300px")?;
            style.set_property("animation", "slideInRight 0.3s ease")?;
        }

        Ok(toast)
    }

    fn schedule(&self, delay_ms: u64, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
        let callback = Closure::once_into_js(f);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)?;
        Ok(())
    }

    fn show(&self, notification: &Notification) -> Result<(), JsValue> {
        if let Some(existing) = self.document.query_selector(TOAST_SELECTOR)? {
            existing.remove();
        }

        let toast = self.build(notification)?;
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&toast)?;

        let leaving = toast.clone();
        self.schedule(self.visible_ms, move || {
            if let Some(el) = leaving.dyn_ref::<HtmlElement>() {
                let _ = el.style().set_property("animation", "slideOutRight 0.3s ease");
            }
        })?;
        self.schedule(self.lifetime_ms, move || toast.remove())
    }
}

impl Notifier for DomToaster {
    // The page itself is the single slot: `show` removes any toast already there.
    fn notify(&mut self, notification: Notification, _now_ms: u64) {
        if let Err(err) = self.show(&notification) {
            web_sys::console::warn_2(&JsValue::from_str("failed to show notification:"), &err);
        }
    }
}
