//! Analytics hook
//!
//! Events are fire-and-forget. A missing tracker must never break the page.

/// Receives `(action, category, label)` events
pub trait AnalyticsSink {
    fn track(&self, action: &str, category: &str, label: &str);
}

/// Category of lead form events
pub const LEAD_CATEGORY: &str = "lead";

/// Category of call and messaging buttons
pub const CONTACT_CATEGORY: &str = "contact";

/// Category of runtime faults
pub const ERROR_CATEGORY: &str = "error";

/// Event names, kept stable so existing reports stay continuous
pub mod actions {
    pub const LEAD_SUBMIT: &str = "form_submission";
    pub const LEAD_INVALID: &str = "form_invalid";
    pub const CALL_CLICK: &str = "phone_call";
    pub const WHATSAPP_CLICK: &str = "whatsapp_click";
    pub const RUNTIME_FAULT: &str = "javascript_error";
}

/// Event labels naming the control that fired
pub mod labels {
    pub const QUOTE_FORM: &str = "quote_form";
    pub const CALL_BUTTON: &str = "call_button";
    pub const WHATSAPP_BUTTON: &str = "whatsapp_button";
}

/// Log a runtime fault and forward it to analytics. Never panics.
pub fn report_fault(sink: &impl AnalyticsSink, context: &str, error: &impl std::fmt::Display) {
    leptos::logging::error!("{}: {}", context, error);
    sink.track(
        actions::RUNTIME_FAULT,
        ERROR_CATEGORY,
        &format!("{}: {}", context, error),
    );
}

/// Report every panic as a runtime fault, after the hook already installed
pub fn report_panics<S>(sink: S)
where
    S: AnalyticsSink + Send + Sync + 'static,
{
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        previous(info);
        report_fault(&sink, "panic", info);
    }));
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn track(&self, _action: &str, _category: &str, _label: &str) {}
}

/// Forwards events to a global `gtag` function when the page defines one
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GtagAnalytics;

#[cfg(feature = "hydrate")]
impl AnalyticsSink for GtagAnalytics {
    fn track(&self, action: &str, category: &str, label: &str) {
        use wasm_bindgen::{JsCast, JsValue};

        let global = js_sys::global();
        let Ok(gtag) = js_sys::Reflect::get(&global, &JsValue::from_str("gtag")) else {
            return;
        };
        let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
            return;
        };

        let params = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &params,
            &JsValue::from_str("event_category"),
            &JsValue::from_str(category),
        );
        let _ = js_sys::Reflect::set(
            &params,
            &JsValue::from_str("event_label"),
            &JsValue::from_str(label),
        );

        if let Err(e) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(action),
            &params,
        ) {
            leptos::logging::warn!("gtag call failed: {:?}", e);
        }
    }
}

/// Analytics sink used by the page for the current build target
#[cfg(feature = "hydrate")]
pub fn page_analytics() -> GtagAnalytics {
    GtagAnalytics
}

/// Analytics sink used by the page for the current build target
#[cfg(not(feature = "hydrate"))]
pub fn page_analytics() -> NoopAnalytics {
    NoopAnalytics
}
