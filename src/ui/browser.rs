//! Small DOM helpers used by the landing page
//!
//! On the server these are no-ops; the page only becomes interactive once
//! hydrated.

#[cfg(feature = "hydrate")]
use leptos::web_sys;

/// Set the `overflow` style of `<body>`
pub fn set_body_overflow(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body
            && let Err(e) = body.style().set_property("overflow", value)
        {
            leptos::logging::warn!("Failed to set body overflow: {:?}", e);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = value;
}

/// Navigate the current page to a `tel:` link
pub fn dial(link: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or("No window available")?;
        window
            .location()
            .set_href(link)
            .map_err(|e| format!("{:?}", e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("Would dial {}", link);
        Ok(())
    }
}

/// Run `on_visible` once, the first time `element` scrolls into view
#[cfg(feature = "hydrate")]
pub fn on_first_visible(element: &web_sys::Element, on_visible: impl FnOnce() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let mut on_visible = Some(on_visible);
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if visible && let Some(run) = on_visible.take() {
                observer.disconnect();
                run();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.3));

    match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer.observe(element),
        Err(e) => leptos::logging::warn!("IntersectionObserver unavailable: {:?}", e),
    }

    // Keep the closure alive
    callback.forget();
}
