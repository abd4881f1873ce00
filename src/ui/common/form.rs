use crate::core::Field;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full px-3 py-2.5 bg-white border border-gray-300 rounded-lg text-gray-900 \
                           placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-amber-500 \
                           focus:border-transparent transition-colors disabled:opacity-60";

/// Text input bound to one lead form field
#[component]
pub fn FormField(
    /// Form field this input edits
    field: Field,
    /// Input type (text, tel, number, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    value: RwSignal<String>,
    /// Error message shown under the input; `None` clears the marking
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = format!("lead-{}", field.as_str());
    let error_id = format!("{}-error", id);

    view! {
        <div class="space-y-1.5">
            <label for=id.clone() class="block text-sm font-medium text-gray-700">
                {field.label()}
                <span class="text-red-500 ml-0.5">"*"</span>
            </label>
            <input
                type=input_type
                id=id
                name=field.as_str()
                autocomplete=autocomplete
                class=INPUT_CLASS
                class:border-red-500=move || error.get().is_some()
                class:lead-input-error=move || error.get().is_some()
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                aria-describedby=error_id.clone()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError id=error_id error=error />
        </div>
    }
}

/// Select bound to one lead form field
#[component]
pub fn SelectField(
    /// Form field this select edits
    field: Field,
    /// Current value signal
    value: RwSignal<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
    /// Text of the empty first option
    #[prop(default = "Select an option")]
    placeholder: &'static str,
    /// Error message shown under the select
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = format!("lead-{}", field.as_str());
    let error_id = format!("{}-error", id);

    view! {
        <div class="space-y-1.5">
            <label for=id.clone() class="block text-sm font-medium text-gray-700">
                {field.label()}
                <span class="text-red-500 ml-0.5">"*"</span>
            </label>
            <select
                id=id
                name=field.as_str()
                class=INPUT_CLASS
                class:border-red-500=move || error.get().is_some()
                class:lead-input-error=move || error.get().is_some()
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                aria-describedby=error_id.clone()
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="">{placeholder}</option>
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val>{text}</option>
                    }
                }).collect_view()}
            </select>
            <FieldError id=error_id error=error />
        </div>
    }
}

/// Inline error message placed next to an input
#[component]
fn FieldError(id: String, error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div id=id class="min-h-5">
            {move || {
                error.get().map(|err| view! {
                    <p class="lead-field-error flex items-center gap-1 text-sm text-red-600">
                        <Icon name=icons::ALERT_CIRCLE class="w-4 h-4 shrink-0"/>
                        <span>{err}</span>
                    </p>
                })
            }}
        </div>
    }
}
