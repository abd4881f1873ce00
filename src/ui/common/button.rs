use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "landing-btn-primary",
            ButtonVariant::Secondary => "landing-btn-secondary",
        }
    }
}

/// Form submit button that swaps to a busy label while `pending`.
///
/// The button is disabled for as long as `pending` is true.
#[component]
pub fn SubmitButton(
    /// Whether a submission is in flight
    #[prop(into)]
    pending: Signal<bool>,
    /// Label shown while idle
    label: &'static str,
    /// Label shown while pending
    #[prop(default = "Sending...")]
    busy_label: &'static str,
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let full_classes = format!(
        "{} inline-flex items-center justify-center gap-2 disabled:opacity-60 disabled:cursor-not-allowed {}",
        variant.class(),
        class
    );

    view! {
        <button
            type="submit"
            class=full_classes
            disabled=move || pending.get()
            aria-busy=move || if pending.get() { "true" } else { "false" }
        >
            {move || if pending.get() {
                view! {
                    <Icon name=icons::LOADER class="w-5 h-5 animate-spin" />
                    <span>{busy_label}</span>
                }.into_any()
            } else {
                view! { <span>{label}</span> }.into_any()
            }}
        </button>
    }
}

/// Link styled as a button, with an optional leading icon
#[component]
pub fn LinkButton(
    href: String,
    #[prop(default = ButtonVariant::Secondary)]
    variant: ButtonVariant,
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Optional aria label
    #[prop(optional)]
    aria_label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let classes = format!("{} inline-flex items-center gap-2", variant.class());

    view! {
        <a
            href=href
            class=classes
            aria-label=aria_label
        >
            {icon.map(|name| view! { <Icon name=name class="w-5 h-5" /> })}
            {children()}
        </a>
    }
}
