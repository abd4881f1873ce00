//! Floating WhatsApp button
//!
//! Fixed to the bottom-right corner. It fades in a few seconds after load,
//! bounces now and then to draw attention, and opens a chat with a greeting.

use leptos::prelude::*;

use crate::core::{
    AnalyticsSink, CONTACT_CATEGORY, DeepLinkSender, GREETING, LeadSettings, MessageSender,
    actions, labels, messaging_link, page_analytics, report_fault,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Delay before the button appears
pub const ENTRANCE_DELAY_MS: u32 = 3000;

/// Time between two attention bounces
pub const BOUNCE_INTERVAL_MS: u32 = 15000;

/// Length of the bounce animation
pub const BOUNCE_MS: u32 = 1000;

/// Link opened by the button; also its `href` before hydration
fn greeting_link(settings: &LeadSettings) -> String {
    messaging_link(&settings.messaging_host, &settings.recipient, GREETING)
}

#[component]
pub fn FloatingWhatsApp(settings: LeadSettings) -> impl IntoView {
    let notifications = use_notifications();
    let shown = RwSignal::new(false);
    let bouncing = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::core::sleep_ms;

        leptos::task::spawn_local(async move {
            sleep_ms(ENTRANCE_DELAY_MS).await;
            if shown.try_set(true).is_some() {
                return;
            }
            loop {
                sleep_ms(BOUNCE_INTERVAL_MS).await;
                if bouncing.try_set(true).is_some() {
                    break;
                }
                sleep_ms(BOUNCE_MS).await;
                if bouncing.try_set(false).is_some() {
                    break;
                }
            }
        });
    }

    let href = greeting_link(&settings);
    let sender = DeepLinkSender::new(settings.messaging_host.clone());
    let recipient = settings.recipient;

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let analytics = page_analytics();
        analytics.track(
            actions::WHATSAPP_CLICK,
            CONTACT_CATEGORY,
            labels::WHATSAPP_BUTTON,
        );
        if let Err(e) = sender.send(&recipient, GREETING) {
            report_fault(&analytics, "whatsapp_button", &e);
            notifications.error("Could not open WhatsApp", e.to_string());
        }
    };

    view! {
        <a
            href=href
            target="_blank"
            rel="noopener"
            class="landing-whatsapp-float fixed bottom-6 right-6 z-40 w-14 h-14 rounded-full bg-green-500 hover:bg-green-600 text-white shadow-lg flex items-center justify-center"
            class:shown=move || shown.get()
            class:bouncing=move || bouncing.get()
            aria-label="Chat with us on WhatsApp"
            on:click=on_click
        >
            <Icon name=icons::MESSAGE class="w-7 h-7" />
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_link_uses_configured_chat() {
        let settings = LeadSettings {
            recipient: "+91 90000 00001".to_string(),
            messaging_host: "https://chat.example/".to_string(),
            ..LeadSettings::default()
        };

        let link = greeting_link(&settings);

        assert!(link.starts_with("https://chat.example/919000000001?text=Hi%21"));
    }
}
