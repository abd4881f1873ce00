//! Public lead form settings shared by the server render and the browser
//!
//! The server embeds these as JSON in the page shell so the hydrated client
//! uses the same values the server was configured with.

use serde::{Deserialize, Serialize};

use super::notice::DEFAULT_DISMISS_MS;
use super::submit::DEFAULT_SUBMIT_DELAY_MS;

/// `id` of the `<script type="application/json">` element holding the settings
pub const SETTINGS_ELEMENT_ID: &str = "lead-settings";

pub const DEFAULT_RECIPIENT: &str = "919876543210";
pub const DEFAULT_MESSAGING_HOST: &str = "wa.me";
pub const DEFAULT_CALL_PHONE: &str = "+919876543210";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadSettings {
    /// Messaging number that receives enquiries
    pub recipient: String,
    /// Host of the messaging deep link
    pub messaging_host: String,
    /// Number dialled by the call button
    pub call_phone: String,
    pub submit_delay_ms: u32,
    pub notice_dismiss_ms: u32,
}

impl Default for LeadSettings {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            messaging_host: DEFAULT_MESSAGING_HOST.to_string(),
            call_phone: DEFAULT_CALL_PHONE.to_string(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            notice_dismiss_ms: DEFAULT_DISMISS_MS,
        }
    }
}

impl LeadSettings {
    /// Serialise for embedding in the page
    pub fn to_json(&self) -> String {
        // `</` would close the surrounding script element early
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace("</", "<\\/")
    }

    /// Parse embedded settings; anything unreadable falls back to defaults
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            leptos::logging::warn!("Invalid lead settings, using defaults: {}", e);
            Self::default()
        })
    }

    /// Read the settings embedded by the server render
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SETTINGS_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .map(|json| Self::from_json(&json))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LeadSettings::default();
        assert_eq!(settings.messaging_host, "wa.me");
        assert_eq!(settings.submit_delay_ms, 2000);
        assert_eq!(settings.notice_dismiss_ms, 5000);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = LeadSettings {
            recipient: "911234567890".to_string(),
            ..LeadSettings::default()
        };
        assert_eq!(LeadSettings::from_json(&settings.to_json()), settings);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = LeadSettings::from_json(r#"{"recipient":"917000000000"}"#);
        assert_eq!(settings.recipient, "917000000000");
        assert_eq!(settings.messaging_host, DEFAULT_MESSAGING_HOST);
    }

    #[test]
    fn test_garbage_json_falls_back() {
        assert_eq!(LeadSettings::from_json("not json"), LeadSettings::default());
    }

    #[test]
    fn test_to_json_cannot_close_script() {
        let settings = LeadSettings {
            messaging_host: "</script><script>".to_string(),
            ..LeadSettings::default()
        };
        let json = settings.to_json();
        assert!(!json.contains("</"));
        assert_eq!(LeadSettings::from_json(&json), settings);
    }
}
