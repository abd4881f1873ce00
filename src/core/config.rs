//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::settings::LeadSettings;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Settings published to the landing page
    pub lead: LeadSettings,

    /// `tracing` filter directive, e.g. `info,bindery=debug`
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from any variable lookup
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = LeadSettings::default();
        let text = |key: &str, default: String| {
            var(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };
        let millis = |key: &str, default: u32| match var(key) {
            None => default,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("{} must be a number of milliseconds, got {:?}", key, raw);
                default
            }),
        };

        Self {
            lead: LeadSettings {
                recipient: text("LEAD_RECIPIENT", defaults.recipient),
                messaging_host: text("LEAD_MESSAGING_HOST", defaults.messaging_host),
                call_phone: text("LEAD_PHONE", defaults.call_phone),
                submit_delay_ms: millis("LEAD_SUBMIT_DELAY_MS", defaults.submit_delay_ms),
                notice_dismiss_ms: millis("LEAD_NOTICE_DISMISS_MS", defaults.notice_dismiss_ms),
            },
            log_filter: text("RUST_LOG", DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Check if the recipient was changed from the built-in default
    pub fn has_custom_recipient(&self) -> bool {
        self.lead.recipient != super::settings::DEFAULT_RECIPIENT
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_with_no_vars_uses_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.lead, LeadSettings::default());
        assert_eq!(config.log_filter, "info");
        assert!(!config.has_custom_recipient());
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = config_from(&[
            ("LEAD_RECIPIENT", "917000000000"),
            ("LEAD_MESSAGING_HOST", "api.whatsapp.com/send"),
            ("LEAD_PHONE", "+91 70000 00000"),
            ("LEAD_SUBMIT_DELAY_MS", "500"),
            ("LEAD_NOTICE_DISMISS_MS", "8000"),
            ("RUST_LOG", "debug"),
        ]);

        assert_eq!(config.lead.recipient, "917000000000");
        assert_eq!(config.lead.messaging_host, "api.whatsapp.com/send");
        assert_eq!(config.lead.call_phone, "+91 70000 00000");
        assert_eq!(config.lead.submit_delay_ms, 500);
        assert_eq!(config.lead.notice_dismiss_ms, 8000);
        assert_eq!(config.log_filter, "debug");
        assert!(config.has_custom_recipient());
    }

    #[test]
    fn test_config_with_invalid_numbers_falls_back() {
        let config = config_from(&[
            ("LEAD_SUBMIT_DELAY_MS", "soon"),
            ("LEAD_NOTICE_DISMISS_MS", "-1"),
        ]);

        assert_eq!(config.lead.submit_delay_ms, 2000);
        assert_eq!(config.lead.notice_dismiss_ms, 5000);
    }

    #[test]
    fn test_config_with_blank_strings_falls_back() {
        let config = config_from(&[("LEAD_RECIPIENT", "   "), ("RUST_LOG", "")]);

        assert_eq!(config.lead.recipient, super::super::settings::DEFAULT_RECIPIENT);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        let _ = config.has_custom_recipient();
    }
}
