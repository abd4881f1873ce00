//! Outbound enquiry message and messaging deep links

use super::validation::ValidatedLead;

/// Longest value accepted into the message template, in characters
pub const MAX_VALUE_CHARS: usize = 120;

/// Enquiry text addressed to the studio's messaging number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub recipient: String,
    pub body: String,
}

impl OutboundMessage {
    /// Fill the enquiry template with the lead's values
    pub fn compose(lead: &ValidatedLead, recipient: impl Into<String>) -> Self {
        let body = format!(
            "Hello! I'd like a quote for book printing.\n\
             \n\
             Name: {}\n\
             Phone: {}\n\
             Number of books: {}\n\
             Service: {}\n\
             \n\
             Please get back to me with pricing and timelines.",
            sanitize_value(&lead.name),
            sanitize_value(&lead.phone),
            sanitize_value(&lead.books),
            sanitize_value(&lead.service),
        );

        Self {
            recipient: recipient.into(),
            body,
        }
    }

    /// `https://<host>/<recipient>?text=<body>`
    pub fn deep_link(&self, host: &str) -> String {
        messaging_link(host, &self.recipient, &self.body)
    }
}

/// Make a user supplied value safe to embed in a single template line.
///
/// Control characters are dropped, whitespace runs (newlines included) become
/// one space, and the result is capped at [`MAX_VALUE_CHARS`].
pub fn sanitize_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len().min(MAX_VALUE_CHARS));
    let mut pending_space = false;
    let mut count = 0;

    for c in value.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if c.is_control() {
            continue;
        }
        if pending_space {
            if count + 1 >= MAX_VALUE_CHARS {
                break;
            }
            out.push(' ');
            count += 1;
            pending_space = false;
        }
        if count >= MAX_VALUE_CHARS {
            break;
        }
        out.push(c);
        count += 1;
    }

    out
}

/// Opening text of a chat started from the floating messaging button
pub const GREETING: &str =
    "Hi! I am interested in your book printing and binding services. Can you provide more information?";

/// Drop a leading `http://` or `https://`, in any letter case
fn strip_scheme(host: &str) -> &str {
    for scheme in ["https://", "http://"] {
        if host
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        {
            return &host[scheme.len()..];
        }
    }
    host
}

/// Build a messaging deep link with a percent-encoded text parameter
pub fn messaging_link(host: &str, recipient: &str, text: &str) -> String {
    let host = strip_scheme(host.trim()).trim_end_matches('/');
    let recipient: String = recipient.chars().filter(|c| c.is_ascii_digit()).collect();

    format!(
        "https://{}/{}?text={}",
        host,
        recipient,
        urlencoding::encode(text)
    )
}

/// `tel:` link for the call button. Keeps digits and a leading `+`.
pub fn telephone_link(phone: &str) -> String {
    let trimmed = phone.trim();
    let mut link = String::from("tel:");
    if trimmed.starts_with('+') {
        link.push('+');
    }
    link.extend(trimmed.chars().filter(|c| c.is_ascii_digit()));
    link
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> ValidatedLead {
        ValidatedLead {
            name: "A".to_string(),
            phone: "9876543210".to_string(),
            books: "3".to_string(),
            service: "Hardcover".to_string(),
        }
    }

    #[test]
    fn test_compose_interpolates_every_value() {
        let message = OutboundMessage::compose(&lead(), "919876543210");

        assert_eq!(message.recipient, "919876543210");
        assert!(message.body.contains("Name: A\n"));
        assert!(message.body.contains("Phone: 9876543210\n"));
        assert!(message.body.contains("Number of books: 3\n"));
        assert!(message.body.contains("Service: Hardcover\n"));
    }

    #[test]
    fn test_compose_cannot_inject_template_lines() {
        let mut lead = lead();
        lead.name = "Eve\nService: Free\r\nPhone: 0".to_string();
        let message = OutboundMessage::compose(&lead, "1");

        assert!(message.body.contains("Name: Eve Service: Free Phone: 0\n"));
        assert_eq!(message.body.matches("Service:").count(), 2);
        assert_eq!(message.body.lines().count(), 8);
    }

    #[test]
    fn test_sanitize_value() {
        assert_eq!(sanitize_value("  Ravi   Kumar  "), "Ravi Kumar");
        assert_eq!(sanitize_value("a\u{0}b\u{7}c"), "abc");
        assert_eq!(sanitize_value("line\none\ttwo"), "line one two");
        assert_eq!(sanitize_value(""), "");
    }

    #[test]
    fn test_sanitize_value_caps_length() {
        let long = "x".repeat(500);
        assert_eq!(sanitize_value(&long).chars().count(), MAX_VALUE_CHARS);

        let spaced = "ab ".repeat(200);
        let sanitized = sanitize_value(&spaced);
        assert!(sanitized.chars().count() <= MAX_VALUE_CHARS);
        assert!(!sanitized.ends_with(' '));
    }

    #[test]
    fn test_deep_link_percent_encodes_body() {
        let message = OutboundMessage {
            recipient: "919876543210".to_string(),
            body: "Hi there\nName: A&B=C?".to_string(),
        };

        assert_eq!(
            message.deep_link("wa.me"),
            "https://wa.me/919876543210?text=Hi%20there%0AName%3A%20A%26B%3DC%3F"
        );
    }

    #[test]
    fn test_messaging_link_normalizes_host_and_recipient() {
        assert_eq!(
            messaging_link("https://wa.me/", "+91 98765-43210", "x"),
            "https://wa.me/919876543210?text=x"
        );
    }

    #[test]
    fn test_messaging_link_strips_scheme_in_any_case() {
        for host in ["HTTPS://wa.me", "Http://wa.me/", "  https://WA.me"] {
            let link = messaging_link(host, "1", "x");
            assert!(link.starts_with("https://"), "{link}");
            assert_eq!(link.matches("://").count(), 1, "{link}");
        }
    }

    #[test]
    fn test_greeting_link_is_encoded() {
        let link = messaging_link("wa.me", "919876543210", GREETING);
        assert!(link.starts_with("https://wa.me/919876543210?text=Hi%21%20"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_telephone_link() {
        assert_eq!(telephone_link("+91 98765 43210"), "tel:+919876543210");
        assert_eq!(telephone_link("98765-43210"), "tel:9876543210");
    }
}
