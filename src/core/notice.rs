//! Toast notices and their dismissal lifecycle

/// Default time a confirmation stays on screen before it dismisses itself
pub const DEFAULT_DISMISS_MS: u32 = 5000;

/// Duration of the fade-out played before a toast is removed
pub const FADE_OUT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast to show on the landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(DEFAULT_DISMISS_MS),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: None, // Errors should be manually dismissed
        }
    }

    /// Override the auto-dismiss delay
    pub fn dismiss_after(mut self, ms: u32) -> Self {
        self.auto_dismiss_ms = Some(ms);
        self
    }

    /// Confirmation shown once the enquiry has been handed to the messaging app
    pub fn lead_sent(dismiss_ms: u32) -> Self {
        Self::success(
            "Thank you!",
            "Your enquiry is ready in WhatsApp. Send it and we'll reply shortly.",
        )
        .dismiss_after(dismiss_ms)
    }
}

/// Visibility phase of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    #[default]
    Visible,
    /// Fade-out is playing
    Exiting,
    Removed,
}

/// Dismissal state machine shared by manual and automatic dismissal.
///
/// A toast can only reach `Removed` through `Exiting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastLifecycle {
    phase: ToastPhase,
}

impl ToastLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Start the fade-out. Returns `false` if the toast was already dismissed.
    pub fn dismiss(&mut self) -> bool {
        if self.phase == ToastPhase::Visible {
            self.phase = ToastPhase::Exiting;
            true
        } else {
            false
        }
    }

    /// Finish the fade-out. Returns `false` unless the toast was exiting.
    pub fn finish_exit(&mut self) -> bool {
        if self.phase == ToastPhase::Exiting {
            self.phase = ToastPhase::Removed;
            true
        } else {
            false
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.phase == ToastPhase::Exiting
    }

    pub fn is_removed(&self) -> bool {
        self.phase == ToastPhase::Removed
    }
}
