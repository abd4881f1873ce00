//! Submission and handoff capabilities used by the lead pipeline
//!
//! The pipeline only talks to these traits, so the simulated backend and the
//! browser deep link can be swapped for real services or test doubles.

use std::future::Future;

use super::pipeline::PipelineError;
use super::validation::ValidatedLead;

/// Default artificial latency of the simulated backend
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 2000;

/// Wait without blocking the event loop
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}

/// Accepts a validated lead. Resolves once the backend has it.
pub trait LeadSubmitter {
    fn submit(&self, lead: &ValidatedLead) -> impl Future<Output = Result<(), PipelineError>>;
}

/// Stand-in backend: waits a fixed delay and performs no I/O
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY_MS)
    }
}

impl LeadSubmitter for SimulatedSubmitter {
    async fn submit(&self, _lead: &ValidatedLead) -> Result<(), PipelineError> {
        sleep_ms(self.delay_ms).await;
        Ok(())
    }
}

/// Hands a finished message to an external messaging app
pub trait MessageSender {
    fn send(&self, recipient: &str, body: &str) -> Result<(), PipelineError>;
}

/// Reason reported when the browser refuses to open the messaging window
pub const POPUP_BLOCKED: &str = "popup blocked";

/// A window that failed to open counts as a failed handoff
pub fn require_opened<W>(opened: Option<W>) -> Result<W, PipelineError> {
    opened.ok_or_else(|| PipelineError::Handoff(POPUP_BLOCKED.to_string()))
}

/// Opens the messaging deep link in a new browsing context
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct DeepLinkSender {
    host: String,
}

#[cfg(feature = "hydrate")]
impl DeepLinkSender {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

#[cfg(feature = "hydrate")]
impl MessageSender for DeepLinkSender {
    fn send(&self, recipient: &str, body: &str) -> Result<(), PipelineError> {
        let url = super::message::messaging_link(&self.host, recipient, body);
        let window = web_sys::window()
            .ok_or_else(|| PipelineError::Handoff("No window available".to_string()))?;

        // With `noopener` the result is always null, hiding blocked popups
        let opened = window
            .open_with_url_and_target(&url, "_blank")
            .map_err(|e| PipelineError::Handoff(format!("{:?}", e)))?;
        let popup = require_opened(opened)?;
        if let Err(e) = popup.set_opener(&wasm_bindgen::JsValue::NULL) {
            leptos::logging::warn!("Could not detach messaging window: {:?}", e);
        }
        Ok(())
    }
}

/// Server-side stand-in that only logs the link it would open
#[cfg(not(feature = "hydrate"))]
#[derive(Debug, Clone)]
pub struct DeepLinkSender {
    host: String,
}

#[cfg(not(feature = "hydrate"))]
impl DeepLinkSender {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

#[cfg(not(feature = "hydrate"))]
impl MessageSender for DeepLinkSender {
    fn send(&self, recipient: &str, body: &str) -> Result<(), PipelineError> {
        let url = super::message::messaging_link(&self.host, recipient, body);
        leptos::logging::log!("Would open messaging link: {}", url);
        Ok(())
    }
}
