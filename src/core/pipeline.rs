//! Lead capture pipeline
//!
//! Drives one enquiry from the raw form values to the messaging handoff:
//!
//! ```text
//! Idle -> Validating -> Idle                (validation failed, errors shown)
//!                    -> Pending -> Idle     (handed off, form reset)
//! ```
//!
//! The pipeline owns its state, so a second submission while one is in flight
//! is rejected instead of being run twice.

use std::cell::Cell;

use super::analytics::{
    AnalyticsSink, LEAD_CATEGORY, NoopAnalytics, actions, labels, report_fault,
};
use super::lead::FormInput;
use super::message::OutboundMessage;
use super::submit::{LeadSubmitter, MessageSender};
use super::validation::{ValidationResult, validate_lead};

/// Where the pipeline currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Validating,
    /// Waiting for the backend; the submit control stays disabled
    Pending,
}

impl PipelineState {
    pub fn is_busy(&self) -> bool {
        *self != PipelineState::Idle
    }
}

/// Failures that are not field validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("A submission is already in progress")]
    Busy,

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Could not open the messaging app: {0}")]
    Handoff(String),
}

/// Result of a submission that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was submitted
    Rejected(ValidationResult),
    /// The message was handed to the messaging app
    Sent(OutboundMessage),
}

/// Listener for pipeline progress. Every method defaults to a no-op.
pub trait PipelineObserver {
    fn on_state(&self, _state: PipelineState) {}

    /// Called with every validation result, passing or not
    fn on_validated(&self, _result: &ValidationResult) {}

    /// Called once after a successful handoff
    fn on_handoff(&self, _message: &OutboundMessage) {}

    fn on_fault(&self, _error: &PipelineError) {}
}

impl PipelineObserver for () {}

/// Returns the pipeline to `Idle` when dropped
struct IdleOnDrop<'a> {
    state: &'a Cell<PipelineState>,
    observer: &'a dyn PipelineObserver,
}

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.state.set(PipelineState::Idle);
        self.observer.on_state(PipelineState::Idle);
    }
}

pub struct LeadPipeline<S, M, O = (), A = NoopAnalytics> {
    submitter: S,
    sender: M,
    observer: O,
    analytics: A,
    recipient: String,
    state: Cell<PipelineState>,
}

impl<S, M> LeadPipeline<S, M>
where
    S: LeadSubmitter,
    M: MessageSender,
{
    pub fn new(submitter: S, sender: M, recipient: impl Into<String>) -> Self {
        Self {
            submitter,
            sender,
            observer: (),
            analytics: NoopAnalytics,
            recipient: recipient.into(),
            state: Cell::new(PipelineState::Idle),
        }
    }
}

impl<S, M, O, A> LeadPipeline<S, M, O, A>
where
    S: LeadSubmitter,
    M: MessageSender,
    O: PipelineObserver,
    A: AnalyticsSink,
{
    pub fn with_observer<O2: PipelineObserver>(self, observer: O2) -> LeadPipeline<S, M, O2, A> {
        LeadPipeline {
            submitter: self.submitter,
            sender: self.sender,
            observer,
            analytics: self.analytics,
            recipient: self.recipient,
            state: self.state,
        }
    }

    pub fn with_analytics<A2: AnalyticsSink>(self, analytics: A2) -> LeadPipeline<S, M, O, A2> {
        LeadPipeline {
            submitter: self.submitter,
            sender: self.sender,
            observer: self.observer,
            analytics,
            recipient: self.recipient,
            state: self.state,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state.get()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn sender(&self) -> &M {
        &self.sender
    }

    fn set_state(&self, state: PipelineState) {
        self.state.set(state);
        self.observer.on_state(state);
    }

    /// Run one submission.
    ///
    /// Validation failures come back as [`SubmitOutcome::Rejected`]. Errors are
    /// reserved for runtime faults and for [`PipelineError::Busy`].
    pub async fn submit(&self, input: FormInput) -> Result<SubmitOutcome, PipelineError> {
        if self.state.get().is_busy() {
            leptos::logging::warn!("Ignoring lead submission while another is in progress");
            return Err(PipelineError::Busy);
        }

        self.set_state(PipelineState::Validating);
        let result = validate_lead(&input);
        self.observer.on_validated(&result);

        let lead = match result.into_lead(&input) {
            Ok(lead) => lead,
            Err(rejected) => {
                let label = rejected
                    .failed_fields()
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                self.analytics
                    .track(actions::LEAD_INVALID, LEAD_CATEGORY, &label);
                self.set_state(PipelineState::Idle);
                return Ok(SubmitOutcome::Rejected(rejected));
            }
        };

        self.set_state(PipelineState::Pending);
        let outcome = {
            // Also resets the state if this future is dropped mid-flight
            let _idle = IdleOnDrop {
                state: &self.state,
                observer: &self.observer,
            };
            async {
                self.submitter.submit(&lead).await?;
                let message = OutboundMessage::compose(&lead, self.recipient.as_str());
                self.sender.send(&message.recipient, &message.body)?;
                Ok::<_, PipelineError>(message)
            }
            .await
        };

        match outcome {
            Ok(message) => {
                self.observer.on_handoff(&message);
                self.analytics
                    .track(actions::LEAD_SUBMIT, LEAD_CATEGORY, labels::QUOTE_FORM);
                Ok(SubmitOutcome::Sent(message))
            }
            Err(e) => {
                report_fault(&self.analytics, "lead_form", &e);
                self.observer.on_fault(&e);
                Err(e)
            }
        }
    }
}
