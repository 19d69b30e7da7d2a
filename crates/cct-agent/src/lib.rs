//! CCT Agent Layer
//!
//! Agent invocation and repair pipeline: one request/response cycle against
//! a text-completion endpoint, structural validation of the reply, and a
//! single corrective repair call before a terminal failure is surfaced with
//! a persisted artifact.
//!
//! # Architecture
//!
//! ```text
//! AgentRequest → ChatClient → payload → fence strip → JSON parse
//!                                            │ parse error
//!                                            ▼
//!                                   one repair call → JSON parse
//!                                            │ still broken
//!                                            ▼
//!                              failure artifact + AgentOutcome::Failure
//! ```
//!
//! The pipeline is generic over the [`CompletionService`] seam from
//! `cct-domain`; [`ChatClient`] is the HTTPS implementation and
//! [`MockCompletion`] a scripted one for tests.
//!
//! # Examples
//!
//! ```
//! use cct_agent::{AgentConfig, AgentPipeline, MockCompletion};
//! use cct_domain::AgentRequest;
//!
//! # async fn example() {
//! let service = MockCompletion::new();
//! service.push_response(r#"{"status": "ok"}"#);
//!
//! let pipeline = AgentPipeline::new(service, AgentConfig::default());
//! let request = AgentRequest::new("document text", "extraction prompt", "Payroll");
//!
//! let outcome = pipeline
//!     .invoke(&request, std::path::Path::new("failed_payroll.json"))
//!     .await;
//! assert!(outcome.is_success());
//! # }
//! ```

#![warn(missing_docs)]

pub mod chat;
pub mod config;
pub mod error;
pub mod fence;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use chat::ChatClient;
pub use config::AgentConfig;
pub use error::AgentError;
pub use fence::strip_code_fence;
pub use pipeline::AgentPipeline;

use cct_domain::{CompletionRequest, CompletionService};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted completion service for deterministic testing
///
/// Replies are queued and consumed in call order, which is what the repair
/// protocol needs: the first queued entry answers the primary request, the
/// second answers the repair request. An exhausted script answers with a
/// transport error.
///
/// # Examples
///
/// ```
/// use cct_agent::MockCompletion;
/// use cct_domain::{ChatMessage, CompletionRequest, CompletionService};
///
/// let service = MockCompletion::new();
/// service.push_response("first reply");
/// service.push_response("second reply");
///
/// let request = CompletionRequest {
///     messages: vec![ChatMessage::user("hi")],
///     max_tokens: 64,
///     temperature: 0.0,
///     top_p: 1.0,
///     json_object: false,
/// };
/// assert_eq!(service.complete(&request).unwrap(), "first reply");
/// assert_eq!(service.complete(&request).unwrap(), "second reply");
/// assert_eq!(service.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCompletion {
    script: Arc<Mutex<VecDeque<Result<String, String>>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletion {
    /// Create a mock with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn push_response(&self, content: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(content.into()));
    }

    /// Queue a transport-level failure
    pub fn push_error(&self, reason: impl Into<String>) {
        self.script.lock().unwrap().push_back(Err(reason.into()));
    }

    /// Number of requests submitted so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The request submitted on the given call, if one was made
    pub fn request(&self, index: usize) -> Option<CompletionRequest> {
        self.calls.lock().unwrap().get(index).cloned()
    }
}

impl CompletionService for MockCompletion {
    type Error = AgentError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(request.clone());

        match self.script.lock().unwrap().pop_front() {
            Some(Ok(content)) => Ok(content),
            Some(Err(reason)) => Err(AgentError::Transport(reason)),
            None => Err(AgentError::Transport("mock script exhausted".to_string())),
        }
    }
}
