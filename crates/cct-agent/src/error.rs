//! Error types for the agent layer

use thiserror::Error;

/// Errors raised by the completion transport and repair pipeline
///
/// None of these cross the [`crate::AgentPipeline::invoke`] boundary; the
/// pipeline converts every one of them into a terminal failure outcome.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Network-level failure reaching the completion endpoint
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx status from the completion endpoint
    #[error("HTTP {status}: {detail}")]
    Http {
        /// Status code returned by the endpoint
        status: u16,
        /// Response body, when one could be read
        detail: String,
    },

    /// Reply envelope missing the expected `choices[0].message.content`
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Payload did not parse as JSON
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// The call exceeded the configured timeout
    #[error("Completion call timed out")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AgentError {
    fn from(e: serde_json::Error) -> Self {
        AgentError::Parse(e.to_string())
    }
}
