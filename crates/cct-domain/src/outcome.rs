//! Outcome of one agent invocation

use serde_json::Value;

/// The definitive result of one full invocation
///
/// The pipeline always resolves to one of these; no internal error ever
/// propagates to the caller. `Success` carries the parsed JSON value exactly
/// as the completion service produced it - no schema conformance is checked
/// beyond "parses as JSON".
#[derive(Debug, Clone, PartialEq)]
pub enum AgentOutcome {
    /// The response parsed as JSON, possibly after one repair call
    Success(Value),

    /// Terminal failure after at most one repair attempt
    Failure(AgentFailure),
}

/// Details of a terminal invocation failure
#[derive(Debug, Clone, PartialEq)]
pub struct AgentFailure {
    /// Why the invocation failed
    pub reason: String,

    /// The unparseable payload from the first response, when one was
    /// received; absent for transport-level failures
    pub raw_content: Option<String>,
}

impl AgentOutcome {
    /// Construct a terminal failure outcome
    pub fn failure(reason: impl Into<String>, raw_content: Option<String>) -> Self {
        AgentOutcome::Failure(AgentFailure {
            reason: reason.into(),
            raw_content,
        })
    }

    /// Whether the invocation produced a structured value
    pub fn is_success(&self) -> bool {
        matches!(self, AgentOutcome::Success(_))
    }

    /// Consume the outcome, yielding the structured value if present
    pub fn into_value(self) -> Option<Value> {
        match self {
            AgentOutcome::Success(value) => Some(value),
            AgentOutcome::Failure(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_carries_value() {
        let outcome = AgentOutcome::Success(json!({"a": 1}));
        assert!(outcome.is_success());
        assert_eq!(outcome.into_value(), Some(json!({"a": 1})));
    }

    #[test]
    fn test_failure_carries_reason_and_payload() {
        let outcome = AgentOutcome::failure("parse error", Some("{broken".to_string()));
        assert!(!outcome.is_success());
        match outcome {
            AgentOutcome::Failure(failure) => {
                assert_eq!(failure.reason, "parse error");
                assert_eq!(failure.raw_content.as_deref(), Some("{broken"));
            }
            AgentOutcome::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_transport_failure_has_no_payload() {
        let outcome = AgentOutcome::failure("connection refused", None);
        assert_eq!(outcome.into_value(), None);
    }
}
