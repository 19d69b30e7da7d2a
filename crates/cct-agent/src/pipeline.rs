//! Agent invocation and repair pipeline
//!
//! One invocation is one primary completion call, at most one corrective
//! repair call, and - when both fail to yield parseable JSON - one persisted
//! failure artifact. Every path converges to an [`AgentOutcome`]; no error
//! escapes to the caller.

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::fence::strip_code_fence;
use cct_domain::{
    AgentOutcome, AgentRequest, ChatMessage, CompletionRequest, CompletionService,
};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

/// Temperature for the corrective repair call; fully deterministic
const REPAIR_TEMPERATURE: f32 = 0.0;

/// Orchestrates one request/response cycle against the completion service
///
/// Generic over the [`CompletionService`] seam so the protocol can be
/// exercised without a network.
pub struct AgentPipeline<C>
where
    C: CompletionService,
{
    service: Arc<C>,
    config: AgentConfig,
}

impl<C> AgentPipeline<C>
where
    C: CompletionService + Send + Sync + 'static,
    C::Error: std::fmt::Display,
{
    /// Create a new pipeline over a completion service
    pub fn new(service: C, config: AgentConfig) -> Self {
        Self {
            service: Arc::new(service),
            config,
        }
    }

    /// Run one full invocation
    ///
    /// Always returns an outcome. On a terminal content failure the original
    /// unparseable payload is written to `failure_artifact_path` for manual
    /// recovery; the parent directory must already exist. A failed artifact
    /// write is logged and does not change the outcome.
    pub async fn invoke(
        &self,
        request: &AgentRequest,
        failure_artifact_path: &Path,
    ) -> AgentOutcome {
        if request.raw_text.is_empty() || request.system_prompt.is_empty() {
            return AgentOutcome::failure("document text and system prompt must be non-empty", None);
        }

        info!("Invoking specialist agent '{}'", request.agent_label);

        let primary = CompletionRequest {
            messages: vec![
                ChatMessage::system(request.system_prompt.clone()),
                ChatMessage::user(request.raw_text.clone()),
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            json_object: true,
        };

        // Transport failures are terminal; no repair, no artifact
        let content = match self.call_service(primary).await {
            Ok(content) => content,
            Err(e) => {
                error!("Agent '{}' transport failure: {}", request.agent_label, e);
                return AgentOutcome::failure(e.to_string(), None);
            }
        };

        debug!(
            "Agent '{}' replied with {} chars",
            request.agent_label,
            content.len()
        );

        let payload = strip_code_fence(&content).to_string();
        let parse_err = match serde_json::from_str::<Value>(&payload) {
            Ok(value) => {
                info!(
                    "Agent '{}' produced valid JSON on the first attempt",
                    request.agent_label
                );
                return AgentOutcome::Success(value);
            }
            Err(e) => e.to_string(),
        };

        warn!(
            "Agent '{}' returned malformed JSON ({}); attempting repair",
            request.agent_label, parse_err
        );

        match self.repair(&payload, &parse_err).await {
            Ok(value) => {
                info!(
                    "Repaired payload from agent '{}' parsed successfully",
                    request.agent_label
                );
                AgentOutcome::Success(value)
            }
            Err(e) => {
                error!("Repair failed for agent '{}': {}", request.agent_label, e);
                self.persist_artifact(&payload, failure_artifact_path);
                AgentOutcome::failure(e.to_string(), Some(payload))
            }
        }
    }

    /// Issue the single corrective call and re-parse its output
    async fn repair(&self, broken: &str, parse_err: &str) -> Result<Value, AgentError> {
        let corrective = CompletionRequest {
            messages: vec![ChatMessage::user(repair_prompt(broken, parse_err))],
            max_tokens: self.config.max_tokens,
            temperature: REPAIR_TEMPERATURE,
            top_p: self.config.top_p,
            json_object: false,
        };

        let content = self.call_service(corrective).await?;
        let repaired = strip_code_fence(&content);
        serde_json::from_str(repaired).map_err(|e| AgentError::Parse(e.to_string()))
    }

    /// Preserve the original broken payload for manual recovery
    fn persist_artifact(&self, payload: &str, path: &Path) {
        match std::fs::write(path, payload) {
            Ok(()) => warn!(
                "Unparseable payload saved for manual review at {}",
                path.display()
            ),
            Err(e) => error!(
                "Could not save failure artifact to {}: {}",
                path.display(),
                e
            ),
        }
    }

    /// Call the completion service with the configured timeout
    async fn call_service(&self, request: CompletionRequest) -> Result<String, AgentError> {
        let service = Arc::clone(&self.service);

        // Call in a blocking context since CompletionService is not async
        let call = tokio::task::spawn_blocking(move || {
            service
                .complete(&request)
                .map_err(|e| AgentError::Transport(e.to_string()))
        });

        match timeout(self.config.request_timeout(), call).await {
            Ok(joined) => {
                joined.map_err(|e| AgentError::Transport(format!("task join error: {}", e)))?
            }
            Err(_) => Err(AgentError::Timeout),
        }
    }
}

/// Corrective instruction sent on the repair call
fn repair_prompt(broken: &str, parse_err: &str) -> String {
    format!(
        r#"The following text is supposed to be a single, valid JSON object, but it failed to parse.
The parsing error was: "{parse_err}".
This kind of error is often caused by an unescaped double quote (") inside a string value.
Carefully analyze the text, correct the specific error, and fix any other syntax issues.
Return ONLY the valid JSON object. Do not add any explanation, comments, or markdown fences.
Your entire response must be only the corrected, raw JSON object.

Broken JSON text to fix:
{broken}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockCompletion;

    fn pipeline(service: MockCompletion) -> AgentPipeline<MockCompletion> {
        AgentPipeline::new(service, AgentConfig::default())
    }

    fn request() -> AgentRequest {
        AgentRequest::new("CCT document body...", "fill the payroll schema", "Payroll")
    }

    #[tokio::test]
    async fn test_empty_inputs_fail_without_a_request() {
        let service = MockCompletion::new();
        let probe = service.clone();
        let pipeline = pipeline(service);

        let empty = AgentRequest::new("", "prompt", "Payroll");
        let outcome = pipeline.invoke(&empty, Path::new("unused")).await;

        assert!(!outcome.is_success());
        assert_eq!(probe.call_count(), 0);
    }

    #[test]
    fn test_repair_prompt_embeds_error_and_payload() {
        let prompt = repair_prompt("{\"a\": broken", "expected value at line 1");
        assert!(prompt.contains("expected value at line 1"));
        assert!(prompt.contains("{\"a\": broken"));
        assert!(prompt.contains("ONLY the valid JSON object"));
    }
}
