//! Chat-completions transport
//!
//! Talks to an OpenAI-compatible chat-completions deployment over
//! authenticated HTTPS. Authentication is a static `api-key` header.
//!
//! Transport failures are never retried here: a network error or non-2xx
//! status is terminal for the invocation that issued it.
//!
//! # Examples
//!
//! ```no_run
//! use cct_agent::ChatClient;
//!
//! // Create a client for a fixed deployment endpoint
//! let client = ChatClient::new(
//!     "https://example.openai.azure.com/openai/deployments/gpt-4/chat/completions",
//!     "secret-key",
//! );
//!
//! // Note: the complete method is async; the CompletionService trait
//! // provides a blocking wrapper for sync contexts.
//! ```

use crate::config::AgentConfig;
use crate::error::AgentError;
use cct_domain::{CompletionRequest, CompletionService};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout in seconds; document analyses run long
pub const DEFAULT_TIMEOUT_SECS: u64 = 240;

/// Chat-completions client for a fixed deployment endpoint
pub struct ChatClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionsBody {
    messages: Vec<WireMessage>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Reply body from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionsReply {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

impl ChatClient {
    /// Create a new client with the default timeout
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new client with an explicit per-request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create a client from an agent configuration
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::with_timeout(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.request_timeout(),
        )
    }

    /// Submit one completion request and return the textual payload
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint is unreachable or the connection drops
    /// - The endpoint answers with a non-2xx status
    /// - The reply envelope is missing `choices[0].message.content`
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String, AgentError> {
        let body = ChatCompletionsBody {
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: m.content.clone(),
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            top_p: request.top_p,
            response_format: request
                .json_object
                .then_some(ResponseFormat { kind: "json_object" }),
        };

        debug!(
            "POST {} ({} messages, temperature {})",
            self.endpoint,
            request.messages.len(),
            request.temperature
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "no response body".to_string());
            return Err(AgentError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        let reply: ChatCompletionsReply = response
            .json()
            .await
            .map_err(|e| AgentError::InvalidResponse(format!("malformed reply envelope: {}", e)))?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AgentError::InvalidResponse("reply contained no choices".to_string()))
    }
}

impl CompletionService for ChatClient {
    type Error = AgentError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.complete(request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cct_domain::ChatMessage;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn extraction_request() -> CompletionRequest {
        CompletionRequest {
            messages: vec![
                ChatMessage::system("extract the schema"),
                ChatMessage::user("document body"),
            ],
            max_tokens: 4096,
            temperature: 0.2,
            top_p: 1.0,
            json_object: true,
        }
    }

    #[test]
    fn test_client_creation() {
        let client = ChatClient::new("https://example.invalid/chat", "key");
        assert_eq!(client.endpoint, "https://example.invalid/chat");
        assert_eq!(client.api_key, "key");
    }

    #[test]
    fn test_client_from_config() {
        let config = AgentConfig {
            endpoint: "https://example.invalid/chat".to_string(),
            api_key: "key".to_string(),
            ..AgentConfig::default()
        };
        let client = ChatClient::from_config(&config);
        assert_eq!(client.endpoint, config.endpoint);
    }

    #[tokio::test]
    async fn test_complete_returns_message_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("api-key", "test-key"))
            .and(body_partial_json(json!({
                "max_tokens": 4096,
                "response_format": {"type": "json_object"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "{\"a\":1}"}}
                ]
            })))
            .mount(&server)
            .await;

        let client = ChatClient::new(server.uri(), "test-key");
        let content = client.complete(&extraction_request()).await.unwrap();
        assert_eq!(content, "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_non_2xx_is_an_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = ChatClient::new(server.uri(), "test-key");
        let result = client.complete(&extraction_request()).await;

        match result {
            Err(AgentError::Http { status, detail }) => {
                assert_eq!(status, 429);
                assert_eq!(detail, "rate limited");
            }
            other => panic!("expected HTTP error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let client = ChatClient::new(server.uri(), "test-key");
        let result = client.complete(&extraction_request()).await;
        assert!(matches!(result, Err(AgentError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        // Nothing listens on this port
        let client = ChatClient::new("http://127.0.0.1:9", "test-key");
        let result = client.complete(&extraction_request()).await;
        assert!(matches!(result, Err(AgentError::Transport(_))));
    }
}
