//! Integration tests for the invocation and repair protocol

#[cfg(test)]
mod tests {
    use crate::{AgentConfig, AgentPipeline, MockCompletion};
    use cct_domain::{AgentOutcome, AgentRequest, Role};
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn payroll_request() -> AgentRequest {
        AgentRequest::new(
            "CCT document body...",
            "fill the payroll schema",
            "Payroll",
        )
    }

    fn artifact_in(dir: &TempDir) -> PathBuf {
        dir.path().join("failed_payroll.json")
    }

    fn pipeline(service: MockCompletion) -> AgentPipeline<MockCompletion> {
        AgentPipeline::new(service, AgentConfig::default())
    }

    #[tokio::test]
    async fn test_valid_first_reply_is_returned_unchanged() {
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_response(r#"{"validity": "2025", "floors": [{"job": "driver"}]}"#);
        let probe = service.clone();

        let outcome = pipeline(service)
            .invoke(&payroll_request(), &artifact_in(&dir))
            .await;

        assert_eq!(
            outcome,
            AgentOutcome::Success(json!({"validity": "2025", "floors": [{"job": "driver"}]}))
        );
        assert_eq!(probe.call_count(), 1);
        assert!(!artifact_in(&dir).exists());
    }

    #[tokio::test]
    async fn test_fenced_reply_is_unwrapped() {
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_response("```json\n{\"a\":1}\n```");

        let outcome = pipeline(service)
            .invoke(&payroll_request(), &artifact_in(&dir))
            .await;

        assert_eq!(outcome, AgentOutcome::Success(json!({"a": 1})));
    }

    #[tokio::test]
    async fn test_repair_recovers_a_near_miss() {
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_response(r#"{"a": "unterminated"#);
        service.push_response(r#"{"a": "fixed"}"#);
        let probe = service.clone();

        let outcome = pipeline(service)
            .invoke(&payroll_request(), &artifact_in(&dir))
            .await;

        assert_eq!(outcome, AgentOutcome::Success(json!({"a": "fixed"})));
        assert_eq!(probe.call_count(), 2);
        // A recovered invocation must leave no artifact behind
        assert!(!artifact_in(&dir).exists());
    }

    #[tokio::test]
    async fn test_exhausted_repair_persists_the_original_payload() {
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_response(r#"{"a": "unterminated"#);
        service.push_response(r#"{"a": "unterminated"#);
        let probe = service.clone();

        let outcome = pipeline(service)
            .invoke(&payroll_request(), &artifact_in(&dir))
            .await;

        match outcome {
            AgentOutcome::Failure(failure) => {
                assert_eq!(failure.raw_content.as_deref(), Some(r#"{"a": "unterminated"#));
            }
            AgentOutcome::Success(_) => panic!("expected terminal failure"),
        }
        assert_eq!(probe.call_count(), 2);

        let artifact = std::fs::read_to_string(artifact_in(&dir)).unwrap();
        assert_eq!(artifact, r#"{"a": "unterminated"#);
    }

    #[tokio::test]
    async fn test_artifact_holds_first_payload_not_the_repair_attempt() {
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_response("{broken: one");
        service.push_response("{broken: two");

        pipeline(service)
            .invoke(&payroll_request(), &artifact_in(&dir))
            .await;

        let artifact = std::fs::read_to_string(artifact_in(&dir)).unwrap();
        assert_eq!(artifact, "{broken: one");
    }

    #[tokio::test]
    async fn test_primary_transport_failure_skips_repair() {
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_error("connection refused");
        let probe = service.clone();

        let outcome = pipeline(service)
            .invoke(&payroll_request(), &artifact_in(&dir))
            .await;

        match outcome {
            AgentOutcome::Failure(failure) => {
                assert!(failure.reason.contains("connection refused"));
                assert_eq!(failure.raw_content, None);
            }
            AgentOutcome::Success(_) => panic!("expected transport failure"),
        }
        assert_eq!(probe.call_count(), 1);
        assert!(!artifact_in(&dir).exists());
    }

    #[tokio::test]
    async fn test_repair_transport_failure_is_terminal_with_artifact() {
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_response("{broken");
        service.push_error("connection reset during repair");

        let outcome = pipeline(service)
            .invoke(&payroll_request(), &artifact_in(&dir))
            .await;

        assert!(!outcome.is_success());
        let artifact = std::fs::read_to_string(artifact_in(&dir)).unwrap();
        assert_eq!(artifact, "{broken");
    }

    #[tokio::test]
    async fn test_primary_request_shape() {
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_response("{}");
        let probe = service.clone();

        pipeline(service)
            .invoke(&payroll_request(), &artifact_in(&dir))
            .await;

        let primary = probe.request(0).unwrap();
        assert_eq!(primary.messages.len(), 2);
        assert_eq!(primary.messages[0].role, Role::System);
        assert_eq!(primary.messages[0].content, "fill the payroll schema");
        assert_eq!(primary.messages[1].role, Role::User);
        assert_eq!(primary.messages[1].content, "CCT document body...");
        assert!(primary.json_object);
    }

    #[tokio::test]
    async fn test_repair_request_shape() {
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_response("{broken payload");
        service.push_response("{}");
        let probe = service.clone();

        pipeline(service)
            .invoke(&payroll_request(), &artifact_in(&dir))
            .await;

        // A single user-role corrective instruction, fully deterministic
        let repair = probe.request(1).unwrap();
        assert_eq!(repair.messages.len(), 1);
        assert_eq!(repair.messages[0].role, Role::User);
        assert!(repair.messages[0].content.contains("{broken payload"));
        assert!(repair.messages[0].content.contains("failed to parse"));
        assert_eq!(repair.temperature, 0.0);
        assert!(!repair.json_object);
    }

    #[tokio::test]
    async fn test_unwritable_artifact_path_still_returns_failure() {
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_response("{broken");
        service.push_response("{still broken");

        // Parent directory does not exist; the write fails and is logged
        let missing = dir.path().join("no_such_dir").join("artifact.json");
        let outcome = pipeline(service).invoke(&payroll_request(), &missing).await;

        assert!(!outcome.is_success());
        assert!(!missing.exists());
    }

    #[tokio::test]
    async fn test_fenced_repair_reply_is_unwrapped() {
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_response("{broken");
        service.push_response("```json\n{\"a\": \"fixed\"}\n```");

        let outcome = pipeline(service)
            .invoke(&payroll_request(), &artifact_in(&dir))
            .await;

        assert_eq!(outcome, AgentOutcome::Success(json!({"a": "fixed"})));
    }

    #[tokio::test]
    async fn test_non_object_json_still_counts_as_parsed() {
        // Contract is parse-validity only; an array passes through
        let dir = TempDir::new().unwrap();
        let service = MockCompletion::new();
        service.push_response("[1, 2, 3]");

        let outcome = pipeline(service)
            .invoke(&payroll_request(), &artifact_in(&dir))
            .await;

        assert_eq!(outcome, AgentOutcome::Success(json!([1, 2, 3])));
    }
}
