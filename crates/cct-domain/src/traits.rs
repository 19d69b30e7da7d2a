//! Trait definitions for external interactions
//!
//! These traits define the boundary between the pipeline and infrastructure.
//! Implementations live in other crates.

/// Message role in a completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Instruction role carrying the prompt and target schema
    System,
    /// Payload role carrying the document text or corrective instruction
    User,
}

impl Role {
    /// Wire identifier for the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

/// One role/content pair in the ordered message list
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Message role
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a system-role message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A fully-specified completion request
///
/// The pipeline constructs one of these per call: a system/user pair for the
/// primary extraction request, a single user-role corrective instruction for
/// the repair request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Ordered role/content pairs
    pub messages: Vec<ChatMessage>,

    /// Completion length cap
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Nucleus sampling parameter
    pub top_p: f32,

    /// Ask the service to constrain output to a JSON object, where the
    /// transport supports that constraint
    pub json_object: bool,
}

/// Trait for the external text-completion service
///
/// Implemented by the transport layer (`cct-agent`). A transport-level
/// problem - network failure, non-2xx status, malformed reply envelope -
/// surfaces as `Self::Error`; the content of a successful reply is returned
/// verbatim with no shape validation.
pub trait CompletionService {
    /// Error type for transport operations
    type Error;

    /// Submit one completion request and return the textual payload
    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;
}
