//! Request value object for one agent invocation

/// One invocation of a specialist agent
///
/// Immutable once constructed; the caller builds a fresh request per
/// invocation. The pipeline requires `raw_text` and `system_prompt` to be
/// non-empty.
#[derive(Debug, Clone)]
pub struct AgentRequest {
    /// Full extracted text of the source document
    pub raw_text: String,

    /// System-role instructions, including the serialized target schema
    pub system_prompt: String,

    /// Which specialist role is being invoked; diagnostics only
    pub agent_label: String,
}

impl AgentRequest {
    /// Create a new invocation request
    pub fn new(
        raw_text: impl Into<String>,
        system_prompt: impl Into<String>,
        agent_label: impl Into<String>,
    ) -> Self {
        Self {
            raw_text: raw_text.into(),
            system_prompt: system_prompt.into(),
            agent_label: agent_label.into(),
        }
    }
}
