//! CCT Domain Layer
//!
//! Core value objects and trait seams for the collective-agreement
//! diagnostic pipeline. Everything here is ephemeral and scoped to a single
//! agent invocation; nothing survives across calls except the optional
//! failure artifact file, which is written by the pipeline layer.
//!
//! ## Key Concepts
//!
//! - **AgentRequest**: one invocation of a specialist agent against a
//!   document's extracted text
//! - **AgentOutcome**: the definitive result of that invocation - a parsed
//!   JSON value or a terminal failure, never an escaped error
//! - **AnalysisKind**: which specialist analysis is being run
//! - **CompletionService**: the seam to the external text-completion
//!   endpoint; the transport implementation lives in `cct-agent`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kind;
pub mod outcome;
pub mod request;
pub mod traits;

// Re-exports for convenience
pub use kind::AnalysisKind;
pub use outcome::{AgentFailure, AgentOutcome};
pub use request::AgentRequest;
pub use traits::{ChatMessage, CompletionRequest, CompletionService, Role};
