//! CCT Schema Layer
//!
//! Prompt and schema provider for the specialist agents. Each analysis kind
//! has an example-shaped schema descriptor that is serialized verbatim into
//! the system prompt so the completion service has a literal template to
//! fill, along with the convention that missing information is filled with
//! a fixed sentinel string rather than omitted or nulled.
//!
//! The descriptors are documentation for the model, not enforced contracts:
//! the pipeline validates only that the reply parses as JSON.
//!
//! # Examples
//!
//! ```
//! use cct_domain::AnalysisKind;
//! use cct_schemas::SchemaProvider;
//!
//! let provider = SchemaProvider::new();
//! let (prompt, schema) = provider
//!     .prompt_and_schema(AnalysisKind::Payroll)
//!     .expect("built-in schema");
//!
//! assert!(prompt.contains("salary_floors"));
//! assert!(schema.get("benefits").is_some());
//! ```

#![warn(missing_docs)]

mod prompt;
mod provider;

pub use prompt::{PromptBuilder, MISSING_DATA_SENTINEL};
pub use provider::SchemaProvider;
