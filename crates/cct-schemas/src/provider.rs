//! Schema descriptor lookup

use crate::prompt::PromptBuilder;
use cct_domain::AnalysisKind;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::error;

const PAYROLL_SCHEMA: &str = include_str!("../schemas/payroll.json");
const ACCOUNTING_INTERFACE_SCHEMA: &str = include_str!("../schemas/accounting_interface.json");

/// Provides the prompt text and expected-shape descriptor for each kind
///
/// Descriptors come from the built-in resources by default; a schema
/// directory can override them with `<kind>.json` files so deployments can
/// tune the extraction targets without rebuilding.
#[derive(Debug, Clone, Default)]
pub struct SchemaProvider {
    schema_dir: Option<PathBuf>,
}

impl SchemaProvider {
    /// Create a provider backed by the built-in descriptors
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider that loads descriptors from a directory
    pub fn with_schema_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            schema_dir: Some(dir.into()),
        }
    }

    /// Prompt text and schema descriptor for an analysis kind
    ///
    /// Returns `None` (logged) when the schema resource is missing or is not
    /// valid JSON; the caller skips that analysis kind.
    pub fn prompt_and_schema(&self, kind: AnalysisKind) -> Option<(String, Value)> {
        let schema = self.load_schema(kind)?;
        let prompt = PromptBuilder::new(kind, &schema).build();
        Some((prompt, schema))
    }

    fn load_schema(&self, kind: AnalysisKind) -> Option<Value> {
        let Some(dir) = &self.schema_dir else {
            return builtin_schema(kind);
        };

        let path = dir.join(format!("{}.json", kind.as_str()));
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                error!("Schema file {} unreadable: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(schema) => Some(schema),
            Err(e) => {
                error!("Schema file {} is not valid JSON: {}", path.display(), e);
                None
            }
        }
    }
}

fn builtin_schema(kind: AnalysisKind) -> Option<Value> {
    let raw = match kind {
        AnalysisKind::Payroll => PAYROLL_SCHEMA,
        AnalysisKind::AccountingInterface => ACCOUNTING_INTERFACE_SCHEMA,
    };

    match serde_json::from_str(raw) {
        Ok(schema) => Some(schema),
        Err(e) => {
            error!("Built-in schema for {} is corrupt: {}", kind, e);
            None
        }
    }
}
