//! System prompts for the specialist agents

use cct_domain::AnalysisKind;
use serde_json::Value;

/// Sentinel the agents must use for information absent from the document
///
/// A prompt-engineering convention, not an enforced contract: downstream
/// consumers look for this exact text to flag fields needing manual review.
pub const MISSING_DATA_SENTINEL: &str =
    "Data not found; review the source documentation";

/// Builds the system prompt for one specialist agent
pub struct PromptBuilder<'a> {
    kind: AnalysisKind,
    schema: &'a Value,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder for a kind and its schema descriptor
    pub fn new(kind: AnalysisKind, schema: &'a Value) -> Self {
        Self { kind, schema }
    }

    /// Build the complete system prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Specialist role and task
        prompt.push_str(self.role_instruction());
        prompt.push_str("\n\n");

        // 2. Filling rules, including the missing-data sentinel
        prompt.push_str(&format!(
            "If the document does not contain the information for a field, you MUST fill \
             that field with the exact text: \"{}\". Do NOT omit any key and do NOT use null.\n\
             Escape any double quotes that appear inside string values.\n\
             Your reply must be ONLY the completed, well-formatted JSON object - no \
             explanations, no markdown fences.\n\n",
            MISSING_DATA_SENTINEL
        ));

        // 3. The schema descriptor as a literal template
        prompt.push_str(&format!("{} JSON schema to fill in:\n", self.kind.label()));
        prompt.push_str(
            &serde_json::to_string_pretty(self.schema)
                .unwrap_or_else(|_| self.schema.to_string()),
        );

        prompt
    }

    fn role_instruction(&self) -> &'static str {
        match self.kind {
            AnalysisKind::Payroll => {
                "You are a senior payroll analyst. Read the collective labor agreement \
                 (CCT) below and extract ALL information relevant to filling the JSON \
                 schema that follows."
            }
            AnalysisKind::AccountingInterface => {
                "You are a senior accounting and systems analyst. Read the document \
                 below and extract ALL information relevant to filling the accounting \
                 interface JSON schema that follows."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_embeds_the_schema() {
        let schema = json!({"salary_floors": [{"job_title": "string"}]});
        let prompt = PromptBuilder::new(AnalysisKind::Payroll, &schema).build();

        assert!(prompt.contains("salary_floors"));
        assert!(prompt.contains("job_title"));
    }

    #[test]
    fn test_prompt_states_the_sentinel_convention() {
        let schema = json!({});
        let prompt = PromptBuilder::new(AnalysisKind::Payroll, &schema).build();

        assert!(prompt.contains(MISSING_DATA_SENTINEL));
        assert!(prompt.contains("Do NOT omit any key"));
    }

    #[test]
    fn test_role_follows_the_kind() {
        let schema = json!({});

        let payroll = PromptBuilder::new(AnalysisKind::Payroll, &schema).build();
        assert!(payroll.contains("payroll analyst"));

        let accounting =
            PromptBuilder::new(AnalysisKind::AccountingInterface, &schema).build();
        assert!(accounting.contains("accounting and systems analyst"));
    }

    #[test]
    fn test_prompt_forbids_fences() {
        let schema = json!({});
        let prompt = PromptBuilder::new(AnalysisKind::Payroll, &schema).build();
        assert!(prompt.contains("no markdown fences"));
    }
}
