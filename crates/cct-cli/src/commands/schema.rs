//! Schema command implementation.

use crate::cli::SchemaArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use cct_domain::AnalysisKind;
use cct_schemas::SchemaProvider;

/// Execute the schema command.
pub fn execute_schema(args: SchemaArgs, config: Config) -> Result<()> {
    let provider = match &config.schema_dir {
        Some(dir) => SchemaProvider::with_schema_dir(dir),
        None => SchemaProvider::new(),
    };

    let kind = AnalysisKind::from(args.kind);
    let Some((prompt, schema)) = provider.prompt_and_schema(kind) else {
        return Err(CliError::Config(format!(
            "No schema available for {}",
            kind
        )));
    };

    if args.prompt {
        println!("{}", prompt);
    } else {
        println!("{}", serde_json::to_string_pretty(&schema)?);
    }
    Ok(())
}
