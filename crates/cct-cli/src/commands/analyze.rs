//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use cct_agent::{AgentPipeline, ChatClient};
use cct_domain::{AgentOutcome, AgentRequest, AnalysisKind};
use cct_schemas::SchemaProvider;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Execute the analyze command.
///
/// Runs the requested analysis kinds one after another against the same
/// extracted document text. One kind failing never aborts the others;
/// the command only errors out when extraction fails or every kind fails.
pub async fn execute_analyze(args: AnalyzeArgs, mut config: Config) -> Result<()> {
    if let Some(endpoint) = args.endpoint {
        config.agent.endpoint = endpoint;
    }
    if let Some(api_key) = args.api_key {
        config.agent.api_key = api_key;
    }
    config.agent.validate().map_err(CliError::Config)?;

    let kinds: Vec<AnalysisKind> = if args.kind.is_empty() {
        AnalysisKind::ALL.to_vec()
    } else {
        args.kind.iter().map(|k| AnalysisKind::from(*k)).collect()
    };

    let output_dir = args.output_dir.unwrap_or_else(|| config.output_dir.clone());
    let json_dir = output_dir.join("json");
    let report_dir = output_dir.join("reports");
    fs::create_dir_all(&json_dir)?;
    fs::create_dir_all(&report_dir)?;

    let raw_text = cct_extract::extract_text(&args.input)?;

    let provider = match &config.schema_dir {
        Some(dir) => SchemaProvider::with_schema_dir(dir),
        None => SchemaProvider::new(),
    };

    let client = ChatClient::from_config(&config.agent);
    let pipeline = AgentPipeline::new(client, config.agent.clone());

    let input_stem = args
        .input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("document")
        .to_string();

    let mut succeeded = 0usize;
    for kind in kinds {
        let Some((prompt, _schema)) = provider.prompt_and_schema(kind) else {
            warn!("No schema available for {}; skipping", kind);
            continue;
        };

        let request = AgentRequest::new(raw_text.clone(), prompt, kind.label());
        let artifact_path = json_dir.join(format!("failed_{}.json", kind));

        match pipeline.invoke(&request, &artifact_path).await {
            AgentOutcome::Success(data) => {
                let json_path = json_dir.join(format!("{}.json", kind));
                fs::write(&json_path, serde_json::to_string_pretty(&data)?)?;
                info!("Extraction for {} saved to {}", kind, json_path.display());

                let report_path = report_path(&report_dir, kind, &input_stem);
                cct_report::render_report(kind, &data, &report_path)?;

                println!("{}: {}", kind.label(), report_path.display());
                succeeded += 1;
            }
            AgentOutcome::Failure(failure) => {
                warn!(
                    "Analysis {} failed ({}); skipping its downstream steps",
                    kind, failure.reason
                );
            }
        }
    }

    if succeeded == 0 {
        return Err(CliError::AllAnalysesFailed);
    }
    Ok(())
}

fn report_path(report_dir: &std::path::Path, kind: AnalysisKind, input_stem: &str) -> PathBuf {
    report_dir.join(format!("{}_support_{}.docx", kind, input_stem))
}
