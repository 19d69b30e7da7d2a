//! CLI command definitions and argument parsing.

use cct_domain::AnalysisKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cct - extract structured diagnostics from collective labor agreements.
#[derive(Debug, Parser)]
#[command(name = "cct")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a labor-agreement document
    Analyze(AnalyzeArgs),

    /// Print the schema descriptor or prompt for an analysis kind
    Schema(SchemaArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Input PDF document
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory; json/ and reports/ are created inside it
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Restrict the run to specific analysis kinds (default: all)
    #[arg(short, long, value_enum)]
    pub kind: Vec<KindArg>,

    /// Completion endpoint override
    #[arg(long, env = "CCT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// API key override
    #[arg(long, env = "CCT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Arguments for the schema command.
#[derive(Debug, Parser)]
pub struct SchemaArgs {
    /// Analysis kind to inspect
    #[arg(short, long, value_enum)]
    pub kind: KindArg,

    /// Print the full system prompt instead of the bare schema
    #[arg(long)]
    pub prompt: bool,
}

/// Analysis kind as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// Payroll diagnostic
    Payroll,
    /// Accounting-interface diagnostic
    AccountingInterface,
}

impl From<KindArg> for AnalysisKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Payroll => AnalysisKind::Payroll,
            KindArg::AccountingInterface => AnalysisKind::AccountingInterface,
        }
    }
}
