//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use cct_agent::AgentConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// Built once at startup from a TOML file plus command-line/environment
/// overrides, then passed by value into the pipeline - nothing below the
/// CLI reads ambient configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Completion transport and sampling settings
    #[serde(default)]
    pub agent: AgentConfig,

    /// Default output directory for json/ and reports/
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory of schema descriptor overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_dir: Option<PathBuf>,
}

impl Config {
    /// Default configuration file locations, in precedence order.
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("cct.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".cct").join("config.toml"));
        }
        paths
    }

    /// Load configuration from an explicit path or the default locations.
    ///
    /// An explicit path must exist; otherwise the first existing default
    /// location is used, falling back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Configuration file '{}' not found",
                    path.display()
                )));
            }
            return Self::read(path);
        }

        for candidate in Self::default_paths() {
            if candidate.exists() {
                return Self::read(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent: AgentConfig::default(),
            output_dir: default_output_dir(),
            schema_dir: None,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}
