//! CCT CLI library.
//!
//! Core functionality for the `cct` command-line interface: configuration
//! management, argument parsing, and the analyze/schema command
//! implementations that orchestrate the diagnostic pipeline.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command, KindArg};
pub use config::Config;
pub use error::{CliError, Result};
