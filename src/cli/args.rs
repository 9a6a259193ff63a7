//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::checker::DEFAULT_PROGRAM;
use crate::output::OutputFormat;

/// Environment variable naming the program used to run mypy.
pub const MYPY_ENV_VAR: &str = "MYPY_ADAPTER_MYPY";

/// mypy-adapter - Run mypy and report normalized diagnostics.
#[derive(Debug, Parser)]
#[command(name = "mypy-adapter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to profile file (overrides .mypy-adapter.yml discovery)
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Type-check python modules (default if no command specified)
    Check(CheckArgs),

    /// List the options a profile may set for mypy
    Options(OptionsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Files or directories to check (default: project root)
    pub paths: Vec<PathBuf>,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Program used to run mypy
    #[arg(long, env = "MYPY_ADAPTER_MYPY", default_value = DEFAULT_PROGRAM)]
    pub mypy: String,

    /// Exit with status 1 when any message is reported
    #[arg(long)]
    pub fail_on_messages: bool,
}

impl CheckArgs {
    /// Defaults for a bare invocation, honoring [`MYPY_ENV_VAR`].
    pub fn from_env() -> Self {
        match std::env::var(MYPY_ENV_VAR) {
            Ok(program) if !program.is_empty() => Self {
                mypy: program,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            format: OutputFormat::Human,
            mypy: DEFAULT_PROGRAM.to_string(),
            fail_on_messages: false,
        }
    }
}

/// Arguments for the `options` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OptionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
