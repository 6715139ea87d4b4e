//! CLI argument parsing for bumpscan.
//!
//! Uses clap derive macros for declarative argument definitions. The actual
//! detection run lives in the `commands` module.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Bumpscan: detects version bumps and dependency bumps in a recipe folder.
///
/// Compares two git revisions of a recipe folder and classifies the
/// transition. A transition qualifies as a version bump only when it adds
/// new, well-formed version entries to the recipe's version-listing and
/// source-metadata files and touches nothing else.
#[derive(Parser, Debug)]
#[command(name = "bumpscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Git revision of the older branch.
    #[arg(short = 'o', long, default_value = "origin/master")]
    pub old_commit: String,

    /// Git revision of the branch with new changes.
    #[arg(short = 'n', long, default_value = "HEAD")]
    pub new_commit: String,

    /// Output format for the result.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Recipe folder to analyze. Defaults to the current directory.
    #[arg(long)]
    pub path: Option<PathBuf>,
}

/// Supported renderings of the detection result.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
