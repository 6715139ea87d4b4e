//! Detection run orchestration.
//!
//! Resolves the repository context and both revisions, runs the four
//! detectors, and renders the report in the requested format. Diagnostics
//! (resolved revisions, warnings) go to stderr; only the rendered report
//! goes to stdout.

use crate::cli::{Cli, OutputFormat};
use crate::detect;
use crate::error::{BumpError, Result};
use crate::git::GitRepo;
use crate::report::BumpReport;
use std::env;
use std::path::Path;

/// Run a detection from parsed CLI arguments.
pub fn run(cli: Cli) -> Result<()> {
    let work_dir = match &cli.path {
        Some(path) => path.clone(),
        None => env::current_dir().map_err(|e| {
            BumpError::UserError(format!("failed to get current working directory: {}", e))
        })?,
    };

    let report = detect_report(&work_dir, &cli.old_commit, &cli.new_commit)?;

    match cli.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => print!("{}", report.to_text()),
    }
    Ok(())
}

/// Resolve the revisions and run every detector for the recipe at `work_dir`.
pub fn detect_report(work_dir: &Path, old_ref: &str, new_ref: &str) -> Result<BumpReport> {
    let repo = GitRepo::discover(work_dir)?;
    let old_commit = repo.resolve_revision(old_ref)?;
    let new_commit = repo.resolve_revision(new_ref)?;

    eprintln!("info: old commit: {}", old_commit);
    eprintln!("info: new commit: {}", new_commit);

    Ok(BumpReport {
        bump_version: detect::detect_bump_version(&repo, &old_commit, &new_commit)?,
        bump_requirements: detect::detect_bump_requirements(&repo, &old_commit, &new_commit)?,
        bump_tools_requirements: detect::detect_bump_tool_requirements(
            &repo,
            &old_commit,
            &new_commit,
        )?,
        bump_test_requirements: detect::detect_bump_test_requirements(
            &repo,
            &old_commit,
            &new_commit,
        )?,
    })
}
