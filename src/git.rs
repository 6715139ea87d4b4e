//! Git command runner and repository context for bumpscan.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling, plus [`GitRepo`], the explicit repository
//! context passed to everything that reads revision data. All git operations
//! should go through this module; nothing here mutates the process working
//! directory.

use crate::error::{BumpError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(BumpError::GitError)` - On non-zero exit code (mapped to exit code 3)
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            BumpError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(BumpError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Explicit repository context for revision reads.
///
/// Holds the repository root and the directory the command was invoked from
/// (the recipe folder for scoped diffs). Every snapshot read takes this
/// context instead of relying on the ambient process working directory.
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
    work_dir: PathBuf,
}

impl GitRepo {
    /// Discover the repository containing `work_dir`.
    ///
    /// Uses `git rev-parse --show-toplevel`. Being outside a repository is a
    /// user error (exit 1), not a git error.
    pub fn discover<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref();

        let output = Command::new("git")
            .current_dir(work_dir)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(|e| {
                BumpError::UserError(format!(
                    "failed to execute git: {} (is git installed?)",
                    e
                ))
            })?;

        let git_output = GitOutput::from_output(&output);
        if !output.status.success() {
            return Err(BumpError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            ));
        }

        Ok(Self {
            root: PathBuf::from(&git_output.stdout),
            work_dir: work_dir.to_path_buf(),
        })
    }

    /// Absolute path to the repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory the command was invoked from, inside the repository.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Resolve a revision name or ref to a commit hash.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The full commit hash
    /// * `Err(BumpError::GitError)` - The name could not be resolved
    pub fn resolve_revision(&self, name_or_ref: &str) -> Result<String> {
        let output = run_git(&self.root, &["rev-parse", name_or_ref]).map_err(|_| {
            BumpError::GitError(format!("could not resolve revision: {}", name_or_ref))
        })?;
        Ok(output.stdout)
    }

    /// List the files changed between two revisions.
    ///
    /// Runs `git diff --name-only {old} {new}`. With `relative` set the diff
    /// runs from the invocation directory and paths come back relative to it;
    /// otherwise paths are repository-root relative.
    pub fn changed_files(
        &self,
        old_revision: &str,
        new_revision: &str,
        relative: bool,
    ) -> Result<Vec<String>> {
        let (cwd, args) = if relative {
            (
                self.work_dir.as_path(),
                vec!["diff", "--name-only", "--relative", old_revision, new_revision],
            )
        } else {
            (
                self.root.as_path(),
                vec!["diff", "--name-only", old_revision, new_revision],
            )
        };

        let output = run_git(cwd, &args)?;
        Ok(output.lines().into_iter().map(String::from).collect())
    }

    /// Get the content of a file at a specific revision.
    ///
    /// Runs `git show {revision}:{path}` with a repository-root-relative path.
    /// A path missing at that revision is a git error and aborts the run.
    pub fn show_file(&self, revision: &str, path: &str) -> Result<String> {
        let spec = format!("{}:{}", revision, path);
        let output = run_git(&self.root, &["show", &spec])?;
        Ok(output.stdout)
    }
}
