//! Shared fixtures for tests that need a real recipe repository.
//!
//! The fixture repository starts with a single released version `0.1.0`
//! tracked in `config.yml` and `all/conandata.yml`, mirroring the smallest
//! real recipe folder layout.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Checksum of the initial 0.1.0 artifact in the fixture repository.
pub(crate) const INITIAL_SHA256: &str =
    "507eb7b8d1015fbec5b935f34ebed15bf346bed04a11ab82b8eee848c4205aea";

/// Checksum used for artifacts added by tests.
pub(crate) const BUMP_SHA256: &str =
    "f0471ff5f578e2e71673470f9703d453794d6c014c5448511afa0077e0a16a4a";

/// A throwaway git repository holding one recipe folder.
pub(crate) struct RecipeRepo {
    dir: TempDir,
}

impl RecipeRepo {
    /// Create a repository with version 0.1.0 committed.
    pub(crate) fn init() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path();

        git(path, &["init"]);
        // Deterministic default branch name across environments.
        git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        git(path, &["config", "user.email", "test@example.com"]);
        git(path, &["config", "user.name", "Test User"]);

        let repo = Self { dir };
        repo.write("config.yml", &config_yml(&[("0.1.0", "all")]));
        repo.write(
            "all/conandata.yml",
            &conandata_yml(&[(
                "0.1.0",
                INITIAL_SHA256,
                "http://foobar.com/downloads/0.1.0.tar.gz",
            )]),
        );
        repo.commit_all("Add version 0.1.0");
        repo
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the repository root, creating parents.
    pub(crate) fn write(&self, relative: &str, content: &str) {
        let target = self.dir.path().join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(target, content).unwrap();
    }

    /// Stage and commit everything.
    pub(crate) fn commit_all(&self, message: &str) {
        git(self.path(), &["add", "-A"]);
        git(self.path(), &["commit", "-m", message]);
    }

    /// Rewrite both recipe files with versions 0.1.0 and `version`.
    pub(crate) fn add_version(&self, version: &str, url: &str) {
        self.write(
            "config.yml",
            &config_yml(&[("0.1.0", "all"), (version, "all")]),
        );
        self.write(
            "all/conandata.yml",
            &conandata_yml(&[
                (
                    "0.1.0",
                    INITIAL_SHA256,
                    "http://foobar.com/downloads/0.1.0.tar.gz",
                ),
                (version, BUMP_SHA256, url),
            ]),
        );
    }
}

/// Render a versions file from `(version, folder)` pairs.
pub(crate) fn config_yml(versions: &[(&str, &str)]) -> String {
    let mut out = String::from("versions:\n");
    for (version, folder) in versions {
        out.push_str(&format!(
            "  \"{}\":\n    folder: \"{}\"\n",
            version, folder
        ));
    }
    out
}

/// Render a sources file from `(version, sha256, url)` triples.
pub(crate) fn conandata_yml(sources: &[(&str, &str, &str)]) -> String {
    let mut out = String::from("sources:\n");
    for (version, sha256, url) in sources {
        out.push_str(&format!(
            "  \"{}\":\n    sha256: \"{}\"\n    url: \"{}\"\n",
            version, sha256, url
        ));
    }
    out
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
