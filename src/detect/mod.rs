//! Bump classification pipeline.
//!
//! Classifies the transition between two revisions of a recipe folder as a
//! legitimate version bump or not. The pipeline is an ordered chain of gates;
//! the first failing gate short-circuits the run with [`Verdict::Rejected`],
//! which the detector surface absorbs into an empty bump list. Gate failures
//! are never errors: only git and YAML failures abort the run.
//!
//! Gate order:
//! 1. Scope: exactly two changed files, one versions file and one sources
//!    file, sharing a common prefix that is an existing directory.
//! 2. Versions file top-level diff touches only the versions collection.
//! 3. Every versions change is a pure addition with exactly `{folder}`.
//! 4. Every added version key is plain `major.minor[.patch]`; anything else
//!    aborts the whole run with a warning.
//! 5. The new snapshots of both files list the same version keys.
//! 6. Sources file top-level diff touches only the sources collection.
//! 7. Every sources change is a pure addition with exactly `{url, sha256}`
//!    and a scalar checksum.
//! 8. Every added URL reuses a previously-seen hostname and scheme.

mod gates;

use crate::diff;
use crate::error::Result;
use crate::git::GitRepo;
use crate::recipe;
use crate::urls::UrlProvenance;

/// Why a candidate transition was rejected.
///
/// Rejections carry enough context for diagnostics but are not errors; the
/// run still succeeds with an empty bump list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The diff touches a number of files other than two.
    ChangedFileCount(usize),
    /// The changed files share no common prefix that is an existing directory.
    UnrelatedChangedFiles(String),
    /// Not exactly one versions file among the changed files.
    VersionsFileCount(usize),
    /// Not exactly one sources file among the changed files.
    SourcesFileCount(usize),
    /// The versions file diff has root-level changes outside the versions
    /// collection, or the collection change is not a nested diff.
    VersionsFileShape,
    /// A versions entry was modified, removed, or added with a field set
    /// other than exactly `{folder}`.
    ImpureVersionEntry(String),
    /// An added version key is not plain `major.minor[.patch]`.
    NonSemverVersion(String),
    /// The new snapshots of the two files list different version keys.
    VersionKeyMismatch,
    /// The sources file diff has root-level changes outside the sources
    /// collection, or the collection change is not a nested diff.
    SourcesFileShape,
    /// A sources entry was modified, removed, or added with a field set
    /// other than exactly `{url, sha256}`.
    ImpureSourceEntry(String),
    /// An added entry carries a checksum list instead of a single string.
    ChecksumNotScalar(String),
    /// An added URL's hostname or scheme was never seen in the old snapshot.
    UnknownUrlOrigin(String),
}

/// Outcome of the classification pipeline for one file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Versions accepted as new legitimate additions, in first-seen order
    /// of the new snapshot.
    Accepted(Vec<String>),
    /// The first gate that failed.
    Rejected(Rejection),
}

/// Run the full gate pipeline for the transition `old_commit -> new_commit`.
///
/// Git failures and malformed YAML abort with an error; everything else
/// produces a verdict.
pub fn classify_bump_version(
    repo: &GitRepo,
    old_commit: &str,
    new_commit: &str,
) -> Result<Verdict> {
    let relative_files = repo.changed_files(old_commit, new_commit, true)?;
    if let Err(rejection) = gates::check_scope(&relative_files, repo.work_dir()) {
        return Ok(Verdict::Rejected(rejection));
    }

    let files = repo.changed_files(old_commit, new_commit, false)?;
    let (versions_path, sources_path) = match gates::locate_recipe_pair(&files) {
        Ok(pair) => pair,
        Err(rejection) => return Ok(Verdict::Rejected(rejection)),
    };

    let versions_old = recipe::load_yaml(&repo.show_file(old_commit, &versions_path)?)?;
    let versions_new = recipe::load_yaml(&repo.show_file(new_commit, &versions_path)?)?;
    let versions_changes = diff::diff_documents(&versions_old, &versions_new);
    let added = match gates::versions_additions(&versions_changes) {
        Ok(added) => added,
        Err(rejection) => return Ok(Verdict::Rejected(rejection)),
    };
    if let Err(rejection) = gates::check_version_syntax(&added) {
        return Ok(Verdict::Rejected(rejection));
    }

    let sources_old = recipe::load_yaml(&repo.show_file(old_commit, &sources_path)?)?;
    let sources_new = recipe::load_yaml(&repo.show_file(new_commit, &sources_path)?)?;
    if let Err(rejection) = gates::check_key_parity(
        recipe::collection_keys(&versions_new, recipe::VERSIONS_KEY),
        recipe::collection_keys(&sources_new, recipe::SOURCES_KEY),
    ) {
        return Ok(Verdict::Rejected(rejection));
    }

    // Old-snapshot provenance is aggregated once per file pair and reused
    // for every added entry.
    let old_urls = recipe::source_urls(&sources_old);
    let provenance = UrlProvenance::from_urls(&old_urls);
    let sources_changes = diff::diff_documents(&sources_old, &sources_new);
    if let Err(rejection) = gates::sources_additions(&sources_changes, &provenance) {
        return Ok(Verdict::Rejected(rejection));
    }

    Ok(Verdict::Accepted(added))
}

/// Detect legitimate new versions added between two revisions.
///
/// Returns the accepted version strings in first-seen order, or an empty
/// list when any gate rejects the transition. Non-semver version keys emit
/// a warning before short-circuiting.
pub fn detect_bump_version(
    repo: &GitRepo,
    old_commit: &str,
    new_commit: &str,
) -> Result<Vec<String>> {
    match classify_bump_version(repo, old_commit, new_commit)? {
        Verdict::Accepted(versions) => Ok(versions),
        Verdict::Rejected(rejection) => {
            if let Rejection::NonSemverVersion(version) = &rejection {
                eprintln!(
                    "warning: found non-semver format version added to {}: {}, skipping",
                    recipe::VERSIONS_FILE,
                    version
                );
            }
            Ok(Vec::new())
        }
    }
}

/// Detect dependency bumps in the recipe. Reserved, always empty.
pub fn detect_bump_requirements(
    _repo: &GitRepo,
    _old_commit: &str,
    _new_commit: &str,
) -> Result<Vec<String>> {
    Ok(Vec::new())
}

/// Detect tool dependency bumps in the recipe. Reserved, always empty.
pub fn detect_bump_tool_requirements(
    _repo: &GitRepo,
    _old_commit: &str,
    _new_commit: &str,
) -> Result<Vec<String>> {
    Ok(Vec::new())
}

/// Detect test dependency bumps in the recipe. Reserved, always empty.
pub fn detect_bump_test_requirements(
    _repo: &GitRepo,
    _old_commit: &str,
    _new_commit: &str,
) -> Result<Vec<String>> {
    Ok(Vec::new())
}
