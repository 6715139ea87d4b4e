//! Individual classification gates.
//!
//! Each gate is a standalone function returning `Result<_, Rejection>` so the
//! pipeline composes with `?`-style short-circuiting and every gate is unit
//! testable in isolation. Gates are pure over their inputs except for the
//! scope gate's directory existence check.

use super::Rejection;
use crate::diff::ChangeNode;
use crate::recipe::{self, SOURCES_FILE, SOURCES_KEY, VERSIONS_FILE, VERSIONS_KEY};
use crate::urls::UrlProvenance;
use crate::version::is_bump_version;
use serde_yaml::Value;
use std::path::Path;
use url::Url;

type GateResult<T> = std::result::Result<T, Rejection>;

/// Gate 1a: exactly two changed files whose common path prefix is an existing
/// directory under the invocation directory.
///
/// The directory check prevents matching unrelated files that merely share a
/// path-string prefix (e.g. `foo1/` and `foo2/`).
pub(super) fn check_scope(relative_files: &[String], work_dir: &Path) -> GateResult<()> {
    if relative_files.len() != 2 {
        return Err(Rejection::ChangedFileCount(relative_files.len()));
    }

    let prefix = common_string_prefix(&relative_files[0], &relative_files[1]);
    if !work_dir.join(&prefix).is_dir() {
        return Err(Rejection::UnrelatedChangedFiles(prefix));
    }
    Ok(())
}

/// Gate 1b: the changed files contain exactly one versions file and exactly
/// one sources file. Returns their repository-relative paths.
pub(super) fn locate_recipe_pair(files: &[String]) -> GateResult<(String, String)> {
    let versions: Vec<&String> = files
        .iter()
        .filter(|f| has_basename(f, VERSIONS_FILE))
        .collect();
    if versions.len() != 1 {
        return Err(Rejection::VersionsFileCount(versions.len()));
    }

    let sources: Vec<&String> = files
        .iter()
        .filter(|f| has_basename(f, SOURCES_FILE))
        .collect();
    if sources.len() != 1 {
        return Err(Rejection::SourcesFileCount(sources.len()));
    }

    Ok((versions[0].clone(), sources[0].clone()))
}

/// Gates 2 and 3: the versions file diff touches only the versions
/// collection, and every changed entry is a pure addition of exactly
/// `{folder}`. Returns the added version keys in first-seen order.
pub(super) fn versions_additions(changes: &[(Value, ChangeNode)]) -> GateResult<Vec<String>> {
    let entries = sole_nested_collection(changes, VERSIONS_KEY)
        .ok_or(Rejection::VersionsFileShape)?;

    let mut added = Vec::new();
    for (key, node) in entries {
        let version = recipe::key_to_string(key);
        let ChangeNode::Added(value) = node else {
            return Err(Rejection::ImpureVersionEntry(version));
        };
        let Some(fields) = value.as_mapping() else {
            return Err(Rejection::ImpureVersionEntry(version));
        };
        if fields.len() != 1 || !fields.contains_key("folder") {
            return Err(Rejection::ImpureVersionEntry(version));
        }
        added.push(version);
    }
    Ok(added)
}

/// Gate 4: every added version key is plain `major.minor[.patch]`.
///
/// One non-conforming key rejects the whole candidate set, it is never
/// merely excluded.
pub(super) fn check_version_syntax(versions: &[String]) -> GateResult<()> {
    for version in versions {
        if !is_bump_version(version) {
            return Err(Rejection::NonSemverVersion(version.clone()));
        }
    }
    Ok(())
}

/// Gate 5: the full version-key sets of the new versions file and the new
/// sources file must be equal.
pub(super) fn check_key_parity(
    mut versions_keys: Vec<String>,
    mut sources_keys: Vec<String>,
) -> GateResult<()> {
    versions_keys.sort();
    sources_keys.sort();
    if versions_keys != sources_keys {
        return Err(Rejection::VersionKeyMismatch);
    }
    Ok(())
}

/// Gates 6, 7 and 8: the sources file diff touches only the sources
/// collection; every changed entry is a pure addition of exactly
/// `{url, sha256}` with a scalar checksum; every added URL reuses a
/// previously-seen hostname and scheme.
pub(super) fn sources_additions(
    changes: &[(Value, ChangeNode)],
    provenance: &UrlProvenance,
) -> GateResult<()> {
    let entries = sole_nested_collection(changes, SOURCES_KEY)
        .ok_or(Rejection::SourcesFileShape)?;

    for (key, node) in entries {
        let version = recipe::key_to_string(key);
        let ChangeNode::Added(value) = node else {
            return Err(Rejection::ImpureSourceEntry(version));
        };
        let Some(fields) = value.as_mapping() else {
            return Err(Rejection::ImpureSourceEntry(version));
        };
        if fields.len() != 2 || !fields.contains_key("url") || !fields.contains_key("sha256") {
            return Err(Rejection::ImpureSourceEntry(version));
        }

        // Mirrors must share a single checksum; a per-mirror list implies
        // divergent artifacts.
        if !matches!(fields.get("sha256"), Some(Value::String(_))) {
            return Err(Rejection::ChecksumNotScalar(version));
        }

        for raw_url in entry_urls(fields.get("url"), &version)? {
            let parsed = Url::parse(&raw_url)
                .map_err(|_| Rejection::UnknownUrlOrigin(raw_url.clone()))?;
            if !provenance.covers(&parsed) {
                return Err(Rejection::UnknownUrlOrigin(raw_url));
            }
        }
    }
    Ok(())
}

/// Normalize an entry's `url` field to an ordered list of strings.
fn entry_urls(url_field: Option<&Value>, version: &str) -> GateResult<Vec<String>> {
    match url_field {
        Some(Value::String(url)) => Ok(vec![url.clone()]),
        Some(Value::Sequence(mirrors)) => {
            let mut urls = Vec::with_capacity(mirrors.len());
            for mirror in mirrors {
                let Value::String(url) = mirror else {
                    return Err(Rejection::ImpureSourceEntry(version.to_string()));
                };
                urls.push(url.clone());
            }
            Ok(urls)
        }
        _ => Err(Rejection::ImpureSourceEntry(version.to_string())),
    }
}

/// Returns the nested sub-diff of `collection` when it is the only top-level
/// change and that change is a nested diff.
fn sole_nested_collection<'a>(
    changes: &'a [(Value, ChangeNode)],
    collection: &str,
) -> Option<&'a [(Value, ChangeNode)]> {
    match changes {
        [(key, ChangeNode::Nested(entries))] if key == &Value::from(collection) => {
            Some(entries.as_slice())
        }
        _ => None,
    }
}

/// Character-wise common prefix of two paths, matching the historical
/// string-prefix behavior of the scope check.
fn common_string_prefix(a: &str, b: &str) -> String {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .collect()
}

fn has_basename(path: &str, name: &str) -> bool {
    Path::new(path).file_name().is_some_and(|f| f == name)
}
