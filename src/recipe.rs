//! Recipe file parsing glue.
//!
//! A recipe folder tracks its released versions in two linked YAML files:
//! `config.yml` (the versions file, mapping version -> `{folder}`) and
//! `conandata.yml` (the sources file, mapping version -> `{url, sha256}`,
//! optionally with a sibling `patches` mapping). This module loads raw
//! snapshots into YAML trees and extracts the pieces the classifier needs.
//! No schema validation happens here; shape checks are the classifier's job.

use crate::error::{BumpError, Result};
use serde_yaml::Value;
use url::Url;

/// Basename of the versions file inside a recipe folder.
pub const VERSIONS_FILE: &str = "config.yml";

/// Basename of the sources file inside a recipe folder.
pub const SOURCES_FILE: &str = "conandata.yml";

/// Key of the versions collection in the versions file.
pub const VERSIONS_KEY: &str = "versions";

/// Key of the sources collection in the sources file.
pub const SOURCES_KEY: &str = "sources";

/// Parse raw file content into a YAML tree.
///
/// Syntax errors are fatal for the whole run (exit 2).
pub fn load_yaml(content: &str) -> Result<Value> {
    serde_yaml::from_str(content)
        .map_err(|e| BumpError::MalformedData(format!("error loading YAML: {}", e)))
}

/// Render a mapping key as the version string it denotes.
///
/// Version keys are normally quoted strings, but an unquoted `0.2` parses as
/// a float; render such scalars back to their YAML form.
pub fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Extract the version keys of a top-level collection, in file order.
///
/// Returns an empty list when the collection is absent or not a mapping,
/// matching the permissive readers of the surrounding tooling.
pub fn collection_keys(doc: &Value, collection: &str) -> Vec<String> {
    match doc.get(collection) {
        Some(Value::Mapping(entries)) => entries.keys().map(key_to_string).collect(),
        _ => Vec::new(),
    }
}

/// Extract every download URL from a sources file snapshot.
///
/// Each entry's `url` field may be a single string or an ordered list of
/// mirror strings; both forms are flattened. Strings that do not parse as
/// absolute URLs are skipped when aggregating provenance.
pub fn source_urls(doc: &Value) -> Vec<Url> {
    let Some(Value::Mapping(entries)) = doc.get(SOURCES_KEY) else {
        return Vec::new();
    };

    let mut urls = Vec::new();
    for entry in entries.values() {
        match entry.get("url") {
            Some(Value::String(url)) => {
                if let Ok(parsed) = Url::parse(url) {
                    urls.push(parsed);
                }
            }
            Some(Value::Sequence(mirrors)) => {
                for mirror in mirrors {
                    if let Value::String(url) = mirror {
                        if let Ok(parsed) = Url::parse(url) {
                            urls.push(parsed);
                        }
                    }
                }
            }
            _ => {}
        }
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(content: &str) -> Value {
        load_yaml(content).unwrap()
    }

    #[test]
    fn load_yaml_parses_valid_content() {
        let doc = yaml("versions:\n  \"0.1.0\":\n    folder: all\n");
        assert!(doc.get(VERSIONS_KEY).is_some());
    }

    #[test]
    fn load_yaml_rejects_invalid_content() {
        let result = load_yaml("versions:\n  \"0.1.0\": folder: all:\n");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, BumpError::MalformedData(_)));
        assert!(err.to_string().contains("error loading YAML"));
    }

    #[test]
    fn collection_keys_in_file_order() {
        let doc = yaml("versions:\n  \"0.3.0\": {folder: all}\n  \"0.1.0\": {folder: all}\n");
        assert_eq!(collection_keys(&doc, VERSIONS_KEY), vec!["0.3.0", "0.1.0"]);
    }

    #[test]
    fn collection_keys_missing_collection_is_empty() {
        let doc = yaml("foobar: 1\n");
        assert!(collection_keys(&doc, VERSIONS_KEY).is_empty());
    }

    #[test]
    fn collection_keys_non_mapping_collection_is_empty() {
        let doc = yaml("versions: [1, 2]\n");
        assert!(collection_keys(&doc, VERSIONS_KEY).is_empty());
    }

    #[test]
    fn key_to_string_handles_unquoted_scalars() {
        let doc = yaml("versions:\n  0.2: {folder: all}\n  \"0.1.0\": {folder: all}\n");
        assert_eq!(collection_keys(&doc, VERSIONS_KEY), vec!["0.2", "0.1.0"]);
    }

    #[test]
    fn source_urls_flattens_scalars_and_mirror_lists() {
        let doc = yaml(concat!(
            "sources:\n",
            "  \"0.1.0\":\n",
            "    sha256: \"aa\"\n",
            "    url: \"http://foobar.com/downloads/0.1.0.tar.gz\"\n",
            "  \"0.2.0\":\n",
            "    sha256: \"bb\"\n",
            "    url:\n",
            "      - \"http://foobar.com/downloads/0.2.0.tar.gz\"\n",
            "      - \"http://mirror.net/downloads/0.2.0.tar.gz\"\n",
        ));
        let urls = source_urls(&doc);
        let hosts: Vec<_> = urls.iter().filter_map(|u| u.host_str()).collect();
        assert_eq!(hosts, vec!["foobar.com", "foobar.com", "mirror.net"]);
    }

    #[test]
    fn source_urls_skips_unparseable_entries() {
        let doc = yaml(concat!(
            "sources:\n",
            "  \"0.1.0\":\n",
            "    sha256: \"aa\"\n",
            "    url: \"not a url\"\n",
            "  \"0.2.0\":\n",
            "    sha256: \"bb\"\n",
            "    url: \"http://foobar.com/downloads/0.2.0.tar.gz\"\n",
        ));
        let urls = source_urls(&doc);
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].host_str(), Some("foobar.com"));
    }

    #[test]
    fn source_urls_without_sources_collection_is_empty() {
        let doc = yaml("patches:\n  \"0.1.0\": []\n");
        assert!(source_urls(&doc).is_empty());
    }
}
