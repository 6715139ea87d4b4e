//! Recursive structural diff over YAML documents.
//!
//! This module computes the change-tree between two snapshots of a YAML file.
//! The result is a tagged tree ([`ChangeNode`]) rather than an untyped nested
//! mapping, so the classifier gates can match on it exhaustively.
//!
//! Equality is deep and coercion-free: scalars compare by value within their
//! kind, sequences element-wise in order, mappings by key set plus recursive
//! value equality (all provided by `serde_yaml::Value: PartialEq`).

use serde_yaml::{Mapping, Value};

/// A single change detected between two snapshots of a mapping key.
///
/// Keys with no difference produce no node at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeNode {
    /// The key exists only in the new snapshot.
    Added(Value),
    /// The key exists only in the old snapshot.
    Removed(Value),
    /// The key exists in both snapshots with differing, non-mapping values
    /// (or values of differing kinds).
    Modified { old: Value, new: Value },
    /// The key maps to differing mappings in both snapshots; holds the
    /// sub-diff of those mappings.
    Nested(Vec<(Value, ChangeNode)>),
}

/// Diff two YAML documents at the root.
///
/// A non-mapping root is treated as an empty mapping; the classifier rejects
/// such documents through its shape gates rather than erroring here.
pub fn diff_documents(old: &Value, new: &Value) -> Vec<(Value, ChangeNode)> {
    let empty = Mapping::new();
    let old_map = old.as_mapping().unwrap_or(&empty);
    let new_map = new.as_mapping().unwrap_or(&empty);
    diff_mappings(old_map, new_map)
}

/// Diff two mappings over the union of their keys.
///
/// Order of the result: keys of the new snapshot in insertion order first,
/// then removed-only keys in old-snapshot order. Added entries therefore
/// surface in first-seen order of the new snapshot.
pub fn diff_mappings(old: &Mapping, new: &Mapping) -> Vec<(Value, ChangeNode)> {
    let mut changes = Vec::new();

    for (key, new_value) in new {
        match old.get(key) {
            None => changes.push((key.clone(), ChangeNode::Added(new_value.clone()))),
            Some(old_value) if old_value == new_value => {}
            Some(old_value) => {
                let node = match (old_value, new_value) {
                    (Value::Mapping(old_inner), Value::Mapping(new_inner)) => {
                        ChangeNode::Nested(diff_mappings(old_inner, new_inner))
                    }
                    _ => ChangeNode::Modified {
                        old: old_value.clone(),
                        new: new_value.clone(),
                    },
                };
                changes.push((key.clone(), node));
            }
        }
    }

    for (key, old_value) in old {
        if !new.contains_key(key) {
            changes.push((key.clone(), ChangeNode::Removed(old_value.clone())));
        }
    }

    changes
}
