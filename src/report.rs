//! Result shape and rendering for a detection run.
//!
//! A run always produces all four categories. The dependency categories are
//! reserved for detectors that are not implemented yet and stay empty, but
//! their slots are part of the machine-readable contract.

use crate::error::{BumpError, Result};
use serde::{Deserialize, Serialize};

/// Outcome of a full detection run.
///
/// Fields are declared in alphabetical order so the pretty JSON rendering
/// comes out with sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BumpReport {
    /// Reserved: dependency bumps. Always empty today.
    pub bump_requirements: Vec<String>,
    /// Reserved: test dependency bumps. Always empty today.
    pub bump_test_requirements: Vec<String>,
    /// Reserved: tool dependency bumps. Always empty today.
    pub bump_tools_requirements: Vec<String>,
    /// Versions accepted as legitimate new additions, in first-seen order.
    pub bump_version: Vec<String>,
}

impl BumpReport {
    /// Returns true if any version bump was detected.
    pub fn has_bump_version(&self) -> bool {
        !self.bump_version.is_empty()
    }

    /// Returns true if any dependency category is non-empty.
    pub fn has_bump_dependencies(&self) -> bool {
        !self.bump_requirements.is_empty()
            || !self.bump_tools_requirements.is_empty()
            || !self.bump_test_requirements.is_empty()
    }

    /// Machine-readable rendering: pretty JSON with sorted keys.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BumpError::UserError(format!("failed to serialize report: {}", e)))
    }

    /// Human-readable summary rendering.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("BUMP VERSION: {}\n", self.has_bump_version()));
        if self.has_bump_version() {
            out.push_str("BUMP VERSION LIST\n");
            out.push_str(&format!("{}\n", self.bump_version.join(", ")));
        }
        out.push_str(&format!(
            "BUMP DEPENDENCIES: {}\n",
            self.has_bump_dependencies()
        ));
        if !self.bump_requirements.is_empty() {
            out.push_str("BUMP REQUIREMENTS LIST\n");
            out.push_str(&format!("{}\n", self.bump_requirements.join(", ")));
        }
        if !self.bump_tools_requirements.is_empty() {
            out.push_str("BUMP TOOLS REQUIREMENTS LIST\n");
            out.push_str(&format!("{}\n", self.bump_tools_requirements.join(", ")));
        }
        if !self.bump_test_requirements.is_empty() {
            out.push_str("BUMP TEST REQUIREMENTS LIST\n");
            out.push_str(&format!("{}\n", self.bump_test_requirements.join(", ")));
        }
        out
    }
}
