use implcheck_common::limits::MAX_HIERARCHY_DEPTH;
use serde::Deserialize;

/// Checker configuration.
///
/// Deserialized from a manifest's `"options"` block (camelCase keys); any
/// missing field takes its default.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerOptions {
    /// Bound on superclass/super-interface steps during traversal
    pub max_hierarchy_depth: u32,
    /// Validate discovered contracts on the rayon pool
    pub parallel: bool,
    /// Marker name rendered in "must be an interface" diagnostics
    pub marker_name: String,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            max_hierarchy_depth: MAX_HIERARCHY_DEPTH,
            parallel: true,
            marker_name: "Implement".to_string(),
        }
    }
}
