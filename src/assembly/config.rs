//! Assembly configuration, loaded from YAML

use crate::graph::GraphResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do when an edge repeats an existing `(source, target, relation)` link
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateEdgePolicy {
    /// Store every edge, even when the link already exists
    #[default]
    Keep,
    /// Drop the repeat and hand back the existing edge's id
    Collapse,
}

/// Configuration for graph assembly
///
/// ```yaml
/// duplicate_edges: collapse
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    pub duplicate_edges: DuplicateEdgePolicy,
}

impl AssemblyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_edges(mut self, policy: DuplicateEdgePolicy) -> Self {
        self.duplicate_edges = policy;
        self
    }

    /// Parse a YAML document. Missing keys fall back to defaults.
    pub fn from_yaml_str(yaml: &str) -> GraphResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML file
    pub fn load(path: impl AsRef<Path>) -> GraphResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;

    #[test]
    fn default_keeps_duplicates() {
        assert_eq!(AssemblyConfig::default().duplicate_edges, DuplicateEdgePolicy::Keep);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(AssemblyConfig::from_yaml_str("").unwrap(), AssemblyConfig::default());
    }

    #[test]
    fn parses_collapse_policy() {
        let config = AssemblyConfig::from_yaml_str("duplicate_edges: collapse\n").unwrap();
        assert_eq!(config.duplicate_edges, DuplicateEdgePolicy::Collapse);
    }

    #[test]
    fn unknown_policy_is_a_config_error() {
        let err = AssemblyConfig::from_yaml_str("duplicate_edges: merge").unwrap_err();
        assert!(matches!(err, GraphError::Config(_)));
    }
}
