//! Directed, typed edge between two graph nodes

use super::node::{NodeId, Properties, PropertyValue};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// Create a new random EdgeId
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge tagged with a relation type.
///
/// Edges carry no validation of their own; registry membership and endpoint
/// existence are checked when an edge joins an assembled graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Unique identifier
    pub id: EdgeId,
    /// Source node
    pub source_id: NodeId,
    /// Target node
    pub target_id: NodeId,
    /// Relation tag from the governing registry (e.g., "PART_OF")
    pub relation_type: String,
    /// Additional properties
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

impl GraphEdge {
    /// Create a new edge with a fresh id and no properties
    pub fn new(source_id: NodeId, target_id: NodeId, relation_type: impl Into<String>) -> Self {
        Self {
            id: EdgeId::new(),
            source_id,
            target_id,
            relation_type: relation_type.into(),
            properties: Properties::new(),
        }
    }

    /// Add a property to the edge
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Whether `other` links the same endpoints with the same relation
    pub fn same_link(&self, other: &GraphEdge) -> bool {
        self.source_id == other.source_id
            && self.target_id == other.target_id
            && self.relation_type == other.relation_type
    }
}
