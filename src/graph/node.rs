//! Node representation in the canonical graph

use super::error::{GraphError, GraphResult};
use crate::provenance::ProvenanceRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

/// Property key reserved for identity. Never allowed inside a property bag.
pub const RESERVED_ID_KEY: &str = "id";

/// Unique identifier for a node
///
/// Serializes as a plain string. Generated ids are UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new random NodeId
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create a NodeId from an existing string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Scalar property values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Properties collection. Ordered so serialized output is stable.
pub type Properties = BTreeMap<String, PropertyValue>;

/// A node in the canonical graph
///
/// Produced by normalizing a domain entity. Immutable once built: fields are
/// only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    id: NodeId,
    label: String,
    properties: Properties,
    #[serde(default)]
    sources: Vec<Arc<ProvenanceRecord>>,
}

impl GraphNode {
    /// Build a node with a freshly generated id.
    ///
    /// Fails when `label` is empty, `properties` carries an `id` key, or a
    /// provenance record has no plugin name.
    pub fn new(
        label: impl Into<String>,
        properties: Properties,
        sources: Vec<Arc<ProvenanceRecord>>,
    ) -> GraphResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(GraphError::validation("GraphNode", "label must not be empty"));
        }
        if properties.contains_key(RESERVED_ID_KEY) {
            return Err(GraphError::validation(
                label,
                "properties must not contain an `id` key",
            ));
        }
        for record in &sources {
            record.validate()?;
        }
        Ok(Self {
            id: NodeId::new(),
            label,
            properties,
            sources,
        })
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// The entity type tag, e.g. `"Person"`
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Uniform display name every normalized node exposes
    pub fn name(&self) -> Option<&str> {
        self.property("name").and_then(PropertyValue::as_str)
    }

    pub fn sources(&self) -> &[Arc<ProvenanceRecord>] {
        &self.sources
    }
}
