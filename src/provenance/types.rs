//! Provenance records attached to normalized nodes

use crate::graph::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Where a fact came from: the plugin, its table, and the row or job within it.
///
/// Created once when a fact enters the system. Nodes share records through
/// `Arc`, so one record may back many nodes without copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    /// Plugin that produced the fact
    pub plugin_name: String,
    /// Table (or collection) inside the plugin's store
    pub source_table: String,
    /// Row, record or job identifier
    pub source_locator: String,
}

impl ProvenanceRecord {
    /// Build a record. `plugin_name` must not be empty.
    pub fn new(
        plugin_name: impl Into<String>,
        source_table: impl Into<String>,
        source_locator: impl Into<String>,
    ) -> GraphResult<Self> {
        let record = Self {
            plugin_name: plugin_name.into(),
            source_table: source_table.into(),
            source_locator: source_locator.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Build a record ready to be shared across nodes
    pub fn shared(
        plugin_name: impl Into<String>,
        source_table: impl Into<String>,
        source_locator: impl Into<String>,
    ) -> GraphResult<Arc<Self>> {
        Self::new(plugin_name, source_table, source_locator).map(Arc::new)
    }

    /// Check the record after deserialization
    pub fn validate(&self) -> GraphResult<()> {
        if self.plugin_name.trim().is_empty() {
            return Err(GraphError::validation(
                "ProvenanceRecord",
                "plugin_name must not be empty",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for ProvenanceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.plugin_name, self.source_table, self.source_locator)
    }
}
