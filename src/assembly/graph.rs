//! AssembledGraph: the immutable node/edge snapshot handed to consumers

use crate::domains::RelationRegistry;
use crate::graph::{GraphEdge, GraphError, GraphNode, GraphResult, NodeId, RESERVED_ID_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A well-formed set of nodes and edges.
///
/// Every edge's relation belongs to the governing registry and both of its
/// endpoints are in `nodes`. Construction goes through [`from_parts`],
/// which enforces this.
///
/// [`from_parts`]: AssembledGraph::from_parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssembledGraph {
    /// Registry domain the edges were validated against
    domain: String,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    assembled_at: DateTime<Utc>,
}

impl AssembledGraph {
    /// Validate `nodes` and `edges` against `registry` and wrap them.
    ///
    /// Fails on a malformed node (including provenance without a plugin
    /// name), a repeated node id, an unregistered relation
    /// ([`GraphError::InvalidRelation`]) or an edge endpoint missing from
    /// `nodes` ([`GraphError::DanglingReference`]).
    pub fn from_parts(
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
        registry: &RelationRegistry,
    ) -> GraphResult<Self> {
        let graph = Self {
            domain: registry.domain().to_string(),
            nodes,
            edges,
            assembled_at: Utc::now(),
        };
        graph.validate(registry)?;
        Ok(graph)
    }

    /// Re-check the structural invariants, e.g. after deserializing a snapshot
    pub fn validate(&self, registry: &RelationRegistry) -> GraphResult<()> {
        let mut ids: HashSet<&NodeId> = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if node.label().trim().is_empty() || node.property(RESERVED_ID_KEY).is_some() {
                return Err(GraphError::validation(
                    node.label(),
                    format!("node {} has no label or an `id` property", node.id()),
                ));
            }
            for record in node.sources() {
                record.validate()?;
            }
            if !ids.insert(node.id()) {
                return Err(GraphError::validation(
                    node.label(),
                    format!("duplicate node id {}", node.id()),
                ));
            }
        }

        for edge in &self.edges {
            registry.require(&edge.relation_type)?;
            for endpoint in [&edge.source_id, &edge.target_id] {
                if !ids.contains(endpoint) {
                    return Err(GraphError::DanglingReference {
                        edge: edge.id.to_string(),
                        node: endpoint.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn edges_with_relation<'a>(&'a self, relation: &'a str) -> impl Iterator<Item = &'a GraphEdge> {
        self.edges.iter().filter(move |e| e.relation_type == relation)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn assembled_at(&self) -> DateTime<Utc> {
        self.assembled_at
    }

    /// Hand the parts over to a storage collaborator
    pub fn into_parts(self) -> (Vec<GraphNode>, Vec<GraphEdge>) {
        (self.nodes, self.edges)
    }
}
