//! GraphAssembler: collects nodes and validated edges for one registry

use super::config::{AssemblyConfig, DuplicateEdgePolicy};
use super::graph::AssembledGraph;
use crate::domains::{DomainEntity, RelationRegistry};
use crate::graph::{EdgeId, GraphEdge, GraphError, GraphNode, GraphResult, NodeId, Properties};
use crate::provenance::ProvenanceRecord;
use std::collections::HashSet;
use std::sync::Arc;

/// Builds one graph against a single relation registry.
///
/// Every edge is checked as it is added: the relation must be registered
/// and both endpoints must already be in the node set. Invalid edges are
/// refused individually; the assembler stays usable afterwards.
#[derive(Debug)]
pub struct GraphAssembler {
    registry: RelationRegistry,
    config: AssemblyConfig,
    nodes: Vec<GraphNode>,
    node_ids: HashSet<NodeId>,
    edges: Vec<GraphEdge>,
}

impl GraphAssembler {
    pub fn new(registry: RelationRegistry) -> Self {
        Self::with_config(registry, AssemblyConfig::default())
    }

    pub fn with_config(registry: RelationRegistry, config: AssemblyConfig) -> Self {
        Self {
            registry,
            config,
            nodes: Vec::new(),
            node_ids: HashSet::new(),
            edges: Vec::new(),
        }
    }

    pub fn registry(&self) -> &RelationRegistry {
        &self.registry
    }

    /// Add an already normalized node
    pub fn add_node(&mut self, node: GraphNode) -> GraphResult<NodeId> {
        let id = node.id().clone();
        if !self.node_ids.insert(id.clone()) {
            return Err(GraphError::validation(
                node.label(),
                format!("node {id} was already added"),
            ));
        }
        self.nodes.push(node);
        Ok(id)
    }

    /// Normalize `entity` and add the resulting node
    pub fn add_entity(
        &mut self,
        entity: impl Into<DomainEntity>,
        sources: &[Arc<ProvenanceRecord>],
    ) -> GraphResult<NodeId> {
        let node = entity.into().to_graph_node(sources)?;
        self.add_node(node)
    }

    /// Link two nodes already in the assembler
    pub fn connect(&mut self, source: &NodeId, target: &NodeId, relation: &str) -> GraphResult<EdgeId> {
        self.connect_with(source, target, relation, Properties::new())
    }

    pub fn connect_with(
        &mut self,
        source: &NodeId,
        target: &NodeId,
        relation: &str,
        properties: Properties,
    ) -> GraphResult<EdgeId> {
        let mut edge = GraphEdge::new(source.clone(), target.clone(), relation);
        edge.properties = properties;
        self.add_edge(edge)
    }

    /// Add a prebuilt edge, applying the configured duplicate policy
    pub fn add_edge(&mut self, edge: GraphEdge) -> GraphResult<EdgeId> {
        self.registry.require(&edge.relation_type)?;
        for endpoint in [&edge.source_id, &edge.target_id] {
            if !self.node_ids.contains(endpoint) {
                return Err(GraphError::DanglingReference {
                    edge: edge.id.to_string(),
                    node: endpoint.to_string(),
                });
            }
        }

        if self.config.duplicate_edges == DuplicateEdgePolicy::Collapse {
            if let Some(existing) = self.edges.iter().find(|e| e.same_link(&edge)) {
                tracing::trace!(
                    relation = %edge.relation_type,
                    existing = %existing.id,
                    "collapsed duplicate edge"
                );
                return Ok(existing.id.clone());
            }
        }

        tracing::trace!(
            source = %edge.source_id,
            target = %edge.target_id,
            relation = %edge.relation_type,
            "edge added"
        );
        let id = edge.id.clone();
        self.edges.push(edge);
        Ok(id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_ids.contains(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Seal the graph. Invariants are checked once more on the way out.
    pub fn finish(self) -> GraphResult<AssembledGraph> {
        tracing::debug!(
            domain = self.registry.domain(),
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "graph assembled"
        );
        AssembledGraph::from_parts(self.nodes, self.edges, &self.registry)
    }
}
