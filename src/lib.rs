//! Graph Domains: canonical graph projection of plugin-defined entities
//!
//! Heterogeneous domain records (people, works, quotes, documents, segments)
//! are normalized into one uniform node schema and wired together with typed,
//! registry-checked edges, each node carrying the provenance of its facts.
//!
//! # Core Concepts
//!
//! - **Domain entities**: variant-specific records, normalized into [`GraphNode`]s
//! - **Relation registries**: closed per-domain sets of edge tags
//! - **Assembly**: building a [`AssembledGraph`] with no dangling references
//!
//! # Example
//!
//! ```
//! use graph_domains::{build_spine, Document, Segment};
//!
//! let doc = Document::new("1. Laying Plans");
//! let segments = vec![Segment::new(0, "Laying Plans"), Segment::new(1, "Sun Tzu said,")];
//! let spine = build_spine(&doc, &segments, &[]).unwrap();
//! assert_eq!(spine.graph.edge_count(), 4);
//! ```

pub mod assembly;
pub mod domains;
mod graph;
pub mod provenance;

pub use assembly::{
    build_spine, AssembledGraph, AssemblyConfig, DuplicateEdgePolicy, GraphAssembler, Spine,
    SpineBuilder,
};
pub use domains::{
    normalize, Concept, Document, DomainEntity, EntityKind, Person, Quote, RelationRegistry,
    Segment, Work, KNOWLEDGE, NAME_MAX_CHARS, STRUCTURE,
};
pub use graph::{
    EdgeId, GraphEdge, GraphError, GraphNode, GraphResult, NodeId, Properties, PropertyValue,
    RESERVED_ID_KEY,
};
pub use provenance::ProvenanceRecord;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
