//! Structural spine: a document, its segments, and the edges that order them
//!
//! For a document with segments `s0..sn-1` the builder emits:
//! - `si -PART_OF-> document` for every segment
//! - `document -STARTS_WITH-> s0`
//! - `s(i-1) -NEXT-> si` for every `i > 0`
//!
//! Segment order is also stored in each node's `index` property, so it
//! survives consumers that reorder nodes.

use super::assembler::GraphAssembler;
use super::config::AssemblyConfig;
use super::graph::AssembledGraph;
use crate::domains::relations::structure;
use crate::domains::{Document, Segment, STRUCTURE};
use crate::graph::{GraphResult, NodeId};
use crate::provenance::ProvenanceRecord;
use std::sync::Arc;

/// A built spine with handles to its document and segments
#[derive(Debug, Clone)]
pub struct Spine {
    /// Root document node
    pub document_id: NodeId,
    /// Segment nodes, in input order
    pub segment_ids: Vec<NodeId>,
    pub graph: AssembledGraph,
}

/// Builds structure graphs from a document and its ordered segments
#[derive(Debug, Clone, Default)]
pub struct SpineBuilder {
    config: AssemblyConfig,
}

impl SpineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AssemblyConfig) -> Self {
        Self { config }
    }

    /// Build the spine. Every node gets `sources` as provenance.
    ///
    /// A segment's `index` is set to its position in `segments`. An empty
    /// `segments` slice yields just the document node and no edges. If any
    /// entity fails normalization the whole build fails.
    pub fn build(
        &self,
        document: &Document,
        segments: &[Segment],
        sources: &[Arc<ProvenanceRecord>],
    ) -> GraphResult<Spine> {
        let mut asm = GraphAssembler::with_config(STRUCTURE, self.config.clone());
        let document_id = asm.add_entity(document.clone(), sources)?;

        let mut segment_ids = Vec::with_capacity(segments.len());
        let mut previous: Option<NodeId> = None;

        for (position, segment) in segments.iter().enumerate() {
            let mut segment = segment.clone();
            if segment.index != position {
                tracing::debug!(
                    given = segment.index,
                    position,
                    "segment index overwritten with its position"
                );
                segment.index = position;
            }
            let segment_id = asm.add_entity(segment, sources)?;

            asm.connect(&segment_id, &document_id, structure::PART_OF)?;
            match &previous {
                Some(prev) => asm.connect(prev, &segment_id, structure::NEXT)?,
                None => asm.connect(&document_id, &segment_id, structure::STARTS_WITH)?,
            };

            previous = Some(segment_id.clone());
            segment_ids.push(segment_id);
        }

        tracing::debug!(
            document = %document.title,
            segments = segment_ids.len(),
            "spine built"
        );

        Ok(Spine {
            document_id,
            segment_ids,
            graph: asm.finish()?,
        })
    }
}

/// Build a spine with the default configuration
pub fn build_spine(
    document: &Document,
    segments: &[Segment],
    sources: &[Arc<ProvenanceRecord>],
) -> GraphResult<Spine> {
    SpineBuilder::new().build(document, segments, sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphError, PropertyValue};

    fn laying_plans() -> (Document, Vec<Segment>) {
        let doc = Document::new("1. Laying Plans").with_media_type("audio");
        let segments = vec![
            Segment::new(0, "Laying Plans").with_role("title"),
            Segment::new(1, "Sun Tzu said,"),
            Segment::new(2, "The art of war is of vital importance to the State."),
        ];
        (doc, segments)
    }

    #[test]
    fn three_segments_make_four_nodes_and_six_edges() {
        let (doc, segments) = laying_plans();
        let record = ProvenanceRecord::shared("plugin_test", "transcriptions", "job_123").unwrap();
        let spine = build_spine(&doc, &segments, &[record]).unwrap();

        assert_eq!(spine.graph.node_count(), 4);
        assert_eq!(spine.graph.edge_count(), 6);
        assert_eq!(spine.graph.edges_with_relation(structure::PART_OF).count(), 3);
        assert_eq!(spine.graph.edges_with_relation(structure::NEXT).count(), 2);

        let start: Vec<_> = spine.graph.edges_with_relation(structure::STARTS_WITH).collect();
        assert_eq!(start.len(), 1);
        assert_eq!(start[0].source_id, spine.document_id);
        assert_eq!(start[0].target_id, spine.segment_ids[0]);
    }

    #[test]
    fn next_edges_follow_input_order() {
        let (doc, segments) = laying_plans();
        let spine = build_spine(&doc, &segments, &[]).unwrap();

        for pair in spine.segment_ids.windows(2) {
            assert!(spine
                .graph
                .edges_with_relation(structure::NEXT)
                .any(|e| e.source_id == pair[0] && e.target_id == pair[1]));
        }
    }

    #[test]
    fn empty_segments_give_lone_document() {
        let spine = build_spine(&Document::new("Empty"), &[], &[]).unwrap();
        assert_eq!(spine.graph.node_count(), 1);
        assert_eq!(spine.graph.edge_count(), 0);
        assert!(spine.segment_ids.is_empty());
    }

    #[test]
    fn index_is_stamped_from_position() {
        let segments = vec![Segment::new(9, "first"), Segment::new(3, "second")];
        let spine = build_spine(&Document::new("Doc"), &segments, &[]).unwrap();

        for (position, id) in spine.segment_ids.iter().enumerate() {
            let node = spine.graph.node(id).unwrap();
            assert_eq!(node.property("index"), Some(&PropertyValue::Int(position as i64)));
        }
    }

    #[test]
    fn bad_segment_fails_the_whole_build() {
        let segments = vec![Segment::new(0, "fine"), Segment::new(1, "")];
        let err = build_spine(&Document::new("Doc"), &segments, &[]).unwrap_err();
        assert!(matches!(err, GraphError::Validation { .. }));
    }
}
