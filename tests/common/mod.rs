//! Shared fixtures for integration tests

use graph_domains::{Document, GraphEdge, NodeId, ProvenanceRecord, Segment, Spine};
use std::collections::HashSet;
use std::sync::Arc;

/// Opening of "The Art of War" as a transcript would deliver it
pub fn laying_plans() -> (Document, Vec<Segment>) {
    let document = Document::new("1. Laying Plans").with_media_type("audio");
    let segments = vec![
        Segment::new(0, "Laying Plans").with_role("title"),
        Segment::new(1, "Sun Tzu said,"),
        Segment::new(2, "The art of war is of vital importance to the State."),
    ];
    (document, segments)
}

pub fn transcription_ref() -> Arc<ProvenanceRecord> {
    ProvenanceRecord::shared("plugin_test", "transcriptions", "job_123")
        .expect("fixture provenance is valid")
}

/// Generated segments `line 0`, `line 1`, ...
pub fn numbered_segments(n: usize) -> Vec<Segment> {
    (0..n).map(|i| Segment::new(i, format!("line {i}"))).collect()
}

/// Every edge endpoint must be one of the spine's node ids
pub fn assert_no_dangling(spine: &Spine) {
    let ids: HashSet<&NodeId> = spine.graph.nodes().iter().map(|n| n.id()).collect();
    for edge in spine.graph.edges() {
        assert_endpoints_in(edge, &ids);
    }
}

fn assert_endpoints_in(edge: &GraphEdge, ids: &HashSet<&NodeId>) {
    assert!(ids.contains(&edge.source_id), "dangling source on {}", edge.id);
    assert!(ids.contains(&edge.target_id), "dangling target on {}", edge.id);
}
