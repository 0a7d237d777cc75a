//! Provenance: which external source produced a fact.

mod types;

pub use types::ProvenanceRecord;
