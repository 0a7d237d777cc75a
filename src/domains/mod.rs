//! Domain entities, their normalization rules, and relation registries

mod entity;
pub mod knowledge;
pub mod relations;
pub mod structure;

pub use entity::{display_name, normalize, DomainEntity, EntityKind, NAME_MAX_CHARS};
pub use knowledge::{Concept, Person, Quote, Work};
pub use relations::{RelationRegistry, KNOWLEDGE, REGISTRIES, STRUCTURE};
pub use structure::{Document, Segment, DEFAULT_SEGMENT_ROLE};
