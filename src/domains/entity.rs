//! Domain entities and their normalization into graph nodes
//!
//! Every variant projects its fields verbatim into the node's property bag.
//! Variants whose human-readable field is not literally `name` also get a
//! derived `name` property, truncated to [`NAME_MAX_CHARS`] characters, so
//! every node can be displayed and indexed the same way.

use super::knowledge::{Concept, Person, Quote, Work};
use super::structure::{Document, Segment};
use crate::graph::{GraphError, GraphNode, GraphResult, Properties, PropertyValue};
use crate::provenance::ProvenanceRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Longest derived `name`, in characters
pub const NAME_MAX_CHARS: usize = 50;

/// The closed set of entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Person,
    Work,
    Concept,
    Quote,
    Document,
    Segment,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        Self::Person,
        Self::Work,
        Self::Concept,
        Self::Quote,
        Self::Document,
        Self::Segment,
    ];

    /// Node label for this kind
    pub const fn label(self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Work => "Work",
            Self::Concept => "Concept",
            Self::Quote => "Quote",
            Self::Document => "Document",
            Self::Segment => "Segment",
        }
    }

    /// Field whose value becomes the node's `name`
    pub const fn display_field(self) -> &'static str {
        match self {
            Self::Person => "name",
            Self::Work => "title",
            Self::Concept => "name",
            Self::Quote => "text",
            Self::Document => "title",
            Self::Segment => "text",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw, variant-specific record waiting to be normalized.
///
/// Entities hold no identity; a node id is minted only by
/// [`DomainEntity::to_graph_node`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DomainEntity {
    Person(Person),
    Work(Work),
    Concept(Concept),
    Quote(Quote),
    Document(Document),
    Segment(Segment),
}

impl DomainEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Person(_) => EntityKind::Person,
            Self::Work(_) => EntityKind::Work,
            Self::Concept(_) => EntityKind::Concept,
            Self::Quote(_) => EntityKind::Quote,
            Self::Document(_) => EntityKind::Document,
            Self::Segment(_) => EntityKind::Segment,
        }
    }

    /// Project this entity into a node with a fresh id.
    ///
    /// `sources` is attached as given; an empty slice yields a node without
    /// provenance. Fails with [`GraphError::Validation`] if a required field
    /// is missing or empty, in which case nothing is produced.
    pub fn to_graph_node(&self, sources: &[Arc<ProvenanceRecord>]) -> GraphResult<GraphNode> {
        let kind = self.kind();
        let mut properties = match self {
            Self::Person(p) => p.fields()?,
            Self::Work(w) => w.fields()?,
            Self::Concept(c) => c.fields()?,
            Self::Quote(q) => q.fields()?,
            Self::Document(d) => d.fields()?,
            Self::Segment(s) => s.fields()?,
        };
        apply_display_name(kind, &mut properties)?;
        GraphNode::new(kind.label(), properties, sources.to_vec())
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for DomainEntity {
                fn from(entity: $variant) -> Self {
                    Self::$variant(entity)
                }
            }
        )*
    };
}

impl_from_variant!(Person, Work, Concept, Quote, Document, Segment);

/// Normalize anything convertible into a [`DomainEntity`]
pub fn normalize(
    entity: impl Into<DomainEntity>,
    sources: &[Arc<ProvenanceRecord>],
) -> GraphResult<GraphNode> {
    entity.into().to_graph_node(sources)
}

/// First [`NAME_MAX_CHARS`] characters of `text`
pub fn display_name(text: &str) -> String {
    text.chars().take(NAME_MAX_CHARS).collect()
}

fn apply_display_name(kind: EntityKind, properties: &mut Properties) -> GraphResult<()> {
    let field = kind.display_field();
    if field == "name" {
        return Ok(());
    }
    let source = properties
        .get(field)
        .and_then(PropertyValue::as_str)
        .ok_or_else(|| GraphError::validation(kind.label(), format!("{field} is required")))?;
    let name = display_name(source);
    properties.insert("name".into(), name.into());
    Ok(())
}

/// Reject a missing (empty or blank) required field
pub(crate) fn require<'a>(entity: &str, field: &str, value: &'a str) -> GraphResult<&'a str> {
    if value.trim().is_empty() {
        return Err(GraphError::validation(entity, format!("{field} is required")));
    }
    Ok(value)
}

pub(crate) fn insert_optional(properties: &mut Properties, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        properties.insert(key.to_string(), v.into());
    }
}
