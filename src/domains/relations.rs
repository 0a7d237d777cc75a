//! Relation registries: the closed set of edge tags each domain may use

use crate::graph::{GraphError, GraphResult};
use serde::Serialize;

/// Structural relation tags
pub mod structure {
    /// Segment belongs to a document
    pub const PART_OF: &str = "PART_OF";
    /// Segment is followed by the next segment
    pub const NEXT: &str = "NEXT";
    /// Document's first segment
    pub const STARTS_WITH: &str = "STARTS_WITH";

    pub const ALL: &[&str] = &[PART_OF, NEXT, STARTS_WITH];
}

/// Knowledge relation tags
pub mod knowledge {
    pub const AUTHORED: &str = "AUTHORED";
    pub const DISCUSSES: &str = "DISCUSSES";
    pub const MENTIONS: &str = "MENTIONS";
    pub const QUOTES: &str = "QUOTES";
    pub const CITES: &str = "CITES";
    pub const INFLUENCED: &str = "INFLUENCED";
    pub const RELATED_TO: &str = "RELATED_TO";

    pub const ALL: &[&str] = &[
        AUTHORED, DISCUSSES, MENTIONS, QUOTES, CITES, INFLUENCED, RELATED_TO,
    ];
}

/// A read-only catalog of relation tags for one domain.
///
/// Registries are constants; any number of assemblers may share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelationRegistry {
    domain: &'static str,
    tags: &'static [&'static str],
}

/// Relations between documents and their segments
pub const STRUCTURE: RelationRegistry = RelationRegistry {
    domain: "structure",
    tags: structure::ALL,
};

/// Relations between people, works, concepts and quotes
pub const KNOWLEDGE: RelationRegistry = RelationRegistry {
    domain: "knowledge",
    tags: knowledge::ALL,
};

/// Every registry this crate defines
pub const REGISTRIES: &[RelationRegistry] = &[STRUCTURE, KNOWLEDGE];

impl RelationRegistry {
    pub fn domain(&self) -> &'static str {
        self.domain
    }

    /// All tags, in declaration order
    pub fn all_tags(&self) -> &'static [&'static str] {
        self.tags
    }

    pub fn is_valid(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    /// Like [`is_valid`](Self::is_valid), but as an error for use with `?`
    pub fn require(&self, tag: &str) -> GraphResult<&'static str> {
        self.tags
            .iter()
            .copied()
            .find(|t| *t == tag)
            .ok_or_else(|| GraphError::InvalidRelation {
                domain: self.domain.to_string(),
                tag: tag.to_string(),
            })
    }

    /// Look a registry up by its domain name
    pub fn by_domain(domain: &str) -> Option<RelationRegistry> {
        REGISTRIES.iter().copied().find(|r| r.domain == domain)
    }
}
