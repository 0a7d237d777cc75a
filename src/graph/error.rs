//! Error type shared by normalization and assembly

use thiserror::Error;

/// Errors that can occur while normalizing entities or assembling a graph
///
/// All of them describe malformed input or a programming error; none are
/// transient, so callers should not retry.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An entity is missing a required field or carries an impossible value
    #[error("{entity} failed validation: {reason}")]
    Validation { entity: String, reason: String },

    /// A relation tag is not part of the registry governing the assembly
    #[error("relation `{tag}` is not registered in the {domain} domain")]
    InvalidRelation { domain: String, tag: String },

    /// An edge points at a node that is not in the accompanying node set
    #[error("edge {edge} references missing node {node}")]
    DanglingReference { edge: String, node: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn validation(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            entity: entity.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
