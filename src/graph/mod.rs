//! Core graph data structures

mod edge;
mod error;
mod node;


pub use edge::{EdgeId, GraphEdge};
pub use error::{GraphError, GraphResult};
pub use node::{GraphNode, NodeId, Properties, PropertyValue, RESERVED_ID_KEY};
