//! Graph assembly: wiring normalized nodes together with registry-checked edges

mod assembler;
mod config;
mod graph;
mod spine;

pub use assembler::GraphAssembler;
pub use config::{AssemblyConfig, DuplicateEdgePolicy};
pub use graph::AssembledGraph;
pub use spine::{build_spine, Spine, SpineBuilder};
