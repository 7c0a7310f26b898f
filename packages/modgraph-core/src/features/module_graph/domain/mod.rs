//! Module graph domain models

mod graph;
mod module_record;

pub use graph::{Edge, GraphStats, ModuleGraph, ReconstructionDocument};
pub use module_record::{ModuleKind, ModuleNode, ModuleRecord, NodeStatus};
