//! Module Graph Feature
//!
//! Reconstructs the import graph of a Python namespace in two phases:
//! a recursive resolution that builds a tree of module records per entry
//! point, then a flattening pass that collapses trees into unique nodes and
//! edges.
//!
//! ## Structure
//! - `domain/` - ModuleRecord (tree form), ModuleNode, Edge, ModuleGraph
//! - `infrastructure/` - PathResolver, ModuleResolver, flatten, writer
//! - `application/` - ReconstructionDriver (one traversal per entry point)

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{discover_entry_points, module_name_for_file, reconstruct, ReconstructionDriver};
pub use domain::{
    Edge, GraphStats, ModuleGraph, ModuleKind, ModuleNode, ModuleRecord, NodeStatus,
    ReconstructionDocument,
};
pub use infrastructure::{
    flatten, to_json_string, write_graph, ModuleResolver, PathResolver, ResolutionPath,
    ResolvedPath, ResolverStats,
};
