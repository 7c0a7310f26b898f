/*
 * modgraph - Python module dependency graph reconstruction
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span), constants, tree-sitter helpers
 * - features/    : Vertical slices (parsing → complexity → module_graph)
 * - config/      : ReconstructionConfig (builder + YAML v1)
 * - errors       : ModgraphError
 *
 * A run resolves every Python file under a namespace root into a tree of
 * module records, then flattens the trees into one graph of unique modules
 * and `[source, target]` import edges.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (parsing, complexity, module graph)
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::ReconstructionConfig;
pub use errors::{ModgraphError, Result};
pub use features::complexity::{ComplexityAnalyzer, ComplexityEntry, McCabeAnalyzer};
pub use features::module_graph::{
    flatten, reconstruct, to_json_string, write_graph, Edge, GraphStats, ModuleGraph, ModuleNode,
    ModuleRecord, ModuleResolver, PathResolver, ReconstructionDocument, ReconstructionDriver,
    ResolutionPath,
};
