//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations

// Python source → tree-sitter tree → import declarations
pub mod parsing;

// McCabe cyclomatic complexity per function / module-level branch
pub mod complexity;

// Path resolution, recursive module resolution, flattening, reconstruction driver
pub mod module_graph;
