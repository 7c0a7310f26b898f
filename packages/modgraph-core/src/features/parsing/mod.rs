//! Parsing Feature
//!
//! Turns a Python source file into a tree-sitter tree and its import
//! declarations.
//!
//! ## Structure
//! - `domain/` - ParsedModule, ImportDeclaration, ImportScope
//! - `ports/` - ModuleLocator (filesystem lookup used by import-from disambiguation)
//! - `infrastructure/` - PythonParser, import extractor

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{ImportDeclaration, ImportKind, ImportScope, ParsedModule};
pub use infrastructure::extractors::import::{dependency_names, extract_imports};
pub use infrastructure::PythonParser;
pub use ports::ModuleLocator;
