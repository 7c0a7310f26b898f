//! Utility modules shared across features
//!
//! - `module_name`: dotted-name validation and path conversion
//! - `tree_sitter`: Tree-sitter AST traversal and extraction

pub mod module_name;
pub mod tree_sitter;
