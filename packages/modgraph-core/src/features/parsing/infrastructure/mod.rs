//! Parsing infrastructure - external dependencies

pub mod extractors;
pub mod tree_sitter;

pub use self::tree_sitter::PythonParser;
