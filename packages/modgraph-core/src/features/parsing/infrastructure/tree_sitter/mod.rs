//! Tree-sitter parser
//!
//! This is where the tree-sitter dependency lives.

mod parser;

pub use parser::PythonParser;
