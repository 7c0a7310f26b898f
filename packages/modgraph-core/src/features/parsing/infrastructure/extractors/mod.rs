//! Extractors over tree-sitter Python trees

pub mod import;
