//! Parsed module representation
//!
//! Owns the source text together with its tree so extractors and analyzers
//! can borrow node text without re-reading the file.

use std::path::{Path, PathBuf};

use tree_sitter::{Node, Tree};

/// A syntactically valid Python source file
#[derive(Debug)]
pub struct ParsedModule {
    path: PathBuf,
    source: String,
    tree: Tree,
}

impl ParsedModule {
    pub fn new(path: PathBuf, source: String, tree: Tree) -> Self {
        Self { path, source, tree }
    }

    /// File path (for error messages)
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }
}
