//! Error types for modgraph-core
//!
//! Every failure is fatal for the run: nothing in the core recovers locally.
//! External and circular dependencies are data, not errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for modgraph operations
#[derive(Debug, Error)]
pub enum ModgraphError {
    /// The path resolver picked a file that is gone by the time it is read
    #[error("unresolvable import '{module}': {} does not exist", path.display())]
    UnresolvableImport { module: String, path: PathBuf },

    /// Source file is not valid Python
    #[error("Parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Tree-sitter grammar could not be loaded
    #[error("Grammar error: {0}")]
    Grammar(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error while enumerating entry points
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Output encoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ModgraphError {
    /// Create a parse error
    pub fn parse_error(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        ModgraphError::Parse {
            path: path.into(),
            message: msg.into(),
        }
    }
}

/// Result type alias for modgraph operations
pub type Result<T> = std::result::Result<T, ModgraphError>;
