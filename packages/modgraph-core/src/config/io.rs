//! Configuration I/O (YAML schema)
//!
//! Defines the on-disk schema. Loading and conversion live in
//! reconstruction_config.rs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::features::parsing::ImportScope;

/// YAML Schema v1
///
/// Every field except `version` is optional; missing fields keep the
/// defaults of [`super::ReconstructionConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Namespace root directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Packages under the root to enumerate as entry points
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<String>,

    /// Output document path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_scope: Option<ImportScope>,

    /// Compute McCabe complexity for resolved modules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<bool>,

    /// Pretty-print the output document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}

/// Supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];
