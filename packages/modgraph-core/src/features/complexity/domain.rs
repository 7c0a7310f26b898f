//! Complexity domain model

use serde::{Deserialize, Serialize};

/// Complexity score of one artifact (function, method, or module-level branch)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplexityEntry {
    pub artifact: String,
    pub complexity: u32,
}

impl ComplexityEntry {
    pub fn new(artifact: impl Into<String>, complexity: u32) -> Self {
        Self {
            artifact: artifact.into(),
            complexity,
        }
    }
}
