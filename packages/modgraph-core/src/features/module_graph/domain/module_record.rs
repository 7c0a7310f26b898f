//! Module records
//!
//! A [`ModuleRecord`] is the tree form produced by the resolver: a resolved
//! record owns its children (`requires`). A [`ModuleNode`] is the same
//! record once flattened, with `requires` stripped.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::features::complexity::ComplexityEntry;

/// State of a module record. Exactly one applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleKind {
    /// No file under the namespace root
    External,

    /// Placeholder for a module that was already in flight on the current
    /// traversal
    Circular,

    /// Internal module whose file was read and parsed
    Resolved {
        complexity: Vec<ComplexityEntry>,
        /// Child records in import order (shared with the resolver cache)
        requires: Vec<Arc<ModuleRecord>>,
    },
}

/// One node of the resolution tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
    pub module_name: String,
    pub kind: ModuleKind,
}

impl ModuleRecord {
    pub fn external(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            kind: ModuleKind::External,
        }
    }

    pub fn circular(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            kind: ModuleKind::Circular,
        }
    }

    pub fn resolved(
        module_name: impl Into<String>,
        complexity: Vec<ComplexityEntry>,
        requires: Vec<Arc<ModuleRecord>>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            kind: ModuleKind::Resolved {
                complexity,
                requires,
            },
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.kind, ModuleKind::External)
    }

    pub fn is_circular(&self) -> bool {
        matches!(self.kind, ModuleKind::Circular)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.kind, ModuleKind::Resolved { .. })
    }

    /// Children of a resolved record; empty for the other states
    pub fn requires(&self) -> &[Arc<ModuleRecord>] {
        match &self.kind {
            ModuleKind::Resolved { requires, .. } => requires,
            _ => &[],
        }
    }

    /// Flattened form (`requires` stripped)
    pub fn to_node(&self) -> ModuleNode {
        let status = match &self.kind {
            ModuleKind::External => NodeStatus::External,
            ModuleKind::Circular => NodeStatus::Circular,
            ModuleKind::Resolved { complexity, .. } => NodeStatus::Resolved {
                complexity: complexity.clone(),
            },
        };
        ModuleNode {
            module_name: self.module_name.clone(),
            status,
        }
    }
}

/// State of a flattened node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeStatus {
    External,
    Circular,
    Resolved { complexity: Vec<ComplexityEntry> },
}

/// A module in the final graph.
///
/// On the wire: `{"moduleName": ..}` plus exactly one of `"external": true`,
/// `"circular": true` or `"complexity": [..]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireModuleNode", into = "WireModuleNode")]
pub struct ModuleNode {
    pub module_name: String,
    pub status: NodeStatus,
}

impl ModuleNode {
    pub fn is_circular(&self) -> bool {
        self.status == NodeStatus::Circular
    }

    pub fn is_external(&self) -> bool {
        self.status == NodeStatus::External
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.status, NodeStatus::Resolved { .. })
    }

    pub fn complexity(&self) -> Option<&[ComplexityEntry]> {
        match &self.status {
            NodeStatus::Resolved { complexity } => Some(complexity),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireModuleNode {
    module_name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    external: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    circular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    complexity: Option<Vec<ComplexityEntry>>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<ModuleNode> for WireModuleNode {
    fn from(node: ModuleNode) -> Self {
        let (external, circular, complexity) = match node.status {
            NodeStatus::External => (true, false, None),
            NodeStatus::Circular => (false, true, None),
            NodeStatus::Resolved { complexity } => (false, false, Some(complexity)),
        };
        Self {
            module_name: node.module_name,
            external,
            circular,
            complexity,
        }
    }
}

impl TryFrom<WireModuleNode> for ModuleNode {
    type Error = String;

    fn try_from(wire: WireModuleNode) -> Result<Self, Self::Error> {
        let status = match (wire.external, wire.circular, wire.complexity) {
            (true, false, None) => NodeStatus::External,
            (false, true, None) => NodeStatus::Circular,
            (false, false, Some(complexity)) => NodeStatus::Resolved { complexity },
            _ => {
                return Err(format!(
                    "module '{}' must be exactly one of external, circular or resolved",
                    wire.module_name
                ))
            }
        };
        Ok(Self {
            module_name: wire.module_name,
            status,
        })
    }
}
