//! Import declaration model

use serde::{Deserialize, Serialize};

use crate::shared::models::Span;

/// Which statements the import extractor looks at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportScope {
    /// Only statements directly in the module body
    #[default]
    ModuleLevel,
    /// Every import statement in the file, including inside `try`, `if`,
    /// function and class bodies
    Nested,
}

/// The two syntactic forms of a static import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// `import a.b.c` (one declaration per imported name)
    Module,
    /// `from a.b import c, d`
    From,
}

/// One import declaration as written in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    pub kind: ImportKind,

    /// Module being imported (`a.b.c`) or imported from (`a.b`).
    /// Empty for `from . import x`.
    pub module: String,

    /// Names after `import` in a from-import; `*` for a wildcard
    pub names: Vec<String>,

    /// Relative import level (0 = absolute, 1 = `.`, 2 = `..`, ...)
    pub relative_level: u32,

    pub span: Span,
}

impl ImportDeclaration {
    pub fn module_import(module: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ImportKind::Module,
            module: module.into(),
            names: Vec::new(),
            relative_level: 0,
            span,
        }
    }

    pub fn from_import(
        module: impl Into<String>,
        names: Vec<String>,
        relative_level: u32,
        span: Span,
    ) -> Self {
        Self {
            kind: ImportKind::From,
            module: module.into(),
            names,
            relative_level,
            span,
        }
    }

    pub fn is_star_import(&self) -> bool {
        self.names.iter().any(|name| name == "*")
    }

    pub fn is_relative(&self) -> bool {
        self.relative_level > 0
    }
}
