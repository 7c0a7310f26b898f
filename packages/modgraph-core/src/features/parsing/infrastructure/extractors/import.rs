/*
 * Import Statement Extractor
 *
 * Extracts import declarations from a Python tree:
 * - import module
 * - import module as alias
 * - from module import name
 * - from module import name as alias
 * - from module import *
 * - from . import name (relative imports)
 * - from __future__ import name
 *
 * and turns them into the dotted names of the modules they depend on.
 */

use tree_sitter::Node;

use crate::features::parsing::domain::{ImportDeclaration, ImportKind, ImportScope, ParsedModule};
use crate::features::parsing::ports::ModuleLocator;
use crate::shared::constants::python::FUTURE_MODULE;
use crate::shared::utils::tree_sitter::{
    children_by_field, extract_node_text, find_child_by_kind, named_children, node_to_span,
};

/// Extract every import declaration of `parsed`, in source order
pub fn extract_imports(parsed: &ParsedModule, scope: ImportScope) -> Vec<ImportDeclaration> {
    let source = parsed.source();
    let root = parsed.root_node();
    let mut imports = Vec::new();

    match scope {
        ImportScope::ModuleLevel => {
            for statement in named_children(&root) {
                extract_statement(&statement, source, &mut imports);
            }
        }
        ImportScope::Nested => {
            let mut stack = vec![root];
            while let Some(current) = stack.pop() {
                if is_import_statement(current.kind()) {
                    extract_statement(&current, source, &mut imports);
                    continue;
                }
                // Reverse so the stack pops children in source order
                stack.extend(named_children(&current).into_iter().rev());
            }
        }
    }

    imports
}

fn is_import_statement(kind: &str) -> bool {
    matches!(
        kind,
        "import_statement" | "import_from_statement" | "future_import_statement"
    )
}

fn extract_statement(node: &Node, source: &str, imports: &mut Vec<ImportDeclaration>) {
    match node.kind() {
        "import_statement" => imports.extend(extract_import_statement(node, source)),
        "import_from_statement" => imports.extend(extract_import_from_statement(node, source)),
        "future_import_statement" => imports.extend(extract_future_import(node, source)),
        _ => {}
    }
}

/// Extract declarations from an import_statement node
///
/// Handles: `import a`, `import a.b as c`, `import a, b`.
/// Each imported module becomes its own declaration.
pub fn extract_import_statement(node: &Node, source: &str) -> Vec<ImportDeclaration> {
    if node.kind() != "import_statement" {
        return Vec::new();
    }

    let span = node_to_span(node);
    children_by_field(node, "name")
        .iter()
        .filter_map(|name| imported_name(name, source))
        .map(|module| ImportDeclaration::module_import(module, span))
        .collect()
}

/// Extract the declaration of an import_from_statement node
///
/// Handles: `from a import b`, `from a import (b as c, d)`,
///          `from . import b`, `from ..a import b`, `from a import *`
pub fn extract_import_from_statement(node: &Node, source: &str) -> Option<ImportDeclaration> {
    if node.kind() != "import_from_statement" {
        return None;
    }

    let module_node = node.child_by_field_name("module_name")?;
    let (module, relative_level) = match module_node.kind() {
        "relative_import" => {
            let level = find_child_by_kind(&module_node, "import_prefix")
                .map(|prefix| extract_node_text(&prefix, source).matches('.').count() as u32)
                .unwrap_or(0);
            let module = find_child_by_kind(&module_node, "dotted_name")
                .map(|name| dotted_text(&name, source))
                .unwrap_or_default();
            (module, level)
        }
        _ => (dotted_text(&module_node, source), 0),
    };

    let names = if find_child_by_kind(node, "wildcard_import").is_some() {
        vec!["*".to_string()]
    } else {
        children_by_field(node, "name")
            .iter()
            .filter_map(|name| imported_name(name, source))
            .collect()
    };

    Some(ImportDeclaration::from_import(
        module,
        names,
        relative_level,
        node_to_span(node),
    ))
}

/// `from __future__ import annotations` has its own node kind
fn extract_future_import(node: &Node, source: &str) -> Option<ImportDeclaration> {
    let names: Vec<String> = children_by_field(node, "name")
        .iter()
        .filter_map(|name| imported_name(name, source))
        .collect();

    Some(ImportDeclaration::from_import(
        FUTURE_MODULE,
        names,
        0,
        node_to_span(node),
    ))
}

/// Name part of a `dotted_name` or `aliased_import` node (alias dropped)
fn imported_name(node: &Node, source: &str) -> Option<String> {
    match node.kind() {
        "dotted_name" | "identifier" => Some(dotted_text(node, source)),
        "aliased_import" => node
            .child_by_field_name("name")
            .map(|name| dotted_text(&name, source)),
        _ => None,
    }
}

/// Node text with any whitespace inside the dotted name removed
fn dotted_text(node: &Node, source: &str) -> String {
    extract_node_text(node, source).split_whitespace().collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Dependency names
// ═══════════════════════════════════════════════════════════════════════════

/// Dotted names of the modules `imports` depend on, one entry per imported
/// name, in declaration order (duplicates kept).
///
/// `package` is the package the importing module belongs to (the module
/// itself for a package marker, its parent otherwise, empty at the root);
/// it anchors relative imports.
///
/// For `from p import q`, `p.q` is the dependency when the locator finds
/// it, otherwise `p` (the import pulls a name out of `p`).
pub fn dependency_names(
    imports: &[ImportDeclaration],
    package: &str,
    locator: &dyn ModuleLocator,
) -> Vec<String> {
    let mut names = Vec::new();

    for import in imports {
        match import.kind {
            ImportKind::Module => names.push(import.module.clone()),
            ImportKind::From => {
                let parent = absolute_module(import, package);
                for member in &import.names {
                    let candidate = join_module(&parent, member);
                    if member != "*" && locator.exists(&candidate) {
                        names.push(candidate);
                    } else {
                        names.push(parent.clone());
                    }
                }
            }
        }
    }

    names
}

/// Absolute dotted name of the module a from-import reads from.
///
/// Relative imports walk up `level - 1` packages from `package`; when that
/// would leave the namespace root the raw relative text (`..x`) is kept,
/// which never resolves and ends up as an external leaf.
pub fn absolute_module(import: &ImportDeclaration, package: &str) -> String {
    if !import.is_relative() {
        return import.module.clone();
    }

    let segments: Vec<&str> = package.split('.').filter(|s| !s.is_empty()).collect();
    let level = import.relative_level as usize;
    if level > segments.len() {
        return format!("{}{}", ".".repeat(level), import.module);
    }

    let base = segments[..segments.len() + 1 - level].join(".");
    join_module(&base, &import.module)
}

fn join_module(parent: &str, member: &str) -> String {
    match (parent.is_empty(), member.is_empty()) {
        (true, _) => member.to_string(),
        (_, true) => parent.to_string(),
        _ => format!("{}.{}", parent, member),
    }
}
