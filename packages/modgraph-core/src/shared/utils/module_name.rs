//! Dotted module names
//!
//! A module name is a `.`-separated sequence of Python identifiers. Anything
//! else (empty segments, `..`, dashes) cannot name a file under the
//! namespace root.

use std::path::PathBuf;

/// True if `segment` is a Python identifier (keywords are not rejected)
pub fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// True if every dot-separated segment of `name` is an identifier
pub fn is_valid_module_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_identifier)
}

/// `a.b.c` → `a/b/c` (empty segments dropped)
pub fn module_name_to_relative_path(name: &str) -> PathBuf {
    name.split('.').filter(|segment| !segment.is_empty()).collect()
}

/// Parent package of a dotted name (`a.b.c` → `a.b`, `a` → none)
pub fn parent_module(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(parent, _)| parent)
}
