//! Path Resolver
//!
//! Maps a dotted module name to its source file under the namespace root.
//! `a.b` is looked up as `<root>/a/b/__init__.py` first, then
//! `<root>/a/b.py`.

use std::path::{Path, PathBuf};

use crate::features::parsing::ModuleLocator;
use crate::shared::constants::python::{PACKAGE_MARKER, SOURCE_EXTENSION};
use crate::shared::utils::module_name::{is_valid_module_name, module_name_to_relative_path};

/// Source file a module name resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: PathBuf,
    /// True for a package marker (`__init__.py`)
    pub is_package: bool,
}

/// Maps dotted names to files under one namespace root
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `module_name` to a source file, or `None` if it is external.
    ///
    /// One trailing `.` is dropped, so `pkg.` and `pkg` resolve alike. The
    /// empty name is the root's own package marker. A name with any segment
    /// that is not an identifier never resolves.
    pub fn resolve(&self, module_name: &str) -> Option<ResolvedPath> {
        let name = module_name.strip_suffix('.').unwrap_or(module_name);
        if !name.is_empty() && !is_valid_module_name(name) {
            return None;
        }

        let base = self.root.join(module_name_to_relative_path(name));

        let marker = base.join(PACKAGE_MARKER);
        if marker.is_file() {
            return Some(ResolvedPath {
                path: marker,
                is_package: true,
            });
        }

        if name.is_empty() {
            return None;
        }

        let flat = base.with_extension(SOURCE_EXTENSION);
        if flat.is_file() {
            return Some(ResolvedPath {
                path: flat,
                is_package: false,
            });
        }

        None
    }
}

impl ModuleLocator for PathResolver {
    fn exists(&self, module_name: &str) -> bool {
        self.resolve(module_name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_package_marker_wins_over_flat_file() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "pkg/__init__.py");
        touch(dir.path(), "pkg.py");

        let resolved = PathResolver::new(dir.path()).resolve("pkg").unwrap();
        assert!(resolved.is_package);
        assert_eq!(resolved.path, dir.path().join("pkg").join("__init__.py"));
    }

    #[test]
    fn test_flat_module() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "pkg/__init__.py");
        touch(dir.path(), "pkg/util.py");

        let resolved = PathResolver::new(dir.path()).resolve("pkg.util").unwrap();
        assert!(!resolved.is_package);
        assert_eq!(resolved.path, dir.path().join("pkg").join("util.py"));
    }

    #[test]
    fn test_missing_and_invalid_names() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "pkg/__init__.py");
        let resolver = PathResolver::new(dir.path());

        assert!(resolver.resolve("os").is_none());
        assert!(resolver.resolve("pkg.missing").is_none());
        assert!(resolver.resolve("..pkg").is_none());
        assert!(resolver.resolve("pkg..x").is_none());
        assert!(resolver.resolve("a-b").is_none());
    }

    #[test]
    fn test_trailing_dot_and_empty_name() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "pkg/__init__.py");
        let resolver = PathResolver::new(dir.path());

        assert_eq!(resolver.resolve("pkg."), resolver.resolve("pkg"));
        assert!(resolver.resolve("").is_none());

        touch(dir.path(), "__init__.py");
        let root_marker = resolver.resolve("").unwrap();
        assert!(root_marker.is_package);
    }

    #[test]
    fn test_directory_without_marker_is_external() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("namespace")).unwrap();
        assert!(!PathResolver::new(dir.path()).exists("namespace"));
    }
}
