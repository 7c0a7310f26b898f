//! Test data builders

use std::fs;
use std::path::{Path, PathBuf};

use modgraph_core::config::ReconstructionConfig;
use tempfile::TempDir;

/// Builder for a throwaway Python source tree
pub struct PythonTreeBuilder {
    dir: TempDir,
}

impl PythonTreeBuilder {
    /// Create an empty tree in a fresh temp directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Add a file (parent directories are created)
    pub fn with_file(self, relative: &str, source: impl AsRef<str>) -> Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
        fs::write(&path, source.as_ref()).expect("write source");
        self
    }

    /// Add many files
    pub fn with_files<S: AsRef<str>>(mut self, files: impl IntoIterator<Item = (&'static str, S)>) -> Self {
        for (relative, source) in files {
            self = self.with_file(relative, source);
        }
        self
    }

    /// Add an empty package marker for `package` (dotted)
    pub fn with_package(self, package: &str) -> Self {
        let relative = format!("{}/__init__.py", package.replace('.', "/"));
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("marker has a parent")).expect("create dirs");
        fs::write(&path, "").expect("write marker");
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Configuration rooted at this tree
    pub fn config(&self) -> ReconstructionConfig {
        ReconstructionConfig::new(self.dir.path())
    }
}

impl Default for PythonTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
