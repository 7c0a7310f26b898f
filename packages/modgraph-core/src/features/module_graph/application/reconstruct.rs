//! Reconstruction Driver
//!
//! Every source file under the entry directories is an entry point. Each
//! one is resolved with a fresh [`ResolutionPath`], flattened, and merged
//! into the running graph.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ReconstructionConfig;
use crate::errors::Result;
use crate::features::complexity::{ComplexityAnalyzer, DisabledAnalyzer, McCabeAnalyzer};
use crate::features::module_graph::domain::ModuleGraph;
use crate::features::module_graph::infrastructure::{
    flatten, ModuleResolver, PathResolver, ResolutionPath,
};
use crate::shared::constants::python::{PACKAGE_MARKER_STEM, SOURCE_EXTENSION};
use crate::shared::constants::walk::SKIPPED_DIRS;
use crate::shared::utils::module_name::is_valid_module_name;

/// Drives one reconstruction run
pub struct ReconstructionDriver {
    resolver: ModuleResolver,
    root: PathBuf,
    entry_dirs: Vec<PathBuf>,
}

impl ReconstructionDriver {
    /// Build a driver from a validated configuration
    pub fn new(config: &ReconstructionConfig) -> Result<Self> {
        config.validate()?;

        let analyzer: Box<dyn ComplexityAnalyzer> = if config.complexity {
            Box::new(McCabeAnalyzer::new())
        } else {
            Box::new(DisabledAnalyzer)
        };
        let resolver = ModuleResolver::with_analyzer(PathResolver::new(&config.root), analyzer)?
            .with_import_scope(config.import_scope);

        Ok(Self::from_parts(resolver, &config.root, config.entry_dirs()))
    }

    pub fn from_parts(resolver: ModuleResolver, root: impl Into<PathBuf>, entry_dirs: Vec<PathBuf>) -> Self {
        Self {
            resolver,
            root: root.into(),
            entry_dirs,
        }
    }

    pub fn resolver(&self) -> &ModuleResolver {
        &self.resolver
    }

    /// Resolve every entry point and return the merged graph
    pub fn run(&mut self) -> Result<ModuleGraph> {
        info!(
            "reconstructing {} ({} entry dirs, complexity: {})",
            self.root.display(),
            self.entry_dirs.len(),
            self.resolver.analyzer_name()
        );

        let mut graph = ModuleGraph::new();
        let mut entry_points = 0usize;

        for dir in &self.entry_dirs {
            for file in discover_entry_points(dir)? {
                let Some(module_name) = module_name_for_file(&self.root, &file) else {
                    warn!("skipping {}: not an importable module path", file.display());
                    continue;
                };

                if graph.node(&module_name).is_some_and(|node| !node.is_circular()) {
                    debug!("entry point {} already in graph", module_name);
                    continue;
                }

                entry_points += 1;
                debug!("entry point {} ({})", module_name, file.display());

                let mut path = ResolutionPath::new();
                let record = self.resolver.resolve(&module_name, &mut path)?;
                graph.merge(flatten(&[record]));
            }
        }

        let stats = graph.stats();
        let resolver_stats = self.resolver.stats();
        info!(
            "reconstructed {} modules ({} resolved, {} external, {} circular), {} edges, {} cycles from {} entry points ({} files parsed)",
            graph.node_count(),
            stats.resolved,
            stats.external,
            stats.circular,
            stats.edges,
            stats.cycles,
            entry_points,
            resolver_stats.files_parsed
        );

        Ok(graph)
    }
}

/// Validate and run `config`
pub fn reconstruct(config: &ReconstructionConfig) -> Result<ModuleGraph> {
    ReconstructionDriver::new(config)?.run()
}

/// Source files under `dir`, sorted by path.
///
/// Hidden directories and `__pycache__` are not entered.
pub fn discover_entry_points(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e))
    {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || (entry.file_type().is_dir() && SKIPPED_DIRS.iter().any(|dir| name == *dir))
}

/// Dotted name of `file` relative to `root`.
///
/// `pkg/__init__.py` is `pkg`, `pkg/mod.py` is `pkg.mod`. Returns `None`
/// when `file` is outside `root` or a segment is not an identifier.
pub fn module_name_for_file(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    if relative.extension()? != SOURCE_EXTENSION {
        return None;
    }

    let mut segments: Vec<String> = relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_str().map(str::to_string))
        .collect::<Option<_>>()?;
    if segments.last().map(String::as_str) == Some(PACKAGE_MARKER_STEM) {
        segments.pop();
    }

    let name = segments.join(".");
    is_valid_module_name(&name).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, source: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, source).unwrap();
    }

    #[test]
    fn test_module_name_for_file() {
        let root = Path::new("/src");
        assert_eq!(
            module_name_for_file(root, Path::new("/src/pkg/__init__.py")),
            Some("pkg".to_string())
        );
        assert_eq!(
            module_name_for_file(root, Path::new("/src/pkg/sub/mod.py")),
            Some("pkg.sub.mod".to_string())
        );
        assert_eq!(module_name_for_file(root, Path::new("/src/__init__.py")), None);
        assert_eq!(module_name_for_file(root, Path::new("/src/my-script.py")), None);
        assert_eq!(module_name_for_file(root, Path::new("/other/x.py")), None);
        assert_eq!(module_name_for_file(root, Path::new("/src/notes.txt")), None);
    }

    #[test]
    fn test_discover_skips_hidden_and_cache_dirs() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pkg/__init__.py", "");
        write(dir.path(), "pkg/b.py", "");
        write(dir.path(), "pkg/a.py", "");
        write(dir.path(), "pkg/__pycache__/a.py", "");
        write(dir.path(), "pkg/.hidden/x.py", "");
        write(dir.path(), "pkg/README.md", "");

        let files: Vec<PathBuf> = discover_entry_points(&dir.path().join("pkg"))
            .unwrap()
            .into_iter()
            .map(|f| f.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            files,
            vec![
                PathBuf::from("pkg/__init__.py"),
                PathBuf::from("pkg/a.py"),
                PathBuf::from("pkg/b.py"),
            ]
        );
    }

    #[test]
    fn test_run_covers_unreferenced_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pkg/__init__.py", "");
        write(dir.path(), "pkg/island.py", "import json\n");

        let config = ReconstructionConfig::new(dir.path()).package("pkg");
        let graph = reconstruct(&config).unwrap();

        assert!(graph.node("pkg").unwrap().is_resolved());
        assert!(graph.node("pkg.island").unwrap().is_resolved());
        assert!(graph.node("json").unwrap().is_external());
        assert!(graph.contains_edge("pkg.island", "json"));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_imported_entry_is_not_resolved_again() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pkg/__init__.py", "");
        write(dir.path(), "pkg/a.py", "import pkg.b\n");
        write(dir.path(), "pkg/b.py", "");

        let config = ReconstructionConfig::new(dir.path()).package("pkg");
        let mut driver = ReconstructionDriver::new(&config).unwrap();
        let graph = driver.run().unwrap();

        // pkg.b is reached through pkg.a before its own entry comes up
        let stats = driver.resolver().stats();
        assert_eq!(stats.files_parsed, 3);
        assert_eq!(stats.cache_hits, 0);
        assert!(graph.node("pkg.b").unwrap().is_resolved());
        assert!(graph.contains_edge("pkg.a", "pkg.b"));
    }

    #[test]
    fn test_invalid_root_is_config_error() {
        let config = ReconstructionConfig::new("/definitely/not/here");
        assert!(matches!(
            ReconstructionDriver::new(&config),
            Err(crate::errors::ModgraphError::Config(_))
        ));
    }
}
