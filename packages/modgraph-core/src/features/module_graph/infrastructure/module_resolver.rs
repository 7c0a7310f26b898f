//! Module Resolver
//!
//! Recursively expands a module name into its dependency tree.
//!
//! - completed records (resolved or external) are memoized for the lifetime
//!   of the resolver and shared as `Arc`s
//! - a name already on the current [`ResolutionPath`] yields a fresh
//!   circular placeholder instead of recursing; placeholders are never
//!   memoized

use std::fs;
use std::io;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use super::path_resolver::{PathResolver, ResolvedPath};
use crate::errors::{ModgraphError, Result};
use crate::features::complexity::{ComplexityAnalyzer, McCabeAnalyzer};
use crate::features::module_graph::domain::ModuleRecord;
use crate::features::parsing::{dependency_names, extract_imports, ImportScope, PythonParser};
use crate::shared::utils::module_name::parent_module;

/// Names in flight on the current traversal, in entry order
#[derive(Debug, Default, Clone)]
pub struct ResolutionPath {
    stack: Vec<String>,
    members: FxHashSet<String>,
}

impl ResolutionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, module_name: &str) -> bool {
        self.members.contains(module_name)
    }

    /// Push `module_name`; returns false if it was already in flight
    pub fn enter(&mut self, module_name: &str) -> bool {
        if !self.members.insert(module_name.to_string()) {
            return false;
        }
        self.stack.push(module_name.to_string());
        true
    }

    /// Pop `module_name` (must be the innermost entry)
    pub fn leave(&mut self, module_name: &str) {
        if self.stack.last().map(String::as_str) == Some(module_name) {
            self.stack.pop();
            self.members.remove(module_name);
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// In-flight names from the first entry of `module_name` to the innermost
    pub fn cycle_to(&self, module_name: &str) -> &[String] {
        match self.stack.iter().position(|name| name == module_name) {
            Some(start) => &self.stack[start..],
            None => &[],
        }
    }
}

/// Counters for one resolver lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverStats {
    pub files_parsed: usize,
    pub external: usize,
    pub cache_hits: usize,
    pub cycle_hits: usize,
}

/// Recursive module resolver with a per-instance memo cache
pub struct ModuleResolver {
    paths: PathResolver,
    parser: PythonParser,
    complexity: Box<dyn ComplexityAnalyzer>,
    import_scope: ImportScope,
    cache: FxHashMap<String, Arc<ModuleRecord>>,
    stats: ResolverStats,
}

impl ModuleResolver {
    /// Resolver with the McCabe analyzer and module-level imports only
    pub fn new(paths: PathResolver) -> Result<Self> {
        Self::with_analyzer(paths, Box::new(McCabeAnalyzer::new()))
    }

    pub fn with_analyzer(paths: PathResolver, complexity: Box<dyn ComplexityAnalyzer>) -> Result<Self> {
        Ok(Self {
            paths,
            parser: PythonParser::new()?,
            complexity,
            import_scope: ImportScope::default(),
            cache: FxHashMap::default(),
            stats: ResolverStats::default(),
        })
    }

    pub fn with_import_scope(mut self, scope: ImportScope) -> Self {
        self.import_scope = scope;
        self
    }

    pub fn analyzer_name(&self) -> &'static str {
        self.complexity.name()
    }

    /// Memoized record for `module_name`, if any
    pub fn cached(&self, module_name: &str) -> Option<&Arc<ModuleRecord>> {
        self.cache.get(module_name)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn stats(&self) -> ResolverStats {
        self.stats
    }

    /// Resolve `module_name` into its full dependency tree.
    ///
    /// `path` holds the names in flight on the caller's traversal; it is
    /// left as it was on success.
    pub fn resolve(&mut self, module_name: &str, path: &mut ResolutionPath) -> Result<Arc<ModuleRecord>> {
        if let Some(record) = self.cache.get(module_name) {
            self.stats.cache_hits += 1;
            return Ok(Arc::clone(record));
        }

        if !path.enter(module_name) {
            self.stats.cycle_hits += 1;
            debug!(
                "import cycle: {} -> {}",
                path.cycle_to(module_name).join(" -> "),
                module_name
            );
            return Ok(Arc::new(ModuleRecord::circular(module_name)));
        }

        let result = match self.paths.resolve(module_name) {
            None => {
                self.stats.external += 1;
                trace!("external module {}", module_name);
                Ok(Arc::new(ModuleRecord::external(module_name)))
            }
            Some(resolved) => self.resolve_file(module_name, resolved, path),
        };
        path.leave(module_name);

        let record = result?;
        self.cache.insert(module_name.to_string(), Arc::clone(&record));
        Ok(record)
    }

    fn resolve_file(
        &mut self,
        module_name: &str,
        resolved: ResolvedPath,
        path: &mut ResolutionPath,
    ) -> Result<Arc<ModuleRecord>> {
        let source = fs::read_to_string(&resolved.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ModgraphError::UnresolvableImport {
                module: module_name.to_string(),
                path: resolved.path.clone(),
            },
            _ => ModgraphError::Io(e),
        })?;

        let parsed = self.parser.parse(&resolved.path, source)?;
        self.stats.files_parsed += 1;

        let package = if resolved.is_package {
            module_name.strip_suffix('.').unwrap_or(module_name)
        } else {
            parent_module(module_name).unwrap_or("")
        };
        let imports = extract_imports(&parsed, self.import_scope);
        for import in &imports {
            trace!("{} {}: import {:?}", module_name, import.span.start(), import.module);
        }
        let names = dependency_names(&imports, package, &self.paths);
        let complexity = self.complexity.analyze(&parsed);

        let mut requires = Vec::with_capacity(names.len());
        for name in &names {
            requires.push(self.resolve(name, path)?);
        }

        debug!(
            "resolved {} ({}): {} imports, depth {}",
            module_name,
            parsed.path().display(),
            requires.len(),
            path.depth()
        );

        Ok(Arc::new(ModuleRecord::resolved(module_name, complexity, requires)))
    }
}
