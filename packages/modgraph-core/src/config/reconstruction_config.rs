//! Reconstruction run configuration
//!
//! Built programmatically (builder-style setters) or loaded from a YAML v1
//! file. CLI flags are applied on top of a loaded file by the binary.

use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigFileV1, SUPPORTED_VERSIONS};
use crate::features::parsing::ImportScope;
use crate::shared::utils::module_name::{is_valid_module_name, module_name_to_relative_path};

/// Default output file when no package (or several) is selected
pub const DEFAULT_OUTPUT: &str = "reconstruction.json";

/// Settings for one reconstruction run
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructionConfig {
    /// Namespace root: dotted names are resolved relative to this directory
    pub root: PathBuf,

    /// Packages under the root to enumerate as entry points (empty = whole root)
    pub packages: Vec<String>,

    /// Explicit output path; see [`ReconstructionConfig::output_path`]
    pub output: Option<PathBuf>,

    pub import_scope: ImportScope,

    /// Compute McCabe complexity for resolved modules
    pub complexity: bool,

    /// Pretty-print the output document
    pub pretty: bool,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            packages: Vec::new(),
            output: None,
            import_scope: ImportScope::default(),
            complexity: true,
            pretty: false,
        }
    }
}

impl ReconstructionConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.packages.push(name.into());
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn import_scope(mut self, scope: ImportScope) -> Self {
        self.import_scope = scope;
        self
    }

    pub fn complexity(mut self, enabled: bool) -> Self {
        self.complexity = enabled;
        self
    }

    pub fn pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    /// Where the output document goes.
    ///
    /// An explicit `output` wins; with exactly one package the name is
    /// `reconstruction-<package>.json`, otherwise [`DEFAULT_OUTPUT`].
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        match self.packages.as_slice() {
            [package] => PathBuf::from(format!("reconstruction-{}.json", package)),
            _ => PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Directories whose `.py` files are entry points
    pub fn entry_dirs(&self) -> Vec<PathBuf> {
        if self.packages.is_empty() {
            return vec![self.root.clone()];
        }
        self.packages
            .iter()
            .map(|package| self.root.join(module_name_to_relative_path(package)))
            .collect()
    }

    /// Check that the root and every package directory exist
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.root.exists() {
            return Err(ConfigError::invalid_root(self.root.clone(), "does not exist"));
        }
        if !self.root.is_dir() {
            return Err(ConfigError::invalid_root(self.root.clone(), "not a directory"));
        }

        for package in &self.packages {
            if !is_valid_module_name(package) {
                return Err(ConfigError::InvalidPackage(package.clone()));
            }
            let dir = self.root.join(module_name_to_relative_path(package));
            if !dir.is_dir() {
                return Err(ConfigError::InvalidPackage(package.clone()));
            }
        }

        Ok(())
    }

    /// Load configuration from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let defaults = Self::default();
        Ok(Self {
            root: file.root.unwrap_or(defaults.root),
            packages: file.packages,
            output: file.output,
            import_scope: file.import_scope.unwrap_or(defaults.import_scope),
            complexity: file.complexity.unwrap_or(defaults.complexity),
            pretty: file.pretty.unwrap_or(defaults.pretty),
        })
    }

    /// Export as YAML v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            root: Some(self.root.clone()),
            packages: self.packages.clone(),
            output: self.output.clone(),
            import_scope: Some(self.import_scope),
            complexity: Some(self.complexity),
            pretty: Some(self.pretty),
        };

        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}
