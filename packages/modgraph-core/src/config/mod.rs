//! Configuration
//!
//! Two ways to configure a run:
//! - Builder: `ReconstructionConfig::new(root).package("scrapy")`
//! - YAML v1 file (`version: 1` is mandatory)
//!
//! # Examples
//!
//! ```rust,ignore
//! use modgraph_core::config::ReconstructionConfig;
//!
//! let config = ReconstructionConfig::new("/home/me/scrapy")
//!     .package("scrapy")
//!     .complexity(false);
//! config.validate()?;
//!
//! let config = ReconstructionConfig::from_yaml("modgraph.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod reconstruction_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use reconstruction_config::{ReconstructionConfig, DEFAULT_OUTPUT};
