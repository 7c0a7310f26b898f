//! Complexity Feature
//!
//! Attaches an opaque `{artifact, complexity}` list to every resolved module.
//! The module graph never inspects it; it only passes it through.
//!
//! ## Structure
//! - `domain` - ComplexityEntry
//! - `ports` - ComplexityAnalyzer trait
//! - `infrastructure/` - McCabeAnalyzer, DisabledAnalyzer

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::ComplexityEntry;
pub use infrastructure::{DisabledAnalyzer, McCabeAnalyzer};
pub use ports::ComplexityAnalyzer;
