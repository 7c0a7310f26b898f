//! Complexity analyzer implementations

mod mccabe;

pub use mccabe::McCabeAnalyzer;

use super::domain::ComplexityEntry;
use super::ports::ComplexityAnalyzer;
use crate::features::parsing::ParsedModule;

/// Analyzer used when complexity is turned off: every module gets an empty list
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAnalyzer;

impl ComplexityAnalyzer for DisabledAnalyzer {
    fn analyze(&self, _module: &ParsedModule) -> Vec<ComplexityEntry> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
