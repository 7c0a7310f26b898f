//! Complexity analyzer port

use super::domain::ComplexityEntry;
use crate::features::parsing::ParsedModule;

/// Computes the complexity payload of one parsed module
pub trait ComplexityAnalyzer: Send + Sync {
    fn analyze(&self, module: &ParsedModule) -> Vec<ComplexityEntry>;

    /// Analyzer name for logging
    fn name(&self) -> &'static str;
}
