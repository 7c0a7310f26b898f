//! Shared module - Common types and utilities
//!
//! Types and helpers used by more than one feature.

pub mod constants;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
