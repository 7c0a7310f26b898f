//! Shared models

pub mod span;

pub use span::{Location, Span};
