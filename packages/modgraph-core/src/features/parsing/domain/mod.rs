//! Parsing domain models

mod import;
mod parsed_module;

pub use import::{ImportDeclaration, ImportKind, ImportScope};
pub use parsed_module::ParsedModule;
