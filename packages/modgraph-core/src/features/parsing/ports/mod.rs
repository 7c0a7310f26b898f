//! Parsing ports (interfaces)

mod locator;

pub use locator::ModuleLocator;
