//! Module locator port
//!
//! `from p import q` is ambiguous between "import submodule `p.q`" and
//! "import name `q` defined in `p`". Only the filesystem can tell, so the
//! import extractor asks a locator.

/// Answers whether a dotted name maps to a source file under the namespace root
pub trait ModuleLocator {
    fn exists(&self, module_name: &str) -> bool;
}

impl<F> ModuleLocator for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, module_name: &str) -> bool {
        self(module_name)
    }
}
