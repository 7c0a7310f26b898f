//! Centralized constants for the Python namespace layout

/// Python namespace conventions
pub mod python {
    /// Package marker file name
    pub const PACKAGE_MARKER: &str = "__init__.py";

    /// Stem of the package marker, as it appears in a dotted name
    pub const PACKAGE_MARKER_STEM: &str = "__init__";

    /// Source file extension (without the dot)
    pub const SOURCE_EXTENSION: &str = "py";

    /// Module name used by `from __future__ import ...`
    pub const FUTURE_MODULE: &str = "__future__";
}

/// Directory walking
pub mod walk {
    /// Directories never entered while enumerating entry points
    pub const SKIPPED_DIRS: &[&str] = &["__pycache__"];
}
