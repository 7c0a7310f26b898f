//! Module graph application layer

pub mod reconstruct;

pub use reconstruct::{discover_entry_points, module_name_for_file, reconstruct, ReconstructionDriver};
