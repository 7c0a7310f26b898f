//! Module graph infrastructure

pub mod flattener;
pub mod module_resolver;
pub mod path_resolver;
pub mod writer;

pub use flattener::flatten;
pub use module_resolver::{ModuleResolver, ResolutionPath, ResolverStats};
pub use path_resolver::{PathResolver, ResolvedPath};
pub use writer::{to_json_string, write_graph};
