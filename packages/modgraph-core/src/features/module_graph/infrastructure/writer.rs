//! Graph Writer
//!
//! Serializes a [`ModuleGraph`] as the JSON output document.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::Result;
use crate::features::module_graph::domain::ModuleGraph;

/// Encode `graph` as a JSON string
pub fn to_json_string(graph: &ModuleGraph, pretty: bool) -> Result<String> {
    let document = graph.to_document();
    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

/// Write `graph` to `path`, creating parent directories as needed
pub fn write_graph(graph: &ModuleGraph, path: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let document = graph.to_document();
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &document)?;
    } else {
        serde_json::to_writer(&mut writer, &document)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
