//! Graph Flattener
//!
//! Collapses resolution trees into a [`ModuleGraph`]: one node per record
//! (children stripped) and one `parent -> child` edge per child.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::features::module_graph::domain::{ModuleGraph, ModuleRecord};

/// Flatten `records` and everything reachable from them.
///
/// Name collisions follow [`ModuleGraph::insert_node`]. A resolved record is
/// walked once per call: every record for a given name below a memoizing
/// resolver is the same subtree.
pub fn flatten(records: &[Arc<ModuleRecord>]) -> ModuleGraph {
    let mut graph = ModuleGraph::new();
    let mut walked: FxHashSet<&str> = FxHashSet::default();
    let mut stack: Vec<&ModuleRecord> = records.iter().rev().map(Arc::as_ref).collect();

    while let Some(record) = stack.pop() {
        graph.insert_node(record.to_node());

        if !record.is_resolved() || !walked.insert(record.module_name.as_str()) {
            continue;
        }

        for child in record.requires() {
            graph.insert_edge(record.module_name.as_str(), child.module_name.as_str());
        }
        // Reverse so children are visited in import order
        stack.extend(record.requires().iter().rev().map(Arc::as_ref));
    }

    graph
}
