//! Flat module graph
//!
//! Nodes are keyed by module name, edges are a set of `(source, target)`
//! pairs. Both are ordered so the output document is deterministic.

use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::module_record::ModuleNode;

/// "source's file contains an import naming target"
///
/// Serialized as a `[source, target]` pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl From<(String, String)> for Edge {
    fn from((source, target): (String, String)) -> Self {
        Self { source, target }
    }
}

impl From<Edge> for (String, String) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}

/// Output document: `{"modules": [...], "requires": [[s, t], ...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructionDocument {
    pub modules: Vec<ModuleNode>,
    pub requires: Vec<Edge>,
}

/// Summary counts of a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub resolved: usize,
    pub external: usize,
    pub circular: usize,
    pub edges: usize,
    /// Import cycles (strongly connected components with more than one
    /// module, plus self-imports)
    pub cycles: usize,
}

/// Unique module nodes and unique edges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleGraph {
    nodes: BTreeMap<String, ModuleNode>,
    edges: BTreeSet<Edge>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under the merge policy.
    ///
    /// A name already present keeps its node, unless the stored node is a
    /// circular placeholder and the new one is not. Returns true if the
    /// graph changed.
    pub fn insert_node(&mut self, node: ModuleNode) -> bool {
        match self.nodes.get_mut(&node.module_name) {
            None => {
                self.nodes.insert(node.module_name.clone(), node);
                true
            }
            Some(existing) if existing.is_circular() && !node.is_circular() => {
                *existing = node;
                true
            }
            Some(_) => false,
        }
    }

    /// Insert an edge; returns false if the pair was already present
    pub fn insert_edge(&mut self, source: impl Into<String>, target: impl Into<String>) -> bool {
        self.edges.insert(Edge::new(source, target))
    }

    /// Merge `other` into `self` with the same policy as [`Self::insert_node`]
    pub fn merge(&mut self, other: ModuleGraph) {
        for (_, node) in other.nodes {
            self.insert_node(node);
        }
        self.edges.extend(other.edges);
    }

    pub fn contains_module(&self, module_name: &str) -> bool {
        self.nodes.contains_key(module_name)
    }

    pub fn node(&self, module_name: &str) -> Option<&ModuleNode> {
        self.nodes.get(module_name)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ModuleNode> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        self.edges.contains(&Edge::new(source, target))
    }

    /// Targets imported by `module_name`
    pub fn dependencies<'a>(&'a self, module_name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |edge| edge.source == module_name)
            .map(|edge| edge.target.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edges with an endpoint missing from the node set (always empty for
    /// graphs built by the flattener)
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|edge| {
                !self.nodes.contains_key(&edge.source) || !self.nodes.contains_key(&edge.target)
            })
            .collect()
    }

    /// Import cycles, each sorted by name, found with Tarjan's SCC
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut graph: DiGraph<&str, ()> = DiGraph::new();
        let mut index: FxHashMap<&str, NodeIndex> = FxHashMap::default();

        for name in self.nodes.keys() {
            index.insert(name.as_str(), graph.add_node(name.as_str()));
        }
        for edge in &self.edges {
            if let (Some(&from), Some(&to)) =
                (index.get(edge.source.as_str()), index.get(edge.target.as_str()))
            {
                graph.add_edge(from, to, ());
            }
        }

        let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut names: Vec<String> = scc.into_iter().map(|idx| graph[idx].to_string()).collect();
                names.sort();
                names
            })
            .collect();
        cycles.sort();
        cycles
    }

    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            edges: self.edges.len(),
            cycles: self.cycles().len(),
            ..GraphStats::default()
        };
        for node in self.nodes.values() {
            if node.is_external() {
                stats.external += 1;
            } else if node.is_circular() {
                stats.circular += 1;
            } else {
                stats.resolved += 1;
            }
        }
        stats
    }

    /// Output document (nodes sorted by name, edges sorted by pair)
    pub fn to_document(&self) -> ReconstructionDocument {
        ReconstructionDocument {
            modules: self.nodes.values().cloned().collect(),
            requires: self.edges.iter().cloned().collect(),
        }
    }

    /// Rebuild a graph from an output document
    pub fn from_document(document: ReconstructionDocument) -> Self {
        let mut graph = Self::new();
        for node in document.modules {
            graph.insert_node(node);
        }
        graph.edges.extend(document.requires);
        graph
    }
}
