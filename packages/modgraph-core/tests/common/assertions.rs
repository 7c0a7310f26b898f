//! Custom assertions for module graphs

use modgraph_core::ModuleGraph;

/// Assert that every edge endpoint is a node
pub fn assert_closed(graph: &ModuleGraph) {
    let dangling = graph.dangling_edges();
    assert!(dangling.is_empty(), "Expected no dangling edges, got: {dangling:?}");
}

/// Assert that no circular placeholder survived flattening
pub fn assert_no_placeholders(graph: &ModuleGraph) {
    let circular: Vec<&str> = graph
        .nodes()
        .filter(|n| n.is_circular())
        .map(|n| n.module_name.as_str())
        .collect();
    assert!(circular.is_empty(), "Expected no circular nodes, got: {circular:?}");
}

pub fn assert_resolved(graph: &ModuleGraph, module_name: &str) {
    match graph.node(module_name) {
        Some(node) => assert!(node.is_resolved(), "Expected {module_name} resolved, got {node:?}"),
        None => panic!("Expected node {module_name}, nodes: {:?}", node_names(graph)),
    }
}

pub fn assert_external(graph: &ModuleGraph, module_name: &str) {
    match graph.node(module_name) {
        Some(node) => {
            assert!(node.is_external(), "Expected {module_name} external, got {node:?}");
            assert!(node.complexity().is_none());
        }
        None => panic!("Expected node {module_name}, nodes: {:?}", node_names(graph)),
    }
}

pub fn assert_edge(graph: &ModuleGraph, source: &str, target: &str) {
    assert!(
        graph.contains_edge(source, target),
        "Expected edge {source} -> {target}, edges: {:?}",
        graph.edges().collect::<Vec<_>>()
    );
}

pub fn assert_no_edge(graph: &ModuleGraph, source: &str, target: &str) {
    assert!(
        !graph.contains_edge(source, target),
        "Unexpected edge {source} -> {target}"
    );
}

/// Sorted node names
pub fn node_names(graph: &ModuleGraph) -> Vec<String> {
    graph.nodes().map(|n| n.module_name.clone()).collect()
}
