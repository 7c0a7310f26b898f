//! McCabe cyclomatic complexity over tree-sitter Python trees
//!
//! Scores follow the path-graph model of the `mccabe` flake8 checker:
//!
//! - every top-level function or method gets its own graph, named
//!   `"<line>:<col>: '<Class.>name'"`
//! - a branch statement outside any function (`if`, `for`/`while`, `try`)
//!   gets its own graph named `"If <line>"`, `"Loop <line>"` or
//!   `"TryExcept <line>"`
//! - a graph starts at 1; `if` and each `elif` add 1, loops add 1, a `try`
//!   adds one per handler plus one, a nested function adds 1
//! - `finally` bodies, boolean operators, comprehensions and lambdas add
//!   nothing
//! - `match` statements and `try` blocks with `except*` handlers count as
//!   plain statements: they add nothing and their bodies are not visited
//!
//! Graphs are keyed by `<Class.>name`; a later definition with the same key
//! replaces the earlier score but keeps its position.

use rustc_hash::FxHashMap;
use tree_sitter::Node;

use crate::features::complexity::domain::ComplexityEntry;
use crate::features::complexity::ports::ComplexityAnalyzer;
use crate::features::parsing::ParsedModule;
use crate::shared::utils::tree_sitter::{extract_node_text, named_children, node_to_span};

/// McCabe complexity analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct McCabeAnalyzer;

impl McCabeAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl ComplexityAnalyzer for McCabeAnalyzer {
    fn analyze(&self, module: &ParsedModule) -> Vec<ComplexityEntry> {
        let mut visitor = PathGraphVisitor::new(module.source());
        visitor.visit_block(&module.root_node());
        visitor.into_entries()
    }

    fn name(&self) -> &'static str {
        "mccabe"
    }
}

/// Graph currently being scored
struct OpenGraph {
    name: String,
    complexity: u32,
}

struct PathGraphVisitor<'s> {
    source: &'s str,
    classname: String,
    current: Option<OpenGraph>,
    graphs: Vec<ComplexityEntry>,
    by_key: FxHashMap<String, usize>,
}

impl<'s> PathGraphVisitor<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            classname: String::new(),
            current: None,
            graphs: Vec::new(),
            by_key: FxHashMap::default(),
        }
    }

    fn into_entries(self) -> Vec<ComplexityEntry> {
        self.graphs
    }

    fn visit_block(&mut self, block: &Node) {
        for statement in named_children(block) {
            self.dispatch(&statement);
        }
    }

    fn dispatch(&mut self, node: &Node) {
        match node.kind() {
            "function_definition" => self.visit_function(node),
            "decorated_definition" => {
                if let Some(definition) = node.child_by_field_name("definition") {
                    self.dispatch(&definition);
                }
            }
            "class_definition" => self.visit_class(node),
            "if_statement" => {
                let elifs = named_children(node)
                    .iter()
                    .filter(|child| child.kind() == "elif_clause")
                    .count() as u32;
                self.visit_branch(node, "If", 1 + elifs, false);
            }
            "for_statement" | "while_statement" => self.visit_branch(node, "Loop", 1, false),
            "try_statement" => {
                let children = named_children(node);
                if children.iter().any(|child| child.kind() == "except_group_clause") {
                    return;
                }
                let handlers = children
                    .iter()
                    .filter(|child| child.kind() == "except_clause")
                    .count() as u32;
                self.visit_branch(node, "TryExcept", handlers + 1, true);
            }
            "match_statement" => {}
            _ => self.visit_nested_blocks(node, false),
        }
    }

    fn visit_function(&mut self, node: &Node) {
        let name = node
            .child_by_field_name("name")
            .map(|n| extract_node_text(&n, self.source))
            .unwrap_or_default();
        let entity = format!("{}{}", self.classname, name);

        if let Some(graph) = self.current.as_mut() {
            // closure inside a graph: one extra path
            graph.complexity += 1;
            self.visit_body(node);
            return;
        }

        let start = node_to_span(node).start();
        self.current = Some(OpenGraph {
            name: format!("{}:{}: '{}'", start.line, start.column, entity),
            complexity: 1,
        });
        self.visit_body(node);
        self.close_graph(entity);
    }

    fn visit_class(&mut self, node: &Node) {
        let name = node
            .child_by_field_name("name")
            .map(|n| extract_node_text(&n, self.source).to_string())
            .unwrap_or_default();

        let saved = self.classname.clone();
        self.classname.push_str(&name);
        self.classname.push('.');
        self.visit_body(node);
        self.classname = saved;
    }

    fn visit_branch(&mut self, node: &Node, label: &str, decisions: u32, skip_finally: bool) {
        if let Some(graph) = self.current.as_mut() {
            graph.complexity += decisions;
            self.visit_nested_blocks(node, skip_finally);
            return;
        }

        let name = format!("{} {}", label, node_to_span(node).start_line);
        self.current = Some(OpenGraph {
            name: name.clone(),
            complexity: 1 + decisions,
        });
        self.visit_nested_blocks(node, skip_finally);
        self.close_graph(format!("{}{}", self.classname, name));
    }

    fn visit_body(&mut self, node: &Node) {
        if let Some(body) = node.child_by_field_name("body") {
            self.visit_block(&body);
        }
    }

    /// Visit statements of every block directly under `node` or under one of
    /// its clauses (`else`, `elif`, `except`, `case`, ...)
    fn visit_nested_blocks(&mut self, node: &Node, skip_finally: bool) {
        for child in named_children(node) {
            match child.kind() {
                "block" => self.visit_block(&child),
                "finally_clause" if skip_finally => {}
                kind if kind.ends_with("_clause") => self.visit_nested_blocks(&child, false),
                _ => {}
            }
        }
    }

    fn close_graph(&mut self, key: String) {
        let Some(graph) = self.current.take() else {
            return;
        };
        let entry = ComplexityEntry::new(graph.name, graph.complexity);
        match self.by_key.get(&key) {
            Some(&index) => self.graphs[index] = entry,
            None => {
                self.by_key.insert(key, self.graphs.len());
                self.graphs.push(entry);
            }
        }
    }
}
