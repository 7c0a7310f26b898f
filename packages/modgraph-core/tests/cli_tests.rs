//! `modgraph` binary: flags, output file, exit codes

mod common;

use std::process::Command;

use common::*;
use modgraph_core::{ModuleGraph, ReconstructionDocument};
use serde_json::Value;

fn modgraph() -> Command {
    Command::new(env!("CARGO_BIN_EXE_modgraph"))
}

#[test]
fn test_writes_package_named_output() {
    let tree = PythonTreeBuilder::new().with_files(fixture_crawler_package());

    let status = modgraph()
        .current_dir(tree.root())
        .args(["--root", ".", "--package", "crawler"])
        .status()
        .unwrap();
    assert!(status.success());

    let content = std::fs::read_to_string(tree.path("reconstruction-crawler.json")).unwrap();
    let document: ReconstructionDocument = serde_json::from_str(&content).unwrap();
    let graph = ModuleGraph::from_document(document);
    assert_closed(&graph);
    assert_resolved(&graph, "crawler.spiders");
    assert_external(&graph, "json");
}

#[test]
fn test_output_shape_without_complexity() {
    let tree = PythonTreeBuilder::new().with_file("solo.py", fixture_with_imports(&["os"]));
    let output = tree.path("out/graph.json");

    let status = modgraph()
        .arg("--root")
        .arg(tree.root())
        .arg("--output")
        .arg(&output)
        .arg("--no-complexity")
        .status()
        .unwrap();
    assert!(status.success());

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "modules": [
                {"moduleName": "os", "external": true},
                {"moduleName": "solo", "complexity": []}
            ],
            "requires": [["solo", "os"]]
        })
    );
}

#[test]
fn test_config_file_with_flag_override() {
    let tree = PythonTreeBuilder::new()
        .with_package("pkg")
        .with_file("pkg/mod.py", fixture_branchy_function("f", 1));
    let output = tree.path("graph.json");
    let config = format!(
        "version: 1\nroot: {}\npackages: [pkg]\noutput: {}\ncomplexity: false\n",
        tree.root().display(),
        output.display()
    );
    std::fs::write(tree.path("modgraph.yaml"), config).unwrap();

    let status = modgraph()
        .arg("--config")
        .arg(tree.path("modgraph.yaml"))
        .arg("--pretty")
        .status()
        .unwrap();
    assert!(status.success());

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("\n  \"modules\""));
    let document: ReconstructionDocument = serde_json::from_str(&content).unwrap();
    let graph = ModuleGraph::from_document(document);
    assert_eq!(graph.node("pkg.mod").unwrap().complexity(), Some(&[][..]));
}

#[test]
fn test_fatal_errors_exit_non_zero() {
    let tree = PythonTreeBuilder::new().with_file("bad.py", "class :\n");

    let output = modgraph().arg("--root").arg(tree.root()).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.py"), "stderr: {stderr}");

    let missing = modgraph()
        .args(["--root", "/definitely/not/a/dir"])
        .output()
        .unwrap();
    assert!(!missing.status.success());
}
