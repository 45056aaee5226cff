//! Integration tests for description files and the command pipeline

use std::fs;
use std::path::Path;

use clap::Parser;
use dotweave::cli::Cli;
use dotweave::commands::execute_command;
use dotweave::description::GraphDescription;
use dotweave::executors::check::GraphSummary;
use dotweave::graph::{Container, GraphElement};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const PIPELINE_TOML: &str = r#"
id = "etl"

[properties]
rankdir = "LR"

[edge_defaults]
arrowhead = "vee"

[[subgraphs]]
id = "sources"
rank = "source"
nodes = [{ label = "orders" }, { label = "customers" }]

[[subgraphs]]
id = "warehouse (prod)"
kind = "cluster"
properties = { label = "Warehouse", style = "filled" }

[[subgraphs.nodes]]
label = "staging"
properties = { shape = "cylinder" }

[[edges]]
from = "orders"
to = "staging"

[[edges]]
from = "customers"
to = "staging"
properties = { style = "dashed", constraint = false }

[[edges]]
from = "staging"
to = "dashboard"
"#;

fn write_description(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run(args: &[&str]) -> miette::Result<()> {
    let cli = Cli::parse_from(std::iter::once("dotweave").chain(args.iter().copied()));
    execute_command(cli.command)
}

#[test]
fn test_pipeline_description_renders() {
    let graph = GraphDescription::from_toml_str(PIPELINE_TOML, "etl.toml")
        .unwrap()
        .to_graph()
        .unwrap();

    assert_eq!(
        graph.render(),
        r#"digraph "etl" {
  rankdir=LR;
  node [shape=box];
  edge [arrowhead=vee];
  subgraph "sources" {
    rank=source;
    "orders";
    "customers";
  }
  subgraph "cluster_warehouseprod" {
    label="Warehouse";
    style="filled";
    "staging" [shape=cylinder];
  }
  "dashboard";
  "orders" -> "staging";
  "customers" -> "staging" [style="dashed", constraint=false];
  "staging" -> "dashboard";
}
"#
    );
}

#[test]
fn test_pipeline_summary() {
    let graph = GraphDescription::from_toml_str(PIPELINE_TOML, "etl.toml")
        .unwrap()
        .to_graph()
        .unwrap();

    assert_eq!(
        GraphSummary::of(&graph),
        GraphSummary {
            nodes: 4,
            edges: 3,
            subgraphs: 1,
            clusters: 1,
        }
    );
    assert!(graph.subgraph("warehouseprod").is_some());
    assert_eq!(graph.id().as_str(), "\"etl\"");
}

#[test]
fn test_render_command_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_description(&temp_dir, "etl.toml", PIPELINE_TOML);
    let output = temp_dir.path().join("etl.dot");

    run(&[
        "render",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();

    let dot = fs::read_to_string(&output).unwrap();
    assert!(dot.starts_with("digraph \"etl\" {\n"));
    assert!(dot.contains("  \"staging\" -> \"dashboard\";\n"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn test_render_command_from_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_description(
        &temp_dir,
        "small.json",
        r#"{ "id": "small", "edges": [{ "from": "a", "to": "b", "properties": { "dir": "both" } }] }"#,
    );
    let output = temp_dir.path().join("small.dot");

    run(&[
        "render",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--indent",
        "0",
    ])
    .unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "digraph \"small\" {\nnode [shape=box];\n\"a\";\n\"b\";\n\"a\" -> \"b\" [dir=both];\n}\n"
    );
}

#[test]
fn test_check_command_accepts_valid_description() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_description(&temp_dir, "etl.toml", PIPELINE_TOML);

    assert!(run(&["check", input.to_str().unwrap()]).is_ok());
}

#[test]
fn test_check_command_rejects_invalid_values() {
    let temp_dir = TempDir::new().unwrap();
    let bad_enum = write_description(
        &temp_dir,
        "enum.toml",
        "[[nodes]]\nlabel = \"a\"\nproperties = { shape = \"blob\" }\n",
    );
    let bad_flag = write_description(
        &temp_dir,
        "flag.toml",
        "[properties]\ncompound = \"maybe\"\n",
    );

    assert!(run(&["check", bad_enum.to_str().unwrap()]).is_err());
    assert!(run(&["check", bad_flag.to_str().unwrap()]).is_err());
}

#[test]
fn test_check_command_reports_missing_file() {
    let missing = Path::new("/nonexistent/dotweave/graph.toml");
    assert!(run(&["check", missing.to_str().unwrap()]).is_err());
}
