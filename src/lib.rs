//! # dotweave - Build Graphviz DOT Graphs in Rust
//!
//! dotweave is a builder for directed graphs in the Graphviz DOT language.
//! Graphs are assembled in memory from nodes, edges, rank subgraphs and
//! cluster subgraphs, each with its own typed attributes, and rendered into
//! one DOT string. The library does no I/O of its own; writing the text to a
//! file or feeding it to `dot` is up to the caller.
//!
//! ## Main Components
//!
//! - **Graph**: the root `digraph`, owner of everything built through it
//! - **Subgraph**: nested rank-constrained subgraphs and clusters
//! - **Container**: node, edge and subgraph factories and lookups shared by
//!   graphs and subgraphs
//! - **Properties**: attribute stores with validation of enumerated and
//!   boolean attributes
//! - **GraphDescription**: TOML/JSON description files turned into graphs
//!
//! ## Usage
//!
//! ### Example: Building a Job Chain
//!
//! ```
//! use dotweave::graph::{Container, Graph, GraphElement};
//! use dotweave::properties::{RankDir, RankType, Shape};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::with_id("job chain");
//! graph.properties_mut().set_rankdir(RankDir::LeftToRight);
//!
//! // Start and end on the same rank
//! let ends = graph.new_subgraph("ends", RankType::Same);
//! ends.new_node("start").properties_mut().set_shape(Shape::Circle);
//! ends.new_node("end").properties_mut().set_shape(Shape::DoubleCircle);
//!
//! // Edges by label only look at the graph's own nodes, so the nodes
//! // living in "ends" are fetched explicitly
//! let start = graph.find_node_in_all_graphs("start").unwrap().id().clone();
//! let end = graph.find_node_in_all_graphs("end").unwrap().id().clone();
//! let step = graph.new_node("step 1").id().clone();
//! graph.new_edge(&start, &step);
//! graph.new_edge(&step, &end).properties_mut().set_label("done");
//!
//! // Enumerated attributes are checked when set
//! assert!(graph.properties_mut().set("rankdir", "sideways").is_err());
//!
//! let dot = graph.render();
//! assert!(dot.starts_with("digraph \"job chain\" {"));
//! assert!(dot.contains("\"step 1\" -> \"end\" [label=\"done\"];"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Rendering a Description File
//!
//! ```no_run
//! use std::path::Path;
//!
//! use dotweave::description::GraphDescription;
//! use dotweave::graph::RenderOptions;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let description = GraphDescription::parse_file(Path::new("jobs.toml"))?;
//! let graph = description.to_graph()?;
//!
//! let mut file = std::fs::File::create("jobs.dot").into_diagnostic()?;
//! graph.write_to(&mut file, &RenderOptions::new().with_indent(4))?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod logging;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod description;
pub mod error;
pub mod executors;
pub mod graph;
pub mod properties;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init();

    execute_command(cli.command)
}
