use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::InputArgs;
use crate::constants::defaults::INDENT;

#[derive(Parser)]
#[command(
    name = "dotweave",
    about = "🕸 Weave graph descriptions into Graphviz DOT",
    long_about = "dotweave turns a TOML or JSON graph description (nodes, edges, rank subgraphs \
                  and clusters with their Graphviz attributes) into DOT text ready for dot, \
                  neato or any other Graphviz layout engine.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a graph description as DOT
    ///
    /// Builds the described graph and writes its DOT source to a file or to
    /// stdout, ready to be piped into a Graphviz layout engine.
    #[command(
        long_about = "Build the graph described by FILE and write its DOT source. Subgraphs are \
                      emitted before nodes and nodes before edges within every scope. Attributes \
                      with a closed set of values (shape, rank, rankdir, arrowhead, arrowtail, \
                      dir) and boolean attributes are validated while the graph is built."
    )]
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "DOTWEAVE_OUTPUT")]
        output: Option<PathBuf>,

        /// Spaces per nesting level
        #[arg(long, default_value_t = INDENT, env = "DOTWEAVE_INDENT")]
        indent: usize,
    },

    /// Validate a graph description without rendering it
    ///
    /// Builds the described graph, reporting invalid attributes, and prints
    /// how many nodes, edges and subgraphs it contains.
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}
