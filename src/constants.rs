//! Configuration constants for dotweave
//!
//! This module contains the DOT syntax tokens and the defaults used
//! throughout the crate.

/// DOT syntax tokens
pub mod syntax {
    /// Keyword opening the root graph
    pub const DIGRAPH: &str = "digraph";

    /// Keyword opening a nested graph
    pub const SUBGRAPH: &str = "subgraph";

    /// Graphviz only draws a box around subgraphs whose name starts with this
    pub const CLUSTER_PREFIX: &str = "cluster_";

    /// Directed edge operator
    pub const EDGE_OP: &str = "->";

    pub const STATEMENT_TERMINATOR: &str = ";";

    pub const EPILOG: &str = "}";
}

/// Defaults applied when the caller does not choose
pub mod defaults {
    /// Id of a root graph created with `Graph::new`
    pub const GRAPH_ID: &str = "G";

    /// Spaces per nesting level in rendered output
    pub const INDENT: usize = 2;
}

/// Logging configuration for the binary
pub mod logging {
    /// Environment variable holding the tracing filter directive
    pub const FILTER_ENV: &str = "DOTWEAVE_LOG";

    /// Filter used when the environment variable is unset
    pub const DEFAULT_FILTER: &str = "warn";
}
