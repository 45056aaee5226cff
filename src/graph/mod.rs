//! # Graph Construction and Rendering Module
//!
//! This module holds the object model of a DOT graph and the recursive
//! serializer that turns it into text.
//!
//! ## Components
//!
//! ### Elements
//! - **Graph**: the root `digraph`
//! - **Subgraph**: a nested graph, either rank-constrained or a cluster
//! - **Node**: a vertex with its own properties
//! - **Edge**: a directed connection between two node identifiers
//!
//! ### Capabilities
//! - **GraphElement**: id, properties and DOT source of any element
//! - **Container**: node/edge/subgraph factories and lookups, shared by
//!   `Graph` and `Subgraph`
//!
//! ## Example
//!
//! ```
//! use dotweave::graph::{Container, Graph, GraphElement};
//! use dotweave::properties::{RankDir, Shape};
//!
//! let mut graph = Graph::new();
//! graph.properties_mut().set_rankdir(RankDir::LeftToRight);
//!
//! let cluster = graph.new_cluster_subgraph("backend jobs");
//! cluster.properties_mut().set_label("Backend");
//! cluster.new_node("load").properties_mut().set_shape(Shape::Ellipse);
//!
//! // "load" lives in the cluster, so reuse it explicitly
//! let load = graph.find_node_in_all_graphs("load").unwrap().id().clone();
//! let report = graph.new_node("report").id().clone();
//! graph.new_edge(&load, &report).properties_mut().set_label("daily");
//!
//! let dot = graph.render();
//! assert_eq!(
//!     dot,
//!     r#"digraph "G" {
//!   rankdir=LR;
//!   node [shape=box];
//!   subgraph "cluster_backendjobs" {
//!     label="Backend";
//!     "load" [shape=ellipse];
//!   }
//!   "report";
//!   "load" -> "report" [label="daily"];
//! }
//! "#
//! );
//! ```
//!
//! ## Emission order
//!
//! Within each scope the output is always: own properties, node defaults,
//! edge defaults, subgraphs, nodes, edges. Creation order only matters
//! inside each of those groups.

mod container;
mod edge;
mod element;
mod node;
mod root;
mod subgraph;
mod writer;

pub use container::{Container, EndpointLookup, Scope};
pub use edge::Edge;
pub use element::GraphElement;
pub use node::Node;
pub use root::Graph;
pub use subgraph::{Subgraph, SubgraphKind};
pub use writer::RenderOptions;
