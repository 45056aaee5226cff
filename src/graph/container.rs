//! The composition capability shared by the root graph and subgraphs

use tracing::{debug, warn};

use crate::core::Identifier;
use crate::graph::writer::SourceWriter;
use crate::graph::{Edge, GraphElement, Node, Subgraph};
use crate::properties::{GlobalEdgeProperties, GlobalNodeProperties, Properties, RankType};
use crate::utils::string::strip_non_word;

/// Where `new_edge_with` looks for existing endpoint nodes before creating
/// new ones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EndpointLookup {
    /// Only the calling container's own nodes. Nodes living in nested
    /// subgraphs are not reused; a fresh node is created locally instead.
    #[default]
    Local,
    /// The calling container, then its subgraphs depth-first
    AllGraphs,
}

/// The contents of a container: its nodes, edges and subgraphs in
/// insertion order, its own properties and its scope-wide defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    subgraphs: Vec<Subgraph>,
    properties: Properties,
    node_defaults: Option<GlobalNodeProperties>,
    edge_defaults: Option<GlobalEdgeProperties>,
}

impl Scope {
    pub(crate) fn with_node_defaults(defaults: GlobalNodeProperties) -> Self {
        Self {
            node_defaults: Some(defaults),
            ..Self::default()
        }
    }

    pub(crate) fn properties(&self) -> &Properties {
        &self.properties
    }

    pub(crate) fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    /// Drop all nodes, edges and subgraphs, keeping properties and defaults
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.subgraphs.clear();
    }

    /// Emit the body of a scope. Subgraphs always come before nodes and
    /// nodes before edges, whatever order they were created in.
    pub(crate) fn write_contents(&self, writer: &mut SourceWriter) {
        for statement in self.properties.statements() {
            writer.line(&statement);
        }
        if let Some(defaults) = &self.node_defaults {
            writer.line(&defaults.render());
        }
        if let Some(defaults) = &self.edge_defaults {
            writer.line(&defaults.render());
        }
        for subgraph in &self.subgraphs {
            subgraph.write_source(writer);
        }
        for node in &self.nodes {
            writer.line(&node.source());
        }
        for edge in &self.edges {
            writer.line(&edge.source());
        }
    }
}

fn push_last<T>(items: &mut Vec<T>, item: T) -> &mut T {
    let index = items.len();
    items.push(item);
    &mut items[index]
}

/// Factory and lookup operations shared by [`Graph`](crate::graph::Graph)
/// and [`Subgraph`].
///
/// Implementors only expose their [`Scope`]; everything else is provided.
pub trait Container: GraphElement {
    #[doc(hidden)]
    fn scope(&self) -> &Scope;

    #[doc(hidden)]
    fn scope_mut(&mut self) -> &mut Scope;

    fn nodes(&self) -> &[Node] {
        &self.scope().nodes
    }

    fn edges(&self) -> &[Edge] {
        &self.scope().edges
    }

    fn subgraphs(&self) -> &[Subgraph] {
        &self.scope().subgraphs
    }

    fn global_node_properties(&self) -> Option<&GlobalNodeProperties> {
        self.scope().node_defaults.as_ref()
    }

    /// Replace the node defaults of this scope as a whole
    fn set_global_node_properties(&mut self, defaults: GlobalNodeProperties) {
        self.scope_mut().node_defaults = Some(defaults);
    }

    fn global_edge_properties(&self) -> Option<&GlobalEdgeProperties> {
        self.scope().edge_defaults.as_ref()
    }

    /// Replace the edge defaults of this scope as a whole
    fn set_global_edge_properties(&mut self, defaults: GlobalEdgeProperties) {
        self.scope_mut().edge_defaults = Some(defaults);
    }

    /// Create a node and append it to this container.
    ///
    /// There is no duplicate detection: calling this twice with the same
    /// label yields two nodes with equal identifiers.
    fn new_node(&mut self, label: &str) -> &mut Node {
        let node = Node::new(Identifier::quote(label));
        push_last(&mut self.scope_mut().nodes, node)
    }

    /// Connect two nodes by identifier. Always succeeds; the endpoints are
    /// not checked.
    fn new_edge(&mut self, from: &Identifier, to: &Identifier) -> &mut Edge {
        let edge = Edge::new(from.clone(), to.clone());
        push_last(&mut self.scope_mut().edges, edge)
    }

    /// Connect two nodes by label, looking only at this container's own
    /// nodes and creating whichever endpoint is missing.
    fn new_edge_by_label(&mut self, from: &str, to: &str) -> &mut Edge {
        self.new_edge_with(from, to, EndpointLookup::Local)
    }

    /// Connect two nodes by label using the given lookup policy; missing
    /// endpoints are created in this container.
    ///
    /// Both endpoints are looked up before either is created, so a
    /// self-loop on an unseen label creates two nodes.
    fn new_edge_with(&mut self, from: &str, to: &str, lookup: EndpointLookup) -> &mut Edge {
        let find = |container: &Self, label: &str| {
            let found = match lookup {
                EndpointLookup::Local => container.node(label),
                EndpointLookup::AllGraphs => container.find_node_in_all_graphs(label),
            };
            found.map(|node| node.id().clone())
        };
        let from_id = find(&*self, from);
        let to_id = find(&*self, to);

        let from_id = match from_id {
            Some(id) => id,
            None => self.new_node(from).id().clone(),
        };
        let to_id = match to_id {
            Some(id) => id,
            None => self.new_node(to).id().clone(),
        };
        self.new_edge(&from_id, &to_id)
    }

    /// First node of this container whose identifier matches the quoted
    /// label. Nested subgraphs are not searched.
    fn node(&self, label: &str) -> Option<&Node> {
        let nodes = &self.scope().nodes;
        if nodes.is_empty() {
            debug!(graph = %self.id(), "The graph contains no nodes");
            return None;
        }
        let quoted = Identifier::quote(label);
        nodes.iter().find(|node| node.id() == &quoted)
    }

    fn node_mut(&mut self, label: &str) -> Option<&mut Node> {
        let quoted = Identifier::quote(label);
        self.scope_mut()
            .nodes
            .iter_mut()
            .find(|node| node.id() == &quoted)
    }

    /// Look in this container first, then in each subgraph depth-first in
    /// insertion order. The first match wins.
    fn find_node_in_all_graphs(&self, label: &str) -> Option<&Node> {
        self.node(label).or_else(|| {
            self.subgraphs()
                .iter()
                .find_map(|subgraph| subgraph.find_node_in_all_graphs(label))
        })
    }

    /// Create a nested subgraph whose members share the given rank
    fn new_subgraph(&mut self, id: &str, rank: RankType) -> &mut Subgraph {
        let subgraph = Subgraph::ranked(Identifier::quote(id), rank);
        push_last(&mut self.scope_mut().subgraphs, subgraph)
    }

    fn new_same_rank_subgraph(&mut self, id: &str) -> &mut Subgraph {
        self.new_subgraph(id, RankType::Same)
    }

    /// Create a cluster subgraph.
    ///
    /// Cluster ids may only hold word characters; anything else is stripped
    /// with a warning.
    fn new_cluster_subgraph(&mut self, id: &str) -> &mut Subgraph {
        let (sanitized, stripped) = strip_non_word(id);
        if stripped {
            warn!(
                requested = id,
                sanitized = %sanitized,
                "Subgraph label must not contain non word characters - all non word characters \
                 removed"
            );
        }
        let subgraph = Subgraph::cluster(Identifier::quote(&sanitized));
        push_last(&mut self.scope_mut().subgraphs, subgraph)
    }

    /// Direct child subgraph by id. Cluster ids are compared after
    /// sanitizing, so pass the cleaned id.
    fn subgraph(&self, id: &str) -> Option<&Subgraph> {
        self.subgraphs()
            .iter()
            .find(|subgraph| subgraph.id().matches(id))
    }

    fn subgraph_mut(&mut self, id: &str) -> Option<&mut Subgraph> {
        self.scope_mut()
            .subgraphs
            .iter_mut()
            .find(|subgraph| subgraph.id().matches(id))
    }
}
