use std::io::Write;

use tracing::trace;

use crate::constants::defaults::GRAPH_ID;
use crate::constants::syntax::DIGRAPH;
use crate::core::Identifier;
use crate::error::DotweaveError;
use crate::graph::writer::{RenderOptions, SourceWriter};
use crate::graph::{Container, GraphElement, Scope};
use crate::properties::{GlobalNodeProperties, Properties, Shape};

/// The root of a directed graph.
///
/// Owns every node, edge and subgraph built through it. Nodes default to
/// `shape=box` until the node defaults are replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    id: Identifier,
    scope: Scope,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_id(GRAPH_ID)
    }

    pub fn with_id(id: &str) -> Self {
        Self {
            id: Identifier::quote(id),
            scope: Scope::with_node_defaults(GlobalNodeProperties::with_shape(Shape::Box)),
        }
    }

    pub fn fontsize(&self) -> Option<&str> {
        self.scope.properties().get_str("fontsize")
    }

    pub fn set_fontsize(&mut self, size: &str) -> &mut Self {
        self.scope.properties_mut().set_fontsize(size);
        self
    }

    /// Remove all nodes, edges and subgraphs; graph properties and defaults
    /// stay as they are
    pub fn clear(&mut self) {
        self.scope.clear();
    }

    /// Render the whole graph as DOT text
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        trace!(
            graph = %self.id,
            nodes = self.nodes().len(),
            edges = self.edges().len(),
            subgraphs = self.subgraphs().len(),
            "Rendering graph"
        );
        let mut writer = SourceWriter::new(options);
        writer.open(&format!("{DIGRAPH} {} {{", self.id));
        self.scope.write_contents(&mut writer);
        writer.close();
        writer.finish()
    }

    /// Render the graph and write it to `output`
    pub fn write_to(
        &self,
        output: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<(), DotweaveError> {
        output.write_all(self.render_with(options).as_bytes())?;
        output.flush()?;
        Ok(())
    }
}

impl GraphElement for Graph {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn properties(&self) -> &Properties {
        self.scope.properties()
    }

    fn properties_mut(&mut self) -> &mut Properties {
        self.scope.properties_mut()
    }

    fn source(&self) -> String {
        self.render()
    }
}

impl Container for Graph {
    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }
}
