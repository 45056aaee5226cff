use crate::constants::syntax::STATEMENT_TERMINATOR;
use crate::core::Identifier;
use crate::graph::GraphElement;
use crate::properties::{Properties, RenderStyle};

/// A vertex of the graph.
///
/// Nodes are only created through a container's `new_node`, which quotes
/// the label before it gets here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: Identifier,
    properties: Properties,
}

impl Node {
    pub(crate) fn new(id: Identifier) -> Self {
        Self {
            id,
            properties: Properties::new(),
        }
    }
}

impl GraphElement for Node {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    fn source(&self) -> String {
        format!(
            "{}{}{}",
            self.id,
            self.properties.render(RenderStyle::AttributeList),
            STATEMENT_TERMINATOR
        )
    }
}
