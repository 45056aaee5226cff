use crate::constants::syntax::{EDGE_OP, STATEMENT_TERMINATOR};
use crate::core::Identifier;
use crate::graph::GraphElement;
use crate::properties::{Properties, RenderStyle};

/// A directed connection between two nodes.
///
/// An edge refers to its endpoints by identifier only and never checks that
/// they exist; the container creating it is responsible for that. Its own
/// identifier is derived from the endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    id: Identifier,
    from: Identifier,
    to: Identifier,
    properties: Properties,
}

impl Edge {
    pub(crate) fn new(from: Identifier, to: Identifier) -> Self {
        let id = Identifier::quote(&format!(
            "{} {EDGE_OP} {}",
            from.unquoted(),
            to.unquoted()
        ));
        Self {
            id,
            from,
            to,
            properties: Properties::new(),
        }
    }

    pub fn from(&self) -> &Identifier {
        &self.from
    }

    pub fn to(&self) -> &Identifier {
        &self.to
    }
}

impl GraphElement for Edge {
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
            "{} {EDGE_OP} {}{}{}",
            self.from,
            self.to,
            self.properties.render(RenderStyle::AttributeList),
            STATEMENT_TERMINATOR
        )
    }
}
