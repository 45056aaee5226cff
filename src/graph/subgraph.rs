use std::str::FromStr;

use crate::constants::syntax::{CLUSTER_PREFIX, SUBGRAPH};
use crate::core::Identifier;
use crate::graph::writer::{RenderOptions, SourceWriter};
use crate::graph::{Container, GraphElement, Scope};
use crate::properties::{Properties, RankType};

/// The two flavors of nested graph. They differ only in their prolog and in
/// how their id is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubgraphKind {
    /// `subgraph "id" { rank=...; ... }`
    Ranked,
    /// `subgraph "cluster_id" { ... }`, drawn as a box around its members
    Cluster,
}

/// A nested graph, created by a parent container's `new_subgraph` or
/// `new_cluster_subgraph` and owned by that parent.
///
/// The rank constraint of a ranked subgraph is an ordinary `rank` property,
/// so it can be changed or removed through `properties_mut`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    id: Identifier,
    kind: SubgraphKind,
    scope: Scope,
}

impl Subgraph {
    pub(crate) fn ranked(id: Identifier, rank: RankType) -> Self {
        let mut scope = Scope::default();
        scope.properties_mut().set_rank(rank);
        Self {
            id,
            kind: SubgraphKind::Ranked,
            scope,
        }
    }

    pub(crate) fn cluster(id: Identifier) -> Self {
        Self {
            id,
            kind: SubgraphKind::Cluster,
            scope: Scope::default(),
        }
    }

    pub fn kind(&self) -> SubgraphKind {
        self.kind
    }

    pub fn is_cluster(&self) -> bool {
        self.kind == SubgraphKind::Cluster
    }

    /// The current `rank` property, if any
    pub fn rank(&self) -> Option<RankType> {
        self.scope
            .properties()
            .get_str("rank")
            .and_then(|rank| RankType::from_str(rank).ok())
    }

    fn prolog(&self) -> String {
        match self.kind {
            SubgraphKind::Ranked => format!("{SUBGRAPH} {} {{", self.id),
            SubgraphKind::Cluster => {
                format!("{SUBGRAPH} \"{CLUSTER_PREFIX}{}\" {{", self.id.unquoted())
            }
        }
    }

    pub(crate) fn write_source(&self, writer: &mut SourceWriter) {
        writer.open(&self.prolog());
        self.scope.write_contents(writer);
        writer.close();
    }
}

impl GraphElement for Subgraph {
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
        let mut writer = SourceWriter::new(&RenderOptions::default());
        self.write_source(&mut writer);
        writer.finish()
    }
}

impl Container for Subgraph {
    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }
}
