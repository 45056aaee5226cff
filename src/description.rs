//! Graph description files
//!
//! A description is a TOML or JSON document mirroring the object model:
//! graph properties, node/edge defaults, nodes, edges and nested subgraphs.
//! It is turned into a [`Graph`] through the regular factory API, so every
//! property goes through the same validation as hand-built graphs.
//!
//! ```toml
//! id = "jobs"
//!
//! [properties]
//! rankdir = "LR"
//!
//! [[subgraphs]]
//! id = "nightly"
//! kind = "cluster"
//! nodes = [{ label = "extract" }, { label = "load" }]
//! edges = [{ from = "extract", to = "load" }]
//!
//! [[edges]]
//! from = "load"
//! to = "report"
//! properties = { label = "on success" }
//! ```

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;
use strum::VariantNames;

use crate::error::DotweaveError;
use crate::graph::{Container, EndpointLookup, Graph, GraphElement};
use crate::properties::{Properties, PropertyValue, RankType};

/// A property value as written in a description file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<&AttributeValue> for PropertyValue {
    fn from(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::Flag(b) => PropertyValue::Flag(*b),
            AttributeValue::Integer(n) => PropertyValue::Text(n.to_string()),
            AttributeValue::Float(n) => PropertyValue::Text(n.to_string()),
            AttributeValue::Text(s) => PropertyValue::Text(s.clone()),
        }
    }
}

pub type AttributeMap = IndexMap<String, AttributeValue>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphDescription {
    pub id: Option<String>,
    #[serde(flatten)]
    pub body: ScopeDescription,
}

/// Everything a graph or subgraph may contain
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopeDescription {
    #[serde(default)]
    pub properties: AttributeMap,
    pub node_defaults: Option<AttributeMap>,
    pub edge_defaults: Option<AttributeMap>,
    #[serde(default)]
    pub nodes: Vec<NodeDescription>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
    #[serde(default)]
    pub subgraphs: Vec<SubgraphDescription>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeDescription {
    pub label: String,
    #[serde(default)]
    pub properties: AttributeMap,
}

/// An edge between two labels. Endpoints already present anywhere in the
/// enclosing scope, subgraphs included, are reused.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDescription {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub properties: AttributeMap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubgraphKindDescription {
    #[default]
    Rank,
    Cluster,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubgraphDescription {
    pub id: String,
    #[serde(default)]
    pub kind: SubgraphKindDescription,
    pub rank: Option<String>,
    #[serde(flatten)]
    pub body: ScopeDescription,
}

impl GraphDescription {
    /// Load a description, choosing JSON for `.json` files and TOML otherwise
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DotweaveError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let description = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content, &path.display().to_string())?
        };
        Ok(description)
    }

    pub fn from_toml_str(content: &str, file: &str) -> Result<Self, DotweaveError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            DotweaveError::DescriptionParseError(Box::new(crate::error::DescriptionParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self, DotweaveError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build the graph this description describes
    pub fn to_graph(&self) -> Result<Graph, DotweaveError> {
        let mut graph = match &self.id {
            Some(id) => Graph::with_id(id),
            None => Graph::new(),
        };
        self.body.apply(&mut graph)?;
        Ok(graph)
    }
}

impl SubgraphDescription {
    fn rank(&self) -> Result<RankType, DotweaveError> {
        match &self.rank {
            None => Ok(RankType::default()),
            Some(raw) => {
                RankType::from_str(raw.trim()).map_err(|_| DotweaveError::InvalidEnumValue {
                    property: "rank".to_string(),
                    value: raw.clone(),
                    expected: RankType::VARIANTS.join(", "),
                })
            }
        }
    }
}

impl ScopeDescription {
    /// Subgraphs are built before nodes and nodes before edges, so edge
    /// endpoints can resolve to nodes declared anywhere in the scope.
    fn apply<C: Container>(&self, container: &mut C) -> Result<(), DotweaveError> {
        apply_attributes(container.properties_mut(), &self.properties)?;

        if let Some(defaults) = &self.node_defaults {
            let mut properties = Properties::new();
            apply_attributes(&mut properties, defaults)?;
            container.set_global_node_properties(properties.into());
        }
        if let Some(defaults) = &self.edge_defaults {
            let mut properties = Properties::new();
            apply_attributes(&mut properties, defaults)?;
            container.set_global_edge_properties(properties.into());
        }

        for subgraph in &self.subgraphs {
            let child = match subgraph.kind {
                SubgraphKindDescription::Rank => {
                    container.new_subgraph(&subgraph.id, subgraph.rank()?)
                }
                SubgraphKindDescription::Cluster => {
                    if subgraph.rank.is_some() {
                        return Err(DotweaveError::ConfigurationError {
                            message: format!(
                                "Cluster subgraph '{}' cannot have a rank",
                                subgraph.id
                            ),
                        });
                    }
                    container.new_cluster_subgraph(&subgraph.id)
                }
            };
            subgraph.body.apply(child)?;
        }

        for node in &self.nodes {
            let created = container.new_node(&node.label);
            apply_attributes(created.properties_mut(), &node.properties)?;
        }

        for edge in &self.edges {
            let created = container.new_edge_with(&edge.from, &edge.to, EndpointLookup::AllGraphs);
            apply_attributes(created.properties_mut(), &edge.properties)?;
        }

        Ok(())
    }
}

fn apply_attributes(
    properties: &mut Properties,
    attributes: &AttributeMap,
) -> Result<(), DotweaveError> {
    for (name, value) in attributes {
        properties.set(name, PropertyValue::from(value))?;
    }
    Ok(())
}
