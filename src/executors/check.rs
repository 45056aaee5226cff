//! Check command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::CheckConfig;
use crate::description::GraphDescription;
use crate::executors::CommandExecutor;
use crate::graph::Container;
use crate::utils::string::pluralize;

/// Element counts of a graph, nested scopes included
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub subgraphs: usize,
    pub clusters: usize,
}

impl GraphSummary {
    pub fn of<C: Container>(container: &C) -> Self {
        let mut summary = Self {
            nodes: container.nodes().len(),
            edges: container.edges().len(),
            ..Self::default()
        };
        for subgraph in container.subgraphs() {
            if subgraph.is_cluster() {
                summary.clusters += 1;
            } else {
                summary.subgraphs += 1;
            }
            let nested = Self::of(subgraph);
            summary.nodes += nested.nodes;
            summary.edges += nested.edges;
            summary.subgraphs += nested.subgraphs;
            summary.clusters += nested.clusters;
        }
        summary
    }
}

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking {}...",
            style("🕸").cyan(),
            style(config.input.display()).bold()
        );

        let description = GraphDescription::parse_file(&config.input).wrap_err_with(|| {
            format!(
                "Failed to load graph description '{}'",
                config.input.display()
            )
        })?;
        let graph = description
            .to_graph()
            .wrap_err("Failed to build graph from description")?;

        let summary = GraphSummary::of(&graph);
        eprintln!(
            "{} {} {}, {} {}, {} {}, {} {}",
            style("✓").green(),
            summary.nodes,
            pluralize("node", summary.nodes),
            summary.edges,
            pluralize("edge", summary.edges),
            summary.subgraphs,
            pluralize("subgraph", summary.subgraphs),
            summary.clusters,
            pluralize("cluster", summary.clusters),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::properties::RankType;

    #[test]
    fn test_summary_counts_nested_scopes() {
        let mut graph = Graph::new();
        graph.new_edge_by_label("a", "b");
        let cluster = graph.new_cluster_subgraph("outer");
        cluster.new_node("c");
        let inner = cluster.new_subgraph("inner", RankType::Max);
        inner.new_edge_by_label("d", "e");

        assert_eq!(
            GraphSummary::of(&graph),
            GraphSummary {
                nodes: 5,
                edges: 2,
                subgraphs: 1,
                clusters: 1,
            }
        );
    }

    #[test]
    fn test_summary_of_empty_graph() {
        assert_eq!(GraphSummary::of(&Graph::new()), GraphSummary::default());
    }
}
