//! Integration tests for graph construction, lookup and rendering

use dotweave::core::Identifier;
use dotweave::error::DotweaveError;
use dotweave::graph::{
    Container, EndpointLookup, Graph, GraphElement, RenderOptions, Subgraph, SubgraphKind,
};
use dotweave::properties::{GlobalEdgeProperties, RankType, Shape};
use pretty_assertions::assert_eq;

#[test]
fn test_identifiers_are_trimmed_and_quoted_once() {
    assert_eq!(Identifier::quote("  step 1 ").as_str(), "\"step 1\"");
    assert_eq!(Identifier::quote("say \"hi\"").as_str(), r#""say \"hi\"""#);
    // Already escaped quotes are left alone
    assert_eq!(Identifier::quote(r#"say \"hi\""#).as_str(), r#""say \"hi\"""#);
}

#[test]
fn test_duplicate_nodes_first_match_wins() {
    let mut graph = Graph::new();
    graph.new_node("a");
    graph.new_node("a");

    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.nodes()[0].id(), graph.nodes()[1].id());

    let found = graph.node("a").unwrap();
    assert!(std::ptr::eq(found, &graph.nodes()[0]));
}

#[test]
fn test_lookup_ignores_surrounding_whitespace() {
    let mut graph = Graph::new();
    graph.new_node("extract");

    assert!(graph.node("  extract ").is_some());
    assert!(graph.node("load").is_none());
}

#[test]
fn test_find_node_in_all_graphs_is_depth_first() {
    let mut graph = Graph::new();
    {
        let s1 = graph.new_subgraph("s1", RankType::Same);
        let s2 = s1.new_subgraph("s2", RankType::Min);
        let s3 = s2.new_cluster_subgraph("s3");
        s3.new_node("deep").properties_mut().set_label("nested");
    }
    graph
        .new_subgraph("s1b", RankType::Max)
        .new_node("deep")
        .properties_mut()
        .set_label("sibling");

    assert!(graph.node("deep").is_none());
    let found = graph.find_node_in_all_graphs("deep").unwrap();
    assert_eq!(found.properties().get_str("label"), Some("nested"));

    // The graph's own nodes are checked before any subgraph
    graph.new_node("deep").properties_mut().set_label("root");
    let found = graph.find_node_in_all_graphs("deep").unwrap();
    assert_eq!(found.properties().get_str("label"), Some("root"));
}

#[test]
fn test_edge_by_label_creates_missing_endpoints() {
    let mut graph = Graph::new();
    let edge = graph.new_edge_by_label("a", "b");
    assert_eq!(edge.from().as_str(), "\"a\"");
    assert_eq!(edge.to().as_str(), "\"b\"");

    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.edges().len(), 1);

    // Existing endpoints are reused
    graph.new_edge_by_label("b", "a");
    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.edges().len(), 2);
}

#[test]
fn test_self_loop_on_unseen_label_creates_two_nodes() {
    let mut graph = Graph::new();
    graph.new_edge_by_label("x", "x");

    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.edges().len(), 1);
}

#[test]
fn test_edge_by_label_only_looks_locally() {
    let mut graph = Graph::new();
    graph.new_same_rank_subgraph("top").new_node("a");

    graph.new_edge_by_label("a", "b");
    // "a" from the subgraph was not reused
    assert_eq!(graph.nodes().len(), 2);
    assert!(graph.node("a").is_some());
}

#[test]
fn test_edge_with_all_graphs_lookup_reuses_nested_nodes() {
    let mut graph = Graph::new();
    graph.new_same_rank_subgraph("top").new_node("a");

    graph.new_edge_with("a", "b", EndpointLookup::AllGraphs);
    assert_eq!(graph.nodes().len(), 1);
    assert!(graph.node("a").is_none());
    assert!(graph.node("b").is_some());
}

#[test]
fn test_emission_order_ignores_creation_order() {
    let mut graph = Graph::new();
    graph.new_edge_by_label("a", "b");
    graph.new_same_rank_subgraph("top").new_node("c");

    assert_eq!(
        graph.render(),
        r#"digraph "G" {
  node [shape=box];
  subgraph "top" {
    rank=same;
    "c";
  }
  "a";
  "b";
  "a" -> "b";
}
"#
    );
}

#[test]
fn test_cluster_ids_are_sanitized() {
    let mut graph = Graph::new();
    let cluster = graph.new_cluster_subgraph("my id!");

    assert_eq!(cluster.id().as_str(), "\"myid\"");
    assert_eq!(cluster.kind(), SubgraphKind::Cluster);
    assert!(cluster.is_cluster());
    assert_eq!(cluster.rank(), None);
    assert!(graph.subgraph("myid").is_some());
    assert!(graph.render().contains("  subgraph \"cluster_myid\" {\n"));
}

#[test]
fn test_enumerated_values_rejected_when_set() {
    let mut graph = Graph::new();
    let node = graph.new_node("a");

    let err = node.properties_mut().set("shape", "blob").unwrap_err();
    match err {
        DotweaveError::InvalidEnumValue {
            property, value, ..
        } => {
            assert_eq!(property, "shape");
            assert_eq!(value, "blob");
        }
        other => panic!("Expected InvalidEnumValue, got {other:?}"),
    }
    assert!(node.properties().is_empty());

    node.properties_mut().set("shape", "circle").unwrap();
    assert_eq!(node.source(), r#""a" [shape=circle];"#);
}

#[test]
fn test_boolean_values_rejected_when_set() {
    let mut graph = Graph::new();

    assert!(matches!(
        graph.properties_mut().set("compound", "yes"),
        Err(DotweaveError::InvalidBoolValue { .. })
    ));
    graph.properties_mut().set("compound", true).unwrap();
    assert!(graph.render().contains("  compound=true;\n"));
}

#[test]
fn test_subgraph_defaults_and_rank() {
    let mut graph = Graph::new();
    let mut edge_defaults = GlobalEdgeProperties::new();
    edge_defaults.properties_mut().set_color("gray");
    graph.set_global_edge_properties(edge_defaults);

    let bottom = graph.new_subgraph("bottom", RankType::Sink);
    bottom
        .properties_mut()
        .set_shape(Shape::Ellipse)
        .set_label("Sinks");
    bottom.new_node("done");

    let bottom: &Subgraph = graph.subgraph("bottom").unwrap();
    assert_eq!(bottom.rank(), Some(RankType::Sink));
    assert_eq!(
        graph.render(),
        r#"digraph "G" {
  node [shape=box];
  edge [color="gray"];
  subgraph "bottom" {
    rank=sink;
    shape=ellipse;
    label="Sinks";
    "done";
  }
}
"#
    );
}

#[test]
fn test_overriding_subgraph_rank_emits_one_statement() {
    let mut graph = Graph::new();
    graph
        .new_subgraph("s", RankType::Min)
        .properties_mut()
        .set_rank(RankType::Max);

    let subgraph = graph.subgraph("s").unwrap();
    assert_eq!(subgraph.rank(), Some(RankType::Max));
    assert_eq!(
        graph.render(),
        "digraph \"G\" {\n  node [shape=box];\n  subgraph \"s\" {\n    rank=max;\n  }\n}\n"
    );
}

#[test]
fn test_render_is_idempotent() {
    let mut graph = Graph::with_id("jobs");
    graph.new_edge_by_label("extract", "load");
    graph.new_cluster_subgraph("nightly").new_node("report");

    let first = graph.render();
    assert_eq!(graph.render(), first);
    assert_eq!(graph.source(), first);
}

#[test]
fn test_render_with_custom_indent() {
    let mut graph = Graph::new();
    graph.new_same_rank_subgraph("s").new_node("a");

    assert_eq!(
        graph.render_with(&RenderOptions::new().with_indent(1)),
        "digraph \"G\" {\n node [shape=box];\n subgraph \"s\" {\n  rank=same;\n  \"a\";\n }\n}\n"
    );
}

#[test]
fn test_write_to_buffer() {
    let mut graph = Graph::new();
    graph.new_node("a");

    let mut buffer = Vec::new();
    graph
        .write_to(&mut buffer, &RenderOptions::default())
        .unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), graph.render());
}

#[test]
fn test_graph_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Graph>();
    assert_send_sync::<Subgraph>();
}
