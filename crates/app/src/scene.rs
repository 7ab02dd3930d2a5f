//! RON scene files
//!
//! A scene is a ranked and ordered graph, as a layout pipeline would hand
//! it over after ranking and ordering, plus the spacing options and the
//! size of every drawn node.

use anyhow::{Context, Result};
use layered_spacing::{
    arrange_layers_by_baselines, ideal_sibling_distance, Bounds, LayeredGraph, Layers, NodeIndex,
    NodeKind, NodeOptions, Paddings, SpacingOptions, Vec2,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub options: SpacingOptions,
    pub nodes: Vec<SceneNode>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneNode {
    pub id: String,
    pub rank: usize,
    /// Position within the rank; insertion order when absent
    #[serde(default)]
    pub order: Option<usize>,
    pub shape: Shape,
    #[serde(default)]
    pub options: NodeOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub enum Shape {
    /// A drawn box centered on the node
    Box { width: f32, height: f32 },
    /// A drawn shape with an explicit bounding box
    Bounds(Bounds),
    /// A dummy vertex
    Dummy,
}

impl Shape {
    fn kind(&self) -> NodeKind {
        match self {
            Shape::Dummy => NodeKind::Placeholder,
            Shape::Box { .. } | Shape::Bounds(_) => NodeKind::Real,
        }
    }

    fn bounds(&self) -> Bounds {
        match *self {
            Shape::Box { width, height } => Bounds::centered(Vec2::new(width, height)),
            Shape::Bounds(bounds) => bounds,
            Shape::Dummy => Bounds::default(),
        }
    }
}

/// Graph built from a scene, with the bounds of its nodes
pub struct Built {
    pub graph: LayeredGraph,
    pub bounds: HashMap<NodeIndex, Bounds>,
}

impl Scene {
    pub fn parse(text: &str) -> Result<Self> {
        ron::from_str(text).context("invalid scene")
    }

    pub fn build(&self) -> Result<Built> {
        let mut graph = LayeredGraph::new(self.options.clone());
        let mut bounds = HashMap::new();
        for node in &self.nodes {
            let index = graph.add_node(&node.id, node.shape.kind(), node.rank)?;
            if let Some(order) = node.order {
                graph.set_order(&node.id, order)?;
            }
            graph.set_node_options(&node.id, node.options.clone())?;
            bounds.insert(index, node.shape.bounds());
        }
        for (from, to) in &self.edges {
            graph
                .add_edge(from, to)
                .with_context(|| format!("edge {from} -> {to}"))?;
        }
        debug!(
            "Built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.digraph.edge_count()
        );
        Ok(Built { graph, bounds })
    }
}

/// Arrange the layers of `scene` and describe the result
///
/// One `id y` line per node, in layer order. With `siblings`, each layer is
/// followed by the ideal distance between its consecutive nodes.
pub fn report(scene: &Scene, siblings: bool) -> Result<String> {
    let Built { mut graph, bounds } = scene.build()?;

    let paddings = Paddings::measure(&graph, &bounds);
    arrange_layers_by_baselines(&paddings, &mut graph);
    info!("Arranged {} nodes", graph.node_count());

    let layers = Layers::of(&graph);
    let mut out = String::new();
    for (rank, layer) in layers.ranks.iter().zip(&layers.nodes) {
        writeln!(out, "# rank {rank}")?;
        for &node in layer {
            let vertex = &graph.digraph[node];
            writeln!(out, "{} {}", vertex.id, vertex.position.y)?;
        }
        if siblings {
            for pair in layer.windows(2) {
                let distance = ideal_sibling_distance(&paddings, &graph, pair[0], pair[1]);
                writeln!(
                    out,
                    "{} <-> {} {distance}",
                    graph.digraph[pair[0]].id,
                    graph.digraph[pair[1]].id
                )?;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const SCENE: &str = r#"
        Scene(
            options: (
                sibling_distance: 10.0,
                sibling_pre_sep: 1.0,
                sibling_post_sep: 1.0,
                level_distance: 20.0,
                level_pre_sep: 0.0,
                level_post_sep: 0.0,
            ),
            nodes: [
                (id: "a", rank: 0, shape: Box(width: 30.0, height: 10.0)),
                (id: "b", rank: 0, shape: Dummy),
                (
                    id: "c",
                    rank: 1,
                    shape: Bounds((min: (x: -4.0, y: -1.0), max: (x: 4.0, y: 30.0))),
                    options: (level_pre_sep: Some(3.0)),
                ),
                (id: "d", rank: 2, shape: Box(width: 4.0, height: 4.0)),
            ],
            edges: [("a", "c"), ("c", "d")],
        )
    "#;

    #[test]
    fn builds_graph_from_scene() {
        let scene = Scene::parse(SCENE).unwrap();
        let Built { graph, bounds } = scene.build().unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.digraph.edge_count(), 2);
        assert_eq!(graph.node("b").unwrap().kind, NodeKind::Placeholder);
        assert_eq!(graph.options.level_distance, 20.0);
        let c = graph.index("c").unwrap();
        assert_eq!(bounds[&c].size(), Vec2::new(8.0, 31.0));
    }

    #[test]
    fn reports_positions_and_sibling_distances() {
        let scene = Scene::parse(SCENE).unwrap();

        let report = report(&scene, true).unwrap();

        // a..c: 0 + 3 + 5 - (-1) stays below the level distance.
        // c..d: 30 - (-2) exceeds it.
        let expected = "\
# rank 0
a 0
b 0
a <-> b 16
# rank 1
c 20
# rank 2
d 52
";
        assert_eq!(report, expected);
    }

    #[test]
    fn explicit_order_wins_over_file_order() {
        let scene = Scene::parse(
            r#"Scene(nodes: [
                (id: "x", rank: 0, order: Some(1), shape: Dummy),
                (id: "y", rank: 0, order: Some(0), shape: Dummy),
            ])"#,
        )
        .unwrap();

        let report = report(&scene, false).unwrap();

        assert_eq!(report, "# rank 0\ny 0\nx 0\n");
    }

    #[test]
    fn unknown_edge_endpoint_is_an_error() {
        let scene = Scene::parse(
            r#"Scene(nodes: [(id: "x", rank: 0, shape: Dummy)], edges: [("x", "nope")])"#,
        )
        .unwrap();

        let err = scene.build().err().unwrap();
        assert_eq!(err.to_string(), "edge x -> nope");
    }

    #[test]
    fn duplicate_node_is_an_error() {
        let scene = Scene::parse(
            r#"Scene(nodes: [
                (id: "x", rank: 0, shape: Dummy),
                (id: "x", rank: 1, shape: Dummy),
            ])"#,
        )
        .unwrap();

        assert!(scene.build().is_err());
    }

    #[test]
    fn malformed_scene_is_an_error() {
        assert!(Scene::parse("Scene(nodes: [(id: 3)])").is_err());
    }
}
