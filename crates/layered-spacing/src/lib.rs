//! Spacing for layered graph layouts
//!
//! This crate computes how far apart the nodes of a layered (Sugiyama-style)
//! drawing must be: the horizontal distance between neighbors of a layer,
//! and the vertical distance between consecutive layers. Each distance is
//! the larger of a configured minimum and what the nodes' own extents plus
//! the configured separations require. Options can be set on the graph and
//! overridden on any node.
//!
//! Ranking and ordering are done upstream; horizontal placement is left to
//! the caller, which asks [`ideal_sibling_distance`] for each pair of
//! neighbors.
//!
//! # Example
//!
//! ```
//! use layered_spacing::{
//!     arrange_layers_by_baselines, ideal_sibling_distance, Bounds, LayeredGraph, NodeKind,
//!     NodeIndex, Paddings, SpacingOptions, Vec2,
//! };
//!
//! let mut graph = LayeredGraph::new(SpacingOptions {
//!     sibling_distance: 10.0,
//!     level_distance: 20.0,
//!     ..Default::default()
//! });
//! let a = graph.add_node("a", NodeKind::Real, 0).unwrap();
//! let b = graph.add_node("b", NodeKind::Real, 0).unwrap();
//! graph.add_node("c", NodeKind::Real, 1).unwrap();
//!
//! // Measure extents once per run
//! let sizes = |_node: NodeIndex| Bounds::centered(Vec2::new(40.0, 30.0));
//! let paddings = Paddings::measure(&graph, &sizes);
//!
//! // Vertical placement
//! arrange_layers_by_baselines(&paddings, &mut graph);
//! assert!(graph.position("c").unwrap().y >= 30.0);
//!
//! // Horizontal spacing, for the caller's own placement
//! assert!(ideal_sibling_distance(&paddings, &graph, a, b) >= 40.0);
//! ```

mod bounds;
mod geometry;

pub mod graph;
pub mod layered;
pub mod options;
pub mod paddings;

// Re-export core types and traits
pub use bounds::NodeBounds;
pub use geometry::{Bounds, Point, Vec2};
pub use graph::{GraphError, LayeredGraph, NodeKind, SpacingGraph};
pub use options::{NodeOptions, SpacingOption, SpacingOptions};
pub use paddings::{Extents, Paddings};

// Re-export the node identifier of `LayeredGraph`
pub use petgraph::graph::NodeIndex;

// Re-export the spacing procedures
pub use layered::{
    arrange_layers_by_baselines, baseline_distance, ideal_sibling_distance, layer_baselines,
    Layers,
};
