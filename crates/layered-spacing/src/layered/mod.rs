//! Spacing between siblings and layers of a layered layout
//!
//! All procedures read extents from a [`Paddings`](crate::Paddings) table
//! built for the current run and options from the graph. Only
//! [`arrange_layers_by_baselines`] writes anything.

mod baseline;
mod layers;
mod positions;
mod sibling;

use std::hash::Hash;

pub use baseline::baseline_distance;
pub use positions::{arrange_layers_by_baselines, layer_baselines};
pub use sibling::ideal_sibling_distance;

use crate::graph::SpacingGraph;

/// Nodes of a graph grouped by rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layers<N> {
    /// Rank of each layer, strictly increasing
    pub ranks: Vec<usize>,

    /// Nodes of each layer, in sibling order
    pub nodes: Vec<Vec<N>>,
}

impl<N> Default for Layers<N> {
    fn default() -> Self {
        Self {
            ranks: Vec::new(),
            nodes: Vec::new(),
        }
    }
}

impl<N> Layers<N>
where
    N: Copy + Eq + Hash,
{
    /// Group the nodes of `graph` by rank
    ///
    /// Ranks without nodes are skipped. Within a layer, nodes are sorted by
    /// their order, ties keeping the graph's iteration order.
    pub fn of<G>(graph: &G) -> Self
    where
        G: SpacingGraph<NodeId = N>,
    {
        layers::group_by_rank(graph)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
