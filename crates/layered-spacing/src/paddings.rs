//! Per-run extent table
//!
//! The extents of a node are measured once when a layout run starts and
//! looked up by the spacing procedures through [`Paddings`]. Only real nodes
//! get an entry; any node without one reads as zero extent.

use crate::graph::SpacingGraph;
use crate::{Bounds, NodeBounds};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

/// How far a node's shape protrudes from its center along each axis
///
/// `*_pre` values sit before the center (left, or above) and are usually
/// negative; `*_post` values sit after it and are usually positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extents {
    pub sibling_pre: f32,
    pub sibling_post: f32,
    pub layer_pre: f32,
    pub layer_post: f32,
}

impl Extents {
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self {
            sibling_pre: bounds.min.x,
            sibling_post: bounds.max.x,
            layer_pre: bounds.min.y,
            layer_post: bounds.max.y,
        }
    }
}

/// Extent side table for one layout run
#[derive(Debug, Clone)]
pub struct Paddings<N> {
    extents: HashMap<N, Extents>,
}

impl<N> Default for Paddings<N> {
    fn default() -> Self {
        Self {
            extents: HashMap::new(),
        }
    }
}

impl<N> Paddings<N>
where
    N: Copy + Eq + Hash + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure every real node of `graph`
    pub fn measure<G, B>(graph: &G, bounds: &B) -> Self
    where
        G: SpacingGraph<NodeId = N>,
        B: NodeBounds<N>,
    {
        let mut paddings = Self::new();
        for node in graph.node_ids().filter(|&node| graph.is_real(node)) {
            let extents = Extents::from_bounds(bounds.bounds(node));
            trace!("Extents of {node:?}: {extents:?}");
            paddings.insert(node, extents);
        }
        paddings
    }

    pub fn insert(&mut self, node: N, extents: Extents) {
        self.extents.insert(node, extents);
    }

    /// Extents of `node`, zero if it was never measured
    pub fn get(&self, node: N) -> Extents {
        self.extents.get(&node).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.extents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }
}
