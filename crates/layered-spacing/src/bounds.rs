use crate::Bounds;
use std::collections::HashMap;
use std::hash::Hash;

/// Trait for providing node bounding boxes during extent measurement
pub trait NodeBounds<N> {
    /// Get the bounding box of a node, relative to its center
    fn bounds(&self, node: N) -> Bounds;
}

// Blanket implementation for closures
impl<N, F> NodeBounds<N> for F
where
    F: Fn(N) -> Bounds,
{
    fn bounds(&self, node: N) -> Bounds {
        self(node)
    }
}

// Implementation for HashMap
impl<N: Eq + Hash + Copy> NodeBounds<N> for HashMap<N, Bounds> {
    fn bounds(&self, node: N) -> Bounds {
        self.get(&node).copied().unwrap_or_default()
    }
}
