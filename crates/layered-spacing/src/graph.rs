//! The graph seen by the spacing procedures
//!
//! [`SpacingGraph`] is the whole interface the procedures need: node kinds,
//! ranks, order within a rank, option lookup, and a writable vertical
//! coordinate. [`LayeredGraph`] implements it on top of a petgraph
//! `DiGraph`.

use crate::options::{resolve, NodeOptions, SpacingOption, SpacingOptions};
use crate::Point;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Whether a node is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// A rendered node, with a visual extent
    Real,
    /// A dummy vertex, e.g. a bend point of an edge spanning several ranks
    Placeholder,
}

/// Graph interface consumed by the spacing procedures
pub trait SpacingGraph {
    /// The type used to identify nodes in the graph
    type NodeId: Copy + Eq + Hash + fmt::Debug;

    fn node_ids(&self) -> impl Iterator<Item = Self::NodeId> + '_;

    fn kind(&self, node: Self::NodeId) -> NodeKind;

    /// Layer index assigned by the ranking step
    fn rank(&self, node: Self::NodeId) -> usize;

    /// Position within the node's layer, assigned by the ordering step
    fn order(&self, node: Self::NodeId) -> usize;

    /// Effective value of `key` for `node`, or the graph-level value when
    /// `node` is `None`
    fn resolve(&self, key: SpacingOption, node: Option<Self::NodeId>) -> f32;

    fn set_y(&mut self, node: Self::NodeId, y: f32);

    fn is_real(&self, node: Self::NodeId) -> bool {
        self.kind(node) == NodeKind::Real
    }
}

/// Errors that can occur while building a [`LayeredGraph`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0:?} already exists")]
    DuplicateNode(String),
    #[error("unknown node {0:?}")]
    UnknownNode(String),
}

/// Node data stored in the graph
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: String,
    pub kind: NodeKind,
    pub rank: usize,
    pub order: usize,
    pub options: NodeOptions,
    pub position: Point,
}

/// Ranked graph with graph-level spacing options
#[derive(Debug, Clone, Default)]
pub struct LayeredGraph {
    pub digraph: DiGraph<Vertex, ()>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
    pub options: SpacingOptions,
}

impl LayeredGraph {
    pub fn new(options: SpacingOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Add a node at the end of its rank
    pub fn add_node(
        &mut self,
        id: &str,
        kind: NodeKind,
        rank: usize,
    ) -> Result<NodeIndex, GraphError> {
        if self.node_index.contains_key(id) {
            return Err(GraphError::DuplicateNode(id.to_string()));
        }
        let order = self
            .digraph
            .node_weights()
            .filter(|vertex| vertex.rank == rank)
            .count();
        let index = self.digraph.add_node(Vertex {
            id: id.to_string(),
            kind,
            rank,
            order,
            options: NodeOptions::default(),
            position: Point::default(),
        });
        self.node_index.insert(id.to_string(), index);
        Ok(index)
    }

    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let from = self.index(from)?;
        let to = self.index(to)?;
        self.digraph.add_edge(from, to, ());
        Ok(())
    }

    pub fn index(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    pub fn node(&self, id: &str) -> Result<&Vertex, GraphError> {
        Ok(&self.digraph[self.index(id)?])
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut Vertex, GraphError> {
        let index = self.index(id)?;
        Ok(&mut self.digraph[index])
    }

    /// Override the position of a node within its rank
    pub fn set_order(&mut self, id: &str, order: usize) -> Result<(), GraphError> {
        self.node_mut(id)?.order = order;
        Ok(())
    }

    pub fn set_node_options(&mut self, id: &str, options: NodeOptions) -> Result<(), GraphError> {
        self.node_mut(id)?.options = options;
        Ok(())
    }

    pub fn position(&self, id: &str) -> Result<Point, GraphError> {
        Ok(self.node(id)?.position)
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }
}

impl SpacingGraph for LayeredGraph {
    type NodeId = NodeIndex;

    fn node_ids(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.digraph.node_indices()
    }

    fn kind(&self, node: NodeIndex) -> NodeKind {
        self.digraph[node].kind
    }

    fn rank(&self, node: NodeIndex) -> usize {
        self.digraph[node].rank
    }

    fn order(&self, node: NodeIndex) -> usize {
        self.digraph[node].order
    }

    fn resolve(&self, key: SpacingOption, node: Option<NodeIndex>) -> f32 {
        let node_options = node.map(|index| &self.digraph[index].options);
        resolve(key, node_options, &self.options)
    }

    fn set_y(&mut self, node: NodeIndex, y: f32) {
        self.digraph[node].position.y = y;
    }
}
