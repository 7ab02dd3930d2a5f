use super::Layers;
use crate::graph::SpacingGraph;
use std::collections::BTreeMap;

/// Group nodes by rank, see [`Layers::of`]
pub(crate) fn group_by_rank<G>(graph: &G) -> Layers<G::NodeId>
where
    G: SpacingGraph,
{
    let mut by_rank: BTreeMap<usize, Vec<G::NodeId>> = BTreeMap::new();
    for node in graph.node_ids() {
        by_rank.entry(graph.rank(node)).or_default().push(node);
    }

    let mut layers = Layers::default();
    for (rank, mut nodes) in by_rank {
        // Stable, so equal orders keep iteration order
        nodes.sort_by_key(|&node| graph.order(node));
        layers.ranks.push(rank);
        layers.nodes.push(nodes);
    }
    layers
}
