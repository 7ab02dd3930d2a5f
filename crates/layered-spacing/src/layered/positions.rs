use super::baseline::baseline_distance;
use super::layers::group_by_rank;
use super::Layers;
use crate::graph::SpacingGraph;
use crate::Paddings;
use tracing::debug;

/// Accumulated baseline of each layer, the first one at 0
pub fn layer_baselines<G>(
    paddings: &Paddings<G::NodeId>,
    graph: &G,
    layers: &Layers<G::NodeId>,
) -> Vec<f32>
where
    G: SpacingGraph,
{
    let mut baselines = Vec::with_capacity(layers.nodes.len());
    let mut height = 0.0;
    for (i, layer) in layers.nodes.iter().enumerate() {
        if i > 0 {
            height += baseline_distance(paddings, graph, &layers.nodes[i - 1], layer);
        }
        baselines.push(height);
    }
    baselines
}

/// Stack the layers of `graph` top to bottom and write the vertical
/// coordinate of every node
///
/// All nodes of a layer get the same coordinate. Consecutive layers are
/// [`baseline_distance`] apart.
pub fn arrange_layers_by_baselines<G>(paddings: &Paddings<G::NodeId>, graph: &mut G)
where
    G: SpacingGraph,
{
    let layers = group_by_rank(&*graph);
    if layers.is_empty() {
        return;
    }

    let baselines = layer_baselines(paddings, &*graph, &layers);
    for ((rank, layer), y) in layers.ranks.iter().zip(&layers.nodes).zip(baselines) {
        debug!("Rank {rank}: {} nodes at y = {y}", layer.len());
        for &node in layer {
            graph.set_y(node, y);
        }
    }
}
