use crate::graph::SpacingGraph;
use crate::options::SpacingOption;
use crate::Paddings;

/// Minimum vertical distance between the baselines of two stacked layers
///
/// Think of two lines of text: the lowest point of `layer1` and the highest
/// point of `layer2` must stay apart by the separations, and the baselines
/// by the level distance. Every node of a layer votes and the strictest
/// value wins. Option values are read from all nodes, extents from real
/// nodes only.
///
/// Returns 0 if either layer is empty.
pub fn baseline_distance<G>(
    paddings: &Paddings<G::NodeId>,
    graph: &G,
    layer1: &[G::NodeId],
    layer2: &[G::NodeId],
) -> f32
where
    G: SpacingGraph,
{
    if layer1.is_empty() || layer2.is_empty() {
        return 0.0;
    }

    let mut level_distance = f32::NEG_INFINITY;
    let mut post_sep = f32::NEG_INFINITY;
    let mut max_post: Option<f32> = None;
    for &node in layer1 {
        level_distance =
            level_distance.max(graph.resolve(SpacingOption::LevelDistance, Some(node)));
        post_sep = post_sep.max(graph.resolve(SpacingOption::LevelPostSep, Some(node)));
        if graph.is_real(node) {
            let post = paddings.get(node).layer_post;
            max_post = Some(max_post.map_or(post, |max| max.max(post)));
        }
    }

    let mut pre_sep = f32::NEG_INFINITY;
    let mut min_pre: Option<f32> = None;
    for &node in layer2 {
        pre_sep = pre_sep.max(graph.resolve(SpacingOption::LevelPreSep, Some(node)));
        if graph.is_real(node) {
            let pre = paddings.get(node).layer_pre;
            min_pre = Some(min_pre.map_or(pre, |min| min.min(pre)));
        }
    }

    // A layer made of placeholders only has no extent to clear.
    match (max_post, min_pre) {
        (Some(max_post), Some(min_pre)) => {
            level_distance.max(post_sep + pre_sep + max_post - min_pre)
        }
        _ => level_distance,
    }
}
