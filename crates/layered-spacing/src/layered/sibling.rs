use crate::graph::SpacingGraph;
use crate::options::SpacingOption;
use crate::Paddings;

/// Minimum center-to-center distance between two adjacent nodes of a layer
///
/// `n1` comes before `n2` in the layer's order. Placeholders contribute
/// neither separation nor extent. Between two placeholders the graph-level
/// distance and separations apply.
pub fn ideal_sibling_distance<G>(
    paddings: &Paddings<G::NodeId>,
    graph: &G,
    n1: G::NodeId,
    n2: G::NodeId,
) -> f32
where
    G: SpacingGraph,
{
    let n1_is_real = graph.is_real(n1);
    let n2_is_real = graph.is_real(n2);

    let (ideal_distance, sep) = if !n1_is_real && !n2_is_real {
        (
            graph.resolve(SpacingOption::SiblingDistance, None),
            graph.resolve(SpacingOption::SiblingPostSep, None)
                + graph.resolve(SpacingOption::SiblingPreSep, None),
        )
    } else {
        let base = if n1_is_real { n1 } else { n2 };
        let post_sep = if n1_is_real {
            graph.resolve(SpacingOption::SiblingPostSep, Some(n1))
        } else {
            0.0
        };
        let pre_sep = if n2_is_real {
            graph.resolve(SpacingOption::SiblingPreSep, Some(n2))
        } else {
            0.0
        };
        (
            graph.resolve(SpacingOption::SiblingDistance, Some(base)),
            post_sep + pre_sep,
        )
    };

    let post_extent = if n1_is_real {
        paddings.get(n1).sibling_post
    } else {
        0.0
    };
    let pre_extent = if n2_is_real {
        paddings.get(n2).sibling_pre
    } else {
        0.0
    };

    ideal_distance.max(sep + post_extent - pre_extent)
}
