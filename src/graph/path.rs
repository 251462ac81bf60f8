use crate::Distance;
use crate::graph::WeightedGraph;

/// Returns the weight of the lightest edge between two nodes, None if they are not adjacent.
pub fn lightest_edge<G: WeightedGraph>(
    graph: &G,
    from: G::NodeId,
    to: G::NodeId,
) -> Option<Distance> {
    graph
        .node_edges(from)
        .filter(|&(n, _)| n == to)
        .map(|(_, weight)| weight)
        .min()
}

/// Returns true only if all the nodes of the path are sequentially connected in the given graph.
pub fn is_path_connected<G: WeightedGraph>(graph: &G, path: &[G::NodeId]) -> bool {
    path.windows(2)
        .all(|window| lightest_edge(graph, window[0], window[1]).is_some())
}

/// Gets the distance of the path following the lightest of any parallel edges.
/// Returns None if two consecutive nodes are not adjacent.
pub fn path_distance<G: WeightedGraph>(graph: &G, path: &[G::NodeId]) -> Option<Distance> {
    path.windows(2)
        .map(|window| lightest_edge(graph, window[0], window[1]))
        .sum()
}
