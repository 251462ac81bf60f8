use std::cmp::Reverse;
use std::hash::Hash;

use radix_heap::RadixHeapMap;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::Distance;
use crate::graph::WeightedGraph;
use crate::path::Path;

pub mod route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestPathConfig {
    /// Paths longer than this distance are not explored.
    pub max_distance: Distance,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            max_distance: Distance::MAX,
        }
    }
}

/// Dijkstra's shortest path from origin to destination.
///
/// The frontier is a monotone radix heap: edge weights are never negative, therefore a node is
/// never pushed with a distance lower than the one just popped. A node can be pushed many times,
/// stale entries are skipped once the node has been finalized.
///
/// Returns None if the destination cannot be reached from the origin within the configured
/// max distance.
pub fn shortest_path<G: WeightedGraph>(
    config: &ShortestPathConfig,
    graph: &G,
    origin: G::NodeId,
    destination: G::NodeId,
) -> Option<Path<G::NodeId>> {
    debug!("Computing shortest path {origin:?} -> {destination:?} with {config:?}");

    // (current) shortest distance from origin to this node, unreached nodes are absent
    let mut shortest_distances = FxHashMap::from_iter([(origin, Distance::ZERO)]);

    // previous node on the current best known path from origin to this node (key)
    let mut previous_map: FxHashMap<G::NodeId, G::NodeId> = FxHashMap::default();

    // nodes whose shortest distance from origin will not change anymore
    let mut finalized: FxHashSet<G::NodeId> = FxHashSet::default();

    // priority queue of discovered nodes that may need to be visited
    let mut frontier = RadixHeapMap::from_iter([(Reverse(Distance::ZERO.meters()), origin)]);

    while let Some((Reverse(meters), node)) = frontier.pop() {
        if !finalized.insert(node) {
            continue;
        }

        let distance = Distance::from_meters(meters);

        if node == destination {
            return Some(Path {
                distance,
                nodes: unpack_path(&previous_map, destination),
            });
        }

        for (neighbor, weight) in graph.node_edges(node) {
            if finalized.contains(&neighbor) {
                continue;
            }

            let candidate = distance + weight;
            if candidate > config.max_distance {
                continue;
            }

            // check if we can follow the current path to reach the neighbor in a cheaper way
            let is_shorter = shortest_distances
                .get(&neighbor)
                .is_none_or(|&shortest| candidate < shortest);

            if is_shorter {
                trace!("Relaxing {neighbor:?} via {node:?}: {candidate}");
                shortest_distances.insert(neighbor, candidate);
                previous_map.insert(neighbor, node);
                frontier.push(Reverse(candidate.meters()), neighbor);
            }
        }
    }

    debug!("No path {origin:?} -> {destination:?}");
    None
}

/// Unpacks the shortest path from destination back to origin.
pub fn unpack_path<NodeId: Copy + Eq + Hash>(
    previous_map: &FxHashMap<NodeId, NodeId>,
    destination: NodeId,
) -> Vec<NodeId> {
    let mut nodes = vec![destination];
    let mut next = destination;

    while let Some(&previous) = previous_map.get(&next) {
        next = previous;
        nodes.push(previous);
    }

    nodes.reverse();
    nodes
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::Graph;
    use crate::graph::park::NodeId;
    use crate::graph::tests::PARK_GRAPH;

    fn ids(graph: &Graph, names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|n| graph.node_id(n).unwrap()).collect()
    }

    fn search(graph: &Graph, origin: &str, destination: &str) -> Option<Path<NodeId>> {
        let config = ShortestPathConfig::default();
        let origin = graph.node_id(origin).unwrap();
        let destination = graph.node_id(destination).unwrap();
        shortest_path(&config, graph, origin, destination)
    }

    /// Nodes on a line, each one connected to the next with weight 1.
    struct LineGraph(u32);

    impl WeightedGraph for LineGraph {
        type NodeId = u32;

        fn node_edges(&self, node: u32) -> impl Iterator<Item = (u32, Distance)> {
            let previous = node.checked_sub(1);
            let next = Some(node + 1).filter(|&n| n < self.0);
            previous
                .into_iter()
                .chain(next)
                .filter(move |_| node < self.0)
                .map(|n| (n, Distance::from_meters(1)))
        }
    }

    #[test]
    fn shortest_path_001() {
        let graph: &Graph = &PARK_GRAPH;

        assert_eq!(
            search(graph, "Lago", "Lago").unwrap(),
            Path {
                distance: Distance::ZERO,
                nodes: ids(graph, &["Lago"]),
            }
        );
    }

    #[test]
    fn shortest_path_002() {
        let graph: &Graph = &PARK_GRAPH;

        assert_eq!(
            search(graph, "Entrada", "Mirador").unwrap(),
            Path {
                distance: Distance::from_meters(8),
                nodes: ids(graph, &["Entrada", "Lago", "Mirador"]),
            }
        );
    }

    #[test]
    fn shortest_path_003() {
        let graph: &Graph = &PARK_GRAPH;

        assert_eq!(
            search(graph, "Entrada", "Bosque").unwrap(),
            Path {
                distance: Distance::from_meters(17),
                nodes: ids(graph, &["Entrada", "Lago", "Mirador", "Cascada", "Bosque"]),
            }
        );
    }

    #[test]
    fn shortest_path_004() {
        let graph: &Graph = &PARK_GRAPH;

        assert_eq!(
            search(graph, "Mirador", "Jardin").unwrap(),
            Path {
                distance: Distance::from_meters(9),
                nodes: ids(graph, &["Mirador", "Lago", "Cafeteria", "Jardin"]),
            }
        );
        assert_eq!(
            search(graph, "Bosque", "Jardin").unwrap(),
            Path {
                distance: Distance::from_meters(16),
                nodes: ids(graph, &["Bosque", "Cafeteria", "Jardin"]),
            }
        );
    }

    #[test]
    fn shortest_path_005() {
        let graph: &Graph = &PARK_GRAPH;

        assert_eq!(search(graph, "Entrada", "Faro"), None);
        assert_eq!(search(graph, "Isla", "Bosque"), None);
        assert_eq!(
            search(graph, "Isla", "Faro").unwrap(),
            Path {
                distance: Distance::from_meters(4),
                nodes: ids(graph, &["Isla", "Faro"]),
            }
        );
    }

    #[test]
    fn shortest_path_006() {
        let graph: &Graph = &PARK_GRAPH;
        let origin = graph.node_id("Entrada").unwrap();
        let destination = graph.node_id("Cafeteria").unwrap();

        let config = ShortestPathConfig {
            max_distance: Distance::from_meters(5),
        };
        assert_eq!(shortest_path(&config, graph, origin, destination), None);

        let config = ShortestPathConfig {
            max_distance: Distance::from_meters(6),
        };
        assert_eq!(
            shortest_path(&config, graph, origin, destination).unwrap(),
            Path {
                distance: Distance::from_meters(6),
                nodes: ids(graph, &["Entrada", "Jardin", "Cafeteria"]),
            }
        );
    }

    #[test]
    fn shortest_path_007() {
        let graph = LineGraph(100);
        let config = ShortestPathConfig::default();

        let path = shortest_path(&config, &graph, 10, 90).unwrap();
        assert_eq!(path.distance, Distance::from_meters(80));
        assert_eq!(path.nodes, (10..=90).collect::<Vec<_>>());

        let path = shortest_path(&config, &graph, 90, 10).unwrap();
        assert_eq!(path.nodes, (10..=90).rev().collect::<Vec<_>>());

        assert_eq!(shortest_path(&config, &graph, 10, 100), None);
    }

    #[test]
    fn unpack_path_001() {
        let previous_map = FxHashMap::from_iter([(3, 2), (2, 1), (5, 4)]);

        assert_eq!(unpack_path(&previous_map, 3), vec![1, 2, 3]);
        assert_eq!(unpack_path(&previous_map, 1), vec![1]);
        assert_eq!(unpack_path(&previous_map, 5), vec![4, 5]);
    }
}
