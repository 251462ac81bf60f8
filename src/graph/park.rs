use std::fmt;
use std::slice;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::graph::WeightedGraph;
use crate::graph::path::path_distance;
use crate::routing::shortest_path;
use crate::{Distance, EdgeError, Route, RouteError, ShortestPathConfig};

/// Dense index of a location, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    const fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    name: String,
    /// Edges leaving this node, in insertion order.
    edges: Vec<(NodeId, Distance)>,
}

/// Undirected weighted graph of the locations of a park and the paths between them.
///
/// Every path is stored as two adjacency entries, one in each of its locations, so that both
/// entries always carry the same distance. Locations and paths are never removed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    ids: FxHashMap<String, NodeId>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a location with no paths. Adding a name that already exists is a no-op.
    /// Returns the id of the (new or existing) location.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let name = name.into();
        if let Some(&id) = self.ids.get(&name) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        debug!("Adding location {name:?} as {id:?}");

        self.ids.insert(name.clone(), id);
        self.nodes.push(Node {
            name,
            edges: vec![],
        });

        id
    }

    /// Adds an undirected path between two existing locations.
    /// Parallel paths between the same pair of locations are kept side by side.
    ///
    /// Fails without modifying the graph if any of the locations doesn't exist (origin is
    /// checked first) or if the weight is negative.
    pub fn add_edge(
        &mut self,
        origin: &str,
        destination: &str,
        weight: i32,
    ) -> Result<(), EdgeError> {
        let (origin_id, destination_id) = match (self.node_id(origin), self.node_id(destination)) {
            (Some(o), Some(d)) => (o, d),
            (None, _) => return Err(self.reject(EdgeError::MissingNode(origin.to_owned()))),
            (_, None) => return Err(self.reject(EdgeError::MissingNode(destination.to_owned()))),
        };

        let Some(distance) = Distance::from_weight(weight) else {
            return Err(self.reject(EdgeError::InvalidWeight(weight)));
        };

        debug!("Adding path {origin:?} <=> {destination:?} ({distance})");
        self.nodes[origin_id.index()]
            .edges
            .push((destination_id, distance));
        self.nodes[destination_id.index()]
            .edges
            .push((origin_id, distance));
        self.edge_count += 1;

        Ok(())
    }

    fn reject(&self, error: EdgeError) -> EdgeError {
        debug!("Cannot add path: {error}");
        error
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Gets the name of the location, None if the id doesn't belong to this graph.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.index()).map(|n| n.name.as_str())
    }

    // ids stored in the graph always come from `add_node` on this same graph
    fn name_of(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].name
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected paths, each successful `add_edge` counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets the neighbors of a location together with the distance of each path, None if the
    /// location doesn't exist.
    pub fn neighbors(&self, name: &str) -> Option<Neighbors<'_>> {
        let id = self.node_id(name)?;
        Some(self.neighbors_of(id))
    }

    fn neighbors_of(&self, id: NodeId) -> Neighbors<'_> {
        Neighbors {
            graph: self,
            edges: self.nodes[id.index()].edges.iter(),
        }
    }

    /// Gets an iterator over every location (in insertion order) and its neighbors.
    /// Each call returns a fresh iterator, the graph is only borrowed.
    pub fn adjacency(&self) -> impl Iterator<Item = (&str, Neighbors<'_>)> {
        (0..self.nodes.len()).map(|index| {
            let id = NodeId(index);
            (self.name_of(id), self.neighbors_of(id))
        })
    }

    /// Computes the shortest route between two locations.
    /// Returns None if the locations are not connected.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Option<Route>, RouteError> {
        self.shortest_path_with(&ShortestPathConfig::default(), start, end)
    }

    pub fn shortest_path_with(
        &self,
        config: &ShortestPathConfig,
        start: &str,
        end: &str,
    ) -> Result<Option<Route>, RouteError> {
        let origin = self
            .node_id(start)
            .ok_or_else(|| RouteError::UnknownNode(start.to_owned()))?;
        let destination = self
            .node_id(end)
            .ok_or_else(|| RouteError::UnknownNode(end.to_owned()))?;

        let route = shortest_path(config, self, origin, destination).map(|path| {
            debug_assert_eq!(path_distance(self, &path.nodes), Some(path.distance));
            Route {
                nodes: path
                    .nodes
                    .into_iter()
                    .map(|id| self.name_of(id).to_owned())
                    .collect(),
                distance: path.distance,
            }
        });

        Ok(route)
    }
}

impl WeightedGraph for Graph {
    type NodeId = NodeId;

    fn node_edges(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Distance)> {
        self.nodes
            .get(node.index())
            .into_iter()
            .flat_map(|n| n.edges.iter().copied())
    }
}

/// Iterator over the neighbors of a location, yields the neighbor name and the path distance.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    graph: &'a Graph,
    edges: slice::Iter<'a, (NodeId, Distance)>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = (&'a str, Distance);

    fn next(&mut self) -> Option<Self::Item> {
        let &(neighbor, distance) = self.edges.next()?;
        Some((self.graph.name_of(neighbor), distance))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, neighbors) in self.adjacency() {
            write!(f, "{name} -> ")?;
            for (neighbor, distance) in neighbors {
                write!(f, "{neighbor} ({distance}), ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
