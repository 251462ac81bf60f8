use std::fmt::Debug;
use std::hash::Hash;

use crate::Distance;

/// Weighted graph the shortest path search runs on.
/// Every edge is traversable from both of its ends, therefore an undirected edge between A and B
/// must be exposed by both `node_edges(A)` and `node_edges(B)` with the same weight.
pub trait WeightedGraph {
    /// Uniquely identify a node that belongs to the graph.
    type NodeId: Debug + Copy + Eq + Hash;

    /// Gets an iterator over all the edges leaving the given node.
    /// For each edge returns the neighbor at the other end and the edge weight.
    /// Returns an empty iterator if the node doesn't belong to the graph.
    fn node_edges(&self, node: Self::NodeId) -> impl Iterator<Item = (Self::NodeId, Distance)>;

    /// Returns the number of edge entries leaving the node, parallel edges counted once each.
    fn node_degree(&self, node: Self::NodeId) -> usize {
        self.node_edges(node).count()
    }
}

pub mod park;
pub mod path;
