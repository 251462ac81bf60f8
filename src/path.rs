use crate::Distance;

/// Sequence of nodes from an origin to a destination together with its total distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<NodeId> {
    pub distance: Distance,
    pub nodes: Vec<NodeId>,
}
