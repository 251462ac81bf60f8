use std::fmt;
use std::ops::Deref;

use crate::Distance;

/// Shortest route between two locations of the park.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Names of the locations along the route, from start to end (both included).
    pub nodes: Vec<String>,
    /// Total distance of the route.
    pub distance: Distance,
}

impl Route {
    pub fn start(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }
}

impl Deref for Route {
    type Target = [String];
    fn deref(&self) -> &Self::Target {
        &self.nodes
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}
