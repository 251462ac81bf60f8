#![doc = include_str!("../README.md")]

mod error;
mod graph;
pub mod menu;
mod model;
mod path;
mod routing;

pub use error::{EdgeError, RouteError};
pub use graph::WeightedGraph;
pub use graph::park::{Graph, Neighbors, NodeId};
pub use graph::path::{is_path_connected, lightest_edge, path_distance};
pub use model::Distance;
pub use path::Path;
pub use routing::route::Route;
pub use routing::{ShortestPathConfig, shortest_path, unpack_path};
