mod network;

pub use network::{PARK_GRAPH, park_graph};
