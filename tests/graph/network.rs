use std::sync::LazyLock;

use park_routes::Graph;

pub static PARK_GRAPH: LazyLock<Graph> = LazyLock::new(park_graph);

const LOCATIONS: [&str; 9] = [
    "Entrada",
    "Lago",
    "Mirador",
    "Jardin",
    "Cafeteria",
    "Cascada",
    "Bosque",
    "Faro",
    "Isla",
];

const PATHS: [(&str, &str, i32); 11] = [
    ("Entrada", "Lago", 5),
    ("Lago", "Mirador", 3),
    ("Entrada", "Mirador", 10),
    ("Entrada", "Jardin", 2),
    ("Jardin", "Cafeteria", 4),
    ("Cafeteria", "Lago", 2),
    ("Jardin", "Lago", 8),
    ("Mirador", "Cascada", 7),
    ("Cascada", "Bosque", 2),
    ("Cafeteria", "Bosque", 12),
    ("Faro", "Isla", 4),
];

pub fn park_graph() -> Graph {
    let mut graph = Graph::new();

    for name in LOCATIONS {
        graph.add_node(name);
    }

    for (origin, destination, weight) in PATHS {
        if let Err(error) = graph.add_edge(origin, destination, weight) {
            panic!("invalid park network: {error}");
        }
    }

    graph
}
