//! In-memory road network implementing the graph engine seams of `amble_routing`.

pub mod dijkstra;
pub mod error;
pub mod node_index;
pub mod road_graph;
