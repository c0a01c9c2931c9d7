//! Comfort-aware pedestrian routing.
//!
//! Turns user comfort preferences into edge costs, asks an external
//! shortest-path engine for a comfort-optimized and a shortest route, and
//! returns both as GeoJSON with per-route statistics.

pub mod assembler;
pub mod comfort_factor;
pub mod comfort_router;
pub mod cost_model;
pub mod error;
pub mod geopoint;
pub mod metrics;
pub mod orchestrator;
pub mod preferences;
pub mod road_edge;
pub mod route;
pub mod solver;
mod test_utils;
