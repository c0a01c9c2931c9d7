use amble_graph::road_graph::RoadGraph;
use std::time::Duration;

pub struct AppState {
    pub graph: RoadGraph,
    pub request_timeout: Duration,
}
