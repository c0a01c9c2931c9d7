use amble_routing::road_edge::EdgeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Failed to read road network file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse road network GeoJSON: {0}")]
    Parse(#[from] geojson::Error),
    #[error("Road network must be a FeatureCollection")]
    NotAFeatureCollection,
    #[error("Feature #{index} has no valid '{property}' property")]
    MissingProperty {
        index: usize,
        property: &'static str,
    },
    #[error("Feature #{index} must be a LineString with at least two positions")]
    InvalidGeometry { index: usize },
    #[error("Edge {edge_id} has an invalid length {length}")]
    InvalidLength { edge_id: EdgeId, length: f64 },
    #[error("Edge {edge_id} has '{column}' = {value}, expected a value between 0 and 1")]
    AttributeOutOfRange {
        edge_id: EdgeId,
        column: &'static str,
        value: f64,
    },
    #[error("Duplicate edge id {0}")]
    DuplicateEdge(EdgeId),
}
