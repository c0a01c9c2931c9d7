use thiserror::Error;

use crate::comfort_factor::ComfortFactor;
use crate::road_edge::{EdgeId, NodeId};
use crate::route::RouteVariant;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required preference '{}'", .0.request_key())]
    MissingFactor(ComfortFactor),
    #[error("Preference '{}' must be between 0 and 10, got {value}", .factor.request_key())]
    FactorOutOfRange { factor: ComfortFactor, value: f64 },
    #[error("Invalid {field} coordinate (lat: {lat}, lon: {lon})")]
    InvalidCoordinate {
        field: &'static str,
        lat: f64,
        lon: f64,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No {variant} route found between node {source_node} and node {target_node}")]
    NoRouteFound {
        variant: RouteVariant,
        source_node: NodeId,
        target_node: NodeId,
    },
    #[error("Edge {edge_id} of the {variant} route is missing from the road network")]
    MissingEdge { variant: RouteVariant, edge_id: EdgeId },
    #[error("Graph engine failure: {0}")]
    Infrastructure(String),
    #[error("Route request timed out")]
    DeadlineExceeded,
}

impl RoutingError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, RoutingError::Validation(_))
    }
}

/// Failure reported by a [`crate::solver::ShortestPathSolver`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("No path between the source and target nodes")]
    NoPath,
    #[error("Search cancelled after its deadline")]
    Cancelled,
    #[error("{0}")]
    Engine(String),
}

/// Failure reported by a [`crate::solver::NodeLocator`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocatorError {
    #[error("The road network has no nodes")]
    EmptyNetwork,
    #[error("{0}")]
    Engine(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Duplicate edge id {0}")]
pub struct DuplicateEdgeError(pub EdgeId);
