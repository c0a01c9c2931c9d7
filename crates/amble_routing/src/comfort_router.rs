use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assembler::{feature_collection, resolve_edges};
use crate::cost_model::CostModels;
use crate::error::RoutingError;
use crate::geopoint::GeoPoint;
use crate::metrics::{RouteMetrics, aggregate};
use crate::orchestrator::RouteOrchestrator;
use crate::preferences::{PreferenceInput, normalize};
use crate::road_edge::NodeId;
use crate::route::Route;
use crate::solver::{Deadline, EdgeStore, NodeLocator, ShortestPathSolver};

#[derive(Debug, Clone, Deserialize)]
pub struct ComfortRouteRequest {
    pub start: GeoPoint,
    pub end: GeoPoint,
    #[serde(flatten)]
    pub preferences: PreferenceInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantMetrics {
    pub comfort: RouteMetrics,
    pub shortest: RouteMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComfortRouteResponse {
    pub comfort: FeatureCollection,
    pub shortest: FeatureCollection,
    pub metrics: VariantMetrics,
}

/// Computes the comfort-optimized and the shortest walking route between two points.
pub struct ComfortRouter<'a> {
    network: &'a dyn EdgeStore,
    locator: &'a dyn NodeLocator,
    solver: &'a dyn ShortestPathSolver,
    deadline: Deadline,
}

impl<'a> ComfortRouter<'a> {
    pub fn new(
        network: &'a dyn EdgeStore,
        locator: &'a dyn NodeLocator,
        solver: &'a dyn ShortestPathSolver,
    ) -> Self {
        ComfortRouter {
            network,
            locator,
            solver,
            deadline: Deadline::NONE,
        }
    }

    /// Stops between stages and inside the searches once `deadline` has passed.
    pub fn with_deadline(self, deadline: Deadline) -> Self {
        ComfortRouter { deadline, ..self }
    }

    pub fn route(
        &self,
        request: &ComfortRouteRequest,
    ) -> Result<ComfortRouteResponse, RoutingError> {
        request.start.validate("start")?;
        request.end.validate("end")?;
        let preferences = normalize(&request.preferences)?;
        self.check_deadline()?;

        let source = self.locate(&request.start)?;
        let target = self.locate(&request.end)?;
        info!(source, target, alpha = preferences.alpha(), "resolved route endpoints");

        let models = CostModels::build(&preferences);
        let routes = RouteOrchestrator::new(self.solver, self.network)
            .with_deadline(self.deadline)
            .solve_pair(&models, source, target)?;
        self.check_deadline()?;

        let (comfort, comfort_metrics) = self.summarize(&routes.comfort)?;
        let (shortest, shortest_metrics) = self.summarize(&routes.shortest)?;
        info!(
            comfort_segments = comfort.features.len(),
            shortest_segments = shortest.features.len(),
            "assembled routes"
        );

        Ok(ComfortRouteResponse {
            comfort,
            shortest,
            metrics: VariantMetrics {
                comfort: comfort_metrics,
                shortest: shortest_metrics,
            },
        })
    }

    fn check_deadline(&self) -> Result<(), RoutingError> {
        if self.deadline.is_expired() {
            return Err(RoutingError::DeadlineExceeded);
        }
        Ok(())
    }

    fn locate(&self, point: &GeoPoint) -> Result<NodeId, RoutingError> {
        self.locator
            .nearest_node(point)
            .map_err(|error| RoutingError::Infrastructure(format!("nearest node lookup: {error}")))
    }

    fn summarize(&self, route: &Route) -> Result<(FeatureCollection, RouteMetrics), RoutingError> {
        let edges = resolve_edges(route, self.network)?;
        Ok((
            feature_collection(&edges, route.variant()),
            aggregate(route.variant(), &edges),
        ))
    }
}
