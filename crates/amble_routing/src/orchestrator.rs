use tracing::{debug, warn};

use crate::cost_model::{CostModel, CostModels};
use crate::error::{RoutingError, SolverError};
use crate::road_edge::{NodeId, RoadEdge};
use crate::route::{Route, RouteVariant};
use crate::solver::{CostedEdge, Deadline, EdgeStore, ShortestPathSolver};

pub struct RoutePair {
    pub comfort: Route,
    pub shortest: Route,
}

/// Runs the solver once per cost model over the same source/target pair.
pub struct RouteOrchestrator<'a> {
    solver: &'a dyn ShortestPathSolver,
    network: &'a dyn EdgeStore,
    deadline: Deadline,
}

pub fn costed_edges(edges: &[RoadEdge], model: &dyn CostModel) -> Vec<CostedEdge> {
    edges
        .iter()
        .map(|edge| CostedEdge {
            id: edge.id,
            source: edge.source,
            target: edge.target,
            cost: model.edge_cost(edge),
        })
        .collect()
}

impl<'a> RouteOrchestrator<'a> {
    pub fn new(solver: &'a dyn ShortestPathSolver, network: &'a dyn EdgeStore) -> Self {
        RouteOrchestrator {
            solver,
            network,
            deadline: Deadline::NONE,
        }
    }

    pub fn with_deadline(self, deadline: Deadline) -> Self {
        RouteOrchestrator { deadline, ..self }
    }

    pub fn solve_variant(
        &self,
        variant: RouteVariant,
        model: &dyn CostModel,
        source: NodeId,
        target: NodeId,
    ) -> Result<Route, RoutingError> {
        if self.deadline.is_expired() {
            return Err(RoutingError::DeadlineExceeded);
        }

        let edges = costed_edges(self.network.edges(), model);
        debug!(%variant, edges = edges.len(), source, target, "invoking solver");

        match self.solver.solve(&edges, source, target, self.deadline) {
            Ok(edge_ids) => Ok(Route::new(variant, edge_ids)),
            Err(SolverError::NoPath) => Err(RoutingError::NoRouteFound {
                variant,
                source_node: source,
                target_node: target,
            }),
            Err(SolverError::Cancelled) => Err(RoutingError::DeadlineExceeded),
            Err(SolverError::Engine(message)) => Err(RoutingError::Infrastructure(format!(
                "{variant} solver failed: {message}"
            ))),
        }
    }

    /// Solves both variants concurrently. Each result is independent of the other.
    pub fn solve_each(
        &self,
        models: &CostModels,
        source: NodeId,
        target: NodeId,
    ) -> (Result<Route, RoutingError>, Result<Route, RoutingError>) {
        rayon::join(
            || self.solve_variant(RouteVariant::Comfort, &models.comfort, source, target),
            || self.solve_variant(RouteVariant::Shortest, &models.distance, source, target),
        )
    }

    /// Both routes or nothing. When both sides fail the comfort failure is returned.
    pub fn solve_pair(
        &self,
        models: &CostModels,
        source: NodeId,
        target: NodeId,
    ) -> Result<RoutePair, RoutingError> {
        match self.solve_each(models, source, target) {
            (Ok(comfort), Ok(shortest)) => Ok(RoutePair { comfort, shortest }),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
            (Err(comfort_error), Err(shortest_error)) => {
                warn!("shortest route failed as well: {shortest_error}");
                Err(comfort_error)
            }
        }
    }
}
