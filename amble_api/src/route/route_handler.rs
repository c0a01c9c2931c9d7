use crate::error::ApiError;
use crate::state::AppState;
use amble_routing::comfort_router::{ComfortRouteRequest, ComfortRouteResponse, ComfortRouter};
use amble_routing::solver::Deadline;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;
use tracing::info;

pub async fn route_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ComfortRouteRequest>, JsonRejection>,
) -> Result<Json<ComfortRouteResponse>, ApiError> {
    let Json(body) = payload?;
    let timeout = state.request_timeout;
    let deadline = Deadline::after(timeout);

    // The solver runs are CPU bound, keep them off the async workers
    let task = tokio::task::spawn_blocking(move || {
        let graph = &state.graph;
        ComfortRouter::new(graph, graph, graph)
            .with_deadline(deadline)
            .route(&body)
    });

    let response = tokio::time::timeout(timeout, task)
        .await
        .map_err(|_| ApiError::InternalServerError("Route request timed out".to_string()))?
        .map_err(|error| ApiError::InternalServerError(format!("Route task failed: {error}")))??;

    info!(
        "Comfort segments: {}, Shortest segments: {}",
        response.comfort.features.len(),
        response.shortest.features.len()
    );

    Ok(Json(response))
}
