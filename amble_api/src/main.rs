mod config;
mod error;
mod route;
mod state;

use crate::config::Config;
use crate::route::home::home_handler;
use crate::route::route_handler::route_handler;
use crate::state::AppState;
use amble_graph::road_graph::RoadGraph;
use anyhow::Context;
use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home_handler))
        .route("/route", post(route_handler))
        .layer(cors_layer)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(if config.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let graph_path = config.graph_path.clone();
    let graph = tokio::task::spawn_blocking(move || RoadGraph::from_geojson_file(graph_path))
        .await?
        .with_context(|| format!("loading {}", config.graph_path.display()))?;

    let state = Arc::new(AppState {
        graph,
        request_timeout: config.request_timeout,
    });

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!("Listening on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {error}");
        std::future::pending::<()>().await;
    }
}
