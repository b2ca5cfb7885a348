use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::{
    network::TransportNetwork,
    routing::{self, RouteError, RouteReport},
};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Deserialize)]
pub struct RouteParams {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct StationsParams {
    pub line: Option<String>,
}

/// The network is built once and shared read-only between requests; every
/// request runs its own search.
pub fn app(network: Arc<TransportNetwork>) -> Router {
    Router::new()
        .route("/route", get(route_handler))
        .route("/stations", get(stations_handler))
        .layer(CorsLayer::permissive())
        .with_state(network)
}

pub async fn serve(network: Arc<TransportNetwork>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "Listening");
    axum::serve(listener, app(network)).await?;
    Ok(())
}

async fn route_handler(
    State(network): State<Arc<TransportNetwork>>,
    Query(params): Query<RouteParams>,
) -> Response {
    match routing::route(&network, &params.from, &params.to) {
        Ok(route) => Json(RouteReport::from(route)).into_response(),
        Err(e) => {
            debug!(from = %params.from, to = %params.to, error = %e, "Route query failed");
            let status = match e {
                RouteError::UnknownStation(_) => StatusCode::NOT_FOUND,
                RouteError::NoPathExists { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            };
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

async fn stations_handler(
    State(network): State<Arc<TransportNetwork>>,
    Query(params): Query<StationsParams>,
) -> Response {
    let stations: Vec<_> = network
        .stations()
        .filter(|s| params.line.as_ref().is_none_or(|line| &s.line == line))
        .collect();

    Json(stations).into_response()
}
