use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{debug, error, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::algorithm::dag_shortest_path::DagShortestPath;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::Graph;
use crate::web::models::*;
use crate::wire::ShortestPathRequest;
use crate::Error;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub queries_served: Arc<AtomicU64>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/shortest-path", post(shortest_path))
        .route("/api/health", get(health_check))
}

/// Decode a binary request, build its graph and answer the query
pub async fn shortest_path(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    let request = ShortestPathRequest::from_bytes(&body).map_err(error_response)?;

    let start_time = Instant::now();
    let graph = request.build_graph();
    let result = DagShortestPath::new()
        .shortest_path(&graph, request.source as usize, request.destination as usize)
        .map_err(error_response)?;
    let execution_time = start_time.elapsed();

    state.queries_served.fetch_add(1, Ordering::Relaxed);
    debug!(
        "answered {}->{} over {} nodes in {:?}",
        request.source,
        request.destination,
        graph.node_count(),
        execution_time
    );

    Ok(Json(ShortestPathResponse::from_result(
        result,
        graph.node_count(),
        graph.edge_count(),
        execution_time.as_secs_f64() * 1000.0,
    )))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        queries_served: state.queries_served.load(Ordering::Relaxed),
    })
}

fn error_response(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::MalformedInput(_) => (StatusCode::BAD_REQUEST, "malformed_input"),
        Error::InvalidVertex(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::CycleDetected => (StatusCode::UNPROCESSABLE_ENTITY, "cycle_detected"),
        Error::CostOverflow { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "cost_overflow"),
        Error::MissingEdgeWeight { .. } | Error::BrokenPredecessorChain { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
        }
    };

    if err.is_internal() {
        error!("shortest path request failed: {}", err);
    } else {
        warn!("rejected shortest path request: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
        }),
    )
}
