use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use dag_sssp::web::models::{ErrorResponse, HealthResponse, ShortestPathResponse, WebPath};
use dag_sssp::web::server::{build_app, ServerConfig};
use dag_sssp::wire::{ShortestPathRequest, WireEdge};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

async fn post_request(app: axum::Router, body: Vec<u8>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/shortest-path")
        .header("content-type", "application/octet-stream")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_shortest_path_endpoint() {
    let app = build_app(&ServerConfig::default());
    let body = ShortestPathRequest::new(
        1,
        3,
        vec![
            WireEdge::new(1, 2, 1),
            WireEdge::new(2, 3, 2),
            WireEdge::new(1, 3, 9),
        ],
    )
    .to_bytes()
    .unwrap();

    let (status, bytes) = post_request(app, body).await;
    assert_eq!(status, StatusCode::OK);

    let response: ShortestPathResponse = parse(&bytes);
    assert_eq!(response.source, 1);
    assert_eq!(response.destination, 3);
    assert_eq!(response.node_count, 4);
    assert_eq!(response.edge_count, 3);
    assert_eq!(
        response.path,
        Some(WebPath {
            nodes: vec![1, 2, 3],
            cost: 3
        })
    );
}

#[tokio::test]
async fn test_unreachable_is_null_path() {
    let app = build_app(&ServerConfig::default());
    let body = ShortestPathRequest::new(0, 2, vec![WireEdge::new(1, 2, 1)]).to_bytes().unwrap();

    let (status, bytes) = post_request(app, body).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = parse(&bytes);
    assert!(json["path"].is_null());
}

#[tokio::test]
async fn test_truncated_body_is_bad_request() {
    let app = build_app(&ServerConfig::default());
    let (status, bytes) = post_request(app, vec![1, 0, 5, 0, 1]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(&bytes);
    assert_eq!(error.error, "malformed_input");
}

#[tokio::test]
async fn test_cycle_is_unprocessable() {
    let app = build_app(&ServerConfig::default());
    let body = ShortestPathRequest::new(0, 1, vec![WireEdge::new(0, 1, 1), WireEdge::new(1, 0, 1)])
        .to_bytes()
        .unwrap();

    let (status, bytes) = post_request(app, body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorResponse = parse(&bytes);
    assert_eq!(error.error, "cycle_detected");
}

#[tokio::test]
async fn test_health_counts_queries() {
    let app = build_app(&ServerConfig::default());
    let body = ShortestPathRequest::new(0, 0, vec![]).to_bytes().unwrap();

    let (status, _) = post_request(app.clone(), body).await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let health: HealthResponse = parse(&bytes);
    assert_eq!(health.status, "healthy");
    assert_eq!(health.queries_served, 1);
}
