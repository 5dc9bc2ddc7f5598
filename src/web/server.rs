use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use log::info;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_address: IpAddr,
    pub enable_cors: bool,
    /// Largest accepted request body; a full request with 65535 edges is 393216 bytes
    pub max_request_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            enable_cors: true,
            max_request_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Build the application router for `config`
pub fn build_app(config: &ServerConfig) -> Router {
    let mut app = create_router()
        .layer(DefaultBodyLimit::max(config.max_request_bytes))
        .with_state(AppState::new());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    app
}

/// Start the web server with the default configuration on `port`
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = config.socket_addr();
    info!("DAG SSSP server listening on http://{}", addr);
    info!("POST binary requests to http://{}/api/shortest-path", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
