use dag_sssp::web::server::{start_server_with_config, ServerConfig};
use log::info;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut config = ServerConfig::default();
    if let Some(port) = args.get(1) {
        config.port = port.parse()?;
    }

    info!("Configuration:");
    info!("  port: {}", config.port);
    info!("  bind address: {}", config.bind_address);
    info!("  CORS enabled: {}", config.enable_cors);
    info!("  max request bytes: {}", config.max_request_bytes);

    start_server_with_config(config).await?;

    Ok(())
}
