// src/main.rs - HTTP front end for the arm kinematics engine
use clap::Parser;
use planar_arm::{config, web, Config, ThreeLinkArm};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "arm-server", about = "Serve forward and inverse kinematics over HTTP")]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting arm kinematics server");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = match args.config.as_deref() {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            config::load_config(path).map_err(|e| {
                tracing::error!("Failed to load config from '{}': {}", path, e);
                Box::new(e) as Box<dyn std::error::Error + Send + Sync + 'static>
            })?
        }
        None => Config::default(),
    };

    let arm = ThreeLinkArm::from_config(&config.arm)?;
    tracing::info!(
        "Arm: link length {} (max reach {}), extension tolerance {} deg",
        config.arm.link_length,
        3.0 * config.arm.link_length,
        config.arm.angle_tolerance
    );

    let app = web::api::create_router(Arc::new(arm));

    let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
    tracing::info!("Web API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
