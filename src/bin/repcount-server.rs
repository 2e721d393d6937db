// ABOUTME: Server binary for the repcount motion-repetition engine
// ABOUTME: Loads configuration, initializes logging, and serves HTTP and WebSocket endpoints

//! # Repcount Server Binary
//!
//! Starts one engine with the configured default workout and serves the
//! administrative, frame, and streaming endpoints until Ctrl-C.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use repcount_server::{
    config::ServerConfig, logging, resources::ServerResources, server::RepcountServer,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "repcount-server")]
#[command(about = "Repcount - real-time exercise repetition counting over pose keypoints")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Fall back to environment configuration when arguments cannot be parsed
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using configuration from the environment");
            Args { http_port: None }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Repcount server");
    info!("{}", config.summary());

    let host = config.http_host.clone();
    let resources = Arc::new(ServerResources::new(config));
    let server = RepcountServer::new(resources);
    let listener = server.bind().await?;
    let port = listener.local_addr()?.port();

    display_available_endpoints(&host, port);

    if let Err(e) = server.run(listener).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available endpoints
fn display_available_endpoints(host: &str, port: u16) {
    info!("=== Available API Endpoints ===");
    display_health_endpoints(host, port);
    display_workout_endpoints(host, port);
    display_frame_endpoints(host, port);
    info!("=== End of Endpoint List ===");
}

#[allow(clippy::cognitive_complexity)]
fn display_health_endpoints(host: &str, port: u16) {
    info!("Service:");
    info!("   Banner:            GET  http://{host}:{port}/");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
}

#[allow(clippy::cognitive_complexity)]
fn display_workout_endpoints(host: &str, port: u16) {
    info!("Workout:");
    info!("   Set Schedule:      POST http://{host}:{port}/set_schedule");
    info!("   Current Schedule:  GET  http://{host}:{port}/current_schedule");
    info!("   Counters:          GET  http://{host}:{port}/counters");
    info!("   Reset Counters:    POST http://{host}:{port}/reset_counters");
    info!("   Exercises:         GET  http://{host}:{port}/available_exercises");
}

#[allow(clippy::cognitive_complexity)]
fn display_frame_endpoints(host: &str, port: u16) {
    info!("Frames:");
    info!("   Submit Frame:      POST http://{host}:{port}/frames");
    info!("   Frame Stream:      ws://{host}:{port}/ws");
}
