// ABOUTME: HTTP server lifecycle for the repcount engine
// ABOUTME: Binds the listener, serves the router with peer addresses, and shuts down on Ctrl-C

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::resources::ServerResources;
use crate::routes;

/// Serves the HTTP and WebSocket surface for one engine
pub struct RepcountServer {
    resources: Arc<ServerResources>,
}

impl RepcountServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// The assembled application router
    pub fn router(&self) -> Router {
        routes::router(Arc::clone(&self.resources))
    }

    /// Bind the configured host and port
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound
    pub async fn bind(&self) -> Result<TcpListener> {
        let address = format!(
            "{}:{}",
            self.resources.config.http_host, self.resources.config.http_port
        );
        TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))
    }

    /// Serve until Ctrl-C is received
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails while serving
    pub async fn run(self, listener: TcpListener) -> Result<()> {
        let local_addr = listener.local_addr()?;
        info!(address = %local_addr, "Repcount server listening");

        axum::serve(
            listener,
            self.router()
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

        info!("Repcount server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
