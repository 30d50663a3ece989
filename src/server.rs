// ABOUTME: HTTP server assembly for the formcoach feedback service
// ABOUTME: Merges routes, applies tracing and CORS layers, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feedback server
//!
//! [`FeedbackServer::router`] builds the complete axum application so tests
//! can drive it without binding a socket; [`FeedbackServer::run`] serves it.

use anyhow::{anyhow, Result};
use axum::Router;
use http::{HeaderValue, Method};
use std::future::pending;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::resources::ServerResources;
use crate::routes::{FeedbackRoutes, HealthRoutes};

/// HTTP front end over the shared resources
pub struct FeedbackServer {
    resources: Arc<ServerResources>,
}

impl FeedbackServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Complete application router with middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(FeedbackRoutes::routes(Arc::clone(&self.resources)))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&self.resources.config.cors_allowed_origins))
    }

    /// Bind and serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let addr = self.resources.config.bind_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| anyhow!("Failed to bind {addr}: {e}"))?;
        info!("HTTP server listening on http://{addr}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow!("HTTP server error: {e}"))?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// CORS policy for the configured browser origins
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(allowed))
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal, serving until killed: {e}");
        pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
