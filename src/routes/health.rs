// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides the welcome message plus health and readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use axum::{routing::get, Json, Router};
use chrono::Utc;
use formcoach_core::constants::endpoints;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        Router::new()
            .route("/", get(Self::root_handler))
            .route(endpoints::HEALTH_CHECK, get(Self::health_handler))
            .route(endpoints::READY_CHECK, get(Self::ready_handler))
    }

    async fn root_handler() -> Json<Value> {
        Json(json!({ "message": "Welcome to the Physiotherapy API" }))
    }

    async fn health_handler() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler() -> Json<Value> {
        Json(json!({
            "status": "ready",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
