// ABOUTME: Main library entry point for the formcoach feedback server
// ABOUTME: Wires configuration, logging, shared resources, and HTTP routes around the rules engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Formcoach Server
//!
//! HTTP service that turns 17-point pose keypoints into short coaching
//! messages for squats, lunges, arm raises and planks.
//!
//! The rules engine lives in `formcoach-intelligence`; this crate adds the
//! ambient pieces around it:
//!
//! - **Configuration**: environment variables plus an optional YAML rules file
//! - **Logging**: structured `tracing` output in pretty, compact or JSON form
//! - **HTTP**: axum routes for single-frame and batch analysis
//!
//! ## Quick Start
//!
//! 1. Optionally set `HTTP_PORT`, `CORS_ALLOWED_ORIGINS` and `FEEDBACK_RULES_PATH`
//! 2. Run `formcoach-server`
//! 3. `POST /feedback/analyze` with `{"keypoints": [...], "exerciseType": "squat"}`

/// Environment-based server configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Shared state injected into request handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and the serve loop
pub mod server;
