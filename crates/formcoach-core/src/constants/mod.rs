// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for feedback messages, pose layout, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Fixed feedback strings returned for degraded or unsupported input
pub mod messages;

/// Pose layout and geometry constants
pub mod pose;

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// Pose analysis endpoint
    pub const FEEDBACK_ANALYZE: &str = "/feedback/analyze";
    /// Multi-frame analysis endpoint
    pub const FEEDBACK_ANALYZE_BATCH: &str = "/feedback/analyze/batch";
    /// Supported exercise listing
    pub const FEEDBACK_EXERCISES: &str = "/feedback/exercises";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
}

/// Service names used in structured logging
pub mod service_names {
    /// Name of the HTTP feedback service
    pub const FORMCOACH_SERVER: &str = "formcoach-server";
}
