// ABOUTME: Shared server resources injected into every request handler
// ABOUTME: Owns the feedback router and configuration built once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use formcoach_intelligence::FeedbackRouter;
use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;

/// Dependencies shared by all handlers through axum state
///
/// Everything here is immutable after construction; handlers only read.
#[derive(Debug)]
pub struct ServerResources {
    /// Rules engine
    pub router: FeedbackRouter,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle an already built engine with its configuration
    #[must_use]
    pub fn new(router: FeedbackRouter, config: Arc<ServerConfig>) -> Self {
        Self { router, config }
    }

    /// Build the engine described by the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the rules file cannot be loaded or is invalid
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let feedback = config.feedback_config()?;
        info!(
            min_confidence = feedback.min_confidence,
            "Feedback rules ready"
        );
        let router = FeedbackRouter::new(feedback)?;
        Ok(Self::new(router, Arc::new(config)))
    }
}
