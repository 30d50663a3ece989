// ABOUTME: Server binary for the formcoach pose feedback API
// ABOUTME: Loads configuration, initializes logging, builds the rules engine, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Formcoach Server Binary
//!
//! Starts the HTTP API that turns pose keypoints into exercise form feedback.

use anyhow::Result;
use clap::Parser;
use formcoach_core::constants::endpoints;
use formcoach_server::{
    config::ServerConfig, logging, resources::ServerResources, server::FeedbackServer,
};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "formcoach-server")]
#[command(about = "Formcoach - exercise form feedback from pose keypoints")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<IpAddr>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the YAML rules file
    #[arg(long)]
    rules: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if args.rules.is_some() {
        config.rules_path = args.rules;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting Formcoach feedback server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config)?);
    display_available_endpoints(&resources.config);

    if let Err(e) = FeedbackServer::new(resources).run().await {
        error!("Server error: {e}");
        return Err(e);
    }
    Ok(())
}

/// Log every endpoint the server exposes
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_addr());
    info!("=== Available API Endpoints ===");
    info!("  GET  {base}/");
    info!("  GET  {base}{}", endpoints::HEALTH_CHECK);
    info!("  GET  {base}{}", endpoints::READY_CHECK);
    info!("  GET  {base}{}", endpoints::FEEDBACK_EXERCISES);
    info!("  POST {base}{}", endpoints::FEEDBACK_ANALYZE);
    info!("  POST {base}{}", endpoints::FEEDBACK_ANALYZE_BATCH);
}
