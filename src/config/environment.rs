// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, CORS origins, and feedback rule overrides from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use anyhow::{anyhow, Result};
use formcoach_core::constants::ports::DEFAULT_HTTP_PORT;
use formcoach_intelligence::FeedbackConfig;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

/// Default bind address
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default browser origin allowed by CORS (the local frontend dev server)
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// HTTP port
    pub http_port: u16,
    /// Origins allowed to call the API from a browser (`*` allows any)
    pub cors_allowed_origins: Vec<String>,
    /// Overrides the rules file's landmark confidence floor
    pub min_confidence: Option<f64>,
    /// Optional YAML file replacing the built-in rule tables
    pub rules_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            http_port: DEFAULT_HTTP_PORT,
            cors_allowed_origins: vec![DEFAULT_CORS_ORIGIN.to_owned()],
            min_confidence: None,
            rules_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or the
    /// resulting configuration fails validation.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or("HOST", &DEFAULT_HOST.to_string())
                .parse()
                .map_err(|e| anyhow!("Invalid HOST: {e}"))?,
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
                .parse()
                .map_err(|e| anyhow!("Invalid HTTP_PORT: {e}"))?,
            cors_allowed_origins: parse_origins(&env_var_or(
                "CORS_ALLOWED_ORIGINS",
                DEFAULT_CORS_ORIGIN,
            )),
            min_confidence: env::var("FEEDBACK_MIN_CONFIDENCE")
                .ok()
                .map(|value| value.trim().parse::<f64>())
                .transpose()
                .map_err(|e| anyhow!("Invalid FEEDBACK_MIN_CONFIDENCE: {e}"))?,
            rules_path: env::var("FEEDBACK_RULES_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero port, an empty origin list, or a
    /// confidence floor outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow!("HTTP_PORT must be non-zero"));
        }
        if self.cors_allowed_origins.is_empty() {
            return Err(anyhow!("CORS_ALLOWED_ORIGINS must name at least one origin"));
        }
        if let Some(confidence) = self.min_confidence {
            if !(0.0..=1.0).contains(&confidence) {
                return Err(anyhow!(
                    "FEEDBACK_MIN_CONFIDENCE must be between 0 and 1, got {confidence}"
                ));
            }
        }
        Ok(())
    }

    /// Socket address the server binds
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Build the engine configuration
    ///
    /// Starts from the rules file when one is configured, otherwise from the
    /// built-in tables, then applies the confidence override.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules file cannot be read or parsed, or the
    /// final configuration is invalid.
    pub fn feedback_config(&self) -> Result<FeedbackConfig> {
        let mut feedback = match &self.rules_path {
            Some(path) => {
                info!(path = %path.display(), "Loading feedback rules");
                FeedbackConfig::from_yaml_file(path)
                    .map_err(|e| anyhow!("Failed to load rules from {}: {e}", path.display()))?
            }
            None => FeedbackConfig::default(),
        };
        if let Some(confidence) = self.min_confidence {
            feedback.min_confidence = confidence;
        }
        feedback
            .validate()
            .map_err(|e| anyhow!("Invalid feedback configuration: {e}"))?;
        Ok(feedback)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Formcoach Server Configuration:\n\
             - Bind Address: {}\n\
             - CORS Origins: {}\n\
             - Rules: {}\n\
             - Min Confidence: {}",
            self.bind_addr(),
            self.cors_allowed_origins.join(", "),
            self.rules_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string()),
            self.min_confidence
                .map_or_else(|| "from rules".to_owned(), |value| value.to_string()),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
