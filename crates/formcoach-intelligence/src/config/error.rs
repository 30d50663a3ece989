// ABOUTME: Configuration error types for feedback rule table validation
// ABOUTME: Defines error variants for invalid limits, unknown checks, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Lower limit above upper limit, or a limit outside [0, 180]
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Required text or table entry is empty
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Symmetry rule names a check that is absent or not bilateral
    #[error("Unknown check: {0}")]
    UnknownCheck(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// Failed to parse a rules document
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Failed to read a rules document
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
