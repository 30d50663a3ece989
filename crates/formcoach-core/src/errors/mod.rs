// ABOUTME: Unified error types shared by the formcoach server and engine crates
// ABOUTME: Maps error codes to HTTP status codes and a stable JSON error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Defines the standard error codes and the `AppError` type used at the
//! service boundary. The rules engine itself never fails on plausible input;
//! these errors cover malformed request bodies and failed background tasks.

#[cfg(feature = "http-response")]
use axum::{
    response::{IntoResponse, Response},
    Json,
};
#[cfg(feature = "http-response")]
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
#[cfg(feature = "http-response")]
use tracing::{debug, error};

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// The request payload could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Internal Errors (9000-9999)
    /// Unexpected server-side failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidFormat => 400,
            Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidFormat => "The data format is invalid",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Malformed payload
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

#[cfg(feature = "http-response")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(code = ?self.code, "{}", self.message);
        } else {
            debug!(code = ?self.code, "{}", self.message);
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
