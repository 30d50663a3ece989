// ABOUTME: Core types and constants for the formcoach exercise feedback platform
// ABOUTME: Foundation crate with error handling, keypoint models, and message constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Formcoach Core
//!
//! Foundation crate providing shared types and constants for the formcoach
//! exercise feedback platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Feedback fallback messages and keypoint layout constants
//! - **models**: Keypoints, the 17-point landmark schema, and exercise tags

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Keypoint, KeypointIndex, ExerciseType)
pub mod models;
