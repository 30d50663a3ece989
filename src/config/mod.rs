// ABOUTME: Configuration module for the formcoach server
// ABOUTME: Environment-only settings; rule tables come from the engine crate or a YAML file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing and validation
pub mod environment;

pub use environment::ServerConfig;
