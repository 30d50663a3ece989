// ABOUTME: Formcoach CLI - offline access to the pose feedback rules engine
// ABOUTME: Analyzes keypoint files from disk or stdin and prints the active threshold tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Analyze one frame (a bare keypoint array) for a squat
//! formcoach-cli analyze --exercise squat --input frame.json
//!
//! # Analyze a full request body read from stdin
//! cat request.json | formcoach-cli analyze
//!
//! # Print every threshold table as YAML
//! formcoach-cli rules
//!
//! # Print the plank table using a custom rules file
//! formcoach-cli --rules rules.yaml rules --exercise plank
//! ```

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use formcoach_core::models::{ExerciseType, Keypoint};
use formcoach_intelligence::{FeedbackConfig, FeedbackRouter};
use formcoach_server::routes::{AnalyzeRequest, FeedbackResponse};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "formcoach-cli",
    about = "Formcoach rules engine CLI",
    long_about = "Run the form rules engine on recorded keypoints and inspect its threshold tables."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// YAML rules file replacing the built-in tables
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate one frame of keypoints and print the feedback as JSON
    Analyze {
        /// Exercise tag (squat, lunge, armRaise, plank); overrides the request body
        #[arg(long)]
        exercise: Option<String>,

        /// JSON file holding a keypoint array or a request body (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Print the active threshold tables as YAML
    Rules {
        /// Limit output to one exercise
        #[arg(long)]
        exercise: Option<ExerciseType>,
    },
}

/// Accepted shapes for `analyze` input
#[derive(Deserialize)]
#[serde(untagged)]
enum AnalyzeInput {
    Frame(Vec<Keypoint>),
    Request(AnalyzeRequest),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    let config = load_config(cli.rules.as_deref())?;

    match cli.command {
        Command::Analyze { exercise, input } => analyze(config, exercise, input.as_deref()),
        Command::Rules { exercise } => print_rules(&config, exercise),
    }
}

fn load_config(path: Option<&Path>) -> Result<FeedbackConfig> {
    path.map_or_else(
        || Ok(FeedbackConfig::default()),
        |path| {
            debug!(path = %path.display(), "Loading rules file");
            FeedbackConfig::from_yaml_file(path)
                .map_err(|e| anyhow!("Failed to load rules from {}: {e}", path.display()))
        },
    )
}

fn analyze(config: FeedbackConfig, exercise: Option<String>, input: Option<&Path>) -> Result<()> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read {}: {e}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| anyhow!("Failed to read stdin: {e}"))?;
            buffer
        }
    };

    let parsed: AnalyzeInput =
        serde_json::from_str(&raw).map_err(|e| anyhow!("Invalid keypoint input: {e}"))?;
    let (keypoints, body_exercise) = match parsed {
        AnalyzeInput::Frame(keypoints) => (keypoints, None),
        AnalyzeInput::Request(request) => (
            request.keypoints.unwrap_or_default(),
            Some(request.exercise_type),
        ),
    };
    let exercise = exercise
        .or(body_exercise)
        .ok_or_else(|| anyhow!("--exercise is required when the input is a bare keypoint array"))?;

    let router = FeedbackRouter::new(config)?;
    let response = FeedbackResponse {
        feedback: router.evaluate(&keypoints, &exercise),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn print_rules(config: &FeedbackConfig, exercise: Option<ExerciseType>) -> Result<()> {
    let yaml = match exercise {
        Some(exercise) => serde_yaml::to_string(config.rules(exercise))?,
        None => config.to_yaml_string()?,
    };
    print!("{yaml}");
    Ok(())
}
