// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use connective::config::{load_and_validate_config, CheckRunner};
use std::env;
use tracing_subscriber::EnvFilter;

/// Run every check in a YAML or TOML configuration and print the reports
/// Usage: cargo run --example yaml_connective_demo [config_file]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config_file = env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/configs/checks.yaml".to_string());

    println!("=== Connective Checks Demo ===\n");
    println!("Loading configuration from {}...", config_file);
    let config = load_and_validate_config(&config_file)
        .with_context(|| format!("Failed to load configuration from {}", config_file))?;

    println!("- Max depth: {}", config.evaluator.effective_max_depth());
    println!("- Checks: {}", config.checks.len());

    let runner = CheckRunner::from_config(&config);

    println!("\n=== Running Checks ===");
    let reports = runner.run().await;

    for report in &reports {
        let outcome = match &report.outcome {
            Ok(true) => "true".to_string(),
            Ok(false) => "false".to_string(),
            Err(message) => format!("failed: {}", message),
        };
        println!(
            "- {:<24} {:<6} {:<32} invoked={} ({:?})",
            report.id, report.operator, outcome, report.invoked, report.duration
        );
    }

    println!("\n=== JSON Report ===");
    println!("{}", serde_json::to_string_pretty(&reports)?);

    Ok(())
}
