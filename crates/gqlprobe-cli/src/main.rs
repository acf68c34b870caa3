// SPDX-License-Identifier: Apache-2.0

//! gqlprobe - send GraphQL queries and mutations, print what comes back.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gqlprobe_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    let mut config = match config::load_config().context("Failed to load configuration") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", errors::format_error(&e));
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!("Configuration loaded successfully");

    // Apply CLI overrides to config
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.url.clone_from(endpoint);
        debug!("Overriding endpoint to: {endpoint}");
    }
    if let Some(timeout) = cli.timeout {
        config.endpoint.timeout_seconds = timeout;
        debug!("Overriding timeout to: {timeout}s");
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", errors::format_error(&anyhow::Error::new(e)));
        return Ok(ExitCode::FAILURE);
    }
    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match commands::run(cli.command, &output_ctx, &config).await {
        Ok(code) => Ok(code),
        Err(e) => {
            eprintln!("Error: {}", errors::format_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
