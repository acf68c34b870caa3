// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the gqlprobe CLI.

pub mod batch;
pub mod completion;
pub mod ops;
pub mod query;
pub mod run;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use gqlprobe_core::{AppConfig, Outcome, QueryExecutor};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::{Commands, OpsCommand, OutputContext};
use crate::output::{self, RenderSink};

/// Creates a styled spinner (only if interactive and enabled).
fn maybe_spinner(ctx: &OutputContext, config: &AppConfig, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() && config.ui.progress {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Creates a progress bar over `len` calls (only if interactive and enabled).
fn maybe_progress_bar(ctx: &OutputContext, config: &AppConfig, len: usize) -> Option<ProgressBar> {
    if ctx.is_interactive() && config.ui.progress && len > 1 {
        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress template")
                .progress_chars("=> "),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    }
}

/// Builds an executor whose results print through [`RenderSink`].
fn build_executor(
    ctx: &OutputContext,
    config: &AppConfig,
    progress: Option<ProgressBar>,
) -> Result<QueryExecutor> {
    let sink = Arc::new(RenderSink::new(ctx, progress));
    let executor = QueryExecutor::from_config(config, sink).context("Failed to create executor")?;
    debug!(endpoint = %executor.endpoint(), "Executor ready");
    Ok(executor)
}

fn exit_code(outcome: Outcome) -> ExitCode {
    match outcome {
        Outcome::Succeeded => ExitCode::SUCCESS,
        Outcome::Failed => ExitCode::FAILURE,
    }
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: &OutputContext, config: &AppConfig) -> Result<ExitCode> {
    match command {
        Commands::Query {
            document,
            vars,
            variables,
        } => {
            let request = query::prepare(&document, variables.as_deref(), &vars)?;
            let spinner = maybe_spinner(ctx, config, "Sending query...");
            let executor = build_executor(ctx, config, spinner.clone())?;
            let outcome = executor.dispatch(&request).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            Ok(exit_code(outcome))
        }

        Commands::Run {
            operation,
            args,
            yes,
        } => {
            let Some(request) = run::prepare(&operation, &args, yes, config)? else {
                return Ok(ExitCode::SUCCESS);
            };
            let spinner = maybe_spinner(ctx, config, &format!("Running {operation}..."));
            let executor = build_executor(ctx, config, spinner.clone())?;
            let outcome = executor.dispatch(&request).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            Ok(exit_code(outcome))
        }

        Commands::Ops(ops_cmd) => {
            match ops_cmd {
                OpsCommand::List => output::render(&ops::list(), ctx)?,
                OpsCommand::Show { operation } => output::render(&ops::show(&operation)?, ctx)?,
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Batch { file, concurrency } => {
            let requests = batch::load(&file)?;
            let concurrency = concurrency.unwrap_or(config.batch.concurrency);
            let progress = maybe_progress_bar(ctx, config, requests.len());
            let executor = build_executor(ctx, config, progress.clone())?;
            let summary = batch::run(&executor, requests, concurrency).await;
            if let Some(pb) = progress {
                pb.finish_and_clear();
            }
            output::render_batch_summary(&summary, ctx);
            Ok(if summary.all_succeeded() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Commands::Completion { shell } => {
            completion::run(shell);
            Ok(ExitCode::SUCCESS)
        }
    }
}
