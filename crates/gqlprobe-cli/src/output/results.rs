// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use console::style;
use gqlprobe_core::{BatchSummary, JsonStyle, Outcome, QueryResult, ResultSink, render_json};
use indicatif::ProgressBar;
use tracing::warn;

use crate::cli::{OutputContext, OutputFormat};

/// Prints each call result to stdout as soon as it arrives.
///
/// When a progress bar is attached, printing happens with the bar suspended
/// and the bar advances once per result.
pub struct RenderSink {
    format: OutputFormat,
    progress: Option<ProgressBar>,
}

impl RenderSink {
    pub fn new(ctx: &OutputContext, progress: Option<ProgressBar>) -> Self {
        Self {
            format: ctx.format,
            progress,
        }
    }

    fn write(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{text}").and_then(|()| stdout.flush()) {
            warn!(error = %e, "Failed to write result");
        }
    }
}

/// Renders one result in the requested format (no trailing newline).
pub fn format_result(result: &QueryResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_json(result, JsonStyle::Pretty),
        OutputFormat::Json => render_json(result, JsonStyle::Compact),
        OutputFormat::Yaml => match serde_saphyr::to_string(&result.to_display_value()) {
            Ok(yaml) => format!("---\n{}", yaml.trim_end()),
            Err(e) => {
                warn!(error = %e, "YAML rendering failed, falling back to JSON");
                render_json(result, JsonStyle::Pretty)
            }
        },
    }
}

impl ResultSink for RenderSink {
    fn display(&self, result: QueryResult) {
        let text = format_result(&result, self.format);
        match &self.progress {
            Some(pb) => {
                pb.suspend(|| self.write(&text));
                pb.inc(1);
            }
            None => self.write(&text),
        }
    }
}

/// Prints the batch tally to stderr, keeping stdout to results only.
pub fn render_batch_summary(summary: &BatchSummary, ctx: &OutputContext) {
    if ctx.quiet {
        return;
    }
    let total = summary.succeeded + summary.failed;
    if summary.all_succeeded() {
        eprintln!(
            "{} {total} request(s) completed",
            style("✓").green().bold()
        );
    } else {
        eprintln!(
            "{} {} of {total} request(s) failed to reach the endpoint",
            style("✗").red().bold(),
            summary.failed
        );
        if ctx.verbose {
            let mut failed: Vec<usize> = summary
                .outcomes
                .iter()
                .filter(|(_, outcome)| *outcome == Outcome::Failed)
                .map(|(idx, _)| *idx)
                .collect();
            failed.sort_unstable();
            for idx in failed {
                eprintln!("  {} request #{idx}", style("-").dim());
            }
        }
    }
}
