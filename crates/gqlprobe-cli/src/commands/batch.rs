// SPDX-License-Identifier: Apache-2.0

//! Concurrent requests from a file: `gqlprobe batch`.

use std::path::Path;

use anyhow::{Context, Result};
use gqlprobe_core::{BatchSummary, GraphQLRequest, QueryExecutor, execute_all, parse_batch};
use tracing::info;

/// Reads and parses a batch file.
pub fn load(path: &Path) -> Result<Vec<GraphQLRequest>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;
    let requests = parse_batch(&text)
        .with_context(|| format!("Failed to parse batch file {}", path.display()))?;
    Ok(requests)
}

/// Sends every request; results print as they complete.
pub async fn run(
    executor: &QueryExecutor,
    requests: Vec<GraphQLRequest>,
    concurrency: usize,
) -> BatchSummary {
    info!(requests = requests.len(), concurrency, "Starting batch");
    execute_all(executor, requests, concurrency).await
}
