// SPDX-License-Identifier: Apache-2.0

//! Concurrent execution of independent GraphQL calls.
//!
//! Each request goes through [`QueryExecutor::dispatch`] on its own, so the
//! sink sees results in completion order, not submission order. Nothing is
//! retried.

use futures::{StreamExt, stream};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::GqlProbeError;
use crate::executor::QueryExecutor;
use crate::graphql::{GraphQLRequest, Operation, Outcome, Variables};

/// Default number of requests in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Counts and per-request outcomes of a batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    /// Calls that produced a JSON body.
    pub succeeded: usize,
    /// Calls that ended in a transport failure.
    pub failed: usize,
    /// `(request index, outcome)` pairs in completion order.
    pub outcomes: Vec<(usize, Outcome)>,
}

impl BatchSummary {
    /// Returns true when every call produced a JSON body.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Executes every request, at most `concurrency` at a time.
///
/// A `concurrency` of 0 is treated as 1.
#[instrument(skip(executor, requests), fields(request_count = requests.len()))]
pub async fn execute_all(
    executor: &QueryExecutor,
    requests: Vec<GraphQLRequest>,
    concurrency: usize,
) -> BatchSummary {
    let tasks = requests.into_iter().enumerate().map(|(idx, request)| async move {
        let outcome = executor.dispatch(&request).await;
        (idx, outcome)
    });

    let outcomes: Vec<(usize, Outcome)> = stream::iter(tasks)
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let mut summary = BatchSummary::default();
    for (idx, outcome) in outcomes {
        match outcome {
            Outcome::Succeeded => summary.succeeded += 1,
            Outcome::Failed => summary.failed += 1,
        }
        summary.outcomes.push((idx, outcome));
    }

    debug!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Batch finished"
    );
    summary
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BatchEntry {
    query: String,
    #[serde(default)]
    variables: Variables,
}

/// Parses a JSON array of `{"query": ..., "variables": {...}}` objects.
///
/// # Errors
///
/// Returns `GqlProbeError::InvalidBatch` if the text is not such an array,
/// or `GqlProbeError::EmptyOperation` if any entry has an empty query.
pub fn parse_batch(text: &str) -> Result<Vec<GraphQLRequest>, GqlProbeError> {
    let entries: Vec<BatchEntry> =
        serde_json::from_str(text).map_err(|e| GqlProbeError::InvalidBatch {
            message: e.to_string(),
        })?;

    entries
        .into_iter()
        .map(|entry| {
            let operation = Operation::new(entry.query)?;
            Ok(GraphQLRequest::new(operation).with_variables(entry.variables))
        })
        .collect()
}
