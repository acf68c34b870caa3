// SPDX-License-Identifier: Apache-2.0

//! GraphQL query executor.
//!
//! Posts an operation and its variables to a single endpoint and hands the
//! parsed response, or the reason there is none, to a [`ResultSink`].
//!
//! Every call is independent: no retry, no caching, no deduplication of
//! identical in-flight calls. The executor is cheap to clone and can be
//! shared across tasks.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bon::bon;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::GqlProbeError;
use crate::graphql::{GraphQLRequest, Operation, Outcome, QueryResult, Variables};
use crate::sink::ResultSink;

/// Why a call did not produce a JSON body.
#[derive(Error, Debug)]
enum TransportError {
    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),

    #[error("request failed")]
    Request(#[from] reqwest::Error),

    #[error("response body is not valid JSON (HTTP {status})")]
    InvalidBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Formats an error with its whole `source()` chain, outermost first.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

struct ExecutorInner {
    http: Client,
    endpoint: Url,
    sink: Arc<dyn ResultSink>,
}

/// Sends GraphQL operations to one endpoint and reports results to a sink.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use gqlprobe_core::{Operation, QueryExecutor, Variables, WriterSink};
///
/// # async fn example() -> gqlprobe_core::Result<()> {
/// let executor = QueryExecutor::builder()
///     .endpoint("http://localhost:8000/graphql")
///     .sink(Arc::new(WriterSink::new(std::io::stdout())))
///     .build()?;
///
/// let operation = Operation::new("query { users { id username } }")?;
/// executor.execute(operation, Variables::new()).await;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct QueryExecutor {
    inner: Arc<ExecutorInner>,
}

#[bon]
impl QueryExecutor {
    /// Creates an executor for `endpoint` that reports to `sink`.
    ///
    /// Without a `timeout` the HTTP client's default applies.
    ///
    /// # Errors
    ///
    /// Returns `GqlProbeError::Config` if the endpoint is not a valid URL,
    /// or `GqlProbeError::HttpClient` if the HTTP client cannot be built.
    #[builder]
    pub fn new(
        #[builder(into)] endpoint: String,
        sink: Arc<dyn ResultSink>,
        timeout: Option<Duration>,
    ) -> Result<Self, GqlProbeError> {
        let endpoint = parse_endpoint(&endpoint)?;

        let mut http = Client::builder();
        if let Some(timeout) = timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().map_err(GqlProbeError::HttpClient)?;

        debug!(endpoint = %endpoint, ?timeout, "Created query executor");

        Ok(Self {
            inner: Arc::new(ExecutorInner {
                http,
                endpoint,
                sink,
            }),
        })
    }
}

impl QueryExecutor {
    /// Creates an executor from loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`QueryExecutor::builder`].
    pub fn from_config(
        config: &AppConfig,
        sink: Arc<dyn ResultSink>,
    ) -> Result<Self, GqlProbeError> {
        Self::builder()
            .endpoint(config.endpoint.url.clone())
            .sink(sink)
            .maybe_timeout(config.endpoint.timeout())
            .build()
    }

    /// The endpoint every call is posted to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Executes one operation and hands the result to the sink.
    ///
    /// Returns the terminal state of the call. The payload itself goes to
    /// the sink, exactly once.
    pub async fn execute(&self, operation: Operation, variables: Variables) -> Outcome {
        let request = GraphQLRequest::new(operation).with_variables(variables);
        self.dispatch(&request).await
    }

    /// Executes a prepared request and hands the result to the sink.
    pub async fn dispatch(&self, request: &GraphQLRequest) -> Outcome {
        let result = self.send(request).await;
        let outcome = result.outcome();
        self.inner.sink.display(result);
        outcome
    }

    /// Runs [`execute`](Self::execute) on the tokio runtime.
    ///
    /// The caller is not blocked; await the handle to learn the outcome.
    pub fn spawn(&self, operation: Operation, variables: Variables) -> JoinHandle<Outcome> {
        let executor = self.clone();
        tokio::spawn(async move { executor.execute(operation, variables).await })
    }

    /// Sends a request and returns its result without involving the sink.
    #[instrument(skip_all, fields(call_id = %Uuid::new_v4(), endpoint = %self.inner.endpoint))]
    pub async fn send(&self, request: &GraphQLRequest) -> QueryResult {
        let start = Instant::now();

        let result = match self.post(request).await {
            Ok(body) => QueryResult::Success(body),
            Err(e) => {
                let message = error_chain(&e);
                warn!(error = %message, "GraphQL call failed");
                QueryResult::TransportFailure(message)
            }
        };

        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            duration_ms,
            outcome = ?result.outcome(),
            graphql_errors = result.graphql_errors().map_or(0, Vec::len),
            "GraphQL call finished"
        );

        result
    }

    async fn post(&self, request: &GraphQLRequest) -> Result<Value, TransportError> {
        let body = request.to_body().map_err(TransportError::Encode)?;
        debug!(
            body_bytes = body.len(),
            variable_count = request.variables.len(),
            "Sending GraphQL request"
        );

        let response = self
            .inner
            .http
            .post(self.inner.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        // Status is informational only: any JSON body is a result.
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        debug!(status, body_bytes = bytes.len(), "Received GraphQL response");

        serde_json::from_slice(&bytes)
            .map_err(|source| TransportError::InvalidBody { status, source })
    }
}

impl fmt::Debug for QueryExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryExecutor")
            .field("endpoint", &self.inner.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, GqlProbeError> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        return Err(GqlProbeError::Config {
            message: "endpoint URL must not be empty".to_string(),
        });
    }
    Url::parse(trimmed).map_err(|e| GqlProbeError::Config {
        message: format!("invalid endpoint URL '{trimmed}': {e}"),
    })
}
