// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # gqlprobe Core
//!
//! Core library for gqlprobe - send GraphQL operations to an endpoint and
//! hand back whatever comes back.
//!
//! This crate provides reusable components for:
//! - Executing queries and mutations over HTTP ([`QueryExecutor`])
//! - Delivering results to pluggable sinks ([`ResultSink`])
//! - Running independent calls concurrently ([`batch`])
//! - A catalog of named operations for the demo API ([`catalog`])
//! - Configuration management
//!
//! Responses are never deserialized into fixed types: a JSON body is passed
//! through as a [`serde_json::Value`], GraphQL `errors` and all.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gqlprobe_core::{MemorySink, Operation, QueryExecutor, Variables, load_config};
//! use serde_json::json;
//!
//! # async fn example() -> gqlprobe_core::Result<()> {
//! let config = load_config()?;
//! let sink = Arc::new(MemorySink::new());
//! let executor = QueryExecutor::from_config(&config, sink.clone())?;
//!
//! let mut variables = Variables::new();
//! variables.insert("id".to_string(), json!(5));
//!
//! let operation = Operation::new("query GetUser($id: Int!) { user(id: $id) { id } }")?;
//! executor.execute(operation, variables).await;
//!
//! for result in sink.take() {
//!     println!("{}", serde_json::to_string_pretty(&result.to_display_value()).unwrap());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`batch`] - Concurrent execution of independent calls
//! - [`catalog`] - Named operations and argument binding
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`executor`] - The query executor
//! - [`graphql`] - Request and result types
//! - [`sink`] - Result sinks

// ============================================================================
// Error Handling
// ============================================================================

pub use error::GqlProbeError;

/// Convenience Result type for gqlprobe operations.
///
/// This is equivalent to `std::result::Result<T, GqlProbeError>`.
pub type Result<T> = std::result::Result<T, GqlProbeError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, BatchConfig, DEFAULT_ENDPOINT, EndpointConfig, UiConfig, config_dir,
    config_file_path, load_config,
};

// ============================================================================
// Execution
// ============================================================================

pub use batch::{BatchSummary, execute_all, parse_batch};
pub use executor::QueryExecutor;
pub use graphql::{
    GraphQLRequest, Operation, Outcome, QueryResult, Variables, parse_assignment,
    parse_variables,
};

// ============================================================================
// Sinks
// ============================================================================

pub use sink::{ChannelSink, JsonStyle, MemorySink, ResultSink, WriterSink, render_json};

// ============================================================================
// Catalog
// ============================================================================

pub use catalog::{CatalogOperation, OperationKind, Param, ParamKind};

// ============================================================================
// Modules
// ============================================================================

pub mod batch;
pub mod catalog;
pub mod config;
pub mod error;
pub mod executor;
pub mod graphql;
pub mod sink;
