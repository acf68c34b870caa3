// SPDX-License-Identifier: Apache-2.0

//! Error types for gqlprobe.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! These cover everything that can go wrong *before* a request is sent.
//! Failures of the request itself never surface here: they are delivered
//! to the result sink as [`QueryResult::TransportFailure`](crate::QueryResult).
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while preparing a GraphQL call.
#[derive(Error, Debug)]
pub enum GqlProbeError {
    /// The operation document was empty or whitespace only.
    #[error("GraphQL operation must not be empty")]
    EmptyOperation,

    /// Configuration file or environment error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Variables could not be built from the supplied input.
    #[error("Invalid variables: {message}")]
    InvalidVariables {
        /// Error message.
        message: String,
    },

    /// A batch file could not be read as a list of requests.
    #[error("Invalid batch: {message}")]
    InvalidBatch {
        /// Error message.
        message: String,
    },

    /// No catalog operation has the requested name.
    #[error("Unknown operation: {name}")]
    UnknownOperation {
        /// Requested operation name.
        name: String,
    },

    /// A required catalog argument was missing or empty.
    #[error("Missing required argument: {name}")]
    MissingArgument {
        /// Parameter name.
        name: String,
    },

    /// An argument was supplied that the operation does not declare.
    #[error("Operation '{operation}' has no argument named '{name}'")]
    UnknownArgument {
        /// Catalog operation name.
        operation: String,
        /// Supplied argument name.
        name: String,
    },

    /// An argument value could not be coerced to the parameter kind.
    #[error("Invalid value for argument '{name}': {message}")]
    InvalidArgument {
        /// Parameter name.
        name: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl From<config::ConfigError> for GqlProbeError {
    fn from(err: config::ConfigError) -> Self {
        GqlProbeError::Config {
            message: err.to_string(),
        }
    }
}
