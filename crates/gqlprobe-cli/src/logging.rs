// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the gqlprobe CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//! Logs go to stderr; stdout carries only results.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! gqlprobe run users
//!
//! # Per-call timing and outcome
//! gqlprobe -v run users
//!
//! # Request/response sizes and status codes
//! RUST_LOG=gqlprobe=debug gqlprobe run users
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Returns the filter used when `RUST_LOG` is not set.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "gqlprobe=info,reqwest=warn"
    } else {
        "gqlprobe=warn,reqwest=error"
    }
}

/// Initialize the logging subsystem.
///
/// Each finished call logs `duration_ms`, `outcome` and the number of
/// GraphQL errors at info level, inside a span carrying a per-call
/// `call_id`.
///
/// # Arguments
///
/// * `verbose` - Raise gqlprobe's default level from warn to info (-v flag)
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
