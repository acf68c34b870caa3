// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `GqlProbeError` and appends a tip where one
//! helps. Failed GraphQL calls never reach this module: they are printed as
//! results.

use anyhow::Error;
use gqlprobe_core::error::GqlProbeError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error chain contains no `GqlProbeError`, returns the original
/// error message.
pub fn format_error(error: &Error) -> String {
    let Some(probe_err) = error
        .chain()
        .find_map(|e| e.downcast_ref::<GqlProbeError>())
    else {
        return error.to_string();
    };

    match probe_err {
        GqlProbeError::Config { .. } => format!(
            "{probe_err}\n\nTip: Check your config file at {}",
            gqlprobe_core::config_file_path().display()
        ),
        GqlProbeError::UnknownOperation { .. } => {
            format!("{probe_err}\n\nTip: Run `gqlprobe ops list` to see available operations.")
        }
        GqlProbeError::MissingArgument { name } | GqlProbeError::InvalidArgument { name, .. } => {
            format!("{probe_err}\n\nTip: Pass it as `-a {name}=VALUE`.")
        }
        GqlProbeError::UnknownArgument { operation, .. } => format!(
            "{probe_err}\n\nTip: Run `gqlprobe ops show {operation}` to see its arguments."
        ),
        GqlProbeError::InvalidVariables { .. } => format!(
            "{probe_err}\n\nTip: --variables takes a JSON object, e.g. '{{\"id\": 5}}'."
        ),
        GqlProbeError::InvalidBatch { .. } => format!(
            "{probe_err}\n\nTip: A batch file is a JSON array of {{\"query\": ..., \"variables\": {{...}}}} objects."
        ),
        GqlProbeError::EmptyOperation | GqlProbeError::HttpClient(_) => probe_err.to_string(),
    }
}
