// SPDX-License-Identifier: Apache-2.0

//! Ad-hoc documents: `gqlprobe query`.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use gqlprobe_core::{GraphQLRequest, Operation, Variables, parse_assignment, parse_variables};

/// Reads the document argument: inline text, `@FILE`, or `-` for stdin.
fn read_document(document: &str) -> Result<String> {
    if document == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read document from stdin")?;
        return Ok(text);
    }
    if let Some(path) = document.strip_prefix('@') {
        let path = Path::new(path);
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document from {}", path.display()));
    }
    Ok(document.to_string())
}

/// Merges `--variables` with `--var` assignments; assignments win.
fn collect_variables(json: Option<&str>, assignments: &[String]) -> Result<Variables> {
    let mut variables = match json {
        Some(text) => parse_variables(text)?,
        None => Variables::new(),
    };
    for assignment in assignments {
        let (name, value) = parse_assignment(assignment)?;
        variables.insert(name, value);
    }
    Ok(variables)
}

/// Builds the request for `gqlprobe query`.
pub fn prepare(
    document: &str,
    json: Option<&str>,
    assignments: &[String],
) -> Result<GraphQLRequest> {
    let text = read_document(document)?;
    let operation = Operation::new(text)?;
    let variables = collect_variables(json, assignments)?;
    Ok(GraphQLRequest::new(operation).with_variables(variables))
}
