// SPDX-License-Identifier: Apache-2.0

//! Outgoing GraphQL requests.
//!
//! The wire format is the conventional `{"query": ..., "variables": ...}`
//! object. Documents are carried as opaque text; nothing here parses them.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::GqlProbeError;

/// Variables for a single call, keyed by variable name.
///
/// Key order is preserved on the wire.
pub type Variables = Map<String, Value>;

/// A non-empty GraphQL query or mutation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Operation(String);

impl Operation {
    /// Wraps a document, rejecting empty or whitespace-only text.
    ///
    /// # Errors
    ///
    /// Returns `GqlProbeError::EmptyOperation` when `document` has no
    /// non-whitespace characters.
    pub fn new(document: impl Into<String>) -> Result<Self, GqlProbeError> {
        let document = document.into();
        if document.trim().is_empty() {
            return Err(GqlProbeError::EmptyOperation);
        }
        Ok(Self(document))
    }

    /// The document text, exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Operation {
    type Error = GqlProbeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Operation {
    type Error = GqlProbeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One GraphQL call: a document plus its variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQLRequest {
    /// The operation document.
    pub query: Operation,
    /// Variables for the operation. Serialized as `{}` when empty.
    pub variables: Variables,
}

impl GraphQLRequest {
    /// Creates a request with no variables.
    #[must_use]
    pub fn new(query: Operation) -> Self {
        Self {
            query,
            variables: Variables::new(),
        }
    }

    /// Replaces the variables.
    #[must_use]
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    /// Serializes the request body sent to the endpoint.
    ///
    /// # Errors
    ///
    /// Only fails if a variable value cannot be represented as JSON, which
    /// `serde_json::Value` rules out in practice.
    pub fn to_body(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// Parses a JSON object into [`Variables`].
///
/// # Errors
///
/// Returns `GqlProbeError::InvalidVariables` if the text is not JSON or is
/// JSON but not an object.
pub fn parse_variables(text: &str) -> Result<Variables, GqlProbeError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(GqlProbeError::InvalidVariables {
            message: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
        Err(e) => Err(GqlProbeError::InvalidVariables {
            message: e.to_string(),
        }),
    }
}

/// Parses a single `name=value` assignment.
///
/// The value is read as JSON when it parses (`5`, `true`, `null`, `[1,2]`),
/// otherwise it is taken as a plain string.
///
/// # Errors
///
/// Returns `GqlProbeError::InvalidVariables` if there is no `=` or the name
/// is empty.
pub fn parse_assignment(assignment: &str) -> Result<(String, Value), GqlProbeError> {
    let (name, raw) = assignment
        .split_once('=')
        .ok_or_else(|| GqlProbeError::InvalidVariables {
            message: format!("expected name=value, got '{assignment}'"),
        })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(GqlProbeError::InvalidVariables {
            message: format!("missing variable name in '{assignment}'"),
        });
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((name.to_string(), value))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
