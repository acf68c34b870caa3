// SPDX-License-Identifier: Apache-2.0

//! Named operations for the demo GraphQL API.
//!
//! Each entry pairs a document with typed parameters. [`CatalogOperation::bind`]
//! turns loosely typed `name=value` input into [`Variables`] using the same
//! rules a form would: empty optional text becomes `null`, unchecked flags are
//! `false`, and a zero or missing required number counts as not filled in.

mod operations;

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::GqlProbeError;
use crate::graphql::{GraphQLRequest, Operation, Variables};

pub use operations::OPERATIONS;

/// Whether an operation reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Read-only query.
    Query,
    /// State-changing mutation.
    Mutation,
}

/// Value type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Integer (`Int` in GraphQL).
    Int,
    /// Text.
    String,
    /// Flag, `false` when not supplied.
    Bool,
}

/// One declared parameter of a catalog operation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Param {
    /// GraphQL variable name.
    pub name: &'static str,
    /// Value type.
    pub kind: ParamKind,
    /// Whether the call is refused without it.
    pub required: bool,
    /// Value used when the argument is missing or empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl Param {
    const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
        }
    }

    const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
        }
    }

    const fn with_default(name: &'static str, kind: ParamKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: Some(default),
        }
    }

    fn bind(&self, raw: Option<&str>) -> Result<Value, GqlProbeError> {
        let raw = raw.filter(|r| !r.is_empty()).or(self.default);

        match (self.kind, raw) {
            (ParamKind::Bool, None) => Ok(Value::Bool(false)),
            (_, None) if self.required => Err(self.missing()),
            (_, None) => Ok(Value::Null),
            (ParamKind::String, Some(text)) => Ok(Value::String(text.to_string())),
            (ParamKind::Int, Some(text)) => {
                let number: i64 =
                    text.trim()
                        .parse()
                        .map_err(|_| GqlProbeError::InvalidArgument {
                            name: self.name.to_string(),
                            message: format!("expected an integer, got '{text}'"),
                        })?;
                if number == 0 && self.required {
                    return Err(self.missing());
                }
                Ok(json!(number))
            }
            (ParamKind::Bool, Some(text)) => parse_flag(text)
                .map(Value::Bool)
                .ok_or_else(|| GqlProbeError::InvalidArgument {
                    name: self.name.to_string(),
                    message: format!("expected true or false, got '{text}'"),
                }),
        }
    }

    fn missing(&self) -> GqlProbeError {
        GqlProbeError::MissingArgument {
            name: self.name.to_string(),
        }
    }
}

fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// A named, parameterized GraphQL operation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogOperation {
    /// Name used to select the operation.
    pub name: &'static str,
    /// One-line description.
    pub summary: &'static str,
    /// Query or mutation.
    pub kind: OperationKind,
    /// GraphQL document.
    pub document: &'static str,
    /// Parameters in the order they are sent.
    pub params: &'static [Param],
    /// Whether the caller should confirm before sending.
    pub confirm: bool,
}

impl CatalogOperation {
    /// Binds `name=value` arguments to this operation's variables.
    ///
    /// Later duplicates win. Variables come out in declaration order.
    ///
    /// # Errors
    ///
    /// - `UnknownArgument` for a name the operation does not declare
    /// - `MissingArgument` for a required parameter that is absent, empty,
    ///   or (for integers) zero
    /// - `InvalidArgument` for a value that does not fit the parameter kind
    pub fn bind(&self, args: &[(String, String)]) -> Result<Variables, GqlProbeError> {
        let mut supplied: HashMap<&str, &str> = HashMap::with_capacity(args.len());
        for (name, value) in args {
            if !self.params.iter().any(|p| p.name == name.as_str()) {
                return Err(GqlProbeError::UnknownArgument {
                    operation: self.name.to_string(),
                    name: name.clone(),
                });
            }
            supplied.insert(name.as_str(), value.as_str());
        }

        let mut variables = Variables::new();
        for param in self.params {
            let value = param.bind(supplied.get(param.name).copied())?;
            variables.insert(param.name.to_string(), value);
        }
        Ok(variables)
    }

    /// Binds arguments and builds the request to send.
    ///
    /// # Errors
    ///
    /// Same as [`bind`](Self::bind).
    pub fn prepare(&self, args: &[(String, String)]) -> Result<GraphQLRequest, GqlProbeError> {
        let variables = self.bind(args)?;
        let operation = Operation::new(self.document)?;
        Ok(GraphQLRequest::new(operation).with_variables(variables))
    }
}

/// Every catalog operation, in display order.
#[must_use]
pub fn all() -> &'static [CatalogOperation] {
    OPERATIONS
}

/// Looks up an operation by name (case-insensitive).
#[must_use]
pub fn find(name: &str) -> Option<&'static CatalogOperation> {
    OPERATIONS
        .iter()
        .find(|op| op.name.eq_ignore_ascii_case(name))
}

/// Looks up an operation, failing with `UnknownOperation`.
///
/// # Errors
///
/// Returns `GqlProbeError::UnknownOperation` if no operation has that name.
pub fn get(name: &str) -> Result<&'static CatalogOperation, GqlProbeError> {
    find(name).ok_or_else(|| GqlProbeError::UnknownOperation {
        name: name.to_string(),
    })
}

/// Splits `name=value` into its parts.
///
/// # Errors
///
/// Returns `GqlProbeError::InvalidArgument` if there is no `=`.
pub fn parse_arg(arg: &str) -> Result<(String, String), GqlProbeError> {
    arg.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .ok_or_else(|| GqlProbeError::InvalidArgument {
            name: arg.to_string(),
            message: "expected name=value".to_string(),
        })
}
