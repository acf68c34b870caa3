// SPDX-License-Identifier: Apache-2.0

//! Terminal results of a GraphQL call.

use serde::Serialize;
use serde_json::{Value, json};

/// What a single call produced.
///
/// `Success` carries the response body exactly as the server sent it,
/// including any GraphQL `errors` array. Only failures below the GraphQL
/// layer (connection, read, non-JSON body) become `TransportFailure`.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// The endpoint answered with a JSON body.
    Success(Value),
    /// The request never produced a JSON body.
    TransportFailure(String),
}

impl QueryResult {
    /// Returns true for `Success`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success(_))
    }

    /// The terminal state this result corresponds to.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self {
            QueryResult::Success(_) => Outcome::Succeeded,
            QueryResult::TransportFailure(_) => Outcome::Failed,
        }
    }

    /// The payload of a successful call.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        match self {
            QueryResult::Success(body) => Some(body),
            QueryResult::TransportFailure(_) => None,
        }
    }

    /// The `errors` array of a successful payload, if the server sent one.
    #[must_use]
    pub fn graphql_errors(&self) -> Option<&Vec<Value>> {
        self.payload()?.get("errors")?.as_array()
    }

    /// The JSON shown to users: the payload itself, or `{"error": message}`.
    #[must_use]
    pub fn to_display_value(&self) -> Value {
        match self {
            QueryResult::Success(body) => body.clone(),
            QueryResult::TransportFailure(message) => json!({ "error": message }),
        }
    }
}

impl Serialize for QueryResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QueryResult::Success(body) => body.serialize(serializer),
            QueryResult::TransportFailure(message) => {
                json!({ "error": message }).serialize(serializer)
            }
        }
    }
}

/// Terminal state of one call, without the payload.
///
/// Each call moves `Idle -> Sent -> Succeeded | Failed`; only the terminal
/// state outlives the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A JSON body was received and handed to the sink.
    Succeeded,
    /// A transport failure was handed to the sink.
    Failed,
}
