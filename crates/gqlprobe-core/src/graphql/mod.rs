// SPDX-License-Identifier: Apache-2.0

//! GraphQL request and result types.

pub mod request;
pub mod result;

pub use request::{GraphQLRequest, Operation, Variables, parse_assignment, parse_variables};
pub use result::{Outcome, QueryResult};
