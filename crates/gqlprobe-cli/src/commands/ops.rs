// SPDX-License-Identifier: Apache-2.0

//! Catalog browsing: `gqlprobe ops`.

use anyhow::Result;
use gqlprobe_core::catalog;

use crate::output::{OpDetail, OpsList};

/// Every operation, in catalog order.
pub fn list() -> OpsList {
    OpsList {
        operations: catalog::all().iter().collect(),
    }
}

/// One operation by name.
pub fn show(name: &str) -> Result<OpDetail> {
    Ok(OpDetail {
        operation: catalog::get(name)?,
    })
}
