// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Centralizes all output formatting logic, supporting text, JSON, and YAML formats.
//! Command handlers return data; this module handles presentation. Call
//! results stream through [`RenderSink`] as they complete.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

use crate::cli::{OutputContext, OutputFormat};

/// Trait for types that can be rendered in multiple output formats.
pub trait Renderable: Serialize {
    /// Render as human-readable text to the given writer.
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()>;
}

/// Generic render function - handles JSON/YAML via serde, delegates text to trait.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(result).context("Failed to serialize to JSON")?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_saphyr::to_string(result).context("Failed to serialize to YAML")?;
            println!("{yaml}");
        }
        OutputFormat::Text => {
            result
                .render_text(&mut io::stdout(), ctx)
                .context("Failed to render text")?;
        }
    }
    Ok(())
}

mod ops;
mod results;

pub use ops::{OpDetail, OpsList};
pub use results::{RenderSink, render_batch_summary};
