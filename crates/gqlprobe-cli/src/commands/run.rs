// SPDX-License-Identifier: Apache-2.0

//! Catalog operations: `gqlprobe run`.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result, bail};
use console::style;
use dialoguer::Confirm;
use gqlprobe_core::{AppConfig, CatalogOperation, GraphQLRequest, catalog};
use tracing::debug;

/// Whether `op` needs a yes from the user before it is sent.
fn needs_confirmation(op: &CatalogOperation, yes: bool, config: &AppConfig) -> bool {
    op.confirm && config.ui.confirm_mutations && !yes
}

/// Binds arguments and asks for confirmation where needed.
///
/// Returns `None` if the user declined.
pub fn prepare(
    name: &str,
    args: &[String],
    yes: bool,
    config: &AppConfig,
) -> Result<Option<GraphQLRequest>> {
    let op = catalog::get(name)?;
    let pairs = args
        .iter()
        .map(String::as_str)
        .map(catalog::parse_arg)
        .collect::<Result<Vec<_>, _>>()?;
    let request = op.prepare(&pairs)?;
    debug!(
        operation = op.name,
        variables = request.variables.len(),
        "Bound arguments"
    );

    if needs_confirmation(op, yes, config) {
        if !io::stdin().is_terminal() {
            bail!(
                "'{}' requires confirmation; pass --yes to run it non-interactively",
                op.name
            );
        }
        let prompt = format!(
            "{} {} ({})?",
            style("!").yellow().bold(),
            op.summary,
            op.name
        );
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("Failed to get confirmation")?;
        if !confirmed {
            eprintln!("{}", style("Cancelled").dim());
            return Ok(None);
        }
    }

    Ok(Some(request))
}
