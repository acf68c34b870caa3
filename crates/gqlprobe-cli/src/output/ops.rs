// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use console::style;
use gqlprobe_core::{CatalogOperation, OperationKind, Param, ParamKind};
use serde::Serialize;

use crate::cli::OutputContext;

use super::Renderable;

/// Every catalog operation, for `ops list`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct OpsList {
    pub operations: Vec<&'static CatalogOperation>,
}

/// One catalog operation in full, for `ops show`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct OpDetail {
    pub operation: &'static CatalogOperation,
}

fn kind_label(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Query => "query",
        OperationKind::Mutation => "mutation",
    }
}

fn param_signature(param: &Param) -> String {
    let kind = match param.kind {
        ParamKind::Int => "int",
        ParamKind::String => "string",
        ParamKind::Bool => "bool",
    };
    let marker = if param.required { "!" } else { "" };
    match param.default {
        Some(default) => format!("{}: {kind}{marker} = {default}", param.name),
        None => format!("{}: {kind}{marker}", param.name),
    }
}

impl Renderable for OpsList {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Operation", "Kind", "Arguments", "Description"]);

        for op in &self.operations {
            let args: Vec<String> = op.params.iter().map(param_signature).collect();
            table.add_row(vec![
                op.name.to_string(),
                kind_label(op.kind).to_string(),
                args.join(", "),
                op.summary.to_string(),
            ]);
        }

        writeln!(w, "{table}")?;
        if !ctx.quiet {
            writeln!(
                w,
                "\n{}",
                style("Run one with `gqlprobe run <operation> -a name=value`").dim()
            )?;
        }
        Ok(())
    }
}

impl Renderable for OpDetail {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        let op = self.operation;
        writeln!(
            w,
            "{} ({})",
            style(op.name).cyan().bold(),
            kind_label(op.kind)
        )?;
        writeln!(w, "{}", op.summary)?;
        if op.confirm {
            writeln!(w, "{}", style("Asks for confirmation before sending").yellow())?;
        }
        writeln!(w)?;

        if op.params.is_empty() {
            writeln!(w, "{}", style("No arguments").dim())?;
        } else {
            writeln!(w, "{}", style("Arguments:").bold())?;
            for param in op.params {
                writeln!(w, "  -a {}", param_signature(param))?;
            }
        }
        writeln!(w)?;

        writeln!(w, "{}", style("Document:").bold())?;
        for line in op.document.lines() {
            writeln!(w, "  {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn ctx() -> OutputContext {
        OutputContext {
            format: OutputFormat::Text,
            quiet: true,
            verbose: false,
            is_tty: false,
        }
    }

    #[test]
    fn signature_marks_required_and_default() {
        let op = gqlprobe_core::catalog::get("create-user").unwrap();
        let sigs: Vec<String> = op.params.iter().map(param_signature).collect();
        assert!(sigs.contains(&"username: string!".to_string()));
        assert!(sigs.contains(&"role: string = user".to_string()));
    }

    #[test]
    fn list_renders_every_operation() {
        let list = OpsList {
            operations: gqlprobe_core::catalog::all().iter().collect(),
        };
        let mut out = Vec::new();
        list.render_text(&mut out, &ctx()).unwrap();
        let text = String::from_utf8(out).unwrap();
        for op in gqlprobe_core::catalog::all() {
            assert!(text.contains(op.name), "missing {}", op.name);
        }
    }

    #[test]
    fn detail_includes_document() {
        let detail = OpDetail {
            operation: gqlprobe_core::catalog::get("user").unwrap(),
        };
        let mut out = Vec::new();
        detail.render_text(&mut out, &ctx()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("query GetUser($id: Int!)"));
        assert!(text.contains("-a id: int!"));
    }
}
