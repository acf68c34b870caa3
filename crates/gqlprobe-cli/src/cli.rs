// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for gqlprobe.
//!
//! Uses clap's derive API for declarative CLI parsing with noun-verb
//! subcommands.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Extended help text for the query subcommand.
const QUERY_HELP: &str = r#"EXAMPLES

  Inline document:
    gqlprobe query 'query { users { id username } }'

  Variables (values are read as JSON when they parse, text otherwise):
    gqlprobe query 'query GetUser($id: Int!) { user(id: $id) { id email } }' --var id=5

  Document from a file, variables as one JSON object:
    gqlprobe query @create_user.graphql --variables '{"username": "bob", "role": null}'

  Document from stdin:
    cat op.graphql | gqlprobe query -
"#;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON (default)
    #[default]
    Text,
    /// One compact JSON document per line
    Json,
    /// YAML documents
    Yaml,
}

/// Global output configuration passed to commands.
#[derive(Clone, Debug)]
pub struct OutputContext {
    /// Output format (text, json, yaml)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, summaries)
    pub quiet: bool,
    /// Enable verbose output
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// gqlprobe - send GraphQL queries and mutations, print what comes back.
///
/// Every response body is printed as-is, including GraphQL errors.
/// Connection failures and non-JSON bodies print as {"error": "..."}.
#[derive(Parser)]
#[command(name = "gqlprobe")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, summaries)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (info-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Override the configured GraphQL endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Override the request timeout in seconds (0 = transport default)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send a GraphQL document
    #[command(after_long_help = QUERY_HELP)]
    Query {
        /// Document text, @FILE to read a file, or - for stdin
        document: String,

        /// Variable as name=value (repeatable)
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,

        /// All variables as one JSON object
        #[arg(long, value_name = "JSON")]
        variables: Option<String>,
    },

    /// Run a named operation from the catalog
    Run {
        /// Operation name (see `gqlprobe ops list`)
        operation: String,

        /// Argument as name=value (repeatable)
        #[arg(long = "arg", short = 'a', value_name = "NAME=VALUE")]
        args: Vec<String>,

        /// Skip the confirmation prompt for destructive operations
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Browse the operation catalog
    #[command(subcommand)]
    Ops(OpsCommand),

    /// Send every request in a JSON file concurrently
    Batch {
        /// JSON array of {"query": ..., "variables": {...}} objects
        file: PathBuf,

        /// Maximum requests in flight (defaults to batch.concurrency)
        #[arg(long, short = 'c')]
        concurrency: Option<usize>,
    },

    /// Print a shell completion script
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Catalog subcommands
#[derive(Subcommand)]
pub enum OpsCommand {
    /// List catalog operations
    List,

    /// Show an operation's parameters and document
    Show {
        /// Operation name
        operation: String,
    },
}
