// SPDX-License-Identifier: Apache-2.0

//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Writes the completion script for `shell` to stdout.
///
/// # Examples
///
/// ```bash
/// gqlprobe completion bash > ~/.bash_completion.d/gqlprobe
/// gqlprobe completion zsh > ~/.zsh/completions/_gqlprobe
/// ```
pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "gqlprobe", &mut io::stdout());
}
