//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "pathcopy";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Generating {} completion script", self.shell);
                eprintln!("# {hint}");
                eprintln!();
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("Enable with: eval \"$(pathcopy completions bash)\""),
        Shell::Zsh => Some("Install with: pathcopy completions zsh > ~/.zsh/completions/_pathcopy"),
        Shell::Fish => Some("Enable with: pathcopy completions fish | source"),
        Shell::PowerShell => {
            Some("Enable with: pathcopy completions powershell | Out-String | Invoke-Expression")
        }
        _ => None,
    }
}
