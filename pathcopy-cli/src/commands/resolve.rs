//! Resolve command implementation.
//!
//! Runs every network resolution step on a path and reports what each one
//! produced, then the combined result the UNC plugins would use.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Toolbox};
use clap::Args;
use pathcopy::Settings;
use std::io::Write;

/// Show each network resolution step for a path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Local path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,
}

/// Outcome of one step.
struct Step {
    name: &'static str,
    result: Option<String>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let toolbox = Toolbox::load(global)?;
        let network = &toolbox.network;
        let hidden = toolbox.config.use_hidden_shares();
        let fqdn = toolbox.config.use_fqdn();

        if let Err(e) = network.check_network() {
            log::warn!("{e}");
        }

        let steps = [
            Step {
                name: "mapped-drive",
                result: network.resolve_mapped_drive(&self.path),
            },
            Step {
                name: "local-share",
                result: network.resolve_local_share(&self.path, hidden),
            },
            Step {
                name: "hidden-share",
                result: network.resolve_hidden_share(&self.path),
            },
        ];
        let combined = network.network_path(&self.path, hidden, fqdn);

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let computer = network.local_computer_name();
        writeln!(
            handle,
            "computer\t{}",
            if computer.is_empty() { "-" } else { &computer }
        )?;
        writeln!(handle, "use-hidden-shares\t{hidden}")?;
        writeln!(handle, "use-fqdn\t{fqdn}")?;
        for step in &steps {
            writeln!(
                handle,
                "{}\t{}",
                step.name,
                step.result.as_deref().unwrap_or("-")
            )?;
        }
        writeln!(handle, "result\t{}", combined.as_deref().unwrap_or("-"))?;

        match combined {
            Some(_) => Ok(()),
            None => Err(CliError::SemanticFailure(format!(
                "No network path for {}",
                self.path
            ))),
        }
    }
}
