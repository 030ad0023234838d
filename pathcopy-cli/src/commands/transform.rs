//! Transform command implementation.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Toolbox};
use clap::Args;
use pathcopy::path::extract_folder_from_path;
use std::io::Write;

/// Transform paths with a plugin.
#[derive(Args)]
pub struct TransformCommand {
    /// Plugin identifier (e.g. {331A3B60-AF49-44F4-B30D-56ADFF6D25E8}) or name (e.g. long-path)
    #[arg(long, short = 'p', value_name = "ID|NAME")]
    pub plugin: String,

    /// Fail if the plugin is disabled for any of the paths
    #[arg(long)]
    pub require_enabled: bool,

    /// Paths to transform
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl TransformCommand {
    /// Execute the transform command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let toolbox = Toolbox::load(global)?;
        let plugin = toolbox.plugin(&self.plugin)?;
        let ctx = toolbox.context();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for path in &self.paths {
            let parent = extract_folder_from_path(path).unwrap_or_default();
            if !plugin.is_enabled_for(&parent, path, &ctx) {
                if self.require_enabled {
                    return Err(CliError::SemanticFailure(format!(
                        "{} is disabled for {path}",
                        plugin.name()
                    )));
                }
                log::warn!("{} is disabled for {path}", plugin.name());
            }
            writeln!(handle, "{}", plugin.transform_path(path, &ctx))?;
        }

        Ok(())
    }
}
