//! Utility functions for CLI operations.
//!
//! This module provides the shared pieces every command needs: global
//! options, configuration loading, and the collaborators plugins run with.

use crate::error::CliError;
use pathcopy::plugin::AliasForms;
use pathcopy::{
    BuiltinRegistry, Config, ConfigBuilder, NetworkResolver, Plugin, PluginContext, PluginRegistry,
};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet consumed when the logger is installed
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. The `--config` file
/// 3. Discovered configuration files
/// 4. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }
    builder.build().map_err(CliError::from)
}

/// Everything a plugin needs to run, owned in one place.
pub struct Toolbox {
    /// Effective configuration.
    pub config: Config,
    /// Known plugins.
    pub registry: BuiltinRegistry,
    /// Network resolution over the configured environment.
    pub network: NetworkResolver,
    /// Long/short name aliases.
    pub forms: AliasForms,
}

impl Toolbox {
    /// Load configuration and build the collaborators from it.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        Ok(Self::from_config(load_configuration(global)?))
    }

    /// Build the collaborators from an already loaded configuration.
    pub fn from_config(config: Config) -> Self {
        let network = config.network_resolver();
        let forms = config.path_forms();
        Self {
            config,
            registry: BuiltinRegistry::new(),
            network,
            forms,
        }
    }

    /// Borrow the collaborators as a plugin call context.
    pub fn context(&self) -> PluginContext<'_> {
        PluginContext::new(&self.config, &self.registry, &self.network, &self.forms)
    }

    /// Look up a non-separator plugin by identifier or name.
    pub fn plugin(&self, name_or_id: &str) -> Result<&Plugin, CliError> {
        let plugin = self.registry.find(name_or_id).ok_or_else(|| {
            CliError::from(pathcopy::Error::UnknownPlugin {
                plugin: name_or_id.to_string(),
            })
        })?;
        if plugin.is_separator() {
            return Err(CliError::InvalidArguments(format!(
                "{name_or_id} is a separator, not a transformation"
            )));
        }
        Ok(plugin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathcopy::plugin::builtin;

    #[test]
    fn test_plugin_lookup() {
        let toolbox = Toolbox::from_config(Config::default());
        assert_eq!(toolbox.plugin("long-path").unwrap().id(), builtin::LONG_PATH);
        assert_eq!(
            toolbox
                .plugin("{891F9E3E-0B70-49FD-A86C-53B21C6193C7}")
                .unwrap()
                .id(),
            builtin::SHORT_UNC_PATH
        );
        assert_eq!(toolbox.plugin("nope").unwrap_err().exit_code(), 4);
    }

    #[test]
    fn test_separator_is_rejected() {
        let toolbox = Toolbox::from_config(Config::default());
        let id = builtin::SEPARATOR.to_string();
        assert!(matches!(
            toolbox.plugin(&id),
            Err(CliError::InvalidArguments(_))
        ));
    }
}
