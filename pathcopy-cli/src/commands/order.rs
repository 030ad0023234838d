//! Order list encoding and decoding.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Toolbox};
use clap::{Args, Subcommand};
use pathcopy::codec::{
    decode_plugin_ids, encode_plugin_ids, try_decode_plugin_ids, DEFAULT_SEPARATOR,
};
use pathcopy::{Config, PluginId, PluginRegistry};
use std::io::Write;

/// Encode or decode plugin order lists.
#[derive(Subcommand)]
pub enum OrderCommand {
    /// Encode plugins (by identifier or name) into an order list
    Encode(EncodeArgs),

    /// Decode an order list into one plugin per line
    Decode(DecodeArgs),
}

/// Arguments for `order encode`.
#[derive(Args)]
pub struct EncodeArgs {
    /// Plugins in display order
    #[arg(value_name = "ID|NAME")]
    pub plugins: Vec<String>,

    /// List separator
    #[arg(long, default_value_t = DEFAULT_SEPARATOR)]
    pub separator: char,
}

/// Arguments for `order decode`.
#[derive(Args)]
pub struct DecodeArgs {
    /// Encoded order list
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// List separator
    #[arg(long, default_value_t = DEFAULT_SEPARATOR)]
    pub separator: char,

    /// Reject malformed entries instead of dropping them
    #[arg(long)]
    pub strict: bool,
}

impl OrderCommand {
    /// Execute the order command.
    ///
    /// Names resolve against the built-in registry; configuration files are
    /// not read.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let toolbox = Toolbox::from_config(Config::default());
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self {
            OrderCommand::Encode(args) => {
                let ids = encode_ids(&toolbox, &args.plugins)?;
                writeln!(handle, "{}", encode_plugin_ids(&ids, args.separator))?;
            }
            OrderCommand::Decode(args) => {
                let ids = if args.strict {
                    try_decode_plugin_ids(&args.text, args.separator)?
                } else {
                    decode_plugin_ids(&args.text, args.separator)
                };
                for id in ids {
                    let name = toolbox.registry.plugin(id).map_or("-", |p| p.name());
                    writeln!(handle, "{id}\t{name}")?;
                }
            }
        }

        Ok(())
    }
}

/// Resolve each argument to an identifier; separators are allowed here.
fn encode_ids(toolbox: &Toolbox, plugins: &[String]) -> Result<Vec<PluginId>, CliError> {
    plugins
        .iter()
        .map(|name| match PluginId::parse(name) {
            Ok(id) => Ok(id),
            Err(_) => toolbox.plugin(name).map(pathcopy::Plugin::id),
        })
        .collect()
}
