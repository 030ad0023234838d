//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ListCommand, OrderCommand, ResolveCommand, TransformCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Copy paths in their many forms.
#[derive(Parser)]
#[command(name = "pathcopy")]
#[command(version, about = "Transform paths with pathcopy plugins", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file layered above the discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "PATHCOPY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Transform paths with a plugin
    Transform(TransformCommand),

    /// List plugins, their descriptions and visibility
    List(ListCommand),

    /// Show each network resolution step for a path
    Resolve(ResolveCommand),

    /// Encode or decode plugin order lists
    #[command(subcommand)]
    Order(OrderCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
