//! Build script for pathcopy-cli.
//!
//! Renders the man page into OUT_DIR with clap_mangen. The command
//! structure is restated here since build scripts cannot depend on the
//! crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathcopy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Transform paths with pathcopy plugins")
        .long_about(
            "Command-line tool for copying paths in their long, short, network and POSIX forms",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file layered above the discovered ones")
                .value_name("PATH")
                .global(true)
                .env("PATHCOPY_CONFIG"),
        )
        .subcommands(vec![
            Command::new("transform")
                .about("Transform paths with a plugin")
                .long_about("Print each path as transformed by the plugin given by identifier or name"),
            Command::new("list")
                .about("List plugins, their descriptions and visibility")
                .long_about("Display the configured menus, or every plugin with --all"),
            Command::new("resolve")
                .about("Show each network resolution step for a path")
                .long_about(
                    "Run the mapped drive, local share and hidden share steps and print the UNC result",
                ),
            Command::new("order")
                .about("Encode or decode plugin order lists")
                .long_about("Convert between plugin names or identifiers and encoded order lists"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathcopy configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("pathcopy.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
