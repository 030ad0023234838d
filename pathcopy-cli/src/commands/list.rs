//! List command implementation.
//!
//! This module implements the `list` command, which displays plugins as they
//! would appear in the menus, or every known plugin with `--all`, in table,
//! JSON or CSV form.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Toolbox};
use clap::{Args, ValueEnum};
use pathcopy::config::OutputFormat as ConfigFormat;
use pathcopy::{visibility, MenuLayout, Plugin, PluginContext, PluginId, PluginRegistry};
use serde::Serialize;
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 6] = ["menu", "id", "name", "description", "capabilities", "shown"];

/// List plugins.
#[derive(Args)]
pub struct ListCommand {
    /// List every known plugin instead of the configured menus
    #[arg(long)]
    pub all: bool,

    /// Output format (defaults to the configured `output_format`, else table)
    #[arg(long, value_enum, env = "PATHCOPY_OUTPUT_FORMAT", ignore_case = true)]
    pub format: Option<OutputFormat>,
}

/// Output format for list command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl From<ConfigFormat> for OutputFormat {
    fn from(format: ConfigFormat) -> Self {
        match format {
            ConfigFormat::Table => Self::Table,
            ConfigFormat::Json => Self::Json,
            ConfigFormat::Csv => Self::Csv,
        }
    }
}

/// One listed plugin.
#[derive(Debug, Serialize)]
struct PluginRow {
    menu: &'static str,
    id: PluginId,
    name: String,
    description: String,
    capabilities: Vec<String>,
    shown: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl PluginRow {
    fn new(menu: &'static str, plugin: &Plugin, ctx: &PluginContext<'_>) -> Self {
        Self {
            menu,
            id: plugin.id(),
            name: plugin.name().to_string(),
            description: plugin.description(ctx).to_string(),
            capabilities: plugin
                .capabilities()
                .iter()
                .map(|c| c.to_string())
                .collect(),
            shown: visibility::is_shown(ctx.settings, ctx.registry, plugin.id()),
            help: plugin.help_text().map(str::to_string),
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let toolbox = Toolbox::load(global)?;
        let ctx = toolbox.context();

        let rows = if self.all {
            toolbox
                .registry
                .plugins()
                .into_iter()
                .filter(|p| !p.is_separator())
                .map(|p| PluginRow::new("-", p, &ctx))
                .collect()
        } else {
            menu_rows(&toolbox, &ctx)
        };

        let format = self
            .format
            .or_else(|| toolbox.config.output_format.map(OutputFormat::from))
            .unwrap_or(OutputFormat::Table);
        match format {
            OutputFormat::Table => format_as_table(&rows)?,
            OutputFormat::Json => format_as_json(&rows)?,
            OutputFormat::Csv => format_as_csv(&rows)?,
        }

        Ok(())
    }
}

fn menu_rows(toolbox: &Toolbox, ctx: &PluginContext<'_>) -> Vec<PluginRow> {
    let layout = MenuLayout::compute(&toolbox.config, &toolbox.registry);
    let main = layout
        .main_menu
        .iter()
        .map(|p| PluginRow::new("main", p, ctx));
    let sub = layout
        .submenu
        .iter()
        .map(|p| PluginRow::new("submenu", p, ctx));
    main.chain(sub).collect()
}

/// Format rows as a human-readable table. Separators render as a rule.
fn format_as_table(rows: &[PluginRow]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "MENU\tNAME\tDESCRIPTION\tID")?;
    for row in rows {
        if row.capabilities.iter().any(|c| c == "separator") {
            writeln!(handle, "{}\t----", row.menu)?;
            continue;
        }
        writeln!(
            handle,
            "{}\t{}\t{}\t{}",
            row.menu, row.name, row.description, row.id
        )?;
    }

    Ok(())
}

/// Format rows as JSON.
fn format_as_json(rows: &[PluginRow]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, rows)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format rows as CSV.
fn format_as_csv(rows: &[PluginRow]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new().from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for row in rows {
        writer
            .write_record([
                row.menu.to_string(),
                row.id.to_string(),
                row.name.clone(),
                row.description.clone(),
                row.capabilities.join("|"),
                row.shown.to_string(),
            ])
            .map_err(csv_error)?;
    }
    writer.flush()?;

    Ok(())
}
