//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered; absent
//! values fall back to the defaults of the [`Settings`] read contract.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::codec::{decode_plugin_ids, DEFAULT_SEPARATOR};
use crate::network::{NetworkResolver, NetworkTable};
use crate::plugin::{AliasForms, PluginId};
use crate::settings::Settings;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathcopy::config::Config;
/// use pathcopy::settings::Settings;
///
/// let config: Config = serde_yaml::from_str(
///     "drop_redundant_words: true\nmain_menu_order: \"{331A3B60-AF49-44F4-B30D-56ADFF6D25E8}\"\n",
/// )
/// .unwrap();
/// assert!(config.drop_redundant_words());
/// assert_eq!(config.main_menu_display_order().unwrap().len(), 1);
/// assert_eq!(config.submenu_display_order(), None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Main menu plugin order, as an encoded identifier list.
    pub main_menu_order: Option<String>,

    /// Submenu plugin order, as an encoded identifier list.
    pub submenu_order: Option<String>,

    /// Collapse paired plugin descriptions when only one is visible.
    pub drop_redundant_words: Option<bool>,

    /// Append a separator to directory paths.
    pub append_separator_for_directories: Option<bool>,

    /// Consider hidden shares when computing network paths.
    pub use_hidden_shares: Option<bool>,

    /// Expand UNC host names to fully-qualified names.
    pub use_fqdn: Option<bool>,

    /// Computer name to use instead of the system's.
    pub computer_name: Option<String>,

    /// Static network environment.
    pub network: Option<NetworkConfig>,

    /// Long path prefix to short path prefix aliases.
    pub short_names: Option<BTreeMap<String, String>>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

/// Network environment description.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// Shares in enumeration order.
    pub shares: Option<Vec<ShareConfig>>,

    /// Drive root (e.g. `Z:`) to UNC root.
    pub mapped_drives: Option<BTreeMap<String, String>>,

    /// Host name to fully-qualified name.
    pub hosts: Option<BTreeMap<String, String>>,

    /// Simulate an unavailable network subsystem.
    pub offline: Option<bool>,
}

/// A share entry.
///
/// Either the full multi-line `record` or just its `path` is given.
///
/// # Examples
///
/// ```
/// use pathcopy::config::ShareConfig;
///
/// let share = ShareConfig {
///     name: "Data".to_string(),
///     path: Some("C:\\Shares\\Data".to_string()),
///     record: None,
/// };
/// assert_eq!(share.effective_record().as_deref(), Some("Path=C:\\Shares\\Data"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ShareConfig {
    /// Share name; hidden shares end with `$`.
    pub name: String,

    /// Shared local path.
    pub path: Option<String>,

    /// Raw share record, one `Key=Value` per line.
    pub record: Option<String>,
}

impl ShareConfig {
    /// The record to serve for this share. `record` wins over `path`.
    #[must_use]
    pub fn effective_record(&self) -> Option<String> {
        self.record
            .clone()
            .or_else(|| self.path.as_ref().map(|p| format!("Path={p}")))
    }
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use pathcopy::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// Human-readable table format.
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl Config {
    /// Builds the configured network environment.
    #[must_use]
    pub fn network_table(&self) -> NetworkTable {
        let mut table = NetworkTable::new();
        if let Some(name) = &self.computer_name {
            table = table.with_computer_name(name.clone());
        }
        let Some(network) = &self.network else {
            return table;
        };

        for share in network.shares.iter().flatten() {
            match share.effective_record() {
                Some(record) => table = table.with_share(share.name.clone(), &record),
                None => log::warn!("share {} has neither path nor record", share.name),
            }
        }
        for (drive, unc) in network.mapped_drives.iter().flatten() {
            table = table.with_mapped_drive(drive, unc.clone());
        }
        for (host, fqdn) in network.hosts.iter().flatten() {
            table = table.with_host(host, fqdn.clone());
        }
        if network.offline.unwrap_or(false) {
            table = table.offline();
        }
        table
    }

    /// A resolver over [`Config::network_table`].
    #[must_use]
    pub fn network_resolver(&self) -> NetworkResolver {
        NetworkResolver::from_table(Arc::new(self.network_table()))
    }

    /// Long/short forms from the `short_names` table.
    #[must_use]
    pub fn path_forms(&self) -> AliasForms {
        self.short_names
            .as_ref()
            .map(AliasForms::from_map)
            .unwrap_or_default()
    }
}

impl Settings for Config {
    fn main_menu_display_order(&self) -> Option<Vec<PluginId>> {
        self.main_menu_order
            .as_deref()
            .map(|text| decode_plugin_ids(text, DEFAULT_SEPARATOR))
    }

    fn submenu_display_order(&self) -> Option<Vec<PluginId>> {
        self.submenu_order
            .as_deref()
            .map(|text| decode_plugin_ids(text, DEFAULT_SEPARATOR))
    }

    fn drop_redundant_words(&self) -> bool {
        self.drop_redundant_words.unwrap_or(false)
    }

    fn append_separator_for_directories(&self) -> bool {
        self.append_separator_for_directories.unwrap_or(false)
    }

    fn use_hidden_shares(&self) -> bool {
        self.use_hidden_shares.unwrap_or(false)
    }

    fn use_fqdn(&self) -> bool {
        self.use_fqdn.unwrap_or(false)
    }
}
