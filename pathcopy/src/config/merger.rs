//! Configuration merging and precedence handling.

use std::collections::BTreeMap;

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, NetworkConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathcopy::config::{Config, ConfigMerger};
///
/// let low = Config { use_fqdn: Some(false), ..Default::default() };
/// let high = Config { use_fqdn: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.use_fqdn, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Order lists: replaced as a whole, never concatenated
    /// - Short name aliases: key-by-key union, source wins on conflicts
    /// - Network: field-by-field; shares are replaced as a whole since their
    ///   order is significant, drive and host tables are unioned
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.main_menu_order.is_some() {
            target.main_menu_order.clone_from(&source.main_menu_order);
        }

        if source.submenu_order.is_some() {
            target.submenu_order.clone_from(&source.submenu_order);
        }

        if source.drop_redundant_words.is_some() {
            target.drop_redundant_words = source.drop_redundant_words;
        }

        if source.append_separator_for_directories.is_some() {
            target.append_separator_for_directories = source.append_separator_for_directories;
        }

        if source.use_hidden_shares.is_some() {
            target.use_hidden_shares = source.use_hidden_shares;
        }

        if source.use_fqdn.is_some() {
            target.use_fqdn = source.use_fqdn;
        }

        if source.computer_name.is_some() {
            target.computer_name.clone_from(&source.computer_name);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_names) = source.short_names {
            target
                .short_names
                .get_or_insert_with(Default::default)
                .extend(source_names.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        if let Some(ref source_network) = source.network {
            target.network = Some(match &target.network {
                Some(target_network) => Self::merge_network(target_network, source_network),
                None => source_network.clone(),
            });
        }
    }

    fn merge_network(target: &NetworkConfig, source: &NetworkConfig) -> NetworkConfig {
        NetworkConfig {
            shares: source.shares.clone().or_else(|| target.shares.clone()),
            mapped_drives: union(target.mapped_drives.as_ref(), source.mapped_drives.as_ref()),
            hosts: union(target.hosts.as_ref(), source.hosts.as_ref()),
            offline: source.offline.or(target.offline),
        }
    }
}

fn union(
    low: Option<&BTreeMap<String, String>>,
    high: Option<&BTreeMap<String, String>>,
) -> Option<BTreeMap<String, String>> {
    match (low, high) {
        (Some(low), Some(high)) => {
            let mut merged = low.clone();
            merged.extend(high.iter().map(|(k, v)| (k.clone(), v.clone())));
            Some(merged)
        }
        (low, high) => high.or(low).cloned(),
    }
}
