//! Known plugins and their canonical default order.

use std::collections::HashSet;

use crate::plugin::{builtin, Plugin, PluginId};
use crate::settings::Settings;

/// Source of the plugins known to the process.
pub trait PluginRegistry: Send + Sync {
    /// The plugin shown in the main menu when no main order is configured.
    fn default_plugin_id(&self) -> PluginId;

    /// All plugins in canonical default order, separators included.
    ///
    /// This is the submenu content when no submenu order is configured.
    fn default_order_plugins(&self, settings: &dyn Settings) -> Vec<&Plugin>;

    /// Looks up a plugin by identifier.
    fn plugin(&self, id: PluginId) -> Option<&Plugin>;

    /// Every distinct plugin, separator included.
    fn plugins(&self) -> Vec<&Plugin>;

    /// Looks up a plugin by identifier text or name.
    fn find(&self, name_or_id: &str) -> Option<&Plugin> {
        match PluginId::parse(name_or_id) {
            Ok(id) => self.plugin(id),
            Err(_) => self
                .plugins()
                .into_iter()
                .find(|p| !p.is_separator() && p.name().eq_ignore_ascii_case(name_or_id)),
        }
    }
}

/// The built-in plugins, optionally followed by extra ones.
///
/// The default order lists the built-ins, then the extras sorted by group.
/// A separator is placed wherever the group changes.
#[derive(Debug)]
pub struct BuiltinRegistry {
    plugins: Vec<Plugin>,
    order: Vec<PluginId>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    /// A registry holding only the built-in plugins.
    #[must_use]
    pub fn new() -> Self {
        Self::with_plugins(Vec::new())
    }

    /// A registry holding the built-ins and `extra`.
    ///
    /// Extras reusing a known identifier are ignored.
    #[must_use]
    pub fn with_plugins(extra: impl IntoIterator<Item = Plugin>) -> Self {
        let mut plugins = vec![builtin::separator()];
        let mut seen: HashSet<PluginId> = HashSet::from([builtin::SEPARATOR]);

        let builtins = builtin::plugins();
        for plugin in &builtins {
            seen.insert(plugin.id());
        }

        let mut extras: Vec<Plugin> = Vec::new();
        for plugin in extra {
            if seen.insert(plugin.id()) {
                extras.push(plugin);
            } else {
                log::warn!(
                    "ignoring plugin {} ({}): duplicate identifier",
                    plugin.name(),
                    plugin.id()
                );
            }
        }
        // Ungrouped extras go last.
        extras.sort_by_key(|p| p.group().map_or((1, 0, 0), |g| (0, g.id, g.position)));

        let mut order = Vec::new();
        let mut last_group = None;
        for plugin in builtins.iter().chain(&extras) {
            let group = plugin.group().map(|g| g.id);
            if !order.is_empty() && group != last_group {
                order.push(builtin::SEPARATOR);
            }
            last_group = group;
            order.push(plugin.id());
        }

        plugins.extend(builtins);
        plugins.extend(extras);
        Self { plugins, order }
    }
}

impl PluginRegistry for BuiltinRegistry {
    fn default_plugin_id(&self) -> PluginId {
        builtin::DEFAULT_PLUGIN
    }

    fn default_order_plugins(&self, _settings: &dyn Settings) -> Vec<&Plugin> {
        self.order.iter().filter_map(|id| self.plugin(*id)).collect()
    }

    fn plugin(&self, id: PluginId) -> Option<&Plugin> {
        self.plugins.iter().find(|p| p.id() == id)
    }

    fn plugins(&self) -> Vec<&Plugin> {
        self.plugins.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_default_order_has_separators_between_groups() {
        let registry = BuiltinRegistry::new();
        let config = Config::default();
        let order: Vec<_> = registry
            .default_order_plugins(&config)
            .iter()
            .map(|p| p.id())
            .collect();

        assert_eq!(order.first(), Some(&builtin::SHORT_NAME));
        assert_eq!(order.iter().filter(|id| **id == builtin::SEPARATOR).count(), 2);
        assert_ne!(order.last(), Some(&builtin::SEPARATOR));
        let unc = order.iter().position(|id| *id == builtin::SHORT_UNC_PATH).unwrap();
        assert_eq!(order[unc - 1], builtin::SEPARATOR);
    }

    #[test]
    fn test_lookup() {
        let registry = BuiltinRegistry::new();
        assert_eq!(registry.plugin(builtin::MSYS_PATH).unwrap().name(), "msys-path");
        assert!(registry.plugin(builtin::SEPARATOR).unwrap().is_separator());
        assert!(registry.plugin(PluginId::from_u128(7)).is_none());
    }

    #[test]
    fn test_find_by_name_or_id() {
        let registry = BuiltinRegistry::new();
        assert_eq!(registry.find("Long-Path").unwrap().id(), builtin::LONG_PATH);
        assert_eq!(
            registry
                .find("{891f9e3e-0b70-49fd-a86c-53b21c6193c7}")
                .unwrap()
                .id(),
            builtin::SHORT_UNC_PATH
        );
        assert!(registry.find("separator").is_none());
        assert!(registry.find("nope").is_none());
    }

    #[test]
    fn test_extras_are_grouped_after_builtins() {
        let extra = [
            Plugin::builder(PluginId::from_u128(0x20), "b").group(9, 1).build(),
            Plugin::builder(PluginId::from_u128(0x21), "loose").build(),
            Plugin::builder(PluginId::from_u128(0x22), "a").group(9, 0).build(),
            Plugin::builder(builtin::LONG_PATH, "clash").build(),
        ];
        let registry = BuiltinRegistry::with_plugins(extra);
        let names: Vec<_> = registry
            .default_order_plugins(&Config::default())
            .iter()
            .map(|p| p.name().to_string())
            .collect();

        let tail = &names[names.len() - 5..];
        assert_eq!(tail, ["separator", "a", "b", "separator", "loose"]);
        assert_eq!(registry.find("long-path").unwrap().name(), "long-path");
        assert!(registry.find("clash").is_none());
    }
}
