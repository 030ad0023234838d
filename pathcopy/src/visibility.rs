//! Plugin visibility and menu layout.
//!
//! Visibility is membership: a plugin is shown if its identifier appears in
//! the main menu order or the submenu order. Missing orders fall back to
//! the registry defaults, the default plugin alone for the main menu and the
//! full canonical order for the submenu.

use std::collections::HashSet;

use crate::plugin::{Plugin, PluginId};
use crate::registry::PluginRegistry;
use crate::settings::Settings;

/// Effective main menu order.
#[must_use]
pub fn main_menu_order(settings: &dyn Settings, registry: &dyn PluginRegistry) -> Vec<PluginId> {
    settings
        .main_menu_display_order()
        .unwrap_or_else(|| vec![registry.default_plugin_id()])
}

/// Effective submenu order.
#[must_use]
pub fn submenu_order(settings: &dyn Settings, registry: &dyn PluginRegistry) -> Vec<PluginId> {
    settings.submenu_display_order().unwrap_or_else(|| {
        registry
            .default_order_plugins(settings)
            .iter()
            .map(|p| p.id())
            .collect()
    })
}

/// Whether `id` is shown in the main menu or the submenu.
///
/// # Examples
///
/// ```
/// use pathcopy::config::Config;
/// use pathcopy::plugin::{builtin, PluginId};
/// use pathcopy::registry::BuiltinRegistry;
/// use pathcopy::visibility::is_shown;
///
/// let registry = BuiltinRegistry::new();
/// let config = Config::default();
/// assert!(is_shown(&config, &registry, builtin::LONG_PATH));
/// assert!(!is_shown(&config, &registry, PluginId::from_u128(42)));
/// ```
#[must_use]
pub fn is_shown(settings: &dyn Settings, registry: &dyn PluginRegistry, id: PluginId) -> bool {
    main_menu_order(settings, registry).contains(&id)
        || submenu_order(settings, registry).contains(&id)
}

/// Resolved contents of both menus.
#[derive(Debug, Clone)]
pub struct MenuLayout<'r> {
    /// Plugins in the main menu, in display order.
    pub main_menu: Vec<&'r Plugin>,
    /// Plugins in the submenu, in display order.
    pub submenu: Vec<&'r Plugin>,
}

impl<'r> MenuLayout<'r> {
    /// Resolves the effective orders through `registry`.
    ///
    /// Unknown identifiers are skipped and a plugin appears at most once per
    /// menu. Separators are kept only between two plugins.
    #[must_use]
    pub fn compute(settings: &dyn Settings, registry: &'r dyn PluginRegistry) -> Self {
        Self {
            main_menu: resolve(&main_menu_order(settings, registry), registry),
            submenu: resolve(&submenu_order(settings, registry), registry),
        }
    }

    /// Whether both menus are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_menu.is_empty() && self.submenu.is_empty()
    }
}

fn resolve<'r>(order: &[PluginId], registry: &'r dyn PluginRegistry) -> Vec<&'r Plugin> {
    let mut seen = HashSet::new();
    let mut menu: Vec<&Plugin> = Vec::with_capacity(order.len());
    for id in order {
        let Some(plugin) = registry.plugin(*id) else {
            log::debug!("skipping unknown plugin {id}");
            continue;
        };
        if plugin.is_separator() {
            if menu.last().is_some_and(|p| !p.is_separator()) {
                menu.push(plugin);
            }
        } else if seen.insert(*id) {
            menu.push(plugin);
        }
    }
    if menu.last().is_some_and(|p| p.is_separator()) {
        menu.pop();
    }
    menu
}
