//! Read contract for user settings.
//!
//! Persistence is owned elsewhere; resolvers only read through this trait.
//! [`crate::config::Config`] is the implementation used by the CLI.

use crate::plugin::PluginId;

/// Settings consulted by plugins and the visibility resolver.
///
/// An order list of `None` means "not configured, use the default order".
/// `Some(vec![])` is a configured, empty list.
pub trait Settings: Send + Sync {
    /// Plugins shown directly in the main menu, in display order.
    fn main_menu_display_order(&self) -> Option<Vec<PluginId>>;

    /// Plugins shown in the submenu, in display order.
    fn submenu_display_order(&self) -> Option<Vec<PluginId>>;

    /// Whether paired plugins collapse to a generic description when only
    /// one of the pair is visible.
    fn drop_redundant_words(&self) -> bool;

    /// Whether directory paths get a trailing separator.
    fn append_separator_for_directories(&self) -> bool;

    /// Whether hidden shares may be used when computing network paths.
    fn use_hidden_shares(&self) -> bool {
        false
    }

    /// Whether UNC host names are expanded to fully-qualified names.
    fn use_fqdn(&self) -> bool {
        false
    }
}
