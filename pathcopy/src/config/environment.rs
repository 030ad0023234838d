//! Environment variable handling for configuration overrides.
//!
//! `PATHCOPY_*` variables override values from configuration files.

use crate::codec::{try_decode_plugin_ids, DEFAULT_SEPARATOR};
use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathcopy::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable is not a recognized boolean or
    /// an order variable holds a malformed identifier.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(order) = Self::order_var("PATHCOPY_MAIN_MENU_ORDER")? {
            config.main_menu_order = Some(order);
        }

        if let Some(order) = Self::order_var("PATHCOPY_SUBMENU_ORDER")? {
            config.submenu_order = Some(order);
        }

        if let Some(val) = Self::bool_var("PATHCOPY_DROP_REDUNDANT_WORDS")? {
            config.drop_redundant_words = Some(val);
        }

        if let Some(val) = Self::bool_var("PATHCOPY_APPEND_SEPARATOR_FOR_DIRECTORIES")? {
            config.append_separator_for_directories = Some(val);
        }

        if let Some(val) = Self::bool_var("PATHCOPY_USE_HIDDEN_SHARES")? {
            config.use_hidden_shares = Some(val);
        }

        if let Some(val) = Self::bool_var("PATHCOPY_USE_FQDN")? {
            config.use_fqdn = Some(val);
        }

        if let Ok(name) = env::var("PATHCOPY_COMPUTER_NAME") {
            config.computer_name = Some(name);
        }

        Ok(())
    }

    fn bool_var(name: &str) -> Result<Option<bool>> {
        env::var(name)
            .ok()
            .map(|val| Self::parse_bool(name, &val))
            .transpose()
    }

    fn order_var(name: &str) -> Result<Option<String>> {
        let Ok(val) = env::var(name) else {
            return Ok(None);
        };
        try_decode_plugin_ids(&val, DEFAULT_SEPARATOR).map_err(|e| Error::Validation {
            field: name.into(),
            message: e.to_string(),
        })?;
        Ok(Some(val))
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
