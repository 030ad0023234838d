//! Configuration validation.
//!
//! Loading is lenient about order lists (malformed entries are dropped at
//! read time); validation is where they are reported.

use crate::codec::{try_decode_plugin_ids, DEFAULT_SEPARATOR};
use crate::config::schema::{Config, NetworkConfig, ShareConfig};
use crate::error::{Error, Result};
use crate::network::share::{multi_string_line_beginning_with, SHARE_PATH_PREFIX};
use std::collections::HashSet;

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use pathcopy::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let broken = Config { main_menu_order: Some("{nope}".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&broken).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref order) = config.main_menu_order {
            Self::validate_order("main_menu_order", order)?;
        }

        if let Some(ref order) = config.submenu_order {
            Self::validate_order("submenu_order", order)?;
        }

        if let Some(ref name) = config.computer_name {
            Self::validate_identifier("computer_name", name)?;
        }

        if let Some(ref network) = config.network {
            Self::validate_network(network)?;
        }

        if let Some(ref aliases) = config.short_names {
            for (long, short) in aliases {
                Self::validate_identifier("short_names", long)?;
                Self::validate_identifier(&format!("short_names.{long}"), short)?;
            }
        }

        Ok(())
    }

    fn validate_order(field: &str, order: &str) -> Result<()> {
        try_decode_plugin_ids(order, DEFAULT_SEPARATOR).map_err(|e| Error::Validation {
            field: field.into(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Checks that the value is non-empty after trimming and has no NULs.
    fn validate_identifier(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    fn validate_network(network: &NetworkConfig) -> Result<()> {
        let mut names = HashSet::new();
        for (index, share) in network.shares.iter().flatten().enumerate() {
            let field = format!("network.shares[{index}]");
            Self::validate_share(&field, share)?;
            if !names.insert(share.name.to_lowercase()) {
                return Err(Error::Validation {
                    field,
                    message: format!("Duplicate share name: {}", share.name),
                });
            }
        }

        for (drive, unc) in network.mapped_drives.iter().flatten() {
            let field = format!("network.mapped_drives.{drive}");
            let mut chars = drive.chars();
            let is_drive = matches!(
                (chars.next(), chars.next()),
                (Some(letter), Some(':') | None) if letter.is_ascii_alphabetic()
            );
            if !is_drive {
                return Err(Error::Validation {
                    field,
                    message: "Expected a drive letter such as Z:".into(),
                });
            }
            if !crate::path::is_unc_path(unc) {
                return Err(Error::Validation {
                    field,
                    message: format!("Not a UNC path: {unc}"),
                });
            }
        }

        for (host, fqdn) in network.hosts.iter().flatten() {
            Self::validate_identifier("network.hosts", host)?;
            Self::validate_identifier(&format!("network.hosts.{host}"), fqdn)?;
        }

        Ok(())
    }

    fn validate_share(field: &str, share: &ShareConfig) -> Result<()> {
        Self::validate_identifier(&format!("{field}.name"), &share.name)?;

        let Some(record) = share.effective_record() else {
            return Err(Error::Validation {
                field: field.into(),
                message: "Share needs a path or a record".into(),
            });
        };
        let normalized = record.replace('\n', "\0");
        match multi_string_line_beginning_with(&normalized, SHARE_PATH_PREFIX) {
            Some(path) if !path.trim().is_empty() => Ok(()),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Share record has no {SHARE_PATH_PREFIX} line"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn share(name: &str, path: Option<&str>, record: Option<&str>) -> ShareConfig {
        ShareConfig {
            name: name.into(),
            path: path.map(Into::into),
            record: record.map(Into::into),
        }
    }

    fn with_shares(shares: Vec<ShareConfig>) -> Config {
        Config {
            network: Some(NetworkConfig {
                shares: Some(shares),
                ..NetworkConfig::default()
            }),
            ..Config::default()
        }
    }

    fn field_of(result: Result<()>) -> String {
        match result {
            Err(Error::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_orders() {
        let valid = Config {
            main_menu_order: Some(
                "{331A3B60-AF49-44F4-B30D-56ADFF6D25E8},{891F9E3E-0B70-49FD-A86C-53B21C6193C7}"
                    .into(),
            ),
            submenu_order: Some(String::new()),
            ..Config::default()
        };
        assert!(ConfigValidator::validate(&valid).is_ok());

        let invalid = Config {
            submenu_order: Some("{331A3B60-AF49-44F4-B30D-56ADFF6D25E8},garbage".into()),
            ..Config::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&invalid)), "submenu_order");
    }

    #[test]
    fn test_shares() {
        let ok = with_shares(vec![
            share("Data", Some(r"C:\Data"), None),
            share("Logs", None, Some("Type=0\nPath=D:\\Logs")),
        ]);
        assert!(ConfigValidator::validate(&ok).is_ok());

        let missing_path = with_shares(vec![share("Data", None, Some("Type=0"))]);
        assert_eq!(field_of(ConfigValidator::validate(&missing_path)), "network.shares[0]");

        let neither = with_shares(vec![share("Data", None, None)]);
        assert!(ConfigValidator::validate(&neither).is_err());

        let unnamed = with_shares(vec![share(" ", Some(r"C:\x"), None)]);
        assert_eq!(
            field_of(ConfigValidator::validate(&unnamed)),
            "network.shares[0].name"
        );

        let duplicate = with_shares(vec![
            share("Data", Some(r"C:\a"), None),
            share("DATA", Some(r"C:\b"), None),
        ]);
        assert_eq!(field_of(ConfigValidator::validate(&duplicate)), "network.shares[1]");
    }

    #[test]
    fn test_mapped_drives() {
        let mut drives = BTreeMap::new();
        drives.insert("Z:".to_string(), r"\\files\team".to_string());
        let mut config = Config {
            network: Some(NetworkConfig {
                mapped_drives: Some(drives.clone()),
                ..NetworkConfig::default()
            }),
            ..Config::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());

        drives.insert("Drive".to_string(), r"\\files\team".to_string());
        config.network.as_mut().unwrap().mapped_drives = Some(drives.clone());
        assert!(ConfigValidator::validate(&config).is_err());

        drives.remove("Drive");
        drives.insert("Y".to_string(), r"C:\local".to_string());
        config.network.as_mut().unwrap().mapped_drives = Some(drives);
        assert_eq!(
            field_of(ConfigValidator::validate(&config)),
            "network.mapped_drives.Y"
        );
    }

    #[test]
    fn test_empty_computer_name() {
        let config = Config {
            computer_name: Some(String::new()),
            ..Config::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "computer_name");
    }
}
