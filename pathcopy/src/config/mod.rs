//! Configuration system for pathcopy.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `pathcopy.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of order lists and the network table
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHCOPY_*`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. Project config (`pathcopy.yaml`, nearest ancestor)
//! 5. User config (`~/.pathcopy/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use pathcopy::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathcopy::config::{Config, ConfigBuilder};
//! use pathcopy::settings::Settings;
//!
//! let custom = Config {
//!     drop_redundant_words: Some(true),
//!     submenu_order: Some(String::new()),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.drop_redundant_words());
//! assert_eq!(config.submenu_display_order(), Some(vec![]));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
pub use merger::ConfigMerger;
pub use schema::{Config, NetworkConfig, OutputFormat, ShareConfig};
pub use validator::ConfigValidator;
