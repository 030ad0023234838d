#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathcopy
//!
//! A library of pluggable path transformations for "copy path" style tools.
//!
//! Each transformation is a [`Plugin`] carrying a capability set. Plugins
//! turn a file path into another textual form: the long or short path, the
//! containing folder, the network (UNC) form, a POSIX rendering.
//!
//! ## Core Types
//!
//! - [`PluginId`]: Stable plugin identifier with a braced textual form
//! - [`codec`]: Compact list encoding used to persist menu orders
//! - [`NetworkResolver`]: Mapped drive, share, hidden share and FQDN lookups
//! - [`Plugin`] and [`PluginContext`]: The capability-flag plugin model
//! - [`visibility`]: Which plugins are shown, and in which order
//! - [`Config`]: Layered YAML configuration implementing [`Settings`]
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use pathcopy::codec::{decode_plugin_ids, encode_plugin_ids, DEFAULT_SEPARATOR};
//! use pathcopy::plugin::builtin;
//! use pathcopy::{BuiltinRegistry, Config, PluginRegistry};
//!
//! let registry = BuiltinRegistry::new();
//! let order = encode_plugin_ids(&[builtin::LONG_PATH, builtin::LONG_UNC_PATH], DEFAULT_SEPARATOR);
//! let ids = decode_plugin_ids(&order, DEFAULT_SEPARATOR);
//! assert_eq!(registry.plugin(ids[0]).unwrap().name(), "long-path");
//!
//! let config = Config { main_menu_order: Some(order), ..Default::default() };
//! assert!(pathcopy::visibility::is_shown(&config, &registry, builtin::LONG_UNC_PATH));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod network;
pub mod path;
pub mod plugin;
pub mod registry;
pub mod settings;
pub mod visibility;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use network::{NetworkResolver, NetworkTable};
pub use plugin::{Capability, CapabilitySet, Plugin, PluginContext, PluginId};
pub use registry::{BuiltinRegistry, PluginRegistry};
pub use settings::Settings;
pub use visibility::MenuLayout;
