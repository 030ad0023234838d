//! Plugin capability model.
//!
//! A plugin is a value, not a type hierarchy: an identifier, a transform
//! closure, and whichever optional capabilities it was built with. Callers
//! query capabilities with [`Plugin::supports`] instead of downcasting.
//!
//! # Examples
//!
//! ```
//! use pathcopy::plugin::{builtin, Capability};
//!
//! let plugins = builtin::plugins();
//! let long_path = plugins.iter().find(|p| p.id() == builtin::LONG_PATH).unwrap();
//! assert!(long_path.supports(Capability::Androgynous));
//! assert_eq!(long_path.counterpart(), Some(builtin::SHORT_PATH));
//! ```

pub mod builtin;
pub mod capability;
pub mod forms;
pub mod id;
pub mod model;

pub use capability::{Capability, CapabilitySet};
pub use forms::{AliasForms, IdentityForms, PathForms};
pub use id::PluginId;
pub use model::{EnabledFn, GroupInfo, Plugin, PluginBuilder, PluginContext, TransformFn};
