//! CLI command implementations.
//!
//! - `transform`: Transform paths with a plugin
//! - `list`: List plugins and their visibility
//! - `resolve`: Show the network resolution steps for a path
//! - `order`: Encode and decode plugin order lists
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod list;
pub mod order;
pub mod resolve;
pub mod transform;
pub mod validate;

pub use completions::CompletionsCommand;
pub use list::ListCommand;
pub use order::OrderCommand;
pub use resolve::ResolveCommand;
pub use transform::TransformCommand;
pub use validate::ValidateCommand;
