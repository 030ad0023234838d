//! The plugin value and its construction.
//!
//! A [`Plugin`] is immutable after construction. Its behaviors are stored as
//! shared closures and optional capability data rather than trait overrides:
//! a short-form plugin is built by composing the long-form transform with a
//! compaction step, not by subclassing.

use std::fmt;
use std::sync::Arc;

use crate::network::NetworkResolver;
use crate::plugin::capability::{Capability, CapabilitySet};
use crate::plugin::forms::PathForms;
use crate::plugin::PluginId;
use crate::registry::PluginRegistry;
use crate::settings::Settings;
use crate::visibility;

/// Collaborators available to a plugin for a single call.
///
/// Everything here is borrowed; plugins keep no per-call state.
#[derive(Clone, Copy)]
pub struct PluginContext<'a> {
    /// User settings.
    pub settings: &'a dyn Settings,
    /// Registry used to evaluate counterpart visibility.
    pub registry: &'a dyn PluginRegistry,
    /// Network path resolution steps.
    pub network: &'a NetworkResolver,
    /// Long/short name conversions.
    pub forms: &'a dyn PathForms,
}

impl<'a> PluginContext<'a> {
    /// Bundles the collaborators for a call.
    #[must_use]
    pub fn new(
        settings: &'a dyn Settings,
        registry: &'a dyn PluginRegistry,
        network: &'a NetworkResolver,
        forms: &'a dyn PathForms,
    ) -> Self {
        Self {
            settings,
            registry,
            network,
            forms,
        }
    }
}

/// Path transformation: input path to output path.
pub type TransformFn = Arc<dyn Fn(&str, &PluginContext<'_>) -> String + Send + Sync>;

/// Enabled-state query: `(parent_path, file, context) -> enabled`.
pub type EnabledFn = Arc<dyn Fn(&str, &str, &PluginContext<'_>) -> bool + Send + Sync>;

/// Membership of a plugin in a menu group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupInfo {
    /// Group identifier. Plugins sharing it are displayed together.
    pub id: u32,
    /// Position inside the group.
    pub position: u32,
}

#[derive(Debug, Clone, Default)]
struct Descriptions {
    normal: String,
    androgynous: Option<String>,
    help: Option<String>,
}

/// A path transformation plugin.
#[derive(Clone)]
pub struct Plugin {
    id: PluginId,
    name: String,
    descriptions: Descriptions,
    transform: TransformFn,
    group: Option<GroupInfo>,
    enabled: Option<EnabledFn>,
    counterpart: Option<PluginId>,
    separator: bool,
}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.descriptions.normal)
            .field("capabilities", &self.capabilities())
            .finish_non_exhaustive()
    }
}

impl Plugin {
    /// Starts building a plugin.
    #[must_use]
    pub fn builder(id: PluginId, name: impl Into<String>) -> PluginBuilder {
        PluginBuilder::new(id, name)
    }

    /// Builds a menu separator placeholder.
    ///
    /// Separators have an empty description and transform every path to
    /// the empty string.
    #[must_use]
    pub fn separator(id: PluginId) -> Self {
        Self {
            id,
            name: "separator".to_string(),
            descriptions: Descriptions::default(),
            transform: Arc::new(|_, _| String::new()),
            group: None,
            enabled: None,
            counterpart: None,
            separator: true,
        }
    }

    /// The plugin identifier.
    #[must_use]
    pub const fn id(&self) -> PluginId {
        self.id
    }

    /// Short machine name, e.g. `long-path`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a separator placeholder.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        self.separator
    }

    /// The capabilities this plugin supports.
    #[must_use]
    pub fn capabilities(&self) -> CapabilitySet {
        let mut caps = CapabilitySet::empty();
        if self.separator {
            caps.insert(Capability::Separator);
            return caps;
        }
        caps.insert(Capability::Describable);
        if self.group.is_some() {
            caps.insert(Capability::GroupAssignable);
        }
        if self.enabled.is_some() {
            caps.insert(Capability::StateQueryable);
        }
        if self.counterpart.is_some() && self.descriptions.androgynous.is_some() {
            caps.insert(Capability::Androgynous);
        }
        caps
    }

    /// Checks for a single capability.
    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(capability)
    }

    /// Transforms a path.
    #[must_use]
    pub fn transform_path(&self, path: &str, ctx: &PluginContext<'_>) -> String {
        (self.transform)(path, ctx)
    }

    /// Group membership, if the plugin is group-assignable.
    #[must_use]
    pub const fn group(&self) -> Option<GroupInfo> {
        self.group
    }

    /// Whether the plugin is enabled for `file` located in `parent_path`.
    ///
    /// Plugins without the state capability are always enabled.
    #[must_use]
    pub fn is_enabled_for(&self, parent_path: &str, file: &str, ctx: &PluginContext<'_>) -> bool {
        self.enabled
            .as_ref()
            .map_or(true, |enabled| enabled(parent_path, file, ctx))
    }

    /// The plugin whose visibility drives this plugin's description.
    #[must_use]
    pub const fn counterpart(&self) -> Option<PluginId> {
        self.counterpart
    }

    /// Whether the merged description applies right now.
    ///
    /// True exactly when the plugin is androgynous-capable, redundant words
    /// are dropped, and the counterpart is not shown in any menu.
    #[must_use]
    pub fn is_androgynous(&self, ctx: &PluginContext<'_>) -> bool {
        if !self.supports(Capability::Androgynous) {
            return false;
        }
        match self.counterpart {
            Some(counterpart) => {
                ctx.settings.drop_redundant_words()
                    && !visibility::is_shown(ctx.settings, ctx.registry, counterpart)
            }
            None => false,
        }
    }

    /// The description to display, merged or normal depending on context.
    #[must_use]
    pub fn description(&self, ctx: &PluginContext<'_>) -> &str {
        match &self.descriptions.androgynous {
            Some(merged) if self.is_androgynous(ctx) => merged,
            _ => &self.descriptions.normal,
        }
    }

    /// The description used when the counterpart is visible.
    #[must_use]
    pub fn normal_description(&self) -> &str {
        &self.descriptions.normal
    }

    /// Optional help text.
    #[must_use]
    pub fn help_text(&self) -> Option<&str> {
        self.descriptions.help.as_deref()
    }
}

/// Builder for [`Plugin`].
///
/// # Examples
///
/// ```
/// use pathcopy::plugin::{Capability, Plugin, PluginId};
///
/// let plugin = Plugin::builder(PluginId::from_u128(1), "suffix")
///     .description("Copy With Suffix")
///     .group(0x7470_6731, 0)
///     .transform(|path, _| format!("{path}1a"))
///     .build();
///
/// assert!(plugin.supports(Capability::GroupAssignable));
/// assert!(!plugin.supports(Capability::Androgynous));
/// ```
pub struct PluginBuilder {
    plugin: Plugin,
}

impl PluginBuilder {
    /// Starts a plugin with an identity transform.
    #[must_use]
    pub fn new(id: PluginId, name: impl Into<String>) -> Self {
        Self {
            plugin: Plugin {
                id,
                name: name.into(),
                descriptions: Descriptions::default(),
                transform: Arc::new(|path, _| path.to_string()),
                group: None,
                enabled: None,
                counterpart: None,
                separator: false,
            },
        }
    }

    /// Sets the normal description.
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.plugin.descriptions.normal = text.into();
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.plugin.descriptions.help = Some(text.into());
        self
    }

    /// Pairs the plugin with a counterpart and a merged description.
    #[must_use]
    pub fn androgynous(mut self, counterpart: PluginId, merged: impl Into<String>) -> Self {
        self.plugin.counterpart = Some(counterpart);
        self.plugin.descriptions.androgynous = Some(merged.into());
        self
    }

    /// Assigns the plugin to a group.
    #[must_use]
    pub fn group(mut self, id: u32, position: u32) -> Self {
        self.plugin.group = Some(GroupInfo { id, position });
        self
    }

    /// Sets the path transformation.
    #[must_use]
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &PluginContext<'_>) -> String + Send + Sync + 'static,
    {
        self.plugin.transform = Arc::new(f);
        self
    }

    /// Sets a shared path transformation.
    #[must_use]
    pub fn shared_transform(mut self, f: TransformFn) -> Self {
        self.plugin.transform = f;
        self
    }

    /// Adds an enabled-state query.
    #[must_use]
    pub fn enabled_when<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str, &PluginContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.plugin.enabled = Some(Arc::new(f));
        self
    }

    /// Finishes the plugin.
    #[must_use]
    pub fn build(self) -> Plugin {
        self.plugin
    }
}
