//! Capability tags carried by plugins.

use std::fmt;

/// An optional behavior a plugin may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Has a description and help text.
    Describable,
    /// Belongs to a plugin group with a position inside it.
    GroupAssignable,
    /// Can report whether it is enabled for a given file.
    StateQueryable,
    /// Switches to a merged description when its counterpart is hidden.
    Androgynous,
    /// Placeholder that renders as a menu separator.
    Separator,
}

impl Capability {
    /// All capabilities, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Describable,
        Self::GroupAssignable,
        Self::StateQueryable,
        Self::Androgynous,
        Self::Separator,
    ];

    const fn bit(self) -> u8 {
        match self {
            Self::Describable => 1,
            Self::GroupAssignable => 1 << 1,
            Self::StateQueryable => 1 << 2,
            Self::Androgynous => 1 << 3,
            Self::Separator => 1 << 4,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Describable => write!(f, "describable"),
            Self::GroupAssignable => write!(f, "group"),
            Self::StateQueryable => write!(f, "state"),
            Self::Androgynous => write!(f, "androgynous"),
            Self::Separator => write!(f, "separator"),
        }
    }
}

/// A set of [`Capability`] tags.
///
/// # Examples
///
/// ```
/// use pathcopy::plugin::{Capability, CapabilitySet};
///
/// let mut caps = CapabilitySet::empty();
/// caps.insert(Capability::Describable);
/// assert!(caps.contains(Capability::Describable));
/// assert!(!caps.contains(Capability::Separator));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    /// A set with no capabilities.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Adds a capability.
    pub fn insert(&mut self, capability: Capability) {
        self.0 |= capability.bit();
    }

    /// Checks for a capability.
    #[must_use]
    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Iterates over the contained capabilities.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = Self::empty();
        for capability in iter {
            set.insert(capability);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_and_iterate() {
        let set: CapabilitySet = [Capability::Separator, Capability::Describable]
            .into_iter()
            .collect();
        let listed: Vec<_> = set.iter().collect();
        assert_eq!(listed, vec![Capability::Describable, Capability::Separator]);
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(CapabilitySet::empty().iter().count(), 0);
        assert_eq!(CapabilitySet::default(), CapabilitySet::empty());
    }
}
