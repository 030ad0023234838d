//! Plugin identifiers.
//!
//! A [`PluginId`] is an opaque 128-bit value. Its only textual form is the
//! curly-braced, hyphenated, upper-case GUID rendering, e.g.
//! `{331A3B60-AF49-44F4-B30D-56ADFF6D25E8}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Length of a rendered identifier, braces included.
const BRACED_LEN: usize = 38;

/// Globally unique, version-stable identifier of a transformation plugin.
///
/// Equality is exact bit comparison; the type is `Copy` and usable as a
/// map or set key.
///
/// # Examples
///
/// ```
/// use pathcopy::PluginId;
///
/// let id: PluginId = "{331a3b60-af49-44f4-b30d-56adff6d25e8}".parse().unwrap();
/// assert_eq!(id.to_string(), "{331A3B60-AF49-44F4-B30D-56ADFF6D25E8}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluginId(Uuid);

impl PluginId {
    /// Builds an identifier from its 128-bit value.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Returns the raw 128-bit value.
    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        self.0.as_u128()
    }

    /// Parses the braced textual form.
    ///
    /// Only `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}` is accepted; hex digits
    /// may be in either case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPluginId`] if the text is not in that form.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidPluginId {
            value: text.to_string(),
            reason: reason.to_string(),
        };

        if text.len() != BRACED_LEN {
            return Err(invalid("expected 38 characters"));
        }
        let inner = text
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| invalid("missing curly braces"))?;

        Uuid::try_parse(inner)
            .map(Self)
            .map_err(|e| invalid(&e.to_string()))
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0.braced())
    }
}

impl FromStr for PluginId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PluginId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PluginId> for String {
    fn from(id: PluginId) -> Self {
        id.to_string()
    }
}
