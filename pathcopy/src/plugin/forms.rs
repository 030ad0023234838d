//! Long and short path name forms.
//!
//! Converting between a path's long form and its compacted short form is an
//! operating-system service. [`AliasForms`] implements it from a table of
//! known long/short prefix pairs, which is how the CLI is configured.

use std::collections::BTreeMap;

use crate::path::{is_separator, strip_path_prefix};

/// Converts paths between long and short forms.
///
/// `None` means the form could not be computed; callers keep the input.
pub trait PathForms: Send + Sync {
    /// Expands every compacted component of `path`.
    fn long_form(&self, path: &str) -> Option<String>;

    /// Compacts `path` to its short form.
    fn short_form(&self, path: &str) -> Option<String>;
}

/// Path forms that leave every path unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityForms;

impl PathForms for IdentityForms {
    fn long_form(&self, _path: &str) -> Option<String> {
        None
    }

    fn short_form(&self, _path: &str) -> Option<String> {
        None
    }
}

/// Path forms backed by a table of `long prefix -> short prefix` aliases.
///
/// The longest alias whose prefix matches on a component boundary wins.
///
/// # Examples
///
/// ```
/// use pathcopy::plugin::{AliasForms, PathForms};
///
/// let forms = AliasForms::new([(r"C:\Program Files", r"C:\PROGRA~1")]);
/// assert_eq!(
///     forms.short_form(r"C:\Program Files\App\app.exe").as_deref(),
///     Some(r"C:\PROGRA~1\App\app.exe")
/// );
/// assert_eq!(
///     forms.long_form(r"C:\PROGRA~1\App").as_deref(),
///     Some(r"C:\Program Files\App")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct AliasForms {
    aliases: Vec<(String, String)>,
}

impl AliasForms {
    /// Creates the table from `(long, short)` pairs.
    pub fn new<I, L, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (L, S)>,
        L: Into<String>,
        S: Into<String>,
    {
        let aliases = aliases
            .into_iter()
            .map(|(long, short)| {
                (
                    trim_trailing_separator(long.into()),
                    trim_trailing_separator(short.into()),
                )
            })
            .collect();
        Self { aliases }
    }

    /// Creates the table from a configuration map.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::new(map.iter().map(|(l, s)| (l.clone(), s.clone())))
    }

    /// Number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    fn rewrite(&self, path: &str, from_long: bool) -> Option<String> {
        let mut candidates: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .map(|(long, short)| {
                if from_long {
                    (long.as_str(), short.as_str())
                } else {
                    (short.as_str(), long.as_str())
                }
            })
            .collect();
        candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        candidates.into_iter().find_map(|(from, to)| {
            strip_path_prefix(path, from).map(|rest| format!("{to}{rest}"))
        })
    }
}

fn trim_trailing_separator(mut s: String) -> String {
    // Keep "C:\" intact; a bare drive needs its separator.
    while s.len() > 3 && s.ends_with(is_separator) {
        s.pop();
    }
    s
}

impl PathForms for AliasForms {
    fn long_form(&self, path: &str) -> Option<String> {
        self.rewrite(path, false)
    }

    fn short_form(&self, path: &str) -> Option<String> {
        self.rewrite(path, true)
    }
}
