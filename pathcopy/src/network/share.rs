//! Share records reconstructed from the share store.

use crate::path::{is_separator, strip_path_prefix, UNC_PREFIX};

/// Line prefix holding the share's filesystem path.
pub const SHARE_PATH_PREFIX: &str = "Path=";

/// Suffix marking hidden (administrative) shares.
pub const HIDDEN_SHARE_SUFFIX: char = '$';

/// Finds the line of a NUL-separated multi-string that starts with `prefix`
/// and returns the rest of that line.
///
/// Scanning stops at the first empty line, which terminates the value.
///
/// # Examples
///
/// ```
/// use pathcopy::network::share::multi_string_line_beginning_with;
///
/// let record = "MaxUses=4294967295\0Path=C:\\Shares\\Data\0Type=0\0\0";
/// assert_eq!(multi_string_line_beginning_with(record, "Path="), Some("C:\\Shares\\Data"));
/// assert_eq!(multi_string_line_beginning_with(record, "Remark="), None);
/// ```
#[must_use]
pub fn multi_string_line_beginning_with<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    value
        .split('\0')
        .take_while(|line| !line.is_empty())
        .find_map(|line| line.strip_prefix(prefix))
}

/// Whether a share name designates a hidden share.
#[must_use]
pub fn is_hidden_share(name: &str) -> bool {
    name.ends_with(HIDDEN_SHARE_SUFFIX)
}

/// A network share, derived transiently from its store record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRecord {
    /// Share name, e.g. `Data` or `C$`.
    pub name: String,
    /// Local filesystem path exposed by the share.
    pub path: String,
    /// Whether the share is hidden.
    pub hidden: bool,
}

impl ShareRecord {
    /// Rebuilds a share from its name and raw record.
    ///
    /// Returns `None` if the record has no non-empty `Path=` line.
    #[must_use]
    pub fn from_record(name: &str, record: &str) -> Option<Self> {
        let path = multi_string_line_beginning_with(record, SHARE_PATH_PREFIX)?;
        if path.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            path: path.to_string(),
            hidden: is_hidden_share(name),
        })
    }

    /// Rewrites `path` as `\\<computer>\<share>\<remainder>` if it lies
    /// inside this share.
    ///
    /// Exactly one separator joins the share name and the remainder, whether
    /// or not the stored share path ends in one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcopy::network::ShareRecord;
    ///
    /// let share = ShareRecord::from_record("Data", "Path=C:\\Shares\\Data\0\0").unwrap();
    /// assert_eq!(
    ///     share.rewrite("C:\\Shares\\Data\\report.txt", "host").as_deref(),
    ///     Some("\\\\host\\Data\\report.txt")
    /// );
    /// ```
    #[must_use]
    pub fn rewrite(&self, path: &str, computer_name: &str) -> Option<String> {
        let remainder = strip_path_prefix(path, &self.path)?;
        let mut unc = format!("{UNC_PREFIX}{computer_name}\\{}", self.name);
        if !remainder.is_empty() {
            if !remainder.starts_with(is_separator) {
                unc.push('\\');
            }
            unc.push_str(remainder);
        }
        Some(unc)
    }
}
