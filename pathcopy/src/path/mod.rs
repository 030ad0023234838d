//! Path string helpers.
//!
//! Paths handled by this crate are Windows-style strings: drive-rooted
//! (`C:\...`), UNC (`\\host\share\...`) or relative. Both `\` and `/` are
//! accepted as separators; output uses `\` unless the input only uses `/`.
//!
//! # Examples
//!
//! ```
//! use pathcopy::path::{extract_folder_from_path, is_unc_path};
//!
//! assert!(is_unc_path(r"\\server\share\file.txt"));
//! assert_eq!(extract_folder_from_path(r"C:\Foo\Bar.txt").as_deref(), Some(r"C:\Foo"));
//! assert_eq!(extract_folder_from_path(r"C:\Bar.txt").as_deref(), Some(r"C:\"));
//! ```

use std::path::Path;

/// Prefix of every UNC path.
pub const UNC_PREFIX: &str = r"\\";

/// Whether `c` separates path components.
#[must_use]
pub const fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Whether `path` ends with a separator.
#[must_use]
pub fn ends_with_separator(path: &str) -> bool {
    path.ends_with(is_separator)
}

/// The separator to use when extending `path`.
#[must_use]
pub fn separator_for(path: &str) -> char {
    if path.contains('/') && !path.contains('\\') {
        '/'
    } else {
        '\\'
    }
}

/// Checks if `path` is a UNC path of the form `\\server\share[\...]`.
///
/// The server segment must be non-empty and followed by a separator, so a
/// bare `\\server` is not a UNC path even though it names a host.
#[must_use]
pub fn is_unc_path(path: &str) -> bool {
    path.strip_prefix(UNC_PREFIX)
        .and_then(|rest| rest.find('\\'))
        .is_some_and(|pos| pos > 0)
}

/// Returns the parent folder of a file or folder path.
///
/// `C:\Foo\Bar.txt` gives `C:\Foo`. When only a drive root would remain the
/// separator is kept: `C:\Bar.txt` gives `C:\`. Returns `None` if the path
/// has no separator.
#[must_use]
pub fn extract_folder_from_path(path: &str) -> Option<String> {
    let last = path.rfind(is_separator)?;
    let end = if last <= 2 { last + 1 } else { last };
    Some(path[..end].to_string())
}

/// Returns the last component of `path`.
#[must_use]
pub fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    trimmed
        .rfind(is_separator)
        .map_or(trimmed, |pos| &trimmed[pos + 1..])
}

/// Strips `prefix` from `path` on a component boundary.
///
/// The returned remainder is empty or starts with a separator, unless
/// `prefix` itself ends with one. `C:\Data` is a prefix of `C:\Data\x` but
/// not of `C:\Database`.
#[must_use]
pub fn strip_path_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    let rest = path.strip_prefix(prefix)?;
    if ends_with_separator(prefix) || rest.is_empty() || rest.starts_with(is_separator) {
        Some(rest)
    } else {
        None
    }
}

/// Whether `path` names an existing directory.
#[must_use]
pub fn is_directory(path: &str) -> bool {
    Path::new(path).is_dir()
}
