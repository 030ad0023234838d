//! Operating-system collaborators consumed by the network resolver.
//!
//! The traits mirror the shape of the underlying OS facilities, including
//! their variable-length result protocol: a query is made with a buffer
//! capacity and may answer [`QueryError::MoreData`] with the capacity it
//! actually needs. The resolver drives the retries (see
//! [`super::buffer::query_growing`]).

use thiserror::Error;

/// Non-success outcome of a collaborator query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The offered buffer is too small; retry with at least `required` bytes.
    #[error("buffer too small, {required} bytes required")]
    MoreData {
        /// Capacity needed for the result, in bytes.
        required: usize,
    },

    /// The facility has no answer for this input.
    #[error("not found")]
    NotFound,

    /// The facility failed or is unavailable.
    #[error("{0}")]
    Failed(String),
}

/// Result of a collaborator query.
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Maps local paths on mapped network drives to their UNC form.
pub trait UniversalNameProvider: Send + Sync {
    /// Returns the UNC form of `path` if it lies on a mapped drive.
    ///
    /// # Errors
    ///
    /// `NotFound` if the path is not on a mapped drive, `MoreData` if the
    /// result does not fit in `capacity` bytes.
    fn universal_name(&self, path: &str, capacity: usize) -> QueryResult<String>;
}

/// Enumerates the network shares configured on the local machine.
pub trait ShareStore: Send + Sync {
    /// Share names in the store's enumeration order.
    ///
    /// # Errors
    ///
    /// `Failed` if the store cannot be opened.
    fn share_names(&self) -> QueryResult<Vec<String>>;

    /// The raw multi-line record of a share, lines separated by NUL.
    ///
    /// # Errors
    ///
    /// `NotFound` for unknown shares, `MoreData` if the record does not fit
    /// in `capacity` bytes.
    fn share_record(&self, name: &str, capacity: usize) -> QueryResult<String>;
}

/// Resolves host names to canonical fully-qualified names.
///
/// Lookups happen between [`startup`](Self::startup) and
/// [`cleanup`](Self::cleanup); every successful startup is paired with
/// exactly one cleanup.
pub trait HostResolver: Send + Sync {
    /// Acquires the network subsystem.
    ///
    /// # Errors
    ///
    /// `Failed` if the subsystem cannot be initialized.
    fn startup(&self) -> QueryResult<()>;

    /// Releases the network subsystem.
    fn cleanup(&self);

    /// Canonical name of `host`, or `None` if it cannot be resolved.
    fn canonical_name(&self, host: &str) -> Option<String>;
}

/// Provides the local computer name.
pub trait ComputerNameSource: Send + Sync {
    /// The computer name as reported by the system, in any case.
    fn computer_name(&self) -> Option<String>;
}

/// Size in bytes of `text` as a NUL-terminated UTF-16 buffer.
#[must_use]
pub fn wide_size(text: &str) -> usize {
    (text.encode_utf16().count() + 1) * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_size() {
        assert_eq!(wide_size(""), 2);
        assert_eq!(wide_size("abc"), 8);
        assert_eq!(wide_size("\u{1F600}"), 6);
    }

    #[test]
    fn test_query_error_display() {
        assert_eq!(
            QueryError::MoreData { required: 64 }.to_string(),
            "buffer too small, 64 bytes required"
        );
        assert_eq!(QueryError::NotFound.to_string(), "not found");
    }
}
