//! Error types for the pathcopy library.
//!
//! This module provides the error hierarchy for the fallible parts of the
//! library, using `thiserror` for ergonomic error handling. Path resolution
//! itself never returns these errors to callers: resolution steps log the
//! failure and leave the path unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathcopy error.
///
/// # Examples
///
/// ```
/// use pathcopy::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathcopy library.
#[derive(Debug, Error)]
pub enum Error {
    /// A plugin identifier could not be parsed from its textual form.
    #[error("invalid plugin identifier '{value}': {reason}")]
    InvalidPluginId {
        /// The text that failed to parse.
        value: String,
        /// The reason the text is not a valid identifier.
        reason: String,
    },

    /// An unsigned integer list entry could not be parsed.
    #[error("invalid integer '{value}' at position {position}")]
    InvalidInteger {
        /// The text that failed to parse.
        value: String,
        /// Zero-based position of the entry in its list.
        position: usize,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// No plugin matches the requested identifier or name.
    #[error("unknown plugin: {plugin}")]
    UnknownPlugin {
        /// The identifier or name that was looked up.
        plugin: String,
    },

    /// A collaborator query (name service, share store) failed.
    #[error("{facility} query failed: {reason}")]
    QueryFailed {
        /// The facility that was queried.
        facility: &'static str,
        /// Details about the failure.
        reason: String,
    },

    /// A variable-length query asked for more buffer space than allowed.
    #[error("{facility} requested {requested} bytes, limit is {limit}")]
    BufferLimitExceeded {
        /// The facility that was queried.
        facility: &'static str,
        /// The size requested by the facility.
        requested: usize,
        /// The configured upper bound.
        limit: usize,
    },

    /// The network subsystem could not be initialized.
    #[error("network subsystem unavailable: {reason}")]
    NetworkUnavailable {
        /// Details about the failure.
        reason: String,
    },
}

impl Error {
    /// Check if error indicates that a lookup found nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcopy::Error;
    ///
    /// let err = Error::UnknownPlugin { plugin: "nope".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownPlugin { .. })
    }

    /// Check if error comes from a malformed textual value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcopy::Error;
    ///
    /// let err = Error::InvalidInteger { value: "x".into(), position: 0 };
    /// assert!(err.is_malformed_input());
    /// ```
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidPluginId { .. } | Self::InvalidInteger { .. }
        )
    }
}
