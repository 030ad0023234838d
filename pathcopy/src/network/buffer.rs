//! Grow-and-retry driver for variable-length queries.

use crate::error::{Error, Result};
use crate::network::provider::{QueryError, QueryResult};

/// Capacity offered on the first attempt, in bytes.
pub const INITIAL_BUFFER_SIZE: usize = 1024;

/// Largest capacity ever offered, in bytes.
pub const MAX_BUFFER_SIZE: usize = 1 << 20;

/// Runs `query` with growing capacities until it stops asking for more.
///
/// Each `MoreData` answer grows the capacity to at least the requested size
/// and at least double the previous one, so the loop always makes progress.
/// Requests beyond `limit` abort with [`Error::BufferLimitExceeded`].
///
/// Returns `Ok(None)` when the facility answers `NotFound`.
///
/// # Errors
///
/// Returns [`Error::QueryFailed`] if the facility fails and
/// [`Error::BufferLimitExceeded`] if it asks for too much.
///
/// # Examples
///
/// ```
/// use pathcopy::network::buffer::{query_growing, MAX_BUFFER_SIZE};
/// use pathcopy::network::QueryError;
///
/// let value = query_growing("demo", MAX_BUFFER_SIZE, |capacity| {
///     if capacity < 4000 {
///         Err(QueryError::MoreData { required: 4000 })
///     } else {
///         Ok(capacity)
///     }
/// })
/// .unwrap();
/// assert_eq!(value, Some(4000));
/// ```
pub fn query_growing<T, F>(facility: &'static str, limit: usize, mut query: F) -> Result<Option<T>>
where
    F: FnMut(usize) -> QueryResult<T>,
{
    let mut capacity = INITIAL_BUFFER_SIZE.min(limit);
    loop {
        match query(capacity) {
            Ok(value) => return Ok(Some(value)),
            Err(QueryError::NotFound) => return Ok(None),
            Err(QueryError::Failed(reason)) => {
                return Err(Error::QueryFailed { facility, reason });
            }
            Err(QueryError::MoreData { required }) => {
                let next = required.max(capacity.saturating_mul(2));
                if required > limit || capacity >= limit {
                    return Err(Error::BufferLimitExceeded {
                        facility,
                        requested: required,
                        limit,
                    });
                }
                log::debug!("{facility}: growing buffer from {capacity} to {next} bytes");
                capacity = next.min(limit);
            }
        }
    }
}
