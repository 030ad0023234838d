//! Network path resolution.
//!
//! Turns local paths into network (UNC) forms through four independent
//! steps, each of which either yields a replacement path or leaves the input
//! alone:
//!
//! 1. mapped drive to UNC ([`NetworkResolver::resolve_mapped_drive`]),
//! 2. local share lookup ([`NetworkResolver::resolve_local_share`]),
//! 3. administrative drive share ([`NetworkResolver::resolve_hidden_share`]),
//! 4. host name to FQDN ([`NetworkResolver::normalize_fqdn`]).
//!
//! The operating system facilities behind these steps are traits in
//! [`provider`]. [`NetworkTable`] implements all of them from configuration.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use pathcopy::network::{NetworkResolver, NetworkTable};
//!
//! let table = NetworkTable::new()
//!     .with_computer_name("WORKSTATION")
//!     .with_share("Data", "Path=C:\\Shares\\Data");
//! let resolver = NetworkResolver::from_table(Arc::new(table));
//!
//! assert_eq!(
//!     resolver.resolve_local_share("C:\\Shares\\Data\\report.txt", false).as_deref(),
//!     Some("\\\\workstation\\Data\\report.txt")
//! );
//! ```

pub mod buffer;
pub mod computer_name;
pub mod provider;
pub mod resolver;
pub mod share;
pub mod table;

pub use computer_name::{ComputerName, FixedComputerName, SystemComputerName};
pub use provider::{
    ComputerNameSource, HostResolver, QueryError, QueryResult, ShareStore, UniversalNameProvider,
};
pub use resolver::{NetworkResolver, NetworkResolverBuilder, NetworkSession};
pub use share::ShareRecord;
pub use table::NetworkTable;
