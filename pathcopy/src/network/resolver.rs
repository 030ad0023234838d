//! The network path resolution steps.
//!
//! Every step is total: failures of the underlying facilities are logged and
//! reported as "no result", never propagated. A step either returns a
//! complete replacement path or `None`, in which case the caller keeps its
//! input.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::Error;
use crate::network::buffer::{query_growing, MAX_BUFFER_SIZE};
use crate::network::computer_name::ComputerName;
use crate::network::provider::{
    ComputerNameSource, HostResolver, QueryError, ShareStore, UniversalNameProvider,
};
use crate::network::share::{is_hidden_share, ShareRecord};
use crate::network::table::NetworkTable;
use crate::path::{is_separator, UNC_PREFIX};

/// Pattern recognizing drive-rooted local paths.
///
/// Group 1 is the drive letter, group 2 the rest of the path starting with
/// its separator.
pub const HIDDEN_SHARE_PATTERN: &str = r"^([A-Za-z]):((?:\\|/).*)$";

/// Scoped acquisition of the host resolver's network subsystem.
///
/// Cleanup runs when the guard is dropped, on every exit path.
pub struct NetworkSession<'a> {
    hosts: &'a dyn HostResolver,
}

impl<'a> NetworkSession<'a> {
    /// Starts the subsystem.
    ///
    /// # Errors
    ///
    /// Returns the facility's error if startup fails. No cleanup is owed in
    /// that case.
    pub fn open(hosts: &'a dyn HostResolver) -> Result<Self, QueryError> {
        hosts.startup()?;
        Ok(Self { hosts })
    }

    /// Looks up the canonical name of `host`.
    #[must_use]
    pub fn canonical_name(&self, host: &str) -> Option<String> {
        self.hosts.canonical_name(host)
    }
}

impl Drop for NetworkSession<'_> {
    fn drop(&mut self) {
        self.hosts.cleanup();
    }
}

/// Resolves local paths to their network forms.
pub struct NetworkResolver {
    drives: Arc<dyn UniversalNameProvider>,
    shares: Arc<dyn ShareStore>,
    hosts: Arc<dyn HostResolver>,
    computer_name: ComputerName,
    buffer_limit: usize,
    hidden_share_pattern: Option<Regex>,
}

impl fmt::Debug for NetworkResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkResolver")
            .field("computer_name", &self.computer_name)
            .field("buffer_limit", &self.buffer_limit)
            .field(
                "hidden_share_pattern",
                &self.hidden_share_pattern.as_ref().map(Regex::as_str),
            )
            .finish_non_exhaustive()
    }
}

impl Default for NetworkResolver {
    fn default() -> Self {
        Self::from_table(Arc::new(NetworkTable::default()))
    }
}

impl NetworkResolver {
    /// Starts building a resolver.
    #[must_use]
    pub fn builder() -> NetworkResolverBuilder {
        NetworkResolverBuilder::default()
    }

    /// A resolver whose collaborators are all served by `table`.
    #[must_use]
    pub fn from_table(table: Arc<NetworkTable>) -> Self {
        Self::builder()
            .drives(table.clone())
            .shares(table.clone())
            .hosts(table.clone())
            .computer_name_source(table)
            .build()
    }

    /// The lower-cased local computer name, computed once.
    #[must_use]
    pub fn local_computer_name(&self) -> String {
        self.computer_name.get()
    }

    /// Forgets the cached computer name.
    pub fn reset_computer_name(&self) {
        self.computer_name.reset();
    }

    /// Opens and immediately releases a network session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NetworkUnavailable`] if the subsystem cannot start.
    pub fn check_network(&self) -> crate::Result<()> {
        NetworkSession::open(self.hosts.as_ref())
            .map(drop)
            .map_err(|e| Error::NetworkUnavailable {
                reason: e.to_string(),
            })
    }

    /// UNC form of a path on a mapped network drive.
    #[must_use]
    pub fn resolve_mapped_drive(&self, path: &str) -> Option<String> {
        match query_growing("mapped drives", self.buffer_limit, |capacity| {
            self.drives.universal_name(path, capacity)
        }) {
            Ok(found) => found,
            Err(e) => {
                log::debug!("mapped drive lookup for {path} failed: {e}");
                None
            }
        }
    }

    /// UNC form of a path inside a locally configured share.
    ///
    /// Shares are tried in the store's enumeration order and the first one
    /// containing `path` wins. Hidden shares are skipped unless
    /// `include_hidden` is set.
    ///
    /// Containment is decided on a component boundary, not as a plain string
    /// prefix: a share at `C:\Data` contains `C:\Data\x` but not
    /// `C:\Database\x`.
    #[must_use]
    pub fn resolve_local_share(&self, path: &str, include_hidden: bool) -> Option<String> {
        let names = match self.shares.share_names() {
            Ok(names) => names,
            Err(QueryError::NotFound) => return None,
            Err(e) => {
                log::debug!("cannot enumerate shares: {e}");
                return None;
            }
        };

        let computer = self.named_computer()?;
        names
            .iter()
            .filter(|name| include_hidden || !is_hidden_share(name))
            .filter_map(|name| self.share(name))
            .find_map(|share| share.rewrite(path, &computer))
    }

    /// Administrative share form of a drive-rooted path.
    ///
    /// `D:\Projects\x.txt` becomes `\\<computer>\D$\Projects\x.txt`.
    #[must_use]
    pub fn resolve_hidden_share(&self, path: &str) -> Option<String> {
        let pattern = self.hidden_share_pattern.as_ref()?;
        let captures = pattern.captures(path)?;
        let (Some(drive), Some(rest)) = (captures.get(1), captures.get(2)) else {
            log::debug!("hidden share pattern has no drive or remainder group");
            return None;
        };
        let computer = self.named_computer()?;
        Some(format!(
            "{UNC_PREFIX}{computer}\\{}${}",
            drive.as_str(),
            rest.as_str()
        ))
    }

    /// Replaces the host of a UNC path with its fully-qualified name.
    ///
    /// The host is the text between `\\` and the next separator. Paths
    /// without one, and hosts that cannot be resolved, are returned
    /// unchanged.
    #[must_use]
    pub fn normalize_fqdn(&self, path: &str) -> String {
        let Some(rest) = path.strip_prefix(UNC_PREFIX) else {
            return path.to_string();
        };
        let Some(end) = rest.find(is_separator) else {
            return path.to_string();
        };
        let (host, remainder) = rest.split_at(end);
        if host.is_empty() {
            return path.to_string();
        }

        let session = match NetworkSession::open(self.hosts.as_ref()) {
            Ok(session) => session,
            Err(e) => {
                log::debug!("network subsystem unavailable: {e}");
                return path.to_string();
            }
        };
        match session.canonical_name(host) {
            Some(fqdn) if !fqdn.is_empty() => format!("{UNC_PREFIX}{fqdn}{remainder}"),
            _ => {
                log::debug!("no canonical name for {host}");
                path.to_string()
            }
        }
    }

    /// Runs the full network chain used by the UNC plugins.
    ///
    /// Tries the mapped drive, then local shares, then (with
    /// `use_hidden_shares`) the administrative drive share. The result is
    /// FQDN-normalized when `use_fqdn` is set.
    #[must_use]
    pub fn network_path(&self, path: &str, use_hidden_shares: bool, use_fqdn: bool) -> Option<String> {
        let unc = self
            .resolve_mapped_drive(path)
            .or_else(|| self.resolve_local_share(path, use_hidden_shares))
            .or_else(|| {
                if use_hidden_shares {
                    self.resolve_hidden_share(path)
                } else {
                    None
                }
            })?;
        Some(if use_fqdn {
            self.normalize_fqdn(&unc)
        } else {
            unc
        })
    }

    fn share(&self, name: &str) -> Option<ShareRecord> {
        match query_growing("shares", self.buffer_limit, |capacity| {
            self.shares.share_record(name, capacity)
        }) {
            Ok(Some(record)) => ShareRecord::from_record(name, &record),
            Ok(None) => None,
            Err(e) => {
                log::debug!("cannot read share {name}: {e}");
                None
            }
        }
    }

    fn named_computer(&self) -> Option<String> {
        let name = self.local_computer_name();
        if name.is_empty() {
            log::debug!("no local computer name, skipping share resolution");
            None
        } else {
            Some(name)
        }
    }
}

/// Builder for [`NetworkResolver`].
///
/// Collaborators left unset are served by an empty [`NetworkTable`].
pub struct NetworkResolverBuilder {
    drives: Option<Arc<dyn UniversalNameProvider>>,
    shares: Option<Arc<dyn ShareStore>>,
    hosts: Option<Arc<dyn HostResolver>>,
    computer_name: Option<Arc<dyn ComputerNameSource>>,
    buffer_limit: usize,
    hidden_share_pattern: String,
}

impl Default for NetworkResolverBuilder {
    fn default() -> Self {
        Self {
            drives: None,
            shares: None,
            hosts: None,
            computer_name: None,
            buffer_limit: MAX_BUFFER_SIZE,
            hidden_share_pattern: HIDDEN_SHARE_PATTERN.to_string(),
        }
    }
}

impl NetworkResolverBuilder {
    /// Sets the mapped drive provider.
    #[must_use]
    pub fn drives(mut self, drives: Arc<dyn UniversalNameProvider>) -> Self {
        self.drives = Some(drives);
        self
    }

    /// Sets the share store.
    #[must_use]
    pub fn shares(mut self, shares: Arc<dyn ShareStore>) -> Self {
        self.shares = Some(shares);
        self
    }

    /// Sets the host resolver.
    #[must_use]
    pub fn hosts(mut self, hosts: Arc<dyn HostResolver>) -> Self {
        self.hosts = Some(hosts);
        self
    }

    /// Sets the computer name source.
    #[must_use]
    pub fn computer_name_source(mut self, source: Arc<dyn ComputerNameSource>) -> Self {
        self.computer_name = Some(source);
        self
    }

    /// Caps the buffer size offered to variable-length queries.
    #[must_use]
    pub const fn buffer_limit(mut self, limit: usize) -> Self {
        self.buffer_limit = limit;
        self
    }

    /// Overrides the hidden share pattern.
    ///
    /// The pattern needs a drive letter group and a remainder group. An
    /// invalid pattern disables the hidden share step.
    #[must_use]
    pub fn hidden_share_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.hidden_share_pattern = pattern.into();
        self
    }

    /// Builds the resolver.
    #[must_use]
    pub fn build(self) -> NetworkResolver {
        let fallback = Arc::new(NetworkTable::default());
        let hidden_share_pattern = match Regex::new(&self.hidden_share_pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                log::warn!("invalid hidden share pattern, step disabled: {e}");
                None
            }
        };
        NetworkResolver {
            drives: self.drives.unwrap_or_else(|| fallback.clone()),
            shares: self.shares.unwrap_or_else(|| fallback.clone()),
            hosts: self.hosts.unwrap_or_else(|| fallback.clone()),
            computer_name: ComputerName::new(self.computer_name.unwrap_or(fallback)),
            buffer_limit: self.buffer_limit,
            hidden_share_pattern,
        }
    }
}
