//! Configuration-backed network collaborators.
//!
//! [`NetworkTable`] answers every collaborator query from static tables:
//! mapped drives, share records, host names and an optional computer name.
//! It follows the same variable-length protocol as the OS facilities, so the
//! resolver's retry handling is exercised against it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::network::computer_name::SystemComputerName;
use crate::network::provider::{
    wide_size, ComputerNameSource, HostResolver, QueryError, QueryResult, ShareStore,
    UniversalNameProvider,
};
use crate::path::is_separator;

/// Static network environment.
#[derive(Debug, Default)]
pub struct NetworkTable {
    mapped_drives: HashMap<char, String>,
    shares: Vec<(String, String)>,
    hosts: HashMap<String, String>,
    computer_name: Option<String>,
    offline: bool,
    active_sessions: AtomicUsize,
}

impl NetworkTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a drive (`Z:`, `Z:\` or `Z`) to a UNC root.
    ///
    /// Entries that do not start with a drive letter are ignored.
    #[must_use]
    pub fn with_mapped_drive(mut self, drive: &str, unc_root: impl Into<String>) -> Self {
        match drive.chars().next().filter(char::is_ascii_alphabetic) {
            Some(letter) => {
                let root: String = unc_root.into();
                self.mapped_drives.insert(
                    letter.to_ascii_uppercase(),
                    root.trim_end_matches(is_separator).to_string(),
                );
            }
            None => log::warn!("ignoring mapped drive {drive:?}: not a drive letter"),
        }
        self
    }

    /// Appends a share. Enumeration follows insertion order.
    ///
    /// `record` may use newlines or NULs between lines.
    #[must_use]
    pub fn with_share(mut self, name: impl Into<String>, record: &str) -> Self {
        self.shares.push((name.into(), to_multi_string(record)));
        self
    }

    /// Adds a host name and its fully-qualified name.
    #[must_use]
    pub fn with_host(mut self, host: &str, fqdn: impl Into<String>) -> Self {
        self.hosts.insert(host.to_lowercase(), fqdn.into());
        self
    }

    /// Fixes the computer name instead of asking the system.
    #[must_use]
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.computer_name = Some(name.into());
        self
    }

    /// Makes the host resolver fail to start.
    #[must_use]
    pub const fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Number of host resolver sessions currently open.
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.active_sessions.load(Ordering::SeqCst)
    }

    /// Whether the table holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapped_drives.is_empty() && self.shares.is_empty() && self.hosts.is_empty()
    }
}

fn to_multi_string(record: &str) -> String {
    if record.contains('\0') {
        return record.to_string();
    }
    let mut value: String = record
        .lines()
        .filter(|line| !line.is_empty())
        .flat_map(|line| [line, "\0"])
        .collect();
    value.push('\0');
    value
}

fn fits(value: String, capacity: usize) -> QueryResult<String> {
    let required = wide_size(&value);
    if required > capacity {
        Err(QueryError::MoreData { required })
    } else {
        Ok(value)
    }
}

impl UniversalNameProvider for NetworkTable {
    fn universal_name(&self, path: &str, capacity: usize) -> QueryResult<String> {
        let mut chars = path.chars();
        let (Some(letter), Some(':')) = (chars.next(), chars.next()) else {
            return Err(QueryError::NotFound);
        };
        if !letter.is_ascii_alphabetic() {
            return Err(QueryError::NotFound);
        }
        let rest = chars.as_str();
        if !rest.is_empty() && !rest.starts_with(is_separator) {
            return Err(QueryError::NotFound);
        }
        let root = self
            .mapped_drives
            .get(&letter.to_ascii_uppercase())
            .ok_or(QueryError::NotFound)?;
        fits(format!("{root}{rest}"), capacity)
    }
}

impl ShareStore for NetworkTable {
    fn share_names(&self) -> QueryResult<Vec<String>> {
        Ok(self.shares.iter().map(|(name, _)| name.clone()).collect())
    }

    fn share_record(&self, name: &str, capacity: usize) -> QueryResult<String> {
        let (_, record) = self
            .shares
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .ok_or(QueryError::NotFound)?;
        fits(record.clone(), capacity)
    }
}

impl HostResolver for NetworkTable {
    fn startup(&self) -> QueryResult<()> {
        if self.offline {
            return Err(QueryError::Failed("network subsystem is offline".to_string()));
        }
        self.active_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn cleanup(&self) {
        let _ = self
            .active_sessions
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    fn canonical_name(&self, host: &str) -> Option<String> {
        self.hosts.get(&host.to_lowercase()).cloned()
    }
}

impl ComputerNameSource for NetworkTable {
    fn computer_name(&self) -> Option<String> {
        self.computer_name
            .clone()
            .or_else(|| SystemComputerName.computer_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkResolver;
    use std::sync::Arc;

    #[test]
    fn test_mapped_drive_lookup() {
        let table = NetworkTable::new().with_mapped_drive(r"z:\", r"\\files\team\");
        assert_eq!(
            table.universal_name(r"Z:\a\b", 1024).unwrap(),
            r"\\files\team\a\b"
        );
        assert_eq!(table.universal_name("z:", 1024).unwrap(), r"\\files\team");
        assert_eq!(table.universal_name("Z:x", 1024), Err(QueryError::NotFound));
        assert_eq!(table.universal_name(r"Y:\a", 1024), Err(QueryError::NotFound));
        assert_eq!(table.universal_name("", 1024), Err(QueryError::NotFound));
    }

    #[test]
    fn test_non_ascii_drive_is_not_mapped() {
        let table = NetworkTable::new().with_mapped_drive("Z:", r"\\files\team");
        assert_eq!(table.universal_name(r"中:\x.txt", 1024), Err(QueryError::NotFound));
        assert_eq!(table.universal_name(r"é:\x", 1024), Err(QueryError::NotFound));
        assert_eq!(table.universal_name("中:", 1024), Err(QueryError::NotFound));
        assert_eq!(table.universal_name("中", 1024), Err(QueryError::NotFound));
    }

    #[test]
    fn test_non_ascii_drive_resolves_to_nothing() {
        let resolver = NetworkResolver::from_table(Arc::new(
            NetworkTable::new()
                .with_computer_name("pc")
                .with_share("Data", r"Path=C:\Shares\Data"),
        ));
        assert_eq!(resolver.resolve_mapped_drive(r"中:\x.txt"), None);
        assert_eq!(resolver.resolve_hidden_share(r"中:\x.txt"), None);
        assert_eq!(resolver.network_path(r"中:\x.txt", true, true), None);
        assert_eq!(
            resolver.network_path(r"C:\Shares\Data\日本\x.txt", false, false).as_deref(),
            Some(r"\\pc\Data\日本\x.txt")
        );
    }

    #[test]
    fn test_small_capacity_reports_required_size() {
        let table = NetworkTable::new().with_mapped_drive("Z:", r"\\files\team");
        let expected = wide_size(r"\\files\team\a");
        assert_eq!(
            table.universal_name(r"Z:\a", 4),
            Err(QueryError::MoreData { required: expected })
        );
    }

    #[test]
    fn test_share_records_keep_order() {
        let table = NetworkTable::new()
            .with_share("B", "Path=C:\\b\nType=0")
            .with_share("A", "Path=C:\\a");
        assert_eq!(table.share_names().unwrap(), vec!["B", "A"]);
        assert_eq!(table.share_record("b", 1024).unwrap(), "Path=C:\\b\0Type=0\0\0");
        assert_eq!(table.share_record("missing", 1024), Err(QueryError::NotFound));
    }

    #[test]
    fn test_raw_multi_string_is_kept() {
        let table = NetworkTable::new().with_share("R", "A=1\0\0Path=C:\\r\0");
        assert_eq!(table.share_record("R", 1024).unwrap(), "A=1\0\0Path=C:\\r\0");
    }

    #[test]
    fn test_sessions_are_counted() {
        let table = NetworkTable::new();
        table.startup().unwrap();
        table.startup().unwrap();
        assert_eq!(table.active_sessions(), 2);
        table.cleanup();
        table.cleanup();
        table.cleanup();
        assert_eq!(table.active_sessions(), 0);
    }

    #[test]
    fn test_offline_startup_fails() {
        let table = NetworkTable::new().offline();
        assert!(matches!(table.startup(), Err(QueryError::Failed(_))));
        assert_eq!(table.active_sessions(), 0);
    }
}
