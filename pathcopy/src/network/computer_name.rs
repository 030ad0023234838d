//! Once-computed local computer name.

use std::fmt;
use std::fs;
use std::sync::{Arc, PoisonError, RwLock};

use crate::network::provider::ComputerNameSource;

/// Lazily computed, lower-cased local computer name.
///
/// The name is computed at most once: readers take a shared lock and only
/// fall back to the exclusive lock when the value is missing, re-checking
/// after acquiring it. Later changes of the OS-level name are not observed.
/// A failed lookup is cached as the empty string.
pub struct ComputerName {
    source: Arc<dyn ComputerNameSource>,
    cached: RwLock<Option<String>>,
}

impl fmt::Debug for ComputerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputerName")
            .field("cached", &self.peek())
            .finish_non_exhaustive()
    }
}

impl ComputerName {
    /// Creates an empty cache over `source`.
    #[must_use]
    pub fn new(source: Arc<dyn ComputerNameSource>) -> Self {
        Self {
            source,
            cached: RwLock::new(None),
        }
    }

    /// Returns the cached name, computing it on first use.
    #[must_use]
    pub fn get(&self) -> String {
        if let Some(name) = self.peek() {
            return name;
        }

        let mut guard = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(name) = guard.as_ref() {
            return name.clone();
        }

        let name = self
            .source
            .computer_name()
            .map(|n| n.to_lowercase())
            .unwrap_or_else(|| {
                log::warn!("local computer name is unavailable");
                String::new()
            });
        *guard = Some(name.clone());
        name
    }

    /// Returns the cached name without computing it.
    #[must_use]
    pub fn peek(&self) -> Option<String> {
        self.cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forgets the cached name so the next [`get`](Self::get) recomputes it.
    ///
    /// Intended for test isolation.
    pub fn reset(&self) {
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Reads the computer name from the environment.
///
/// Checks `COMPUTERNAME`, then `HOSTNAME`, then `/etc/hostname`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemComputerName;

impl ComputerNameSource for SystemComputerName {
    fn computer_name(&self) -> Option<String> {
        ["COMPUTERNAME", "HOSTNAME"]
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .or_else(|| fs::read_to_string("/etc/hostname").ok())
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }
}

/// A fixed computer name.
#[derive(Debug, Clone)]
pub struct FixedComputerName(pub String);

impl ComputerNameSource for FixedComputerName {
    fn computer_name(&self) -> Option<String> {
        Some(self.0.clone())
    }
}
