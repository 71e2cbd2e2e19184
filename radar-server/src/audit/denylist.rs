//! Issuer denylist
//!
//! The denylist is an immutable set of issuer RFCs loaded once at process
//! start. Handlers depend on the [`IssuerLookup`] trait rather than the
//! concrete set, so a database-backed or remote source can replace
//! [`StaticDenylist`] without touching the audit logic.

use std::collections::HashSet;
use std::path::Path;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Read-only membership test for denylisted issuers.
pub trait IssuerLookup: Send + Sync {
    /// Whether the given issuer RFC is denylisted.
    fn is_denylisted(&self, rfc: &str) -> bool;
}

/// In-memory denylist backed by a `HashSet`.
#[derive(Debug, Clone)]
pub struct StaticDenylist {
    entries: HashSet<String>,
}

/// Built-in SAT 69-B sample set, used when no DENYLIST_PATH is configured.
const BUILTIN_ENTRIES: &[&str] = &["BAD800101XX1", "EFO990101FF0", "FAC020202AB9"];

impl StaticDenylist {
    /// Denylist with the built-in sample entries.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_ENTRIES.iter().map(|s| s.to_string()))
    }

    /// Denylist from an iterator of RFCs.
    pub fn from_entries(entries: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Load a denylist from a newline-separated file.
    ///
    /// Blank lines and lines starting with `#` are skipped; entries are
    /// trimmed. An empty resulting set is a configuration error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BoxError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let entries: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        if entries.is_empty() {
            return Err(format!(
                "Denylist file {} contains no entries",
                path.as_ref().display()
            )
            .into());
        }

        Ok(Self { entries })
    }

    /// Number of denylisted issuers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IssuerLookup for StaticDenylist {
    fn is_denylisted(&self, rfc: &str) -> bool {
        self.entries.contains(rfc)
    }
}
