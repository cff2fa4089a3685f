//! Route table storage and lookup.
//!
//! # Responsibilities
//! - Store the compiled path → destination mapping
//! - Look up a request path, return destination or explicit miss
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) exact-path lookup via HashMap
//! - Later inserts with a duplicate path overwrite earlier ones

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One path-to-destination record.
///
/// Field names match the route file format (`path`, `url`). The destination
/// is an arbitrary string; it is stored and emitted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteEntry {
    /// Request path to match exactly (e.g. "/docs").
    pub path: String,

    /// Absolute or relative redirect target.
    pub url: String,
}

/// The complete mapping consulted by a resolver.
///
/// Built once from an ordered sequence of entries and never mutated while a
/// handler chain holds it, so concurrent lookups across requests need no
/// synchronization.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    destinations: HashMap<String, String>,
}

impl RouteTable {
    /// Create an empty table. Valid as-is: every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one mapping. A duplicate path overwrites the earlier entry.
    pub fn insert(&mut self, path: impl Into<String>, url: impl Into<String>) {
        self.destinations.insert(path.into(), url.into());
    }

    /// Build a table from entries in order, last write wins on duplicates.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RouteEntry>,
    {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry.path, entry.url);
        }
        table
    }

    /// Look up the destination for an exact request path.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.destinations.get(path).map(String::as_str)
    }

    /// Number of distinct paths in the table.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl FromIterator<(String, String)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (path, url) in iter {
            table.insert(path, url);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit_and_miss() {
        let mut table = RouteTable::new();
        table.insert("/docs", "https://example.com/docs");

        assert_eq!(table.lookup("/docs"), Some("https://example.com/docs"));
        assert_eq!(table.lookup("/missing"), None);
    }

    #[test]
    fn test_exact_match_only() {
        let mut table = RouteTable::new();
        table.insert("/docs", "https://example.com/docs");

        // No prefix semantics.
        assert_eq!(table.lookup("/docs/intro"), None);
        assert_eq!(table.lookup("/doc"), None);
    }

    #[test]
    fn test_duplicate_path_last_write_wins() {
        let table = RouteTable::from_entries(vec![
            RouteEntry {
                path: "/a".into(),
                url: "https://example.com/first".into(),
            },
            RouteEntry {
                path: "/a".into(),
                url: "https://example.com/second".into(),
            },
        ]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("/a"), Some("https://example.com/second"));
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = RouteTable::new();
        assert!(table.is_empty());
        assert_eq!(table.lookup("/anything"), None);
    }

    #[test]
    fn test_from_iterator() {
        let table: RouteTable = vec![
            ("/x".to_string(), "https://example.com/x".to_string()),
            ("/y".to_string(), "https://example.com/y".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("/y"), Some("https://example.com/y"));
    }
}
