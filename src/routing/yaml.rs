//! Route table loading from YAML.
//!
//! # Responsibilities
//! - Parse a byte buffer as an ordered sequence of route entries
//! - Fold entries into a [`RouteTable`] in document order
//!
//! # Design Decisions
//! - Syntactically invalid documents fail with a parse error; the caller
//!   decides whether to abort startup or fall back to another table
//! - Duplicate paths in one document resolve last-write-wins
//! - Loading produces a table only; handler construction is a separate step

use std::path::Path;

use thiserror::Error;

use crate::routing::table::{RouteEntry, RouteTable};

/// Error type for route file loading.
#[derive(Debug, Error)]
pub enum RouteFileError {
    #[error("failed to read route file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid route file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Parse a YAML buffer of the form
///
/// ```yaml
/// - path: /some-path
///   url: https://destination.example.com/target
/// ```
///
/// into a [`RouteTable`]. Entries are inserted in document order, so a later
/// entry with a duplicate path overwrites the earlier one.
pub fn load(buffer: &[u8]) -> Result<RouteTable, RouteFileError> {
    let entries: Vec<RouteEntry> = serde_yaml::from_slice(buffer)?;
    Ok(RouteTable::from_entries(entries))
}

/// Read and parse a route file from disk.
pub fn load_file(path: &Path) -> Result<RouteTable, RouteFileError> {
    let buffer = std::fs::read(path)?;
    load(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let buffer = b"- path: /a\n  url: https://example.com/a\n- path: /b\n  url: https://example.com/b\n";

        let table = load(buffer).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("/a"), Some("https://example.com/a"));
        assert_eq!(table.lookup("/b"), Some("https://example.com/b"));
    }

    #[test]
    fn test_duplicate_path_precedence() {
        let buffer = b"- path: /a\n  url: https://example.com/x\n- path: /a\n  url: https://example.com/y\n";

        let table = load(buffer).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("/a"), Some("https://example.com/y"));
    }

    #[test]
    fn test_malformed_buffer_fails() {
        let result = load(b"::: not yaml {{{");
        assert!(matches!(result, Err(RouteFileError::Parse(_))));
    }

    #[test]
    fn test_truncated_buffer_fails() {
        let result = load(b"- path: /a\n  url: [unterminated");
        assert!(matches!(result, Err(RouteFileError::Parse(_))));
    }

    #[test]
    fn test_wrong_shape_fails() {
        // A mapping where a sequence of entries is expected.
        let result = load(b"path: /a\nurl: https://example.com/a\n");
        assert!(matches!(result, Err(RouteFileError::Parse(_))));
    }

    #[test]
    fn test_missing_field_fails() {
        let result = load(b"- path: /a\n");
        assert!(matches!(result, Err(RouteFileError::Parse(_))));
    }

    #[test]
    fn test_extra_fields_tolerated() {
        let buffer = b"- path: /a\n  url: https://example.com/a\n  comment: ignored\n";

        let table = load(buffer).unwrap();
        assert_eq!(table.lookup("/a"), Some("https://example.com/a"));
    }

    #[test]
    fn test_empty_sequence_yields_empty_table() {
        let table = load(b"[]").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = load_file(Path::new("/nonexistent/routes.yaml"));
        assert!(matches!(result, Err(RouteFileError::Io(_))));
    }
}
