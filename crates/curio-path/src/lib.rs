//! Dotted-path utilities.
//!
//! Catalogue forms address fields of the object document by dot-separated
//! keys (`"provenance.auctionHistory"`, `"document.media.videos"`). This
//! crate implements the helpers for those paths: parsing, formatting, and
//! building a single-branch nested mapping from a key and a leaf value.
//!
//! # Example
//!
//! ```
//! use curio_path::{parse_dotted, format_dotted, nest};
//!
//! // Parse a dotted key into path components
//! let path = parse_dotted("provenance.auctionHistory").unwrap();
//! assert_eq!(path, vec!["provenance".to_string(), "auctionHistory".to_string()]);
//!
//! // Format path components back to a dotted key
//! assert_eq!(format_dotted(&path), "provenance.auctionHistory");
//!
//! // Build a nested mapping from a dotted key and a leaf value
//! let patch = nest("a.b.c", serde_json::json!(42)).unwrap();
//! assert_eq!(patch, serde_json::json!({"a": {"b": {"c": 42}}}));
//! ```

use serde_json::{Map, Value};

pub mod types;
pub use types::{Path, PathStep};

pub mod validate;
pub use validate::{validate_dotted, validate_path, PathError};

/// Parse a dotted key into path components.
///
/// The empty string and keys with empty segments (leading, trailing or
/// doubled dots) are rejected - a form field key always names at least one
/// component.
///
/// # Example
///
/// ```
/// use curio_path::parse_dotted;
///
/// assert_eq!(parse_dotted("components").unwrap(), vec!["components"]);
/// assert_eq!(parse_dotted("a.b.c").unwrap(), vec!["a", "b", "c"]);
/// assert!(parse_dotted("").is_err());
/// assert!(parse_dotted("a..b").is_err());
/// ```
pub fn parse_dotted(key: &str) -> Result<Path, PathError> {
    validate_dotted(key)?;
    Ok(key.split('.').map(str::to_string).collect())
}

/// Format path components into a dotted key.
///
/// Inverse of [`parse_dotted`] for any path it accepts.
pub fn format_dotted(path: &[PathStep]) -> String {
    path.join(".")
}

/// Build a single-branch nested mapping from a dotted key and a leaf value.
///
/// `nest("a.b.c", v)` produces `{"a": {"b": {"c": v}}}`. Pure and
/// deterministic; this is how callers construct a patch when a field is
/// identified by a dotted key instead of already-nested structure.
pub fn nest(key: &str, value: Value) -> Result<Value, PathError> {
    let path = parse_dotted(key)?;
    Ok(path.into_iter().rev().fold(value, |acc, step| {
        let mut map = Map::new();
        map.insert(step, acc);
        Value::Object(map)
    }))
}

/// Returns `true` if `prefix` is a prefix of `path` (equal counts too).
pub fn is_prefix_of(prefix: &[PathStep], path: &[PathStep]) -> bool {
    if path.len() < prefix.len() {
        return false;
    }
    path[..prefix.len()] == *prefix
}

/// Get the parent path of a given path.
pub fn parent(path: &[PathStep]) -> Result<Path, PathError> {
    if path.is_empty() {
        return Err(PathError::NoParent);
    }
    Ok(path[..path.len() - 1].to_vec())
}

// ── Tests ─────────────────────────────────────────────────────────────────
