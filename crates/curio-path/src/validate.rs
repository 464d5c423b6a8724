//! Validation for dotted paths.

use thiserror::Error;

use crate::types::PathStep;

/// Maximum allowed dotted key length.
const MAX_KEY_LENGTH: usize = 1024;

/// Maximum allowed path depth.
const MAX_PATH_DEPTH: usize = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("EMPTY_KEY")]
    Empty,
    #[error("EMPTY_SEGMENT")]
    EmptySegment,
    #[error("KEY_TOO_LONG")]
    TooLong,
    #[error("PATH_TOO_DEEP")]
    TooDeep,
    #[error("NO_PARENT")]
    NoParent,
}

/// Validate a dotted key string.
///
/// # Errors
///
/// Returns an error if:
/// - The key is empty
/// - The key exceeds the maximum length (1024 characters)
/// - Any `.`-separated segment is empty
/// - The key has more than the maximum depth (64 segments)
///
/// # Example
///
/// ```
/// use curio_path::validate_dotted;
///
/// validate_dotted("document.media.videos").unwrap();
/// validate_dotted("").unwrap_err();
/// validate_dotted("a..b").unwrap_err();
/// ```
pub fn validate_dotted(key: &str) -> Result<(), PathError> {
    if key.is_empty() {
        return Err(PathError::Empty);
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(PathError::TooLong);
    }
    let mut depth = 0usize;
    for segment in key.split('.') {
        if segment.is_empty() {
            return Err(PathError::EmptySegment);
        }
        depth += 1;
        if depth > MAX_PATH_DEPTH {
            return Err(PathError::TooDeep);
        }
    }
    Ok(())
}

/// Validate already-parsed path components.
pub fn validate_path(path: &[PathStep]) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    if path.len() > MAX_PATH_DEPTH {
        return Err(PathError::TooDeep);
    }
    if path.iter().any(|step| step.is_empty()) {
        return Err(PathError::EmptySegment);
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
