//! Patch validator.
//!
//! Validates a raw patch (as `serde_json::Value`) before any mutation, so
//! callers can reject untrusted input early and the apply pass can stay
//! infallible. Rules:
//!
//! - the patch root must be an object;
//! - an array is either an entity sequence (every element an object) or a
//!   plain leaf list (no element an object) — mixing the two is an error;
//! - an entity's `_id`, when present, must be a string;
//! - a tombstone must carry an `_id` (there is nothing else to match on);
//! - nesting beyond the depth ceiling is rejected.

use serde_json::{Map, Value};

use super::types::MergeError;
use crate::entity::{entity_id, is_tombstone, ID_KEY};

/// Maximum allowed patch nesting depth.
const MAX_PATCH_DEPTH: usize = 64;

/// Validate a patch against the merge rules.
///
/// # Example
///
/// ```
/// use curio_document::validate_patch;
/// use serde_json::json;
///
/// validate_patch(&json!({"media": {"videos": [{"title": "x"}]}})).unwrap();
/// validate_patch(&json!([1, 2])).unwrap_err(); // root must be an object
/// validate_patch(&json!({"videos": [{"delete": true}]})).unwrap_err();
/// ```
pub fn validate_patch(patch: &Value) -> Result<(), MergeError> {
    let map = patch.as_object().ok_or(MergeError::PatchNotAnObject)?;
    validate_object(map, 1)
}

fn validate_object(map: &Map<String, Value>, depth: usize) -> Result<(), MergeError> {
    if depth > MAX_PATCH_DEPTH {
        return Err(MergeError::PatchTooDeep);
    }
    for value in map.values() {
        match value {
            Value::Object(inner) => validate_object(inner, depth + 1)?,
            Value::Array(items) => validate_sequence(items, depth + 1)?,
            _ => {}
        }
    }
    Ok(())
}

fn validate_sequence(items: &[Value], depth: usize) -> Result<(), MergeError> {
    if depth > MAX_PATCH_DEPTH {
        return Err(MergeError::PatchTooDeep);
    }
    // No objects at all: a plain leaf list (tags, measurements), which
    // overwrites wholesale and needs no entity checks.
    if !items.iter().any(Value::is_object) {
        return Ok(());
    }
    for item in items {
        let obj = item.as_object().ok_or(MergeError::MixedSequence)?;
        if let Some(id) = obj.get(ID_KEY) {
            if !id.is_string() {
                return Err(MergeError::InvalidEntityId);
            }
        }
        if is_tombstone(item) && entity_id(item).is_none() {
            return Err(MergeError::TombstoneWithoutId);
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
