//! Entity identity helpers.
//!
//! An entity is any JSON object inside a document sequence, identified by
//! its `_id` string field. Entities arrive from the form without an id on
//! first save; the merge engine mints one so the item is addressable for
//! later edits and deletes.

use rand::Rng;
use serde_json::Value;

/// Field carrying an entity's identity.
pub const ID_KEY: &str = "_id";

/// Field marking a patch entity as a tombstone.
pub const DELETE_KEY: &str = "delete";

/// Length of a generated entity id, in hex digits.
pub const ENTITY_ID_LEN: usize = 24;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// The entity's id, when present and well-typed.
pub fn entity_id(entity: &Value) -> Option<&str> {
    entity.get(ID_KEY).and_then(Value::as_str)
}

/// Returns `true` when the patch entity is a delete marker.
pub fn is_tombstone(entity: &Value) -> bool {
    entity
        .get(DELETE_KEY)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Returns `true` when the provided id has the generated-id shape.
pub fn is_valid_entity_id(id: &str) -> bool {
    id.len() == ENTITY_ID_LEN && id.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase())
}

/// Generates a fresh entity id: 24 lowercase hex digits.
pub fn generate_entity_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ENTITY_ID_LEN)
        .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────
