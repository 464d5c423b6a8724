//! Merge apply logic.
//!
//! Every function here assumes the patch has already passed
//! [`validate_patch`](super::validate::validate_patch) and is therefore
//! infallible — validation-then-apply is what makes a merge atomic from
//! the caller's perspective.

use serde_json::{Map, Value};

use super::types::MergeReport;
use crate::entity::{entity_id, generate_entity_id, is_tombstone, ID_KEY};

/// An array in a patch is an entity sequence unless it is a non-empty list
/// of non-objects (a plain leaf list, which overwrites wholesale).
fn is_entity_sequence(items: &[Value]) -> bool {
    items.is_empty() || items.iter().any(Value::is_object)
}

/// Deep-merge a validated patch object into a document object.
pub(crate) fn merge_object(
    target: &mut Map<String, Value>,
    patch: &Map<String, Value>,
    report: &mut MergeReport,
) {
    for (key, incoming) in patch {
        match target.get_mut(key) {
            Some(existing) => merge_value(existing, incoming, report),
            None => {
                let materialized = materialize(incoming, report);
                target.insert(key.clone(), materialized);
            }
        }
    }
}

fn merge_value(target: &mut Value, incoming: &Value, report: &mut MergeReport) {
    match incoming {
        Value::Array(items) if is_entity_sequence(items) => match target {
            Value::Array(existing) => merge_sequence(existing, items, report),
            // Sequence patch against a scalar or mapping: the node becomes
            // a sequence, built up from empty so ids and tombstones are
            // normalized the same way as everywhere else.
            other => {
                let mut fresh = Vec::new();
                merge_sequence(&mut fresh, items, report);
                *other = Value::Array(fresh);
            }
        },
        Value::Object(patch_map) => match target {
            Value::Object(existing) => merge_object(existing, patch_map, report),
            other => *other = materialize(incoming, report),
        },
        // Scalars, nulls, and plain leaf lists overwrite.
        _ => *target = incoming.clone(),
    }
}

/// Merge incoming entities into an existing sequence, in patch order.
///
/// Untouched and edited entities keep their relative order; appends go to
/// the end. Duplicate ids inside one patch resolve last-write-wins because
/// entities are applied sequentially.
fn merge_sequence(existing: &mut Vec<Value>, incoming: &[Value], report: &mut MergeReport) {
    for entity in incoming {
        let id = entity_id(entity);
        if is_tombstone(entity) {
            // Validated: tombstones always carry an id. A stale id is a
            // no-op so deletes stay idempotent.
            if let Some(pos) = position_of(existing, id) {
                existing.remove(pos);
                report.removed += 1;
            }
            continue;
        }
        match position_of(existing, id) {
            Some(pos) => {
                field_merge(&mut existing[pos], entity);
                report.updated += 1;
            }
            None => {
                existing.push(with_identity(entity, report));
                report.appended += 1;
            }
        }
    }
}

fn position_of(existing: &[Value], id: Option<&str>) -> Option<usize> {
    let id = id?;
    existing.iter().position(|e| entity_id(e) == Some(id))
}

/// Field-level merge into a matched entity: fields present in the patch
/// entity overwrite, fields absent from it are preserved.
fn field_merge(existing: &mut Value, patch_entity: &Value) {
    if let (Value::Object(target), Value::Object(fields)) = (existing, patch_entity) {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// Clone an entity for appending, minting an id when none was supplied.
fn with_identity(entity: &Value, report: &mut MergeReport) -> Value {
    let mut fresh = entity.clone();
    if entity_id(&fresh).is_none() {
        if let Value::Object(map) = &mut fresh {
            let id = generate_entity_id();
            report.generated_ids.push(id.clone());
            map.insert(ID_KEY.to_string(), Value::String(id));
        }
    }
    fresh
}

/// Deep-clone a patch subtree into document form: nested entity sequences
/// get ids assigned and tombstones applied even when the subtree is new.
fn materialize(incoming: &Value, report: &mut MergeReport) -> Value {
    match incoming {
        Value::Array(items) if is_entity_sequence(items) => {
            let mut fresh = Vec::new();
            merge_sequence(&mut fresh, items, report);
            Value::Array(fresh)
        }
        Value::Object(map) => {
            let mut fresh = Map::new();
            for (key, value) in map {
                fresh.insert(key.clone(), materialize(value, report));
            }
            Value::Object(fresh)
        }
        other => other.clone(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
