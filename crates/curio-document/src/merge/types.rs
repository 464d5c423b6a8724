//! Core types for the merge module.

use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("DOCUMENT_NOT_AN_OBJECT")]
    DocumentNotAnObject,
    #[error("PATCH_NOT_AN_OBJECT")]
    PatchNotAnObject,
    #[error("MIXED_SEQUENCE")]
    MixedSequence,
    #[error("INVALID_ENTITY_ID")]
    InvalidEntityId,
    #[error("TOMBSTONE_WITHOUT_ID")]
    TombstoneWithoutId,
    #[error("PATCH_TOO_DEEP")]
    PatchTooDeep,
}

// ── Report ────────────────────────────────────────────────────────────────

/// What a merge did, at entity granularity.
///
/// Callers use `generated_ids` to learn the identity the engine minted for
/// a just-added item (the form needs it to offer edit/delete right away).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Entities field-merged into an existing entry by id.
    pub updated: usize,
    /// Entities removed by a tombstone.
    pub removed: usize,
    /// Entities appended to a sequence.
    pub appended: usize,
    /// Ids minted for appended entities that arrived without one,
    /// in append order.
    pub generated_ids: Vec<String>,
}

impl MergeReport {
    /// `true` when the merge touched no entity sequence.
    ///
    /// Scalar and object-node writes are not counted here; a report can be
    /// entity-empty while the document still changed.
    pub fn no_entities_touched(&self) -> bool {
        self.updated == 0 && self.removed == 0 && self.appended == 0
    }
}
