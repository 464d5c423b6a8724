//! The editing session.

use curio_document::{Document, MergeError, MergeReport};
use curio_media::{MediaError, MediaItem};
use curio_path::PathError;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::store::{ObjectStore, StoreError};

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("PERSISTENCE: {0}")]
    Persistence(#[from] StoreError),
}

// ── Session ───────────────────────────────────────────────────────────────

/// Exclusive owner of one object's document while it is being catalogued.
///
/// Apply-after-confirm: a patch is merged into a cloned candidate, the
/// candidate goes to the store, and only the store's confirmed document
/// replaces local state. On failure the previous document stands.
pub struct ObjectSession<S> {
    object_id: String,
    document: Document,
    store: S,
}

impl<S: ObjectStore> ObjectSession<S> {
    /// Start cataloguing a new object with an empty document.
    pub fn new(object_id: impl Into<String>, store: S) -> Self {
        Self {
            object_id: object_id.into(),
            document: Document::empty(),
            store,
        }
    }

    /// Resume a session over an already-persisted document.
    pub fn open(
        object_id: impl Into<String>,
        document: Value,
        store: S,
    ) -> Result<Self, SessionError> {
        Ok(Self {
            object_id: object_id.into(),
            document: Document::new(document)?,
            store,
        })
    }

    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a partial-update patch and persist the result.
    ///
    /// The returned report carries any ids minted for appended entities.
    pub async fn update_or_add_item(&mut self, patch: &Value) -> Result<MergeReport, SessionError> {
        let mut candidate = self.document.clone();
        let report = candidate.merge(patch)?;
        debug!(
            object_id = %self.object_id,
            updated = report.updated,
            removed = report.removed,
            appended = report.appended,
            "patch merged, persisting candidate"
        );

        let confirmed = match self.store.persist(&self.object_id, candidate.as_value()).await {
            Ok(confirmed) => confirmed,
            Err(e) => {
                warn!(object_id = %self.object_id, error = %e, "persist failed, keeping prior state");
                return Err(e.into());
            }
        };

        self.document = Document::new(confirmed)?;
        Ok(report)
    }

    /// Overwrite one field addressed by a dotted key.
    pub async fn set_field(
        &mut self,
        dotted_key: &str,
        value: Value,
    ) -> Result<MergeReport, SessionError> {
        let patch = curio_path::nest(dotted_key, value)?;
        self.update_or_add_item(&patch).await
    }

    /// Remove one entity from the sequence at a dotted key - the action
    /// menu's delete, expressed as a tombstone patch.
    pub async fn delete_item(
        &mut self,
        dotted_key: &str,
        id: &str,
    ) -> Result<MergeReport, SessionError> {
        let mut entity = serde_json::Map::new();
        entity.insert(
            curio_document::ID_KEY.to_string(),
            Value::String(id.to_string()),
        );
        entity.insert(curio_document::DELETE_KEY.to_string(), Value::Bool(true));
        let tombstone = Value::Array(vec![Value::Object(entity)]);
        let patch = curio_path::nest(dotted_key, tombstone)?;
        self.update_or_add_item(&patch).await
    }

    /// Validate and save a media item under `document.media.<schema_key>`.
    pub async fn save_media(
        &mut self,
        schema_key: &str,
        item: MediaItem,
    ) -> Result<MergeReport, SessionError> {
        let patch = item.into_patch(schema_key)?;
        self.update_or_add_item(&patch).await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryObjectStore;
    use serde_json::json;

    #[tokio::test]
    async fn commit_follows_confirmation() {
        let mut session = ObjectSession::new("obj-1", InMemoryObjectStore::new());
        session
            .update_or_add_item(&json!({"title": "Vase"}))
            .await
            .unwrap();
        assert_eq!(session.document().get("title"), Some(&json!("Vase")));
    }

    #[tokio::test]
    async fn failed_persist_rolls_back() {
        let store = InMemoryObjectStore::new();
        store.set_unavailable(true);
        let mut session = ObjectSession::open(
            "obj-1",
            json!({"title": "Vase"}),
            store,
        )
        .unwrap();

        let err = session
            .update_or_add_item(&json!({"title": "Changed"}))
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::Persistence(StoreError::Unavailable));
        // Candidate was not committed.
        assert_eq!(session.document().get("title"), Some(&json!("Vase")));
    }

    #[tokio::test]
    async fn invalid_patch_never_reaches_store() {
        let mut session = ObjectSession::new("obj-1", InMemoryObjectStore::new());
        let err = session
            .update_or_add_item(&json!({"items": [{"delete": true}]}))
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::Merge(MergeError::TombstoneWithoutId));
    }

    #[tokio::test]
    async fn set_field_nests_dotted_keys() {
        let mut session = ObjectSession::new("obj-1", InMemoryObjectStore::new());
        session
            .set_field("provenance.owner", json!("estate"))
            .await
            .unwrap();
        assert_eq!(
            session.document().get("provenance.owner"),
            Some(&json!("estate"))
        );
    }

    #[tokio::test]
    async fn delete_item_builds_tombstone() {
        let mut session = ObjectSession::open(
            "obj-1",
            json!({"provenance": {"auctionHistory": [
                {"_id": "h1", "house": "North"},
                {"_id": "h2", "house": "South"},
            ]}}),
            InMemoryObjectStore::new(),
        )
        .unwrap();

        let report = session
            .delete_item("provenance.auctionHistory", "h1")
            .await
            .unwrap();
        assert_eq!(report.removed, 1);
        assert_eq!(
            session.document().get("provenance.auctionHistory"),
            Some(&json!([{"_id": "h2", "house": "South"}]))
        );
    }
}
