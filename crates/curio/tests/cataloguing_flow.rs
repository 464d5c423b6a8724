//! Full cataloguing pass: media add/edit/delete through the session,
//! with the in-memory store standing in for the remote document store.

use curio::media::{schema_keys, MediaItem, MediaKind};
use curio::session::{InMemoryObjectStore, ObjectSession, SessionError, StoreError};
use curio::Document;
use serde_json::json;

fn data_uri() -> String {
    curio::media::to_data_uri(b"not really a png", "image/png")
}

#[tokio::test]
async fn add_edit_delete_media_item() {
    let mut session = ObjectSession::new("obj-1", InMemoryObjectStore::new());

    // First save: no id yet, the engine mints one.
    let report = session
        .save_media(
            schema_keys::ADDITIONAL_IMAGES,
            MediaItem::new(MediaKind::Image, "Front view", data_uri()),
        )
        .await
        .unwrap();
    assert_eq!(report.appended, 1);
    let id = report.generated_ids[0].clone();

    // The edit modal reads its defaults back by id.
    let item = session
        .document()
        .media_item(schema_keys::ADDITIONAL_IMAGES, &id)
        .unwrap();
    assert_eq!(item["title"], json!("Front view"));

    // Edit: resubmit the same id with a changed title only; the payload
    // field is preserved by the field-level merge.
    let report = session
        .save_media(
            schema_keys::ADDITIONAL_IMAGES,
            MediaItem {
                id: Some(id.clone()),
                title: "Front view, raking light".to_string(),
                image: Some(data_uri()),
                video: None,
                delete: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(report.updated, 1);

    // Delete by tombstone.
    let report = session
        .save_media(schema_keys::ADDITIONAL_IMAGES, MediaItem::tombstone(&id))
        .await
        .unwrap();
    assert_eq!(report.removed, 1);
    assert_eq!(
        session.document().get("document.media.additionalImages"),
        Some(&json!([]))
    );
}

#[tokio::test]
async fn validation_blocks_before_the_store_sees_anything() {
    let store = InMemoryObjectStore::new();
    let mut session = ObjectSession::new("obj-1", store);

    let err = session
        .save_media(
            schema_keys::VIDEOS,
            MediaItem::new(MediaKind::Video, "", "data:video/mp4;base64,AA=="),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Media(_)));
}

#[tokio::test]
async fn store_outage_keeps_the_session_usable() {
    let store = InMemoryObjectStore::new();
    let mut session = ObjectSession::open(
        "obj-1",
        json!({"document": {"media": {"videos": [{"_id": "v1", "title": "Spin"}]}}}),
        store,
    )
    .unwrap();

    session.store().set_unavailable(true);
    let err = session
        .save_media(schema_keys::VIDEOS, MediaItem::tombstone("v1"))
        .await
        .unwrap_err();
    assert_eq!(err, SessionError::Persistence(StoreError::Unavailable));

    // Prior state intact, next attempt succeeds.
    assert!(session.document().media_item("videos", "v1").is_some());
    session.store().set_unavailable(false);
    session
        .save_media(schema_keys::VIDEOS, MediaItem::tombstone("v1"))
        .await
        .unwrap();
    assert!(session.document().media_item("videos", "v1").is_none());
}

#[tokio::test]
async fn confirmed_document_replaces_local_state() {
    let mut session = ObjectSession::new("obj-9", InMemoryObjectStore::new());
    session
        .update_or_add_item(&json!({"title": "Reclining Figure", "components": [{"name": "plinth"}]}))
        .await
        .unwrap();

    // What the session holds is exactly what the store confirmed.
    let stored = session.store().stored("obj-9").unwrap();
    assert_eq!(session.document(), &Document::new(stored).unwrap());
}
