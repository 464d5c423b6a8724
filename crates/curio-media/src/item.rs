//! The media entity record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kind::MediaKind;
use crate::MediaError;

/// One media attachment on a catalogue object.
///
/// Created without an id (the merge engine mints one on first save),
/// edited by resubmitting the same id, deleted with [`MediaItem::tombstone`].
/// Exactly one of `image`/`video` carries the payload, selected by the
/// item's [`MediaKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<bool>,
}

impl MediaItem {
    /// A new, not-yet-persisted item.
    pub fn new(kind: MediaKind, title: impl Into<String>, payload: impl Into<String>) -> Self {
        let mut item = Self {
            id: None,
            title: title.into(),
            image: None,
            video: None,
            delete: None,
        };
        match kind {
            MediaKind::Image => item.image = Some(payload.into()),
            MediaKind::Video => item.video = Some(payload.into()),
        }
        item
    }

    /// The same item addressed at an existing entity (the edit path).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// A delete marker for the entity with the given id.
    pub fn tombstone(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: String::new(),
            image: None,
            video: None,
            delete: Some(true),
        }
    }

    /// The payload, whichever field carries it.
    pub fn payload(&self) -> Option<&str> {
        self.image.as_deref().or(self.video.as_deref())
    }

    /// The kind implied by the populated payload field.
    pub fn kind(&self) -> Option<MediaKind> {
        match (&self.image, &self.video) {
            (Some(_), _) => Some(MediaKind::Image),
            (_, Some(_)) => Some(MediaKind::Video),
            _ => None,
        }
    }

    /// Returns `true` when this item is a delete marker.
    pub fn is_tombstone(&self) -> bool {
        self.delete == Some(true)
    }

    /// The pre-submission gate: a saveable item needs a title and a
    /// payload. Tombstones carry neither and are exempt.
    pub fn validate(&self) -> Result<(), MediaError> {
        if self.is_tombstone() {
            return Ok(());
        }
        if self.title.trim().is_empty() {
            return Err(MediaError::MissingTitle);
        }
        if self.payload().map_or(true, |p| p.is_empty()) {
            return Err(MediaError::MissingPayload);
        }
        Ok(())
    }

    /// Build the partial-update patch that saves this item under
    /// `document.media.<schema_key>`.
    pub fn into_patch(self, schema_key: &str) -> Result<Value, MediaError> {
        self.validate()?;
        let entity =
            serde_json::to_value(&self).map_err(|e| MediaError::Serialize(e.to_string()))?;
        let mut media = serde_json::Map::new();
        media.insert(schema_key.to_string(), Value::Array(vec![entity]));
        let mut document = serde_json::Map::new();
        document.insert("media".to_string(), Value::Object(media));
        let mut root = serde_json::Map::new();
        root.insert("document".to_string(), Value::Object(document));
        Ok(Value::Object(root))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_item_routes_payload_by_kind() {
        let image = MediaItem::new(MediaKind::Image, "Front", "data:image/png;base64,AA==");
        assert_eq!(image.kind(), Some(MediaKind::Image));
        assert_eq!(image.payload(), Some("data:image/png;base64,AA=="));
        assert!(image.video.is_none());

        let video = MediaItem::new(MediaKind::Video, "Spin", "data:video/mp4;base64,AA==");
        assert_eq!(video.kind(), Some(MediaKind::Video));
        assert!(video.image.is_none());
    }

    #[test]
    fn validation_gates_title_and_payload() {
        let no_title = MediaItem::new(MediaKind::Image, "  ", "data:image/png;base64,AA==");
        assert_eq!(no_title.validate(), Err(MediaError::MissingTitle));

        let no_payload = MediaItem::new(MediaKind::Image, "Front", "");
        assert_eq!(no_payload.validate(), Err(MediaError::MissingPayload));

        MediaItem::new(MediaKind::Image, "Front", "data:image/png;base64,AA==")
            .validate()
            .unwrap();
    }

    #[test]
    fn tombstones_skip_validation() {
        MediaItem::tombstone("abc").validate().unwrap();
    }

    #[test]
    fn patch_shape_for_new_item() {
        let patch = MediaItem::new(MediaKind::Video, "Spin", "data:video/mp4;base64,AA==")
            .into_patch("videos")
            .unwrap();
        assert_eq!(
            patch,
            json!({"document": {"media": {"videos": [
                {"title": "Spin", "video": "data:video/mp4;base64,AA=="}
            ]}}})
        );
    }

    #[test]
    fn patch_shape_for_edit_keeps_id() {
        let patch = MediaItem::new(MediaKind::Image, "Front", "data:image/png;base64,AA==")
            .with_id("abc123")
            .into_patch("additionalImages")
            .unwrap();
        assert_eq!(
            patch["document"]["media"]["additionalImages"][0]["_id"],
            json!("abc123")
        );
    }

    #[test]
    fn patch_shape_for_tombstone() {
        let patch = MediaItem::tombstone("abc123").into_patch("videos").unwrap();
        assert_eq!(
            patch,
            json!({"document": {"media": {"videos": [
                {"_id": "abc123", "delete": true}
            ]}}})
        );
    }

    #[test]
    fn deserializes_persisted_entities() {
        let item: MediaItem = serde_json::from_value(json!({
            "_id": "abc", "title": "Front", "image": "https://cdn/img.png"
        }))
        .unwrap();
        assert_eq!(item.id.as_deref(), Some("abc"));
        assert_eq!(item.kind(), Some(MediaKind::Image));
    }
}
