//! Media items for catalogue objects.
//!
//! The wizard's documentation steps attach images and videos to the object
//! under `document.media.<schemaKey>`. This crate owns the typed side of
//! that boundary: the [`MediaItem`] record, the data-URI encoding of a
//! selected file, the upload size ceiling, and the pre-submission
//! validation gate (a malformed item never reaches the merge engine).

use thiserror::Error;

pub mod data_uri;
pub mod item;
pub mod kind;

pub use data_uri::{check_size, encode_upload, to_data_uri, MAX_UPLOAD_BYTES};
pub use item::MediaItem;
pub use kind::MediaKind;

/// Known media schema keys. The engine accepts arbitrary keys; these are
/// the categories the catalogue form ships with.
pub mod schema_keys {
    pub const ADDITIONAL_IMAGES: &str = "additionalImages";
    pub const VIDEOS: &str = "videos";
    pub const ARCHIVED_IMAGES: &str = "archivedImages";
    pub const ARCHIVED_VIDEOS: &str = "archivedVideos";
}

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("MISSING_TITLE")]
    MissingTitle,
    #[error("MISSING_PAYLOAD")]
    MissingPayload,
    #[error("FILE_TOO_LARGE: {size} bytes exceeds the {limit} byte ceiling")]
    TooLarge { size: usize, limit: usize },
    #[error("UNKNOWN_KIND: {0}")]
    UnknownKind(String),
    #[error("SERIALIZE: {0}")]
    Serialize(String),
}
