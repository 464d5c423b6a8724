//! Media kind tag.

use crate::MediaError;

/// Whether a media item carries an image or a video payload.
///
/// The kind selects which field of the entity holds the encoded payload
/// (`image` or `video`), matching the document schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, MediaError> {
        match s {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            other => Err(MediaError::UnknownKind(other.to_string())),
        }
    }

    /// The entity field that carries this kind's payload.
    pub fn payload_key(&self) -> &'static str {
        self.as_str()
    }
}
