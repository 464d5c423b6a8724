//! File payload encoding.
//!
//! A selected file becomes a Base64 data URI before it is stored on the
//! media entity. The size ceiling is enforced on the raw bytes, before any
//! encoding work happens.

use base64::Engine;

use crate::MediaError;

/// Upload size ceiling: 20 MB of raw file bytes.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Reject payloads over the upload ceiling.
pub fn check_size(size: usize) -> Result<(), MediaError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(MediaError::TooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// Convert bytes to `data:<mime>;base64,...`.
pub fn to_data_uri(buf: &[u8], mime: &str) -> String {
    let mut uri = String::from("data:");
    uri.push_str(mime);
    uri.push_str(";base64,");
    uri.push_str(&base64::engine::general_purpose::STANDARD.encode(buf));
    uri
}

/// Size-check then encode a selected file.
///
/// This is the one-shot conversion the form runs on file selection; an
/// oversized file is rejected without touching the encoder.
pub fn encode_upload(buf: &[u8], mime: &str) -> Result<String, MediaError> {
    check_size(buf.len())?;
    Ok(to_data_uri(buf, mime))
}

// ── Tests ─────────────────────────────────────────────────────────────────
