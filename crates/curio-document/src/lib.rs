//! Catalogue object document model and merge engine.
//!
//! One in-memory JSON document describes one catalogued object (title,
//! media, provenance, valuation, ...). UI callers never resend the whole
//! document; they submit small partial-update patches which this crate
//! merges into the current state:
//!
//! - object nodes deep-merge (keys absent from the patch are preserved),
//! - scalar leaves overwrite,
//! - entity sequences merge by `_id`: upsert on a matching id, append with
//!   a freshly generated id when none is supplied, and remove on a
//!   `{_id, delete: true}` tombstone.
//!
//! # Example
//!
//! ```
//! use curio_document::Document;
//! use serde_json::json;
//!
//! let mut doc = Document::new(json!({
//!     "document": {"media": {"videos": [{"_id": "a1", "title": "Install shot"}]}}
//! })).unwrap();
//!
//! // Tombstone removes exactly the matching entity.
//! doc.merge(&json!({
//!     "document": {"media": {"videos": [{"_id": "a1", "delete": true}]}}
//! })).unwrap();
//! assert_eq!(doc.get("document.media.videos"), Some(&json!([])));
//! ```

pub mod document;
pub mod entity;
pub mod merge;

pub use document::Document;
pub use entity::{
    entity_id, generate_entity_id, is_tombstone, is_valid_entity_id, DELETE_KEY, ENTITY_ID_LEN,
    ID_KEY,
};
pub use merge::{validate_patch, MergeError, MergeReport};
