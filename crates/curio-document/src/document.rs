//! The catalogue object document.

use serde_json::{Map, Value};

use crate::entity::entity_id;
use crate::merge::apply::merge_object;
use crate::merge::{validate_patch, MergeError, MergeReport};

/// The full JSON record describing one catalogued object.
///
/// Invariant: the root is always an object. All mutation goes through
/// [`Document::merge`]; there is no other write path.
#[derive(Debug, Clone, PartialEq)]
pub struct Document(Value);

impl Document {
    /// Wrap a JSON tree as a document. The root must be an object.
    pub fn new(root: Value) -> Result<Self, MergeError> {
        match root {
            Value::Object(_) => Ok(Self(root)),
            _ => Err(MergeError::DocumentNotAnObject),
        }
    }

    /// A document with no fields yet (a freshly started catalogue entry).
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// The underlying JSON tree.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying JSON tree.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Read the value at a dotted key, e.g. `"document.media.videos"`.
    ///
    /// Returns `None` for missing nodes and for keys that do not parse.
    pub fn get(&self, dotted: &str) -> Option<&Value> {
        let path = curio_path::parse_dotted(dotted).ok()?;
        let mut cursor = &self.0;
        for step in &path {
            cursor = cursor.get(step)?;
        }
        Some(cursor)
    }

    /// Read the entity sequence at a dotted key, if there is one.
    pub fn sequence(&self, dotted: &str) -> Option<&Vec<Value>> {
        self.get(dotted)?.as_array()
    }

    /// Look up one media entity by schema key and id — the edit form's
    /// default-value lookup under `document.media.<schemaKey>`.
    pub fn media_item(&self, schema_key: &str, id: &str) -> Option<&Value> {
        self.0
            .get("document")?
            .get("media")?
            .get(schema_key)?
            .as_array()?
            .iter()
            .find(|item| entity_id(item) == Some(id))
    }

    /// Apply a partial-update patch.
    ///
    /// The patch is validated in full first; on any validation error the
    /// document is left untouched. After validation the apply pass cannot
    /// fail, so a merge is atomic from the caller's perspective.
    pub fn merge(&mut self, patch: &Value) -> Result<MergeReport, MergeError> {
        validate_patch(patch)?;
        let mut report = MergeReport::default();
        match (&mut self.0, patch) {
            (Value::Object(target), Value::Object(incoming)) => {
                merge_object(target, incoming, &mut report);
                Ok(report)
            }
            // Root invariant is established in `new`; validate_patch
            // already rejected non-object patches.
            _ => Err(MergeError::DocumentNotAnObject),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_requires_object_root() {
        assert!(Document::new(json!({"title": "x"})).is_ok());
        assert_eq!(
            Document::new(json!([1, 2])),
            Err(MergeError::DocumentNotAnObject)
        );
    }

    #[test]
    fn get_walks_dotted_keys() {
        let doc = Document::new(json!({"a": {"b": {"c": 7}}})).unwrap();
        assert_eq!(doc.get("a.b.c"), Some(&json!(7)));
        assert_eq!(doc.get("a.b"), Some(&json!({"c": 7})));
        assert_eq!(doc.get("a.z"), None);
        assert_eq!(doc.get(""), None);
    }

    #[test]
    fn media_item_lookup() {
        let doc = Document::new(json!({
            "document": {"media": {"videos": [
                {"_id": "v1", "title": "Walkthrough"},
                {"_id": "v2", "title": "Detail"},
            ]}}
        }))
        .unwrap();
        assert_eq!(
            doc.media_item("videos", "v2"),
            Some(&json!({"_id": "v2", "title": "Detail"}))
        );
        assert_eq!(doc.media_item("videos", "v9"), None);
        assert_eq!(doc.media_item("archivedImages", "v1"), None);
    }

    #[test]
    fn rejected_patch_leaves_document_untouched() {
        let mut doc = Document::new(json!({"items": [{"_id": "a"}]})).unwrap();
        let before = doc.clone();
        let err = doc
            .merge(&json!({"items": [{"delete": true}]}))
            .unwrap_err();
        assert_eq!(err, MergeError::TombstoneWithoutId);
        assert_eq!(doc, before);
    }

    #[test]
    fn merge_reports_entity_counts() {
        let mut doc = Document::empty();
        let report = doc
            .merge(&json!({"media": {"images": [{"title": "New"}]}}))
            .unwrap();
        assert_eq!(report.appended, 1);
        assert!(!report.no_entities_touched());
        let report = doc.merge(&json!({"title": "Still Life"})).unwrap();
        assert!(report.no_entities_touched());
    }
}
