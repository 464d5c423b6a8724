//! The persistence collaborator.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serde_json::Value;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store refused the document (validation, auth, conflict).
    #[error("REJECTED: {0}")]
    Rejected(String),
    /// The store could not be reached.
    #[error("UNAVAILABLE")]
    Unavailable,
}

// ── Trait ─────────────────────────────────────────────────────────────────

/// Remote document store for catalogued objects.
///
/// `persist` receives the full candidate document and returns the
/// confirmed document - the store's word is what the session commits, so
/// server-side normalization flows back into local state.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    async fn persist(&self, object_id: &str, document: &Value) -> Result<Value, StoreError>;
}

// ── In-memory implementation ──────────────────────────────────────────────

/// Map-backed store for tests and demos: echoes the persisted document
/// back as confirmation. Failure injection via [`set_unavailable`] lets
/// tests exercise the rollback path.
///
/// [`set_unavailable`]: InMemoryObjectStore::set_unavailable
#[derive(Debug, Default)]
pub struct InMemoryObjectStore {
    objects: Mutex<HashMap<String, Value>>,
    unavailable: AtomicBool,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `persist` fail with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// The last persisted document for an object, if any.
    pub fn stored(&self, object_id: &str) -> Option<Value> {
        self.objects
            .lock()
            .ok()
            .and_then(|objects| objects.get(object_id).cloned())
    }
}

#[async_trait::async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn persist(&self, object_id: &str, document: &Value) -> Result<Value, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        let mut objects = self
            .objects
            .lock()
            .map_err(|_| StoreError::Rejected("store poisoned".to_string()))?;
        objects.insert(object_id.to_string(), document.clone());
        Ok(document.clone())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
