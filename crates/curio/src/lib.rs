//! curio — cataloguing wizard core.
//!
//! Facade over the workspace crates:
//!
//! - [`document`] — the catalogue object document and its partial-update
//!   merge engine (upsert-by-id, tombstones, deep object merge);
//! - [`path`] — dotted-path utilities (`nest`, parse, format);
//! - [`media`] — media items, data-URI encoding, the upload ceiling;
//! - [`wizard`] — step navigation and the URL query-token mirror;
//! - [`session`] — the single-writer editing session over an async
//!   object store.

pub use curio_document as document;
pub use curio_media as media;
pub use curio_path as path;
pub use curio_session as session;
pub use curio_wizard as wizard;

pub use curio_document::Document;
pub use curio_session::{InMemoryObjectStore, ObjectSession, ObjectStore};
pub use curio_wizard::{StepSequence, Transition, Wizard};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
