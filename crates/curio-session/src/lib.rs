//! The per-object editing session.
//!
//! One [`ObjectSession`] owns the in-memory document for the object being
//! catalogued. Every mutation funnels through
//! [`ObjectSession::update_or_add_item`], which merges the patch into a
//! candidate, persists the candidate through the [`ObjectStore`]
//! collaborator, and only commits the store-confirmed document as the new
//! source of truth. A persistence failure leaves the prior state intact
//! and the session usable.
//!
//! Mutating entry points take `&mut self`, so in-flight edits for one
//! object are serialized by ownership rather than by response-arrival
//! order.

pub mod session;
pub mod store;

pub use session::{ObjectSession, SessionError};
pub use store::{InMemoryObjectStore, ObjectStore, StoreError};
