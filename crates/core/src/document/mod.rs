//! Untyped document model for the external document store.
//!
//! The store hands back string-keyed documents whose fields carry
//! provider-specific values (notably timestamps). Everything typed lives in
//! [`crate::records`]; this module is the shape of the wire.

mod error;
mod query;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use query::{Direction, Filter, Query};
pub use traits::DocumentStore;
pub use types::{Document, DocumentId, FieldValue, Fields, Timestamp};
