use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::document::{Document, DocumentId, Fields, Result};

/// Conversion into untyped document fields for writes.
///
/// Drafts encode every field they carry; patches encode only the fields that
/// are set, leaving the rest of the document untouched on merge.
pub trait IntoFields {
    fn into_fields(self) -> Fields;
}

/// A typed record kind backed by one store collection.
///
/// `id`, `created_at` and `updated_at` are never part of a draft or patch:
/// the id comes from the store, the audit stamps from the store layer.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Create payload: the record minus id and audit fields.
    type Draft: IntoFields + Send;
    /// Update payload: a partial set of fields to merge.
    type Patch: IntoFields + Send;

    /// Collection name in the document store.
    const COLLECTION: &'static str;
    /// Cache key prefix for this kind.
    const KIND: &'static str;
    /// Field the published listing orders by, descending.
    const DATE_FIELD: &'static str;
    /// Result cap for the published listing.
    const PUBLISHED_LIMIT: usize;

    fn id(&self) -> &DocumentId;

    /// Decodes an untyped document into this record kind.
    fn from_document(doc: &Document) -> Result<Self>;
}
