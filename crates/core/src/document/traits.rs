use async_trait::async_trait;

use super::{Document, DocumentId, Fields, Query, Result};

/// The external document store, Firestore-shaped.
///
/// Collections hold string-identified documents; queries support equality
/// filters, a single order-by and a limit. Timestamps cross this boundary in
/// the provider representation ([`super::Timestamp`]).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Runs a query against a collection.
    async fn query(&self, collection: &str, query: Query) -> Result<Vec<Document>>;

    /// Fetches a single document by id. `Ok(None)` when it does not exist.
    async fn get(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>>;

    /// Adds a new document; the store assigns and returns the id.
    async fn add(&self, collection: &str, fields: Fields) -> Result<DocumentId>;

    /// Merges fields into an existing document. Fields not named are left
    /// untouched. Fails with `NotFound` when the document does not exist.
    async fn update(&self, collection: &str, id: &DocumentId, fields: Fields) -> Result<()>;

    /// Deletes a document. Deleting an absent document is a success.
    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<()>;
}
