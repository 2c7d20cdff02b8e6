use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },
    /// A query combined an equality filter with an order-by on a different
    /// field and the store has no composite index covering it.
    #[error("missing composite index: {0}")]
    MissingIndex(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("store did not respond within {seconds}s")]
    Timeout { seconds: u64 },
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl StoreError {
    /// Returns true when this error came from a missing composite index,
    /// which is an operational problem (deploy index definitions) rather
    /// than a transient one.
    pub fn is_missing_index(&self) -> bool {
        matches!(self, StoreError::MissingIndex(_))
    }
}

/// Result type for document store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
