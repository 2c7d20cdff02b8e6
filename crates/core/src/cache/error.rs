use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// The in-memory cache never produces these; read paths log-and-continue on
/// cache failure rather than letting it shadow the store result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("cache operation failed: {0}")]
    OperationFailed(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_failed_display() {
        let error = CacheError::OperationFailed("poisoned".to_string());
        assert_eq!(error.to_string(), "cache operation failed: poisoned");
    }

    #[test]
    fn test_serialization_display() {
        let error = CacheError::Serialization("invalid JSON".to_string());
        assert_eq!(error.to_string(), "serialization error: invalid JSON");
    }
}
