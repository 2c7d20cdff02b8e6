//! Serializing record values to and from cache bytes.
//!
//! JSON keeps cached values human-readable, which is worth more than the
//! bytes saved by a binary encoding at this record volume.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Serializes any record value to JSON bytes for cache storage.
pub fn serialize_value<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(value).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON cache bytes back into a record value.
pub fn deserialize_value<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
