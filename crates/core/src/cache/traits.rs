use async_trait::async_trait;

use super::Result;

/// Byte-level cache with one fixed TTL per instance.
///
/// The TTL is a property of the cache, not of individual entries, and callers
/// never invalidate single keys: writes clear everything. That coarseness is
/// deliberate; record volume is small and staleness is bounded by the TTL.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns the value for `key` if present and unexpired. An expired
    /// entry is removed and reported as absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores a value under `key` with a fresh timestamp, overwriting any
    /// previous entry.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Removes all entries unconditionally.
    async fn clear(&self) -> Result<()>;
}
