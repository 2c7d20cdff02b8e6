//! Cache key builders.
//!
//! One key per read operation kind, prefixed by the record kind so events and
//! gallery items share a single cache without colliding.

/// Returns the cache key for the published listing of a record kind.
pub fn published_key(kind: &str) -> String {
    format!("{kind}:published")
}

/// Returns the cache key for a featured listing capped at `limit`.
///
/// The limit is part of the key: callers asking for different caps must not
/// see each other's truncated lists.
pub fn featured_key(kind: &str, limit: usize) -> String {
    format!("{kind}:featured:{limit}")
}

/// Returns the cache key for the published listing of one category.
pub fn category_key(kind: &str, category: &str) -> String {
    format!("{kind}:category:{category}")
}

/// Returns the cache key for a single record by id.
pub fn record_key(kind: &str, id: &str) -> String {
    format!("{kind}:{id}")
}
