//! In-memory TTL cache with LRU eviction.
//!
//! One fixed TTL for the whole instance; entries are removed lazily when an
//! expired key is read, and in bulk on [`Cache::clear`]. The LRU bound keeps
//! memory flat if key cardinality ever grows past expectations.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use ritmo_core::cache::{Cache, Result};

/// A single cache entry with its storage instant.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    stored_at: Instant,
}

impl CacheEntry {
    fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    /// An entry is valid iff less than `ttl` has passed since it was stored.
    fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() >= ttl
    }
}

/// Thread-safe in-memory cache: `Arc<RwLock<LruCache>>` with per-instance TTL.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
    ttl: Duration,
}

impl MemoryCache {
    /// Creates a cache holding entries for `ttl`, bounded at `max_entries`.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl,
        }
    }

    /// The fixed TTL of this instance.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;
        match store.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                return Ok(Some(entry.value.clone()))
            }
            Some(_) => {}
            None => return Ok(None),
        }
        // Expired entry: remove it so the slot is freed immediately.
        store.pop(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec()));
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut store = self.store.write().await;
        store.clear();
        Ok(())
    }
}
