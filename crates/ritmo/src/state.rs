use std::sync::Arc;

use ritmo_core::auth::IdentityProvider;
use ritmo_core::cache::Cache;
use ritmo_core::document::DocumentStore;
use ritmo_core::records::{Event, GalleryItem};

use crate::auth::SessionGate;
use crate::cache::MemoryCache;
use crate::storage::RecordStore;
use crate::Config;

/// Everything the data layer exposes, wired once at startup.
///
/// Both record stores share one cache instance, so a write to either kind
/// invalidates cached listings of both.
pub struct AppState {
    pub events: RecordStore<Event>,
    pub gallery: RecordStore<GalleryItem>,
    pub session: SessionGate,
}

impl AppState {
    pub fn new(
        config: &Config,
        store: Arc<dyn DocumentStore>,
        provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        let cache: Arc<dyn Cache> = Arc::new(MemoryCache::new(
            config.cache_ttl(),
            config.cache_max_entries,
        ));
        tracing::info!(
            project_id = %config.project_id,
            ttl_seconds = config.cache_ttl_seconds,
            "Data layer initialized"
        );

        Self {
            events: RecordStore::new(store.clone(), cache.clone(), config.query_timeout()),
            gallery: RecordStore::new(store, cache, config.query_timeout()),
            session: SessionGate::new(provider, config.admin_allow_list()),
        }
    }
}
