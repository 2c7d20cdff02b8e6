//! Cache-aside record store over the document store seam.
//!
//! Reads go through the shared cache and absorb store failures into empty
//! results so list-rendering callers degrade instead of crashing; writes go
//! straight to the store, clear the whole cache and propagate their errors.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use ritmo_core::cache::{
    category_key, deserialize_value, featured_key, published_key, record_key, serialize_value,
    Cache,
};
use ritmo_core::document::{
    Direction, DocumentId, DocumentStore, FieldValue, Query, Result, StoreError, Timestamp,
};
use ritmo_core::records::{
    IntoFields, Record, CATEGORY_FIELD, CREATED_AT_FIELD, FEATURED_FIELD, PUBLISHED_FIELD,
    UPDATED_AT_FIELD,
};

/// Cap on category listings, independent of the kind's published limit.
const CATEGORY_LIMIT: usize = 50;

/// Typed CRUD over one record kind, with read caching and coarse write
/// invalidation.
///
/// Both concrete stores (events, gallery) share the one injected cache, so a
/// write to either kind clears both. Record volume is small enough that this
/// coarseness costs one extra query per kind after a write, bounded further
/// by the cache TTL.
pub struct RecordStore<T: Record> {
    store: Arc<dyn DocumentStore>,
    cache: Arc<dyn Cache>,
    query_timeout: Duration,
    _kind: PhantomData<fn() -> T>,
}

impl<T: Record> RecordStore<T> {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        cache: Arc<dyn Cache>,
        query_timeout: Duration,
    ) -> Self {
        Self {
            store,
            cache,
            query_timeout,
            _kind: PhantomData,
        }
    }

    /// Published records, newest primary date first, capped at
    /// `T::PUBLISHED_LIMIT`. Cached; store failures come back as empty.
    pub async fn list_published(&self) -> Vec<T> {
        let key = published_key(T::KIND);
        if let Some(records) = self.cached_list(&key).await {
            return records;
        }

        let query = Query::new()
            .filter(PUBLISHED_FIELD, true)
            .order_by(T::DATE_FIELD, Direction::Descending)
            .limit(T::PUBLISHED_LIMIT);

        match self.run_list_query(query).await {
            Ok(records) => {
                self.store_list(&key, &records).await;
                records
            }
            Err(err) => {
                log_read_failure(T::KIND, "published listing", &err);
                Vec::new()
            }
        }
    }

    /// Published and featured records, capped at `limit`. Cached per limit.
    pub async fn list_featured(&self, limit: usize) -> Vec<T> {
        let key = featured_key(T::KIND, limit);
        if let Some(records) = self.cached_list(&key).await {
            return records;
        }

        let query = Query::new()
            .filter(PUBLISHED_FIELD, true)
            .filter(FEATURED_FIELD, true)
            .order_by(T::DATE_FIELD, Direction::Descending)
            .limit(limit);

        match self.run_list_query(query).await {
            Ok(records) => {
                self.store_list(&key, &records).await;
                records
            }
            Err(err) => {
                log_read_failure(T::KIND, "featured listing", &err);
                Vec::new()
            }
        }
    }

    /// Published records of one category, newest primary date first, capped
    /// at [`CATEGORY_LIMIT`]. Cached per category.
    pub async fn list_by_category(&self, category: &str) -> Vec<T> {
        let key = category_key(T::KIND, category);
        if let Some(records) = self.cached_list(&key).await {
            return records;
        }

        let query = Query::new()
            .filter(PUBLISHED_FIELD, true)
            .filter(CATEGORY_FIELD, category)
            .order_by(T::DATE_FIELD, Direction::Descending)
            .limit(CATEGORY_LIMIT);

        match self.run_list_query(query).await {
            Ok(records) => {
                self.store_list(&key, &records).await;
                records
            }
            Err(err) => {
                log_read_failure(T::KIND, "category listing", &err);
                Vec::new()
            }
        }
    }

    /// Every record regardless of publication state, newest creation first.
    /// Never cached: admin views must always be fresh.
    pub async fn list_all(&self) -> Vec<T> {
        let query = Query::new().order_by(CREATED_AT_FIELD, Direction::Descending);
        match self.run_list_query(query).await {
            Ok(records) => records,
            Err(err) => {
                log_read_failure(T::KIND, "admin listing", &err);
                Vec::new()
            }
        }
    }

    /// A single record by id. Cached when found; absent documents and read
    /// failures both come back as `None`.
    pub async fn get(&self, id: &DocumentId) -> Option<T> {
        let key = record_key(T::KIND, id.as_str());
        if let Some(record) = self.cached_record(&key).await {
            return Some(record);
        }

        let fetch = self.store.get(T::COLLECTION, id);
        let doc = match self.with_timeout(fetch).await {
            Ok(Some(doc)) => doc,
            Ok(None) => return None,
            Err(err) => {
                log_read_failure(T::KIND, "get by id", &err);
                return None;
            }
        };

        match T::from_document(&doc) {
            Ok(record) => {
                self.store_record(&key, &record).await;
                Some(record)
            }
            Err(err) => {
                tracing::warn!(kind = T::KIND, id = %id, error = %err, "Undecodable document");
                None
            }
        }
    }

    /// Creates a record from a draft: audit stamps are assigned here, the id
    /// by the store. Clears the whole cache. Failures propagate.
    pub async fn create(&self, draft: T::Draft) -> Result<DocumentId> {
        let mut fields = draft.into_fields();
        let now = FieldValue::Timestamp(Timestamp::now());
        fields.insert(CREATED_AT_FIELD.to_string(), now.clone());
        fields.insert(UPDATED_AT_FIELD.to_string(), now);

        let id = self.store.add(T::COLLECTION, fields).await?;
        self.invalidate().await;
        tracing::debug!(kind = T::KIND, id = %id, "Record created");
        Ok(id)
    }

    /// Merges a patch into an existing record with a fresh `updated_at`.
    /// Clears the whole cache. Failures propagate.
    pub async fn update(&self, id: &DocumentId, patch: T::Patch) -> Result<()> {
        let mut fields = patch.into_fields();
        fields.insert(
            UPDATED_AT_FIELD.to_string(),
            FieldValue::Timestamp(Timestamp::now()),
        );

        self.store.update(T::COLLECTION, id, fields).await?;
        self.invalidate().await;
        tracing::debug!(kind = T::KIND, id = %id, "Record updated");
        Ok(())
    }

    /// Deletes a record; deleting an absent one succeeds. Clears the whole
    /// cache. Failures propagate.
    pub async fn delete(&self, id: &DocumentId) -> Result<()> {
        self.store.delete(T::COLLECTION, id).await?;
        self.invalidate().await;
        tracing::debug!(kind = T::KIND, id = %id, "Record deleted");
        Ok(())
    }

    async fn with_timeout<F, O>(&self, fut: F) -> Result<O>
    where
        F: Future<Output = Result<O>>,
    {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout {
                seconds: self.query_timeout.as_secs(),
            }),
        }
    }

    async fn run_list_query(&self, query: Query) -> Result<Vec<T>> {
        let docs = self
            .with_timeout(self.store.query(T::COLLECTION, query))
            .await?;

        // One undecodable document must not take the whole listing down.
        let mut records = Vec::with_capacity(docs.len());
        for doc in &docs {
            match T::from_document(doc) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(kind = T::KIND, id = %doc.id, error = %err, "Skipping undecodable document");
                }
            }
        }
        Ok(records)
    }

    async fn cached_list(&self, key: &str) -> Option<Vec<T>> {
        self.cached::<Vec<T>>(key).await
    }

    async fn cached_record(&self, key: &str) -> Option<T> {
        self.cached::<T>(key).await
    }

    async fn cached<V: DeserializeOwned>(&self, key: &str) -> Option<V> {
        let bytes = match self.cache.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::trace!(key, "Cache miss");
                return None;
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "Cache read failed");
                return None;
            }
        };
        match deserialize_value(&bytes) {
            Ok(value) => {
                tracing::trace!(key, "Cache hit");
                Some(value)
            }
            Err(err) => {
                // Treat as a miss; the next store round-trip overwrites it.
                tracing::warn!(key, error = %err, "Cache value deserialization failed");
                None
            }
        }
    }

    async fn store_list(&self, key: &str, records: &[T]) {
        self.store_value(key, &records).await;
    }

    async fn store_record(&self, key: &str, record: &T) {
        self.store_value(key, record).await;
    }

    async fn store_value<V: Serialize>(&self, key: &str, value: &V) {
        let bytes = match serialize_value(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key, error = %err, "Cache value serialization failed");
                return;
            }
        };
        if let Err(err) = self.cache.set(key, &bytes).await {
            tracing::warn!(key, error = %err, "Failed to populate cache");
        }
    }

    async fn invalidate(&self) {
        if let Err(err) = self.cache.clear().await {
            tracing::warn!(kind = T::KIND, error = %err, "Failed to clear cache after write");
        }
    }
}

fn log_read_failure(kind: &str, operation: &str, err: &StoreError) {
    if err.is_missing_index() {
        tracing::error!(
            kind,
            operation,
            error = %err,
            "Composite index missing; deploy the store index definitions"
        );
    } else {
        tracing::error!(kind, operation, error = %err, "Read query failed, returning empty result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use tokio::sync::RwLock;

    use ritmo_core::document::{Document, Fields};
    use ritmo_core::records::{
        Event, EventCategory, EventDraft, EventPatch, GalleryCategory, GalleryDraft, GalleryItem,
        Location,
    };

    use crate::cache::MemoryCache;
    use crate::storage::MemoryDocumentStore;

    /// Delegating spy: counts queries and can be primed to fail reads.
    struct SpyStore {
        inner: MemoryDocumentStore,
        query_calls: AtomicUsize,
        get_calls: AtomicUsize,
        fail_reads_with: RwLock<Option<StoreError>>,
    }

    impl SpyStore {
        fn new() -> Self {
            Self {
                inner: MemoryDocumentStore::new(),
                query_calls: AtomicUsize::new(0),
                get_calls: AtomicUsize::new(0),
                fail_reads_with: RwLock::new(None),
            }
        }

        async fn fail_reads(&self, err: StoreError) {
            *self.fail_reads_with.write().await = Some(err);
        }

        fn queries(&self) -> usize {
            self.query_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DocumentStore for SpyStore {
        async fn query(&self, collection: &str, query: Query) -> Result<Vec<Document>> {
            self.query_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = self.fail_reads_with.read().await.clone() {
                return Err(err);
            }
            self.inner.query(collection, query).await
        }

        async fn get(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = self.fail_reads_with.read().await.clone() {
                return Err(err);
            }
            self.inner.get(collection, id).await
        }

        async fn add(&self, collection: &str, fields: Fields) -> Result<DocumentId> {
            self.inner.add(collection, fields).await
        }

        async fn update(&self, collection: &str, id: &DocumentId, fields: Fields) -> Result<()> {
            self.inner.update(collection, id, fields).await
        }

        async fn delete(&self, collection: &str, id: &DocumentId) -> Result<()> {
            self.inner.delete(collection, id).await
        }
    }

    /// Store whose queries outlive any sane timeout.
    struct SlowStore;

    #[async_trait]
    impl DocumentStore for SlowStore {
        async fn query(&self, _collection: &str, _query: Query) -> Result<Vec<Document>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }

        async fn get(&self, _collection: &str, _id: &DocumentId) -> Result<Option<Document>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(None)
        }

        async fn add(&self, _collection: &str, _fields: Fields) -> Result<DocumentId> {
            Ok(DocumentId::new("slow"))
        }

        async fn update(&self, _c: &str, _id: &DocumentId, _fields: Fields) -> Result<()> {
            Ok(())
        }

        async fn delete(&self, _c: &str, _id: &DocumentId) -> Result<()> {
            Ok(())
        }
    }

    fn event_draft(title: &str, day: u32, published: bool, featured: bool) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: "desc".to_string(),
            short_description: "short".to_string(),
            date: Utc.with_ymd_and_hms(2024, 9, day, 22, 0, 0).unwrap(),
            end_date: None,
            location: Location {
                name: "Ex Macello".to_string(),
                address: "Via del Porto 1".to_string(),
                city: "Bologna".to_string(),
                coordinates: None,
            },
            images: vec!["https://cdn.example/a.jpg".to_string()],
            videos: vec![],
            category: EventCategory::TechHouse,
            lineup: vec!["Resident A".to_string()],
            ticket_link: None,
            price: None,
            max_attendees: None,
            highlights: vec![],
            published,
            featured,
            created_by: "admin-uid".to_string(),
        }
    }

    fn gallery_draft(title: &str) -> GalleryDraft {
        GalleryDraft {
            title: title.to_string(),
            description: None,
            images: vec!["https://cdn.example/g.jpg".to_string()],
            videos: vec![],
            category: GalleryCategory::Crowd,
            tags: vec![],
            date: Utc.with_ymd_and_hms(2024, 8, 31, 23, 0, 0).unwrap(),
            event_id: None,
            published: true,
            featured: false,
            created_by: "admin-uid".to_string(),
        }
    }

    fn make_store(spy: Arc<SpyStore>) -> RecordStore<Event> {
        let cache = Arc::new(MemoryCache::new(Duration::from_secs(300), 1000));
        RecordStore::new(spy, cache, Duration::from_secs(10))
    }

    #[tokio::test]
    async fn test_list_published_filters_and_orders() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());

        store.create(event_draft("older", 1, true, false)).await.unwrap();
        store.create(event_draft("newer", 20, true, false)).await.unwrap();
        store.create(event_draft("draft", 25, false, false)).await.unwrap();

        let events = store.list_published().await;
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["newer", "older"]);
        assert!(events.iter().all(|e| e.published));
    }

    #[tokio::test]
    async fn test_list_published_second_call_hits_cache() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        store.create(event_draft("a", 1, true, false)).await.unwrap();

        let first = store.list_published().await;
        assert_eq!(spy.queries(), 1);

        let second = store.list_published().await;
        assert_eq!(spy.queries(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_create_invalidates_listing_cache() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        store.create(event_draft("a", 1, true, false)).await.unwrap();

        assert_eq!(store.list_published().await.len(), 1);
        assert_eq!(spy.queries(), 1);

        store.create(event_draft("b", 2, true, false)).await.unwrap();

        let events = store.list_published().await;
        // The write cleared the cache, so this re-queried and sees b.
        assert_eq!(spy.queries(), 2);
        assert_eq!(events.len(), 2);
    }

    #[tokio::test]
    async fn test_update_invalidates_and_refreshes_updated_at() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        let id = store.create(event_draft("a", 1, true, false)).await.unwrap();

        let before = store.get(&id).await.unwrap();

        store
            .update(
                &id,
                EventPatch {
                    title: Some("renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let after = store.get(&id).await.unwrap();
        assert_eq!(after.title, "renamed");
        // Untouched fields survive the merge; the audit stamp moves.
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent_and_idempotent() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        let id = store.create(event_draft("a", 1, true, false)).await.unwrap();

        store.delete(&id).await.unwrap();
        assert!(store.get(&id).await.is_none());

        // Deleting again is still a success.
        store.delete(&id).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_round_trips_draft_fields() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        let draft = event_draft("Warehouse Night", 21, true, true);
        let created_after = Utc::now();
        let id = store.create(draft.clone()).await.unwrap();

        let event = store.get(&id).await.unwrap();
        assert_eq!(event.id, id);
        assert_eq!(event.title, draft.title);
        assert_eq!(event.date, draft.date);
        assert_eq!(event.location, draft.location);
        assert_eq!(event.category, draft.category);
        assert_eq!(event.published, draft.published);
        assert_eq!(event.created_by, draft.created_by);
        // Server-assigned, not from the draft.
        assert!(event.created_at >= created_after - chrono::Duration::seconds(1));
        assert_eq!(
            event.created_at.timestamp(),
            event.updated_at.timestamp()
        );
    }

    #[tokio::test]
    async fn test_get_is_cached_per_id() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        let id = store.create(event_draft("a", 1, true, false)).await.unwrap();

        store.get(&id).await.unwrap();
        assert_eq!(spy.get_calls.load(Ordering::SeqCst), 1);
        store.get(&id).await.unwrap();
        assert_eq!(spy.get_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_absent_record_is_not_cached() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());

        let id = DocumentId::new("missing");
        assert!(store.get(&id).await.is_none());
        assert!(store.get(&id).await.is_none());
        // Both calls went to the store; negatives are never cached.
        assert_eq!(spy.get_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_list_all_includes_unpublished_and_is_uncached() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        store.create(event_draft("live", 1, true, false)).await.unwrap();
        store.create(event_draft("draft", 2, false, false)).await.unwrap();

        let all = store.list_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(spy.queries(), 1);

        // Always fresh: a second call queries again.
        store.list_all().await;
        assert_eq!(spy.queries(), 2);
    }

    #[tokio::test]
    async fn test_list_all_orders_by_creation_descending() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        store.create(event_draft("first", 20, true, false)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        store.create(event_draft("second", 1, true, false)).await.unwrap();

        let all = store.list_all().await;
        // Newest created first, regardless of event date.
        assert_eq!(all[0].title, "second");
        assert_eq!(all[1].title, "first");
    }

    #[tokio::test]
    async fn test_list_featured_filters_and_caches_per_limit() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        store.create(event_draft("plain", 1, true, false)).await.unwrap();
        store.create(event_draft("star", 2, true, true)).await.unwrap();
        store.create(event_draft("hidden star", 3, false, true)).await.unwrap();

        let featured = store.list_featured(3).await;
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].title, "star");
        assert_eq!(spy.queries(), 1);

        // Same limit: cached. Different limit: separate key, new query.
        store.list_featured(3).await;
        assert_eq!(spy.queries(), 1);
        store.list_featured(5).await;
        assert_eq!(spy.queries(), 2);
    }

    #[tokio::test]
    async fn test_list_by_category_filters_and_caches_per_category() {
        let spy = Arc::new(SpyStore::new());
        let cache = Arc::new(MemoryCache::new(Duration::from_secs(300), 1000));
        let gallery: RecordStore<GalleryItem> =
            RecordStore::new(spy.clone(), cache, Duration::from_secs(10));

        let mut crowd = gallery_draft("crowd shot");
        crowd.category = GalleryCategory::Crowd;
        gallery.create(crowd).await.unwrap();

        let mut venue = gallery_draft("main room");
        venue.category = GalleryCategory::Venue;
        gallery.create(venue).await.unwrap();

        let mut unpublished = gallery_draft("unreleased crowd shot");
        unpublished.category = GalleryCategory::Crowd;
        unpublished.published = false;
        gallery.create(unpublished).await.unwrap();

        let items = gallery.list_by_category("crowd").await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "crowd shot");
        assert_eq!(spy.queries(), 1);

        // Same category: cached. Different category: separate key, new query.
        gallery.list_by_category("crowd").await;
        assert_eq!(spy.queries(), 1);
        let venue_items = gallery.list_by_category("venue").await;
        assert_eq!(venue_items.len(), 1);
        assert_eq!(venue_items[0].title, "main room");
        assert_eq!(spy.queries(), 2);
    }

    #[tokio::test]
    async fn test_read_failure_returns_empty() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        store.create(event_draft("a", 1, true, false)).await.unwrap();

        spy.fail_reads(StoreError::QueryFailed("backend unavailable".to_string()))
            .await;

        assert!(store.list_published().await.is_empty());
        assert!(store.list_all().await.is_empty());
        assert!(store.list_featured(3).await.is_empty());
        assert!(store.get(&DocumentId::new("any")).await.is_none());
    }

    #[tokio::test]
    async fn test_missing_index_returns_empty() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        spy.fail_reads(StoreError::MissingIndex(
            "events: published == ?, order by date desc".to_string(),
        ))
        .await;

        assert!(store.list_published().await.is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());

        let result = store
            .update(
                &DocumentId::new("missing"),
                EventPatch {
                    title: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_timed_out_read_returns_empty() {
        let cache = Arc::new(MemoryCache::new(Duration::from_secs(300), 1000));
        let store: RecordStore<Event> =
            RecordStore::new(Arc::new(SlowStore), cache, Duration::from_millis(50));

        assert!(store.list_published().await.is_empty());
        assert!(store.get(&DocumentId::new("any")).await.is_none());
    }

    #[tokio::test]
    async fn test_undecodable_document_is_skipped() {
        let spy = Arc::new(SpyStore::new());
        let store = make_store(spy.clone());
        store.create(event_draft("good", 1, true, false)).await.unwrap();

        // A published document with no category cannot decode.
        let mut fields = Fields::new();
        fields.insert("published".to_string(), FieldValue::Bool(true));
        spy.inner.add("events", fields).await.unwrap();

        let events = store.list_published().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "good");
    }

    #[tokio::test]
    async fn test_gallery_store_uses_its_own_collection() {
        let spy = Arc::new(SpyStore::new());
        let cache = Arc::new(MemoryCache::new(Duration::from_secs(300), 1000));
        let events: RecordStore<Event> =
            RecordStore::new(spy.clone(), cache.clone(), Duration::from_secs(10));
        let gallery: RecordStore<GalleryItem> =
            RecordStore::new(spy.clone(), cache, Duration::from_secs(10));

        events.create(event_draft("a", 1, true, false)).await.unwrap();
        gallery.create(gallery_draft("crowd shot")).await.unwrap();

        assert_eq!(spy.inner.len("events").await, 1);
        assert_eq!(spy.inner.len("gallery").await, 1);

        let items = gallery.list_published().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "crowd shot");
    }

    #[tokio::test]
    async fn test_shared_cache_is_cleared_by_either_kind() {
        let spy = Arc::new(SpyStore::new());
        let cache = Arc::new(MemoryCache::new(Duration::from_secs(300), 1000));
        let events: RecordStore<Event> =
            RecordStore::new(spy.clone(), cache.clone(), Duration::from_secs(10));
        let gallery: RecordStore<GalleryItem> =
            RecordStore::new(spy.clone(), cache, Duration::from_secs(10));

        events.create(event_draft("a", 1, true, false)).await.unwrap();
        events.list_published().await;
        assert_eq!(spy.queries(), 1);

        // A gallery write clears the one shared cache.
        gallery.create(gallery_draft("crowd shot")).await.unwrap();

        events.list_published().await;
        assert_eq!(spy.queries(), 2);
    }
}
