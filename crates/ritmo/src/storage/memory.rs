//! In-memory document store backend.
//!
//! Behaves like the hosted store from the caller's side: assigns ids,
//! merges updates, evaluates equality filters, order-by and limits in
//! process. With index enforcement turned on it also refuses queries that
//! would need an undeclared composite index, so the operational failure the
//! hosted store produces can be exercised locally.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use ritmo_core::document::{
    Direction, Document, DocumentId, DocumentStore, FieldValue, Fields, Query, Result, StoreError,
};

/// A registered composite index: filter field + order field on a collection.
type CompositeIndex = (String, String, String);

/// In-memory storage backend for development and testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, BTreeMap<String, Fields>>>>,
    indexes: Arc<RwLock<HashSet<CompositeIndex>>>,
    enforce_indexes: bool,
}

impl MemoryDocumentStore {
    /// Creates an empty store that accepts any query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects composite queries lacking a registered
    /// index, mirroring the hosted store's behavior.
    pub fn with_index_enforcement() -> Self {
        Self {
            enforce_indexes: true,
            ..Self::default()
        }
    }

    /// Registers a composite index for `collection`: equality on
    /// `filter_field` combined with order-by on `order_field`.
    pub async fn register_index(&self, collection: &str, filter_field: &str, order_field: &str) {
        let mut indexes = self.indexes.write().await;
        indexes.insert((
            collection.to_string(),
            filter_field.to_string(),
            order_field.to_string(),
        ));
    }

    /// Number of documents in a collection, for assertions in tests.
    pub async fn len(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, BTreeMap::len)
    }

    pub async fn is_empty(&self, collection: &str) -> bool {
        self.len(collection).await == 0
    }

    async fn check_indexes(&self, collection: &str, query: &Query) -> Result<()> {
        if !self.enforce_indexes || !query.needs_composite_index() {
            return Ok(());
        }
        let Some((order_field, _)) = &query.order_by else {
            return Ok(());
        };
        let indexes = self.indexes.read().await;
        for filter in &query.filters {
            if &filter.field == order_field {
                continue;
            }
            let key = (
                collection.to_string(),
                filter.field.clone(),
                order_field.clone(),
            );
            if !indexes.contains(&key) {
                return Err(StoreError::MissingIndex(query.describe(collection)));
            }
        }
        Ok(())
    }
}

/// Orders field values for an order-by clause. Absent sorts before present;
/// values of different shapes sort by shape so the result is total.
fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    fn rank(value: &FieldValue) -> u8 {
        match value {
            FieldValue::Null => 0,
            FieldValue::Bool(_) => 1,
            FieldValue::Integer(_) | FieldValue::Double(_) => 2,
            FieldValue::Timestamp(_) => 3,
            FieldValue::Str(_) => 4,
            FieldValue::Array(_) => 5,
            FieldValue::Map(_) => 6,
        }
    }

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
            (FieldValue::Str(x), FieldValue::Str(y)) => x.cmp(y),
            (FieldValue::Timestamp(x), FieldValue::Timestamp(y)) => x.cmp(y),
            (FieldValue::Integer(x), FieldValue::Integer(y)) => x.cmp(y),
            (x, y) => match (x.as_f64(), y.as_f64()) {
                (Some(fx), Some(fy)) => fx.partial_cmp(&fy).unwrap_or(Ordering::Equal),
                _ => rank(x).cmp(&rank(y)),
            },
        },
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn query(&self, collection: &str, query: Query) -> Result<Vec<Document>> {
        self.check_indexes(collection, &query).await?;

        let collections = self.collections.read().await;
        let docs = collections.get(collection);

        let mut matches: Vec<Document> = docs
            .map(|docs| {
                docs.iter()
                    .filter(|(_, fields)| {
                        query
                            .filters
                            .iter()
                            .all(|f| fields.get(&f.field) == Some(&f.value))
                    })
                    .map(|(id, fields)| Document::new(id.as_str(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default();

        if let Some((field, direction)) = &query.order_by {
            matches.sort_by(|a, b| {
                let ordering = compare_values(a.fields.get(field), b.fields.get(field));
                match direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            matches.truncate(limit);
        }

        Ok(matches)
    }

    async fn get(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id.as_str()))
            .map(|fields| Document::new(id.clone(), fields.clone())))
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<DocumentId> {
        let id = DocumentId::new(Uuid::new_v4().to_string());
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.as_str().to_string(), fields);
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &DocumentId, fields: Fields) -> Result<()> {
        let mut collections = self.collections.write().await;
        let existing = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id.as_str()))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.as_str().to_string(),
            })?;
        existing.extend(fields);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            // Absent documents delete successfully; delete is idempotent.
            docs.remove(id.as_str());
        }
        Ok(())
    }
}
