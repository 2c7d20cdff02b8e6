use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentId, FieldValue, Fields, Result, Timestamp};

use super::decode::{
    bool_field, datetime_field, enum_field, opt_string_field, string_field, string_list_field,
};
use super::record::{IntoFields, Record};
use super::{FEATURED_FIELD, PUBLISHED_FIELD};

/// Closed set of gallery categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryCategory {
    Events,
    Venue,
    Crowd,
    Artists,
    Backstage,
}

impl std::fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Events => "events",
            Self::Venue => "venue",
            Self::Crowd => "crowd",
            Self::Artists => "artists",
            Self::Backstage => "backstage",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for GalleryCategory {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "events" => Ok(Self::Events),
            "venue" => Ok(Self::Venue),
            "crowd" => Ok(Self::Crowd),
            "artists" => Ok(Self::Artists),
            "backstage" => Ok(Self::Backstage),
            _ => Err(()),
        }
    }
}

/// A media item in the public gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: DocumentId,
    pub title: String,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub category: GalleryCategory,
    /// Search tags.
    pub tags: Vec<String>,
    /// Date of the material, not of the upload.
    pub date: DateTime<Utc>,
    /// Optional link back to the event this material came from.
    pub event_id: Option<String>,
    pub published: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

/// Create payload for a gallery item.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryDraft {
    pub title: String,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub category: GalleryCategory,
    pub tags: Vec<String>,
    pub date: DateTime<Utc>,
    pub event_id: Option<String>,
    pub published: bool,
    pub featured: bool,
    pub created_by: String,
}

/// Update payload for a gallery item; only set fields are merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub videos: Option<Vec<String>>,
    pub category: Option<GalleryCategory>,
    pub tags: Option<Vec<String>>,
    pub date: Option<DateTime<Utc>>,
    pub event_id: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}

impl IntoFields for GalleryDraft {
    fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), FieldValue::from(self.title));
        if let Some(description) = self.description {
            fields.insert("description".to_string(), FieldValue::from(description));
        }
        fields.insert("images".to_string(), FieldValue::from(self.images));
        fields.insert("videos".to_string(), FieldValue::from(self.videos));
        fields.insert(
            "category".to_string(),
            FieldValue::from(self.category.to_string()),
        );
        fields.insert("tags".to_string(), FieldValue::from(self.tags));
        fields.insert(
            "date".to_string(),
            FieldValue::Timestamp(Timestamp::from_datetime(self.date)),
        );
        if let Some(event_id) = self.event_id {
            fields.insert("event_id".to_string(), FieldValue::from(event_id));
        }
        fields.insert(PUBLISHED_FIELD.to_string(), FieldValue::Bool(self.published));
        fields.insert(FEATURED_FIELD.to_string(), FieldValue::Bool(self.featured));
        fields.insert("created_by".to_string(), FieldValue::from(self.created_by));
        fields
    }
}

impl IntoFields for GalleryPatch {
    fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        if let Some(title) = self.title {
            fields.insert("title".to_string(), FieldValue::from(title));
        }
        if let Some(description) = self.description {
            fields.insert("description".to_string(), FieldValue::from(description));
        }
        if let Some(images) = self.images {
            fields.insert("images".to_string(), FieldValue::from(images));
        }
        if let Some(videos) = self.videos {
            fields.insert("videos".to_string(), FieldValue::from(videos));
        }
        if let Some(category) = self.category {
            fields.insert(
                "category".to_string(),
                FieldValue::from(category.to_string()),
            );
        }
        if let Some(tags) = self.tags {
            fields.insert("tags".to_string(), FieldValue::from(tags));
        }
        if let Some(date) = self.date {
            fields.insert(
                "date".to_string(),
                FieldValue::Timestamp(Timestamp::from_datetime(date)),
            );
        }
        if let Some(event_id) = self.event_id {
            fields.insert("event_id".to_string(), FieldValue::from(event_id));
        }
        if let Some(published) = self.published {
            fields.insert(PUBLISHED_FIELD.to_string(), FieldValue::Bool(published));
        }
        if let Some(featured) = self.featured {
            fields.insert(FEATURED_FIELD.to_string(), FieldValue::Bool(featured));
        }
        fields
    }
}

impl Record for GalleryItem {
    type Draft = GalleryDraft;
    type Patch = GalleryPatch;

    const COLLECTION: &'static str = "gallery";
    const KIND: &'static str = "gallery";
    const DATE_FIELD: &'static str = "date";
    const PUBLISHED_LIMIT: usize = 100;

    fn id(&self) -> &DocumentId {
        &self.id
    }

    fn from_document(doc: &Document) -> Result<Self> {
        Ok(GalleryItem {
            id: doc.id.clone(),
            title: string_field(doc, "title")?,
            description: opt_string_field(doc, "description")?,
            images: string_list_field(doc, "images")?,
            videos: string_list_field(doc, "videos")?,
            category: enum_field(doc, "category")?,
            tags: string_list_field(doc, "tags")?,
            date: datetime_field(doc, "date")?,
            event_id: opt_string_field(doc, "event_id")?,
            published: bool_field(doc, PUBLISHED_FIELD)?,
            featured: bool_field(doc, FEATURED_FIELD)?,
            created_at: datetime_field(doc, "created_at")?,
            updated_at: datetime_field(doc, "updated_at")?,
            created_by: string_field(doc, "created_by")?,
        })
    }
}
