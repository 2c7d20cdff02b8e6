use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentId, FieldValue, Fields, Result, StoreError, Timestamp};

use super::decode::{
    bool_field, datetime_field, enum_field, opt_datetime_field, opt_f64_field, opt_string_field,
    opt_u32_field, string_field, string_list_field,
};
use super::record::{IntoFields, Record};
use super::{FEATURED_FIELD, PUBLISHED_FIELD};

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    DeepTech,
    TechHouse,
    Minimal,
    Afterparty,
    Special,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::DeepTech => "deep-tech",
            Self::TechHouse => "tech-house",
            Self::Minimal => "minimal",
            Self::Afterparty => "afterparty",
            Self::Special => "special",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for EventCategory {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "deep-tech" => Ok(Self::DeepTech),
            "tech-house" => Ok(Self::TechHouse),
            "minimal" => Ok(Self::Minimal),
            "afterparty" => Ok(Self::Afterparty),
            "special" => Ok(Self::Special),
            _ => Err(()),
        }
    }
}

/// Where an event takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub city: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Ticket price range in a single currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub from: f64,
    pub to: Option<f64>,
    pub currency: String,
}

/// A published or draft event of the collective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub short_description: String,
    /// Primary date; published listings order by this, descending.
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Location,
    /// Image URLs.
    pub images: Vec<String>,
    /// Video URLs.
    pub videos: Vec<String>,
    pub category: EventCategory,
    /// DJ / artist lineup.
    pub lineup: Vec<String>,
    pub ticket_link: Option<String>,
    pub price: Option<PriceRange>,
    pub max_attendees: Option<u32>,
    /// Free-form selling points ("Open Air", "Funktion-One", ...).
    pub highlights: Vec<String>,
    pub published: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Uid of the admin who created the event.
    pub created_by: String,
}

/// Create payload: everything the caller supplies. Id and audit stamps are
/// assigned by the store layer.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Location,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub category: EventCategory,
    pub lineup: Vec<String>,
    pub ticket_link: Option<String>,
    pub price: Option<PriceRange>,
    pub max_attendees: Option<u32>,
    pub highlights: Vec<String>,
    pub published: bool,
    pub featured: bool,
    pub created_by: String,
}

/// Update payload: only set fields are merged. A field left `None` keeps its
/// stored value; this layer cannot clear an optional field back to absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    pub images: Option<Vec<String>>,
    pub videos: Option<Vec<String>>,
    pub category: Option<EventCategory>,
    pub lineup: Option<Vec<String>>,
    pub ticket_link: Option<String>,
    pub price: Option<PriceRange>,
    pub max_attendees: Option<u32>,
    pub highlights: Option<Vec<String>>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}

fn location_to_value(location: &Location) -> FieldValue {
    let mut map = Fields::new();
    map.insert("name".to_string(), FieldValue::from(location.name.clone()));
    map.insert(
        "address".to_string(),
        FieldValue::from(location.address.clone()),
    );
    map.insert("city".to_string(), FieldValue::from(location.city.clone()));
    if let Some(coords) = &location.coordinates {
        let mut c = Fields::new();
        c.insert("lat".to_string(), FieldValue::Double(coords.lat));
        c.insert("lng".to_string(), FieldValue::Double(coords.lng));
        map.insert("coordinates".to_string(), FieldValue::Map(c));
    }
    FieldValue::Map(map)
}

fn price_to_value(price: &PriceRange) -> FieldValue {
    let mut map = Fields::new();
    map.insert("from".to_string(), FieldValue::Double(price.from));
    if let Some(to) = price.to {
        map.insert("to".to_string(), FieldValue::Double(to));
    }
    map.insert(
        "currency".to_string(),
        FieldValue::from(price.currency.clone()),
    );
    FieldValue::Map(map)
}

fn decode_location(doc: &Document) -> Result<Location> {
    let Some(value) = doc.field("location") else {
        // Same defaulting spirit as scalar fields: absent map, empty location.
        return Ok(Location {
            name: String::new(),
            address: String::new(),
            city: String::new(),
            coordinates: None,
        });
    };
    let map = value.as_map().ok_or_else(|| {
        StoreError::InvalidData(format!("field `location` on document {}: expected map", doc.id))
    })?;
    let nested = Document::new(doc.id.clone(), map.clone());
    let coordinates = match nested.field("coordinates") {
        Some(value) => {
            let c = value.as_map().ok_or_else(|| {
                StoreError::InvalidData(format!(
                    "field `location.coordinates` on document {}: expected map",
                    doc.id
                ))
            })?;
            let coords = Document::new(doc.id.clone(), c.clone());
            match (
                opt_f64_field(&coords, "lat")?,
                opt_f64_field(&coords, "lng")?,
            ) {
                (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
                _ => None,
            }
        }
        None => None,
    };
    Ok(Location {
        name: string_field(&nested, "name")?,
        address: string_field(&nested, "address")?,
        city: string_field(&nested, "city")?,
        coordinates,
    })
}

fn decode_price(doc: &Document) -> Result<Option<PriceRange>> {
    let Some(value) = doc.field("price") else {
        return Ok(None);
    };
    let map = value.as_map().ok_or_else(|| {
        StoreError::InvalidData(format!("field `price` on document {}: expected map", doc.id))
    })?;
    let nested = Document::new(doc.id.clone(), map.clone());
    Ok(Some(PriceRange {
        from: opt_f64_field(&nested, "from")?.unwrap_or(0.0),
        to: opt_f64_field(&nested, "to")?,
        currency: string_field(&nested, "currency")?,
    }))
}

impl IntoFields for EventDraft {
    fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), FieldValue::from(self.title));
        fields.insert("description".to_string(), FieldValue::from(self.description));
        fields.insert(
            "short_description".to_string(),
            FieldValue::from(self.short_description),
        );
        fields.insert(
            "date".to_string(),
            FieldValue::Timestamp(Timestamp::from_datetime(self.date)),
        );
        // Explicit null keeps the field visible in the stored document.
        fields.insert(
            "end_date".to_string(),
            self.end_date
                .map(|dt| FieldValue::Timestamp(Timestamp::from_datetime(dt)))
                .unwrap_or(FieldValue::Null),
        );
        fields.insert("location".to_string(), location_to_value(&self.location));
        fields.insert("images".to_string(), FieldValue::from(self.images));
        fields.insert("videos".to_string(), FieldValue::from(self.videos));
        fields.insert(
            "category".to_string(),
            FieldValue::from(self.category.to_string()),
        );
        fields.insert("lineup".to_string(), FieldValue::from(self.lineup));
        if let Some(link) = self.ticket_link {
            fields.insert("ticket_link".to_string(), FieldValue::from(link));
        }
        if let Some(price) = &self.price {
            fields.insert("price".to_string(), price_to_value(price));
        }
        if let Some(max) = self.max_attendees {
            fields.insert("max_attendees".to_string(), FieldValue::Integer(max as i64));
        }
        fields.insert("highlights".to_string(), FieldValue::from(self.highlights));
        fields.insert(PUBLISHED_FIELD.to_string(), FieldValue::Bool(self.published));
        fields.insert(FEATURED_FIELD.to_string(), FieldValue::Bool(self.featured));
        fields.insert("created_by".to_string(), FieldValue::from(self.created_by));
        fields
    }
}

impl IntoFields for EventPatch {
    fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        if let Some(title) = self.title {
            fields.insert("title".to_string(), FieldValue::from(title));
        }
        if let Some(description) = self.description {
            fields.insert("description".to_string(), FieldValue::from(description));
        }
        if let Some(short) = self.short_description {
            fields.insert("short_description".to_string(), FieldValue::from(short));
        }
        if let Some(date) = self.date {
            fields.insert(
                "date".to_string(),
                FieldValue::Timestamp(Timestamp::from_datetime(date)),
            );
        }
        if let Some(end_date) = self.end_date {
            fields.insert(
                "end_date".to_string(),
                FieldValue::Timestamp(Timestamp::from_datetime(end_date)),
            );
        }
        if let Some(location) = &self.location {
            fields.insert("location".to_string(), location_to_value(location));
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
        if let Some(lineup) = self.lineup {
            fields.insert("lineup".to_string(), FieldValue::from(lineup));
        }
        if let Some(link) = self.ticket_link {
            fields.insert("ticket_link".to_string(), FieldValue::from(link));
        }
        if let Some(price) = &self.price {
            fields.insert("price".to_string(), price_to_value(price));
        }
        if let Some(max) = self.max_attendees {
            fields.insert("max_attendees".to_string(), FieldValue::Integer(max as i64));
        }
        if let Some(highlights) = self.highlights {
            fields.insert("highlights".to_string(), FieldValue::from(highlights));
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

impl Record for Event {
    type Draft = EventDraft;
    type Patch = EventPatch;

    const COLLECTION: &'static str = "events";
    const KIND: &'static str = "event";
    const DATE_FIELD: &'static str = "date";
    const PUBLISHED_LIMIT: usize = 50;

    fn id(&self) -> &DocumentId {
        &self.id
    }

    fn from_document(doc: &Document) -> Result<Self> {
        Ok(Event {
            id: doc.id.clone(),
            title: string_field(doc, "title")?,
            description: string_field(doc, "description")?,
            short_description: string_field(doc, "short_description")?,
            date: datetime_field(doc, "date")?,
            end_date: opt_datetime_field(doc, "end_date")?,
            location: decode_location(doc)?,
            images: string_list_field(doc, "images")?,
            videos: string_list_field(doc, "videos")?,
            category: enum_field(doc, "category")?,
            lineup: string_list_field(doc, "lineup")?,
            ticket_link: opt_string_field(doc, "ticket_link")?,
            price: decode_price(doc)?,
            max_attendees: opt_u32_field(doc, "max_attendees")?,
            highlights: string_list_field(doc, "highlights")?,
            published: bool_field(doc, PUBLISHED_FIELD)?,
            featured: bool_field(doc, FEATURED_FIELD)?,
            created_at: datetime_field(doc, "created_at")?,
            updated_at: datetime_field(doc, "updated_at")?,
            created_by: string_field(doc, "created_by")?,
        })
    }
}
