//! Typed records stored in the document store.
//!
//! Each record kind implements [`Record`]: where it lives, how it decodes
//! from an untyped document, and what its draft (create) and patch (update)
//! payloads encode to. The decode step owns the defaulting rules for absent
//! fields; wrong-typed fields are errors, absent ones are not.

mod decode;
mod event;
mod gallery;
mod record;

pub use event::{Coordinates, Event, EventCategory, EventDraft, EventPatch, Location, PriceRange};
pub use gallery::{GalleryCategory, GalleryDraft, GalleryItem, GalleryPatch};
pub use record::{IntoFields, Record};

/// Field name for the publication flag, shared by all record kinds.
pub const PUBLISHED_FIELD: &str = "published";
/// Field name for the featured flag, shared by all record kinds.
pub const FEATURED_FIELD: &str = "featured";
/// Field name for the category, shared by all record kinds.
pub const CATEGORY_FIELD: &str = "category";
/// Audit field stamped once at creation.
pub const CREATED_AT_FIELD: &str = "created_at";
/// Audit field refreshed on every update.
pub const UPDATED_AT_FIELD: &str = "updated_at";
