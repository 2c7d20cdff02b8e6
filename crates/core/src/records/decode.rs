//! Decode helpers: untyped document fields to typed values.
//!
//! Defaulting rules, applied uniformly across record kinds:
//! absent string -> `""`, absent bool -> `false`, absent list -> `[]`,
//! absent timestamp -> now, absent optional -> `None`. A field that is
//! present with the wrong type is an `InvalidData` error, not a default.

use chrono::{DateTime, Utc};

use crate::document::{Document, FieldValue, Result, StoreError};

fn wrong_type(doc: &Document, name: &str, expected: &str) -> StoreError {
    StoreError::InvalidData(format!(
        "field `{name}` on document {}: expected {expected}",
        doc.id
    ))
}

/// Required-shape string: absent decodes to the empty string.
pub(crate) fn string_field(doc: &Document, name: &str) -> Result<String> {
    match doc.field(name) {
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| wrong_type(doc, name, "string")),
        None => Ok(String::new()),
    }
}

pub(crate) fn opt_string_field(doc: &Document, name: &str) -> Result<Option<String>> {
    match doc.field(name) {
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .map(Some)
            .ok_or_else(|| wrong_type(doc, name, "string")),
        None => Ok(None),
    }
}

/// Absent decodes to `false`.
pub(crate) fn bool_field(doc: &Document, name: &str) -> Result<bool> {
    match doc.field(name) {
        Some(value) => value
            .as_bool()
            .ok_or_else(|| wrong_type(doc, name, "bool")),
        None => Ok(false),
    }
}

/// Absent decodes to the empty list; elements must all be strings.
pub(crate) fn string_list_field(doc: &Document, name: &str) -> Result<Vec<String>> {
    match doc.field(name) {
        Some(value) => {
            let items = value
                .as_array()
                .ok_or_else(|| wrong_type(doc, name, "array of strings"))?;
            items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| wrong_type(doc, name, "array of strings"))
                })
                .collect()
        }
        None => Ok(Vec::new()),
    }
}

/// Absent decodes to the current time. The original data set predates the
/// audit fields, so old documents must not fail here.
pub(crate) fn datetime_field(doc: &Document, name: &str) -> Result<DateTime<Utc>> {
    match doc.field(name) {
        Some(value) => value
            .as_timestamp()
            .map(|ts| ts.to_datetime())
            .ok_or_else(|| wrong_type(doc, name, "timestamp")),
        None => Ok(Utc::now()),
    }
}

pub(crate) fn opt_datetime_field(doc: &Document, name: &str) -> Result<Option<DateTime<Utc>>> {
    match doc.field(name) {
        Some(value) => value
            .as_timestamp()
            .map(|ts| Some(ts.to_datetime()))
            .ok_or_else(|| wrong_type(doc, name, "timestamp")),
        None => Ok(None),
    }
}

pub(crate) fn opt_f64_field(doc: &Document, name: &str) -> Result<Option<f64>> {
    match doc.field(name) {
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| wrong_type(doc, name, "number")),
        None => Ok(None),
    }
}

pub(crate) fn opt_u32_field(doc: &Document, name: &str) -> Result<Option<u32>> {
    match doc.field(name) {
        Some(value) => {
            let n = value
                .as_i64()
                .ok_or_else(|| wrong_type(doc, name, "integer"))?;
            u32::try_from(n)
                .map(Some)
                .map_err(|_| wrong_type(doc, name, "non-negative integer"))
        }
        None => Ok(None),
    }
}

/// Parses a closed-enumeration field. Absent or out-of-enum values are
/// errors: categories are required and the sets are fixed.
pub(crate) fn enum_field<T: std::str::FromStr>(doc: &Document, name: &str) -> Result<T> {
    let raw = doc
        .field(name)
        .and_then(FieldValue::as_str)
        .ok_or_else(|| wrong_type(doc, name, "category string"))?;
    raw.parse().map_err(|_| {
        StoreError::InvalidData(format!(
            "field `{name}` on document {}: unknown value `{raw}`",
            doc.id
        ))
    })
}
