//! Core types and traits for the ritmo data-access layer.
//!
//! This crate holds everything that is pure or a seam: the document model
//! and the `DocumentStore` trait, the `Cache` trait with its key builders
//! and serialization helpers, the typed records with their explicit decode
//! step, the auth types with provider error classification, and the
//! pagination arithmetic. Implementations live in the `ritmo` crate.

pub mod auth;
pub mod cache;
pub mod document;
pub mod pagination;
pub mod records;
