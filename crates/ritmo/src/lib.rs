//! Cached data-access layer for the ritmo event collective.
//!
//! Implementations behind the seams `ritmo_core` defines: the TTL cache,
//! the in-memory document store, the cache-aside [`storage::RecordStore`],
//! the [`auth::SessionGate`] and the application wiring in [`state`].

pub mod auth;
pub mod cache;
pub mod config;
pub mod state;
pub mod storage;

pub use config::Config;
pub use state::AppState;
