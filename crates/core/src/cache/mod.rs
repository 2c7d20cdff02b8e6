//! Read-cache seam: trait, key builders, byte-level serialization.

mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{category_key, featured_key, published_key, record_key};
pub use serialization::{deserialize_value, serialize_value, SerializationError};
pub use traits::Cache;
