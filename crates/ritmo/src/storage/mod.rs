//! Storage: the in-memory document store backend and the cache-aside
//! record store built on top of the `DocumentStore` seam.

mod memory;
mod records;

pub use memory::MemoryDocumentStore;
pub use records::RecordStore;
