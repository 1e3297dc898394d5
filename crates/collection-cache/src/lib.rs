//! Single-slot TTL cache for read-mostly upstream collections
//!
//! Holds at most one collection of records plus the instant it was last
//! refreshed, serving reads while the TTL window is open and signalling a
//! miss otherwise so the caller can repopulate from the source of truth.

mod cache;
mod types;

pub use cache::CollectionCache;
pub use types::CacheStats;
