//! Cache types

use serde::Serialize;

/// Statistics about the cache
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of records currently held (0 when the slot is empty)
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}
