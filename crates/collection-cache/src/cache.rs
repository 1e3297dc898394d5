//! Time-bounded cache around a single upstream collection

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use crate::types::CacheStats;

struct Slot<T> {
    items: Vec<T>,
    refreshed_at: Instant,
}

/// A single-slot TTL cache for one upstream collection.
///
/// The cache never fetches anything itself: a `get` miss is the signal for
/// the caller to fetch from upstream and call [`set`](Self::set). An empty
/// slot (never populated, or invalidated) is distinct from a cached empty
/// collection. Concurrent misses may each fetch and `set` independently;
/// the later write wins and readers always observe a whole collection from
/// a single `set`.
pub struct CollectionCache<T> {
    slot: RwLock<Option<Slot<T>>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<T: Clone> CollectionCache<T> {
    /// Create an empty cache whose entries stay fresh for `ttl` after a `set`
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get the held collection, or `None` when the slot is empty or the TTL
    /// window has closed
    pub async fn get(&self) -> Option<Vec<T>> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some(s) if s.refreshed_at.elapsed() < self.ttl => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(s.items.clone())
            }
            Some(_) => {
                debug!(ttl_secs = self.ttl.as_secs(), "Cache entry expired");
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Find the first cached record matching `pred`, within one consistent
    /// snapshot. Freshness rules are the same as [`get`](Self::get).
    pub async fn find<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.get().await?.into_iter().find(|item| pred(item))
    }

    /// Replace the held collection wholesale and restart the TTL window
    pub async fn set(&self, items: Vec<T>) {
        let mut slot = self.slot.write().await;
        *slot = Some(Slot {
            items,
            refreshed_at: Instant::now(),
        });
    }

    /// Insert a record at the front of the held collection without touching
    /// the TTL window. No-op when the slot is empty: the next read-through
    /// fill fetches the authoritative collection anyway.
    pub async fn prepend(&self, item: T) {
        let mut slot = self.slot.write().await;
        if let Some(s) = slot.as_mut() {
            s.items.insert(0, item);
        }
    }

    /// Clear the slot so the next read is forced back to upstream. Idempotent.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }

    /// Get current cache statistics
    pub async fn stats(&self) -> CacheStats {
        let slot = self.slot.read().await;
        CacheStats {
            entries: slot.as_ref().map(|s| s.items.len()).unwrap_or(0),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
