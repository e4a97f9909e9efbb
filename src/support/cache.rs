//! Bounded least-recently-used cache of computed stems.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

use lru::LruCache;
use parking_lot::Mutex;

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
    pub capacity: usize,
}

/// Thread-safe LRU cache mapping words to their stems.
///
/// A capacity of zero stores nothing.
pub struct StemCache {
    // None when the capacity is zero.
    inner: Option<Mutex<LruCache<String, String>>>,
    capacity: usize,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl std::fmt::Debug for StemCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.len())
            .finish()
    }
}

impl StemCache {
    /// Create a cache holding at most `capacity` stems.
    pub fn new(capacity: usize) -> Self {
        StemCache {
            inner: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
            capacity,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Get the cached stem of `word`, marking it as recently used.
    pub fn get(&self, word: &str) -> Option<String> {
        let stem = self
            .inner
            .as_ref()
            .and_then(|inner| inner.lock().get(word).cloned());
        let counter = if stem.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        stem
    }

    /// Store the stem of `word`, evicting the least recently used entry when
    /// the cache is full.
    pub fn put(&self, word: impl Into<String>, stem: impl Into<String>) {
        if let Some(inner) = &self.inner {
            inner.lock().put(word.into(), stem.into());
        }
    }

    /// Maximum number of stems held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stems currently held.
    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |inner| inner.lock().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry and reset the statistics.
    pub fn clear(&self) {
        if let Some(inner) = &self.inner {
            inner.lock().clear();
        }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_put() {
        let cache = StemCache::new(2);
        assert_eq!(cache.get("gatos"), None);

        cache.put("gatos", "gat");
        assert_eq!(cache.get("gatos"), Some("gat".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_least_recently_used_is_evicted() {
        let cache = StemCache::new(2);
        cache.put("gatos", "gat");
        cache.put("cães", "cão");

        // "gatos" becomes the most recently used entry
        assert!(cache.get("gatos").is_some());
        cache.put("livros", "livr");

        assert_eq!(cache.len(), 2);
        assert!(cache.get("cães").is_none());
        assert!(cache.get("gatos").is_some());
        assert!(cache.get("livros").is_some());
    }

    #[test]
    fn test_overwrite_does_not_grow() {
        let cache = StemCache::new(2);
        cache.put("gatos", "gato");
        cache.put("gatos", "gat");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("gatos"), Some("gat".to_string()));
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let cache = StemCache::new(0);
        cache.put("gatos", "gat");
        assert!(cache.is_empty());
        assert_eq!(cache.get("gatos"), None);
    }

    #[test]
    fn test_stats_and_clear() {
        let cache = StemCache::new(4);
        cache.put("gatos", "gat");
        cache.get("gatos");
        cache.get("cães");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.capacity, 4);

        cache.clear();
        assert_eq!(cache.stats(), CacheStats {
            capacity: 4,
            ..CacheStats::default()
        });
    }
}
