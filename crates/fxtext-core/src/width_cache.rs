#![forbid(unsafe_code)]

//! LRU width cache for text measurement.
//!
//! Width measurement is a hot path: wrapping measures every candidate line
//! and drawing measures every effect glyph, every frame. This cache stores
//! computed widths to avoid asking the font again for repeated strings.
//!
//! # Example
//! ```
//! use fxtext_core::WidthCache;
//!
//! let mut cache = WidthCache::new(1000);
//!
//! let width = cache.get_or_compute_with("Hello", |s| s.len() as f32 * 8.0);
//! assert_eq!(width, 40.0);
//!
//! // Second call hits cache
//! let width2 = cache.get_or_compute_with("Hello", |_| unreachable!());
//! assert_eq!(width2, 40.0);
//!
//! let stats = cache.stats();
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses, 1);
//! ```

use crate::metrics::TextMetrics;
use lru::LruCache;
use rustc_hash::FxHasher;
use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache for text width measurements.
///
/// Keys are 64-bit FxHash values of the text rather than the text itself,
/// which keeps memory flat at the cost of a ~2^-64 collision chance.
///
/// `WidthCache` is not thread-safe.
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, f32>,
    hits: u64,
    misses: u64,
}

impl WidthCache {
    /// Create a new cache with the specified capacity.
    ///
    /// If capacity is zero, defaults to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a new cache with the default capacity (4096 entries).
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Get the cached width or compute it with `compute` and cache it.
    pub fn get_or_compute_with<F>(&mut self, text: &str, compute: F) -> f32
    where
        F: FnOnce(&str) -> f32,
    {
        let hash = hash_text(text);

        if let Some(&width) = self.cache.get(&hash) {
            self.hits += 1;
            return width;
        }

        self.misses += 1;
        let width = compute(text);
        self.cache.put(hash, width);
        width
    }

    /// Check if a text string is in the cache.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains(&hash_text(text))
    }

    /// Peek at the cached width without updating LRU order.
    #[must_use]
    pub fn peek(&self, text: &str) -> Option<f32> {
        self.cache.peek(&hash_text(text)).copied()
    }

    /// Clear the cache.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    /// Get the current number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[inline]
fn hash_text(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}

/// A [`TextMetrics`] wrapper that memoises `measure_width`.
///
/// Height and renderability are forwarded untouched. The cache lives in a
/// `RefCell` so measurement keeps its `&self` signature; a `CachedMetrics`
/// therefore must not be shared across threads.
#[derive(Debug)]
pub struct CachedMetrics<M> {
    inner: M,
    cache: RefCell<WidthCache>,
}

impl<M: TextMetrics> CachedMetrics<M> {
    /// Wrap `inner` with a default-capacity cache.
    pub fn new(inner: M) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// Wrap `inner` with a cache of the given capacity.
    pub fn with_capacity(inner: M, capacity: usize) -> Self {
        Self {
            inner,
            cache: RefCell::new(WidthCache::new(capacity)),
        }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Cache statistics so far.
    pub fn stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }

    /// Drop every cached width, e.g. after the host swaps fonts.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<M: TextMetrics> TextMetrics for CachedMetrics<M> {
    fn measure_width(&self, text: &str) -> f32 {
        self.cache
            .borrow_mut()
            .get_or_compute_with(text, |t| self.inner.measure_width(t))
    }

    fn measure_height(&self, text: &str) -> f32 {
        self.inner.measure_height(text)
    }

    fn is_renderable(&self, ch: char) -> bool {
        self.inner.is_renderable(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::CellMetrics;

    fn len_width(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = WidthCache::new(100);
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().capacity, 100);
    }

    #[test]
    fn zero_capacity_becomes_one() {
        let cache = WidthCache::new(0);
        assert_eq!(cache.stats().capacity, 1);
    }

    #[test]
    fn get_or_compute_caches_value() {
        let mut cache = WidthCache::new(100);

        assert_eq!(cache.get_or_compute_with("hello", len_width), 5.0);
        assert_eq!(cache.get_or_compute_with("hello", len_width), 5.0);
        assert_eq!(cache.len(), 1);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn lru_eviction() {
        let mut cache = WidthCache::new(2);

        cache.get_or_compute_with("a", len_width);
        cache.get_or_compute_with("b", len_width);
        cache.get_or_compute_with("c", len_width); // Should evict "a"

        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn peek_does_not_update_lru() {
        let mut cache = WidthCache::new(2);

        cache.get_or_compute_with("a", len_width);
        cache.get_or_compute_with("b", len_width);
        assert_eq!(cache.peek("a"), Some(1.0));
        cache.get_or_compute_with("c", len_width);

        assert!(!cache.contains("a"));
    }

    #[test]
    fn clear_and_reset_stats() {
        let mut cache = WidthCache::new(10);
        cache.get_or_compute_with("x", len_width);
        cache.clear();
        cache.reset_stats();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats {
            hits: 0,
            misses: 0,
            size: 0,
            capacity: 10,
        });
    }

    #[test]
    fn empty_stats_hit_rate_is_zero() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn cached_metrics_memoises_width() {
        let metrics = CachedMetrics::new(CellMetrics::new(8.0, 16.0));
        assert_eq!(metrics.measure_width("abc"), 24.0);
        assert_eq!(metrics.measure_width("abc"), 24.0);
        let stats = metrics.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn cached_metrics_forwards_height_and_charset() {
        let metrics = CachedMetrics::new(CellMetrics::new(8.0, 16.0).charset(['a']));
        assert_eq!(metrics.measure_height(" "), 16.0);
        assert!(metrics.is_renderable('a'));
        assert!(!metrics.is_renderable('b'));
        assert_eq!(metrics.inner().cell_width(), 8.0);
    }

    #[test]
    fn cached_metrics_clear_forces_recompute() {
        let metrics = CachedMetrics::with_capacity(CellMetrics::default(), 4);
        metrics.measure_width("ab");
        metrics.clear();
        metrics.measure_width("ab");
        assert_eq!(metrics.stats().misses, 2);
    }
}
