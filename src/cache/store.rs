//! Bounded response store.
//!
//! # Responsibilities
//! - Hold cached responses keyed by resolved URL
//! - Evict the least-recently-used key when full
//! - Report freshness lazily on lookup
//!
//! # Design Decisions
//! - One mutex around the LRU; held only for the O(1) map operation
//! - Expired entries are returned, flagged stale, so callers can fall back to them
//! - Entries are cloned out so no lock outlives the lookup

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;

use crate::cache::policy::MAX_TTL_SECS;
use crate::http::response::Headers;

/// A cached response body and headers with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub body: String,
    pub headers: Headers,
    pub expires_at: Instant,
}

impl CacheEntry {
    /// Entry that stays fresh for `ttl` from now.
    ///
    /// A lifetime past the clock's range saturates at [`MAX_TTL_SECS`].
    pub fn new(body: impl Into<String>, headers: Headers, ttl: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now
            .checked_add(ttl)
            .or_else(|| now.checked_add(Duration::from_secs(MAX_TTL_SECS)))
            .unwrap_or(now);
        Self {
            body: body.into(),
            headers,
            expires_at,
        }
    }

    /// True while the expiry instant lies in the future.
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Result of a cache lookup.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub entry: CacheEntry,
    pub fresh: bool,
}

/// Fixed-capacity LRU map from URL to [`CacheEntry`].
#[derive(Debug)]
pub struct CacheStore {
    inner: Mutex<LruCache<String, CacheEntry>>,
    capacity: NonZeroUsize,
}

impl CacheStore {
    /// Create a store holding at most `capacity` entries.
    ///
    /// Returns `None` for a zero capacity, which means caching is disabled.
    pub fn new(capacity: usize) -> Option<Self> {
        let capacity = NonZeroUsize::new(capacity)?;
        Some(Self {
            inner: Mutex::new(LruCache::new(capacity)),
            capacity,
        })
    }

    /// Look up a key, marking it most-recently-used.
    pub fn get(&self, key: &str) -> Option<Lookup> {
        let now = Instant::now();
        let mut inner = self.inner.lock();
        inner.get(key).map(|entry| Lookup {
            fresh: entry.is_fresh_at(now),
            entry: entry.clone(),
        })
    }

    /// Insert or replace a key, marking it most-recently-used.
    ///
    /// Returns the key evicted to make room, if any.
    pub fn put(&self, key: impl Into<String>, entry: CacheEntry) -> Option<String> {
        let key = key.into();
        let mut inner = self.inner.lock();
        match inner.push(key.clone(), entry) {
            Some((old_key, _)) if old_key != key => Some(old_key),
            _ => None,
        }
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// True if the key is present, without touching recency.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }
}
