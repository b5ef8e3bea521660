//! Pool lookup by route pattern.
//!
//! # Responsibilities
//! - Store pools under their route patterns, in registration order
//! - Resolve exactly one pool per call URL
//! - Lazily create and keep the fallback pool
//!
//! # Design Decisions
//! - Lookups read an immutable snapshot (lock-free via ArcSwap)
//! - Registrations serialize on a mutex and publish a new snapshot
//! - First match in registration order wins; replacement keeps the original position
//! - Unmatched URLs never fail: the fallback pool always exists after first use

use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::cache::CacheStore;
use crate::config::PoolConfig;
use crate::error::ClientResult;
use crate::observability::metrics;
use crate::pool::Pool;
use crate::routing::matcher::PatternMatcher;

#[derive(Debug, Clone)]
struct Route {
    matcher: PatternMatcher,
    pool: Arc<Pool>,
}

/// Ordered mapping from route pattern to [`Pool`].
#[derive(Debug)]
pub struct PoolRegistry {
    routes: ArcSwap<Vec<Route>>,
    write_lock: Mutex<()>,
    fallback: OnceCell<Arc<Pool>>,
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            routes: ArcSwap::from_pointee(Vec::new()),
            write_lock: Mutex::new(()),
            fallback: OnceCell::new(),
        }
    }

    /// Register or replace the pool for `pattern`.
    ///
    /// A replaced pool hands its cache to the new one when the cache
    /// capacity is unchanged; otherwise the new pool starts empty.
    pub fn register(&self, pattern: &str, config: PoolConfig) -> ClientResult<Arc<Pool>> {
        let matcher = PatternMatcher::new(pattern)?;

        let _guard = self.write_lock.lock();
        let current = self.routes.load_full();
        let existing = current.iter().position(|r| r.matcher.as_str() == pattern);

        let reused = existing.and_then(|i| current[i].pool.reusable_cache(&config));
        let kept_cache = reused.is_some();
        let cache = reused.or_else(|| CacheStore::new(config.cache_elements).map(Arc::new));
        let pool = Arc::new(Pool::with_cache(config, cache)?);

        let mut routes = current.as_ref().clone();
        let route = Route {
            matcher,
            pool: pool.clone(),
        };
        match existing {
            Some(i) => routes[i] = route,
            None => routes.push(route),
        }
        let count = routes.len();
        self.routes.store(Arc::new(routes));

        metrics::record_pool_count(count);
        tracing::info!(
            pattern = %pattern,
            base_url = %pool.base_url(),
            cache_elements = pool.config().cache_elements,
            replaced = existing.is_some(),
            kept_cache,
            "Pool registered"
        );

        Ok(pool)
    }

    /// Find the pool for a call URL, falling back to the default pool.
    pub fn resolve(&self, url: &str) -> ClientResult<Arc<Pool>> {
        let routes = self.routes.load();
        if let Some(route) = routes.iter().find(|r| r.matcher.matches(url)) {
            return Ok(route.pool.clone());
        }
        self.fallback().cloned()
    }

    /// The default pool, created on first use.
    pub fn fallback(&self) -> ClientResult<&Arc<Pool>> {
        self.fallback.get_or_try_init(|| {
            tracing::debug!("Creating default pool");
            Pool::fallback().map(Arc::new)
        })
    }

    /// Number of registered patterns (the default pool is not counted).
    pub fn len(&self) -> usize {
        self.routes.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered patterns in resolution order.
    pub fn patterns(&self) -> Vec<String> {
        self.routes
            .load()
            .iter()
            .map(|r| r.matcher.as_str().to_string())
            .collect()
    }
}
