//! A configured connection pool.
//!
//! # Responsibilities
//! - Own the transport, base URL, optional cache and stale flag
//! - Prefix call URLs with the base URL
//! - Decide whether an existing cache survives re-registration

use std::sync::Arc;

use crate::cache::CacheStore;
use crate::config::PoolConfig;
use crate::error::ClientResult;
use crate::pool::transport::build_transport;

/// An independently configured HTTP client context.
#[derive(Debug)]
pub struct Pool {
    transport: reqwest::Client,
    config: PoolConfig,
    cache: Option<Arc<CacheStore>>,
}

impl Pool {
    /// Create a pool with a fresh cache (if any).
    pub fn new(config: PoolConfig) -> ClientResult<Self> {
        let cache = CacheStore::new(config.cache_elements).map(Arc::new);
        Self::with_cache(config, cache)
    }

    /// Create a pool around an existing cache instance.
    pub(crate) fn with_cache(config: PoolConfig, cache: Option<Arc<CacheStore>>) -> ClientResult<Self> {
        let transport = build_transport(&config)?;
        Ok(Self {
            transport,
            config,
            cache,
        })
    }

    /// The pool used when no pattern matches: no cache, no timeout.
    pub fn fallback() -> ClientResult<Self> {
        Self::new(PoolConfig::default())
    }

    pub fn transport(&self) -> &reqwest::Client {
        &self.transport
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn cache(&self) -> Option<&CacheStore> {
        self.cache.as_deref()
    }

    /// Stale entries are served only when a cache exists.
    pub fn serves_stale(&self) -> bool {
        self.cache.is_some() && self.config.serve_stale
    }

    /// Prefix `url` with the base URL unless it already contains it.
    pub fn resolve_url(&self, url: &str) -> String {
        let base = self.base_url();
        if base.is_empty() || url.contains(base) {
            url.to_string()
        } else {
            format!("{base}{url}")
        }
    }

    /// The cache to carry over into a pool built from `next`.
    ///
    /// Kept only when both configurations use the same capacity.
    pub(crate) fn reusable_cache(&self, next: &PoolConfig) -> Option<Arc<CacheStore>> {
        self.cache
            .as_ref()
            .filter(|cache| cache.capacity() == next.cache_elements)
            .cloned()
    }
}
