//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Idle connections kept per host when a pool does not set its own limit.
pub const DEFAULT_MAX_IDLE_PER_HOST: usize = 100;

/// Root configuration for the client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Pool definitions, registered in file order.
    pub pools: Vec<PoolRouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A pool bound to the route pattern that selects it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PoolRouteConfig {
    /// Regular expression matched against the call URL.
    pub pattern: String,

    #[serde(flatten)]
    pub pool: PoolConfig,
}

/// Connection pool configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PoolConfig {
    /// Prefix added to call URLs that don't already contain it.
    pub base_url: String,

    /// Maximum idle connections kept per host (0 = default).
    pub max_idle_per_host: usize,

    /// Request timeout in milliseconds (0 = no timeout).
    pub timeout_ms: u64,

    /// Optional forward proxy URL.
    pub proxy: Option<String>,

    /// Response cache capacity (0 = caching disabled).
    pub cache_elements: usize,

    /// Serve expired cache entries when the upstream fails.
    pub serve_stale: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            max_idle_per_host: 0,
            timeout_ms: 0,
            proxy: None,
            cache_elements: 0,
            serve_stale: false,
        }
    }
}

impl PoolConfig {
    /// Set the base URL prefix.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the forward proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Enable the response cache with the given capacity.
    pub fn with_cache(mut self, elements: usize, serve_stale: bool) -> Self {
        self.cache_elements = elements;
        self.serve_stale = serve_stale;
        self
    }

    /// Idle connection limit with the default applied.
    pub fn effective_max_idle(&self) -> usize {
        if self.max_idle_per_host > 0 {
            self.max_idle_per_host
        } else {
            DEFAULT_MAX_IDLE_PER_HOST
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
