//! Client facade.
//!
//! # Responsibilities
//! - Own the pool and mock registries
//! - Expose one method per HTTP verb
//! - Apply file configuration as pool registrations
//!
//! # Design Decisions
//! - Registries are explicit and injectable; nothing is process-global
//! - Cloning a client shares its registries

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;

use crate::config::{ClientConfig, PoolConfig};
use crate::error::{ClientResult, RequestResult};
use crate::http::executor;
use crate::http::request::header_set;
use crate::http::Response;
use crate::mock::MockRegistry;
use crate::pool::Pool;
use crate::routing::PoolRegistry;

/// Multi-pool HTTP client with response caching and mock interception.
#[derive(Debug, Clone)]
pub struct RestClient {
    pools: Arc<PoolRegistry>,
    mocks: Arc<MockRegistry>,
}

impl Default for RestClient {
    fn default() -> Self {
        Self::from_env()
    }
}

impl RestClient {
    /// Create a client around existing registries.
    pub fn new(pools: Arc<PoolRegistry>, mocks: Arc<MockRegistry>) -> Self {
        Self { pools, mocks }
    }

    /// Empty client; mocks follow the environment.
    pub fn from_env() -> Self {
        Self::new(Arc::new(PoolRegistry::new()), Arc::new(MockRegistry::from_env()))
    }

    /// Empty client with mock interception set explicitly.
    pub fn with_mocks(enabled: bool) -> Self {
        Self::new(Arc::new(PoolRegistry::new()), Arc::new(MockRegistry::new(enabled)))
    }

    /// Client with every configured pool registered in order.
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let client = Self::from_env();
        client.apply_config(config)?;
        Ok(client)
    }

    /// Register every pool of `config`, replacing existing patterns.
    pub fn apply_config(&self, config: &ClientConfig) -> ClientResult<()> {
        for route in &config.pools {
            self.pools.register(&route.pattern, route.pool.clone())?;
        }
        tracing::info!(pools = config.pools.len(), "Configuration applied");
        Ok(())
    }

    /// Register or replace the pool for a route pattern.
    pub fn add_pool(&self, pattern: &str, config: PoolConfig) -> ClientResult<Arc<Pool>> {
        self.pools.register(pattern, config)
    }

    pub fn pools(&self) -> &PoolRegistry {
        &self.pools
    }

    pub fn mocks(&self) -> &MockRegistry {
        &self.mocks
    }

    /// Register a fixture for one exact request.
    pub fn add_mock(
        &self,
        url: impl Into<String>,
        method: Method,
        body: impl Into<String>,
        response: Response,
        headers: &[(&str, &str)],
    ) {
        self.mocks.register(url, method, body, response, headers);
    }

    /// Register GET fixtures in bulk.
    pub fn add_mocks(&self, responses: HashMap<String, Response>) {
        self.mocks.register_gets(responses);
    }

    pub fn clear_mocks(&self) {
        self.mocks.clear();
    }

    pub fn disable_mocks(&self) {
        self.mocks.disable();
    }

    /// Execute a call with any method.
    ///
    /// The body is sent only for POST, PUT and PATCH.
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        body: &str,
        headers: &[(&str, &str)],
    ) -> RequestResult {
        let headers = header_set(headers);
        executor::execute(&self.pools, &self.mocks, method, url, body, &headers).await
    }

    pub async fn get(&self, url: &str, headers: &[(&str, &str)]) -> RequestResult {
        self.execute(Method::GET, url, "", headers).await
    }

    pub async fn post(&self, url: &str, body: &str, headers: &[(&str, &str)]) -> RequestResult {
        self.execute(Method::POST, url, body, headers).await
    }

    pub async fn put(&self, url: &str, body: &str, headers: &[(&str, &str)]) -> RequestResult {
        self.execute(Method::PUT, url, body, headers).await
    }

    pub async fn delete(&self, url: &str, headers: &[(&str, &str)]) -> RequestResult {
        self.execute(Method::DELETE, url, "", headers).await
    }

    pub async fn head(&self, url: &str, headers: &[(&str, &str)]) -> RequestResult {
        self.execute(Method::HEAD, url, "", headers).await
    }

    pub async fn options(&self, url: &str, headers: &[(&str, &str)]) -> RequestResult {
        self.execute(Method::OPTIONS, url, "", headers).await
    }
}
