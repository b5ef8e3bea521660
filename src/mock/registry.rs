//! Ordered fixture registry.
//!
//! # Responsibilities
//! - Append fixtures in registration order
//! - Answer calls with the first matching fixture
//! - Track whether interception is active
//!
//! # Design Decisions
//! - Registering an identical request again adds a shadowed duplicate;
//!   the earliest fixture keeps answering
//! - Interception state starts from the environment and can only be switched off
//! - RwLock: lookups are frequent, registration and clearing are rare

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use reqwest::Method;

use crate::http::request::{header_set, HeaderSet};
use crate::http::Response;
use crate::mock::fixture::MockFixture;

/// Environment variable naming the deployment environment.
pub const ENVIRONMENT_VAR: &str = "RESTPOOL_ENVIRONMENT";

/// Value of [`ENVIRONMENT_VAR`] that disables mocks.
pub const PRODUCTION: &str = "production";

/// Ordered list of request fixtures.
#[derive(Debug)]
pub struct MockRegistry {
    fixtures: RwLock<Vec<MockFixture>>,
    enabled: AtomicBool,
}

impl MockRegistry {
    /// Create a registry with interception on or off.
    pub fn new(enabled: bool) -> Self {
        Self {
            fixtures: RwLock::new(Vec::new()),
            enabled: AtomicBool::new(enabled),
        }
    }

    /// Create a registry whose state follows [`ENVIRONMENT_VAR`].
    pub fn from_env() -> Self {
        let environment = std::env::var(ENVIRONMENT_VAR).ok();
        Self::new(mocks_enabled_for(environment.as_deref()))
    }

    /// Append a fixture.
    pub fn register(
        &self,
        url: impl Into<String>,
        method: Method,
        body: impl Into<String>,
        response: Response,
        headers: &[(&str, &str)],
    ) {
        let fixture = MockFixture {
            url: url.into(),
            method,
            body: body.into(),
            headers: header_set(headers),
            response,
        };
        tracing::debug!(url = %fixture.url, method = %fixture.method, "Mock registered");
        self.fixtures.write().push(fixture);
    }

    /// Append GET fixtures with no body and no headers.
    pub fn register_gets(&self, responses: HashMap<String, Response>) {
        for (url, response) in responses {
            self.register(url, Method::GET, "", response, &[]);
        }
    }

    /// Remove all fixtures.
    pub fn clear(&self) {
        self.fixtures.write().clear();
    }

    /// Stop intercepting calls for the rest of this registry's life.
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Number of registered fixtures, duplicates included.
    pub fn len(&self) -> usize {
        self.fixtures.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First fixture matching the request, if interception is active.
    pub fn find(&self, method: &Method, url: &str, headers: &HeaderSet, body: &str) -> Option<Response> {
        if !self.is_enabled() {
            return None;
        }
        self.fixtures
            .read()
            .iter()
            .find(|f| f.matches(method, url, headers, body))
            .map(|f| f.response.clone())
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Mocks are active everywhere except production.
pub fn mocks_enabled_for(environment: Option<&str>) -> bool {
    environment != Some(PRODUCTION)
}
