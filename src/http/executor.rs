//! Single-call orchestration.
//!
//! # Responsibilities
//! - Resolve the pool and the final URL
//! - Short-circuit on mock fixtures, then on fresh cache entries
//! - Perform the network call and classify its outcome
//! - Admit cacheable GET responses
//! - Substitute stale entries for failed calls
//!
//! # Design Decisions
//! - A redirect is a tagged outcome, never an error
//! - Stale substitution only happens after a network attempt
//! - No retries; the caller decides

use std::time::Instant;

use reqwest::{Method, StatusCode};

use crate::cache::{admission_ttl, CacheEntry, CacheStore};
use crate::error::{RequestError, RequestResult};
use crate::http::request::{build_request, HeaderSet};
use crate::http::response::{collect_headers, Headers, Response};
use crate::mock::MockRegistry;
use crate::observability::metrics::{self, CacheEvent};
use crate::pool::Pool;
use crate::routing::PoolRegistry;

/// What came back from the transport.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// A final response with its body.
    Completed {
        status: u16,
        headers: Headers,
        body: String,
    },
    /// A redirect that was not followed; no body is read.
    Redirected { status: u16, headers: Headers },
}

impl Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Completed { status, headers, body } => Response {
                body,
                status,
                headers,
                ..Default::default()
            },
            Outcome::Redirected { status, headers } => Response {
                status,
                headers,
                ..Default::default()
            },
        }
    }
}

/// Statuses the transport would otherwise have followed.
fn is_followable_redirect(status: StatusCode, headers: &reqwest::header::HeaderMap) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    ) && headers.contains_key(reqwest::header::LOCATION)
}

/// Send the request and read the body.
pub(crate) async fn send(
    pool: &Pool,
    method: Method,
    url: &str,
    body: &str,
    headers: &HeaderSet,
) -> Result<Outcome, RequestError> {
    let response = build_request(pool.transport(), method, url, body, headers)
        .send()
        .await
        .map_err(|e| RequestError::from_send(url.to_string(), e))?;

    let status = response.status();
    if is_followable_redirect(status, response.headers()) {
        return Ok(Outcome::Redirected {
            status: status.as_u16(),
            headers: collect_headers(response.headers()),
        });
    }

    let headers = collect_headers(response.headers());
    let body = response
        .text()
        .await
        .map_err(|e| RequestError::from_body(url.to_string(), status.as_u16(), e))?;

    Ok(Outcome::Completed {
        status: status.as_u16(),
        headers,
        body,
    })
}

/// Execute one call through the registries.
pub async fn execute(
    pools: &PoolRegistry,
    mocks: &MockRegistry,
    method: Method,
    url: &str,
    body: &str,
    headers: &HeaderSet,
) -> RequestResult {
    let pool = pools.resolve(url).map_err(|source| {
        tracing::error!(url = %url, error = %source, "No pool available");
        RequestError::PoolUnavailable {
            url: url.to_string(),
            response: Response::unreachable(),
            source: Box::new(source),
        }
    })?;
    let url = pool.resolve_url(url);

    if let Some(response) = mocks.find(&method, &url, headers, body) {
        tracing::debug!(method = %method, url = %url, status = response.status, "Answered by mock");
        metrics::record_mock_hit(method.as_str());
        return Ok(response);
    }

    let cache = if method == Method::GET { pool.cache() } else { None };

    let mut stale = None;
    if let Some(cache) = cache {
        if let Some(lookup) = cache.get(&url) {
            if lookup.fresh {
                tracing::debug!(url = %url, "Cache hit");
                metrics::record_cache_event(CacheEvent::Hit);
                return Ok(cached_response(lookup.entry, false));
            }
            metrics::record_cache_event(CacheEvent::StaleCandidate);
            stale = Some(lookup.entry);
        }
    }

    let start = Instant::now();
    let method_name = method.as_str().to_string();
    let result = send(&pool, method, &url, body, headers).await;

    let result = match result {
        Ok(outcome) => {
            if let Outcome::Redirected { status, .. } = &outcome {
                tracing::debug!(url = %url, status, "Redirect not followed");
            }
            Ok(outcome.into_response())
        }
        Err(e) => {
            tracing::warn!(method = %method_name, url = %url, error = %e, "Request failed");
            Err(e)
        }
    };
    let status = match &result {
        Ok(response) => response.status,
        Err(e) => e.status(),
    };
    metrics::record_request(&method_name, status, start);

    if let (Some(cache), Ok(response)) = (cache, &result) {
        admit(cache, &url, response);
    }

    if status != 200 && pool.serves_stale() {
        if let Some(entry) = stale {
            tracing::info!(url = %url, status, "Serving stale cache entry");
            metrics::record_cache_event(CacheEvent::StaleServed);
            return Ok(cached_response(entry, true));
        }
    }

    result
}

/// Store a cacheable response under the resolved URL.
fn admit(cache: &CacheStore, url: &str, response: &Response) {
    let Some(ttl) = admission_ttl(response) else {
        return;
    };
    let entry = CacheEntry::new(response.body.clone(), response.headers.clone(), ttl);
    if let Some(evicted) = cache.put(url, entry) {
        tracing::trace!(evicted = %evicted, "Cache eviction");
        metrics::record_cache_event(CacheEvent::Evict);
    }
    tracing::debug!(url = %url, ttl_secs = ttl.as_secs(), "Response cached");
    metrics::record_cache_event(CacheEvent::Admit);
}

fn cached_response(entry: CacheEntry, stale: bool) -> Response {
    Response {
        body: entry.body,
        status: 200,
        headers: entry.headers,
        cached: true,
        stale,
    }
}
