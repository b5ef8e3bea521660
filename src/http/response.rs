//! Call results.
//!
//! # Responsibilities
//! - Carry body, status and headers of one call
//! - Flag content served from the cache, and whether it was stale
//! - Convert transport responses into owned header maps
//!
//! # Design Decisions
//! - Header names are stored lower-case, values keep arrival order
//! - A Response is freshly built per call and never shared

use std::collections::BTreeMap;

use reqwest::header::HeaderMap;
use serde::Serialize;

/// Header name → ordered values.
pub type Headers = BTreeMap<String, Vec<String>>;

/// The outcome of one call as seen by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Body as text (empty for redirects and failures).
    pub body: String,
    /// Status code (0 when no response was received).
    pub status: u16,
    /// Response headers.
    pub headers: Headers,
    /// Content came from the pool's cache.
    pub cached: bool,
    /// Cached content had expired and replaced a failed call.
    pub stale: bool,
}

impl Response {
    /// Build a plain response, mainly for mock fixtures.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status,
            ..Default::default()
        }
    }

    /// Add a header value.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.as_ref().to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Response for a call that never reached the upstream.
    pub(crate) fn unreachable() -> Self {
        Self::default()
    }

    /// All values of a header, looked up case-insensitively.
    pub fn header_values(&self, name: &str) -> Option<&[String]> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_slice())
    }

    /// First value of a header, looked up case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name)
            .and_then(|v| v.first())
            .map(|v| v.as_str())
    }

    /// True for status 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Copy a transport header map into owned form.
pub(crate) fn collect_headers(map: &HeaderMap) -> Headers {
    let mut headers = Headers::new();
    for (name, value) in map.iter() {
        // Non-UTF-8 values are kept lossily rather than dropped.
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        headers.entry(name.as_str().to_string()).or_default().push(value);
    }
    headers
}
