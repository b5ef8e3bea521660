//! Outgoing request construction.
//!
//! # Responsibilities
//! - Collapse caller headers into a set (last value per key wins)
//! - Apply default headers, then caller headers on top
//! - Attach a body only for methods that carry one
//!
//! # Design Decisions
//! - Defaults: `Accept: application/json`, `Connection: keep-alive`,
//!   plus `Content-Type: application/json` for every non-GET method
//! - Caller headers replace defaults with the same name

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONNECTION, CONTENT_TYPE};
use reqwest::Method;

/// Caller-supplied request headers, compared as a set.
pub type HeaderSet = BTreeMap<String, String>;

/// Build a header set from key/value pairs; a repeated key keeps its last value.
pub fn header_set(headers: &[(&str, &str)]) -> HeaderSet {
    headers
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Methods whose body is sent upstream.
pub fn carries_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

/// Default and caller headers merged into a transport header map.
///
/// Caller headers whose name or value cannot be encoded are skipped.
pub fn request_headers(method: &Method, headers: &HeaderSet) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(ACCEPT, HeaderValue::from_static("application/json"));
    map.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    if *method != Method::GET {
        map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    for (key, value) in headers {
        match (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                map.insert(name, value);
            }
            _ => tracing::warn!(header = %key, "Skipping header that cannot be encoded"),
        }
    }

    map
}

/// Prepare a request on the given transport.
pub fn build_request(
    transport: &reqwest::Client,
    method: Method,
    url: &str,
    body: &str,
    headers: &HeaderSet,
) -> reqwest::RequestBuilder {
    let map = request_headers(&method, headers);
    let with_body = carries_body(&method);
    let builder = transport.request(method, url).headers(map);
    if with_body {
        builder.body(body.to_string())
    } else {
        builder
    }
}
