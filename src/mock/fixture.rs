//! Mock fixtures.

use reqwest::Method;

use crate::http::request::HeaderSet;
use crate::http::Response;

/// A canned response for one exact request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFixture {
    pub url: String,
    pub method: Method,
    pub body: String,
    pub headers: HeaderSet,
    pub response: Response,
}

impl MockFixture {
    /// Returns true if every request attribute is equal.
    ///
    /// Header comparison is set equality: order does not matter, keys and
    /// values are compared exactly.
    pub fn matches(&self, method: &Method, url: &str, headers: &HeaderSet, body: &str) -> bool {
        self.url == url && self.method == *method && self.headers == *headers && self.body == body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::header_set;

    fn fixture(headers: &[(&str, &str)]) -> MockFixture {
        MockFixture {
            url: "http://x/items".to_string(),
            method: Method::POST,
            body: "{\"a\":1}".to_string(),
            headers: header_set(headers),
            response: Response::new(201, "created"),
        }
    }

    #[test]
    fn test_exact_match() {
        let f = fixture(&[("X-Token", "t"), ("X-Trace", "1")]);
        let headers = header_set(&[("X-Trace", "1"), ("X-Token", "t")]);
        assert!(f.matches(&Method::POST, "http://x/items", &headers, "{\"a\":1}"));
    }

    #[test]
    fn test_any_difference_misses() {
        let f = fixture(&[("X-Token", "t")]);
        let headers = header_set(&[("X-Token", "t")]);

        assert!(!f.matches(&Method::PUT, "http://x/items", &headers, "{\"a\":1}"));
        assert!(!f.matches(&Method::POST, "http://x/items/", &headers, "{\"a\":1}"));
        assert!(!f.matches(&Method::POST, "http://x/items", &headers, "{\"a\":2}"));
        assert!(!f.matches(&Method::POST, "http://x/items", &header_set(&[]), "{\"a\":1}"));
        assert!(!f.matches(
            &Method::POST,
            "http://x/items",
            &header_set(&[("X-Token", "t"), ("X-Extra", "e")]),
            "{\"a\":1}"
        ));
        assert!(!f.matches(
            &Method::POST,
            "http://x/items",
            &header_set(&[("X-Token", "other")]),
            "{\"a\":1}"
        ));
    }
}
