//! Cache admission policy.
//!
//! Only the `max-age` directive of `Cache-Control` is honoured. `no-store`,
//! `private` and validators are ignored.

use std::time::Duration;

use crate::http::Response;

/// Largest freshness lifetime granted, in seconds (2^31).
pub const MAX_TTL_SECS: u64 = 1 << 31;

/// Freshness lifetime granted by the response, if it may be cached.
///
/// Requires status 200 and a `max-age` strictly greater than zero.
pub fn admission_ttl(response: &Response) -> Option<Duration> {
    if response.status != 200 {
        return None;
    }
    let values = response.header_values("cache-control")?;
    let seconds = values.iter().find_map(|v| max_age(v))?;
    (seconds > 0).then(|| Duration::from_secs((seconds as u64).min(MAX_TTL_SECS)))
}

/// Parse `max-age` out of one `Cache-Control` value.
///
/// A present but unparsable directive yields `Some(0)` so it never admits.
fn max_age(value: &str) -> Option<i64> {
    value.split(',').find_map(|directive| {
        let (name, arg) = directive.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("max-age") {
            return None;
        }
        Some(arg.trim().trim_matches('"').parse::<i64>().unwrap_or(0))
    })
}
