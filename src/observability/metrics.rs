//! Metrics collection.
//!
//! # Responsibilities
//! - Define client metrics (calls, latency, cache activity, mock hits)
//! - Record through the `metrics` facade; the embedding application installs the recorder
//!
//! # Metrics
//! - `restpool_requests_total` (counter): calls by method, status
//! - `restpool_request_duration_seconds` (histogram): network call latency
//! - `restpool_cache_events_total` (counter): hit, stale_candidate, admit, evict, stale_served
//! - `restpool_mock_hits_total` (counter): calls answered by a fixture
//! - `restpool_pools_registered` (gauge): registered route patterns
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Labels are low-cardinality (no URLs)

use std::time::Instant;

use metrics::{counter, gauge, histogram};

/// Cache activity recorded per pool lookup or admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEvent {
    Hit,
    StaleCandidate,
    Admit,
    Evict,
    StaleServed,
}

impl CacheEvent {
    fn as_str(self) -> &'static str {
        match self {
            CacheEvent::Hit => "hit",
            CacheEvent::StaleCandidate => "stale_candidate",
            CacheEvent::Admit => "admit",
            CacheEvent::Evict => "evict",
            CacheEvent::StaleServed => "stale_served",
        }
    }
}

/// Record a completed network call.
pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "restpool_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("restpool_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record a cache event.
pub fn record_cache_event(event: CacheEvent) {
    counter!("restpool_cache_events_total", "event" => event.as_str()).increment(1);
}

/// Record a call answered by a mock fixture.
pub fn record_mock_hit(method: &str) {
    counter!("restpool_mock_hits_total", "method" => method.to_string()).increment(1);
}

/// Record the number of registered route patterns.
pub fn record_pool_count(count: usize) {
    gauge!("restpool_pools_registered").set(count as f64);
}
