//! HTTP call subsystem.
//!
//! # Data Flow
//! ```text
//! RestClient::get/post/... (client.rs)
//!     → executor.rs
//!         → routing: resolve Pool, prefix base URL
//!         → mock: fixture short-circuit
//!         → cache: fresh entry short-circuit / stale candidate
//!         → request.rs (default + caller headers, body)
//!         → transport send → Outcome::Completed | Outcome::Redirected | error
//!         → cache admission, stale substitution
//!     → response.rs (Response returned to caller)
//! ```
//!
//! # Design Decisions
//! - Non-2xx statuses are data, not errors
//! - Errors carry the degraded Response so callers always have a status to inspect

pub mod client;
pub mod executor;
pub mod request;
pub mod response;

pub use client::RestClient;
pub use request::HeaderSet;
pub use response::{Headers, Response};
