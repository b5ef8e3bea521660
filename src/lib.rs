//! Multi-pool REST client library.
//!
//! Calls are routed to named connection pools by URL pattern. Pools can cache
//! GET responses according to `Cache-Control: max-age`, serve stale entries
//! when the upstream fails, and calls can be answered by registered mocks
//! outside production.

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod observability;
pub mod pool;
pub mod routing;

pub use config::{ClientConfig, PoolConfig};
pub use error::{ClientError, RequestError};
pub use http::{Response, RestClient};
pub use reqwest::Method;
