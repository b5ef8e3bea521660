//! Transport construction.
//!
//! # Responsibilities
//! - Build one `reqwest::Client` per pool from its configuration
//! - Apply idle connection limit, timeout and forward proxy
//! - Refuse to follow redirects
//!
//! # Design Decisions
//! - Compression and keep-alive stay enabled
//! - No proxy unless configured (environment proxies are ignored)
//! - Timeout is a whole-request deadline; 0 means none

use std::time::Duration;

use reqwest::redirect::Policy;

use crate::config::PoolConfig;
use crate::error::{ClientError, ClientResult};

/// Build the HTTP transport for a pool.
pub fn build_transport(config: &PoolConfig) -> ClientResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .pool_max_idle_per_host(config.effective_max_idle())
        .redirect(Policy::none());

    if config.timeout_ms > 0 {
        builder = builder.timeout(Duration::from_millis(config.timeout_ms));
    }

    builder = match &config.proxy {
        Some(proxy) => {
            let proxy = reqwest::Proxy::all(proxy.as_str()).map_err(|source| {
                ClientError::InvalidProxy {
                    proxy: proxy.clone(),
                    source,
                }
            })?;
            builder.proxy(proxy)
        }
        None => builder.no_proxy(),
    };

    Ok(builder.build()?)
}
