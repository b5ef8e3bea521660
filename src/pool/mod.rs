//! Connection pool subsystem.
//!
//! # Data Flow
//! ```text
//! PoolConfig
//!     → transport.rs (reqwest client: idle limit, timeout, proxy, no redirects)
//!     → http_pool.rs (transport + base URL + optional CacheStore + stale flag)
//!     → held as Arc<Pool> by the routing registry
//! ```
//!
//! # Design Decisions
//! - Pools are immutable; reconfiguration builds a new pool
//! - A pool's cache may be handed to its replacement when capacity is unchanged
//! - In-flight calls keep the Arc<Pool> they resolved

pub mod http_pool;
pub mod transport;

pub use http_pool::Pool;
