//! Response caching subsystem.
//!
//! # Data Flow
//! ```text
//! GET through a pool with a cache
//!     → store.rs lookup by resolved URL
//!         - fresh entry  → served, no network call
//!         - expired entry → kept as stale candidate
//!     → network call
//!     → policy.rs (status 200 + max-age > 0?)
//!     → store.rs put (evicts least-recently-used when full)
//! ```
//!
//! # Design Decisions
//! - Cache lives inside the pool; no global cache
//! - Entries are immutable and replaced wholesale
//! - Nothing is persisted across restarts

pub mod policy;
pub mod store;

pub use policy::admission_ttl;
pub use store::{CacheEntry, CacheStore, Lookup};
