//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing call (url)
//!     → registry.rs (scan patterns in registration order)
//!     → matcher.rs (regex search against the url)
//!     → Return: matched Pool, or the lazily created default Pool
//!
//! Registration (at startup or on reconfiguration):
//!     pattern + PoolConfig
//!     → compile matcher (invalid regex rejected here)
//!     → build Pool (reusing the cache when capacity is unchanged)
//!     → publish new snapshot
//! ```
//!
//! # Design Decisions
//! - Patterns compiled at registration, never in the call path
//! - Deterministic: first match wins in registration order
//! - No NoMatch outcome: the default pool absorbs unmatched URLs

pub mod matcher;
pub mod registry;

pub use matcher::PatternMatcher;
pub use registry::PoolRegistry;
