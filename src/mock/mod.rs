//! Call interception for tests.
//!
//! # Data Flow
//! ```text
//! Call (method, resolved url, headers, body)
//!     → registry.rs (interception active? scan fixtures front to back)
//!     → fixture.rs (exact equality on every attribute)
//!     → Return: canned Response, or None to continue to cache/network
//! ```
//!
//! # Design Decisions
//! - Checked before the cache and the network
//! - Off when RESTPOOL_ENVIRONMENT=production

pub mod fixture;
pub mod registry;

pub use fixture::MockFixture;
pub use registry::{mocks_enabled_for, MockRegistry, ENVIRONMENT_VAR, PRODUCTION};
