//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → RestClient::from_config registers each pool in file order
//!
//! On reconfiguration:
//!     caller loads a new ClientConfig
//!     → RestClient::apply_config re-registers every pool
//!     → unchanged cache capacities keep their cache contents
//! ```
//!
//! # Design Decisions
//! - A pool entry needs only its `pattern`; every other key falls back to `PoolConfig::default()`
//! - Pool order in the file is resolution order
//! - The loaded `ClientConfig` is plain data; pools exist only after registration

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ClientConfig, ObservabilityConfig, PoolConfig, PoolRouteConfig, DEFAULT_MAX_IDLE_PER_HOST};
pub use validation::ValidationError;
