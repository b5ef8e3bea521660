//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Call lifecycle events:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms, gauges)
//! ```
//!
//! # Design Decisions
//! - Structured logging with `tracing` (JSON-friendly fields)
//! - Metrics go through the `metrics` facade; exporters are chosen by the host
//! - URLs appear in logs, never in metric labels

pub mod logging;
pub mod metrics;
