//! Configuration validation.
//!
//! # Responsibilities
//! - Reject empty or non-compiling route patterns
//! - Reject base URLs and proxies that do not parse as absolute URLs
//! - Reject a pattern listed twice, since the second would silently replace the first
//!
//! # Design Decisions
//! - Every bad pool is reported in one pass so a file can be fixed in one edit
//! - No I/O and no registry access: `ClientConfig` in, list of problems out
//! - `load_config` runs it, so a bad file is refused before any pool is registered

use std::collections::HashSet;
use thiserror::Error;

use crate::config::schema::{ClientConfig, PoolConfig};

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("pool #{index} has an empty pattern")]
    EmptyPattern { index: usize },

    #[error("pattern '{pattern}' is not a valid regular expression: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("pattern '{pattern}' is declared more than once")]
    DuplicatePattern { pattern: String },

    #[error("pool '{pattern}' has an invalid base URL '{url}'")]
    InvalidBaseUrl { pattern: String, url: String },

    #[error("pool '{pattern}' has an invalid proxy URL '{url}'")]
    InvalidProxy { pattern: String, url: String },
}

/// Validate a whole client configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.pools.iter().enumerate() {
        if route.pattern.is_empty() {
            errors.push(ValidationError::EmptyPattern { index });
            continue;
        }
        if let Err(e) = regex::Regex::new(&route.pattern) {
            errors.push(ValidationError::InvalidPattern {
                pattern: route.pattern.clone(),
                reason: e.to_string(),
            });
        }
        if !seen.insert(route.pattern.as_str()) {
            errors.push(ValidationError::DuplicatePattern {
                pattern: route.pattern.clone(),
            });
        }
        errors.extend(validate_pool(&route.pattern, &route.pool));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the URLs of a single pool.
pub fn validate_pool(pattern: &str, pool: &PoolConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Relative prefixes are legal, only absolute-looking ones must parse.
    if pool.base_url.contains("://") && url::Url::parse(&pool.base_url).is_err() {
        errors.push(ValidationError::InvalidBaseUrl {
            pattern: pattern.to_string(),
            url: pool.base_url.clone(),
        });
    }
    if let Some(proxy) = &pool.proxy {
        if url::Url::parse(proxy).is_err() {
            errors.push(ValidationError::InvalidProxy {
                pattern: pattern.to_string(),
                url: proxy.clone(),
            });
        }
    }

    errors
}
