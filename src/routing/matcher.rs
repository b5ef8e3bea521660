//! Route pattern matching.
//!
//! # Responsibilities
//! - Compile a route pattern once, at registration
//! - Match call URLs against it
//!
//! # Design Decisions
//! - Patterns are unanchored regular expressions (search, not full match)
//! - Matching runs against the URL as given by the caller, before base URL prefixing

use regex::Regex;

use crate::error::{ClientError, ClientResult};

/// A compiled route pattern.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    /// Compile a pattern.
    pub fn new(pattern: &str) -> ClientResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| ClientError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if the URL matches anywhere.
    pub fn matches(&self, url: &str) -> bool {
        self.regex.is_match(url)
    }
}
