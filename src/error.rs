//! Error definitions.

use thiserror::Error;

use crate::http::Response;

/// Errors raised while registering pools or building a client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Route pattern is not a valid regular expression.
    #[error("invalid route pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Forward proxy URL could not be used.
    #[error("invalid proxy '{proxy}': {source}")]
    InvalidProxy {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },

    /// Transport could not be constructed.
    #[error("failed to build transport: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for registration and construction.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that end a call without a usable upstream body.
///
/// Every variant carries the degraded [`Response`] the caller receives
/// alongside the error: status 0 when nothing came back, the real status
/// with an empty body when the body could not be read.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The pool's deadline elapsed before the call completed.
    #[error("request to {url} timed out")]
    Timeout {
        url: String,
        response: Response,
        #[source]
        source: reqwest::Error,
    },

    /// Connection, DNS or request construction failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        response: Response,
        #[source]
        source: reqwest::Error,
    },

    /// The pool for the URL could not be built.
    #[error("no pool available for {url}: {source}")]
    PoolUnavailable {
        url: String,
        response: Response,
        #[source]
        source: Box<ClientError>,
    },

    /// Upstream answered but the body could not be read.
    #[error("failed to read response body from {url} (status {}): {source}", .response.status)]
    BodyRead {
        url: String,
        response: Response,
        #[source]
        source: reqwest::Error,
    },
}

impl RequestError {
    pub(crate) fn from_send(url: String, source: reqwest::Error) -> Self {
        let response = Response::unreachable();
        if source.is_timeout() {
            RequestError::Timeout { url, response, source }
        } else {
            RequestError::Transport { url, response, source }
        }
    }

    pub(crate) fn from_body(url: String, status: u16, source: reqwest::Error) -> Self {
        let response = Response {
            status,
            ..Default::default()
        };
        if source.is_timeout() {
            RequestError::Timeout { url, response, source }
        } else {
            RequestError::BodyRead { url, response, source }
        }
    }

    /// The degraded response returned with this error.
    pub fn response(&self) -> &Response {
        match self {
            RequestError::Timeout { response, .. }
            | RequestError::Transport { response, .. }
            | RequestError::PoolUnavailable { response, .. }
            | RequestError::BodyRead { response, .. } => response,
        }
    }

    /// Take the degraded response.
    pub fn into_response(self) -> Response {
        match self {
            RequestError::Timeout { response, .. }
            | RequestError::Transport { response, .. }
            | RequestError::PoolUnavailable { response, .. }
            | RequestError::BodyRead { response, .. } => response,
        }
    }

    /// Status of the degraded response.
    pub fn status(&self) -> u16 {
        self.response().status
    }

    /// URL the call was made against, after base URL resolution.
    pub fn url(&self) -> &str {
        match self {
            RequestError::Timeout { url, .. }
            | RequestError::Transport { url, .. }
            | RequestError::PoolUnavailable { url, .. }
            | RequestError::BodyRead { url, .. } => url,
        }
    }
}

/// Result type for calls.
pub type RequestResult = Result<Response, RequestError>;
