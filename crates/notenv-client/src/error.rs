use thiserror::Error;

/// Errors from fetching variables out of a backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure: DNS, connection refused, TLS, timeout.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend rejected or failed the request with a non-2xx status.
    #[error("failed to fetch variables: {status} - {message}")]
    Backend { status: u16, message: String },

    /// The backend answered 2xx but the body does not match the wire shape.
    #[error("malformed variables response: {0}")]
    Parse(String),
}

/// Result alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
