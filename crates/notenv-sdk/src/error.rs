use notenv_client::FetchError;
use thiserror::Error;

/// Errors from SDK initialization.
///
/// All variants are fatal at the [`init_or_exit`](crate::init_or_exit)
/// boundary; none are retried. The fetch classifications
/// ([`FetchError::Network`], [`FetchError::Backend`], [`FetchError::Parse`])
/// surface unchanged through the transparent variant.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Missing or invalid bootstrap input. A caller mistake, not retried.
    #[error("{0}")]
    Configuration(String),

    /// The fetch against the backend failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The blocking entry point could not stand up an async runtime.
    #[error("failed to start runtime: {0}")]
    Runtime(String),
}

/// Result alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;
