use thiserror::Error;

/// Errors from environment view operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// The key is not visible through the view. A normal, recoverable
    /// condition; callers avoid it with `get_opt`/`get_or`/`contains`.
    #[error("environment variable not found: {0}")]
    KeyNotFound(String),

    /// A write-style operation was attempted against the hermetic view.
    /// Signals a programming error; the operation never silently succeeds.
    #[error("cannot {op} environment variables: variables are managed by not-env")]
    MutationRejected { op: &'static str },
}

/// Result alias for environment view operations.
pub type EnvResult<T> = Result<T, EnvError>;
