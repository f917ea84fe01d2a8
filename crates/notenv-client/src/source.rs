use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};

/// Boundary to whatever holds the remote variable set.
///
/// All implementations must satisfy these invariants:
/// - `fetch` completes within the caller's bound (30 seconds for the SDK).
/// - Returned pairs are in wire order; duplicate keys are allowed and left
///   for the store to resolve.
/// - No error detail ever contains the bearer credential.
#[async_trait]
pub trait VariableSource: Send + Sync {
    /// Fetch the complete variable set, or a classified failure.
    async fn fetch(&self) -> FetchResult<Vec<(String, String)>>;
}

/// In-memory [`VariableSource`] serving a fixed result.
///
/// Intended for tests and embedding: no network, no credential.
pub struct StaticVariableSource {
    result: FetchResult<Vec<(String, String)>>,
}

impl StaticVariableSource {
    /// A source that always returns `entries`.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            result: Ok(entries.into_iter().collect()),
        }
    }

    /// A source that always fails with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl VariableSource for StaticVariableSource {
    async fn fetch(&self) -> FetchResult<Vec<(String, String)>> {
        self.result.clone()
    }
}
