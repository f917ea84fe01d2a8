use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::error::{FetchError, FetchResult};
use crate::source::VariableSource;
use crate::wire;

/// Bound on the whole fetch, connection setup included. Matches the
/// JavaScript and Python SDKs.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Path appended to the backend base URL.
pub const VARIABLES_PATH: &str = "/variables";

/// [`VariableSource`] backed by an HTTP not-env backend.
///
/// Performs a single `GET {base_url}/variables` with bearer authentication.
/// Retries, if any, are the backend operator's concern; this client makes
/// exactly one attempt per `fetch` call.
pub struct HttpVariableSource {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpVariableSource {
    /// Build a client for `base_url` authenticating with `api_key`.
    ///
    /// Trailing slashes on `base_url` are trimmed before the variables path
    /// is appended.
    pub fn new(base_url: &str, api_key: &str) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), VARIABLES_PATH),
            api_key: api_key.to_string(),
        })
    }

    /// The fully resolved endpoint this source will call.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn network_error(&self, detail: String) -> FetchError {
        FetchError::Network(scrub(&detail, &self.api_key))
    }
}

#[async_trait]
impl VariableSource for HttpVariableSource {
    async fn fetch(&self) -> FetchResult<Vec<(String, String)>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching variables");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| self.network_error(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.network_error(e.to_string()))?;

        if !status.is_success() {
            let message = wire::error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
            tracing::warn!(status = status.as_u16(), "backend rejected variables fetch");
            return Err(FetchError::Backend {
                status: status.as_u16(),
                message: scrub(&message, &self.api_key),
            });
        }

        let entries = wire::parse_variables(&body)?;
        tracing::debug!(count = entries.len(), "fetched variables");
        Ok(entries)
    }
}

impl std::fmt::Debug for HttpVariableSource {
    // The credential stays out of debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpVariableSource")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Replace any occurrence of the credential in `detail` so it can never
/// leak through an error message.
fn scrub(detail: &str, secret: &str) -> String {
    if secret.is_empty() {
        return detail.to_string();
    }
    detail.replace(secret, "[redacted]")
}
