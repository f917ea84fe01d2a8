use std::collections::HashMap;
use std::sync::Arc;

use url::Url;

use notenv_client::{HttpVariableSource, VariableSource};
use notenv_env::{EnvironmentView, PreservedKeys, VariableStore, API_KEY_KEY, URL_KEY};

use crate::error::{SdkError, SdkResult};

/// Explicit overrides for the two bootstrap values.
///
/// Any field left `None` falls back to the matching host environment
/// variable ([`URL_KEY`] / [`API_KEY_KEY`]).
#[derive(Debug, Clone, Default)]
pub struct SdkOptions {
    pub url: Option<String>,
    pub api_key: Option<String>,
}

/// Resolved bootstrap state, ready to fetch.
///
/// Construction validates both bootstrap values; fetching and view
/// construction happen in [`build_view`](Sdk::build_view). Nothing here
/// touches the process-wide slot: installation is the registry's job, so
/// this type stays testable without process-global effects.
pub struct Sdk {
    url: String,
    api_key: String,
}

impl Sdk {
    /// Resolve bootstrap values from the host environment only.
    pub fn from_host_env() -> SdkResult<Self> {
        Self::with_options(SdkOptions::default())
    }

    /// Resolve bootstrap values, preferring explicit overrides.
    ///
    /// Fails with [`SdkError::Configuration`] when a value is missing or
    /// empty, or when the URL is not a well-formed absolute URL.
    pub fn with_options(options: SdkOptions) -> SdkResult<Self> {
        let url = resolve_bootstrap(options.url, URL_KEY)?;
        let api_key = resolve_bootstrap(options.api_key, API_KEY_KEY)?;

        Url::parse(&url).map_err(|e| {
            SdkError::Configuration(format!("{URL_KEY} is not a valid absolute URL: {e}"))
        })?;

        Ok(Self { url, api_key })
    }

    /// The resolved backend URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch from the HTTP backend and build the environment view.
    ///
    /// Exactly one network call. The host environment snapshot backing the
    /// preserved keys is captured here, just before the view exists.
    pub async fn build_view(&self) -> SdkResult<EnvironmentView> {
        let source = HttpVariableSource::new(&self.url, &self.api_key)?;
        self.build_view_from(&source).await
    }

    /// Fetch from an arbitrary [`VariableSource`] and build the view.
    pub async fn build_view_from(&self, source: &dyn VariableSource) -> SdkResult<EnvironmentView> {
        let entries = source.fetch().await?;
        tracing::debug!(count = entries.len(), "building variable store");

        let store = VariableStore::from_entries(entries);
        let host: HashMap<String, String> = std::env::vars().collect();
        Ok(EnvironmentView::new(
            Arc::new(store),
            PreservedKeys::standard(),
            host,
        ))
    }
}

impl std::fmt::Debug for Sdk {
    // The credential stays out of debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sdk").field("url", &self.url).finish()
    }
}

fn resolve_bootstrap(explicit: Option<String>, key: &str) -> SdkResult<String> {
    let value = match explicit {
        Some(value) => value,
        None => std::env::var(key).unwrap_or_default(),
    };
    if value.is_empty() {
        return Err(SdkError::Configuration(format!(
            "{key} environment variable is required"
        )));
    }
    Ok(value)
}
