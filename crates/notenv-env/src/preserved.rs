/// Bootstrap variable naming the backend URL.
pub const URL_KEY: &str = "NOT_ENV_URL";

/// Bootstrap variable holding the backend API key.
pub const API_KEY_KEY: &str = "NOT_ENV_API_KEY";

/// The fixed pair of bootstrap keys that always resolve from the host
/// environment instead of the remote store.
///
/// Preserved resolution takes precedence over store resolution: the values
/// used to perform the fetch stay stable and inspectable after
/// initialization, independent of whether the remote source also defines a
/// same-named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreservedKeys {
    names: [&'static str; 2],
}

impl PreservedKeys {
    /// The standard not-env pair: [`URL_KEY`] and [`API_KEY_KEY`].
    pub const fn standard() -> Self {
        Self {
            names: [URL_KEY, API_KEY_KEY],
        }
    }

    /// The preserved key naming the backend URL.
    pub const fn url_key(&self) -> &'static str {
        self.names[0]
    }

    /// The preserved key holding the backend credential.
    pub const fn api_key_key(&self) -> &'static str {
        self.names[1]
    }

    /// Whether `key` is one of the preserved names.
    pub fn contains(&self, key: &str) -> bool {
        self.names.iter().any(|name| *name == key)
    }

    /// Iterate over the preserved names in their fixed order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.names.into_iter()
    }
}

impl Default for PreservedKeys {
    fn default() -> Self {
        Self::standard()
    }
}
