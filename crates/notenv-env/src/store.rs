use std::collections::HashMap;

/// Immutable key → value mapping built from a single remote fetch.
///
/// Constructed exactly once per process lifetime and never mutated
/// afterwards. No write-style methods exist on this type.
pub struct VariableStore {
    entries: HashMap<String, String>,
}

impl VariableStore {
    /// Build a store from (key, value) pairs.
    ///
    /// Duplicate keys resolve last-write-wins: the pair appearing latest in
    /// the sequence is the one kept. Entries with an empty key are dropped
    /// (keys are non-empty by contract).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let entries = entries
            .into_iter()
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self { entries }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the store holds `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no variables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over stored keys. Order is not significant.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over stored (key, value) pairs. Order is not significant.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Debug for VariableStore {
    // Values stay out of debug output: they are configuration secrets.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariableStore")
            .field("variable_count", &self.entries.len())
            .finish()
    }
}
