use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::error::{EnvError, EnvResult};
use crate::preserved::PreservedKeys;
use crate::store::VariableStore;

/// Read-only substitute for the process environment.
///
/// Wraps the remote-sourced [`VariableStore`], the [`PreservedKeys`] pair,
/// and a snapshot of the host environment taken at construction time. The
/// snapshot stands in for the original environment the same way a live
/// back-reference would: it is consulted only to resolve preserved keys and
/// is never written to.
///
/// Visible keys are exactly: store keys (minus preserved names) plus any
/// preserved name present in the host snapshot. `contains(k)` is true iff
/// `get(k)` succeeds, and `keys`/`values`/`items` agree with `get` on every
/// key they report.
///
/// The view holds no interior mutability and is `Send + Sync`; any number of
/// threads may read it concurrently without coordination.
pub struct EnvironmentView {
    store: Arc<VariableStore>,
    preserved: PreservedKeys,
    host: HashMap<String, String>,
}

impl EnvironmentView {
    /// Build a view over `store` with `host` as the host-environment
    /// snapshot. The snapshot should be captured immediately before the view
    /// is installed.
    pub fn new(
        store: Arc<VariableStore>,
        preserved: PreservedKeys,
        host: HashMap<String, String>,
    ) -> Self {
        Self {
            store,
            preserved,
            host,
        }
    }

    // ---- Read operations ----

    /// Strict read.
    ///
    /// Preserved keys resolve from the host snapshot; all other keys resolve
    /// from the store. The host snapshot is never consulted for
    /// non-preserved keys.
    pub fn get(&self, key: &str) -> EnvResult<&str> {
        if self.preserved.contains(key) {
            return self
                .host
                .get(key)
                .map(String::as_str)
                .ok_or_else(|| EnvError::KeyNotFound(key.to_string()));
        }
        self.store
            .get(key)
            .ok_or_else(|| EnvError::KeyNotFound(key.to_string()))
    }

    /// Read returning `None` instead of [`EnvError::KeyNotFound`].
    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.get(key).ok()
    }

    /// Read with a fallback value.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_opt(key).unwrap_or(default)
    }

    /// True iff [`get`](Self::get) would succeed for `key`.
    pub fn contains(&self, key: &str) -> bool {
        if self.preserved.contains(key) {
            return self.host.contains_key(key);
        }
        self.store.contains(key)
    }

    /// All visible keys, deduplicated. Order is not significant.
    pub fn keys(&self) -> BTreeSet<String> {
        let mut keys: BTreeSet<String> = self
            .store
            .keys()
            .filter(|key| !self.preserved.contains(key))
            .map(str::to_string)
            .collect();
        for name in self.preserved.iter() {
            if self.host.contains_key(name) {
                keys.insert(name.to_string());
            }
        }
        keys
    }

    /// Values aligned with [`keys`](Self::keys), resolved by the same rules
    /// as [`get`](Self::get).
    pub fn values(&self) -> Vec<&str> {
        self.items().into_iter().map(|(_, value)| value).collect()
    }

    /// (key, value) pairs aligned with [`keys`](Self::keys).
    pub fn items(&self) -> Vec<(String, &str)> {
        self.keys()
            .into_iter()
            .filter_map(|key| {
                let value = self.get(&key).ok()?;
                Some((key, value))
            })
            .collect()
    }

    /// Iterate over visible (key, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> {
        self.items().into_iter()
    }

    /// A fresh, independent copy of everything visible through the view.
    /// Mutating the returned map never affects the view.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.items()
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect()
    }

    /// Number of visible keys.
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// Returns `true` if no key is visible.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ---- Mutation surface (categorically rejected) ----

    /// Rejected: the view is read-only once installed.
    pub fn set(&self, _key: &str, _value: &str) -> EnvResult<()> {
        Err(EnvError::MutationRejected { op: "set" })
    }

    /// Rejected: the view is read-only once installed.
    pub fn remove(&self, _key: &str) -> EnvResult<()> {
        Err(EnvError::MutationRejected { op: "remove" })
    }

    /// Rejected: the view is read-only once installed.
    pub fn clear(&self) -> EnvResult<()> {
        Err(EnvError::MutationRejected { op: "clear" })
    }

    /// Rejected: the view is read-only once installed. The value is not
    /// returned and nothing is removed.
    pub fn take(&self, _key: &str) -> EnvResult<String> {
        Err(EnvError::MutationRejected { op: "take" })
    }

    /// Rejected: the view is read-only once installed.
    pub fn merge(&self, _other: &HashMap<String, String>) -> EnvResult<()> {
        Err(EnvError::MutationRejected { op: "merge" })
    }
}

impl std::fmt::Debug for EnvironmentView {
    // Values stay out of debug output: they are configuration secrets.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentView")
            .field("visible_keys", &self.len())
            .field("preserved", &self.preserved)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preserved::{API_KEY_KEY, URL_KEY};

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn host(items: &[(&str, &str)]) -> HashMap<String, String> {
        pairs(items).into_iter().collect()
    }

    fn view(store: &[(&str, &str)], host_env: &[(&str, &str)]) -> EnvironmentView {
        EnvironmentView::new(
            Arc::new(VariableStore::from_entries(pairs(store))),
            PreservedKeys::standard(),
            host(host_env),
        )
    }

    // Scenario A: remote variables resolve, bootstrap keys stay host-resolved,
    // everything else is invisible.
    #[test]
    fn remote_and_preserved_resolution() {
        let v = view(
            &[("DB_HOST", "localhost")],
            &[(URL_KEY, "http://x"), (API_KEY_KEY, "secret")],
        );
        assert_eq!(v.get("DB_HOST"), Ok("localhost"));
        assert_eq!(v.get(URL_KEY), Ok("http://x"));
        assert_eq!(v.get(API_KEY_KEY), Ok("secret"));
        assert!(!v.contains("MISSING"));
        assert_eq!(
            v.get("MISSING"),
            Err(EnvError::KeyNotFound("MISSING".to_string()))
        );
    }

    #[test]
    fn hermetic_no_host_fallback() {
        // HOME exists in the host snapshot but not in the store, and is not
        // preserved: it must be invisible.
        let v = view(&[("DB_HOST", "localhost")], &[("HOME", "/home/user")]);
        assert!(!v.contains("HOME"));
        assert_eq!(v.get("HOME"), Err(EnvError::KeyNotFound("HOME".to_string())));
        assert!(!v.keys().contains("HOME"));
    }

    #[test]
    fn preserved_precedence_over_store() {
        // The remote source also defines NOT_ENV_URL; the host value wins.
        let v = view(
            &[(URL_KEY, "http://from-remote")],
            &[(URL_KEY, "http://from-host")],
        );
        assert_eq!(v.get(URL_KEY), Ok("http://from-host"));
    }

    #[test]
    fn preserved_key_absent_from_host_is_invisible() {
        // Store defines NOT_ENV_API_KEY but the host does not: preserved
        // resolution still wins, so the key is not visible and get/contains/
        // keys all agree on that.
        let v = view(&[(API_KEY_KEY, "leaked")], &[]);
        assert!(!v.contains(API_KEY_KEY));
        assert!(v.get(API_KEY_KEY).is_err());
        assert!(!v.keys().contains(API_KEY_KEY));
        assert!(v.items().iter().all(|(k, _)| *k != API_KEY_KEY));
    }

    // Scenario E.
    #[test]
    fn keys_union() {
        let v = view(
            &[("DB_HOST", "localhost")],
            &[(URL_KEY, "http://x"), (API_KEY_KEY, "secret")],
        );
        let expected: BTreeSet<String> = ["DB_HOST", URL_KEY, API_KEY_KEY]
            .into_iter()
            .map(str::to_string)
            .collect();
        assert_eq!(v.keys(), expected);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn items_and_values_align_with_keys() {
        let v = view(
            &[("A", "1"), ("B", "2")],
            &[(URL_KEY, "http://x")],
        );
        let items = v.items();
        assert_eq!(items.len(), v.keys().len());
        for (key, value) in &items {
            assert_eq!(v.get(key), Ok(*value));
        }
        let values = v.values();
        assert_eq!(values.len(), items.len());
    }

    // Scenario D.
    #[test]
    fn get_or_and_get_opt() {
        let v = view(&[("DB_HOST", "localhost")], &[]);
        assert_eq!(v.get_or("MISSING", "5432"), "5432");
        assert_eq!(v.get_or("DB_HOST", "5432"), "localhost");
        assert_eq!(v.get_opt("MISSING"), None);
        assert_eq!(v.get_opt("DB_HOST"), Some("localhost"));
    }

    #[test]
    fn mutation_rejected_and_state_unchanged() {
        let v = view(&[("DB_HOST", "localhost")], &[(URL_KEY, "http://x")]);
        let before_keys = v.keys();
        let before = v.snapshot();

        assert_eq!(
            v.set("NEW", "value"),
            Err(EnvError::MutationRejected { op: "set" })
        );
        assert_eq!(
            v.remove("DB_HOST"),
            Err(EnvError::MutationRejected { op: "remove" })
        );
        assert_eq!(v.clear(), Err(EnvError::MutationRejected { op: "clear" }));
        assert_eq!(
            v.take("DB_HOST"),
            Err(EnvError::MutationRejected { op: "take" })
        );
        assert_eq!(
            v.merge(&before),
            Err(EnvError::MutationRejected { op: "merge" })
        );
        // Preserved keys are no exception.
        assert_eq!(
            v.set(URL_KEY, "http://other"),
            Err(EnvError::MutationRejected { op: "set" })
        );

        assert_eq!(v.keys(), before_keys);
        assert_eq!(v.snapshot(), before);
        assert_eq!(v.get("DB_HOST"), Ok("localhost"));
    }

    #[test]
    fn snapshot_is_independent() {
        let v = view(&[("DB_HOST", "localhost")], &[(URL_KEY, "http://x")]);
        let mut copy = v.snapshot();
        copy.insert("INJECTED".to_string(), "x".to_string());
        copy.remove("DB_HOST");

        assert!(!v.contains("INJECTED"));
        assert_eq!(v.get("DB_HOST"), Ok("localhost"));
        assert_eq!(v.snapshot().get("DB_HOST").map(String::as_str), Some("localhost"));
    }

    #[test]
    fn idempotent_reads() {
        let v = view(&[("DB_HOST", "localhost")], &[(URL_KEY, "http://x")]);
        assert_eq!(v.get("DB_HOST"), v.get("DB_HOST"));
        assert_eq!(v.get(URL_KEY), v.get(URL_KEY));
        assert_eq!(v.get("MISSING"), v.get("MISSING"));
    }

    #[test]
    fn empty_view() {
        let v = view(&[], &[]);
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert!(v.keys().is_empty());
        assert!(v.items().is_empty());
        assert!(v.snapshot().is_empty());
    }

    #[test]
    fn debug_output_hides_values() {
        let v = view(&[("SECRET", "hunter2")], &[(API_KEY_KEY, "tok_abc")]);
        let rendered = format!("{v:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("tok_abc"));
    }

    #[test]
    fn view_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EnvironmentView>();
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn key_strategy() -> impl Strategy<Value = String> {
            "[A-Z][A-Z0-9_]{0,15}"
        }

        fn env_map() -> impl Strategy<Value = Vec<(String, String)>> {
            proptest::collection::vec((key_strategy(), ".{0,24}"), 0..16)
        }

        proptest! {
            // contains(k) is true iff get(k) succeeds, for any store/host.
            #[test]
            fn contains_agrees_with_get(store in env_map(), host_env in env_map(), probe in key_strategy()) {
                let v = EnvironmentView::new(
                    Arc::new(VariableStore::from_entries(store)),
                    PreservedKeys::standard(),
                    host_env.into_iter().collect(),
                );
                prop_assert_eq!(v.contains(&probe), v.get(&probe).is_ok());
            }

            // Every key reported by keys() resolves, and every item's value
            // matches a strict read.
            #[test]
            fn reported_keys_resolve(store in env_map(), host_env in env_map()) {
                let v = EnvironmentView::new(
                    Arc::new(VariableStore::from_entries(store)),
                    PreservedKeys::standard(),
                    host_env.into_iter().collect(),
                );
                for key in v.keys() {
                    prop_assert!(v.get(&key).is_ok());
                }
                for (key, value) in v.items() {
                    prop_assert_eq!(v.get(&key), Ok(value));
                }
                prop_assert_eq!(v.snapshot().len(), v.len());
            }

            // Hermeticity: a host key outside the preserved pair is never
            // visible unless the store defines it.
            #[test]
            fn host_keys_stay_invisible(host_env in env_map(), probe in key_strategy()) {
                let preserved = PreservedKeys::standard();
                let v = EnvironmentView::new(
                    Arc::new(VariableStore::from_entries(Vec::new())),
                    preserved,
                    host_env.into_iter().collect(),
                );
                if !preserved.contains(&probe) {
                    prop_assert!(!v.contains(&probe));
                    prop_assert!(v.get(&probe).is_err());
                }
            }

            // Rejected writes leave the view untouched.
            #[test]
            fn rejected_writes_change_nothing(store in env_map(), key in key_strategy(), value in ".{0,24}") {
                let v = EnvironmentView::new(
                    Arc::new(VariableStore::from_entries(store)),
                    PreservedKeys::standard(),
                    HashMap::new(),
                );
                let before = v.snapshot();
                prop_assert!(v.set(&key, &value).is_err());
                prop_assert!(v.remove(&key).is_err());
                prop_assert!(v.clear().is_err());
                prop_assert_eq!(v.snapshot(), before);
            }
        }
    }
}
