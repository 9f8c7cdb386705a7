//! Locale-scoped message catalogs with bundle fallback.
//!
//! # Invariants
//!
//! 1. **Lookup never fails**: [`MessageCatalog::lookup`] returns the key
//!    itself when no layer provides it.
//!
//! 2. **Fallback chain terminates**: a lookup walks the loaded layers
//!    (most specific first) exactly once.
//!
//! 3. **Immutable after load**: a catalog is never mutated. Switching
//!    locale builds a new catalog and swaps it in whole.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key not in any layer | `lookup` returns the key |
//! | Missing bundle | Store has no bundle for a candidate | Layer skipped |
//! | Store error | Store failed for a candidate | Logged, layer skipped |
//! | No bundles | Nothing found for any candidate | Empty catalog, keys returned |

use std::sync::Arc;

use ahash::AHashMap;

use crate::error::Result;
use crate::locale::Locale;

/// Templates for a single locale layer.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: AHashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty locale string set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a template by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the layer has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all keys in this layer.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleStrings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut strings = Self::new();
        for (k, v) in iter {
            strings.insert(k, v);
        }
        strings
    }
}

/// Source of catalog bundles, keyed by base name and exact locale.
///
/// Storage format is the implementor's business. `Ok(None)` means the store
/// has no bundle for that exact locale; the catalog then falls through to
/// the next candidate.
pub trait CatalogStore {
    /// Load the bundle for `(base_name, locale)`.
    fn load(&self, base_name: &str, locale: &Locale) -> Result<Option<LocaleStrings>>;
}

impl<S: CatalogStore + ?Sized> CatalogStore for Arc<S> {
    fn load(&self, base_name: &str, locale: &Locale) -> Result<Option<LocaleStrings>> {
        (**self).load(base_name, locale)
    }
}

impl<S: CatalogStore + ?Sized> CatalogStore for Box<S> {
    fn load(&self, base_name: &str, locale: &Locale) -> Result<Option<LocaleStrings>> {
        (**self).load(base_name, locale)
    }
}

/// In-memory [`CatalogStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bundles: AHashMap<(String, Locale), Arc<LocaleStrings>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the bundle for `(base_name, locale)`, replacing any previous one.
    pub fn insert(&mut self, base_name: impl Into<String>, locale: Locale, strings: LocaleStrings) {
        self.bundles
            .insert((base_name.into(), locale), Arc::new(strings));
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_bundle(
        mut self,
        base_name: impl Into<String>,
        locale: Locale,
        strings: LocaleStrings,
    ) -> Self {
        self.insert(base_name, locale, strings);
        self
    }
}

impl CatalogStore for MemoryStore {
    fn load(&self, base_name: &str, locale: &Locale) -> Result<Option<LocaleStrings>> {
        Ok(self
            .bundles
            .get(&(base_name.to_string(), locale.clone()))
            .map(|strings| LocaleStrings::clone(strings)))
    }
}

/// Message catalog for one `(base_name, locale)` pair.
///
/// # Example
///
/// ```
/// use glyphtext_i18n::catalog::{LocaleStrings, MemoryStore, MessageCatalog};
/// use glyphtext_i18n::locale::Locale;
///
/// let store = MemoryStore::new()
///     .with_bundle("app", Locale::ROOT, LocaleStrings::new().with("save", "Save"))
///     .with_bundle("app", Locale::parse("de").unwrap(), LocaleStrings::new().with("save", "Speichern"));
///
/// let de = MessageCatalog::load(&store, "app", Locale::parse("de-AT").unwrap());
/// assert_eq!(de.lookup("save"), "Speichern");
/// assert_eq!(de.lookup("quit"), "quit");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    base_name: String,
    locale: Locale,
    layers: Vec<(Locale, LocaleStrings)>,
}

impl MessageCatalog {
    /// Load every candidate bundle of `locale` from `store`.
    ///
    /// Store failures are logged and the affected layer is skipped.
    pub fn load<S: CatalogStore + ?Sized>(
        store: &S,
        base_name: impl Into<String>,
        locale: Locale,
    ) -> Self {
        let base_name = base_name.into();
        let mut layers = Vec::new();

        for candidate in locale.candidates() {
            match store.load(&base_name, &candidate) {
                Ok(Some(strings)) => layers.push((candidate, strings)),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(
                        base_name = %base_name,
                        locale = %candidate,
                        error = %err,
                        "catalog bundle failed to load; skipping layer"
                    );
                }
            }
        }

        if layers.is_empty() {
            tracing::debug!(
                base_name = %base_name,
                locale = %locale,
                "no catalog bundles found; lookups fall back to keys"
            );
        }

        Self {
            base_name,
            locale,
            layers,
        }
    }

    /// A catalog with a single layer, for callers that already hold strings.
    #[must_use]
    pub fn from_strings(base_name: impl Into<String>, locale: Locale, strings: LocaleStrings) -> Self {
        Self {
            base_name: base_name.into(),
            locale: locale.clone(),
            layers: vec![(locale, strings)],
        }
    }

    /// A catalog with no layers; every lookup returns its key.
    #[must_use]
    pub fn empty(base_name: impl Into<String>, locale: Locale) -> Self {
        Self {
            base_name: base_name.into(),
            locale,
            layers: Vec::new(),
        }
    }

    /// Base identifier used to locate bundles.
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Locale this catalog was requested for.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Locales that actually contributed a layer, most specific first.
    pub fn loaded_locales(&self) -> impl Iterator<Item = &Locale> {
        self.layers.iter().map(|(locale, _)| locale)
    }

    /// Template for `key`, if any layer provides it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.layers.iter().find_map(|(_, strings)| strings.get(key))
    }

    /// Whether any layer provides `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Template for `key`, or `key` itself when absent.
    #[must_use]
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// All unique keys across every layer, sorted.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .layers
            .iter()
            .flat_map(|(_, strings)| strings.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys from `reference_keys` that no layer provides, sorted.
    #[must_use]
    pub fn missing_keys(&self, reference_keys: &[&str]) -> Vec<String> {
        let mut missing: Vec<String> = reference_keys
            .iter()
            .filter(|key| !self.contains(key))
            .map(|key| (*key).to_string())
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}
