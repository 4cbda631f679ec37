// crates/provider-messages-core/src/catalog.rs
// ============================================================================
// Module: Message Catalog
// Description: Catalog lookup interface and the immutable in-memory catalog.
// Purpose: Resolve message templates by key with locale fallback.
// Dependencies: thiserror, tracing, crate::{locale, template}
// ============================================================================

//! ## Overview
//! [`MessageCatalog`] is the lookup seam used by the formatter. Storage is a
//! black box behind it. [`StaticCatalog`] is the in-memory implementation:
//! built once through [`StaticCatalogBuilder`], validated at build time, and
//! read-only afterwards.
//!
//! ## Invariants
//! - Lookup walks the requested locale's parent chain, then the neutral
//!   locale, then the invariant locale.
//! - Keys are non-empty and unique per locale.
//! - No stored template holds an empty or nested placeholder. Unpaired
//!   braces are text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::locale::Locale;
use crate::template::TemplateError;
use crate::template::placeholder_names;

// ============================================================================
// SECTION: Interface
// ============================================================================

/// Read-only, locale-aware mapping from message key to template.
///
/// Implementations must be safe for unsynchronized concurrent reads.
pub trait MessageCatalog: Send + Sync {
    /// Returns the template for `key` in `locale`, if any locale in the
    /// implementation's fallback order provides it.
    fn template(&self, key: &str, locale: &Locale) -> Option<&str>;
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building a [`StaticCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A key was empty or whitespace.
    #[error("empty message key in locale '{locale}'")]
    EmptyKey {
        /// Locale receiving the entry.
        locale: Locale,
    },
    /// The same key appeared twice in one locale.
    #[error("duplicate key '{key}' in locale '{locale}'")]
    DuplicateKey {
        /// Locale receiving the entry.
        locale: Locale,
        /// Duplicated key.
        key: String,
    },
    /// A template held a placeholder that can never bind.
    #[error("malformed template for key '{key}' in locale '{locale}': {source}")]
    MalformedTemplate {
        /// Locale receiving the entry.
        locale: Locale,
        /// Offending key.
        key: String,
        /// Syntax failure.
        source: TemplateError,
    },
}

// ============================================================================
// SECTION: Static Catalog
// ============================================================================

/// Immutable in-memory message catalog.
///
/// # Invariants
/// - Contents never change after [`StaticCatalogBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    /// Templates per locale.
    locales: HashMap<Locale, HashMap<String, String>>,
    /// Locale consulted after the requested locale's own chain.
    neutral: Locale,
}

impl StaticCatalog {
    /// Starts a builder whose neutral locale is the invariant locale.
    #[must_use]
    pub fn builder() -> StaticCatalogBuilder {
        StaticCatalogBuilder::default()
    }

    /// Returns the neutral locale.
    #[must_use]
    pub const fn neutral(&self) -> &Locale {
        &self.neutral
    }

    /// Returns registered locales in sorted order.
    #[must_use]
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.locales.keys().collect();
        locales.sort_unstable();
        locales
    }

    /// Returns the keys stored directly under `locale`, sorted.
    #[must_use]
    pub fn keys(&self, locale: &Locale) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .locales
            .get(locale)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Returns keys from `reference` that `locale` cannot resolve (with fallback), sorted.
    #[must_use]
    pub fn missing_keys<'k>(&self, locale: &Locale, reference: &[&'k str]) -> Vec<&'k str> {
        let mut missing: Vec<&'k str> =
            reference.iter().copied().filter(|key| self.template(key, locale).is_none()).collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }

    /// Looks up `key` stored directly under `locale`, without fallback.
    fn lookup_exact(&self, key: &str, locale: &Locale) -> Option<&str> {
        self.locales.get(locale).and_then(|entries| entries.get(key)).map(String::as_str)
    }
}

impl MessageCatalog for StaticCatalog {
    fn template(&self, key: &str, locale: &Locale) -> Option<&str> {
        let chain = locale.fallback_chain();
        let invariant = Locale::invariant();
        chain
            .iter()
            .filter(|candidate| !candidate.is_invariant())
            .chain([&self.neutral, &invariant])
            .find_map(|candidate| self.lookup_exact(key, candidate))
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for [`StaticCatalog`].
#[derive(Debug, Default)]
pub struct StaticCatalogBuilder {
    /// Neutral locale for the finished catalog.
    neutral: Locale,
    /// Pending entries in insertion order.
    entries: Vec<(Locale, String, String)>,
}

impl StaticCatalogBuilder {
    /// Sets the neutral locale consulted after a locale's own chain.
    #[must_use]
    pub fn neutral(mut self, locale: Locale) -> Self {
        self.neutral = locale;
        self
    }

    /// Adds a single entry.
    #[must_use]
    pub fn entry(mut self, locale: &Locale, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.entries.push((locale.clone(), key.into(), template.into()));
        self
    }

    /// Adds every `(key, template)` pair for `locale`.
    #[must_use]
    pub fn entries<K, V>(mut self, locale: &Locale, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, template) in entries {
            self.entries.push((locale.clone(), key.into(), template.into()));
        }
        self
    }

    /// Validates entries and produces the immutable catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on empty keys, duplicate keys within a locale,
    /// or empty and nested placeholders.
    pub fn build(self) -> Result<StaticCatalog, CatalogError> {
        let mut locales: HashMap<Locale, HashMap<String, String>> = HashMap::new();
        for (locale, key, template) in self.entries {
            if key.trim().is_empty() {
                return Err(CatalogError::EmptyKey {
                    locale,
                });
            }
            if let Err(source) = placeholder_names(&template) {
                return Err(CatalogError::MalformedTemplate {
                    locale,
                    key,
                    source,
                });
            }
            let bucket = locales.entry(locale.clone()).or_default();
            if bucket.contains_key(&key) {
                return Err(CatalogError::DuplicateKey {
                    locale,
                    key,
                });
            }
            bucket.insert(key, template);
        }

        let total: usize = locales.values().map(HashMap::len).sum();
        let tags: BTreeSet<String> = locales.keys().map(ToString::to_string).collect();
        debug!(
            locales = ?tags,
            entries = total,
            neutral = %self.neutral,
            "message catalog built"
        );
        Ok(StaticCatalog {
            locales,
            neutral: self.neutral,
        })
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only panic-based assertions are permitted."
)]
mod tests {
    use super::*;

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    fn sample_catalog() -> StaticCatalog {
        StaticCatalog::builder()
            .neutral(locale("en"))
            .entries(&locale("en"), [("greeting", "Hello"), ("color", "Color")])
            .entries(&locale("es"), [("greeting", "Hola")])
            .entry(&locale("es-MX"), "greeting", "Qué onda")
            .entry(&Locale::invariant(), "build", "Build {number}")
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_prefers_most_specific_locale() {
        let catalog = sample_catalog();
        assert_eq!(catalog.template("greeting", &locale("es-MX")), Some("Qué onda"));
        assert_eq!(catalog.template("greeting", &locale("es-ES")), Some("Hola"));
    }

    #[test]
    fn lookup_falls_back_to_neutral_then_invariant() {
        let catalog = sample_catalog();
        assert_eq!(catalog.template("color", &locale("es-MX")), Some("Color"));
        assert_eq!(catalog.template("greeting", &locale("fr")), Some("Hello"));
        assert_eq!(catalog.template("build", &locale("es")), Some("Build {number}"));
        assert_eq!(catalog.template("missing", &locale("en")), None);
    }

    #[test]
    fn builder_rejects_duplicate_keys() {
        let result = StaticCatalog::builder()
            .entries(&locale("en"), [("a", "A"), ("a", "B")])
            .build();
        assert!(matches!(result, Err(CatalogError::DuplicateKey { key, .. }) if key == "a"));
    }

    #[test]
    fn builder_allows_same_key_in_different_locales() {
        let result = StaticCatalog::builder()
            .entry(&locale("en"), "a", "A")
            .entry(&locale("ca"), "a", "A-ca")
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn builder_rejects_empty_keys_and_malformed_templates() {
        let empty = StaticCatalog::builder().entry(&locale("en"), " ", "x").build();
        assert!(matches!(empty, Err(CatalogError::EmptyKey { .. })));

        let malformed = StaticCatalog::builder().entry(&locale("en"), "k", "bad {}").build();
        let error = malformed.unwrap_err();
        assert!(error.to_string().contains("malformed template for key 'k'"));
    }

    #[test]
    fn builder_accepts_unpaired_braces_as_text() {
        let catalog = StaticCatalog::builder()
            .entry(&locale("en"), "JsonObjectExpected", "A JSON object must start with '{'.")
            .entry(&locale("en"), "JsonObjectClosed", "A JSON object must end with '}'.")
            .build()
            .unwrap();
        assert_eq!(
            catalog.template("JsonObjectExpected", &locale("en")),
            Some("A JSON object must start with '{'.")
        );
    }

    #[test]
    fn inspection_helpers_are_sorted() {
        let catalog = sample_catalog();
        let tags: Vec<String> = catalog.locales().iter().map(|l| l.tag()).collect();
        assert_eq!(tags, vec!["", "en", "es", "es-MX"]);
        assert_eq!(catalog.keys(&locale("en")), vec!["color", "greeting"]);
        assert!(catalog.keys(&locale("de")).is_empty());
        assert_eq!(catalog.neutral(), &locale("en"));
    }

    #[test]
    fn missing_keys_respects_fallback() {
        let catalog = sample_catalog();
        assert!(catalog.missing_keys(&locale("es"), &["greeting", "color"]).is_empty());
        assert_eq!(catalog.missing_keys(&locale("es"), &["zeta", "alpha", "zeta"]), vec![
            "alpha", "zeta"
        ]);
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        let catalog = StaticCatalog::default();
        assert_eq!(catalog.template("anything", &locale("en")), None);
        assert!(catalog.locales().is_empty());
    }
}
