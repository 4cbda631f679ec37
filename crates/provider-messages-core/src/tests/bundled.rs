// crates/provider-messages-core/src/tests/bundled.rs
// ============================================================================
// Module: Bundled Catalog Tests
// Description: Parity and syntax checks for the shipped message tables.
// Purpose: Keep every bundled locale in sync with the neutral templates.
// Dependencies: crate::{bundled, catalog, strings, template}
// ============================================================================

//! ## Overview
//! Verifies the bundled tables stay in key parity, use unique keys, have valid
//! placeholder syntax, and keep the same placeholder set per key as English.

use std::collections::BTreeSet;

use crate::bundled::CATALOG_EN;
use crate::bundled::NEUTRAL_LOCALE;
use crate::bundled::bundled_tables;
use crate::bundled::provider_catalog;
use crate::catalog::MessageCatalog;
use crate::locale::Locale;
use crate::strings::keys;
use crate::template::placeholder_names;

fn table_keys(table: &[(&'static str, &str)]) -> BTreeSet<&'static str> {
    table.iter().map(|(key, _)| *key).collect()
}

#[test]
fn tables_cover_every_declared_key() {
    let declared: BTreeSet<&str> = keys::ALL.iter().copied().collect();
    for (tag, table) in bundled_tables() {
        assert_eq!(table_keys(table), declared, "locale {tag} must carry every key");
    }
}

#[test]
fn tables_have_unique_keys() {
    for (tag, table) in bundled_tables() {
        assert_eq!(table_keys(table).len(), table.len(), "duplicate keys in locale {tag}");
    }
}

#[test]
fn tables_have_placeholder_parity_with_neutral() {
    for (key, neutral_template) in CATALOG_EN {
        let expected = placeholder_names(neutral_template)
            .unwrap_or_else(|error| panic!("invalid neutral template for {key}: {error}"));
        for (tag, table) in bundled_tables() {
            let template = table
                .iter()
                .find(|(candidate, _)| candidate == key)
                .map(|(_, template)| *template)
                .unwrap_or_else(|| panic!("missing key {key} in locale {tag}"));
            let actual = placeholder_names(template)
                .unwrap_or_else(|error| panic!("invalid template for {key} in {tag}: {error}"));
            assert_eq!(expected, actual, "placeholder mismatch for {key} in locale {tag}");
        }
    }
}

#[test]
fn satellite_locales_are_translated() {
    for (tag, table) in bundled_tables() {
        if *tag == NEUTRAL_LOCALE {
            continue;
        }
        for ((key, neutral), (_, localized)) in CATALOG_EN.iter().zip(table.iter()) {
            assert_ne!(neutral, localized, "locale {tag} must translate {key}");
        }
    }
}

#[test]
fn provider_catalog_resolves_every_key_for_every_locale() {
    let catalog = provider_catalog().unwrap();
    for tag in ["en", "en-GB", "ca", "ca-ES", "de-DE", ""] {
        let locale = Locale::parse(tag).unwrap();
        assert!(catalog.missing_keys(&locale, keys::ALL).is_empty(), "locale {tag} misses keys");
    }
    let catalan = Locale::parse("ca-ES").unwrap();
    assert_eq!(
        catalog.template(keys::MAX_BATCH_SIZE_MUST_BE_POSITIVE, &catalan),
        Some("El valor proporcionat per a la mida màxima del lot ha de ser positiu.")
    );
}
