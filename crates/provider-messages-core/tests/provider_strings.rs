// crates/provider-messages-core/tests/provider_strings.rs
// ============================================================================
// Module: Provider Strings Tests
// Description: Exercises typed message accessors over the bundled catalog.
// Purpose: Ensure call sites get stable, localized provider diagnostics.
// Dependencies: provider-messages-core
// ============================================================================

//! ## Overview
//! Validates provider message accessors end to end:
//! - Accessors bind arguments to the right placeholders.
//! - Satellite locales resolve translated templates and local number formats.
//! - Uncatalogued wording stays fixed across locales.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use provider_messages_core::Locale;
use provider_messages_core::MessageCatalog;
use provider_messages_core::MessageFormatter;
use provider_messages_core::MessageValue;
use provider_messages_core::ProviderStrings;
use provider_messages_core::StaticCatalog;
use provider_messages_core::bundled::provider_catalog;
use provider_messages_core::strings::keys;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn strings(tag: &str) -> ProviderStrings {
    let catalog: Arc<dyn MessageCatalog> = Arc::new(provider_catalog().unwrap());
    ProviderStrings::new(MessageFormatter::new(catalog, Locale::parse(tag).unwrap()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Confirms the zero-argument accessor returns the template verbatim.
#[test]
fn max_batch_size_must_be_positive_is_verbatim() {
    assert_eq!(
        strings("en").max_batch_size_must_be_positive(),
        "The value provided for max batch size must be positive."
    );
}

/// Confirms the sequence block size accessor places both arguments.
#[test]
fn sequence_bad_block_size_places_arguments() {
    assert_eq!(
        strings("en-US").sequence_bad_block_size(0, "OrderIds"),
        "The increment value of '0' for sequence 'OrderIds' cannot be used for value \
         generation. Sequences used for value generation must have positive increments."
    );
}

/// Confirms configuration errors render both the key and the offending value.
#[test]
fn integer_configuration_value_format_error_renders_values() {
    assert_eq!(
        strings("en").integer_configuration_value_format_error("MaxBatchSize", "ten"),
        "The value for the configuration entry 'MaxBatchSize' is 'ten', but an integer is \
         expected."
    );
}

/// Confirms three-argument accessors keep their declared order.
#[test]
fn identity_and_sequence_type_errors_keep_argument_order() {
    let strings = strings("en");
    let identity = strings.identity_bad_type("Price", "Order", "decimal");
    assert!(identity.contains("property 'Price' on entity type 'Order'"));
    assert!(identity.contains("property type is 'decimal'"));

    let sequence = strings.sequence_bad_type("Code", "Product", "string");
    assert!(sequence.starts_with("PostgreSQL sequences cannot be used"));
    assert!(sequence.contains("'Code' on entity type 'Product' because the property type is 'string'"));
}

/// Confirms enum errors accept absent values without failing.
#[test]
fn invalid_enum_value_tolerates_null_arguments() {
    let rendered = strings("en").invalid_enum_value(None::<&str>, "SortOrder");
    assert_eq!(
        rendered,
        "The value provided for argument '' must be a valid value of enum type 'SortOrder'."
    );
}

/// Confirms satellite locales use translated wording and local separators.
#[test]
fn catalan_locale_uses_translated_templates() {
    let strings = strings("ca-ES");
    assert_eq!(
        strings.postgres_not_in_use(),
        "Els mètodes específics de PostgreSQL només es poden utilitzar quan el context fa servir \
         un magatzem de dades PostgreSQL."
    );
    let rendered = strings.integer_configuration_value_format_error("Ratio", 2.5);
    assert_eq!(
        rendered,
        "El valor de l'entrada de configuració 'Ratio' és '2,5', però s'esperava un enter."
    );
}

/// Confirms unknown locales fall back to the neutral English templates.
#[test]
fn unknown_locale_falls_back_to_neutral() {
    let strings = strings("de-DE");
    let rendered = strings.integer_configuration_value_format_error("Ratio", 2.5);
    assert!(rendered.starts_with("The value for the configuration entry 'Ratio' is '2,5'"));
}

/// Confirms the wrapped formatter stays reachable for ad hoc catalogue keys.
#[test]
fn formatter_accessor_shares_locale_and_catalog() {
    let strings = strings("ca-ES");
    let formatter = strings.formatter();
    assert_eq!(formatter.locale(), &Locale::parse("ca-ES").unwrap());
    assert_eq!(
        formatter.try_format(keys::POSTGRES_NOT_IN_USE, &[]).unwrap(),
        strings.postgres_not_in_use()
    );
    assert!(formatter.try_format("Unknown", &[]).is_err());
}

/// Confirms the uncatalogued message is identical in every locale.
#[test]
fn skip_needs_order_by_is_not_localized() {
    let expected =
        "A query containing the Skip operator must include at least one OrderBy operation.";
    assert_eq!(strings("en").skip_needs_order_by(), expected);
    assert_eq!(strings("ca").skip_needs_order_by(), expected);
}

/// Confirms accessors panic when the catalog lacks their key.
#[test]
#[should_panic(expected = "PostgresNotInUse")]
fn accessors_fail_fast_on_incomplete_catalog() {
    let catalog = StaticCatalog::builder().build().unwrap();
    let strings = ProviderStrings::new(MessageFormatter::new(
        Arc::new(catalog),
        Locale::parse("en").unwrap(),
    ));
    let _ = strings.postgres_not_in_use();
}

/// Confirms the formatter is shareable across threads.
#[test]
fn strings_are_usable_across_threads() {
    let strings = Arc::new(strings("en"));
    let handles: Vec<_> = (0 .. 4_i64)
        .map(|increment| {
            let strings = Arc::clone(&strings);
            std::thread::spawn(move || {
                strings.sequence_bad_block_size(MessageValue::from(increment), "Ids")
            })
        })
        .collect();
    for (increment, handle) in handles.into_iter().enumerate() {
        let rendered = handle.join().unwrap();
        assert!(rendered.contains(&format!("'{increment}' for sequence 'Ids'")));
    }
}
