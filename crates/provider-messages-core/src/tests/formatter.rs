// crates/provider-messages-core/src/tests/formatter.rs
// ============================================================================
// Module: Formatter Unit Tests
// Description: Key lookup, placeholder binding, and mismatch tolerance.
// Purpose: Pin the named-to-positional substitution contract.
// Dependencies: crate::{catalog, formatter, locale, value}, tracing-test
// ============================================================================

//! ## Overview
//! Exercises [`MessageFormatter`] against a small hand-built catalog:
//! - Values bind by declared name, never by incidental position.
//! - Missing keys fail fast; placeholder mismatches are tolerated.
//! - Locale conventions flow into rendered values.

use std::sync::Arc;

use time::macros::date;
use tracing_test::traced_test;

use crate::catalog::StaticCatalog;
use crate::formatter::FormatError;
use crate::formatter::FormatterOptions;
use crate::formatter::MessageArg;
use crate::formatter::MessageFormatter;
use crate::formatter::rewrite_named_placeholders;
use crate::formatter::substitute_positional;
use crate::locale::INVARIANT_CONVENTIONS;
use crate::locale::Locale;
use crate::value::MessageValue;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

const SEQUENCE_BAD_BLOCK_SIZE: &str = "The increment value of '{increment}' for sequence \
                                       '{sequenceName}' cannot be used for value generation. \
                                       Sequences used for value generation must have positive \
                                       increments.";

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).unwrap()
}

fn formatter(tag: &str) -> MessageFormatter {
    let catalog = StaticCatalog::builder()
        .neutral(locale("en"))
        .entries(&locale("en"), [
            ("SequenceBadBlockSize", SEQUENCE_BAD_BLOCK_SIZE),
            ("MaxBatchSizeMustBePositive", "The value provided for max batch size must be positive."),
            ("Overlap", "Increment {increment} differs from {incrementValue}."),
            ("Escaped", "Use {{braces}} around {name}."),
            ("Partial", "{known} and {unknown}"),
            ("Measure", "Measured {amount} on {day}."),
            ("Mixed", "{a} {0}"),
            ("Formatted", "Total: {total}"),
            ("JsonObjectExpected", "A JSON object must start with '{'."),
            ("JsonProperty", "Property {name} must follow '{'."),
        ])
        .entries(&locale("ca"), [("Measure", "Mesurat {amount} el {day}.")])
        .build()
        .unwrap();
    MessageFormatter::new(Arc::new(catalog), locale(tag))
}

// ============================================================================
// SECTION: Substitution
// ============================================================================

#[test]
fn sequence_bad_block_size_renders_expected_text() {
    let rendered = formatter("en").format("SequenceBadBlockSize", &[
        MessageArg::new("increment", 0),
        MessageArg::new("sequenceName", "OrderIds"),
    ]);
    assert_eq!(
        rendered,
        "The increment value of '0' for sequence 'OrderIds' cannot be used for value generation. \
         Sequences used for value generation must have positive increments."
    );
}

#[test]
fn reversed_argument_order_binds_by_name() {
    let formatter = formatter("en");
    let forward = formatter.format("SequenceBadBlockSize", &[
        MessageArg::new("increment", 0),
        MessageArg::new("sequenceName", "OrderIds"),
    ]);
    let reversed = formatter.format("SequenceBadBlockSize", &[
        MessageArg::new("sequenceName", "OrderIds"),
        MessageArg::new("increment", 0),
    ]);
    assert_eq!(forward, reversed);
}

#[test]
fn zero_argument_message_is_verbatim() {
    let formatter = formatter("en");
    assert_eq!(
        formatter.format("MaxBatchSizeMustBePositive", &[]),
        "The value provided for max batch size must be positive."
    );
    assert_eq!(formatter.format("Escaped", &[]), "Use {{braces}} around {name}.");
}

#[test]
fn substring_names_do_not_collide() {
    let rendered = formatter("en").format("Overlap", &[
        MessageArg::new("incrementValue", 5),
        MessageArg::new("increment", 1),
    ]);
    assert_eq!(rendered, "Increment 1 differs from 5.");
}

#[test]
fn earlier_markers_are_not_rematched() {
    let rendered = formatter("en")
        .format("Mixed", &[MessageArg::new("a", "first"), MessageArg::new("0", "second")]);
    assert_eq!(rendered, "first second");
}

#[test]
fn duplicate_declarations_use_first_value() {
    let rendered = formatter("en").format("Formatted", &[
        MessageArg::new("total", 1),
        MessageArg::new("total", 2),
    ]);
    assert_eq!(rendered, "Total: 1");
}

#[test]
fn escaped_braces_render_single_when_arguments_given() {
    let rendered = formatter("en").format("Escaped", &[MessageArg::new("name", "x")]);
    assert_eq!(rendered, "Use {braces} around x.");
}

#[test]
fn unpaired_braces_survive_in_zero_argument_messages() {
    assert_eq!(
        formatter("en").format("JsonObjectExpected", &[]),
        "A JSON object must start with '{'."
    );
}

#[test]
fn unpaired_braces_survive_substitution() {
    let rendered = formatter("en").format("JsonProperty", &[MessageArg::new("name", "id")]);
    assert_eq!(rendered, "Property id must follow '{'.");
}

// ============================================================================
// SECTION: Mismatch Tolerance
// ============================================================================

#[test]
fn undeclared_template_placeholder_stays_literal() {
    let rendered = formatter("en").format("Partial", &[MessageArg::new("known", "yes")]);
    assert_eq!(rendered, "yes and {unknown}");
}

#[test]
fn declared_name_missing_from_template_is_ignored() {
    let rendered = formatter("en").format("Partial", &[
        MessageArg::new("extra", "ignored"),
        MessageArg::new("known", "a"),
        MessageArg::new("unknown", "b"),
    ]);
    assert_eq!(rendered, "a and b");
}

#[test]
fn null_values_render_empty() {
    let rendered = formatter("en").format("SequenceBadBlockSize", &[
        MessageArg::new("increment", MessageValue::Null),
        MessageArg::new("sequenceName", None::<&str>),
    ]);
    assert!(rendered.starts_with("The increment value of '' for sequence ''"));
}

// ============================================================================
// SECTION: Missing Keys
// ============================================================================

#[test]
fn try_format_reports_missing_key() {
    let result = formatter("ca-ES").try_format("NoSuchKey", &[]);
    assert_eq!(
        result,
        Err(FormatError::MissingTemplate {
            key: "NoSuchKey".to_string(),
            locale: locale("ca-ES"),
        })
    );
}

#[test]
#[should_panic(expected = "message key 'NoSuchKey' is missing from the catalog")]
fn format_panics_on_missing_key() {
    let _ = formatter("en").format("NoSuchKey", &[MessageArg::new("a", 1)]);
}

#[test]
fn template_exposes_resolved_raw_text() {
    let formatter = formatter("ca");
    assert_eq!(formatter.template("Measure"), Ok("Mesurat {amount} el {day}."));
    assert_eq!(formatter.template("Overlap"), Ok("Increment {increment} differs from {incrementValue}."));
}

// ============================================================================
// SECTION: Locale Rendering
// ============================================================================

#[test]
fn locale_conventions_shape_values() {
    let english = formatter("en-US");
    let args = [MessageArg::new("amount", 1234.5), MessageArg::new("day", date!(2024 - 03 - 07))];
    assert_eq!(english.format("Measure", &args), "Measured 1234.5 on 3/7/2024.");

    let catalan = english.with_locale(locale("ca-ES"));
    assert_eq!(catalan.locale(), &locale("ca-ES"));
    assert_eq!(catalan.format("Measure", &args), "Mesurat 1234,5 el 7/3/2024.");
}

#[test]
fn format_macro_declares_arguments_in_order() {
    let formatter = formatter("en");
    let rendered = crate::format_message!(
        formatter,
        "SequenceBadBlockSize",
        sequenceName = "Ids",
        increment = -1,
    );
    assert!(rendered.contains("'-1' for sequence 'Ids'"));
}

// ============================================================================
// SECTION: Steps
// ============================================================================

#[test]
fn rewrite_reports_unused_and_unresolved_names() {
    let rewritten =
        rewrite_named_placeholders("{b} {missing} {a} {1}", &["a", "b", "extra"]);
    assert_eq!(rewritten.text, "{1} {missing} {0} {1}");
    assert_eq!(rewritten.unused, vec![2]);
    assert_eq!(rewritten.unresolved, vec!["missing"]);
}

#[test]
fn positional_substitution_honors_alignment_and_format() {
    let one = MessageValue::from(7);
    let amount = MessageValue::from(1234.5);
    let values = [&one, &amount];
    assert_eq!(
        substitute_positional("[{0,4}][{0,-4}][{1:N1}][{5}][{x}]", &values, &INVARIANT_CONVENTIONS),
        "[   7][7   ][1,234.5][{5}][{x}]"
    );
}

#[test]
fn positional_substitution_rejects_oversized_alignment() {
    let one = MessageValue::from(1);
    assert_eq!(substitute_positional("{0,99999}", &[&one], &INVARIANT_CONVENTIONS), "{0,99999}");
}

// ============================================================================
// SECTION: Logging
// ============================================================================

#[test]
#[traced_test]
fn mismatches_are_logged_when_reporting_enabled() {
    let formatter = formatter("en").with_options(FormatterOptions {
        report_unmatched: true,
    });
    let rendered = formatter.format("Partial", &[
        MessageArg::new("known", "k"),
        MessageArg::new("stray", "s"),
    ]);
    assert_eq!(rendered, "k and {unknown}");
    assert!(logs_contain("declared placeholder not present in template"));
    assert!(logs_contain("template placeholder left unsubstituted"));
}

#[test]
#[traced_test]
fn mismatches_are_silent_by_default() {
    let rendered = formatter("en").format("Partial", &[MessageArg::new("stray", "s")]);
    assert_eq!(rendered, "{known} and {unknown}");
    assert!(!logs_contain("left unsubstituted"));
}
