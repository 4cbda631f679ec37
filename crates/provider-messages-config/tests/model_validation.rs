//! Config model validation tests for provider-messages-config.
// crates/provider-messages-config/tests/model_validation.rs
// =============================================================================
// Module: Config Model Validation Tests
// Description: Validate defaults, field checks, and runtime construction.
// Purpose: Ensure invalid settings fail closed and valid ones reach the formatter.
// =============================================================================

use std::sync::Arc;

use provider_messages_config::ConfigError;
use provider_messages_config::LogFormat;
use provider_messages_config::MessagesConfig;
use provider_messages_core::MessageArg;
use provider_messages_core::StaticCatalog;

type TestResult = Result<(), String>;

fn assert_invalid(content: &str, needle: &str) -> TestResult {
    match MessagesConfig::from_toml_str(content) {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err(format!("expected invalid config for {content}")),
    }
}

#[test]
fn empty_document_uses_defaults() -> TestResult {
    let config = MessagesConfig::from_toml_str("").map_err(|err| err.to_string())?;
    if config != MessagesConfig::default() {
        return Err("empty config should equal defaults".to_string());
    }
    if config.locale.culture != "en" || config.locale.neutral != "en" {
        return Err("default locales should be en".to_string());
    }
    if config.formatting.report_unmatched {
        return Err("report_unmatched should default to false".to_string());
    }
    if config.logging.level != "warn" || config.logging.format != LogFormat::Text {
        return Err("logging should default to warn text".to_string());
    }
    Ok(())
}

#[test]
fn invalid_culture_is_rejected() -> TestResult {
    assert_invalid("[locale]\nculture = \"english!\"\n", "locale.culture")
}

#[test]
fn invalid_neutral_is_rejected() -> TestResult {
    assert_invalid("[locale]\nneutral = \"e\"\n", "locale.neutral")
}

#[test]
fn invalid_log_level_is_rejected() -> TestResult {
    assert_invalid("[logging]\nlevel = \"verbose\"\n", "logging.level must be one of")
}

#[test]
fn unknown_fields_are_rejected() -> TestResult {
    match MessagesConfig::from_toml_str("[formatting]\nstrict = true\n") {
        Err(ConfigError::Parse(_)) => Ok(()),
        Err(error) => Err(format!("expected parse error, got {error}")),
        Ok(_) => Err("unknown field should fail".to_string()),
    }
}

#[test]
fn validate_catches_programmatic_edits() -> TestResult {
    let mut config = MessagesConfig::default();
    config.logging.level = "noisy".to_string();
    if config.validate().is_ok() {
        return Err("edited level should fail validation".to_string());
    }
    Ok(())
}

#[test]
fn build_formatter_applies_culture_and_options() -> TestResult {
    let config = MessagesConfig::from_toml_str(
        "[locale]\nculture = \"de-DE\"\n\n[formatting]\nreport_unmatched = true\n",
    )
    .map_err(|err| err.to_string())?;
    let en = config.neutral_locale().map_err(|err| err.to_string())?;
    let catalog = StaticCatalog::builder()
        .neutral(en.clone())
        .entry(&en, "Amount", "Amount: {amount}")
        .build()
        .map_err(|err| err.to_string())?;
    let formatter = config.build_formatter(Arc::new(catalog)).map_err(|err| err.to_string())?;
    if !formatter.options().report_unmatched {
        return Err("formatter should carry report_unmatched".to_string());
    }
    let rendered = formatter
        .try_format("Amount", &[MessageArg::new("amount", 2.5)])
        .map_err(|err| err.to_string())?;
    if rendered != "Amount: 2,5" {
        return Err(format!("unexpected rendering {rendered}"));
    }
    Ok(())
}

#[test]
fn build_provider_strings_uses_configured_neutral() -> TestResult {
    let config = MessagesConfig::from_toml_str("[locale]\nculture = \"de\"\nneutral = \"ca\"\n")
        .map_err(|err| err.to_string())?;
    let strings = config.build_provider_strings().map_err(|err| err.to_string())?;
    if strings.formatter().locale().to_string() != "de" {
        return Err(format!("unexpected culture {}", strings.formatter().locale()));
    }
    let rendered = strings.max_batch_size_must_be_positive();
    if rendered != "El valor proporcionat per a la mida màxima del lot ha de ser positiu." {
        return Err(format!("unexpected rendering {rendered}"));
    }
    Ok(())
}

#[test]
fn build_provider_strings_defaults_to_english() -> TestResult {
    let strings = MessagesConfig::default().build_provider_strings().map_err(|err| err.to_string())?;
    let rendered = strings.sequence_bad_block_size(-3, "Ids");
    if !rendered.starts_with("The increment value of '-3' for sequence 'Ids'") {
        return Err(format!("unexpected rendering {rendered}"));
    }
    Ok(())
}
