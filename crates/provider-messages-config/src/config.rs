// crates/provider-messages-config/src/config.rs
// ============================================================================
// Module: Provider Messages Configuration
// Description: Configuration loading and validation for provider messages.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: provider-messages-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed; defaults apply only to
//! omitted sections.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use provider_messages_core::FormatterOptions;
use provider_messages_core::Locale;
use provider_messages_core::MessageCatalog;
use provider_messages_core::MessageFormatter;
use provider_messages_core::ProviderStrings;
use provider_messages_core::bundled::provider_catalog_builder;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::Level;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "provider-messages.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "PROVIDER_MESSAGES_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default culture and neutral locale tag.
const DEFAULT_LOCALE: &str = "en";

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Provider messages configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessagesConfig {
    /// Locale selection.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Formatter behavior.
    #[serde(default)]
    pub formatting: FormattingConfig,
    /// Diagnostic logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MessagesConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then a non-empty `PROVIDER_MESSAGES_CONFIG`, then
    /// `provider-messages.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.locale.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Returns the formatting culture.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `locale.culture` is not a valid tag.
    pub fn culture(&self) -> Result<Locale, ConfigError> {
        parse_locale("locale.culture", &self.locale.culture)
    }

    /// Returns the neutral resource locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `locale.neutral` is not a valid tag.
    pub fn neutral_locale(&self) -> Result<Locale, ConfigError> {
        parse_locale("locale.neutral", &self.locale.neutral)
    }

    /// Returns formatter options derived from `[formatting]`.
    #[must_use]
    pub const fn formatter_options(&self) -> FormatterOptions {
        FormatterOptions {
            report_unmatched: self.formatting.report_unmatched,
        }
    }

    /// Builds a formatter over `catalog` using the configured culture and options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the culture is invalid.
    pub fn build_formatter(
        &self,
        catalog: Arc<dyn MessageCatalog>,
    ) -> Result<MessageFormatter, ConfigError> {
        Ok(MessageFormatter::new(catalog, self.culture()?).with_options(self.formatter_options()))
    }

    /// Builds provider strings over the bundled catalog with the configured neutral locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a locale is invalid or the bundled catalog fails to build.
    pub fn build_provider_strings(&self) -> Result<ProviderStrings, ConfigError> {
        let catalog = provider_catalog_builder()
            .neutral(self.neutral_locale()?)
            .build()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        let formatter = self.build_formatter(Arc::new(catalog))?;
        Ok(ProviderStrings::new(formatter))
    }
}

/// Locale selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleConfig {
    /// Culture used for template lookup and value rendering.
    #[serde(default = "default_locale")]
    pub culture: String,
    /// Locale consulted after the culture's own fallback chain.
    #[serde(default = "default_locale")]
    pub neutral: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            culture: default_locale(),
            neutral: default_locale(),
        }
    }
}

impl LocaleConfig {
    /// Validates locale tags.
    fn validate(&self) -> Result<(), ConfigError> {
        parse_locale("locale.culture", &self.culture)?;
        parse_locale("locale.neutral", &self.neutral)?;
        Ok(())
    }
}

/// Formatter behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormattingConfig {
    /// Emit `debug` events when placeholders and arguments do not line up.
    #[serde(default)]
    pub report_unmatched: bool,
}

/// Output format for diagnostic logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// JSON objects, one per line.
    Json,
}

/// Diagnostic logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Maximum level (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Validates the configured level.
    fn validate(&self) -> Result<(), ConfigError> {
        self.max_level().map(|_| ())
    }

    /// Returns the configured level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `logging.level` is not a known level.
    pub fn max_level(&self) -> Result<Level, ConfigError> {
        self.level.trim().parse::<Level>().map_err(|_| {
            ConfigError::Invalid(format!(
                "logging.level must be one of trace, debug, info, warn, error (got '{}')",
                self.level
            ))
        })
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default locale tag.
fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// Default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

/// Parses a locale field, naming the field on failure.
fn parse_locale(field: &str, value: &str) -> Result<Locale, ConfigError> {
    Locale::parse(value).map_err(|err| ConfigError::Invalid(format!("{field}: {err}")))
}

/// Origin of the configuration path, named in path errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathSource {
    /// Passed to [`MessagesConfig::load`].
    Argument,
    /// Read from [`CONFIG_ENV_VAR`].
    Environment,
    /// [`DEFAULT_CONFIG_NAME`] in the working directory.
    Default,
}

impl PathSource {
    /// Label used in error messages.
    const fn label(self) -> &'static str {
        match self {
            Self::Argument => "argument",
            Self::Environment => CONFIG_ENV_VAR,
            Self::Default => "default",
        }
    }
}

/// Resolves the config path and checks it against the length limits.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let (resolved, source) = select_path(path, env::var_os(CONFIG_ENV_VAR));
    check_path_limits(&resolved).map_err(|reason| {
        ConfigError::Invalid(format!("config path {reason} (from {})", source.label()))
    })?;
    Ok(resolved)
}

/// Picks the explicit path, then a non-empty environment value, then the default.
fn select_path(path: Option<&Path>, env_value: Option<OsString>) -> (PathBuf, PathSource) {
    match (path, env_value) {
        (Some(path), _) => (path.to_path_buf(), PathSource::Argument),
        (None, Some(value)) if !value.is_empty() => (PathBuf::from(value), PathSource::Environment),
        (None, _) => (PathBuf::from(DEFAULT_CONFIG_NAME), PathSource::Default),
    }
}

/// Returns the violated limit, if any. Lengths are measured in OS bytes.
fn check_path_limits(path: &Path) -> Result<(), &'static str> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err("exceeds max length");
    }
    if path.components().any(|component| component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH) {
        return Err("component too long");
    }
    Ok(())
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

    #[test]
    fn path_limits_accept_regular_path() {
        assert!(check_path_limits(Path::new("./config/provider-messages.toml")).is_ok());
    }

    #[test]
    fn path_limits_reject_long_component() {
        let long = "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1);
        assert_eq!(check_path_limits(Path::new(&long)), Err("component too long"));
    }

    #[test]
    fn path_limits_reject_long_total_path() {
        let component = "a".repeat(MAX_PATH_COMPONENT_LENGTH);
        let path = vec![component; 20].join("/");
        assert_eq!(check_path_limits(Path::new(&path)), Err("exceeds max length"));
    }

    #[test]
    fn select_path_prefers_explicit_path() {
        let (path, source) =
            select_path(Some(Path::new("custom.toml")), Some(OsString::from("env.toml")));
        assert_eq!(path, PathBuf::from("custom.toml"));
        assert_eq!(source, PathSource::Argument);
    }

    #[test]
    fn select_path_uses_environment_then_default() {
        let (path, source) = select_path(None, Some(OsString::from("env.toml")));
        assert_eq!(path, PathBuf::from("env.toml"));
        assert_eq!(source, PathSource::Environment);

        let (path, source) = select_path(None, Some(OsString::new()));
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_NAME));
        assert_eq!(source, PathSource::Default);

        let (_, source) = select_path(None, None);
        assert_eq!(source, PathSource::Default);
    }

    #[test]
    fn resolve_path_names_the_source_of_a_bad_path() {
        let long = "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1);
        let message = resolve_path(Some(Path::new(&long))).unwrap_err().to_string();
        assert!(message.contains("config path component too long"));
        assert!(message.contains("(from argument)"));
    }

    #[test]
    fn parse_locale_names_the_field() {
        let error = parse_locale("locale.culture", "x").unwrap_err();
        assert!(error.to_string().contains("locale.culture"));
    }
}
