// crates/provider-messages-config/src/logging.rs
// ============================================================================
// Module: Diagnostic Logging
// Description: Installs the process-wide tracing subscriber from config.
// Purpose: Route formatter diagnostics to stderr as text or JSON lines.
// Dependencies: tracing, tracing-subscriber
// ============================================================================

//! ## Overview
//! `RUST_LOG` overrides the configured level when set. Installing a
//! subscriber is a one-shot operation per process; later calls report
//! `false` instead of failing.

use tracing_subscriber::EnvFilter;

use crate::config::ConfigError;
use crate::config::LogFormat;
use crate::config::LoggingConfig;

/// Installs a global subscriber for `config`.
///
/// Returns `true` when this call installed the subscriber and `false` when
/// another subscriber was already in place.
///
/// # Errors
///
/// Returns [`ConfigError`] when the configured level is invalid.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, ConfigError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let installed = match config.format {
        LogFormat::Text => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };
    if installed {
        tracing::debug!(level = %config.level, "diagnostic logging initialized");
    }
    Ok(installed)
}

/// Builds the level filter, letting `RUST_LOG` take precedence.
fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    let level = config.max_level()?;
    Ok(EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase())))
}

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
    fn invalid_level_is_rejected_before_install() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            format: LogFormat::Text,
        };
        assert!(matches!(init_logging(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn second_install_reports_false() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config).unwrap();
        assert!(!init_logging(&config).unwrap());
    }
}
