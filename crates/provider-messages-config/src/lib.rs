// crates/provider-messages-config/src/lib.rs
// ============================================================================
// Module: Provider Messages Config Library
// Description: Configuration model, validation, and runtime bootstrap.
// Purpose: Turn `provider-messages.toml` into a ready formatter and logger.
// Dependencies: crate::{config, logging}
// ============================================================================

//! ## Overview
//! Loads the `[locale]`, `[formatting]`, and `[logging]` sections, validates
//! them fail-closed, and builds [`provider_messages_core::MessageFormatter`]
//! or [`provider_messages_core::ProviderStrings`] instances from the result.
//!
//! ```
//! use provider_messages_config::MessagesConfig;
//!
//! let config = MessagesConfig::from_toml_str("[locale]\nculture = \"ca-ES\"\n")?;
//! let strings = config.build_provider_strings()?;
//! assert!(strings.postgres_not_in_use().starts_with("Els mètodes"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod logging;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::FormattingConfig;
pub use config::LocaleConfig;
pub use config::LogFormat;
pub use config::LoggingConfig;
pub use config::MessagesConfig;
pub use logging::init_logging;
