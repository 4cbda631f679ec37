// crates/provider-messages-core/src/lib.rs
// ============================================================================
// Module: Provider Messages Core Library
// Description: Public API surface for localized provider diagnostics.
// Purpose: Expose the catalog, formatter, value rendering, and typed messages.
// Dependencies: crate::{bundled, catalog, formatter, locale, strings, template, value}
// ============================================================================

//! ## Overview
//! Provider messages turn a catalog key plus named arguments into a localized
//! diagnostic string. Templates come from an injected [`MessageCatalog`];
//! [`MessageFormatter`] binds each declared `{name}` to a positional slot in
//! the caller's order and renders values with the locale's conventions.
//!
//! ```
//! use std::sync::Arc;
//!
//! use provider_messages_core::Locale;
//! use provider_messages_core::MessageFormatter;
//! use provider_messages_core::ProviderStrings;
//! use provider_messages_core::bundled::provider_catalog;
//!
//! let catalog = Arc::new(provider_catalog()?);
//! let formatter = MessageFormatter::new(catalog, Locale::parse("en-US")?);
//! let strings = ProviderStrings::new(formatter);
//! assert_eq!(
//!     strings.max_batch_size_must_be_positive(),
//!     "The value provided for max batch size must be positive."
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod bundled;
pub mod catalog;
pub mod formatter;
pub mod locale;
pub mod strings;
pub mod template;
pub mod value;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CatalogError;
pub use catalog::MessageCatalog;
pub use catalog::StaticCatalog;
pub use catalog::StaticCatalogBuilder;
pub use formatter::FormatError;
pub use formatter::FormatterOptions;
pub use formatter::MessageArg;
pub use formatter::MessageFormatter;
pub use formatter::RewrittenTemplate;
pub use formatter::rewrite_named_placeholders;
pub use formatter::substitute_positional;
pub use locale::Conventions;
pub use locale::Locale;
pub use locale::LocaleError;
pub use strings::ProviderStrings;
pub use template::TemplateError;
pub use value::MessageValue;
