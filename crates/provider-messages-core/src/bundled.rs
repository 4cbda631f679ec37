// crates/provider-messages-core/src/bundled.rs
// ============================================================================
// Module: Bundled Provider Catalog
// Description: Message templates shipped with the provider.
// Purpose: Supply the neutral English templates and the Catalan satellite.
// Dependencies: crate::{catalog, locale, strings}
// ============================================================================

//! ## Overview
//! English is the neutral resource language; Catalan is a satellite locale.
//! Both tables must stay in key and placeholder parity.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::catalog::CatalogError;
use crate::catalog::StaticCatalog;
use crate::catalog::StaticCatalogBuilder;
use crate::locale::Locale;
use crate::strings::keys;

// ============================================================================
// SECTION: Catalog Tables
// ============================================================================

/// Tag of the neutral resource locale.
pub const NEUTRAL_LOCALE: &str = "en";

/// Neutral (English) templates.
pub const CATALOG_EN: &[(&str, &str)] = &[
    (
        keys::INTEGER_CONFIGURATION_VALUE_FORMAT_ERROR,
        "The value for the configuration entry '{configurationKey}' is '{invalidValue}', but an \
         integer is expected.",
    ),
    (
        keys::INVALID_ENUM_VALUE,
        "The value provided for argument '{argumentName}' must be a valid value of enum type \
         '{enumType}'.",
    ),
    (keys::MAX_BATCH_SIZE_MUST_BE_POSITIVE, "The value provided for max batch size must be positive."),
    (
        keys::SEQUENCE_BAD_BLOCK_SIZE,
        "The increment value of '{increment}' for sequence '{sequenceName}' cannot be used for \
         value generation. Sequences used for value generation must have positive increments.",
    ),
    (
        keys::IDENTITY_BAD_TYPE,
        "Identity value generation cannot be used for the property '{property}' on entity type \
         '{entityType}' because the property type is '{propertyType}'. Identity value generation \
         can only be used with signed integer properties.",
    ),
    (
        keys::SEQUENCE_BAD_TYPE,
        "PostgreSQL sequences cannot be used to generate values for the property '{property}' on \
         entity type '{entityType}' because the property type is '{propertyType}'. Sequences can \
         only be used with integer properties.",
    ),
    (
        keys::POSTGRES_NOT_IN_USE,
        "PostgreSQL-specific methods can only be used when the context is using a PostgreSQL \
         data store.",
    ),
];

/// Catalan templates.
pub const CATALOG_CA: &[(&str, &str)] = &[
    (
        keys::INTEGER_CONFIGURATION_VALUE_FORMAT_ERROR,
        "El valor de l'entrada de configuració '{configurationKey}' és '{invalidValue}', però \
         s'esperava un enter.",
    ),
    (
        keys::INVALID_ENUM_VALUE,
        "El valor proporcionat per a l'argument '{argumentName}' ha de ser un valor vàlid del \
         tipus enumerat '{enumType}'.",
    ),
    (
        keys::MAX_BATCH_SIZE_MUST_BE_POSITIVE,
        "El valor proporcionat per a la mida màxima del lot ha de ser positiu.",
    ),
    (
        keys::SEQUENCE_BAD_BLOCK_SIZE,
        "El valor d'increment '{increment}' de la seqüència '{sequenceName}' no es pot utilitzar \
         per generar valors. Les seqüències utilitzades per generar valors han de tenir \
         increments positius.",
    ),
    (
        keys::IDENTITY_BAD_TYPE,
        "La generació de valors d'identitat no es pot utilitzar per a la propietat '{property}' \
         del tipus d'entitat '{entityType}' perquè el tipus de la propietat és '{propertyType}'. \
         La generació de valors d'identitat només es pot utilitzar amb propietats d'enter amb \
         signe.",
    ),
    (
        keys::SEQUENCE_BAD_TYPE,
        "Les seqüències de PostgreSQL no es poden utilitzar per generar valors per a la propietat \
         '{property}' del tipus d'entitat '{entityType}' perquè el tipus de la propietat és \
         '{propertyType}'. Les seqüències només es poden utilitzar amb propietats d'enter.",
    ),
    (
        keys::POSTGRES_NOT_IN_USE,
        "Els mètodes específics de PostgreSQL només es poden utilitzar quan el context fa servir \
         un magatzem de dades PostgreSQL.",
    ),
];

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Returns `(locale tag, table)` pairs for every bundled locale.
#[must_use]
pub const fn bundled_tables() -> &'static [(&'static str, &'static [(&'static str, &'static str)])] {
    &[(NEUTRAL_LOCALE, CATALOG_EN), ("ca", CATALOG_CA)]
}

/// Returns a builder preloaded with the bundled tables and English as neutral locale.
#[must_use]
pub fn provider_catalog_builder() -> StaticCatalogBuilder {
    let mut builder =
        StaticCatalog::builder().neutral(Locale::parse(NEUTRAL_LOCALE).unwrap_or_default());
    for (tag, table) in bundled_tables() {
        let locale = Locale::parse(tag).unwrap_or_default();
        builder = builder.entries(&locale, table.iter().copied());
    }
    builder
}

/// Builds the bundled provider catalog.
///
/// # Errors
///
/// Returns [`CatalogError`] if a bundled table is malformed.
pub fn provider_catalog() -> Result<StaticCatalog, CatalogError> {
    provider_catalog_builder().build()
}
