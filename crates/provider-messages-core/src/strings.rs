// crates/provider-messages-core/src/strings.rs
// ============================================================================
// Module: Provider Strings
// Description: Typed accessors for every provider diagnostic message.
// Purpose: Give call sites one method per message with its exact arguments.
// Dependencies: crate::{formatter, value}
// ============================================================================

//! ## Overview
//! Each accessor formats a fixed catalog key. Parameters are declared in the
//! order used for positional substitution.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::format_message;
use crate::formatter::MessageFormatter;
use crate::value::MessageValue;

// ============================================================================
// SECTION: Keys
// ============================================================================

/// Catalog keys for provider messages.
pub mod keys {
    /// A configuration entry held a non-integer value.
    pub const INTEGER_CONFIGURATION_VALUE_FORMAT_ERROR: &str =
        "IntegerConfigurationValueFormatError";
    /// An argument was outside its enum type.
    pub const INVALID_ENUM_VALUE: &str = "InvalidEnumValue";
    /// Max batch size was zero or negative.
    pub const MAX_BATCH_SIZE_MUST_BE_POSITIVE: &str = "MaxBatchSizeMustBePositive";
    /// A sequence increment cannot drive value generation.
    pub const SEQUENCE_BAD_BLOCK_SIZE: &str = "SequenceBadBlockSize";
    /// Identity generation on a non-integer property.
    pub const IDENTITY_BAD_TYPE: &str = "IdentityBadType";
    /// Sequence generation on a non-integer property.
    pub const SEQUENCE_BAD_TYPE: &str = "SequenceBadType";
    /// Provider-specific API used without the provider.
    pub const POSTGRES_NOT_IN_USE: &str = "PostgresNotInUse";

    /// Every catalogued key.
    pub const ALL: &[&str] = &[
        INTEGER_CONFIGURATION_VALUE_FORMAT_ERROR,
        INVALID_ENUM_VALUE,
        MAX_BATCH_SIZE_MUST_BE_POSITIVE,
        SEQUENCE_BAD_BLOCK_SIZE,
        IDENTITY_BAD_TYPE,
        SEQUENCE_BAD_TYPE,
        POSTGRES_NOT_IN_USE,
    ];
}

/// Fixed wording for the uncatalogued skip/order-by diagnostic.
const SKIP_NEEDS_ORDER_BY: &str =
    "A query containing the Skip operator must include at least one OrderBy operation.";

// ============================================================================
// SECTION: Accessors
// ============================================================================

/// Typed provider message accessors over a [`MessageFormatter`].
///
/// # Panics
///
/// Every catalogued accessor panics if its key is missing from the catalog.
#[derive(Debug, Clone)]
pub struct ProviderStrings {
    /// Formatter used by every accessor.
    formatter: MessageFormatter,
}

impl ProviderStrings {
    /// Wraps a formatter.
    #[must_use]
    pub const fn new(formatter: MessageFormatter) -> Self {
        Self {
            formatter,
        }
    }

    /// Returns the underlying formatter.
    #[must_use]
    pub const fn formatter(&self) -> &MessageFormatter {
        &self.formatter
    }

    /// The value for the configuration entry '{configurationKey}' is '{invalidValue}', but an
    /// integer is expected.
    #[must_use]
    pub fn integer_configuration_value_format_error(
        &self,
        configuration_key: impl Into<MessageValue>,
        invalid_value: impl Into<MessageValue>,
    ) -> String {
        format_message!(
            self.formatter,
            keys::INTEGER_CONFIGURATION_VALUE_FORMAT_ERROR,
            configurationKey = configuration_key,
            invalidValue = invalid_value,
        )
    }

    /// The value provided for argument '{argumentName}' must be a valid value of enum type
    /// '{enumType}'.
    #[must_use]
    pub fn invalid_enum_value(
        &self,
        argument_name: impl Into<MessageValue>,
        enum_type: impl Into<MessageValue>,
    ) -> String {
        format_message!(
            self.formatter,
            keys::INVALID_ENUM_VALUE,
            argumentName = argument_name,
            enumType = enum_type,
        )
    }

    /// The value provided for max batch size must be positive.
    #[must_use]
    pub fn max_batch_size_must_be_positive(&self) -> String {
        format_message!(self.formatter, keys::MAX_BATCH_SIZE_MUST_BE_POSITIVE)
    }

    /// The increment value of '{increment}' for sequence '{sequenceName}' cannot be used for
    /// value generation.
    #[must_use]
    pub fn sequence_bad_block_size(
        &self,
        increment: impl Into<MessageValue>,
        sequence_name: impl Into<MessageValue>,
    ) -> String {
        format_message!(
            self.formatter,
            keys::SEQUENCE_BAD_BLOCK_SIZE,
            increment = increment,
            sequenceName = sequence_name,
        )
    }

    /// Identity value generation cannot be used for the property '{property}' on entity type
    /// '{entityType}' because the property type is '{propertyType}'.
    #[must_use]
    pub fn identity_bad_type(
        &self,
        property: impl Into<MessageValue>,
        entity_type: impl Into<MessageValue>,
        property_type: impl Into<MessageValue>,
    ) -> String {
        format_message!(
            self.formatter,
            keys::IDENTITY_BAD_TYPE,
            property = property,
            entityType = entity_type,
            propertyType = property_type,
        )
    }

    /// Sequences cannot be used to generate values for the property '{property}' on entity
    /// type '{entityType}' because the property type is '{propertyType}'.
    #[must_use]
    pub fn sequence_bad_type(
        &self,
        property: impl Into<MessageValue>,
        entity_type: impl Into<MessageValue>,
        property_type: impl Into<MessageValue>,
    ) -> String {
        format_message!(
            self.formatter,
            keys::SEQUENCE_BAD_TYPE,
            property = property,
            entityType = entity_type,
            propertyType = property_type,
        )
    }

    /// Provider-specific methods can only be used when the context uses the provider.
    #[must_use]
    pub fn postgres_not_in_use(&self) -> String {
        format_message!(self.formatter, keys::POSTGRES_NOT_IN_USE)
    }

    /// A query containing the Skip operator must include at least one `OrderBy` operation.
    ///
    /// This message is not catalogued and is never localized.
    #[must_use]
    pub fn skip_needs_order_by(&self) -> String {
        SKIP_NEEDS_ORDER_BY.to_string()
    }
}
