// crates/provider-messages-core/src/locale.rs
// ============================================================================
// Module: Locale Model
// Description: Locale tags, parent chains, and culture formatting conventions.
// Purpose: Drive catalog fallback and culture-sensitive value rendering.
// Dependencies: thiserror, unic-langid
// ============================================================================

//! ## Overview
//! A [`Locale`] wraps a BCP-47 [`LanguageIdentifier`] such as `en`, `en-US`,
//! or `zh-Hans-CN`, or stands for the invariant locale (`und`). Locales
//! resolve a parent chain for catalog fallback and expose the
//! [`Conventions`] used to render numbers and dates.
//!
//! ## Invariants
//! - Tags are canonicalized by `unic-langid`: language lowercase, script
//!   titlecase, region uppercase.
//! - The parent chain always terminates at the invariant locale.
//! - Unknown languages use invariant conventions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use unic_langid::LanguageIdentifier;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum accepted length of a raw locale tag.
const MAX_TAG_LENGTH: usize = 35;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while parsing a locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The tag exceeded the maximum tag length.
    #[error("locale tag exceeds {MAX_TAG_LENGTH} characters")]
    TooLong,
    /// The tag is not a well-formed language identifier.
    #[error("invalid locale tag '{tag}': {reason}")]
    Invalid {
        /// Raw tag being parsed.
        tag: String,
        /// Parser failure.
        reason: String,
    },
}

// ============================================================================
// SECTION: Locale
// ============================================================================

/// Canonical locale identifier.
///
/// # Invariants
/// - The invariant locale is the `und` identifier with no subtags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Locale {
    /// Canonical identifier.
    id: LanguageIdentifier,
}

impl Locale {
    /// Returns the invariant locale.
    #[must_use]
    pub fn invariant() -> Self {
        Self::default()
    }

    /// Parses a locale tag (case-insensitive, `-` or `_` separated).
    ///
    /// The strings `""`, `"invariant"`, and `"iv"` map to the invariant locale.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] when the tag is too long or not a valid identifier.
    pub fn parse(value: &str) -> Result<Self, LocaleError> {
        let value = value.trim();
        if value.len() > MAX_TAG_LENGTH {
            return Err(LocaleError::TooLong);
        }
        if value.is_empty()
            || value.eq_ignore_ascii_case("invariant")
            || value.eq_ignore_ascii_case("iv")
        {
            return Ok(Self::invariant());
        }
        let id = value.parse::<LanguageIdentifier>().map_err(|err| LocaleError::Invalid {
            tag: value.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            id,
        })
    }

    /// Returns the canonical tag (empty for the invariant locale).
    #[must_use]
    pub fn tag(&self) -> String {
        if self.is_invariant() { String::new() } else { self.id.to_string() }
    }

    /// Returns true for the invariant locale.
    #[must_use]
    pub fn is_invariant(&self) -> bool {
        self.id == LanguageIdentifier::default()
    }

    /// Returns the language subtag (empty for the invariant locale).
    #[must_use]
    pub fn language(&self) -> &str {
        if self.is_invariant() { "" } else { self.id.language.as_str() }
    }

    /// Returns the parent locale, or `None` for the invariant locale.
    ///
    /// Variants drop first, then region, then script, then language:
    /// `zh-Hans-CN` → `zh-Hans` → `zh` → invariant.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_invariant() {
            return None;
        }
        let mut id = self.id.clone();
        if id.variants().next().is_some() {
            id.clear_variants();
        } else if id.region.is_some() {
            id.region = None;
        } else if id.script.is_some() {
            id.script = None;
        } else {
            id = LanguageIdentifier::default();
        }
        Some(Self {
            id,
        })
    }

    /// Returns this locale followed by each ancestor, ending at invariant.
    #[must_use]
    pub fn fallback_chain(&self) -> Vec<Self> {
        let mut chain = vec![self.clone()];
        let mut current = self.parent();
        while let Some(locale) = current {
            current = locale.parent();
            chain.push(locale);
        }
        chain
    }

    /// Returns the formatting conventions for this locale's language.
    #[must_use]
    pub fn conventions(&self) -> &'static Conventions {
        Conventions::for_language(self.language())
    }
}

impl From<LanguageIdentifier> for Locale {
    fn from(id: LanguageIdentifier) -> Self {
        Self {
            id,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            f.write_str("invariant")
        } else {
            fmt::Display::fmt(&self.id, f)
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

// ============================================================================
// SECTION: Conventions
// ============================================================================

/// Ordering of date components in a short date pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// Month, day, year (`M/d/yyyy`).
    MonthDayYear,
    /// Day, month, year (`dd.MM.yyyy`).
    DayMonthYear,
    /// Year, month, day (`yyyy/MM/dd`).
    YearMonthDay,
}

/// Short date pattern for a culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePattern {
    /// Component ordering.
    pub order: DateOrder,
    /// Separator between components.
    pub separator: char,
    /// Whether day and month are zero-padded to two digits.
    pub zero_pad: bool,
}

/// Culture-sensitive formatting conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
    /// Decimal separator.
    pub decimal_separator: char,
    /// Digit group separator.
    pub group_separator: char,
    /// Negative sign.
    pub negative_sign: char,
    /// Short date pattern.
    pub short_date: DatePattern,
}

/// Invariant culture conventions.
pub const INVARIANT_CONVENTIONS: Conventions = Conventions {
    decimal_separator: '.',
    group_separator: ',',
    negative_sign: '-',
    short_date: DatePattern {
        order: DateOrder::MonthDayYear,
        separator: '/',
        zero_pad: true,
    },
};

/// Culture conventions keyed by language subtag.
const LANGUAGE_CONVENTIONS: &[(&str, Conventions)] = &[
    (
        "en",
        Conventions {
            decimal_separator: '.',
            group_separator: ',',
            negative_sign: '-',
            short_date: DatePattern {
                order: DateOrder::MonthDayYear,
                separator: '/',
                zero_pad: false,
            },
        },
    ),
    (
        "ca",
        Conventions {
            decimal_separator: ',',
            group_separator: '.',
            negative_sign: '-',
            short_date: DatePattern {
                order: DateOrder::DayMonthYear,
                separator: '/',
                zero_pad: false,
            },
        },
    ),
    (
        "de",
        Conventions {
            decimal_separator: ',',
            group_separator: '.',
            negative_sign: '-',
            short_date: DatePattern {
                order: DateOrder::DayMonthYear,
                separator: '.',
                zero_pad: true,
            },
        },
    ),
    (
        "es",
        Conventions {
            decimal_separator: ',',
            group_separator: '.',
            negative_sign: '-',
            short_date: DatePattern {
                order: DateOrder::DayMonthYear,
                separator: '/',
                zero_pad: true,
            },
        },
    ),
    (
        "fr",
        Conventions {
            decimal_separator: ',',
            group_separator: '\u{202f}',
            negative_sign: '-',
            short_date: DatePattern {
                order: DateOrder::DayMonthYear,
                separator: '/',
                zero_pad: true,
            },
        },
    ),
    (
        "pt",
        Conventions {
            decimal_separator: ',',
            group_separator: '.',
            negative_sign: '-',
            short_date: DatePattern {
                order: DateOrder::DayMonthYear,
                separator: '/',
                zero_pad: true,
            },
        },
    ),
    (
        "ru",
        Conventions {
            decimal_separator: ',',
            group_separator: '\u{a0}',
            negative_sign: '-',
            short_date: DatePattern {
                order: DateOrder::DayMonthYear,
                separator: '.',
                zero_pad: true,
            },
        },
    ),
    (
        "ja",
        Conventions {
            decimal_separator: '.',
            group_separator: ',',
            negative_sign: '-',
            short_date: DatePattern {
                order: DateOrder::YearMonthDay,
                separator: '/',
                zero_pad: true,
            },
        },
    ),
    (
        "zh",
        Conventions {
            decimal_separator: '.',
            group_separator: ',',
            negative_sign: '-',
            short_date: DatePattern {
                order: DateOrder::YearMonthDay,
                separator: '/',
                zero_pad: false,
            },
        },
    ),
];

impl Conventions {
    /// Returns conventions for a language subtag, falling back to invariant.
    #[must_use]
    pub fn for_language(language: &str) -> &'static Self {
        LANGUAGE_CONVENTIONS
            .iter()
            .find(|(tag, _)| *tag == language)
            .map_or(&INVARIANT_CONVENTIONS, |(_, conventions)| conventions)
    }
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
    fn parse_normalizes_case_and_separators() {
        assert_eq!(Locale::parse("EN_us").map(|l| l.tag()), Ok("en-US".into()));
        assert_eq!(Locale::parse("zh_hans_cn").map(|l| l.tag()), Ok("zh-Hans-CN".into()));
        assert_eq!(Locale::parse("es-419").map(|l| l.tag()), Ok("es-419".into()));
    }

    #[test]
    fn parse_maps_blank_to_invariant() {
        assert_eq!(Locale::parse("  "), Ok(Locale::invariant()));
        assert_eq!(Locale::parse("Invariant"), Ok(Locale::invariant()));
        assert_eq!(Locale::parse("und"), Ok(Locale::invariant()));
    }

    #[test]
    fn parse_rejects_malformed_tags() {
        assert!(matches!(Locale::parse("e"), Err(LocaleError::Invalid { .. })));
        assert!(matches!(Locale::parse("en-"), Err(LocaleError::Invalid { .. })));
        assert!(matches!(Locale::parse("en-U$"), Err(LocaleError::Invalid { .. })));
        assert_eq!(Locale::parse(&"a".repeat(40)), Err(LocaleError::TooLong));
    }

    #[test]
    fn fallback_chain_ends_at_invariant() {
        let locale = Locale::parse("zh-Hans-CN").unwrap();
        let chain: Vec<String> = locale.fallback_chain().iter().map(Locale::tag).collect();
        assert_eq!(chain, vec!["zh-Hans-CN", "zh-Hans", "zh", ""]);
        assert_eq!(Locale::invariant().parent(), None);
    }

    #[test]
    fn fallback_chain_drops_variants_first() {
        let locale = Locale::parse("ca-ES-valencia").unwrap();
        let chain: Vec<String> = locale.fallback_chain().iter().map(Locale::tag).collect();
        assert_eq!(chain, vec!["ca-ES-valencia", "ca-ES", "ca", ""]);
    }

    #[test]
    fn conventions_follow_language() {
        let de = Locale::parse("de-AT").unwrap();
        assert_eq!(de.conventions().decimal_separator, ',');
        let unknown = Locale::parse("tlh").unwrap();
        assert_eq!(unknown.conventions(), &INVARIANT_CONVENTIONS);
        assert_eq!(Locale::invariant().language(), "");
    }

    #[test]
    fn display_names_invariant() {
        assert_eq!(Locale::invariant().to_string(), "invariant");
        assert_eq!(Locale::parse("ca-ES").unwrap().to_string(), "ca-ES");
    }

    #[test]
    fn from_language_identifier_keeps_subtags() {
        let id: LanguageIdentifier = "pt-BR".parse().unwrap();
        let locale = Locale::from(id);
        assert_eq!(locale.language(), "pt");
        assert_eq!(locale.parent().map(|parent| parent.tag()), Some("pt".to_string()));
    }
}
