// crates/provider-messages-core/src/value.rs
// ============================================================================
// Module: Message Values
// Description: Argument values and their culture-sensitive text rendering.
// Purpose: Render placeholder arguments using locale number/date conventions.
// Dependencies: time, crate::locale
// ============================================================================

//! ## Overview
//! [`MessageValue`] is the argument type accepted by the formatter. Values are
//! rendered with the active locale's [`Conventions`] and an optional format
//! string (`N2`, `F1`, `D4`, `X`, `o`, ...). Unknown format strings fall back
//! to general rendering.
//!
//! ## Invariants
//! - [`MessageValue::Null`] always renders as the empty string.
//! - Negative integers render in hex as two's complement at their source width.
//! - General float rendering switches to exponent form at `1E+15` and below `1E-04`.
//! - Rendering never fails and never panics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;
use std::fmt;

use time::Date;

use crate::locale::Conventions;
use crate::locale::DateOrder;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Largest precision accepted in a numeric format string.
const MAX_PRECISION: usize = 99;
/// Default precision for `N` and `F` formats.
const DEFAULT_DECIMALS: usize = 2;
/// General formatting uses exponent form from this decimal exponent upward.
const MAX_FIXED_EXPONENT: i32 = 15;
/// Smallest decimal exponent general formatting still renders in fixed form.
const MIN_FIXED_EXPONENT: i32 = -4;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A placeholder argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageValue {
    /// Absent value; renders as the empty string.
    Null,
    /// Text, rendered verbatim.
    Text(String),
    /// Signed integer.
    Integer {
        /// Value widened to 64 bits.
        value: i64,
        /// Bit width of the source type.
        bits: u32,
    },
    /// Unsigned integer.
    Unsigned(u64),
    /// Floating-point number.
    Float(f64),
    /// Boolean, rendered as `true` or `false`.
    Boolean(bool),
    /// Calendar date.
    Date(Date),
}

impl MessageValue {
    /// Builds a text value from any displayable value.
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    /// Returns true for [`MessageValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the value using `conventions` and an optional format string.
    #[must_use]
    pub fn render(&self, format: Option<&str>, conventions: &Conventions) -> String {
        let spec = format.and_then(NumericFormat::parse);
        match self {
            Self::Null => String::new(),
            Self::Text(text) => text.clone(),
            Self::Boolean(value) => value.to_string(),
            Self::Integer {
                value,
                bits,
            } => match spec {
                Some(NumericFormat {
                    kind: FormatKind::Hex,
                    uppercase,
                    precision,
                }) => pad_hex(format!("{:x}", twos_complement(*value, *bits)), uppercase, precision),
                _ => render_integer(i128::from(*value), spec, conventions),
            },
            Self::Unsigned(value) => match spec {
                Some(NumericFormat {
                    kind: FormatKind::Hex,
                    uppercase,
                    precision,
                }) => pad_hex(format!("{value:x}"), uppercase, precision),
                _ => render_integer(i128::from(*value), spec, conventions),
            },
            Self::Float(value) => render_float(*value, spec, conventions),
            Self::Date(date) => render_date(*date, format, conventions),
        }
    }
}

impl From<&str> for MessageValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MessageValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for MessageValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for MessageValue {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<char> for MessageValue {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for MessageValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f32> for MessageValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for MessageValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Date> for MessageValue {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<isize> for MessageValue {
    fn from(value: isize) -> Self {
        i64::try_from(value).map_or_else(
            |_| Self::Text(value.to_string()),
            |value| Self::Integer {
                value,
                bits: isize::BITS,
            },
        )
    }
}

impl From<usize> for MessageValue {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Unsigned)
    }
}

impl<T: Into<Self>> From<Option<T>> for MessageValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Implements `From` for signed integers, recording the source width.
macro_rules! impl_from_signed {
    ($($source:ty),+) => {
        $(
            impl From<$source> for MessageValue {
                fn from(value: $source) -> Self {
                    Self::Integer {
                        value: i64::from(value),
                        bits: <$source>::BITS,
                    }
                }
            }
        )+
    };
}

/// Implements `From` for lossless unsigned integer conversions.
macro_rules! impl_from_unsigned {
    ($($source:ty),+) => {
        $(
            impl From<$source> for MessageValue {
                fn from(value: $source) -> Self {
                    Self::Unsigned(u64::from(value))
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

// ============================================================================
// SECTION: Format Strings
// ============================================================================

/// Numeric format families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormatKind {
    /// `G`: general.
    General,
    /// `N`: grouped number.
    Number,
    /// `F`: fixed point.
    Fixed,
    /// `D`: zero-padded integer.
    Decimal,
    /// `X`: hexadecimal integer.
    Hex,
}

/// Parsed numeric format string (`<letter><precision?>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumericFormat {
    /// Format family.
    kind: FormatKind,
    /// Whether the format letter was uppercase.
    uppercase: bool,
    /// Requested precision, when present.
    precision: Option<usize>,
}

impl NumericFormat {
    /// Parses a standard numeric format string; `None` when unrecognized.
    fn parse(format: &str) -> Option<Self> {
        let mut chars = format.trim().chars();
        let letter = chars.next()?;
        let kind = match letter.to_ascii_uppercase() {
            'G' => FormatKind::General,
            'N' => FormatKind::Number,
            'F' => FormatKind::Fixed,
            'D' => FormatKind::Decimal,
            'X' => FormatKind::Hex,
            _ => return None,
        };
        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else {
            if !digits.chars().all(|ch| ch.is_ascii_digit()) {
                return None;
            }
            let value: usize = digits.parse().ok()?;
            if value > MAX_PRECISION {
                return None;
            }
            Some(value)
        };
        Some(Self {
            kind,
            uppercase: letter.is_ascii_uppercase(),
            precision,
        })
    }
}

// ============================================================================
// SECTION: Rendering Helpers
// ============================================================================

/// Renders an integer with an optional numeric format.
fn render_integer(value: i128, spec: Option<NumericFormat>, conventions: &Conventions) -> String {
    let digits = value.unsigned_abs().to_string();
    let body = match spec {
        Some(NumericFormat {
            kind: FormatKind::Number,
            precision,
            ..
        }) => with_fraction(
            group_digits(&digits, conventions.group_separator),
            &"0".repeat(precision.unwrap_or(DEFAULT_DECIMALS)),
            conventions,
        ),
        Some(NumericFormat {
            kind: FormatKind::Fixed,
            precision,
            ..
        }) => with_fraction(digits, &"0".repeat(precision.unwrap_or(DEFAULT_DECIMALS)), conventions),
        Some(NumericFormat {
            kind: FormatKind::Decimal,
            precision: Some(width),
            ..
        }) => format!("{digits:0>width$}"),
        _ => digits,
    };
    with_sign(value < 0, body, conventions)
}

/// Renders a float with an optional numeric format.
fn render_float(value: f64, spec: Option<NumericFormat>, conventions: &Conventions) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return with_sign(value < 0.0, "\u{221e}".to_string(), conventions);
    }
    let magnitude = value.abs();
    let body = match spec {
        Some(NumericFormat {
            kind: kind @ (FormatKind::Number | FormatKind::Fixed),
            precision,
            ..
        }) => {
            let precision = precision.unwrap_or(DEFAULT_DECIMALS);
            let fixed = format!("{magnitude:.precision$}");
            let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
            let integer = if kind == FormatKind::Number {
                group_digits(integer, conventions.group_separator)
            } else {
                integer.to_string()
            };
            with_fraction(integer, fraction, conventions)
        }
        _ => render_general(magnitude, conventions),
    };
    with_sign(value < 0.0, body, conventions)
}

/// Renders a non-negative finite float with the shortest round-trip digits.
fn render_general(magnitude: f64, conventions: &Conventions) -> String {
    let scientific = format!("{magnitude:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or_default()),
        None => (scientific.as_str(), 0),
    };
    if (MIN_FIXED_EXPONENT .. MAX_FIXED_EXPONENT).contains(&exponent) {
        return split_fraction(&magnitude.to_string(), conventions);
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    let mantissa = split_fraction(mantissa, conventions);
    format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs())
}

/// Re-joins `integer.fraction` text with the locale decimal separator.
fn split_fraction(text: &str, conventions: &Conventions) -> String {
    match text.split_once('.') {
        Some((integer, fraction)) => with_fraction(integer.to_string(), fraction, conventions),
        None => text.to_string(),
    }
}

/// Reinterprets `value` as an unsigned bit pattern `bits` wide.
fn twos_complement(value: i64, bits: u32) -> u64 {
    let raw = u64::from_ne_bytes(value.to_ne_bytes());
    if bits >= u64::BITS { raw } else { raw & ((1_u64 << bits) - 1) }
}

/// Renders a date using the locale short pattern or ISO 8601.
fn render_date(date: Date, format: Option<&str>, conventions: &Conventions) -> String {
    let year = date.year();
    let month = u8::from(date.month());
    let day = date.day();
    let iso = matches!(format.map(str::trim), Some("o" | "O" | "s" | "yyyy-MM-dd"));
    if iso {
        return format!("{year:04}-{month:02}-{day:02}");
    }
    let pattern = conventions.short_date;
    let (day, month) = if pattern.zero_pad {
        (format!("{day:02}"), format!("{month:02}"))
    } else {
        (day.to_string(), month.to_string())
    };
    let year = format!("{year:04}");
    let separator = pattern.separator;
    match pattern.order {
        DateOrder::MonthDayYear => format!("{month}{separator}{day}{separator}{year}"),
        DateOrder::DayMonthYear => format!("{day}{separator}{month}{separator}{year}"),
        DateOrder::YearMonthDay => format!("{year}{separator}{month}{separator}{day}"),
    }
}

/// Inserts group separators every three digits from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let count = digits.chars().count();
    let mut grouped = String::with_capacity(digits.len() + count / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (count - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Appends a fraction with the locale decimal separator when non-empty.
fn with_fraction(mut integer: String, fraction: &str, conventions: &Conventions) -> String {
    if !fraction.is_empty() {
        integer.push(conventions.decimal_separator);
        integer.push_str(fraction);
    }
    integer
}

/// Prefixes the locale negative sign when `negative` is set.
fn with_sign(negative: bool, body: String, conventions: &Conventions) -> String {
    if negative {
        let mut signed = String::with_capacity(body.len() + 1);
        signed.push(conventions.negative_sign);
        signed.push_str(&body);
        signed
    } else {
        body
    }
}

/// Applies case and zero padding to a hex rendering.
fn pad_hex(hex: String, uppercase: bool, precision: Option<usize>) -> String {
    let hex = if uppercase { hex.to_ascii_uppercase() } else { hex };
    match precision {
        Some(width) => format!("{hex:0>width$}"),
        None => hex,
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
    use time::macros::date;

    use super::*;
    use crate::locale::Locale;

    fn conventions(tag: &str) -> &'static Conventions {
        Locale::parse(tag).unwrap().conventions()
    }

    #[test]
    fn null_renders_empty_for_every_format() {
        let en = conventions("en");
        assert_eq!(MessageValue::Null.render(None, en), "");
        assert_eq!(MessageValue::Null.render(Some("N2"), en), "");
        assert!(MessageValue::from(None::<i32>).is_null());
    }

    #[test]
    fn integers_render_without_grouping_by_default() {
        assert_eq!(MessageValue::from(1_234_567).render(None, conventions("de")), "1234567");
        assert_eq!(MessageValue::from(-42_i64).render(None, conventions("en")), "-42");
    }

    #[test]
    fn integer_number_format_groups_with_locale_separators() {
        assert_eq!(MessageValue::from(1_234_567).render(Some("N0"), conventions("en")), "1,234,567");
        assert_eq!(
            MessageValue::from(1_234_567).render(Some("N"), conventions("de")),
            "1.234.567,00"
        );
        assert_eq!(MessageValue::from(-1000).render(Some("N1"), conventions("en")), "-1,000.0");
    }

    #[test]
    fn integer_decimal_and_hex_formats() {
        let en = conventions("en");
        assert_eq!(MessageValue::from(42).render(Some("D5"), en), "00042");
        assert_eq!(MessageValue::from(-42).render(Some("D5"), en), "-00042");
        assert_eq!(MessageValue::from(255_u8).render(Some("X4"), en), "00FF");
        assert_eq!(MessageValue::from(255_u8).render(Some("x"), en), "ff");
        assert_eq!(MessageValue::from(-1_i32).render(Some("X"), en), "FFFFFFFF");
        assert_eq!(MessageValue::from(-1_i8).render(Some("x"), en), "ff");
        assert_eq!(MessageValue::from(-2_i64).render(Some("X"), en), "FFFFFFFFFFFFFFFE");
        assert_eq!(MessageValue::from(-1_i16).render(Some("X6"), en), "00FFFF");
    }

    #[test]
    fn floats_use_locale_decimal_separator() {
        assert_eq!(MessageValue::from(1234.5).render(None, conventions("en-US")), "1234.5");
        assert_eq!(MessageValue::from(1234.5).render(None, conventions("ca")), "1234,5");
        assert_eq!(MessageValue::from(-0.25).render(None, conventions("de")), "-0,25");
        assert_eq!(MessageValue::from(3.0).render(None, conventions("en")), "3");
    }

    #[test]
    fn general_floats_switch_to_exponent_form() {
        let en = conventions("en");
        assert_eq!(MessageValue::from(1e14).render(None, en), "100000000000000");
        assert_eq!(MessageValue::from(1e15).render(None, en), "1E+15");
        assert_eq!(MessageValue::from(1e16).render(None, en), "1E+16");
        assert_eq!(MessageValue::from(-1.5e20).render(None, conventions("de")), "-1,5E+20");
        assert_eq!(MessageValue::from(0.0001).render(None, en), "0.0001");
        assert_eq!(MessageValue::from(0.000_012_5).render(None, en), "1.25E-05");
        assert_eq!(MessageValue::from(0.0).render(None, en), "0");
    }

    #[test]
    fn float_fixed_and_number_formats() {
        assert_eq!(MessageValue::from(1234.5).render(Some("N2"), conventions("en")), "1,234.50");
        assert_eq!(MessageValue::from(1234.5).render(Some("N2"), conventions("de")), "1.234,50");
        assert_eq!(MessageValue::from(2.345_f64).render(Some("F1"), conventions("en")), "2.3");
        assert_eq!(MessageValue::from(7.0).render(Some("F0"), conventions("en")), "7");
    }

    #[test]
    fn non_finite_floats_render_symbols() {
        let en = conventions("en");
        assert_eq!(MessageValue::from(f64::NAN).render(None, en), "NaN");
        assert_eq!(MessageValue::from(f64::INFINITY).render(None, en), "\u{221e}");
        assert_eq!(MessageValue::from(f64::NEG_INFINITY).render(Some("N2"), en), "-\u{221e}");
    }

    #[test]
    fn unknown_format_falls_back_to_general() {
        let en = conventions("en");
        assert_eq!(MessageValue::from(12).render(Some("Q9"), en), "12");
        assert_eq!(MessageValue::from(12).render(Some("N999"), en), "12");
        assert_eq!(MessageValue::from("text").render(Some("N2"), en), "text");
    }

    #[test]
    fn dates_follow_short_date_patterns() {
        let value = MessageValue::from(date!(2024 - 03 - 07));
        assert_eq!(value.render(None, conventions("en")), "3/7/2024");
        assert_eq!(value.render(None, conventions("de")), "07.03.2024");
        assert_eq!(value.render(None, conventions("ca")), "7/3/2024");
        assert_eq!(value.render(None, conventions("ja")), "2024/03/07");
        assert_eq!(value.render(None, &crate::locale::INVARIANT_CONVENTIONS), "03/07/2024");
        assert_eq!(value.render(Some("o"), conventions("de")), "2024-03-07");
    }

    #[test]
    fn group_digits_handles_short_inputs() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
    }

    #[test]
    fn conversions_cover_common_types() {
        assert_eq!(MessageValue::from(7_usize), MessageValue::Unsigned(7));
        assert_eq!(MessageValue::from(-7_isize), MessageValue::Integer {
            value: -7,
            bits: isize::BITS,
        });
        assert_eq!(MessageValue::from(Some("x")), MessageValue::Text("x".into()));
        assert_eq!(MessageValue::from(true).render(None, conventions("en")), "true");
        assert_eq!(MessageValue::display(3.5_f32), MessageValue::Text("3.5".into()));
    }
}
