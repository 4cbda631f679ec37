// crates/provider-messages-core/src/formatter.rs
// ============================================================================
// Module: Message Formatter
// Description: Key lookup plus named-to-positional placeholder substitution.
// Purpose: Produce localized diagnostic messages from catalog templates.
// Dependencies: thiserror, tracing, crate::{catalog, locale, template, value}
// ============================================================================

//! ## Overview
//! [`MessageFormatter`] resolves a key against an injected [`MessageCatalog`],
//! rewrites each declared `{name}` placeholder to a positional `{index}`
//! marker in the caller's order, then renders the arguments into those
//! markers with the locale's conventions.
//!
//! ## Invariants
//! - A key missing from the catalog is a packaging defect: [`MessageFormatter::format`]
//!   panics rather than returning a string.
//! - Placeholder mismatches are tolerated: undeclared template placeholders stay
//!   literal, declared names absent from the template are ignored.
//! - Name matching is exact per `{token}`; one name never matches inside another.
//! - Zero-argument messages return the resolved template verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use tracing::error;

use crate::catalog::MessageCatalog;
use crate::locale::Conventions;
use crate::locale::Locale;
use crate::template::Segment;
use crate::template::segments;
use crate::value::MessageValue;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Largest alignment width honored in a positional marker.
const MAX_ALIGNMENT: usize = 1024;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A named placeholder argument.
///
/// # Invariants
/// - `name` is the placeholder name without braces (for example, `sequenceName`).
#[derive(Debug, Clone, PartialEq)]
pub struct MessageArg<'a> {
    /// Placeholder name used in the template.
    pub name: &'a str,
    /// Value substituted for the placeholder.
    pub value: MessageValue,
}

impl<'a> MessageArg<'a> {
    /// Constructs an argument from a name and any convertible value.
    pub fn new(name: &'a str, value: impl Into<MessageValue>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Formatter behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Emit `debug` events for placeholder mismatches.
    pub report_unmatched: bool,
}

/// Errors surfaced by [`MessageFormatter::try_format`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The key is not present in the catalog for the locale or its fallbacks.
    #[error("message key '{key}' is missing from the catalog for locale '{locale}'")]
    MissingTemplate {
        /// Requested key.
        key: String,
        /// Locale used for the lookup.
        locale: Locale,
    },
}

/// Result of rewriting named placeholders into positional markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenTemplate<'t> {
    /// Template text with declared names replaced by `{index}` markers.
    pub text: String,
    /// Indexes of declared names that did not occur in the template.
    pub unused: Vec<usize>,
    /// Named template placeholders with no declared argument, in order of appearance.
    pub unresolved: Vec<&'t str>,
}

// ============================================================================
// SECTION: Formatter
// ============================================================================

/// Localized message formatter over an injected catalog.
///
/// Cloning is cheap; clones share the catalog.
#[derive(Clone)]
pub struct MessageFormatter {
    /// Template source.
    catalog: Arc<dyn MessageCatalog>,
    /// Culture used for lookup and value rendering.
    locale: Locale,
    /// Behavior switches.
    options: FormatterOptions,
}

impl fmt::Debug for MessageFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageFormatter")
            .field("locale", &self.locale)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl MessageFormatter {
    /// Creates a formatter for `locale` over `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<dyn MessageCatalog>, locale: Locale) -> Self {
        Self {
            catalog,
            locale,
            options: FormatterOptions::default(),
        }
    }

    /// Replaces the formatter options.
    #[must_use]
    pub const fn with_options(mut self, options: FormatterOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns a formatter for another locale sharing this catalog.
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            locale,
            options: self.options,
        }
    }

    /// Returns the active locale.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the active options.
    #[must_use]
    pub const fn options(&self) -> FormatterOptions {
        self.options
    }

    /// Returns the raw template resolved for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingTemplate`] when no template resolves.
    pub fn template(&self, key: &str) -> Result<&str, FormatError> {
        self.catalog.template(key, &self.locale).ok_or_else(|| FormatError::MissingTemplate {
            key: key.to_string(),
            locale: self.locale.clone(),
        })
    }

    /// Formats `key` with `args`, panicking when the key is not catalogued.
    ///
    /// # Panics
    ///
    /// Panics when `key` does not resolve in the catalog. That condition means
    /// the catalog is out of sync with the calling code.
    #[must_use]
    #[allow(clippy::panic, reason = "A missing catalog key is a packaging defect and must fail fast.")]
    pub fn format(&self, key: &str, args: &[MessageArg<'_>]) -> String {
        match self.try_format(key, args) {
            Ok(message) => message,
            Err(failure) => {
                error!(key, locale = %self.locale, "message key missing from catalog");
                panic!("{failure}");
            }
        }
    }

    /// Formats `key` with `args`, returning an error when the key is not catalogued.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingTemplate`] when no template resolves.
    pub fn try_format(&self, key: &str, args: &[MessageArg<'_>]) -> Result<String, FormatError> {
        let template = self.template(key)?;
        let names: Vec<&str> = args.iter().map(|arg| arg.name).collect();
        if args.is_empty() {
            if self.options.report_unmatched {
                self.report(key, &rewrite_named_placeholders(template, &names), &names);
            }
            return Ok(template.to_string());
        }

        let rewritten = rewrite_named_placeholders(template, &names);
        if self.options.report_unmatched {
            self.report(key, &rewritten, &names);
        }
        let values: Vec<&MessageValue> = args.iter().map(|arg| &arg.value).collect();
        Ok(substitute_positional(&rewritten.text, &values, self.locale.conventions()))
    }

    /// Emits `debug` events for placeholder mismatches.
    fn report(&self, key: &str, rewritten: &RewrittenTemplate<'_>, names: &[&str]) {
        for index in &rewritten.unused {
            if let Some(name) = names.get(*index) {
                debug!(
                    key,
                    locale = %self.locale,
                    placeholder = *name,
                    "declared placeholder not present in template"
                );
            }
        }
        for name in &rewritten.unresolved {
            debug!(
                key,
                locale = %self.locale,
                placeholder = *name,
                "template placeholder left unsubstituted"
            );
        }
    }
}

// ============================================================================
// SECTION: Substitution Steps
// ============================================================================

/// Rewrites each `{names[i]}` token in `template` to `{i}`.
///
/// Matching is per whole `{token}`, in one pass, so earlier markers are never
/// re-matched by later names. When a name is declared twice the first index wins.
#[must_use]
pub fn rewrite_named_placeholders<'t>(template: &'t str, names: &[&str]) -> RewrittenTemplate<'t> {
    let mut text = String::with_capacity(template.len());
    let mut used = vec![false; names.len()];
    let mut unresolved = Vec::new();
    for segment in segments(template) {
        match segment {
            Segment::Literal(literal) => text.push_str(literal),
            Segment::Escaped(brace) => {
                text.push(brace);
                text.push(brace);
            }
            Segment::Placeholder(body) => {
                text.push('{');
                if let Some(index) = names.iter().position(|name| *name == body) {
                    used[index] = true;
                    text.push_str(&index.to_string());
                } else {
                    if PositionalSpec::parse(body).is_none() {
                        unresolved.push(body);
                    }
                    text.push_str(body);
                }
                text.push('}');
            }
        }
    }
    let unused = used
        .iter()
        .enumerate()
        .filter(|(_, used)| !**used)
        .map(|(index, _)| index)
        .collect();
    RewrittenTemplate {
        text,
        unused,
        unresolved,
    }
}

/// Replaces `{index[,alignment][:format]}` markers with rendered `values`.
///
/// Markers that do not parse or whose index is out of range are left as-is;
/// `{{` and `}}` render as single braces.
#[must_use]
pub fn substitute_positional(
    template: &str,
    values: &[&MessageValue],
    conventions: &Conventions,
) -> String {
    let mut output = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Literal(literal) => output.push_str(literal),
            Segment::Escaped(brace) => output.push(brace),
            Segment::Placeholder(body) => {
                let resolved = PositionalSpec::parse(body)
                    .and_then(|spec| values.get(spec.index).map(|value| (spec, *value)));
                match resolved {
                    Some((spec, value)) => {
                        let rendered = value.render(spec.format, conventions);
                        push_aligned(&mut output, &rendered, spec.width, spec.left_align);
                    }
                    None => {
                        output.push('{');
                        output.push_str(body);
                        output.push('}');
                    }
                }
            }
        }
    }
    output
}

/// Parsed `{index[,alignment][:format]}` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PositionalSpec<'a> {
    /// Argument index.
    index: usize,
    /// Minimum rendered width.
    width: usize,
    /// Pad on the right instead of the left.
    left_align: bool,
    /// Format string passed to the value renderer.
    format: Option<&'a str>,
}

impl<'a> PositionalSpec<'a> {
    /// Parses a marker body; `None` when it is not a positional marker.
    fn parse(body: &'a str) -> Option<Self> {
        let (head, format) = match body.split_once(':') {
            Some((head, format)) => (head, Some(format)),
            None => (body, None),
        };
        let (index_text, alignment) = match head.split_once(',') {
            Some((index_text, alignment)) => (index_text, Some(alignment.trim())),
            None => (head, None),
        };
        let index_text = index_text.trim();
        if index_text.is_empty() || !index_text.chars().all(|ch| ch.is_ascii_digit()) {
            return None;
        }
        let index = index_text.parse().ok()?;
        let (width, left_align) = match alignment {
            Some(alignment) => {
                let value: i64 = alignment.parse().ok()?;
                let width = usize::try_from(value.unsigned_abs()).ok()?;
                if width > MAX_ALIGNMENT {
                    return None;
                }
                (width, value < 0)
            }
            None => (0, false),
        };
        Some(Self {
            index,
            width,
            left_align,
            format,
        })
    }
}

/// Appends `text`, space-padded to `width` characters.
fn push_aligned(output: &mut String, text: &str, width: usize, left_align: bool) {
    let padding = width.saturating_sub(text.chars().count());
    if !left_align {
        output.extend(std::iter::repeat_n(' ', padding));
    }
    output.push_str(text);
    if left_align {
        output.extend(std::iter::repeat_n(' ', padding));
    }
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a catalogued message from a key and named arguments.
///
/// Arguments are declared as `name = value` and bound to positional slots in
/// declaration order. Values accept anything convertible into
/// [`MessageValue`](crate::MessageValue).
///
/// # Panics
///
/// Panics when the key is not catalogued (see [`MessageFormatter::format`]).
#[macro_export]
macro_rules! format_message {
    ($formatter:expr, $key:expr $(, $name:ident = $value:expr )* $(,)?) => {{
        let args: &[$crate::MessageArg<'_>] = &[
            $(
                $crate::MessageArg::new(stringify!($name), $value),
            )*
        ];
        $formatter.format($key, args)
    }};
}
