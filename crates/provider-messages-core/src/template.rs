// crates/provider-messages-core/src/template.rs
// ============================================================================
// Module: Message Templates
// Description: Tokenizer and validator for `{placeholder}` message templates.
// Purpose: Share one brace grammar between catalog validation and formatting.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Templates are plain text with `{token}` placeholders. `{{` and `}}` escape
//! literal braces. The tokenizer is permissive: a stray brace is treated as
//! text so formatting never fails on odd wording. [`placeholder_names`] reads
//! the same grammar and rejects only placeholders that can never bind: an
//! empty `{}` or a name opened inside another name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Malformed template syntax detected by [`placeholder_names`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{` opened a name that ran into another placeholder (`{a{b}`).
    #[error("nested placeholder at byte {0}")]
    Nested(usize),
    /// A placeholder had no name.
    #[error("empty placeholder at byte {0}")]
    Empty(usize),
}

// ============================================================================
// SECTION: Tokenizer
// ============================================================================

/// A lexical piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text copied through unchanged.
    Literal(&'a str),
    /// An escaped brace (`{{` or `}}`), carrying the brace it stands for.
    Escaped(char),
    /// The text between a `{` and its closing `}`.
    Placeholder(&'a str),
}

/// Iterator over the [`Segment`]s of a template.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    /// Template being scanned.
    template: &'a str,
    /// Byte offset of the next unread character.
    position: usize,
}

/// Splits `template` into segments.
#[must_use]
pub const fn segments(template: &str) -> Segments<'_> {
    Segments {
        template,
        position: 0,
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.template.get(self.position ..)?;
        if rest.is_empty() {
            return None;
        }
        let bytes = rest.as_bytes();
        match bytes[0] {
            b'{' if bytes.get(1) == Some(&b'{') => {
                self.position += 2;
                Some(Segment::Escaped('{'))
            }
            b'}' if bytes.get(1) == Some(&b'}') => {
                self.position += 2;
                Some(Segment::Escaped('}'))
            }
            b'{' => {
                let close = rest[1 ..].find(['{', '}']).map(|offset| offset + 1);
                match close {
                    Some(end) if bytes[end] == b'}' => {
                        self.position += end + 1;
                        Some(Segment::Placeholder(&rest[1 .. end]))
                    }
                    _ => {
                        self.position += 1;
                        Some(Segment::Literal(&rest[.. 1]))
                    }
                }
            }
            b'}' => {
                self.position += 1;
                Some(Segment::Literal(&rest[.. 1]))
            }
            _ => {
                let end = rest.find(['{', '}']).unwrap_or(rest.len());
                self.position += end;
                Some(Segment::Literal(&rest[.. end]))
            }
        }
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

impl Segment<'_> {
    /// Number of template bytes this segment covers.
    const fn source_len(&self) -> usize {
        match self {
            Self::Literal(text) => text.len(),
            Self::Escaped(_) => 2,
            Self::Placeholder(body) => body.len() + 2,
        }
    }
}

/// Returns the set of placeholder names in a template, rejecting placeholders
/// that can never bind.
///
/// Unpaired braces are text, exactly as [`segments`] reads them.
///
/// # Errors
///
/// Returns [`TemplateError`] for an empty placeholder or a name opened inside
/// another name.
pub fn placeholder_names(template: &str) -> Result<BTreeSet<&str>, TemplateError> {
    let mut names = BTreeSet::new();
    let mut offset = 0usize;
    // Byte offset of a stray `{` still followed only by name characters.
    let mut open_name: Option<usize> = None;
    let mut after_brace = false;
    for segment in segments(template) {
        match segment {
            Segment::Placeholder(body) => {
                if let Some(start) = open_name {
                    return Err(TemplateError::Nested(start));
                }
                if body.trim().is_empty() {
                    return Err(TemplateError::Empty(offset));
                }
                names.insert(body);
            }
            Segment::Literal("{") => {
                open_name = Some(offset);
                after_brace = true;
            }
            Segment::Literal(text) => {
                let name_like = after_brace
                    && !text.is_empty()
                    && text.chars().all(|ch| ch.is_alphanumeric() || ch == '_');
                if !name_like {
                    open_name = None;
                }
                after_brace = false;
            }
            Segment::Escaped(_) => {
                open_name = None;
                after_brace = false;
            }
        }
        offset += segment.source_len();
    }
    Ok(names)
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

    fn collect(template: &str) -> Vec<Segment<'_>> {
        segments(template).collect()
    }

    #[test]
    fn segments_split_text_and_placeholders() {
        assert_eq!(
            collect("Hello {name}!"),
            vec![Segment::Literal("Hello "), Segment::Placeholder("name"), Segment::Literal("!")]
        );
    }

    #[test]
    fn segments_decode_escaped_braces() {
        assert_eq!(
            collect("{{x}}"),
            vec![Segment::Escaped('{'), Segment::Literal("x"), Segment::Escaped('}')]
        );
    }

    #[test]
    fn segments_treat_stray_braces_as_text() {
        assert_eq!(
            collect("a { b"),
            vec![Segment::Literal("a "), Segment::Literal("{"), Segment::Literal(" b")]
        );
        assert_eq!(collect("}"), vec![Segment::Literal("}")]);
        assert_eq!(
            collect("{a{b}"),
            vec![Segment::Literal("{"), Segment::Literal("a"), Segment::Placeholder("b")]
        );
    }

    #[test]
    fn segments_handle_multibyte_text() {
        assert_eq!(
            collect("Següent {nom}"),
            vec![Segment::Literal("Següent "), Segment::Placeholder("nom")]
        );
    }

    #[test]
    fn placeholder_names_collects_unique_names() {
        let names = placeholder_names("{b} {a} {b} {{literal}}").unwrap();
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn placeholder_names_rejects_unbindable_placeholders() {
        assert_eq!(placeholder_names("{a{b}}"), Err(TemplateError::Nested(0)));
        assert_eq!(placeholder_names("x {a{b}"), Err(TemplateError::Nested(2)));
        assert_eq!(placeholder_names("empty {}"), Err(TemplateError::Empty(6)));
        assert_eq!(placeholder_names("blank { } here"), Err(TemplateError::Empty(6)));
    }

    #[test]
    fn placeholder_names_treats_unpaired_braces_as_text() {
        assert!(placeholder_names("A JSON object must start with '{'.").unwrap().is_empty());
        assert!(placeholder_names("close } only").unwrap().is_empty());
        let names = placeholder_names("Starts with '{'. Use {name} }").unwrap();
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["name"]);
    }
}
