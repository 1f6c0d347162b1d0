//! Lexer error types for the cooking layer.
//!
//! Errors follow the WHERE+WHAT+HOW shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - HOW: `suggestions` providing actionable fixes, most relevant first

use std::fmt;

use gql_ir::Span;

/// A lexer error with full context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// HOW to fix.
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A string literal holds a malformed escape, an out-of-range code
    /// point or an unpaired surrogate. The decoder does not distinguish
    /// these, so neither does the lexer.
    InvalidUnicode,
    /// A string token handed to the cooker is missing a delimiting `"`.
    UnterminatedString,
    /// A bad literal ends past the last offset a [`Span`] can hold.
    /// The span runs from the literal's start to `u32::MAX`.
    OffsetOverflow,
}

/// Suggestion for fixing a lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    pub message: String,
}

impl LexSuggestion {
    /// Create a text-only suggestion.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl LexError {
    /// Create an invalid-unicode error covering a literal's content.
    #[cold]
    pub fn invalid_unicode(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidUnicode,
            suggestions: vec![
                LexSuggestion::text(
                    r#"valid escapes are: \", \\, \/, \b, \f, \n, \r, \t, \uXXXX, \u{X...}"#,
                ),
                LexSuggestion::text(
                    r"characters above U+FFFF need a surrogate pair (\uD83D\uDE00) or braces (\u{1F600})",
                ),
            ],
        }
    }

    /// Create an unterminated-string error covering the whole token.
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
            suggestions: vec![LexSuggestion::text("add closing `\"`")],
        }
    }

    /// Create an error for a bad literal starting at `start` whose end does
    /// not fit in a `u32` offset.
    #[cold]
    pub fn offset_overflow(start: u32) -> Self {
        Self {
            span: Span::new(start, u32::MAX),
            kind: LexErrorKind::OffsetOverflow,
            suggestions: vec![LexSuggestion::text(
                "split the document; sources are limited to 4 GiB",
            )],
        }
    }

    /// Error for an undecodable literal of `len` bytes at byte offset `start`.
    ///
    /// Falls back to [`LexError::offset_overflow`] when the range cannot be
    /// expressed as a [`Span`]. Never panics.
    pub fn undecodable_literal(start: usize, len: usize) -> Self {
        match Span::try_from_range(start..start.saturating_add(len)) {
            Ok(span) => Self::invalid_unicode(span),
            Err(_) => Self::offset_overflow(u32::try_from(start).unwrap_or(u32::MAX)),
        }
    }

    /// The primary message, without location.
    pub fn message(&self) -> &'static str {
        match self.kind {
            LexErrorKind::InvalidUnicode => "invalid Unicode escape sequence in string literal",
            LexErrorKind::UnterminatedString => "unterminated string literal",
            LexErrorKind::OffsetOverflow => {
                "invalid Unicode escape sequence in string literal past the 4 GiB offset limit"
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span, self.message())
    }
}
