//! Token-level string cooking.
//!
//! [`StringCooker`] takes the byte range of a complete `"..."` token, strips
//! the delimiters and cooks the content. Errors accumulate for the whole
//! document.

use std::borrow::Cow;

use gql_ir::Span;

use crate::cook_escape::cook_string;
use crate::lex_error::LexError;

/// Cooks string-literal tokens out of one source document.
///
/// Each `cook_string_token()` call is independent; only the error list is
/// shared.
pub struct StringCooker<'src> {
    source: &'src str,
    errors: Vec<LexError>,
}

impl<'src> StringCooker<'src> {
    /// Create a new cooker for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            errors: Vec::new(),
        }
    }

    /// Cook the string token at `offset` spanning `len` bytes, quotes included.
    ///
    /// Borrows from the source when the literal has no escapes. A literal
    /// that fails to decode yields an empty value plus one recorded error,
    /// as does a token shorter than two bytes or missing either `"`.
    ///
    /// # Panics
    ///
    /// Panics if `offset..offset + len` is out of bounds or not on char
    /// boundaries of the source. The raw scanner only emits valid ranges.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn cook_string_token(&mut self, offset: u32, len: u32) -> Cow<'src, str> {
        let start = offset as usize;
        let text = &self.source[start..start + len as usize];

        // Strip surrounding quotes
        let Some(content) = text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) else {
            tracing::debug!(offset, len, "string token without delimiters");
            self.errors.push(LexError::unterminated_string(Span::new(
                offset,
                offset.saturating_add(len),
            )));
            return Cow::Borrowed("");
        };
        // base_offset is one past the opening quote
        let content_offset = offset.saturating_add(1);

        match cook_string(content, content_offset, &mut self.errors) {
            Some(unescaped) => Cow::Owned(unescaped),
            None => Cow::Borrowed(content),
        }
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Finish cooking and take the accumulated errors.
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }
}
