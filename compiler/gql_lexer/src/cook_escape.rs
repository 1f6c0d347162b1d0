//! Escape processing for string-literal content.
//!
//! Thin adapter over `gql_escape`: turns a decode failure into a located
//! [`LexError`] and keeps the no-backslash fast path.

use std::borrow::Cow;

use gql_escape::decode_cow;

use crate::lex_error::LexError;

/// Unescape a string literal's content (between the `"`s).
///
/// `base_offset` is the source offset of the first content byte.
///
/// Fast path: if there are no backslashes, returns `None` to signal the
/// caller can use the source slice directly.
///
/// On failure one error spanning the whole content is pushed and
/// `Some(String::new())` is returned; the decoder does not report where
/// inside the literal it gave up. A literal reaching past `u32::MAX` is
/// reported as `OffsetOverflow` rather than wrapping.
#[tracing::instrument(level = "trace", skip(content, errors), fields(len = content.len()))]
pub fn cook_string(content: &str, base_offset: u32, errors: &mut Vec<LexError>) -> Option<String> {
    match decode_cow(content) {
        Ok(Cow::Borrowed(_)) => None,
        Ok(Cow::Owned(decoded)) => Some(decoded),
        Err(err) => {
            let error = LexError::undecodable_literal(base_offset as usize, content.len());
            tracing::debug!(span = %error.span, %err, "rejected string literal");
            errors.push(error);
            Some(String::new())
        }
    }
}

#[cfg(test)]
mod tests;
