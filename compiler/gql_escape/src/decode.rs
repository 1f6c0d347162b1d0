//! The escape-decoding state machine.
//!
//! Two layers:
//! 1. parse: [`scan_escape`] recognises one escape form
//! 2. value: `resolve_code_point` classifies a `\u` payload and, for a
//!    leading surrogate, pulls in the mandatory partner escape
//!
//! Runs of plain text between backslashes are located with `memchr` and
//! copied in bulk.

use std::borrow::Cow;
use std::str::Chars;

use crate::error::DecodeError;
use crate::escape::{scan_escape, scan_unicode, Escape};
use crate::unicode::{combine_surrogates, CodeUnitClass};

/// Decode the raw body of a string literal.
///
/// Characters other than `\` are copied unchanged, including characters
/// outside the Basic Multilingual Plane. Any malformed escape, out-of-range
/// code point or unpaired surrogate fails the whole literal.
pub fn decode(raw: &str) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = memchr::memchr(b'\\', rest.as_bytes()) {
        out.push_str(&rest[..pos]);

        // `\` is one byte, so `pos + 1` is a char boundary.
        let mut chars = rest[pos + 1..].chars();
        let c = match scan_escape(&mut chars)? {
            Escape::Simple(c) => c,
            Escape::FixedUnicode(v) | Escape::BracedUnicode(v) => {
                resolve_code_point(v, &mut chars)?
            }
        };
        out.push(c);
        rest = chars.as_str();
    }

    out.push_str(rest);
    Ok(out)
}

/// Like [`decode`], but borrows `raw` when it contains no escapes.
pub fn decode_cow(raw: &str) -> Result<Cow<'_, str>, DecodeError> {
    if memchr::memchr(b'\\', raw.as_bytes()).is_none() {
        return Ok(Cow::Borrowed(raw));
    }
    decode(raw).map(Cow::Owned)
}

/// Turn the payload of a `\u` escape into a scalar value.
///
/// A leading surrogate must be immediately followed by another `\u` escape
/// (either form) carrying a trailing surrogate; `chars` is advanced past it.
fn resolve_code_point(value: u32, chars: &mut Chars<'_>) -> Result<char, DecodeError> {
    match CodeUnitClass::of(value) {
        CodeUnitClass::Scalar => char::from_u32(value).ok_or(DecodeError::InvalidUnicode),
        CodeUnitClass::TrailingSurrogate => Err(DecodeError::InvalidUnicode),
        CodeUnitClass::LeadingSurrogate => {
            let Some(partner) = chars.as_str().strip_prefix("\\u") else {
                return Err(DecodeError::InvalidUnicode);
            };
            *chars = partner.chars();

            let trail = scan_unicode(chars)?
                .code_point()
                .filter(|&t| CodeUnitClass::of(t) == CodeUnitClass::TrailingSurrogate)
                .ok_or(DecodeError::InvalidUnicode)?;

            char::from_u32(combine_surrogates(value, trail)).ok_or(DecodeError::InvalidUnicode)
        }
    }
}
