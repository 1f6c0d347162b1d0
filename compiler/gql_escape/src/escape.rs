//! Parse-level escape recognition.
//!
//! Everything here works on a `Chars` cursor positioned just after a `\`
//! and consumes exactly the characters of one escape. No surrogate logic
//! lives here; see `decode` for pairing.

use std::str::Chars;

use crate::error::DecodeError;
use crate::unicode::MAX_SCALAR;

/// One escape sequence as written in source.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Escape {
    /// `\"` `\\` `\/` `\b` `\f` `\n` `\r` `\t`, already resolved.
    Simple(char),
    /// `\uXXXX`: a 16-bit code unit.
    FixedUnicode(u32),
    /// `\u{X...}`: a code point, at most [`MAX_SCALAR`].
    BracedUnicode(u32),
}

impl Escape {
    /// Numeric payload of a `\u` escape; `None` for simple escapes.
    #[inline]
    pub const fn code_point(self) -> Option<u32> {
        match self {
            Escape::Simple(_) => None,
            Escape::FixedUnicode(v) | Escape::BracedUnicode(v) => Some(v),
        }
    }
}

/// Resolve the character after `\` for the fixed single-character escapes.
#[inline]
pub fn resolve_simple_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

/// Scan one escape. `chars` must be positioned just after the backslash.
///
/// On success the cursor sits on the first character after the escape.
/// On failure the cursor position is unspecified.
pub fn scan_escape(chars: &mut Chars<'_>) -> Result<Escape, DecodeError> {
    match chars.next() {
        Some('u') => scan_unicode(chars),
        Some(c) => resolve_simple_escape(c)
            .map(Escape::Simple)
            .ok_or(DecodeError::InvalidUnicode),
        None => Err(DecodeError::InvalidUnicode),
    }
}

/// Scan the body of a `\u` escape, cursor just after the `u`.
pub(crate) fn scan_unicode(chars: &mut Chars<'_>) -> Result<Escape, DecodeError> {
    if let Some(rest) = chars.as_str().strip_prefix('{') {
        *chars = rest.chars();
        scan_braced(chars).map(Escape::BracedUnicode)
    } else {
        scan_fixed(chars).map(Escape::FixedUnicode)
    }
}

/// `XXXX`: exactly four hex digits.
fn scan_fixed(chars: &mut Chars<'_>) -> Result<u32, DecodeError> {
    let mut value = 0;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(hex_digit)
            .ok_or(DecodeError::InvalidUnicode)?;
        value = (value << 4) | digit;
    }
    Ok(value)
}

/// `X...}`: one or more hex digits and the closing brace.
///
/// The value is range-checked after every digit, so a long run of digits
/// cannot overflow `u32`. Leading zeros are accepted.
fn scan_braced(chars: &mut Chars<'_>) -> Result<u32, DecodeError> {
    let mut value: u32 = 0;
    let mut digits = 0usize;
    loop {
        match chars.next() {
            Some('}') if digits > 0 => return Ok(value),
            Some(c) => {
                let digit = hex_digit(c).ok_or(DecodeError::InvalidUnicode)?;
                value = (value << 4) | digit;
                if value > MAX_SCALAR {
                    return Err(DecodeError::InvalidUnicode);
                }
                digits += 1;
            }
            None => return Err(DecodeError::InvalidUnicode),
        }
    }
}

/// ASCII hex digit value. `char::to_digit` rejects non-ASCII digits.
#[inline]
fn hex_digit(c: char) -> Option<u32> {
    c.to_digit(16)
}
