//! Escape decoding for GraphQL string literals.
//!
//! Turns the raw body of a `"..."` literal (delimiters already stripped,
//! backslash escapes still present) into the string value it denotes.
//!
//! # Escape Forms
//!
//! - Simple: `\"` `\\` `\/` `\b` `\f` `\n` `\r` `\t`
//! - Fixed: `\uXXXX`, exactly four hex digits, one UTF-16 code unit
//! - Braced: `\u{X...}`, a code point up to `0x10FFFF`
//!
//! Either unicode form may carry one half of a surrogate pair, and the two
//! halves of a pair may use different forms. Pairing is decided on the
//! decoded value, not on the syntax.
//!
//! Decoding is all-or-nothing: any malformed escape yields
//! [`DecodeError::InvalidUnicode`] and no partial output.

mod decode;
mod error;
mod escape;
mod unicode;

pub use decode::{decode, decode_cow};
pub use error::DecodeError;
pub use escape::{resolve_simple_escape, scan_escape, Escape};
pub use unicode::{
    combine_surrogates, CodeUnitClass, LEADING_SURROGATES, MAX_SCALAR, TRAILING_SURROGATES,
};
