//! Decode failure.

/// Why a raw literal could not be decoded.
///
/// Unknown escapes, truncated or non-hex `\u` escapes, out-of-range code
/// points and unpaired surrogates all map to the one variant. Callers
/// attach the source location.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid Unicode escape sequence in string literal")]
    InvalidUnicode,
}
