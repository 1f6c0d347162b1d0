//! Code point classification and surrogate arithmetic.

use std::ops::RangeInclusive;

/// Largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

/// UTF-16 leading (high) surrogate band.
pub const LEADING_SURROGATES: RangeInclusive<u32> = 0xD800..=0xDBFF;

/// UTF-16 trailing (low) surrogate band.
pub const TRAILING_SURROGATES: RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Classification of a value decoded from a `\u` escape.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CodeUnitClass {
    /// Outside the surrogate band. Values above [`MAX_SCALAR`] also land
    /// here; the braced scanner rejects those before classification.
    Scalar,
    /// `0xD800..=0xDBFF`, must be followed by a trailing surrogate.
    LeadingSurrogate,
    /// `0xDC00..=0xDFFF`, only valid right after a leading surrogate.
    TrailingSurrogate,
}

impl CodeUnitClass {
    #[inline]
    pub const fn of(value: u32) -> Self {
        match value {
            0xD800..=0xDBFF => CodeUnitClass::LeadingSurrogate,
            0xDC00..=0xDFFF => CodeUnitClass::TrailingSurrogate,
            _ => CodeUnitClass::Scalar,
        }
    }
}

/// Combine a surrogate pair into the supplementary-plane code point it encodes.
///
/// `lead` must be in [`LEADING_SURROGATES`] and `trail` in
/// [`TRAILING_SURROGATES`]; the result is then in `0x10000..=0x10FFFF`.
#[inline]
pub const fn combine_surrogates(lead: u32, trail: u32) -> u32 {
    debug_assert!(lead >= 0xD800 && lead <= 0xDBFF);
    debug_assert!(trail >= 0xDC00 && trail <= 0xDFFF);
    0x1_0000 + (lead - 0xD800) * 0x400 + (trail - 0xDC00)
}
