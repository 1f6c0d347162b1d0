use super::*;
use pretty_assertions::assert_eq;

#[test]
fn try_from_range_ok() {
    assert_eq!(Span::try_from_range(50..100), Ok(Span::new(50, 100)));
}

#[test]
fn try_from_range_at_u32_max() {
    let max = u32::MAX as usize;
    assert_eq!(
        Span::try_from_range(max - 4..max),
        Ok(Span::new(u32::MAX - 4, u32::MAX))
    );
}

#[test]
fn try_from_range_end_one_past_max() {
    let max = u32::MAX as usize;
    assert_eq!(
        Span::try_from_range(max - 4..max + 1),
        Err(SpanError::EndTooLarge(max + 1))
    );
}

#[test]
fn try_from_range_start_too_large() {
    let large = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(large..large + 10),
        Err(SpanError::StartTooLarge(large))
    );
}

#[test]
fn span_error_display() {
    let msg = SpanError::EndTooLarge(u32::MAX as usize + 1).to_string();
    assert_eq!(msg, "span end offset 4294967296 does not fit in 32 bits");
}

#[test]
fn debug_and_display_match() {
    let span = Span::new(3, 7);
    assert_eq!(format!("{span:?}"), "3..7");
    assert_eq!(span.to_string(), "3..7");
}
