use super::*;
use crate::lex_error::LexErrorKind;
use gql_ir::Span;
use pretty_assertions::assert_eq;

#[test]
fn no_escapes_fast_path() {
    let mut errors = Vec::new();
    assert!(cook_string("hello world", 0, &mut errors).is_none());
    assert!(errors.is_empty());
}

#[test]
fn simple_escapes() {
    let mut errors = Vec::new();
    let result = cook_string(r"hello\nworld\t\/", 0, &mut errors);
    assert_eq!(result.as_deref(), Some("hello\nworld\t/"));
    assert!(errors.is_empty());
}

#[test]
fn braced_and_paired_escapes() {
    let mut errors = Vec::new();
    let result = cook_string(r"\u{1F37A} and \ud83c\udf7a", 0, &mut errors);
    assert_eq!(result.as_deref(), Some("\u{1F37A} and \u{1F37A}"));
    assert!(errors.is_empty());
}

#[test]
fn invalid_escape_spans_whole_content() {
    let mut errors = Vec::new();
    // Content starts one past the opening quote at offset 4.
    let result = cook_string(r"ab\uDC00cd", 5, &mut errors);
    assert_eq!(result.as_deref(), Some(""));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::InvalidUnicode);
    assert_eq!(errors[0].span, Span::new(5, 15));
}

#[test]
fn unpaired_leading_surrogate() {
    let mut errors = Vec::new();
    let result = cook_string(r"\uD83D hello", 0, &mut errors);
    assert_eq!(result.as_deref(), Some(""));
    assert_eq!(errors.len(), 1);
}

#[test]
fn errors_accumulate_across_literals() {
    let mut errors = Vec::new();
    let _ = cook_string(r"\q", 0, &mut errors);
    let _ = cook_string(r"fine\n", 10, &mut errors);
    let _ = cook_string(r"\u{fffffff}", 20, &mut errors);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].span, Span::new(0, 2));
    assert_eq!(errors[1].span, Span::new(20, 31));
}

#[test]
fn non_bmp_text_without_escapes() {
    let mut errors = Vec::new();
    assert!(cook_string("\u{1F37A}", 0, &mut errors).is_none());
    assert!(errors.is_empty());
}

#[test]
fn bad_literal_ending_exactly_at_u32_max() {
    let mut errors = Vec::new();
    let result = cook_string(r"\uDC00", u32::MAX - 6, &mut errors);
    assert_eq!(result.as_deref(), Some(""));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::InvalidUnicode);
    assert_eq!(errors[0].span, Span::new(u32::MAX - 6, u32::MAX));
}

#[test]
fn bad_literal_past_u32_max_reports_overflow() {
    let mut errors = Vec::new();
    let result = cook_string(r"\uDC00", u32::MAX - 2, &mut errors);
    assert_eq!(result.as_deref(), Some(""));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::OffsetOverflow);
    assert_eq!(errors[0].span, Span::new(u32::MAX - 2, u32::MAX));
}

#[test]
fn good_literal_past_u32_max_needs_no_span() {
    let mut errors = Vec::new();
    let result = cook_string(r"a\nb", u32::MAX - 1, &mut errors);
    assert_eq!(result.as_deref(), Some("a\nb"));
    assert!(errors.is_empty());
}
