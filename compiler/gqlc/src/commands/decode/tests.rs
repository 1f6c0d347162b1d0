use super::*;
use pretty_assertions::assert_eq;

fn args(raws: &[&str]) -> Vec<String> {
    raws.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn outcomes_keep_argument_order() {
    let outcomes = decode_literals(&args(&[r"a\tb", r"\uDC00", "plain"]));
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].result, Ok("a\tb".to_owned()));
    assert_eq!(outcomes[1].result, Err(DecodeError::InvalidUnicode));
    assert_eq!(outcomes[2].result, Ok("plain".to_owned()));
    assert_eq!(outcomes[1].raw, r"\uDC00");
}

#[test]
fn surrogate_pair_argument() {
    let outcomes = decode_literals(&args(&[r"\ud83c\udf7a"]));
    assert_eq!(outcomes[0].result, Ok("\u{1F37A}".to_owned()));
}

#[test]
fn run_decode_exit_codes() {
    assert_eq!(run_decode(&args(&[r"\u{1F37A} hello"])), EXIT_OK);
    assert_eq!(run_decode(&args(&["fine", r"\u{fffffff}"])), EXIT_INVALID);
    assert_eq!(run_decode(&[]), EXIT_OK);
}
