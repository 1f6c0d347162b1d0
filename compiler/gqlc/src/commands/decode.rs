//! The `decode` command: decode raw literal bodies given on the command line.

use gql_escape::{decode, DecodeError};

use super::{EXIT_INVALID, EXIT_OK};

/// One command-line argument and what it decoded to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiteralOutcome {
    pub raw: String,
    pub result: Result<String, DecodeError>,
}

/// Decode every argument independently.
pub fn decode_literals(raws: &[String]) -> Vec<LiteralOutcome> {
    raws.iter()
        .map(|raw| LiteralOutcome {
            raw: raw.clone(),
            result: decode(raw),
        })
        .collect()
}

/// Print each decoded value (debug-escaped) or its error.
///
/// Returns [`EXIT_INVALID`] if any argument failed.
pub fn run_decode(raws: &[String]) -> i32 {
    let outcomes = decode_literals(raws);
    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(value) => println!("{:?} => {value:?}", outcome.raw),
            Err(err) => {
                failed += 1;
                eprintln!("{:?}: error: {err}", outcome.raw);
            }
        }
    }
    tracing::debug!(total = outcomes.len(), failed, "decode complete");

    if failed == 0 {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}

#[cfg(test)]
mod tests;
