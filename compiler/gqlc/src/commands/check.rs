//! The `check` command: validate a file of raw literal bodies, one per line.
//!
//! Line terminators (`\n` or `\r\n`) are not part of a literal. Spans in
//! reported errors are byte offsets into the file.

use gql_escape::decode;
use gql_lexer::LexError;

use super::{read_file, EXIT_INVALID, EXIT_IO, EXIT_OK};

/// A line whose literal failed to decode.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineProblem {
    /// 1-based line number.
    pub line: usize,
    pub error: LexError,
}

/// Outcome of checking a whole source text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckReport {
    pub lines_checked: usize,
    pub problems: Vec<LineProblem>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Decode every line of `source` as raw literal content.
pub fn check_source(source: &str) -> CheckReport {
    check_lines(source, 0)
}

/// [`check_source`] for text that starts at byte `base_offset` of a larger
/// input. Offsets are kept as `usize` until a span is built.
fn check_lines(source: &str, base_offset: usize) -> CheckReport {
    let mut report = CheckReport::default();
    let mut offset = base_offset;

    for (index, segment) in source.split_inclusive('\n').enumerate() {
        let content = segment.strip_suffix('\n').map_or(segment, |line| {
            line.strip_suffix('\r').unwrap_or(line)
        });
        if decode(content).is_err() {
            report.problems.push(LineProblem {
                line: index + 1,
                error: LexError::undecodable_literal(offset, content.len()),
            });
        }
        report.lines_checked += 1;
        offset += segment.len();
    }

    report
}

/// Check the file at `path`, printing one diagnostic per bad line.
///
/// Returns the process exit code.
pub fn check_file(path: &str) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {msg}");
            return EXIT_IO;
        }
    };

    let report = check_source(&source);
    for problem in &report.problems {
        eprintln!(
            "{path}:{}: error: {} (bytes {})",
            problem.line,
            problem.error.message(),
            problem.error.span
        );
        for help in &problem.error.suggestions {
            eprintln!("  = help: {}", help.message);
        }
    }
    tracing::debug!(
        path,
        lines = report.lines_checked,
        problems = report.problems.len(),
        "check complete"
    );

    if report.is_clean() {
        println!("{path}: {} literal(s) OK", report.lines_checked);
        EXIT_OK
    } else {
        eprintln!(
            "{path}: {} of {} literal(s) failed to decode",
            report.problems.len(),
            report.lines_checked
        );
        EXIT_INVALID
    }
}
