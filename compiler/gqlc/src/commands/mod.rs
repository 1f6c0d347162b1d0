//! Command handlers for the gqlc CLI.
//!
//! Each submodule implements one command. Shared helpers live here.

mod check;
mod decode;

pub use check::{check_file, check_source, CheckReport, LineProblem};
pub use decode::{decode_literals, run_decode, LiteralOutcome};

/// Exit status: everything decoded.
pub const EXIT_OK: i32 = 0;
/// Exit status: at least one literal failed to decode.
pub const EXIT_INVALID: i32 = 1;
/// Exit status: the input could not be read.
pub const EXIT_IO: i32 = 2;

/// Read a file to a string, mapping I/O failures to a user-facing message.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
