//! Cooking layer for GraphQL string literals.
//!
//! The raw scanner hands over token boundaries; this crate turns a
//! `"..."` token into its value. Decode failures are accumulated as
//! [`LexError`]s located at the literal, so one bad literal does not stop
//! the rest of the document from being lexed.
//!
//! Escape decoding itself lives in `gql_escape`.

mod cook_escape;
mod cooker;
mod lex_error;

pub use cook_escape::cook_string;
pub use cooker::StringCooker;
pub use lex_error::{LexError, LexErrorKind, LexSuggestion};
