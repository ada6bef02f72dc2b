//! Buffer and Scanner for the TruPL front-end.
//!
//! This crate covers spec.md §4.1 (Buffer) and §4.2 (Scanner): a character
//! source that normalizes whitespace/comments to a single delimiter space,
//! and a longest-match DFA-style lexer on top of it. Grounded on
//! `faxc_lex`'s `cursor.rs`/`lexer/core.rs`/`lexer/identifier.rs`/
//! `lexer/operator.rs`, and on the original `trupl-compiler` C++ sources'
//! `scanner/input_buffer.cc` and `scanner/scanner.cc` for exact semantics.

mod buffer;
mod scanner;
mod token;

pub use buffer::{Buffer, EOF_MARKER};
pub use scanner::Scanner;
pub use token::{AddOperator, Keyword, MulOperator, Punctuation, RelOperator, Token};
