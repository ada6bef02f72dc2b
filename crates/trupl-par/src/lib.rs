//! Symbol table and recursive-descent parser for the TruPL front-end.
//!
//! Covers spec.md §4.3 (SymbolTable) and §4.4 (Parser). There is no
//! separate semantic-analysis crate: spec.md §1 states the parser
//! interleaves semantic checks with token consumption, and the original
//! `trupl-compiler` source places `symbol_table.h` under `parser/` rather
//! than a standalone semantic directory, so the two live together here.

mod parser;
mod symtab;

pub use parser::{Fatal, ParseOutcome, Parser};
pub use symtab::{ExpressionType, SymbolTable, NO_POSITION};
