//! Longest-match lexer on top of `Buffer` (spec.md §4.2).
//!
//! The original `scanner.cc` hand-writes a DFA with a separate keyword-spine
//! state for every prefix of every reserved word. Rather than transliterate
//! that state machine, this re-architects it the way `faxc_lex`'s
//! `lexer::identifier` module does: greedily consume the maximal run of
//! identifier characters, then classify the whole lexeme against the
//! keyword table in one lookup. spec.md §9 sanctions this explicitly as
//! "a small set of helper functions that walk the keyword trie directly",
//! and it produces byte-identical token boundaries — a run like `integer`
//! is consumed whole before any keyword comparison happens, so it can never
//! be mistaken for `int` followed by an identifier `eger`.

use std::io::Read;

use trupl_util::{ScannerError, ScannerResult};

use crate::buffer::{Buffer, EOF_MARKER};
use crate::token::{keyword_from_ident, AddOperator, MulOperator, Punctuation, RelOperator, Token};

fn is_alpha(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_ident_continue(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Wraps a `Buffer` and turns its normalized character stream into `Token`s.
pub struct Scanner<R: Read> {
    buffer: Buffer<R>,
    /// Once true, every subsequent call to `next_token` returns `Token::Eof`
    /// without touching the buffer again (spec.md §4.2 item 6).
    exhausted: bool,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            buffer: Buffer::new(reader),
            exhausted: false,
        }
    }

    fn scan_identifier_or_keyword(&mut self, first: char) -> ScannerResult<Token> {
        let mut lexeme = String::new();
        lexeme.push(first);
        loop {
            let c = self.buffer.next_char()?;
            if is_ident_continue(c) {
                lexeme.push(c);
            } else {
                if c != EOF_MARKER {
                    self.buffer.unread_char(c);
                }
                break;
            }
        }
        Ok(keyword_from_ident(&lexeme).unwrap_or(Token::Identifier(lexeme)))
    }

    fn scan_number(&mut self, first: char) -> ScannerResult<Token> {
        let mut lexeme = String::new();
        lexeme.push(first);
        loop {
            let c = self.buffer.next_char()?;
            if is_digit(c) {
                lexeme.push(c);
            } else {
                if c != EOF_MARKER {
                    self.buffer.unread_char(c);
                }
                break;
            }
        }
        Ok(Token::Number(lexeme))
    }

    /// Looks at one more character to disambiguate a two-character
    /// operator from its one-character prefix (`:=`, `<=`, `<>`, `>=`).
    /// Unreads it if it doesn't extend the operator.
    fn peek_second(&mut self, expected: char) -> ScannerResult<bool> {
        let c = self.buffer.next_char()?;
        if c == expected {
            Ok(true)
        } else {
            if c != EOF_MARKER {
                self.buffer.unread_char(c);
            }
            Ok(false)
        }
    }

    fn scan_symbol(&mut self, first: char) -> ScannerResult<Token> {
        Ok(match first {
            ';' => Token::Punctuation(Punctuation::Semicolon),
            ',' => Token::Punctuation(Punctuation::Comma),
            '(' => Token::Punctuation(Punctuation::OpenBracket),
            ')' => Token::Punctuation(Punctuation::CloseBracket),
            '+' => Token::AddOperator(AddOperator::Add),
            '-' => Token::AddOperator(AddOperator::Subtract),
            '*' => Token::MulOperator(MulOperator::Multiply),
            '/' => Token::MulOperator(MulOperator::Divide),
            '=' => Token::RelOperator(RelOperator::Equal),
            ':' => {
                if self.peek_second('=')? {
                    Token::Punctuation(Punctuation::Assignment)
                } else {
                    Token::Punctuation(Punctuation::Colon)
                }
            }
            '<' => {
                if self.peek_second('=')? {
                    Token::RelOperator(RelOperator::LessOrEqual)
                } else if self.peek_second('>')? {
                    Token::RelOperator(RelOperator::NotEqual)
                } else {
                    Token::RelOperator(RelOperator::LessThan)
                }
            }
            '>' => {
                if self.peek_second('=')? {
                    Token::RelOperator(RelOperator::GreaterOrEqual)
                } else {
                    Token::RelOperator(RelOperator::GreaterThan)
                }
            }
            other => return Err(ScannerError::IllegalCharacter(other)),
        })
    }

    /// Returns the next token, or `Token::Eof` at (and past) end of input.
    /// Returns `Err` for a character outside the TruPL alphabet, or for a
    /// reserved EOF-marker byte found in the raw input.
    pub fn next_token(&mut self) -> ScannerResult<Token> {
        if self.exhausted {
            return Ok(Token::Eof);
        }

        loop {
            let c = self.buffer.next_char()?;
            if Buffer::<R>::validate(c).is_err() {
                return Err(ScannerError::IllegalCharacter(c));
            }

            if c == EOF_MARKER {
                self.exhausted = true;
                return Ok(Token::Eof);
            }
            if c == ' ' {
                // A lone delimiter space between tokens; the buffer never
                // emits more than one in a row, so just loop for the next
                // real character.
                continue;
            }
            if is_alpha(c) {
                return self.scan_identifier_or_keyword(c);
            }
            if is_digit(c) {
                return self.scan_number(c);
            }
            return self.scan_symbol(c);
        }
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = ScannerResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(Token::Eof) => {
                self.exhausted = true;
                None
            }
            other => Some(other),
        }
    }
}
