//! Character buffer: normalizes the raw byte stream per spec.md §4.1.
//!
//! Grounded on the original `scanner/input_buffer.cc`'s refill-window
//! design (`Next`/`UnreadChar`/`RemoveSpaceAndComment`/`SkipLine`), ported
//! from a `std::list<char>` to a `VecDeque<u8>`, and on `faxc_lex::cursor`
//! for the general shape of a pull-based character source.

use std::collections::VecDeque;
use std::io::Read;

use trupl_util::{BufferError, BufferResult};

/// Sentinel returned once the input is exhausted. Chosen to match
/// spec.md §3's testable debug convention; it never appears in valid input,
/// so a raw byte equal to it is a fatal buffer error (spec.md §3/§4.1),
/// not end-of-stream.
pub const EOF_MARKER: char = '$';

const COMMENT_MARKER: char = '#';
const SPACE: char = ' ';
const TAB: char = '\t';
const NEWLINE: char = '\n';

/// Capacity of the internal refill window.
const MAX_BUFFER_SIZE: usize = 1024;

fn is_whitespace(c: char) -> bool {
    c == SPACE || c == TAB || c == NEWLINE
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Punctuation bytes that are part of the TruPL alphabet besides letters,
/// digits, and whitespace.
fn is_alphabet_punctuation(c: char) -> bool {
    matches!(
        c,
        ';' | ':' | '(' | ')' | ',' | '=' | '>' | '<' | '+' | '-' | '*' | '/' | '#'
    )
}

/// A byte source that exposes a normalized character stream: whitespace and
/// `#`-to-end-of-line comments collapse to a single delimiter space, with no
/// leading or trailing delimiter.
pub struct Buffer<R: Read> {
    reader: R,
    reader_exhausted: bool,
    window: VecDeque<u8>,
    /// Set when the leading-whitespace priming pass done by `new` hits a
    /// reserved-marker byte, so the error surfaces from the first
    /// `next_char` call instead of being dropped during construction.
    pending_error: Option<BufferError>,
}

impl<R: Read> Buffer<R> {
    pub fn new(reader: R) -> Self {
        let mut buffer = Buffer {
            reader,
            reader_exhausted: false,
            window: VecDeque::new(),
            pending_error: None,
        };
        // Discard any leading whitespace/comment run up front so the first
        // `next_char()` call never observes a spurious leading delimiter.
        if let Err(e) = buffer.remove_space_and_comment() {
            buffer.pending_error = Some(e);
        }
        buffer
    }

    fn refill(&mut self) {
        if self.reader_exhausted || !self.window.is_empty() {
            return;
        }
        let mut chunk = vec![0u8; MAX_BUFFER_SIZE];
        match self.reader.read(&mut chunk) {
            Ok(0) => self.reader_exhausted = true,
            Ok(n) => self.window.extend(chunk[..n].iter().copied()),
            Err(_) => self.reader_exhausted = true,
        }
    }

    /// Pulls the next raw byte, refilling from the reader if necessary.
    /// `None` means the underlying reader is genuinely exhausted; it is
    /// kept distinct from a byte that merely happens to equal `EOF_MARKER`,
    /// which callers must treat as a reserved-marker error instead.
    fn next_raw(&mut self) -> Option<char> {
        if self.window.is_empty() {
            self.refill();
        }
        self.window.pop_front().map(|byte| byte as char)
    }

    fn skip_line(&mut self) -> BufferResult<()> {
        loop {
            match self.next_raw() {
                None | Some(NEWLINE) => return Ok(()),
                Some(c) if c == EOF_MARKER => return Err(BufferError::ReservedMarkerInInput(c)),
                Some(_) => {}
            }
        }
    }

    /// Removes any run of whitespace and/or line comments sitting at the
    /// front of the stream, leaving the next real content character (or
    /// EOF) at the front. Returns whether anything was removed.
    fn remove_space_and_comment(&mut self) -> BufferResult<bool> {
        let mut removed = false;
        loop {
            match self.next_raw() {
                None => return Ok(removed),
                Some(c) if c == EOF_MARKER => return Err(BufferError::ReservedMarkerInInput(c)),
                Some(c) if is_whitespace(c) => removed = true,
                Some(c) if c == COMMENT_MARKER => {
                    removed = true;
                    self.skip_line()?;
                }
                Some(c) => {
                    self.unread_char(c);
                    return Ok(removed);
                }
            }
        }
    }

    /// Returns the next character of the normalized stream, or
    /// `EOF_MARKER` once input is exhausted. Idempotent at the end: once
    /// `EOF_MARKER` is returned, every subsequent call also returns it.
    /// Errs if a raw byte equal to `EOF_MARKER` was actually read from the
    /// input rather than synthesized for genuine end-of-stream.
    pub fn next_char(&mut self) -> BufferResult<char> {
        if let Some(e) = self.pending_error.take() {
            return Err(e);
        }
        if self.remove_space_and_comment()? {
            return match self.next_raw() {
                None => Ok(EOF_MARKER),
                Some(c) if c == EOF_MARKER => Err(BufferError::ReservedMarkerInInput(c)),
                Some(c) => {
                    self.unread_char(c);
                    Ok(SPACE)
                }
            };
        }
        match self.next_raw() {
            None => Ok(EOF_MARKER),
            Some(c) if c == EOF_MARKER => Err(BufferError::ReservedMarkerInInput(c)),
            Some(c) => Ok(c),
        }
    }

    /// Places one character back at the front of the stream. At most one
    /// unread may occur between two `next_char` calls. Unreading the EOF
    /// marker is a no-op.
    pub fn unread_char(&mut self, c: char) {
        if c == EOF_MARKER {
            return;
        }
        self.window.push_front(c as u8);
    }

    /// Validates that every content byte `next_char` ever returns belongs
    /// to the TruPL alphabet. The scanner calls this once per character;
    /// kept here because the alphabet is a buffer-layer concern (spec.md
    /// §4.1 item 4). A raw `EOF_MARKER` byte never reaches this function:
    /// `next_char` turns it into a `ReservedMarkerInInput` error first, so
    /// the only `EOF_MARKER` value `validate` ever sees is the legitimate
    /// end-of-stream sentinel.
    pub fn validate(c: char) -> Result<(), BufferError> {
        if c == EOF_MARKER || c == SPACE {
            return Ok(());
        }
        if c == TAB || c == NEWLINE {
            return Ok(());
        }
        if is_alpha(c) || is_digit(c) || is_alphabet_punctuation(c) {
            return Ok(());
        }
        Err(BufferError::IllegalByte(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn buf(source: &str) -> Buffer<Cursor<Vec<u8>>> {
        Buffer::new(Cursor::new(source.as_bytes().to_vec()))
    }

    fn collect_chars(source: &str) -> Vec<char> {
        let mut b = buf(source);
        let mut out = Vec::new();
        loop {
            let c = b.next_char().expect("no reserved marker in this input");
            out.push(c);
            if c == EOF_MARKER {
                break;
            }
        }
        out
    }

    #[test]
    fn empty_input_yields_eof_immediately() {
        assert_eq!(collect_chars(""), vec![EOF_MARKER]);
    }

    #[test]
    fn plain_characters_pass_through() {
        assert_eq!(collect_chars("ab"), vec!['a', 'b', EOF_MARKER]);
    }

    #[test]
    fn internal_whitespace_run_collapses_to_one_space() {
        assert_eq!(collect_chars("a   b"), vec!['a', ' ', 'b', EOF_MARKER]);
        assert_eq!(collect_chars("a\t\n b"), vec!['a', ' ', 'b', EOF_MARKER]);
    }

    #[test]
    fn leading_whitespace_is_discarded() {
        assert_eq!(collect_chars("   a"), vec!['a', EOF_MARKER]);
    }

    #[test]
    fn trailing_whitespace_is_discarded() {
        assert_eq!(collect_chars("a   "), vec!['a', EOF_MARKER]);
    }

    #[test]
    fn comment_to_end_of_line_becomes_one_space() {
        assert_eq!(
            collect_chars("a # a comment\nb"),
            vec!['a', ' ', 'b', EOF_MARKER]
        );
    }

    #[test]
    fn comment_running_to_eof_has_no_trailing_space() {
        assert_eq!(collect_chars("a # trailing comment"), vec!['a', EOF_MARKER]);
    }

    #[test]
    fn eof_is_returned_indefinitely() {
        let mut b = buf("a");
        assert_eq!(b.next_char(), Ok('a'));
        assert_eq!(b.next_char(), Ok(EOF_MARKER));
        assert_eq!(b.next_char(), Ok(EOF_MARKER));
        assert_eq!(b.next_char(), Ok(EOF_MARKER));
    }

    #[test]
    fn unread_then_next_returns_same_character() {
        let mut b = buf("ab");
        let c = b.next_char().unwrap();
        assert_eq!(c, 'a');
        b.unread_char(c);
        assert_eq!(b.next_char(), Ok('a'));
        assert_eq!(b.next_char(), Ok('b'));
    }

    #[test]
    fn unreading_eof_marker_is_a_no_op() {
        let mut b = buf("a");
        b.next_char().unwrap();
        assert_eq!(b.next_char(), Ok(EOF_MARKER));
        b.unread_char(EOF_MARKER);
        assert_eq!(b.next_char(), Ok(EOF_MARKER));
    }

    #[test]
    fn literal_eof_marker_in_input_is_a_reserved_marker_error() {
        let mut b = buf("a$b");
        assert_eq!(b.next_char(), Ok('a'));
        assert_eq!(
            b.next_char(),
            Err(BufferError::ReservedMarkerInInput(EOF_MARKER))
        );
    }

    #[test]
    fn leading_eof_marker_is_a_reserved_marker_error() {
        let mut b = buf("$");
        assert_eq!(
            b.next_char(),
            Err(BufferError::ReservedMarkerInInput(EOF_MARKER))
        );
    }

    #[test]
    fn eof_marker_inside_a_comment_is_still_a_reserved_marker_error() {
        let mut b = buf("a # comment with $ in it\nb");
        assert_eq!(b.next_char(), Ok('a'));
        assert_eq!(
            b.next_char(),
            Err(BufferError::ReservedMarkerInInput(EOF_MARKER))
        );
    }

    #[test]
    fn validate_accepts_alphabet() {
        assert!(Buffer::<Cursor<Vec<u8>>>::validate('a').is_ok());
        assert!(Buffer::<Cursor<Vec<u8>>>::validate('9').is_ok());
        assert!(Buffer::<Cursor<Vec<u8>>>::validate(';').is_ok());
        assert!(Buffer::<Cursor<Vec<u8>>>::validate(EOF_MARKER).is_ok());
    }

    #[test]
    fn validate_rejects_outside_alphabet() {
        assert!(Buffer::<Cursor<Vec<u8>>>::validate('A').is_err());
        assert!(Buffer::<Cursor<Vec<u8>>>::validate('@').is_err());
    }

    #[test]
    fn refill_across_chunk_boundary() {
        let long_input: String = "a".repeat(MAX_BUFFER_SIZE * 2 + 3);
        let mut b = buf(&long_input);
        let mut count = 0;
        loop {
            let c = b.next_char().unwrap();
            if c == EOF_MARKER {
                break;
            }
            assert_eq!(c, 'a');
            count += 1;
        }
        assert_eq!(count, long_input.len());
    }
}
