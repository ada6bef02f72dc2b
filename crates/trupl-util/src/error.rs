//! Typed error enums for the two fatal-but-internal failure categories of
//! the front-end (spec.md §7): buffer errors and scanner errors.
//!
//! Both are always fatal — the driver maps them to a process exit. The
//! typed enum exists so the exact diagnostic text lives next to its
//! condition instead of being assembled ad hoc at each call site, the way
//! `faxc-util::error` does for `SymbolError`/`SourceMapError`.

use thiserror::Error;

/// Errors raised while normalizing the raw byte stream into the TruPL
/// alphabet (spec.md §4.1).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A byte outside the TruPL alphabet (not a lowercase letter, digit,
    /// recognized punctuation, or whitespace) appeared in the input.
    #[error("Illegal character: {0}")]
    IllegalByte(char),

    /// The reserved EOF marker byte appeared in the raw input stream.
    #[error("Illegal character: {0}")]
    ReservedMarkerInInput(char),
}

pub type BufferResult<T> = Result<T, BufferError>;

/// Errors raised by the scanner that should be unreachable if the buffer
/// validated its output correctly (spec.md §4.2: "should be impossible if
/// the buffer validates").
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScannerError {
    /// A character reached the scanner's start state that matches none of
    /// its dispatch arms.
    #[error("Illegal character: {0}")]
    IllegalCharacter(char),
}

pub type ScannerResult<T> = Result<T, ScannerError>;

/// A buffer error always surfaces as a scanner error: both are fatal, and
/// the driver reports them through the same "Exiting on Scanner Fatal
/// Error" path (spec.md §7).
impl From<BufferError> for ScannerError {
    fn from(e: BufferError) -> Self {
        match e {
            BufferError::IllegalByte(c) => ScannerError::IllegalCharacter(c),
            BufferError::ReservedMarkerInInput(c) => ScannerError::IllegalCharacter(c),
        }
    }
}
