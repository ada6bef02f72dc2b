//! Shared infrastructure for the TruPL front-end: diagnostics and source
//! spans.
//!
//! This crate has no knowledge of TruPL's grammar or token set — it is the
//! ambient layer every other crate in the workspace builds on, the same
//! role `faxc-util` plays for the `faxc` compiler.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use error::{BufferError, BufferResult, ScannerError, ScannerResult};
pub use span::Span;
