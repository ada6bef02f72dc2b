//! Fluent diagnostic construction, grounded on
//! `faxc_util::diagnostic::builder::DiagnosticBuilder`.

use super::{Diagnostic, Handler, Level};
use crate::span::Span;

#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        DiagnosticBuilder {
            level,
            message: message.into(),
            span: Span::DUMMY,
            notes: Vec::new(),
        }
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            notes: self.notes,
        }
    }

    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_message_and_level() {
        let d = DiagnosticBuilder::new(Level::Error, "bad").build();
        assert_eq!(d.message, "bad");
        assert_eq!(d.level, Level::Error);
    }

    #[test]
    fn builder_emits_to_handler() {
        let handler = Handler::new();
        Diagnostic::error("bad").span(Span::point(1, 1)).emit(&handler);
        assert!(handler.has_errors());
    }

    #[test]
    fn builder_accumulates_notes() {
        let d = DiagnosticBuilder::new(Level::Error, "bad")
            .note("first")
            .note("second")
            .build();
        assert_eq!(d.notes, vec!["first".to_string(), "second".to_string()]);
    }
}
