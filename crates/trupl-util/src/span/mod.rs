//! Source locations.
//!
//! spec.md's Non-goals rule out "source-position tracking richer than
//! next-token context", so unlike `faxc_util::span::Span` this carries no
//! `FileId` (TruPL compiles exactly one source file per process) and is
//! never used to render multi-line caret snippets — just to say "at line L,
//! column C" when a diagnostic fires.

/// A location in the source, spanning `[start, end)` byte offsets with the
/// line/column of `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Span {
            start,
            end,
            line,
            column,
        }
    }

    /// A zero-width span at a single point, e.g. the current cursor
    /// position when no lexeme has been consumed yet.
    pub fn point(line: u32, column: u32) -> Self {
        Span {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Extends this span to cover `other` as well. Used when a multi-token
    /// production's span should cover everything it consumed.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line,
            column: self.column,
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Span::DUMMY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_fields() {
        let s = Span::new(3, 7, 1, 4);
        assert_eq!(s.start, 3);
        assert_eq!(s.end, 7);
        assert_eq!(s.line, 1);
        assert_eq!(s.column, 4);
    }

    #[test]
    fn point_is_empty() {
        let s = Span::point(2, 5);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn merge_covers_both() {
        let a = Span::new(0, 3, 1, 1);
        let b = Span::new(5, 9, 1, 6);
        let m = a.merge(&b);
        assert_eq!(m.start, 0);
        assert_eq!(m.end, 9);
    }

    #[test]
    fn dummy_is_default() {
        assert_eq!(Span::default(), Span::DUMMY);
    }
}
