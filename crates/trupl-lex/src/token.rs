//! Token kinds and attributes (spec.md §3), with the exact debug-string
//! rendering observed in tests and driver output (`KIND:Attribute`).
//!
//! Grounded on `faxc_lex`'s tagged-variant `Token` enum, and on the
//! attribute debug strings in the original `trupl-compiler`'s
//! `tokens/*.h`/`scanner/*_token.h` headers (`kProgram`, `kAnd`, etc. —
//! never the `kAdd` mis-rendering one source revision introduced for
//! `MulOperator::And`, called out in spec.md §9).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Program,
    Procedure,
    Int,
    Bool,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Loop,
    Print,
    Not,
}

impl Keyword {
    fn debug_str(self) -> &'static str {
        match self {
            Keyword::Program => "kProgram",
            Keyword::Procedure => "kProcedure",
            Keyword::Int => "kInt",
            Keyword::Bool => "kBool",
            Keyword::Begin => "kBegin",
            Keyword::End => "kEnd",
            Keyword::If => "kIf",
            Keyword::Then => "kThen",
            Keyword::Else => "kElse",
            Keyword::While => "kWhile",
            Keyword::Loop => "kLoop",
            Keyword::Print => "kPrint",
            Keyword::Not => "kNot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuation {
    Semicolon,
    Colon,
    Comma,
    Assignment,
    OpenBracket,
    CloseBracket,
}

impl Punctuation {
    fn debug_str(self) -> &'static str {
        match self {
            Punctuation::Semicolon => "kSemicolon",
            Punctuation::Colon => "kColon",
            Punctuation::Comma => "kComma",
            Punctuation::Assignment => "kAssignment",
            Punctuation::OpenBracket => "kOpenBracket",
            Punctuation::CloseBracket => "kCloseBracket",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
}

impl RelOperator {
    fn debug_str(self) -> &'static str {
        match self {
            RelOperator::Equal => "kEqual",
            RelOperator::NotEqual => "kNotEqual",
            RelOperator::GreaterThan => "kGreaterThan",
            RelOperator::GreaterOrEqual => "kGreaterOrEqual",
            RelOperator::LessThan => "kLessThan",
            RelOperator::LessOrEqual => "kLessOrEqual",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddOperator {
    Add,
    Subtract,
    Or,
}

impl AddOperator {
    fn debug_str(self) -> &'static str {
        match self {
            AddOperator::Add => "kAdd",
            AddOperator::Subtract => "kSubtract",
            AddOperator::Or => "kOr",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MulOperator {
    Multiply,
    Divide,
    And,
}

impl MulOperator {
    fn debug_str(self) -> &'static str {
        match self {
            MulOperator::Multiply => "kMultiply",
            MulOperator::Divide => "kDivide",
            MulOperator::And => "kAnd",
        }
    }
}

/// A lexical token: a kind tag carrying its attribute inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Keyword(Keyword),
    Punctuation(Punctuation),
    RelOperator(RelOperator),
    AddOperator(AddOperator),
    MulOperator(MulOperator),
    Identifier(String),
    Number(String),
    Eof,
}

impl Token {
    /// Renders this token the way spec.md §3/§6 requires: `KIND:Attribute`.
    pub fn debug_string(&self) -> String {
        match self {
            Token::Keyword(k) => format!("kKeyword:{}", k.debug_str()),
            Token::Punctuation(p) => format!("kPunctuation:{}", p.debug_str()),
            Token::RelOperator(r) => format!("kRelOperator:{}", r.debug_str()),
            Token::AddOperator(a) => format!("kAddOperator:{}", a.debug_str()),
            Token::MulOperator(m) => format!("kMulOperator:{}", m.debug_str()),
            Token::Identifier(s) => format!("kIdentifier:{}", s),
            Token::Number(s) => format!("kNumber:{}", s),
            Token::Eof => "kEOF:EndOfFile".to_string(),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.debug_string())
    }
}

/// Maps a maximal run of `[a-z][a-z0-9]*` to its reserved-word token, if
/// it is one of the keywords/operators that happen to be spelled with
/// letters (spec.md §4.2: "and"/"or"/"not" are reserved despite being
/// alphabetic). Returns `None` for ordinary identifiers.
pub fn keyword_from_ident(text: &str) -> Option<Token> {
    use AddOperator::Or;
    use Keyword::*;
    use MulOperator::And;

    Some(match text {
        "program" => Token::Keyword(Program),
        "procedure" => Token::Keyword(Procedure),
        "int" => Token::Keyword(Int),
        "bool" => Token::Keyword(Bool),
        "begin" => Token::Keyword(Begin),
        "end" => Token::Keyword(End),
        "if" => Token::Keyword(If),
        "then" => Token::Keyword(Then),
        "else" => Token::Keyword(Else),
        "while" => Token::Keyword(While),
        "loop" => Token::Keyword(Loop),
        "print" => Token::Keyword(Print),
        "not" => Token::Keyword(Not),
        "and" => Token::MulOperator(And),
        "or" => Token::AddOperator(Or),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_debug_strings() {
        assert_eq!(
            Token::Keyword(Keyword::Program).debug_string(),
            "kKeyword:kProgram"
        );
        assert_eq!(
            Token::Keyword(Keyword::Not).debug_string(),
            "kKeyword:kNot"
        );
    }

    #[test]
    fn mul_and_debug_string_is_kand_not_kadd() {
        assert_eq!(
            Token::MulOperator(MulOperator::And).debug_string(),
            "kMulOperator:kAnd"
        );
    }

    #[test]
    fn add_operator_add_is_still_kadd() {
        assert_eq!(
            Token::AddOperator(AddOperator::Add).debug_string(),
            "kAddOperator:kAdd"
        );
    }

    #[test]
    fn identifier_and_number_debug_strings() {
        assert_eq!(
            Token::Identifier("foo".to_string()).debug_string(),
            "kIdentifier:foo"
        );
        assert_eq!(
            Token::Number("123".to_string()).debug_string(),
            "kNumber:123"
        );
    }

    #[test]
    fn eof_debug_string() {
        assert_eq!(Token::Eof.debug_string(), "kEOF:EndOfFile");
    }

    #[test]
    fn keyword_from_ident_covers_every_reserved_word() {
        assert_eq!(
            keyword_from_ident("program"),
            Some(Token::Keyword(Keyword::Program))
        );
        assert_eq!(
            keyword_from_ident("and"),
            Some(Token::MulOperator(MulOperator::And))
        );
        assert_eq!(
            keyword_from_ident("or"),
            Some(Token::AddOperator(AddOperator::Or))
        );
        assert_eq!(keyword_from_ident("notakeyword"), None);
    }

    #[test]
    fn keyword_prefix_that_diverges_is_not_a_keyword() {
        // "integer" is a keyword-prefix ("int") that diverges; the whole
        // identifier must be looked up, not just the "int" prefix.
        assert_eq!(keyword_from_ident("integer"), None);
    }
}
