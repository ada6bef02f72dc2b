//! Predictive LL(1) recursive-descent parser with interleaved semantic
//! actions (spec.md §4.4).
//!
//! Grounded on `faxc_par`'s `Parser` shape (current-token slot, `advance`/
//! `expect`/`match_token` helpers) and on the original
//! `parser/internal/topdown_parser.cc` for the exact grammar, semantic
//! actions, and diagnostic wording. Unlike `faxc_par`'s Pratt-style
//! `infix_binding_power` table, TruPL's expression grammar has a fixed,
//! four-tier precedence ladder (relop loosest, then addop, then mulop,
//! then unary sign) so each tier gets its own recursive-descent function
//! instead of a binding-power loop.

use std::io::Read;

use trupl_lex::{AddOperator, Keyword, MulOperator, Punctuation, RelOperator, Scanner, Token};
use trupl_util::{Diagnostic, Handler};

use crate::symtab::{ExpressionType, SymbolTable};

const EXTERNAL_ENV: &str = "_EXTERNAL";
const UNDEFINED_ENV: &str = "__UNDEFINED";

/// A fatal semantic or scanner error: printed verbatim and the process
/// terminated with a nonzero status (spec.md §7). Carried as a `Result`
/// error instead of calling `process::exit` directly so the parser itself
/// stays testable; the driver is the one that actually exits the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fatal(pub String);

/// The three-way result of a full parse attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Accept,
    Reject,
    Fatal(String),
}

/// Recursive-descent parser over a `Scanner<R>`. Owns the scanner
/// exclusively; the scanner owns its buffer exclusively (spec.md §9).
pub struct Parser<R: Read> {
    scanner: Scanner<R>,
    current: Token,
    handler: Handler,
    table: SymbolTable,
    current_env: String,
    main_env: String,
    parsing_formal_parm_list: bool,
    formal_parm_position: i32,
    procedure_name: String,
    actual_parm_position: i32,
}

impl<R: Read> Parser<R> {
    pub fn new(scanner: Scanner<R>) -> Self {
        Parser {
            scanner,
            current: Token::Eof,
            handler: Handler::new(),
            table: SymbolTable::new(),
            current_env: UNDEFINED_ENV.to_string(),
            main_env: UNDEFINED_ENV.to_string(),
            parsing_formal_parm_list: false,
            formal_parm_position: 0,
            procedure_name: String::new(),
            actual_parm_position: 0,
        }
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.table
    }

    /// Attempts to parse the source. Accept/Reject carry no further detail
    /// (syntax diagnostics are already in `handler()`); `Fatal` carries the
    /// one message to print before the driver exits nonzero.
    pub fn parse_program(&mut self) -> ParseOutcome {
        match self.run() {
            Ok(true) => ParseOutcome::Accept,
            Ok(false) => ParseOutcome::Reject,
            Err(Fatal(message)) => ParseOutcome::Fatal(message),
        }
    }

    fn run(&mut self) -> Result<bool, Fatal> {
        self.advance()?;
        self.program()
    }

    fn advance(&mut self) -> Result<(), Fatal> {
        self.current = self
            .scanner
            .next_token()
            .map_err(|e| Fatal(format!("Exiting on Scanner Fatal Error: {}", e)))?;
        Ok(())
    }

    fn syntax_error(&self, expected: &str) {
        Diagnostic::error(format!(
            "Syntax error: Expected: {} Actual: {}.",
            expected,
            self.current.debug_string()
        ))
        .emit(&self.handler);
    }

    fn peek_keyword(&self, kw: Keyword) -> bool {
        matches!(&self.current, Token::Keyword(k) if *k == kw)
    }

    fn peek_punct(&self, p: Punctuation) -> bool {
        matches!(&self.current, Token::Punctuation(k) if *k == p)
    }

    fn current_relop(&self) -> Option<RelOperator> {
        match &self.current {
            Token::RelOperator(op) => Some(*op),
            _ => None,
        }
    }

    fn current_addop(&self) -> Option<AddOperator> {
        match &self.current {
            Token::AddOperator(op) => Some(*op),
            _ => None,
        }
    }

    fn current_mulop(&self) -> Option<MulOperator> {
        match &self.current {
            Token::MulOperator(op) => Some(*op),
            _ => None,
        }
    }

    fn expect_keyword(&mut self, kw: Keyword, description: &str) -> Result<bool, Fatal> {
        if self.peek_keyword(kw) {
            self.advance()?;
            Ok(true)
        } else {
            self.syntax_error(description);
            Ok(false)
        }
    }

    fn expect_punct(&mut self, p: Punctuation, description: &str) -> Result<bool, Fatal> {
        if self.peek_punct(p) {
            self.advance()?;
            Ok(true)
        } else {
            self.syntax_error(description);
            Ok(false)
        }
    }

    fn expect_identifier(&mut self, description: &str) -> Result<Option<String>, Fatal> {
        if let Token::Identifier(name) = self.current.clone() {
            self.advance()?;
            Ok(Some(name))
        } else {
            self.syntax_error(description);
            Ok(None)
        }
    }

    fn duplicate_error(name: &str) -> Fatal {
        Fatal(format!(
            "Semantic error: The identifier '{}' has been declared.",
            name
        ))
    }

    fn undeclared_error(name: &str) -> Fatal {
        // Corrected wording (spec.md §9 Open Questions): the source's
        // "has already been declared" contradicts the firing condition.
        Fatal(format!(
            "Semantic error: The identifier '{}' has not been declared.",
            name
        ))
    }

    fn type_error(expected: ExpressionType, actual: ExpressionType) -> Fatal {
        Fatal(format!(
            "Type error: Expected: {} Actual: {}.",
            expected, actual
        ))
    }

    fn type_error_either(
        expected_a: ExpressionType,
        expected_b: ExpressionType,
        actual: ExpressionType,
    ) -> Fatal {
        Fatal(format!(
            "Type error: Expected: {} or {} Actual: {}.",
            expected_a, expected_b, actual
        ))
    }

    fn check_declared(&self, name: &str) -> Result<ExpressionType, Fatal> {
        if !self.table.is_declared(name, &self.current_env) {
            return Err(Self::undeclared_error(name));
        }
        Ok(self.table.get_type(name, &self.current_env))
    }

    fn install_ident(&mut self, name: &str) -> Result<(), Fatal> {
        if self.table.is_declared(name, &self.current_env) {
            return Err(Self::duplicate_error(name));
        }
        if self.parsing_formal_parm_list {
            let position = self.formal_parm_position;
            self.table
                .install_with_position(name, &self.current_env, ExpressionType::Unknown, position);
            self.formal_parm_position += 1;
        } else {
            self.table
                .install(name, &self.current_env, ExpressionType::Unknown);
        }
        Ok(())
    }

    // PROGRAM → 'program' ident ';' DECL_LIST BLOCK ';'
    fn program(&mut self) -> Result<bool, Fatal> {
        if !self.expect_keyword(Keyword::Program, "'program'")? {
            return Ok(false);
        }
        let name = match self.expect_identifier("identifier")? {
            Some(n) => n,
            None => return Ok(false),
        };
        if self.table.is_declared(&name, EXTERNAL_ENV) {
            return Err(Self::duplicate_error(&name));
        }
        self.table.install(&name, EXTERNAL_ENV, ExpressionType::Program);
        self.current_env = name;
        self.main_env = self.current_env.clone();

        if !self.expect_punct(Punctuation::Semicolon, "';'")? {
            return Ok(false);
        }
        if !self.decl_list()? {
            return Ok(false);
        }
        if !self.block()? {
            return Ok(false);
        }
        self.expect_punct(Punctuation::Semicolon, "';'")
    }

    // DECL_LIST → VARIABLE_DECL_LIST PROCEDURE_DECL_LIST
    fn decl_list(&mut self) -> Result<bool, Fatal> {
        if !self.variable_decl_list()? {
            return Ok(false);
        }
        self.procedure_decl_list()
    }

    // VARIABLE_DECL_LIST → VARIABLE_DECL ';' VARIABLE_DECL_LIST | ε
    fn variable_decl_list(&mut self) -> Result<bool, Fatal> {
        while matches!(self.current, Token::Identifier(_)) {
            if !self.variable_decl()? {
                return Ok(false);
            }
            if !self.expect_punct(Punctuation::Semicolon, "';'")? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    // VARIABLE_DECL → IDENT_LIST ':' STANDARD_TYPE
    fn variable_decl(&mut self) -> Result<bool, Fatal> {
        if !self.ident_list()? {
            return Ok(false);
        }
        if !self.expect_punct(Punctuation::Colon, "':'")? {
            return Ok(false);
        }
        let ty = match self.standard_type()? {
            Some(t) => t,
            None => return Ok(false),
        };
        self.table.update_type(ty);
        Ok(true)
    }

    // IDENT_LIST → ident IDENT_LIST_TAIL
    fn ident_list(&mut self) -> Result<bool, Fatal> {
        let name = match self.expect_identifier("identifier")? {
            Some(n) => n,
            None => return Ok(false),
        };
        self.install_ident(&name)?;
        self.ident_list_tail()
    }

    // IDENT_LIST_TAIL → ',' ident IDENT_LIST_TAIL | ε
    fn ident_list_tail(&mut self) -> Result<bool, Fatal> {
        while self.peek_punct(Punctuation::Comma) {
            self.advance()?;
            let name = match self.expect_identifier("identifier")? {
                Some(n) => n,
                None => return Ok(false),
            };
            self.install_ident(&name)?;
        }
        Ok(true)
    }

    // STANDARD_TYPE → 'int' | 'bool'
    fn standard_type(&mut self) -> Result<Option<ExpressionType>, Fatal> {
        if self.peek_keyword(Keyword::Int) {
            self.advance()?;
            return Ok(Some(ExpressionType::Int));
        }
        if self.peek_keyword(Keyword::Bool) {
            self.advance()?;
            return Ok(Some(ExpressionType::Bool));
        }
        self.syntax_error("'int' or 'bool'");
        Ok(None)
    }

    // PROCEDURE_DECL_LIST → PROCEDURE_DECL ';' PROCEDURE_DECL_LIST | ε
    fn procedure_decl_list(&mut self) -> Result<bool, Fatal> {
        while self.peek_keyword(Keyword::Procedure) {
            if !self.procedure_decl()? {
                return Ok(false);
            }
            if !self.expect_punct(Punctuation::Semicolon, "';'")? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    // PROCEDURE_DECL → 'procedure' ident '(' PROC_ARGS ')' VARIABLE_DECL_LIST BLOCK
    fn procedure_decl(&mut self) -> Result<bool, Fatal> {
        if !self.expect_keyword(Keyword::Procedure, "'procedure'")? {
            return Ok(false);
        }
        let name = match self.expect_identifier("identifier")? {
            Some(n) => n,
            None => return Ok(false),
        };
        if self.table.is_declared(&name, &self.current_env) {
            return Err(Self::duplicate_error(&name));
        }
        self.table
            .install(&name, &self.current_env, ExpressionType::Procedure);
        self.current_env = name;
        self.formal_parm_position = 0;

        let result = self.procedure_body();
        // Procedures are flat: always restore to the program's environment
        // on exit, success or failure (spec.md §4.4 state machine).
        self.current_env = self.main_env.clone();
        result
    }

    fn procedure_body(&mut self) -> Result<bool, Fatal> {
        if !self.expect_punct(Punctuation::OpenBracket, "'('")? {
            return Ok(false);
        }
        if !self.proc_args()? {
            return Ok(false);
        }
        if !self.expect_punct(Punctuation::CloseBracket, "')'")? {
            return Ok(false);
        }
        if !self.variable_decl_list()? {
            return Ok(false);
        }
        self.block()
    }

    // PROC_ARGS → FORMAL_PARM_LIST | ε
    fn proc_args(&mut self) -> Result<bool, Fatal> {
        if !matches!(self.current, Token::Identifier(_)) {
            return Ok(true);
        }
        self.parsing_formal_parm_list = true;
        let result = self.formal_parm_list();
        self.parsing_formal_parm_list = false;
        result
    }

    // FORMAL_PARM_LIST → ident IDENT_LIST_TAIL ':' STANDARD_TYPE FORMAL_TAIL
    fn formal_parm_list(&mut self) -> Result<bool, Fatal> {
        if !self.ident_list()? {
            return Ok(false);
        }
        if !self.expect_punct(Punctuation::Colon, "':'")? {
            return Ok(false);
        }
        let ty = match self.standard_type()? {
            Some(t) => t,
            None => return Ok(false),
        };
        self.table.update_type(ty);
        self.formal_tail()
    }

    // FORMAL_TAIL → ';' FORMAL_PARM_LIST | ε
    fn formal_tail(&mut self) -> Result<bool, Fatal> {
        if self.peek_punct(Punctuation::Semicolon) {
            self.advance()?;
            return self.formal_parm_list();
        }
        Ok(true)
    }

    // BLOCK → 'begin' STMT_LIST 'end'
    fn block(&mut self) -> Result<bool, Fatal> {
        if !self.expect_keyword(Keyword::Begin, "'begin'")? {
            return Ok(false);
        }
        if !self.stmt_list()? {
            return Ok(false);
        }
        self.expect_keyword(Keyword::End, "'end'")
    }

    fn stmt_starts_here(&self) -> bool {
        self.peek_keyword(Keyword::If)
            || self.peek_keyword(Keyword::While)
            || self.peek_keyword(Keyword::Print)
            || matches!(self.current, Token::Identifier(_))
    }

    // STMT_LIST → STMT ';' STMT_LIST_TAIL | ';' STMT_LIST_TAIL
    fn stmt_list(&mut self) -> Result<bool, Fatal> {
        if self.stmt_starts_here() {
            if !self.stmt()? {
                return Ok(false);
            }
            if !self.expect_punct(Punctuation::Semicolon, "';'")? {
                return Ok(false);
            }
        } else if self.peek_punct(Punctuation::Semicolon) {
            self.advance()?;
        } else {
            self.syntax_error("statement or ';'");
            return Ok(false);
        }
        self.stmt_list_tail()
    }

    // STMT_LIST_TAIL → STMT ';' STMT_LIST_TAIL | ε
    fn stmt_list_tail(&mut self) -> Result<bool, Fatal> {
        while self.stmt_starts_here() {
            if !self.stmt()? {
                return Ok(false);
            }
            if !self.expect_punct(Punctuation::Semicolon, "';'")? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    // STMT → IF_STMT | WHILE_STMT | PRINT_STMT | ident ASSIGN_OR_CALL
    fn stmt(&mut self) -> Result<bool, Fatal> {
        if self.peek_keyword(Keyword::If) {
            return self.if_stmt();
        }
        if self.peek_keyword(Keyword::While) {
            return self.while_stmt();
        }
        if self.peek_keyword(Keyword::Print) {
            return self.print_stmt();
        }
        if let Token::Identifier(name) = self.current.clone() {
            self.advance()?;
            let ident_type = self.check_declared(&name)?;
            self.procedure_name = name.clone();
            return self.assign_or_call(&name, ident_type);
        }
        self.syntax_error("statement");
        Ok(false)
    }

    // ASSIGN_OR_CALL → ':=' EXPR | '(' EXPR_LIST ')'
    fn assign_or_call(&mut self, name: &str, ident_type: ExpressionType) -> Result<bool, Fatal> {
        if self.peek_punct(Punctuation::Assignment) {
            self.advance()?;
            let expr_type = match self.expr()? {
                Some(t) => t,
                None => return Ok(false),
            };
            if ident_type != expr_type {
                return Err(Self::type_error(ident_type, expr_type));
            }
            return Ok(true);
        }
        if self.peek_punct(Punctuation::OpenBracket) {
            self.advance()?;
            if ident_type != ExpressionType::Procedure {
                return Err(Self::type_error(ExpressionType::Procedure, ident_type));
            }
            self.actual_parm_position = 0;
            if !self.expr_list(name)? {
                return Ok(false);
            }
            return self.expect_punct(Punctuation::CloseBracket, "')'");
        }
        self.syntax_error("':=' or '('");
        Ok(false)
    }

    // IF_STMT → 'if' EXPR 'then' BLOCK ELSE_PART
    fn if_stmt(&mut self) -> Result<bool, Fatal> {
        self.advance()?;
        let cond = match self.expr()? {
            Some(t) => t,
            None => return Ok(false),
        };
        if cond != ExpressionType::Bool {
            return Err(Self::type_error(ExpressionType::Bool, cond));
        }
        if !self.expect_keyword(Keyword::Then, "'then'")? {
            return Ok(false);
        }
        if !self.block()? {
            return Ok(false);
        }
        self.else_part()
    }

    // ELSE_PART → 'else' BLOCK | ε
    fn else_part(&mut self) -> Result<bool, Fatal> {
        if self.peek_keyword(Keyword::Else) {
            self.advance()?;
            return self.block();
        }
        Ok(true)
    }

    // WHILE_STMT → 'while' EXPR 'loop' BLOCK
    fn while_stmt(&mut self) -> Result<bool, Fatal> {
        self.advance()?;
        let cond = match self.expr()? {
            Some(t) => t,
            None => return Ok(false),
        };
        if cond != ExpressionType::Bool {
            return Err(Self::type_error(ExpressionType::Bool, cond));
        }
        if !self.expect_keyword(Keyword::Loop, "'loop'")? {
            return Ok(false);
        }
        self.block()
    }

    // PRINT_STMT → 'print' EXPR
    fn print_stmt(&mut self) -> Result<bool, Fatal> {
        self.advance()?;
        let expr_type = match self.expr()? {
            Some(t) => t,
            None => return Ok(false),
        };
        if expr_type != ExpressionType::Int && expr_type != ExpressionType::Bool {
            return Err(Self::type_error_either(
                ExpressionType::Int,
                ExpressionType::Bool,
                expr_type,
            ));
        }
        Ok(true)
    }

    // EXPR_LIST → ACTUAL_PARM_LIST | ε
    fn expr_list(&mut self, procedure_name: &str) -> Result<bool, Fatal> {
        if self.peek_punct(Punctuation::CloseBracket) {
            return Ok(true);
        }
        self.actual_parm_list(procedure_name)
    }

    // ACTUAL_PARM_LIST → EXPR (',' EXPR)*
    fn actual_parm_list(&mut self, procedure_name: &str) -> Result<bool, Fatal> {
        loop {
            let expr_type = match self.expr()? {
                Some(t) => t,
                None => return Ok(false),
            };
            let expected = self
                .table
                .get_type_at_position(procedure_name, self.actual_parm_position);
            if expr_type != expected {
                return Err(Self::type_error(expected, expr_type));
            }
            self.actual_parm_position += 1;
            if self.peek_punct(Punctuation::Comma) {
                self.advance()?;
            } else {
                break;
            }
        }
        Ok(true)
    }

    // EXPR → SIMPLE_EXPR (relop SIMPLE_EXPR)?
    fn expr(&mut self) -> Result<Option<ExpressionType>, Fatal> {
        let left = match self.simple_expr()? {
            Some(t) => t,
            None => return Ok(None),
        };
        if self.current_relop().is_some() {
            self.advance()?;
            let right = match self.simple_expr()? {
                Some(t) => t,
                None => return Ok(None),
            };
            if left != ExpressionType::Int {
                return Err(Self::type_error(ExpressionType::Int, left));
            }
            if right != ExpressionType::Int {
                return Err(Self::type_error(ExpressionType::Int, right));
            }
            return Ok(Some(ExpressionType::Bool));
        }
        Ok(Some(left))
    }

    // SIMPLE_EXPR → TERM (addop TERM)*
    fn simple_expr(&mut self) -> Result<Option<ExpressionType>, Fatal> {
        let mut acc = match self.term()? {
            Some(t) => t,
            None => return Ok(None),
        };
        while let Some(op) = self.current_addop() {
            self.advance()?;
            let op_type = match op {
                AddOperator::Add | AddOperator::Subtract => ExpressionType::Int,
                AddOperator::Or => ExpressionType::Bool,
            };
            if acc != op_type {
                return Err(Self::type_error(op_type, acc));
            }
            let rhs = match self.term()? {
                Some(t) => t,
                None => return Ok(None),
            };
            if rhs != op_type {
                return Err(Self::type_error(op_type, rhs));
            }
            acc = op_type;
        }
        Ok(Some(acc))
    }

    // TERM → FACTOR (mulop FACTOR)*
    fn term(&mut self) -> Result<Option<ExpressionType>, Fatal> {
        let mut acc = match self.factor()? {
            Some(t) => t,
            None => return Ok(None),
        };
        while let Some(op) = self.current_mulop() {
            self.advance()?;
            let op_type = match op {
                MulOperator::Multiply | MulOperator::Divide => ExpressionType::Int,
                MulOperator::And => ExpressionType::Bool,
            };
            if acc != op_type {
                return Err(Self::type_error(op_type, acc));
            }
            let rhs = match self.factor()? {
                Some(t) => t,
                None => return Ok(None),
            };
            if rhs != op_type {
                return Err(Self::type_error(op_type, rhs));
            }
            acc = op_type;
        }
        Ok(Some(acc))
    }

    // FACTOR → ident | number | '(' EXPR ')' | SIGN FACTOR
    fn factor(&mut self) -> Result<Option<ExpressionType>, Fatal> {
        match self.current.clone() {
            Token::Identifier(name) => {
                self.advance()?;
                let ty = self.check_declared(&name)?;
                Ok(Some(ty))
            }
            Token::Number(_) => {
                self.advance()?;
                Ok(Some(ExpressionType::Int))
            }
            Token::Punctuation(Punctuation::OpenBracket) => {
                self.advance()?;
                let inner = match self.expr()? {
                    Some(t) => t,
                    None => return Ok(None),
                };
                if !self.expect_punct(Punctuation::CloseBracket, "')'")? {
                    return Ok(None);
                }
                Ok(Some(inner))
            }
            Token::AddOperator(AddOperator::Add) | Token::AddOperator(AddOperator::Subtract) => {
                self.advance()?;
                let inner = match self.factor()? {
                    Some(t) => t,
                    None => return Ok(None),
                };
                if inner != ExpressionType::Int {
                    return Err(Self::type_error(ExpressionType::Int, inner));
                }
                Ok(Some(ExpressionType::Int))
            }
            Token::Keyword(Keyword::Not) => {
                self.advance()?;
                let inner = match self.factor()? {
                    Some(t) => t,
                    None => return Ok(None),
                };
                if inner != ExpressionType::Bool {
                    return Err(Self::type_error(ExpressionType::Bool, inner));
                }
                Ok(Some(ExpressionType::Bool))
            }
            _ => {
                self.syntax_error("identifier, number, '(', sign, or 'not'");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(source: &str) -> ParseOutcome {
        let scanner = Scanner::new(Cursor::new(source.as_bytes().to_vec()));
        let mut parser = Parser::new(scanner);
        parser.parse_program()
    }

    // Seed scenario 4.
    #[test]
    fn seed_scenario_4_accepts() {
        assert_eq!(
            parse("program foo0; begin print 10; end;"),
            ParseOutcome::Accept
        );
    }

    // Seed scenario 5: duplicate declaration is a fatal semantic error.
    #[test]
    fn seed_scenario_5_duplicate_declaration() {
        let outcome = parse("program foo; a: int; a: bool; begin print(a); end;");
        match outcome {
            ParseOutcome::Fatal(msg) => assert!(msg.contains("'a' has been declared")),
            other => panic!("expected fatal duplicate-declaration error, got {:?}", other),
        }
    }

    // Seed scenario 6: undeclared identifier is a fatal semantic error.
    #[test]
    fn seed_scenario_6_undeclared_identifier() {
        let outcome = parse("program foo; begin print(a); end;");
        match outcome {
            ParseOutcome::Fatal(msg) => assert!(msg.contains("'a' has not been declared")),
            other => panic!("expected fatal undeclared-identifier error, got {:?}", other),
        }
    }

    // Seed scenario 7: type mismatch (Int expected, Bool found).
    #[test]
    fn seed_scenario_7_type_mismatch() {
        let outcome = parse(
            "program foo; a: int; b: bool; begin a := (a + 1) * (a - 1) + b; end;",
        );
        match outcome {
            ParseOutcome::Fatal(msg) => {
                assert!(msg.starts_with("Type error: Expected: kInt Actual: kBool"))
            }
            other => panic!("expected fatal type error, got {:?}", other),
        }
    }

    // Seed scenario 8: type mismatch (Bool expected, Int found) on `if`.
    #[test]
    fn seed_scenario_8_if_condition_must_be_bool() {
        let outcome = parse("program foo; begin if 1 then begin print(1); end; end;");
        match outcome {
            ParseOutcome::Fatal(msg) => {
                assert!(msg.starts_with("Type error: Expected: kBool Actual: kInt"))
            }
            other => panic!("expected fatal type error, got {:?}", other),
        }
    }

    #[test]
    fn empty_block_is_a_syntax_error() {
        // STMT_LIST has no epsilon alternative: `begin end;` has zero
        // statements and zero semicolons, so it can't derive.
        assert_eq!(parse("program empty; begin end;"), ParseOutcome::Reject);
    }

    #[test]
    fn syntax_error_rejects_without_panicking() {
        let outcome = parse("program foo begin end;");
        assert_eq!(outcome, ParseOutcome::Reject);
    }

    #[test]
    fn procedure_call_arity_and_types_are_checked() {
        let source = "program foo; \
             procedure p(x: int; y: bool) begin print x; end; \
             begin p(1, 1); end;";
        let outcome = parse(source);
        match outcome {
            ParseOutcome::Fatal(msg) => {
                assert!(msg.starts_with("Type error: Expected: kBool Actual: kInt"))
            }
            other => panic!("expected fatal type error on call argument, got {:?}", other),
        }
    }

    #[test]
    fn procedure_call_with_matching_types_accepts() {
        let source = "program foo; \
             procedure p(x: int; y: bool) begin print x; end; \
             begin p(1, 0=0); end;";
        assert_eq!(parse(source), ParseOutcome::Accept);
    }

    #[test]
    fn procedure_name_is_not_visible_inside_its_own_body() {
        // Flat procedures: a procedure cannot recursively call itself.
        let source = "program foo; procedure p() begin p(); end; begin end;";
        let outcome = parse(source);
        match outcome {
            ParseOutcome::Fatal(msg) => assert!(msg.contains("has not been declared")),
            other => panic!("expected undeclared-identifier error, got {:?}", other),
        }
    }

    #[test]
    fn while_loop_with_bool_condition_accepts() {
        assert_eq!(
            parse("program foo; a: bool; begin while a loop begin print 1; end; end;"),
            ParseOutcome::Accept
        );
    }

    #[test]
    fn not_and_and_operate_on_bool() {
        assert_eq!(
            parse("program foo; a: bool; begin print not a and a; end;"),
            ParseOutcome::Accept
        );
    }
}
