//! Flat, append-only symbol table with semantic-action support (spec.md §4.3).
//!
//! Grounded on the original `parser/symbol_table.h` (authoritative — its
//! `.cc` is an unimplemented student-assignment stub, so the behavior below
//! comes from spec.md §4.3/§4.4 directly) and, for the general owned-struct
//! shape, on `faxc_util`'s table-like modules.

use std::fmt;

/// Types of expressions the semantic actions manipulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionType {
    Int,
    Bool,
    Program,
    Procedure,
    Unknown,
    No,
    Garbage,
}

impl ExpressionType {
    fn debug_str(self) -> &'static str {
        match self {
            ExpressionType::Int => "kInt",
            ExpressionType::Bool => "kBool",
            ExpressionType::Program => "kProgram",
            ExpressionType::Procedure => "kProcedure",
            ExpressionType::Unknown => "kUnknown",
            ExpressionType::No => "kNo",
            ExpressionType::Garbage => "kGarbage",
        }
    }
}

impl fmt::Display for ExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.debug_str())
    }
}

/// Sentinel position for entries that are not formal parameters.
pub const NO_POSITION: i32 = -1;

#[derive(Debug, Clone)]
struct Entry {
    identifier: String,
    environment: String,
    r#type: ExpressionType,
    position: i32,
}

/// Flat, append-only catalog of declared names. A fresh table is created
/// per parse; lookups are first-match over insertion order (there is no
/// shadowing in TruPL, so at most one entry ever matches).
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<Entry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            entries: Vec::new(),
        }
    }

    /// Installs a non-parameter identifier.
    pub fn install(&mut self, identifier: &str, environment: &str, r#type: ExpressionType) {
        self.entries.push(Entry {
            identifier: identifier.to_string(),
            environment: environment.to_string(),
            r#type,
            position: NO_POSITION,
        });
    }

    /// Installs a formal parameter, recording its position in the
    /// procedure's parameter list.
    pub fn install_with_position(
        &mut self,
        identifier: &str,
        environment: &str,
        r#type: ExpressionType,
        position: i32,
    ) {
        self.entries.push(Entry {
            identifier: identifier.to_string(),
            environment: environment.to_string(),
            r#type,
            position,
        });
    }

    /// Promotes every `Unknown` entry (in every environment) to `t`. Called
    /// once per declaration group immediately after its `: TYPE` is parsed,
    /// when the only `Unknown` entries in the table are that group's.
    pub fn update_type(&mut self, t: ExpressionType) {
        for entry in &mut self.entries {
            if entry.r#type == ExpressionType::Unknown {
                entry.r#type = t;
            }
        }
    }

    pub fn is_declared(&self, identifier: &str, environment: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.identifier == identifier && e.environment == environment)
    }

    /// Type of the first entry matching `(identifier, environment)`, or
    /// `Garbage` if there is no match.
    pub fn get_type(&self, identifier: &str, environment: &str) -> ExpressionType {
        self.entries
            .iter()
            .find(|e| e.identifier == identifier && e.environment == environment)
            .map(|e| e.r#type)
            .unwrap_or(ExpressionType::Garbage)
    }

    /// Type of the first formal parameter of `procedure` at `position`, or
    /// `Garbage` if there is none.
    pub fn get_type_at_position(&self, procedure: &str, position: i32) -> ExpressionType {
        self.entries
            .iter()
            .find(|e| e.environment == procedure && e.position == position)
            .map(|e| e.r#type)
            .unwrap_or(ExpressionType::Garbage)
    }

    fn dump_entry(entry: &Entry) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            entry.identifier, entry.environment, entry.r#type, entry.position
        )
    }

    /// Human-readable listing, one entry per line, in insertion order.
    pub fn dump(&self) -> String {
        self.entries
            .iter()
            .map(Self::dump_entry)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
