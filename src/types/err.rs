//! Error types used in the library.
//!
//! - The procedures themselves are total over well-formed formulas and so have no error type.
//! - Errors arise at the boundary: reading text into a formula, building a formula from integers, extending a valuation, and running a benchmark.
//!
//! Names of the error enums overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use std::path::PathBuf;

use crate::structures::{atom::Atom, literal::IntLiteral};

/// The general error type, wrapping the specific errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Bench(BenchError),
    Formula(FormulaError),
    Parse(ParseError),
    Valuation(ValuationError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bench(e) => write!(f, "{e}"),
            Self::Formula(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Valuation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when running a benchmark.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BenchError {
    /// The directory of formulas could not be read.
    UnreadableDirectory(PathBuf),

    /// A worker thread could not be spawned.
    WorkerSpawn,

    /// A worker thread panicked, likely from exhausting its stack.
    WorkerPanic,
}

impl std::fmt::Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreadableDirectory(path) => write!(f, "Unable to read directory {path:?}."),
            Self::WorkerSpawn => write!(f, "Failed to spawn a worker."),
            Self::WorkerPanic => write!(f, "A worker panicked."),
        }
    }
}

impl From<BenchError> for ErrorKind {
    fn from(e: BenchError) -> Self {
        ErrorKind::Bench(e)
    }
}

/// Errors when building a formula from integers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// A `0` was found inside a clause.
    /// In DIMACS `0` terminates a clause, and so is never a literal.
    ZeroLiteral,

    /// A literal outside the range of atoms.
    LiteralOutOfRange(i64),
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLiteral => write!(f, "Malformed formula: 0 is not a literal."),
            Self::LiteralOutOfRange(int) => {
                write!(f, "Malformed formula: literal {int} is out of range.")
            }
        }
    }
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue reading a specific line.
    Line(usize),

    /// A token on a specific line which is not an integer.
    Token { line: usize, token: String },

    /// A clause on a specific line could not be made into part of a formula.
    Formula { line: usize, error: FormulaError },

    /// A line count was required, but something else was found.
    Count(String),

    /// No file was found, or the file could not be opened.
    NoFile(PathBuf),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(line) => write!(f, "Failed to read line {line}."),
            Self::Token { line, token } => {
                write!(f, "Unexpected token '{token}' on line {line}.")
            }
            Self::Formula { line, error } => write!(f, "Line {line}: {error}"),
            Self::Count(found) => write!(f, "Expected a count of clauses, found '{found}'."),
            Self::NoFile(path) => write!(f, "Failed to open {path:?}."),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when extending a valuation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValuationError {
    /// The atom already has the opposite value.
    Conflict { atom: Atom, literal: IntLiteral },
}

impl std::fmt::Display for ValuationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conflict { atom, literal } => {
                write!(f, "Atom {atom} already has a value conflicting with {literal}.")
            }
        }
    }
}

impl From<ValuationError> for ErrorKind {
    fn from(e: ValuationError) -> Self {
        ErrorKind::Valuation(e)
    }
}
