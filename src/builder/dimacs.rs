//! Reading formulas from DIMACS-like text.
//!
//! Each line which is not skipped is read as one clause:
//! - Blank lines, and lines beginning with `c`, `%`, or `p`, are skipped.
//! - Every other line is split on whitespace, every `0` token is discarded, and the remaining tokens are read as literals.
//! - A line without any literals is dropped.
//!
//! So, a clause may not span multiple lines, and `1 2 0 3 0` is read as the single clause `1 2 3`.
//!
//! A problem line `p cnf <atoms> <clauses>` is not required, though if present the counts are noted in the [ParserInfo].

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        formula::Formula,
        literal::{literal_from_int, CLiteral},
    },
    types::err::{self, ErrorKind},
};

/// Details of a parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given in the problem line, if any.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the problem line, if any.
    pub expected_clauses: Option<usize>,

    /// The count of distinct atoms read.
    pub added_atoms: usize,

    /// The count of clauses read.
    pub added_clauses: usize,
}

/// A formula, together with details of the parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedFormula {
    pub formula: Formula,
    pub info: ParserInfo,
}

/// Reads DIMACS text into a formula.
///
/// ```rust
/// # use trisat::builder::dimacs::parse_dimacs;
/// let dimacs = b"
/// c An example
/// p cnf 3 2
///  1 -3 0
///  2  3 -1 0
/// %
/// 0
/// ";
///
/// let parsed = parse_dimacs(dimacs.as_slice()).unwrap();
///
/// assert_eq!(parsed.formula.clause_count(), 2);
/// assert_eq!(parsed.info.expected_atoms, Some(3));
/// assert_eq!(parsed.info.added_clauses, 2);
/// ```
pub fn parse_dimacs(mut reader: impl BufRead) -> Result<ParsedFormula, ErrorKind> {
    let mut info = ParserInfo::default();
    let mut clauses: Vec<CClause> = Vec::default();
    let mut buffer = String::with_capacity(1024);
    let mut line_counter = 0;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter + 1))),
        }

        let line = buffer.trim();
        match line.chars().next() {
            None | Some('c') | Some('%') => continue,

            Some('p') => {
                let mut problem_details = line.split_whitespace().skip(2);
                info.expected_atoms = problem_details.next().and_then(|s| s.parse().ok());
                info.expected_clauses = problem_details.next().and_then(|s| s.parse().ok());
                if info.expected_atoms.is_none() || info.expected_clauses.is_none() {
                    log::warn!(target: targets::PARSER, "Malformed problem line: {line}");
                }
            }

            Some(_) => {
                if let Some(clause) = clause_from_line(line, line_counter)? {
                    clauses.push(clause);
                }
            }
        }
    }

    let formula = Formula::from_clauses(clauses)?;
    info.added_atoms = formula.atom_count();
    info.added_clauses = formula.clause_count();

    if let Some(expected) = info.expected_clauses {
        if expected != info.added_clauses {
            log::warn!(target: targets::PARSER,
                "Expected {expected} clauses, read {}",
                info.added_clauses
            );
        }
    }
    if let Some(expected) = info.expected_atoms {
        if expected < info.added_atoms {
            log::warn!(target: targets::PARSER,
                "Expected {expected} atoms, read {}",
                info.added_atoms
            );
        }
    }

    log::debug!(target: targets::PARSER,
        "Read {} clauses over {} atoms from {line_counter} lines",
        info.added_clauses,
        info.added_atoms
    );

    Ok(ParsedFormula { formula, info })
}

/// Reads the DIMACS file at `path` into a formula.
///
/// With the `xz` feature, files with an `xz` extension are decompressed.
pub fn parse_dimacs_file(path: &Path) -> Result<ParsedFormula, ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ErrorKind::from(err::ParseError::NoFile(path.to_owned()))),
    };

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            parse_dimacs(BufReader::new(xz2::read::XzDecoder::new(file)))
        }

        _ => parse_dimacs(BufReader::new(file)),
    }
}

/// Reads lines of literals into a formula, without skipping comments or a problem line.
///
/// ```rust
/// # use trisat::builder::dimacs::parse_clause_lines;
/// let formula = parse_clause_lines(vec!["1 2 0", "", "-1 0"]).unwrap();
/// assert_eq!(formula.clauses(), &[vec![1, 2], vec![-1]]);
///
/// assert!(parse_clause_lines(vec!["1 p 0"]).is_err());
/// ```
pub fn parse_clause_lines<S: AsRef<str>>(
    lines: impl IntoIterator<Item = S>,
) -> Result<Formula, ErrorKind> {
    let mut clauses: Vec<CClause> = Vec::default();
    for (index, line) in lines.into_iter().enumerate() {
        if let Some(clause) = clause_from_line(line.as_ref(), index + 1)? {
            clauses.push(clause);
        }
    }
    Ok(Formula::from_clauses(clauses)?)
}

/// The literals of a line, or None if the line has no literals.
fn clause_from_line(line: &str, line_number: usize) -> Result<Option<CClause>, err::ParseError> {
    let mut literals: Vec<CLiteral> = Vec::default();

    for token in line.split_whitespace() {
        if token == "0" {
            continue;
        }

        let int = match token.parse::<i64>() {
            Ok(int) => int,
            Err(_) => {
                return Err(err::ParseError::Token {
                    line: line_number,
                    token: token.to_owned(),
                })
            }
        };

        match literal_from_int(int) {
            Ok(literal) => literals.push(literal),
            Err(error) => {
                return Err(err::ParseError::Formula {
                    line: line_number,
                    error,
                })
            }
        }
    }

    match literals.is_empty() {
        true => Ok(None),
        false => Ok(Some(literals)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_literals() {
        assert_eq!(clause_from_line(" 1  -2 0 ", 1), Ok(Some(vec![1, -2])));
        assert_eq!(clause_from_line("0", 1), Ok(None));
        assert_eq!(clause_from_line("", 1), Ok(None));
    }

    #[test]
    fn zero_like_tokens() {
        assert_eq!(
            clause_from_line("1 -0 0", 4),
            Err(err::ParseError::Formula {
                line: 4,
                error: err::FormulaError::ZeroLiteral
            })
        );
    }
}
