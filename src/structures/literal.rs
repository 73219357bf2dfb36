//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity.
//!
//! The canonical implementation of the literal trait is a signed integer, with the magnitude of the integer the atom and the sign of the integer the polarity.
//!
//! ```rust
//! # use trisat::structures::literal::{IntLiteral, Literal};
//! let literal = IntLiteral::new(79, false);
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.negate(), 79);
//! ```
//!
//! Literals are ordered as integers, so `-2 < -1 < 1 < 2`.

use crate::{
    structures::atom::{Atom, ATOM_MAX},
    types::err::{self},
};

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}

/// Checks an integer may be used as a literal, and returns the literal if so.
///
/// ```rust
/// # use trisat::structures::literal::literal_from_int;
/// assert_eq!(literal_from_int(-3), Ok(-3));
/// assert!(literal_from_int(0).is_err());
/// assert!(literal_from_int(i64::from(i32::MIN)).is_err());
/// ```
pub fn literal_from_int(int: i64) -> Result<CLiteral, err::FormulaError> {
    if int == 0 {
        return Err(err::FormulaError::ZeroLiteral);
    }
    if int.unsigned_abs() > u64::from(ATOM_MAX) {
        return Err(err::FormulaError::LiteralOutOfRange(int));
    }
    Ok(int as CLiteral)
}
