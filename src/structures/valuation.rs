//! Valuations, aka. (partial) assignments of values to atoms.
//!
//! A valuation is represented by the set of literals which are true on the valuation.
//! So, an atom *a* has value true when *a* is a member, value false when -*a* is a member, and no value otherwise.
//!
//! Valuations are extended by [with](Valuation::with), which returns a fresh valuation and leaves the original untouched.
//! An extension which would give some atom both values is refused.
//!
//! ```rust
//! # use trisat::structures::valuation::Valuation;
//! let valuation = Valuation::default().with(1).unwrap().with(-2).unwrap();
//!
//! assert_eq!(valuation.value_of(1), Some(true));
//! assert_eq!(valuation.value_of(2), Some(false));
//! assert_eq!(valuation.value_of(3), None);
//!
//! assert!(valuation.with(-1).is_err());
//! ```
//!
//! Literals are stored in order, so iteration and [as_dimacs](Valuation::as_dimacs) are deterministic.

use std::collections::BTreeSet;

use crate::{
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A set of literals, without a literal and its negation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Valuation {
    literals: BTreeSet<CLiteral>,
}

impl Valuation {
    /// A valuation from some literals, or an error if the literals conflict.
    pub fn from_literals(
        literals: impl IntoIterator<Item = CLiteral>,
    ) -> Result<Self, err::ValuationError> {
        let mut valuation = Valuation::default();
        for literal in literals {
            valuation.insert(literal)?;
        }
        Ok(valuation)
    }

    /// A copy of the valuation extended with the literal.
    pub fn with(&self, literal: CLiteral) -> Result<Self, err::ValuationError> {
        let mut extended = self.clone();
        extended.insert(literal)?;
        Ok(extended)
    }

    fn insert(&mut self, literal: CLiteral) -> Result<(), err::ValuationError> {
        if self.literals.contains(&literal.negate()) {
            return Err(err::ValuationError::Conflict {
                atom: literal.atom(),
                literal,
            });
        }
        self.literals.insert(literal);
        Ok(())
    }

    /// Whether the literal is true on the valuation.
    pub fn contains(&self, literal: CLiteral) -> bool {
        self.literals.contains(&literal)
    }

    /// Whether the atom of the literal has some value on the valuation.
    pub fn is_assigned(&self, literal: CLiteral) -> bool {
        self.contains(literal) || self.contains(literal.negate())
    }

    /// The value of the atom, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        let positive = CLiteral::new(atom, true);
        if self.contains(positive) {
            Some(true)
        } else if self.contains(positive.negate()) {
            Some(false)
        } else {
            None
        }
    }

    /// The count of atoms with a value.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// An iterator over the true literals, in increasing order.
    pub fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.literals.iter()
    }

    /// The valuation as a DIMACS value line, ordered by atom and terminated by `0`.
    pub fn as_dimacs(&self) -> String {
        let mut by_atom = self.literals.iter().copied().collect::<Vec<_>>();
        by_atom.sort_by_key(|literal| literal.atom());

        let mut the_string = String::default();
        for literal in by_atom {
            the_string.push_str(&format!("{literal} "));
        }
        the_string.push('0');
        the_string
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_dimacs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_refused() {
        let valuation = Valuation::from_literals([3, -4]).unwrap();
        assert_eq!(
            valuation.with(4),
            Err(err::ValuationError::Conflict {
                atom: 4,
                literal: 4
            })
        );
        assert!(Valuation::from_literals([1, -1]).is_err());
    }

    #[test]
    fn dimacs_by_atom() {
        let valuation = Valuation::from_literals([3, -1, -2]).unwrap();
        assert_eq!(valuation.as_dimacs(), "-1 -2 3 0");
    }
}
