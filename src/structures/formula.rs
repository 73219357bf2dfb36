//! Formulas, aka. a collection of clauses, interpreted as the conjunction of those clauses.
//!
//! A formula is built once, from integers or by [parsing](crate::builder::dimacs), and is read-only after.
//! When built:
//! - Each clause is made [canonical](crate::structures::clause::canonical_clause), so duplicate literals collapse.
//! - The order of clauses is kept, and duplicate clauses are kept.
//! - `0` is refused as a literal.
//!
//! ```rust
//! # use trisat::structures::formula::Formula;
//! # use trisat::types::err::FormulaError;
//! let formula = Formula::from_clauses(vec![vec![1, -2, 1], vec![2, 3]]).unwrap();
//!
//! assert_eq!(formula.clause_count(), 2);
//! assert_eq!(formula.atom_count(), 3);
//! assert_eq!(formula.clauses()[0], vec![1, -2]);
//!
//! assert_eq!(
//!     Formula::from_clauses(vec![vec![1, 0, 2]]),
//!     Err(FormulaError::ZeroLiteral)
//! );
//! ```

use std::collections::BTreeSet;

use crate::{
    structures::{
        atom::Atom,
        clause::{canonical_clause, CClause, Clause},
        literal::{literal_from_int, CLiteral},
        valuation::Valuation,
    },
    types::err::{self},
};

/// A conjunction of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<CClause>,
}

impl Formula {
    /// A formula from clauses of literals.
    pub fn from_clauses(
        clauses: impl IntoIterator<Item = impl IntoIterator<Item = CLiteral>>,
    ) -> Result<Self, err::FormulaError> {
        let mut the_clauses = Vec::default();
        for clause in clauses {
            let mut literals = Vec::default();
            for literal in clause {
                literals.push(literal_from_int(i64::from(literal))?);
            }
            the_clauses.push(canonical_clause(literals));
        }
        Ok(Formula {
            clauses: the_clauses,
        })
    }

    /// The clauses of the formula, in the order given.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The atoms which occur in some clause of the formula, in increasing order.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.atoms())
            .collect()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms().len()
    }

    /// Whether some clause of the formula is empty, and so the formula is false.
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// Whether every clause of the formula has some literal true on the valuation.
    pub fn is_satisfied_by(&self, valuation: &Valuation) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.satisfied_on(valuation))
    }

    /// The formula extended with a clause.
    ///
    /// The original formula is untouched.
    pub fn with_clause(
        &self,
        clause: impl IntoIterator<Item = CLiteral>,
    ) -> Result<Self, err::FormulaError> {
        let mut extended = self.clone();
        let mut literals = Vec::default();
        for literal in clause {
            literals.push(literal_from_int(i64::from(literal))?);
        }
        extended.clauses.push(canonical_clause(literals));
        Ok(extended)
    }

    /// The formula without the clause at `index`, or a copy of the formula if there is no such clause.
    pub fn without_clause(&self, index: usize) -> Self {
        Formula {
            clauses: self
                .clauses
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, clause)| clause.clone())
                .collect(),
        }
    }
}

/// The formula in DIMACS form, with a problem line.
impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max_atom = self.atoms().last().copied().unwrap_or(0);
        writeln!(f, "p cnf {} {}", max_atom, self.clause_count())?;
        for clause in &self.clauses {
            writeln!(f, "{}", clause.as_dimacs(true))?;
        }
        Ok(())
    }
}
