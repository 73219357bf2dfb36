//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, without duplicates.
//! The order of literals does not change the meaning of a clause, though the procedures read literals in order when a choice is to be made.
//!
//! ```rust
//! # use trisat::structures::clause::{canonical_clause, Clause};
//! # use trisat::structures::valuation::Valuation;
//! let clause = canonical_clause([23, -41, -3, 23, 15]);
//!
//! assert_eq!(clause.size(), 4);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 15 0");
//!
//! let valuation = Valuation::from_literals([-23, 41, 3]).unwrap();
//! assert!(!clause.satisfied_on(&valuation));
//! assert!(!clause.falsified_on(&valuation));
//!
//! let valuation = valuation.with(-15).unwrap();
//! assert!(clause.falsified_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;

    /// Whether some literal of the clause is true on the valuation.
    fn satisfied_on(&self, valuation: &Valuation) -> bool;

    /// Whether every literal of the clause is false on the valuation.
    ///
    /// The empty clause is falsified on every valuation.
    fn falsified_on(&self, valuation: &Valuation) -> bool;
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(&format!("{literal} "));
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn is_tautology(&self) -> bool {
        self.iter().any(|literal| self.contains(&literal.negate()))
    }

    fn satisfied_on(&self, valuation: &Valuation) -> bool {
        self.iter().any(|literal| valuation.contains(*literal))
    }

    fn falsified_on(&self, valuation: &Valuation) -> bool {
        self.iter().all(|literal| valuation.contains(literal.negate()))
    }
}

/// A canonical clause from some literals, keeping the first occurrence of each literal.
pub fn canonical_clause(literals: impl IntoIterator<Item = CLiteral>) -> CClause {
    let mut clause = CClause::default();
    for literal in literals {
        if !clause.contains(&literal) {
            clause.push(literal);
        }
    }
    clause
}
