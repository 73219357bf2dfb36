//! Determines satisfiability by Davis-Putnam variable elimination.
//!
//! # Overview
//!
//! Elimination repeatedly replaces a formula with an equisatisfiable formula in which some atom no longer occurs.
//! On each step exactly one of the following applies, tried in order:
//!
//! 1. If some clause is empty, the formula is unsatisfiable.
//! 2. If there are no clauses, the formula is satisfiable.
//! 3. If some atom is pure, every clause containing the pure literal is removed.
//! 4. If some clause is a unit, every clause containing the unit is removed and the negation of the unit is removed from every other clause.
//!    If removing the negation empties a clause, the formula is unsatisfiable.
//! 5. Otherwise, the atom of the first literal of the first clause is eliminated by resolution.
//!    The clauses are partitioned into those containing the atom positively, those containing the atom negatively, and the rest.
//!    Each positive clause is resolved with each negative clause, tautological resolvents are discarded, and the formula becomes the rest together with the resolvents.
//!
//! Each step removes some atom from the formula (or some tautological clause, which are never created), so elimination terminates.
//!
//! Elimination may produce up to |positive| × |negative| resolvents for a single atom, and resolvents are not checked for subsumption or duplication.
//! So, the formula may grow quickly, and this is the classical behaviour of the procedure.
//!
//! Every step ends by continuing with the revised formula, and so the procedure is a loop over a working collection of clauses.
//!
//! ```rust
//! # use trisat::structures::formula::Formula;
//! # use trisat::procedures::dp;
//! let formula = Formula::from_clauses(vec![vec![1, 2], vec![-1, 2], vec![-2, 3]]).unwrap();
//! assert!(dp::decide(&formula));
//!
//! let formula = Formula::from_clauses(vec![vec![1], vec![-1]]).unwrap();
//! assert!(!dp::decide(&formula));
//! ```

use crate::{
    misc::log::targets::{self},
    procedures::pure::first_pure_literal,
    structures::{
        atom::Atom,
        clause::{canonical_clause, CClause, Clause},
        formula::Formula,
        literal::{CLiteral, Literal},
    },
};

/// Whether the formula is satisfiable.
pub fn decide(formula: &Formula) -> bool {
    let mut clauses = formula.clauses().to_vec();
    let mut steps: usize = 0;

    let verdict = loop {
        steps += 1;

        if clauses.iter().any(|clause| clause.is_empty()) {
            break false;
        }

        if clauses.is_empty() {
            break true;
        }

        if let Some(pure) = first_pure_literal(clauses.iter().flatten()) {
            log::trace!(target: targets::DP, "Pure literal {pure}");
            clauses.retain(|clause| !clause.contains(&pure));
            continue;
        }

        if let Some(unit) = first_unit(&clauses) {
            log::trace!(target: targets::DP, "Unit {unit}");
            clauses = unit_propagate(clauses, unit);
            continue;
        }

        let pivot = match clauses.first().and_then(|clause| clause.first()) {
            Some(literal) => literal.atom(),
            None => break false,
        };
        clauses = eliminate(clauses, pivot);
    };

    log::debug!(target: targets::DP, "Verdict {verdict} after {steps} steps");
    verdict
}

/// The literal of the first unit clause, if one exists.
fn first_unit(clauses: &[CClause]) -> Option<CLiteral> {
    clauses
        .iter()
        .find(|clause| clause.size() == 1)
        .and_then(|clause| clause.first().copied())
}

/// Removes every clause containing `unit` and removes the negation of `unit` from every other clause.
///
/// If some clause would become empty, the result is the formula containing only the empty clause.
fn unit_propagate(clauses: Vec<CClause>, unit: CLiteral) -> Vec<CClause> {
    let negation = unit.negate();
    let mut propagated = Vec::with_capacity(clauses.len());

    for mut clause in clauses {
        if clause.contains(&unit) {
            continue;
        }
        if clause.contains(&negation) {
            clause.retain(|literal| *literal != negation);
            if clause.is_empty() {
                return vec![CClause::default()];
            }
        }
        propagated.push(clause);
    }

    propagated
}

/// Eliminates `atom` from the clauses by resolution.
fn eliminate(clauses: Vec<CClause>, atom: Atom) -> Vec<CClause> {
    let positive = CLiteral::new(atom, true);
    let negative = positive.negate();

    let mut positive_clauses = Vec::default();
    let mut negative_clauses = Vec::default();
    let mut rest = Vec::default();

    // A tautological clause is both positive and negative.
    for clause in clauses {
        let has_positive = clause.contains(&positive);
        let has_negative = clause.contains(&negative);
        match (has_positive, has_negative) {
            (false, false) => rest.push(clause),
            (true, false) => positive_clauses.push(clause),
            (false, true) => negative_clauses.push(clause),
            (true, true) => {
                positive_clauses.push(clause.clone());
                negative_clauses.push(clause);
            }
        }
    }

    let rest_count = rest.len();

    for positive_clause in &positive_clauses {
        for negative_clause in &negative_clauses {
            let resolvent = canonical_clause(
                positive_clause
                    .iter()
                    .filter(|literal| **literal != positive)
                    .chain(negative_clause.iter().filter(|literal| **literal != negative))
                    .copied(),
            );
            if !resolvent.is_tautology() {
                rest.push(resolvent);
            }
        }
    }

    log::trace!(target: targets::DP,
        "Eliminated {atom}: {} × {} clauses to {} resolvents",
        positive_clauses.len(),
        negative_clauses.len(),
        rest.len() - rest_count
    );

    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn propagation_to_empty() {
        let clauses = vec![vec![1], vec![-1], vec![2, 3]];
        assert_eq!(unit_propagate(clauses, 1), vec![CClause::default()]);
    }

    #[test]
    fn propagation() {
        let clauses = vec![vec![1, 2], vec![-1, 3, 4], vec![5]];
        assert_eq!(unit_propagate(clauses, 1), vec![vec![3, 4], vec![5]]);
    }

    #[test]
    fn elimination_skips_tautologies() {
        let clauses = vec![vec![1, 2], vec![1, -2], vec![-1, 2, 3], vec![4]];
        assert_eq!(eliminate(clauses, 1), vec![vec![4], vec![2, 3]]);

        let clauses = vec![vec![1, 2], vec![-1, -2]];
        assert!(eliminate(clauses, 1).is_empty());
    }
}
