//! Determines satisfiability by saturating a formula under resolution.
//!
//! # Overview
//!
//! A working set of clauses is initialised to the clauses of the formula.
//! Then, in rounds, each (unordered) pair of distinct clauses in the working set is resolved, if possible:
//!
//! - If some resolvent is the empty clause the formula is unsatisfiable, and saturation stops immediately.
//! - Otherwise, the resolvents of the round are collected.
//!
//! If every resolvent of a round is already in the working set, the working set is closed under resolution without containing the empty clause, and so the formula is satisfiable.
//! Otherwise, the resolvents are added to the working set and another round begins.
//!
//! Tautological clauses are true on every valuation, and so are dropped from the working set, whether given or derived.
//!
//! Saturation is intentionally naive.
//! Each round compares every pair of clauses, and there is no subsumption, so the working set may grow very large.
//!
//! # Choice of pivot
//!
//! Two clauses may clash on more than one literal.
//! Clauses are held with literals in increasing order, and the pivot is the least literal of the first clause whose negation is in the second clause.
//! Clauses in the working set are ordered in turn, so the resolvents of each round do not depend on the order of the given formula.
//!
//! ```rust
//! # use trisat::structures::formula::Formula;
//! # use trisat::procedures::resolution;
//! let formula = Formula::from_clauses(vec![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]]).unwrap();
//! assert!(!resolution::decide(&formula));
//!
//! let formula = Formula::from_clauses(vec![vec![1, 2], vec![-1, -2]]).unwrap();
//! assert!(resolution::decide(&formula));
//! ```

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        formula::Formula,
        literal::{CLiteral, Literal},
    },
};

/// Whether the formula is satisfiable.
pub fn decide(formula: &Formula) -> bool {
    let mut clauses: BTreeSet<CClause> = formula
        .clauses()
        .iter()
        .filter(|clause| !clause.is_tautology())
        .map(|clause| sorted_clause(clause.iter().copied()))
        .collect();

    if clauses.iter().any(|clause| clause.is_empty()) {
        log::debug!(target: targets::RESOLUTION, "Empty clause given");
        return false;
    }

    let mut fresh: BTreeSet<CClause> = BTreeSet::default();
    let mut round: usize = 0;

    loop {
        round += 1;

        {
            let pairs = clauses.iter().collect::<Vec<_>>();
            for (index, first) in pairs.iter().enumerate() {
                for second in &pairs[index + 1..] {
                    if let Some(resolvent) = resolve_pair(first, second) {
                        if resolvent.is_empty() {
                            log::debug!(target: targets::RESOLUTION,
                                "Empty clause derived in round {round}"
                            );
                            return false;
                        }
                        if !resolvent.is_tautology() {
                            fresh.insert(resolvent);
                        }
                    }
                }
            }
        }

        if fresh.is_subset(&clauses) {
            log::debug!(target: targets::RESOLUTION,
                "Saturated after {round} rounds with {} clauses",
                clauses.len()
            );
            return true;
        }

        log::trace!(target: targets::RESOLUTION,
            "Round {round}: {} clauses and {} resolvents",
            clauses.len(),
            fresh.len()
        );

        clauses.append(&mut fresh);
    }
}

/// The resolvent of two clauses on the least literal of `first` whose negation is in `second`, if any.
///
/// Both clauses are required to be sorted.
fn resolve_pair(first: &[CLiteral], second: &[CLiteral]) -> Option<CClause> {
    let pivot = *first
        .iter()
        .find(|literal| second.binary_search(&literal.negate()).is_ok())?;

    let negation = pivot.negate();

    Some(sorted_clause(
        first
            .iter()
            .copied()
            .filter(|literal| *literal != pivot)
            .chain(second.iter().copied().filter(|literal| *literal != negation)),
    ))
}

/// A clause with literals in increasing order and without duplicates.
fn sorted_clause(literals: impl Iterator<Item = CLiteral>) -> CClause {
    let mut clause = literals.collect::<CClause>();
    clause.sort_unstable();
    clause.dedup();
    clause
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_pivot() {
        // Clashes on both 1 and 2, and -2 < 1
        assert_eq!(resolve_pair(&[-2, 1], &[-1, 2]), Some(vec![-1, 1]));
        assert_eq!(resolve_pair(&[1, 3], &[-1, 3]), Some(vec![3]));
        assert_eq!(resolve_pair(&[1], &[-1]), Some(vec![]));
        assert_eq!(resolve_pair(&[1, 2], &[1, 3]), None);
    }

    #[test]
    fn tautology_keeps_complement() {
        assert_eq!(resolve_pair(&[-3, 3], &[-3]), Some(vec![-3]));
        assert_eq!(resolve_pair(&[-3], &[-3, 3]), Some(vec![-3]));
    }

    #[test]
    fn satisfiable_with_double_clash() {
        let formula =
            Formula::from_clauses(vec![vec![-3, -5], vec![-3, -4], vec![4, 5], vec![3, -5]])
                .unwrap();
        assert!(decide(&formula));

        let formula = Formula::from_clauses(vec![vec![1, -1], vec![1]]).unwrap();
        assert!(decide(&formula));
    }

    #[test]
    fn given_empty_clause() {
        let formula = Formula::from_clauses(vec![Vec::<CLiteral>::new()]).unwrap();
        assert!(!decide(&formula));
    }
}
