//! Determines satisfiability by DPLL backtracking search, returning a model when one exists.
//!
//! # Overview
//!
//! Search considers a formula together with a partial valuation (the model so far).
//! On each step the first of the following which applies is used:
//!
//! 1. If every clause has some literal true on the model, the model is returned.
//! 2. If some clause has every literal false on the model, the branch fails.
//! 3. If some clause has exactly one literal whose negation is not in the model, and the atom of that literal has no value, the literal is assumed.
//! 4. If some atom without a value is pure among the literals without a value, the pure literal is assumed.
//! 5. Otherwise, the atom of the first literal without a value is decided.
//!    First, the atom is assumed true, and if that branch fails, the atom is assumed false.
//!
//! On assuming a literal the formula is simplified: clauses containing the literal are removed, and the negation of the literal is removed from every other clause.
//! A clause emptied by simplification is not noticed immediately, and instead fails the following step by (2).
//!
//! Backtracking is chronological, and no clauses are learnt.
//!
//! # Implementation
//!
//! Rather than recursion, search is made over an explicit stack of frames, so the depth of search is limited only by available memory.
//! Steps (3) and (4) replace the current frame.
//! Step (5) pushes the false branch and then the true branch, so the false branch is only popped once every frame of the true branch has failed.
//! And, the first model found is returned without examining any other frame.
//!
//! ```rust
//! # use trisat::structures::formula::Formula;
//! # use trisat::procedures::dpll;
//! let formula = Formula::from_clauses(vec![vec![1, 2], vec![-1, -2]]).unwrap();
//!
//! let model = dpll::decide(&formula).expect("satisfiable");
//! assert!(formula.is_satisfied_by(&model));
//! ```

use crate::{
    misc::log::targets::{self},
    procedures::pure::first_pure_literal,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        formula::Formula,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// A point in the search.
///
/// If `assume` is some literal, the clauses and model are those prior to assuming the literal.
struct Frame {
    clauses: Vec<CClause>,
    model: Valuation,
    assume: Option<CLiteral>,
}

/// A model of the formula, if the formula is satisfiable.
pub fn decide(formula: &Formula) -> Option<Valuation> {
    let mut stack = vec![Frame {
        clauses: formula.clauses().to_vec(),
        model: Valuation::default(),
        assume: None,
    }];

    let mut decisions: usize = 0;
    let mut failures: usize = 0;

    'search: while let Some(frame) = stack.pop() {
        let (mut clauses, mut model) = match frame.assume {
            None => (frame.clauses, frame.model),
            Some(literal) => match frame.model.with(literal) {
                Ok(model) => (simplify(&frame.clauses, literal), model),
                Err(_) => {
                    failures += 1;
                    continue 'search;
                }
            },
        };

        loop {
            if clauses.iter().all(|clause| clause.satisfied_on(&model)) {
                log::debug!(target: targets::DPLL,
                    "Model found after {decisions} decisions and {failures} failed branches"
                );
                return Some(model);
            }

            if clauses.iter().any(|clause| clause.falsified_on(&model)) {
                log::trace!(target: targets::DPLL, "Falsified at model {model}");
                failures += 1;
                continue 'search;
            }

            let forced = match unit_literal(&clauses, &model) {
                Some(unit) => {
                    log::trace!(target: targets::DPLL, "Unit {unit}");
                    Some(unit)
                }
                None => match pure_literal(&clauses, &model) {
                    Some(pure) => {
                        log::trace!(target: targets::DPLL, "Pure literal {pure}");
                        Some(pure)
                    }
                    None => None,
                },
            };

            match forced {
                Some(literal) => match model.with(literal) {
                    Ok(extended) => {
                        clauses = simplify(&clauses, literal);
                        model = extended;
                    }
                    Err(_) => {
                        failures += 1;
                        continue 'search;
                    }
                },

                None => {
                    let Some(atom) = first_unassigned(&clauses, &model) else {
                        failures += 1;
                        continue 'search;
                    };

                    decisions += 1;
                    log::trace!(target: targets::DPLL, "Decision on {atom}");
                    let positive = CLiteral::new(atom, true);

                    stack.push(Frame {
                        clauses: clauses.clone(),
                        model: model.clone(),
                        assume: Some(positive.negate()),
                    });
                    stack.push(Frame {
                        clauses,
                        model,
                        assume: Some(positive),
                    });
                    continue 'search;
                }
            }
        }
    }

    log::debug!(target: targets::DPLL,
        "No model after {decisions} decisions and {failures} failed branches"
    );
    None
}

/// Whether the formula is satisfiable.
pub fn is_satisfiable(formula: &Formula) -> bool {
    decide(formula).is_some()
}

/// Removes every clause satisfied by `literal` and removes the negation of `literal` from every other clause.
///
/// Clauses may become empty.
fn simplify(clauses: &[CClause], literal: CLiteral) -> Vec<CClause> {
    let negation = literal.negate();
    clauses
        .iter()
        .filter(|clause| !clause.contains(&literal))
        .map(|clause| {
            clause
                .iter()
                .copied()
                .filter(|l| *l != negation)
                .collect()
        })
        .collect()
}

/// The first literal which is the only literal of some clause whose negation is not in the model, if the atom of that literal has no value.
fn unit_literal(clauses: &[CClause], model: &Valuation) -> Option<CLiteral> {
    for clause in clauses {
        let mut survivors = clause
            .literals()
            .filter(|literal| !model.contains(literal.negate()));

        if let (Some(survivor), None) = (survivors.next(), survivors.next()) {
            if !model.is_assigned(*survivor) {
                return Some(*survivor);
            }
        }
    }
    None
}

/// The first pure literal among the literals of the clauses whose atom has no value.
fn pure_literal(clauses: &[CClause], model: &Valuation) -> Option<CLiteral> {
    first_pure_literal(
        clauses
            .iter()
            .flatten()
            .filter(|literal| !model.is_assigned(**literal)),
    )
}

/// The atom of the first literal whose atom has no value.
fn first_unassigned(clauses: &[CClause], model: &Valuation) -> Option<Atom> {
    clauses
        .iter()
        .flatten()
        .find(|literal| !model.is_assigned(**literal))
        .map(|literal| literal.atom())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simplification_keeps_empty_clauses() {
        let clauses = vec![vec![1, 2], vec![-1], vec![-1, 3]];
        assert_eq!(simplify(&clauses, 1), vec![vec![], vec![3]]);
    }

    #[test]
    fn units_skip_assigned() {
        let model = Valuation::from_literals([-1]).unwrap();
        assert_eq!(unit_literal(&[vec![1, 2]], &model), Some(2));

        let model = Valuation::from_literals([-1, 2]).unwrap();
        assert_eq!(unit_literal(&[vec![1, 2]], &model), None);
        assert_eq!(unit_literal(&[vec![1, 2, 3]], &Valuation::default()), None);
    }

    #[test]
    fn decision_prefers_true() {
        let formula = Formula::from_clauses(vec![vec![-1, 2], vec![1, -2]]).unwrap();
        let model = decide(&formula).expect("satisfiable");
        assert_eq!(model.value_of(1), Some(true));
        assert_eq!(model.value_of(2), Some(true));
    }
}
