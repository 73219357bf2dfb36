//! Procedures to identify pure literals.
//!
//! An atom is pure relative to some clauses if every occurrence of the atom in the clauses has the same polarity.
//! Both [DP](crate::procedures::dp) and [DPLL](crate::procedures::dpll) remove clauses containing a pure literal, though DPLL only counts occurrences of atoms without a value.
use std::collections::HashMap;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

// General order for pairs related to booleans is 0 is false, 1 is true
/// Given an iterator over the literals of some clauses, returns the first pure literal, if one exists.
///
/// Here, 'first' is relative to the first occurrence of the atom of a literal.
pub fn first_pure_literal<'l>(literals: impl Iterator<Item = &'l CLiteral>) -> Option<CLiteral> {
    let mut order: Vec<Atom> = Vec::default();
    let mut polarities: HashMap<Atom, [bool; 2]> = HashMap::default();

    for literal in literals {
        let seen = polarities.entry(literal.atom()).or_insert_with(|| {
            order.push(literal.atom());
            [false, false]
        });
        seen[literal.polarity() as usize] = true;
    }

    order.into_iter().find_map(|atom| match polarities.get(&atom) {
        Some([false, true]) => Some(CLiteral::new(atom, true)),
        Some([true, false]) => Some(CLiteral::new(atom, false)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_by_occurrence() {
        let clauses = [vec![3, 1], vec![-3, -2], vec![2, -1], vec![4]];
        assert_eq!(first_pure_literal(clauses.iter().flatten()), Some(4));

        let clauses = [vec![3, -1], vec![-2, 3], vec![2]];
        assert_eq!(first_pure_literal(clauses.iter().flatten()), Some(3));

        let clauses = [vec![-5, 1], vec![-1]];
        assert_eq!(first_pure_literal(clauses.iter().flatten()), Some(-5));
    }

    #[test]
    fn no_pure() {
        let clauses = [vec![1, 2], vec![-1, -2]];
        assert_eq!(first_pure_literal(clauses.iter().flatten()), None);
        assert_eq!(first_pure_literal([].iter()), None);
    }
}
