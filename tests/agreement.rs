use rand::{rngs::StdRng, Rng, SeedableRng};

use trisat::{
    procedures::{dp, dpll, resolution, Engine},
    structures::{formula::Formula, literal::CLiteral},
};

/// A formula of up to `max_clauses` clauses, each of one to three literals over atoms `1..=atoms`.
fn random_formula(rng: &mut impl Rng, atoms: CLiteral, max_clauses: usize) -> Formula {
    let clause_count = rng.gen_range(0..=max_clauses);
    let mut clauses = Vec::with_capacity(clause_count);

    for _ in 0..clause_count {
        let length = rng.gen_range(1..=3);
        let clause = (0..length)
            .map(|_| {
                let atom = rng.gen_range(1..=atoms);
                match rng.gen_bool(0.5) {
                    true => atom,
                    false => -atom,
                }
            })
            .collect::<Vec<_>>();
        clauses.push(clause);
    }

    Formula::from_clauses(clauses).unwrap()
}

/// Satisfiability by trying every valuation of the atoms.
fn brute_force(formula: &Formula) -> bool {
    let atoms = formula.atoms().into_iter().collect::<Vec<_>>();

    (0..(1_u64 << atoms.len())).any(|mask| {
        formula.clauses().iter().all(|clause| {
            clause.iter().any(|literal| {
                let index = atoms
                    .iter()
                    .position(|atom| *atom == literal.unsigned_abs())
                    .unwrap();
                let value = mask & (1 << index) != 0;
                value == literal.is_positive()
            })
        })
    })
}

mod engines {
    use super::*;

    #[test]
    fn agree_with_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let formula = random_formula(&mut rng, 4, 10);
            let expected = brute_force(&formula);

            for engine in Engine::ALL {
                assert_eq!(
                    engine.decide(&formula).satisfiable,
                    expected,
                    "{engine} on {formula}"
                );
            }
        }
    }

    #[test]
    fn models_satisfy() {
        let mut rng = StdRng::seed_from_u64(73);

        for _ in 0..300 {
            let formula = random_formula(&mut rng, 8, 30);
            match dpll::decide(&formula) {
                Some(model) => assert!(formula.is_satisfied_by(&model), "{formula}"),
                None => assert!(!dp::decide(&formula), "{formula}"),
            }
        }
    }

    #[test]
    fn deterministic() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let formula = random_formula(&mut rng, 4, 10);
            assert_eq!(dpll::decide(&formula), dpll::decide(&formula));
            assert_eq!(dp::decide(&formula), dp::decide(&formula));
            assert_eq!(resolution::decide(&formula), resolution::decide(&formula));
        }
    }
}

mod monotonicity {
    use super::*;

    #[test]
    fn extending_unsatisfiable() {
        let mut rng = StdRng::seed_from_u64(29);

        for _ in 0..200 {
            let formula = random_formula(&mut rng, 4, 12);
            if dpll::is_satisfiable(&formula) {
                continue;
            }
            let extended = formula
                .with_clause(vec![rng.gen_range(1..=4), -rng.gen_range(1..=4)])
                .unwrap();
            assert!(!dpll::is_satisfiable(&extended), "{extended}");
            assert!(!dp::decide(&extended), "{extended}");
        }
    }

    #[test]
    fn removing_from_satisfiable() {
        let mut rng = StdRng::seed_from_u64(31);

        for _ in 0..200 {
            let formula = random_formula(&mut rng, 4, 12);
            if !dpll::is_satisfiable(&formula) || formula.clause_count() == 0 {
                continue;
            }
            let index = rng.gen_range(0..formula.clause_count());
            let reduced = formula.without_clause(index);
            assert!(dpll::is_satisfiable(&reduced), "{reduced}");
            assert!(resolution::decide(&reduced), "{reduced}");
        }
    }

    #[test]
    fn clause_order() {
        let mut rng = StdRng::seed_from_u64(37);

        for _ in 0..100 {
            let formula = random_formula(&mut rng, 4, 10);
            let reversed =
                Formula::from_clauses(formula.clauses().iter().rev().cloned()).unwrap();
            for engine in Engine::ALL {
                assert_eq!(
                    engine.decide(&formula).satisfiable,
                    engine.decide(&reversed).satisfiable
                );
            }
        }
    }
}
