use std::alloc::System;

use trisat::{
    bench::metrics::{is_tracking, measure, TrackingAllocator},
    procedures::Engine,
    structures::formula::Formula,
};

#[global_allocator]
static GLOBAL: TrackingAllocator<System> = TrackingAllocator::new(System);

/// Every pigeon in some hole, and no two pigeons in the same hole.
fn pigeonhole(pigeons: i32, holes: i32) -> Formula {
    let atom = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;
    let mut clauses: Vec<Vec<i32>> = Vec::default();

    for pigeon in 0..pigeons {
        clauses.push((0..holes).map(|hole| atom(pigeon, hole)).collect());
    }
    for hole in 0..holes {
        for first in 0..pigeons {
            for second in (first + 1)..pigeons {
                clauses.push(vec![-atom(first, hole), -atom(second, hole)]);
            }
        }
    }

    Formula::from_clauses(clauses).unwrap()
}

mod tracking {
    use super::*;

    #[test]
    fn allocation_is_counted() {
        let formula = pigeonhole(3, 2);
        let measurement = measure(Engine::Resolution, &formula);

        assert!(is_tracking());
        assert!(!measurement.verdict.satisfiable);
        assert!(measurement.peak_mib > 0.0);
    }

    #[test]
    fn peaks_reset_between_calls() {
        let large = measure(Engine::Resolution, &pigeonhole(3, 2));
        let small = measure(Engine::Dpll, &Formula::default());

        assert!(small.verdict.satisfiable);
        assert!(small.peak_mib < large.peak_mib);
        assert!(small.peak_mib < 0.01);
    }

    #[test]
    fn held_memory_is_not_peak() {
        let held = vec![0_u8; 8 * 1024 * 1024];
        let measurement = measure(Engine::Dpll, &Formula::default());

        assert!(measurement.peak_mib < 1.0);
        assert_eq!(held.len(), 8 * 1024 * 1024);
    }

    #[test]
    fn peaks_are_per_thread() {
        let formula = pigeonhole(3, 2);
        let on_thread = std::thread::spawn(move || measure(Engine::Resolution, &formula).peak_mib)
            .join()
            .unwrap();

        let here = measure(Engine::Dpll, &Formula::default());
        assert!(on_thread > 0.0);
        assert!(here.peak_mib < on_thread);
    }
}
