//! Three procedures for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! trisat provides three independent decision procedures over a shared representation of formulas:
//! - [Davis-Putnam](crate::procedures::dp) variable elimination, which answers satisfiable or unsatisfiable.
//! - [DPLL](crate::procedures::dpll) backtracking search, which answers with a model or with the absence of a model.
//! - [Resolution saturation](crate::procedures::resolution), which answers satisfiable or unsatisfiable by attempting to derive the empty clause.
//!
//! The procedures are siblings.
//! Each reads a [formula](crate::structures::formula::Formula) and derives fresh clauses as required, so the given formula is never modified.
//!
//! # Orientation
//!
//! - The [structures] module contains literals, clauses, formulas, and valuations (models).
//! - The [procedures] module contains the three procedures, and an [Engine](crate::procedures::Engine) to select between them.
//! - The [builder] module reads formulas from DIMACS-like text.
//! - The [bench] module samples directories of formulas and runs a procedure on each, in parallel, recording time and memory.
//!
//! # Examples
//!
//! + Parse and decide a DIMACS formula.
//!
//! ```rust
//! # use trisat::builder::dimacs::parse_dimacs;
//! # use trisat::procedures::{dp, dpll, resolution};
//! let dimacs = b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! let parsed = parse_dimacs(dimacs.as_slice()).unwrap();
//!
//! assert!(!dp::decide(&parsed.formula));
//! assert!(dpll::decide(&parsed.formula).is_none());
//! assert!(!resolution::decide(&parsed.formula));
//! ```
//!
//! + Find a model of a formula.
//!
//! ```rust
//! # use trisat::structures::formula::Formula;
//! # use trisat::procedures::dpll;
//! let formula = Formula::from_clauses(vec![vec![1, 2], vec![-1, -2]]).unwrap();
//!
//! let model = dpll::decide(&formula).expect("satisfiable");
//! assert!(formula.is_satisfied_by(&model));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) the rules applied by DPLL can be seen with `RUST_LOG=dpll=trace …`.
//!
//! No log implementation is provided by the library.

pub mod bench;
pub mod builder;
pub mod config;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
