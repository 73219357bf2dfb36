//! The procedures for determining satisfiability.
//!
//! - [dp] --- Davis-Putnam variable elimination.
//! - [dpll] --- DPLL backtracking search, with a model on success.
//! - [resolution] --- Saturation under resolution.
//!
//! Each procedure is a function from a [formula](crate::structures::formula::Formula) to a verdict, with no state kept between calls.
//! So, calls on distinct formulas may be made at the same time from distinct threads.
//!
//! No procedure has a time limit.
//! A call either returns or continues until the process is stopped.
//!
//! [Engine] names a procedure, for when the choice of procedure is made at runtime.
//!
//! ```rust
//! # use trisat::procedures::Engine;
//! # use trisat::structures::formula::Formula;
//! let formula = Formula::from_clauses(vec![vec![1], vec![-1, 2]]).unwrap();
//!
//! for engine in Engine::ALL {
//!     assert!(engine.decide(&formula).satisfiable);
//! }
//! ```

pub mod dp;
pub mod dpll;
pub mod pure;
pub mod resolution;

use crate::structures::{formula::Formula, valuation::Valuation};

/// A procedure for determining satisfiability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    /// Davis-Putnam variable elimination.
    Dp,

    /// DPLL backtracking search.
    Dpll,

    /// Saturation under resolution.
    Resolution,
}

/// The result of a procedure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the formula is satisfiable.
    pub satisfiable: bool,

    /// A model of the formula, when satisfiable and found by the procedure.
    pub model: Option<Valuation>,
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::Dp, Engine::Dpll, Engine::Resolution];

    /// Determines the satisfiability of the formula using the procedure.
    pub fn decide(&self, formula: &Formula) -> Verdict {
        match self {
            Self::Dp => Verdict {
                satisfiable: dp::decide(formula),
                model: None,
            },

            Self::Dpll => {
                let model = dpll::decide(formula);
                Verdict {
                    satisfiable: model.is_some(),
                    model,
                }
            }

            Self::Resolution => Verdict {
                satisfiable: resolution::decide(formula),
                model: None,
            },
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dp => write!(f, "dp"),
            Self::Dpll => write!(f, "dpll"),
            Self::Resolution => write!(f, "resolution"),
        }
    }
}

impl std::str::FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dp" => Ok(Self::Dp),
            "dpll" => Ok(Self::Dpll),
            "resolution" => Ok(Self::Resolution),
            _ => Err(format!("Unknown engine '{s}', expected one of: dp, dpll, resolution")),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.satisfiable {
            true => write!(f, "SATISFIABLE"),
            false => write!(f, "UNSATISFIABLE"),
        }
    }
}
