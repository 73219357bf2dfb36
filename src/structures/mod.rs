//! Key structures, such as literals and clauses.
//!
//! Literals and clauses are each made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//! A [formula](formula::Formula) 𝐅 is a collection of [clauses](clause), interpreted as the conjunction of those clauses.
//! The empty formula is true, and a formula containing the empty clause is false.
//!
//! Formulas are built once and then only read.
//! Each procedure derives new clauses (by elimination, simplification, or resolution) rather than revising the formula it was given.
//!
//! ## Valuations
//!
//! A [valuation](valuation::Valuation) is a set of literals, each of which is taken to be true.
//! No valuation contains both a literal and its negation.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
