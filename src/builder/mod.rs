/*!
Tools for building a formula.

A [formula](crate::structures::formula::Formula) may be built:
- Directly from integers, with [Formula::from_clauses](crate::structures::formula::Formula::from_clauses).
- From DIMACS text, with [parse_dimacs](dimacs::parse_dimacs), or from a file with [parse_dimacs_file](dimacs::parse_dimacs_file).
- From lines of literals without comments or a preamble, with [parse_clause_lines](dimacs::parse_clause_lines).

# Examples

```rust
# use trisat::builder::dimacs::parse_clause_lines;
# use trisat::structures::formula::Formula;
let formula = parse_clause_lines(["1 -2 0", "2 3 0"]).unwrap();
let same = Formula::from_clauses(vec![vec![1, -2], vec![2, 3]]).unwrap();

assert_eq!(formula, same);
```
*/
pub mod dimacs;

pub use dimacs::{ParsedFormula, ParserInfo};
