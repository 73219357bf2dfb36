/*!
An atom (aka. a 'variable').

Atoms are the magnitude of a literal, and so are positive integers.
The integer `0` is never an atom, as in DIMACS `0` is used to terminate a clause.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
