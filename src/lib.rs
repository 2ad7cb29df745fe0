//! A CDCL SAT solver: two-watched-literal unit propagation, 1-UIP conflict
//! analysis with clause learning, non-chronological backjumping and seeded
//! uniform-random branching.

mod dimacs;
mod solver;

pub use dimacs::{Dimacs, ParseError};
pub use solver::{resolve, Lit, Model, Proof, Result, Solver, Stats, Var};
