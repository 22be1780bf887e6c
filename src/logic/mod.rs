//! Propositional logic layer: sentences, clause form, theories and
//! entailment procedures.
//!
//! Nothing in here knows about caves or wumpuses; the knowledge base in
//! [`crate::kb`] is built on top of it.

pub mod cnf;
pub mod sentence;
pub mod solver;
pub mod theory;

pub use sentence::{Sentence, at_least_one, at_most_one, exactly_one};
pub use solver::{Dpll, Entailment, OptimizedDpll, SolverKind, TruthTable};
pub use theory::Theory;
