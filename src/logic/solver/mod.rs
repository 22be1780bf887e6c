//! Entailment decision procedures.
//!
//! Every procedure answers the same question: does the theory entail the
//! query? All of them decide it by refutation, checking whether
//! `theory ∧ ¬query` is unsatisfiable. Implementations are interchangeable
//! behind [`Entailment`] and are picked by [`SolverKind`] in the
//! configuration.
//!
//! - [`Dpll`]: textbook recursive DPLL with unit-clause and pure-symbol
//!   heuristics.
//! - [`OptimizedDpll`]: iterative DPLL with two watched literals and a trail.
//! - [`TruthTable`]: model enumeration straight over the sentences; used as
//!   the reference oracle in tests.

pub mod dpll;
pub mod optimized;
pub mod truth_table;

use serde::{Deserialize, Serialize};

use crate::error::SolverResult;
use crate::symbol::Var;

use super::cnf::{self, Clause, Lit, QueryInterner};
use super::sentence::Sentence;
use super::theory::Theory;

pub use dpll::Dpll;
pub use optimized::OptimizedDpll;
pub use truth_table::TruthTable;

/// A sound and complete entailment check over propositional theories.
pub trait Entailment: Send + Sync {
    /// Whether every model of `theory` satisfies `query`.
    fn entails(&self, theory: &Theory, query: &Sentence) -> SolverResult<bool>;

    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;
}

/// Which decision procedure a knowledge base uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    Dpll,
    #[default]
    OptimizedDpll,
    TruthTable,
}

impl SolverKind {
    /// Instantiate the procedure. `truth_table_limit` only matters for
    /// [`SolverKind::TruthTable`].
    pub fn build(self, truth_table_limit: usize) -> Box<dyn Entailment> {
        match self {
            SolverKind::Dpll => Box::new(Dpll),
            SolverKind::OptimizedDpll => Box::new(OptimizedDpll),
            SolverKind::TruthTable => Box::new(TruthTable::with_limit(truth_table_limit)),
        }
    }
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverKind::Dpll => write!(f, "dpll"),
            SolverKind::OptimizedDpll => write!(f, "optimized-dpll"),
            SolverKind::TruthTable => write!(f, "truth-table"),
        }
    }
}

/// The clause set `theory ∧ ¬query`, sharing the theory's clauses.
pub(crate) struct Refutation<'t> {
    base: &'t [Clause],
    goal: Vec<Clause>,
    num_vars: usize,
}

impl<'t> Refutation<'t> {
    pub(crate) fn new(theory: &'t Theory, query: &Sentence) -> Self {
        let mut interner = QueryInterner::new(theory.symbols());
        let goal = cnf::negated_clauses(query, &mut interner);
        Self {
            base: theory.clauses(),
            goal,
            num_vars: interner.num_vars(),
        }
    }

    pub(crate) fn clauses(&self) -> impl Iterator<Item = &[Lit]> {
        self.base.iter().chain(&self.goal).map(Vec::as_slice)
    }

    pub(crate) fn num_vars(&self) -> usize {
        self.num_vars
    }
}

/// Value of `lit` under a partial assignment.
pub(crate) fn lit_value(assignment: &[Option<bool>], lit: Lit) -> Option<bool> {
    assignment[lit.var.index()].map(|v| lit.holds(v))
}

/// Assign `lit` true.
pub(crate) fn assign(assignment: &mut [Option<bool>], lit: Lit) {
    assignment[lit.var.index()] = Some(!lit.negated);
}

pub(crate) fn unassigned(assignment: &[Option<bool>], var: Var) -> bool {
    assignment[var.index()].is_none()
}
