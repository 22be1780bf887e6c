//! Truth-table model checking.
//!
//! Enumerates every assignment to the atoms of the theory and the query and
//! evaluates the original sentences directly, without going through clause
//! form. Exponential, so it refuses problems above a symbol limit; its value
//! is as an independent oracle for the DPLL procedures and the CNF
//! converter.

use std::collections::HashMap;

use crate::error::{SolverError, SolverResult};
use crate::logic::sentence::Sentence;
use crate::logic::theory::Theory;
use crate::symbol::Atom;

use super::Entailment;

/// Default number of symbols above which enumeration is refused.
pub const DEFAULT_SYMBOL_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy)]
pub struct TruthTable {
    limit: usize,
}

impl TruthTable {
    pub fn with_limit(limit: usize) -> Self {
        // 2^63 models is already far beyond anything enumerable.
        Self {
            limit: limit.min(63),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for TruthTable {
    fn default() -> Self {
        Self::with_limit(DEFAULT_SYMBOL_LIMIT)
    }
}

impl Entailment for TruthTable {
    fn entails(&self, theory: &Theory, query: &Sentence) -> SolverResult<bool> {
        let mut atoms: Vec<Atom> = Vec::new();
        for s in theory.sentences().iter().chain(std::iter::once(query)) {
            for a in s.atoms() {
                if !atoms.contains(&a) {
                    atoms.push(a);
                }
            }
        }
        if atoms.len() > self.limit {
            return Err(SolverError::TooManySymbols {
                count: atoms.len(),
                limit: self.limit,
            });
        }

        let mut model: HashMap<Atom, bool> = atoms.iter().map(|&a| (a, false)).collect();
        for bits in 0..(1u64 << atoms.len()) {
            for (i, a) in atoms.iter().enumerate() {
                model.insert(*a, bits & (1 << i) != 0);
            }
            let is_model = theory.sentences().iter().all(|s| s.eval(&model));
            if is_model && !query.eval(&model) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "truth-table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Feature;
    use crate::world::Room;

    #[test]
    fn refuses_large_problems() {
        let mut theory = Theory::new();
        for x in 1..=5 {
            theory.tell(Sentence::atom(Atom::at(Feature::Pit, Room::new(x, 1))));
        }
        let err = TruthTable::with_limit(4)
            .entails(&theory, &Sentence::truth())
            .unwrap_err();
        assert!(matches!(err, SolverError::TooManySymbols { count: 5, limit: 4 }));
    }

    #[test]
    fn limit_is_capped() {
        assert_eq!(TruthTable::with_limit(1_000).limit(), 63);
        assert_eq!(TruthTable::default().limit(), DEFAULT_SYMBOL_LIMIT);
    }
}
