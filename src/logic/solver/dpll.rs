//! Baseline DPLL.
//!
//! Straight recursive Davis-Putnam-Logemann-Loveland: every step re-scans
//! the whole clause set to detect satisfied clauses, conflicts and unit
//! clauses, then falls back to pure symbols and finally to branching on the
//! first open variable. Simple enough to trust, slow on large theories.

use crate::error::SolverResult;
use crate::logic::cnf::Lit;
use crate::logic::sentence::Sentence;
use crate::logic::theory::Theory;
use crate::symbol::Var;

use super::{Entailment, Refutation, assign, lit_value, unassigned};

#[derive(Debug, Clone, Copy, Default)]
pub struct Dpll;

impl Entailment for Dpll {
    fn entails(&self, theory: &Theory, query: &Sentence) -> SolverResult<bool> {
        let problem = Refutation::new(theory, query);
        let clauses: Vec<&[Lit]> = problem.clauses().collect();
        let model = vec![None; problem.num_vars()];
        let sat = satisfiable(&clauses, model);
        Ok(!sat)
    }

    fn name(&self) -> &'static str {
        "dpll"
    }
}

enum Status {
    Satisfied,
    Conflict,
    Unit(Lit),
    Open,
}

fn status(clause: &[Lit], model: &[Option<bool>]) -> Status {
    let mut free = None;
    let mut free_count = 0;
    for &lit in clause {
        match lit_value(model, lit) {
            Some(true) => return Status::Satisfied,
            Some(false) => {}
            None => {
                free_count += 1;
                free = Some(lit);
            }
        }
    }
    match (free_count, free) {
        (0, _) => Status::Conflict,
        (1, Some(lit)) => Status::Unit(lit),
        _ => Status::Open,
    }
}

/// A literal whose variable appears with one polarity only among the
/// clauses not yet satisfied.
fn pure_literal(clauses: &[&[Lit]], model: &[Option<bool>]) -> Option<Lit> {
    // bit 0: seen positive, bit 1: seen negative
    let mut seen = vec![0u8; model.len()];
    for clause in clauses {
        if clause.iter().any(|&l| lit_value(model, l) == Some(true)) {
            continue;
        }
        for &lit in clause.iter() {
            if unassigned(model, lit.var) {
                seen[lit.var.index()] |= if lit.negated { 2 } else { 1 };
            }
        }
    }
    seen.iter().enumerate().find_map(|(i, &flags)| match flags {
        1 => Some(Lit::pos(Var::new(i as u32))),
        2 => Some(Lit::neg(Var::new(i as u32))),
        _ => None,
    })
}

fn satisfiable(clauses: &[&[Lit]], mut model: Vec<Option<bool>>) -> bool {
    let branch_lit = loop {
        let mut all_satisfied = true;
        let mut propagated = false;
        let mut open = None;
        for clause in clauses {
            match status(clause, &model) {
                Status::Satisfied => {}
                Status::Conflict => return false,
                Status::Unit(lit) => {
                    all_satisfied = false;
                    assign(&mut model, lit);
                    propagated = true;
                }
                Status::Open => {
                    all_satisfied = false;
                    if open.is_none() {
                        open = clause.iter().copied().find(|l| unassigned(&model, l.var));
                    }
                }
            }
        }
        if all_satisfied {
            return true;
        }
        if propagated {
            continue;
        }
        if let Some(lit) = pure_literal(clauses, &model) {
            assign(&mut model, lit);
            continue;
        }
        // Without units, every unsatisfied clause is open.
        let Some(lit) = open else { return true };
        break lit;
    };

    let mut positive = model.clone();
    assign(&mut positive, Lit::pos(branch_lit.var));
    if satisfiable(clauses, positive) {
        return true;
    }
    assign(&mut model, Lit::neg(branch_lit.var));
    satisfiable(clauses, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{Atom, Feature};
    use crate::world::Room;

    fn w(x: u32, y: u32) -> Atom {
        Atom::at(Feature::Wumpus, Room::new(x, y))
    }

    #[test]
    fn pigeonhole_two_into_one_is_unsat() {
        // Two wumpuses, room for one: a, b, ¬a ∨ ¬b ⊨ anything.
        let mut theory = Theory::new();
        theory.tell(Sentence::atom(w(1, 1)));
        theory.tell(Sentence::atom(w(1, 2)));
        theory.tell(Sentence::or(Sentence::not(w(1, 1)), Sentence::not(w(1, 2))));
        assert!(Dpll.entails(&theory, &Sentence::atom(w(2, 2))).unwrap());
    }

    #[test]
    fn needs_branching() {
        // (a ∨ b) ∧ (¬a ∨ b) ∧ (a ∨ ¬b) ⊨ a ∧ b
        let mut theory = Theory::new();
        theory.tell(Sentence::or(w(1, 1), w(1, 2)));
        theory.tell(Sentence::or(Sentence::not(w(1, 1)), w(1, 2)));
        theory.tell(Sentence::or(w(1, 1), Sentence::not(w(1, 2))));
        assert!(Dpll.entails(&theory, &Sentence::and(w(1, 1), w(1, 2))).unwrap());
    }

    #[test]
    fn conflicting_units_in_one_scan() {
        let clauses: Vec<Vec<Lit>> = vec![
            vec![Lit::pos(Var::new(0))],
            vec![Lit::neg(Var::new(0))],
        ];
        let refs: Vec<&[Lit]> = clauses.iter().map(Vec::as_slice).collect();
        assert!(!satisfiable(&refs, vec![None]));
    }
}
