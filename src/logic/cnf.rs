//! Clause form: conversion of sentences into conjunctive normal form.
//!
//! Conversion runs in three passes: eliminate `=>` and `<=>`, push negation
//! inward to literals, then distribute disjunction over conjunction.
//! Clauses are kept sorted and deduplicated and tautologies are dropped,
//! so the clause count of a converted sentence stays close to the number
//! of genuinely distinct constraints it carries.

use std::collections::{HashMap, HashSet};

use crate::symbol::{Atom, SymbolTable, Var};

use super::sentence::Sentence;

/// A possibly negated variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lit {
    pub var: Var,
    pub negated: bool,
}

impl Lit {
    pub const fn pos(var: Var) -> Self {
        Self {
            var,
            negated: false,
        }
    }

    pub const fn neg(var: Var) -> Self {
        Self { var, negated: true }
    }

    pub fn negate(self) -> Self {
        Self {
            var: self.var,
            negated: !self.negated,
        }
    }

    /// Dense index usable for per-literal tables: `2 * var + negated`.
    pub fn code(self) -> usize {
        self.var.index() * 2 + usize::from(self.negated)
    }

    /// Truth value of this literal when its variable has `value`.
    pub fn holds(self, value: bool) -> bool {
        value != self.negated
    }
}

impl std::fmt::Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "~{}", self.var)
        } else {
            write!(f, "{}", self.var)
        }
    }
}

/// A disjunction of literals, sorted and free of duplicates. The empty
/// clause is false.
pub type Clause = Vec<Lit>;

/// Anything that can hand out solver variables for atoms.
pub trait Interner {
    fn var(&mut self, atom: Atom) -> Var;
}

impl Interner for SymbolTable {
    fn var(&mut self, atom: Atom) -> Var {
        self.intern(atom)
    }
}

/// Read-through interner used for queries.
///
/// Atoms already known to the theory reuse the theory's variables; unknown
/// atoms get fresh variables numbered after the theory's, held only for the
/// lifetime of the query.
#[derive(Debug)]
pub struct QueryInterner<'a> {
    base: &'a SymbolTable,
    extra: HashMap<Atom, Var>,
}

impl<'a> QueryInterner<'a> {
    pub fn new(base: &'a SymbolTable) -> Self {
        Self {
            base,
            extra: HashMap::new(),
        }
    }

    /// Total number of variables visible to the query.
    pub fn num_vars(&self) -> usize {
        self.base.len() + self.extra.len()
    }
}

impl Interner for QueryInterner<'_> {
    fn var(&mut self, atom: Atom) -> Var {
        if let Some(var) = self.base.get(&atom) {
            return var;
        }
        let next = Var::new((self.base.len() + self.extra.len()) as u32);
        *self.extra.entry(atom).or_insert(next)
    }
}

/// Negation normal form over interned literals.
enum Nnf {
    Lit(Lit),
    And(Vec<Nnf>),
    Or(Vec<Nnf>),
}

fn to_nnf(sentence: &Sentence, negated: bool, interner: &mut impl Interner) -> Nnf {
    match sentence {
        Sentence::Atom(a) => {
            let var = interner.var(*a);
            Nnf::Lit(if negated { Lit::neg(var) } else { Lit::pos(var) })
        }
        Sentence::Not(inner) => to_nnf(inner, !negated, interner),
        Sentence::And(xs) => {
            let parts = xs.iter().map(|x| to_nnf(x, negated, interner)).collect();
            if negated { Nnf::Or(parts) } else { Nnf::And(parts) }
        }
        Sentence::Or(xs) => {
            let parts = xs.iter().map(|x| to_nnf(x, negated, interner)).collect();
            if negated { Nnf::And(parts) } else { Nnf::Or(parts) }
        }
        Sentence::Implies(a, b) => {
            // a => b  ≡  ¬a ∨ b
            let parts = vec![to_nnf(a, !negated, interner), to_nnf(b, negated, interner)];
            if negated { Nnf::And(parts) } else { Nnf::Or(parts) }
        }
        Sentence::Iff(a, b) => {
            // a <=> b   ≡ (¬a ∨ b) ∧ (a ∨ ¬b)
            // ¬(a <=> b) ≡ (a ∨ b) ∧ (¬a ∨ ¬b)
            let (first, second) = if negated {
                (
                    Nnf::Or(vec![to_nnf(a, false, interner), to_nnf(b, false, interner)]),
                    Nnf::Or(vec![to_nnf(a, true, interner), to_nnf(b, true, interner)]),
                )
            } else {
                (
                    Nnf::Or(vec![to_nnf(a, true, interner), to_nnf(b, false, interner)]),
                    Nnf::Or(vec![to_nnf(a, false, interner), to_nnf(b, true, interner)]),
                )
            };
            Nnf::And(vec![first, second])
        }
    }
}

/// Union of two clauses, or `None` if the result is a tautology.
fn merge(a: &[Lit], b: &[Lit]) -> Option<Clause> {
    let mut out: Clause = a.iter().chain(b).copied().collect();
    out.sort_unstable();
    out.dedup();
    let tautology = out.windows(2).any(|w| w[0].var == w[1].var);
    (!tautology).then_some(out)
}

fn nnf_to_clauses(nnf: Nnf) -> Vec<Clause> {
    match nnf {
        Nnf::Lit(l) => vec![vec![l]],
        Nnf::And(parts) => parts.into_iter().flat_map(nnf_to_clauses).collect(),
        Nnf::Or(parts) => {
            // Start from the identity of ∨ (false = one empty clause).
            let mut acc: Vec<Clause> = vec![Vec::new()];
            for part in parts {
                let clauses = nnf_to_clauses(part);
                let mut next = Vec::with_capacity(acc.len() * clauses.len());
                for a in &acc {
                    for c in &clauses {
                        if let Some(m) = merge(a, c) {
                            next.push(m);
                        }
                    }
                }
                acc = next;
                if acc.is_empty() {
                    // Already true; further disjuncts cannot change that.
                    break;
                }
            }
            acc
        }
    }
}

/// Convert a sentence into clauses, interning atoms through `interner`.
///
/// An empty result means the sentence is valid; a result containing an
/// empty clause means it is unsatisfiable on its own.
pub fn to_clauses(sentence: &Sentence, interner: &mut impl Interner) -> Vec<Clause> {
    let clauses = nnf_to_clauses(to_nnf(sentence, false, interner));
    let mut seen = HashSet::with_capacity(clauses.len());
    clauses.into_iter().filter(|c| seen.insert(c.clone())).collect()
}

/// Clauses of `¬sentence`: the refutation side of an entailment check.
pub fn negated_clauses(sentence: &Sentence, interner: &mut impl Interner) -> Vec<Clause> {
    let clauses = nnf_to_clauses(to_nnf(sentence, true, interner));
    let mut seen = HashSet::with_capacity(clauses.len());
    clauses.into_iter().filter(|c| seen.insert(c.clone())).collect()
}
