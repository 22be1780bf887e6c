//! Propositional sentences and the builders used to assemble axioms.
//!
//! All connective arity and precedence decisions live here. The theory
//! builders never nest constructors by hand; they call the shape builders
//! ([`Sentence::iff`], [`at_most_one`], [`exactly_one`], ...) and get back a
//! fully formed sentence.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::symbol::Atom;

/// A propositional sentence.
///
/// `And(vec![])` is the constant true and `Or(vec![])` the constant false.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentence {
    Atom(Atom),
    Not(Box<Sentence>),
    And(Vec<Sentence>),
    Or(Vec<Sentence>),
    Implies(Box<Sentence>, Box<Sentence>),
    Iff(Box<Sentence>, Box<Sentence>),
}

impl From<Atom> for Sentence {
    fn from(atom: Atom) -> Self {
        Sentence::Atom(atom)
    }
}

impl Sentence {
    pub fn atom(atom: Atom) -> Self {
        Sentence::Atom(atom)
    }

    /// Negation. `not(not(a))` is kept as written; CNF conversion removes it.
    pub fn not(inner: impl Into<Sentence>) -> Self {
        Sentence::Not(Box::new(inner.into()))
    }

    /// Binary conjunction.
    pub fn and(a: impl Into<Sentence>, b: impl Into<Sentence>) -> Self {
        Sentence::And(vec![a.into(), b.into()])
    }

    /// Binary disjunction.
    pub fn or(a: impl Into<Sentence>, b: impl Into<Sentence>) -> Self {
        Sentence::Or(vec![a.into(), b.into()])
    }

    /// N-ary conjunction. A single conjunct is returned unwrapped.
    pub fn all(conjuncts: impl IntoIterator<Item = Sentence>) -> Self {
        let mut items: Vec<Sentence> = conjuncts.into_iter().collect();
        if items.len() == 1 {
            items.remove(0)
        } else {
            Sentence::And(items)
        }
    }

    /// N-ary disjunction. A single disjunct is returned unwrapped; an empty
    /// disjunction is false.
    pub fn any(disjuncts: impl IntoIterator<Item = Sentence>) -> Self {
        let mut items: Vec<Sentence> = disjuncts.into_iter().collect();
        if items.len() == 1 {
            items.remove(0)
        } else {
            Sentence::Or(items)
        }
    }

    pub fn implies(premise: impl Into<Sentence>, conclusion: impl Into<Sentence>) -> Self {
        Sentence::Implies(Box::new(premise.into()), Box::new(conclusion.into()))
    }

    pub fn iff(left: impl Into<Sentence>, right: impl Into<Sentence>) -> Self {
        Sentence::Iff(Box::new(left.into()), Box::new(right.into()))
    }

    /// `atom` when `value` is true, `¬atom` otherwise.
    pub fn literal(atom: Atom, value: bool) -> Self {
        if value {
            Sentence::Atom(atom)
        } else {
            Sentence::not(atom)
        }
    }

    pub fn truth() -> Self {
        Sentence::And(Vec::new())
    }

    pub fn falsity() -> Self {
        Sentence::Or(Vec::new())
    }

    /// Distinct atoms in first-occurrence order.
    pub fn atoms(&self) -> Vec<Atom> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.collect_atoms(&mut seen, &mut out);
        out
    }

    fn collect_atoms(&self, seen: &mut HashSet<Atom>, out: &mut Vec<Atom>) {
        match self {
            Sentence::Atom(a) => {
                if seen.insert(*a) {
                    out.push(*a);
                }
            }
            Sentence::Not(s) => s.collect_atoms(seen, out),
            Sentence::And(xs) | Sentence::Or(xs) => {
                for x in xs {
                    x.collect_atoms(seen, out);
                }
            }
            Sentence::Implies(a, b) | Sentence::Iff(a, b) => {
                a.collect_atoms(seen, out);
                b.collect_atoms(seen, out);
            }
        }
    }

    /// Evaluate under a model. Atoms missing from the model are false.
    pub fn eval(&self, model: &HashMap<Atom, bool>) -> bool {
        match self {
            Sentence::Atom(a) => model.get(a).copied().unwrap_or(false),
            Sentence::Not(s) => !s.eval(model),
            Sentence::And(xs) => xs.iter().all(|x| x.eval(model)),
            Sentence::Or(xs) => xs.iter().any(|x| x.eval(model)),
            Sentence::Implies(a, b) => !a.eval(model) || b.eval(model),
            Sentence::Iff(a, b) => a.eval(model) == b.eval(model),
        }
    }

    fn is_compound(&self) -> bool {
        match self {
            Sentence::Atom(_) | Sentence::Not(_) => false,
            Sentence::And(xs) | Sentence::Or(xs) => !xs.is_empty(),
            _ => true,
        }
    }

    fn fmt_operand(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_compound() {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentence::Atom(a) => write!(f, "{a}"),
            Sentence::Not(s) => {
                f.write_str("~")?;
                s.fmt_operand(f)
            }
            Sentence::And(xs) if xs.is_empty() => f.write_str("True"),
            Sentence::Or(xs) if xs.is_empty() => f.write_str("False"),
            Sentence::And(xs) | Sentence::Or(xs) => {
                let op = if matches!(self, Sentence::And(_)) { " & " } else { " | " };
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(op)?;
                    }
                    x.fmt_operand(f)?;
                }
                Ok(())
            }
            Sentence::Implies(a, b) => {
                a.fmt_operand(f)?;
                f.write_str(" => ")?;
                b.fmt_operand(f)
            }
            Sentence::Iff(a, b) => {
                a.fmt_operand(f)?;
                f.write_str(" <=> ")?;
                b.fmt_operand(f)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Cardinality shapes
// ---------------------------------------------------------------------------

/// At least one of `atoms` holds.
pub fn at_least_one(atoms: &[Atom]) -> Sentence {
    Sentence::any(atoms.iter().map(|&a| Sentence::Atom(a)))
}

/// Pairwise at-most-one encoding: `¬a_i ∨ ¬a_j` for every `i < j`.
///
/// Produces n(n-1)/2 binary clauses.
pub fn at_most_one(atoms: &[Atom]) -> Vec<Sentence> {
    let mut out = Vec::with_capacity(atoms.len() * atoms.len().saturating_sub(1) / 2);
    for (i, &a) in atoms.iter().enumerate() {
        for &b in &atoms[i + 1..] {
            out.push(Sentence::or(Sentence::not(a), Sentence::not(b)));
        }
    }
    out
}

/// Exactly one of `atoms` holds: one at-least-one disjunction followed by
/// the pairwise at-most-one clauses.
pub fn exactly_one(atoms: &[Atom]) -> Vec<Sentence> {
    let mut out = vec![at_least_one(atoms)];
    out.extend(at_most_one(atoms));
    out
}
