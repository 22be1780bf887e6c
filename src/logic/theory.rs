//! Append-only propositional theory.
//!
//! A [`Theory`] owns the sentences told so far together with their clause
//! form. Sentences are converted once, when told, so every entailment check
//! starts from a ready clause database. Sentences are never removed or
//! rewritten; belief change is expressed with new time-indexed atoms.

use crate::symbol::SymbolTable;

use super::cnf::{self, Clause};
use super::sentence::Sentence;

#[derive(Debug, Clone, Default)]
pub struct Theory {
    sentences: Vec<Sentence>,
    clauses: Vec<Clause>,
    symbols: SymbolTable,
}

impl Theory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sentence. Returns the number of clauses it contributed.
    pub fn tell(&mut self, sentence: Sentence) -> usize {
        let clauses = cnf::to_clauses(&sentence, &mut self.symbols);
        let added = clauses.len();
        self.clauses.extend(clauses);
        self.sentences.push(sentence);
        added
    }

    /// Append every sentence from `sentences`, in order.
    pub fn tell_all(&mut self, sentences: impl IntoIterator<Item = Sentence>) -> usize {
        sentences.into_iter().map(|s| self.tell(s)).sum()
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Number of sentences told.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl std::fmt::Display for Theory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, s) in self.sentences.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{Atom, Feature};
    use crate::world::Room;

    fn pit(x: u32, y: u32) -> Atom {
        Atom::at(Feature::Pit, Room::new(x, y))
    }

    #[test]
    fn tell_appends_in_order() {
        let mut theory = Theory::new();
        assert!(theory.is_empty());
        theory.tell(Sentence::not(pit(1, 1)));
        theory.tell(Sentence::iff(pit(1, 2), pit(2, 1)));
        assert_eq!(theory.len(), 2);
        assert_eq!(theory.sentences()[0], Sentence::not(pit(1, 1)));
        assert_eq!(theory.clauses().len(), 3);
        assert_eq!(theory.symbols().len(), 3);
    }

    #[test]
    fn display_is_one_sentence_per_line() {
        let mut theory = Theory::new();
        theory.tell(Sentence::not(pit(1, 1)));
        theory.tell(Sentence::atom(pit(2, 2)));
        assert_eq!(theory.to_string(), "~P_1_1\nP_2_2");
    }

    #[test]
    fn valid_sentences_add_no_clauses() {
        let mut theory = Theory::new();
        let added = theory.tell(Sentence::implies(pit(1, 1), pit(1, 1)));
        assert_eq!(added, 0);
        assert_eq!(theory.len(), 1);
    }
}
