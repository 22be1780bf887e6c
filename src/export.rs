//! Export types for serializing knowledge base state.
//!
//! These types give a human-readable snapshot of a theory, with atoms in
//! their display form, suitable for JSON export.

use serde::{Deserialize, Serialize};

use crate::kb::{RoomSet, WumpusKnowledgeBase};
use crate::logic::Theory;

/// Exported theory: every told sentence plus size counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheoryExport {
    /// Sentences in the order they were told, rendered infix.
    pub sentences: Vec<String>,
    /// Number of told sentences.
    pub sentence_count: usize,
    /// Number of CNF clauses the sentences converted into.
    pub clause_count: usize,
    /// Number of distinct atoms.
    pub symbol_count: usize,
}

impl TheoryExport {
    pub fn from_theory(theory: &Theory) -> Self {
        Self {
            sentences: theory.sentences().iter().map(ToString::to_string).collect(),
            sentence_count: theory.len(),
            clause_count: theory.clauses().len(),
            symbol_count: theory.symbols().len(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Theory> for TheoryExport {
    fn from(theory: &Theory) -> Self {
        Self::from_theory(theory)
    }
}

/// Exported room-level view of the agent's knowledge at one time step.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotExport {
    pub time: u32,
    pub safe: RoomSet,
    pub not_unsafe: RoomSet,
    pub unvisited: RoomSet,
    pub possible_wumpus: RoomSet,
    pub has_arrow: bool,
}

impl SnapshotExport {
    /// Run every room query for step `t`.
    pub fn capture(kb: &WumpusKnowledgeBase, t: u32) -> crate::error::KbResult<Self> {
        Ok(Self {
            time: t,
            safe: kb.safe_rooms(t)?,
            not_unsafe: kb.not_unsafe_rooms(t)?,
            unvisited: kb.unvisited_rooms()?,
            possible_wumpus: kb.possible_wumpus_rooms()?,
            has_arrow: kb.has_arrow(t)?,
        })
    }
}
