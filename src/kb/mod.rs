//! Knowledge base facade: the Wumpus World theory plus its decision procedure.
//!
//! A [`WumpusKnowledgeBase`] owns an append-only [`Theory`], the
//! [`KbConfig`] it was built from, and a boxed [`Entailment`] procedure.
//! Construction tells the atemporal physics; afterwards the caller drives
//! the agent loop:
//!
//! ```no_run
//! use wumpus_kb::config::KbConfig;
//! use wumpus_kb::kb::WumpusKnowledgeBase;
//! use wumpus_kb::world::{Action, Percept};
//!
//! let mut kb = WumpusKnowledgeBase::new(KbConfig::square(4)).unwrap();
//! kb.record_percept(&Percept::none(), 0);
//! kb.tell_temporal_physics(0);
//! let safe = kb.safe_rooms(0).unwrap();
//! kb.record_action(Action::Forward, 0);
//! ```

pub mod atemporal;
pub mod facts;
pub mod query;
pub mod temporal;

use crate::config::KbConfig;
use crate::error::KbResult;
use crate::logic::{Entailment, Sentence, Theory};
use crate::world::{Action, AgentPosition, Percept};

pub use query::RoomSet;

/// Propositional knowledge base for one agent in one cave.
pub struct WumpusKnowledgeBase {
    config: KbConfig,
    theory: Theory,
    solver: Box<dyn Entailment>,
    latest_step: Option<u32>,
}

impl WumpusKnowledgeBase {
    /// Validate `config`, pick the configured solver and tell the
    /// atemporal physics.
    pub fn new(config: KbConfig) -> KbResult<Self> {
        let solver = config.solver.build(config.truth_table_limit);
        Self::with_solver(config, solver)
    }

    /// Like [`new`](Self::new) but with a caller-supplied decision procedure.
    pub fn with_solver(config: KbConfig, solver: Box<dyn Entailment>) -> KbResult<Self> {
        config.validate()?;

        let mut theory = Theory::new();
        let clauses = theory.tell_all(atemporal::sentences(
            config.width,
            config.height,
            config.start.room,
        ));

        tracing::info!(
            width = config.width,
            height = config.height,
            start = %config.start,
            solver = solver.name(),
            sentences = theory.len(),
            clauses,
            "initialized wumpus knowledge base"
        );

        Ok(Self {
            config,
            theory,
            solver,
            latest_step: None,
        })
    }

    /// Tell an arbitrary sentence.
    pub fn tell(&mut self, sentence: Sentence) {
        self.theory.tell(sentence);
    }

    /// Tell the temporal axioms for step `t`. Returns how many sentences
    /// were added.
    ///
    /// Calling this twice for the same `t` repeats sentences that are
    /// already entailed; the theory stays consistent.
    pub fn tell_temporal_physics(&mut self, t: u32) -> usize {
        let sentences = temporal::sentences(
            self.config.width,
            self.config.height,
            self.config.start,
            t,
            !self.config.disable_successor_axioms,
        );
        let count = sentences.len();
        let clauses = self.theory.tell_all(sentences);
        self.latest_step = Some(self.latest_step.map_or(t, |s| s.max(t)));
        tracing::debug!(t, sentences = count, clauses, "told temporal physics");
        count
    }

    /// Tell the five percept literals observed at `t`.
    pub fn record_percept(&mut self, percept: &Percept, t: u32) {
        self.theory.tell_all(facts::percept_literals(percept, t));
        tracing::debug!(t, ?percept, "recorded percept");
    }

    /// Tell that `action` was taken at `t` and no other action was.
    pub fn record_action(&mut self, action: Action, t: u32) {
        self.theory.tell_all(facts::action_literals(action, t));
        tracing::debug!(t, ?action, "recorded action");
    }

    /// Tell the agent's position at `t`. Needed when successor-state axioms
    /// are disabled, since the theory then cannot infer it.
    pub fn record_position(&mut self, position: &AgentPosition, t: u32) {
        self.theory.tell_all(facts::position_literals(position, t));
        tracing::debug!(t, %position, "recorded position");
    }

    pub fn config(&self) -> &KbConfig {
        &self.config
    }

    pub fn theory(&self) -> &Theory {
        &self.theory
    }

    pub fn solver(&self) -> &dyn Entailment {
        self.solver.as_ref()
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Summary of the knowledge base state.
    pub fn info(&self) -> KbInfo {
        KbInfo {
            width: self.config.width,
            height: self.config.height,
            solver: self.solver.name().to_string(),
            successor_axioms: !self.config.disable_successor_axioms,
            sentence_count: self.theory.len(),
            clause_count: self.theory.clauses().len(),
            symbol_count: self.theory.symbols().len(),
            latest_step: self.latest_step,
        }
    }
}

impl std::fmt::Debug for WumpusKnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WumpusKnowledgeBase")
            .field("config", &self.config)
            .field("solver", &self.solver.name())
            .field("sentences", &self.theory.len())
            .field("latest_step", &self.latest_step)
            .finish()
    }
}

impl std::fmt::Display for WumpusKnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.theory)
    }
}

/// Summary information about a knowledge base.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct KbInfo {
    pub width: u32,
    pub height: u32,
    pub solver: String,
    pub successor_axioms: bool,
    pub sentence_count: usize,
    pub clause_count: usize,
    pub symbol_count: usize,
    /// Highest step whose temporal axioms were told.
    pub latest_step: Option<u32>,
}

impl std::fmt::Display for KbInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "wumpus knowledge base info")?;
        writeln!(f, "  cave:         {}x{}", self.width, self.height)?;
        writeln!(f, "  solver:       {}", self.solver)?;
        writeln!(f, "  successors:   {}", self.successor_axioms)?;
        writeln!(f, "  sentences:    {}", self.sentence_count)?;
        writeln!(f, "  clauses:      {}", self.clause_count)?;
        writeln!(f, "  symbols:      {}", self.symbol_count)?;
        match self.latest_step {
            Some(t) => writeln!(f, "  latest step:  {t}")?,
            None => writeln!(f, "  latest step:  none")?,
        }
        Ok(())
    }
}
