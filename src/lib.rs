// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # wumpus-kb
//!
//! A propositional knowledge base for a Wumpus World agent. It encodes the
//! cave's physics and the agent's successor-state axioms as sentences,
//! records what the agent perceives and does, and answers situational
//! questions by entailment.
//!
//! ## Architecture
//!
//! - **World vocabulary** (`world`): rooms, orientations, percepts, actions
//! - **Symbol namer** (`symbol`): structured atom keys and interning
//! - **Logic** (`logic`): sentences, CNF, theories, entailment procedures
//! - **Knowledge base** (`kb`): atemporal and temporal axioms, fact
//!   recording, room queries
//! - **Configuration** (`config`): TOML-backed [`config::KbConfig`]
//!
//! ## Library usage
//!
//! ```no_run
//! use wumpus_kb::config::KbConfig;
//! use wumpus_kb::kb::WumpusKnowledgeBase;
//! use wumpus_kb::world::{Action, Percept};
//!
//! let mut kb = WumpusKnowledgeBase::new(KbConfig::square(4)).unwrap();
//! kb.record_percept(&Percept::none(), 0);
//! kb.tell_temporal_physics(0);
//! kb.record_action(Action::Forward, 0);
//! kb.record_percept(&Percept::none().with_breeze(), 1);
//! kb.tell_temporal_physics(1);
//!
//! let here = kb.current_position(1).unwrap();
//! let safe = kb.safe_rooms(1).unwrap();
//! println!("at {here}, safe: {safe}");
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod kb;
pub mod logic;
pub mod symbol;
pub mod world;
