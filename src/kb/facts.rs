//! Ground literals for observed percepts, executed actions and externally
//! known positions.

use crate::logic::Sentence;
use crate::symbol::{Atom, Feature, Sense};
use crate::world::{Action, AgentPosition, Percept};

/// Five literals, one per sensor, positive when the sensor fired.
pub fn percept_literals(percept: &Percept, t: u32) -> Vec<Sentence> {
    [
        (Sense::Stench, percept.stench),
        (Sense::Breeze, percept.breeze),
        (Sense::Glitter, percept.glitter),
        (Sense::Bump, percept.bump),
        (Sense::Scream, percept.scream),
    ]
    .into_iter()
    .map(|(sense, value)| Sentence::literal(Atom::fluent(Feature::Percept(sense), t), value))
    .collect()
}

/// The taken action positive, every other action negated.
pub fn action_literals(taken: Action, t: u32) -> Vec<Sentence> {
    Action::ALL
        .into_iter()
        .map(|a| Sentence::literal(Atom::fluent(Feature::Action(a), t), a == taken))
        .collect()
}

/// Location, visited marker and heading for a position known from outside.
pub fn position_literals(position: &AgentPosition, t: u32) -> Vec<Sentence> {
    vec![
        Sentence::atom(Atom::fluent_at(Feature::Location, t, position.room)),
        Sentence::atom(Atom::at(Feature::Visited, position.room)),
        Sentence::atom(Atom::fluent(Feature::Facing(position.orientation), t)),
    ]
}
