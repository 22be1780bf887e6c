//! Atemporal "wumpus physics": sentences true at every time step.
//!
//! These are generated once, when the knowledge base is created:
//!
//! - the start room holds no pit and no wumpus;
//! - a room is breezy iff a neighbour has a pit, smelly iff a neighbour has
//!   the wumpus;
//! - the wumpus never sits in a pit;
//! - there is exactly one wumpus.

use crate::logic::{Sentence, exactly_one};
use crate::symbol::{Atom, Feature};
use crate::world::{Room, rooms};

fn pit(room: Room) -> Atom {
    Atom::at(Feature::Pit, room)
}

fn wumpus(room: Room) -> Atom {
    Atom::at(Feature::Wumpus, room)
}

/// `¬P(start)` and `¬W(start)`.
pub fn initial_room_safety(start: Room) -> Vec<Sentence> {
    vec![Sentence::not(pit(start)), Sentence::not(wumpus(start))]
}

/// For each room: `B(r) ⟺ ∨ P(n)` and `S(r) ⟺ ∨ W(n)` over the in-bounds
/// neighbours `n`. Missing neighbours are left out of the disjunction.
pub fn percept_physics(width: u32, height: u32) -> Vec<Sentence> {
    let mut out = Vec::with_capacity((width * height * 2) as usize);
    for room in rooms(width, height) {
        let neighbours = room.neighbours(width, height);
        let pits = neighbours.iter().map(|&(n, _)| Sentence::atom(pit(n)));
        let wumpuses = neighbours.iter().map(|&(n, _)| Sentence::atom(wumpus(n)));
        out.push(Sentence::iff(
            Atom::at(Feature::Breeze, room),
            Sentence::any(pits),
        ));
        out.push(Sentence::iff(
            Atom::at(Feature::Stench, room),
            Sentence::any(wumpuses),
        ));
    }
    out
}

/// `W(r) ⟹ ¬P(r)` for every room.
pub fn hazard_exclusivity(width: u32, height: u32) -> Vec<Sentence> {
    rooms(width, height)
        .map(|room| Sentence::implies(wumpus(room), Sentence::not(pit(room))))
        .collect()
}

/// One at-least-one disjunction over all rooms, then `¬W(i) ∨ ¬W(j)` for
/// every unordered pair of distinct rooms.
pub fn single_wumpus(width: u32, height: u32) -> Vec<Sentence> {
    let atoms: Vec<Atom> = rooms(width, height).map(wumpus).collect();
    exactly_one(&atoms)
}

/// Every atemporal sentence, in the order they are told.
pub fn sentences(width: u32, height: u32, start: Room) -> Vec<Sentence> {
    let mut out = initial_room_safety(start);
    out.extend(percept_physics(width, height));
    out.extend(hazard_exclusivity(width, height));
    out.extend(single_wumpus(width, height));
    out
}
