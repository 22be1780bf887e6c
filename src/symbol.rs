//! Propositional symbols for the Wumpus World theory.
//!
//! Every fact the knowledge base talks about is an [`Atom`]: a structured
//! key made of a [`Feature`], an optional time step and an optional room.
//! Atoms compare and hash by key, never by their rendered name, so two
//! semantically distinct facts can never collapse into one symbol.
//!
//! Solvers work over dense variable indices instead of atoms. The
//! [`SymbolTable`] interns atoms into [`Var`]s in first-seen order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::world::{Action, Orientation, Room};

/// Which sensor a percept atom refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sense {
    Stench,
    Breeze,
    Glitter,
    Bump,
    Scream,
}

/// The semantic prefix of an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    /// Agent is in the room (fluent).
    Location,
    /// Agent has been in the room at some time (time-erased).
    Visited,
    /// Room is breezy.
    Breeze,
    /// Room is smelly.
    Stench,
    Pit,
    Wumpus,
    WumpusAlive,
    HaveArrow,
    /// Room contains neither a pit nor a live wumpus (fluent).
    OkToMoveInto,
    Facing(Orientation),
    Percept(Sense),
    Action(Action),
}

impl Feature {
    /// The name prefix used when rendering atoms.
    pub fn prefix(self) -> &'static str {
        match self {
            Feature::Location => "L",
            Feature::Visited => "LV",
            Feature::Breeze => "B",
            Feature::Stench => "S",
            Feature::Pit => "P",
            Feature::Wumpus => "W",
            Feature::WumpusAlive => "WumpusAlive",
            Feature::HaveArrow => "HaveArrow",
            Feature::OkToMoveInto => "OK",
            Feature::Facing(Orientation::North) => "FacingNorth",
            Feature::Facing(Orientation::South) => "FacingSouth",
            Feature::Facing(Orientation::East) => "FacingEast",
            Feature::Facing(Orientation::West) => "FacingWest",
            Feature::Percept(Sense::Stench) => "Stench",
            Feature::Percept(Sense::Breeze) => "Breeze",
            Feature::Percept(Sense::Glitter) => "Glitter",
            Feature::Percept(Sense::Bump) => "Bump",
            Feature::Percept(Sense::Scream) => "Scream",
            Feature::Action(Action::Forward) => "Forward",
            Feature::Action(Action::TurnLeft) => "TurnLeft",
            Feature::Action(Action::TurnRight) => "TurnRight",
            Feature::Action(Action::Shoot) => "Shoot",
            Feature::Action(Action::Grab) => "Grab",
            Feature::Action(Action::Climb) => "Climb",
        }
    }
}

/// A propositional variable identified by (feature, time?, room?).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Atom {
    pub feature: Feature,
    pub time: Option<u32>,
    pub room: Option<Room>,
}

impl Atom {
    pub const fn new(feature: Feature, time: Option<u32>, room: Option<Room>) -> Self {
        Self {
            feature,
            time,
            room,
        }
    }

    /// A time-indexed atom with no room, e.g. `HaveArrow_3`.
    pub const fn fluent(feature: Feature, time: u32) -> Self {
        Self::new(feature, Some(time), None)
    }

    /// A time-erased atom about a room, e.g. `P_2_3`.
    pub const fn at(feature: Feature, room: Room) -> Self {
        Self::new(feature, None, Some(room))
    }

    /// A time-indexed atom about a room, e.g. `L_4_1_1`.
    pub const fn fluent_at(feature: Feature, time: u32, room: Room) -> Self {
        Self::new(feature, Some(time), Some(room))
    }
}

/// Renders `<prefix>[_<t>][_<x>_<y>]`.
///
/// The count of numeric components fixes the shape (1 = time, 2 = room,
/// 3 = both), so the rendering is injective as well.
impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.feature.prefix())?;
        if let Some(t) = self.time {
            write!(f, "_{t}")?;
        }
        if let Some(room) = self.room {
            write!(f, "_{}_{}", room.x, room.y)?;
        }
        Ok(())
    }
}

/// Dense solver variable index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Var(u32);

impl Var {
    pub const fn new(index: u32) -> Self {
        Var(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Bidirectional atom ↔ variable mapping. Variables are allocated densely
/// from zero in first-seen order and never reused.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    vars: HashMap<Atom, Var>,
    atoms: Vec<Atom>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the variable for `atom`, allocating one if needed.
    pub fn intern(&mut self, atom: Atom) -> Var {
        if let Some(&var) = self.vars.get(&atom) {
            return var;
        }
        let var = Var::new(self.atoms.len() as u32);
        self.atoms.push(atom);
        self.vars.insert(atom, var);
        var
    }

    pub fn get(&self, atom: &Atom) -> Option<Var> {
        self.vars.get(atom).copied()
    }

    pub fn atom(&self, var: Var) -> Option<Atom> {
        self.atoms.get(var.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn display_shapes() {
        let room = Room::new(2, 3);
        assert_eq!(Atom::at(Feature::Pit, room).to_string(), "P_2_3");
        assert_eq!(Atom::fluent(Feature::HaveArrow, 0).to_string(), "HaveArrow_0");
        assert_eq!(
            Atom::fluent_at(Feature::Location, 4, Room::new(1, 1)).to_string(),
            "L_4_1_1"
        );
        assert_eq!(
            Atom::fluent(Feature::Facing(Orientation::East), 7).to_string(),
            "FacingEast_7"
        );
        assert_eq!(
            Atom::fluent(Feature::Action(Action::TurnLeft), 2).to_string(),
            "TurnLeft_2"
        );
    }

    #[test]
    fn distinct_keys_render_distinct_names() {
        let mut keys = HashSet::new();
        let mut names = HashSet::new();
        let features = [
            Feature::Location,
            Feature::Visited,
            Feature::Breeze,
            Feature::Percept(Sense::Breeze),
            Feature::Pit,
            Feature::OkToMoveInto,
        ];
        for feature in features {
            for t in [None, Some(1), Some(11)] {
                for room in [None, Some(Room::new(1, 1)), Some(Room::new(11, 1)), Some(Room::new(1, 11))] {
                    let atom = Atom::new(feature, t, room);
                    keys.insert(atom);
                    names.insert(atom.to_string());
                }
            }
        }
        assert_eq!(keys.len(), names.len());
    }

    #[test]
    fn room_stench_and_stench_percept_differ() {
        let room = Atom::fluent(Feature::Stench, 1);
        let percept = Atom::fluent(Feature::Percept(Sense::Stench), 1);
        assert_ne!(room, percept);
        assert_ne!(room.to_string(), percept.to_string());
    }

    #[test]
    fn action_atoms_sort_by_key() {
        let atoms: std::collections::BTreeSet<Atom> = Action::ALL
            .into_iter()
            .rev()
            .map(|a| Atom::fluent(Feature::Action(a), 0))
            .collect();
        let names: Vec<String> = atoms.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec!["Forward_0", "TurnLeft_0", "TurnRight_0", "Shoot_0", "Grab_0", "Climb_0"]
        );
    }

    #[test]
    fn interning_is_stable() {
        let mut table = SymbolTable::new();
        let a = Atom::at(Feature::Pit, Room::new(1, 2));
        let b = Atom::at(Feature::Wumpus, Room::new(1, 2));
        let va = table.intern(a);
        let vb = table.intern(b);
        assert_ne!(va, vb);
        assert_eq!(table.intern(a), va);
        assert_eq!(table.len(), 2);
        assert_eq!(table.atom(vb), Some(b));
        assert_eq!(table.get(&a), Some(va));
    }
}
