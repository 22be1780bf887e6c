//! Wumpus World domain vocabulary: rooms, orientations, percepts, actions.
//!
//! These are plain value types. None of them know about logic; the symbol
//! namer in [`crate::symbol`] turns them into propositional atoms.

use serde::{Deserialize, Serialize};

/// A 1-based grid coordinate in the cave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Room {
    pub x: u32,
    pub y: u32,
}

impl Room {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether this room lies inside a `width` x `height` cave.
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x >= 1 && self.x <= width && self.y >= 1 && self.y <= height
    }

    /// The room one step away in `direction`, if it is inside the cave.
    pub fn step(self, direction: Orientation, width: u32, height: u32) -> Option<Room> {
        let next = match direction {
            Orientation::North => Room::new(self.x, self.y + 1),
            Orientation::South => Room::new(self.x, self.y.checked_sub(1)?),
            Orientation::East => Room::new(self.x + 1, self.y),
            Orientation::West => Room::new(self.x.checked_sub(1)?, self.y),
        };
        next.in_bounds(width, height).then_some(next)
    }

    /// In-bounds compass neighbours, in west, north, east, south order.
    ///
    /// Each entry pairs the neighbour with the direction of travel that
    /// leads *from the neighbour into this room*.
    pub fn neighbours(self, width: u32, height: u32) -> Vec<(Room, Orientation)> {
        [
            (Orientation::West, Orientation::East),
            (Orientation::North, Orientation::South),
            (Orientation::East, Orientation::West),
            (Orientation::South, Orientation::North),
        ]
        .into_iter()
        .filter_map(|(side, heading)| self.step(side, width, height).map(|n| (n, heading)))
        .collect()
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

/// All rooms of a `width` x `height` cave, x-major then y.
pub fn rooms(width: u32, height: u32) -> impl Iterator<Item = Room> {
    (1..=width).flat_map(move |x| (1..=height).map(move |y| Room::new(x, y)))
}

/// Compass heading of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    /// Heading after a single left turn (North → West → South → East → North).
    pub fn turn_left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Heading after a single right turn.
    pub fn turn_right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::North => write!(f, "North"),
            Orientation::South => write!(f, "South"),
            Orientation::East => write!(f, "East"),
            Orientation::West => write!(f, "West"),
        }
    }
}

/// Where the agent is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentPosition {
    pub room: Room,
    pub orientation: Orientation,
}

impl AgentPosition {
    pub const fn new(x: u32, y: u32, orientation: Orientation) -> Self {
        Self {
            room: Room::new(x, y),
            orientation,
        }
    }
}

impl Default for AgentPosition {
    fn default() -> Self {
        Self::new(1, 1, Orientation::North)
    }
}

impl std::fmt::Display for AgentPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} facing {}", self.room, self.orientation)
    }
}

/// Actions the agent can take. Exactly one happens per time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Forward,
    TurnLeft,
    TurnRight,
    Shoot,
    Grab,
    Climb,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Forward,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Shoot,
        Action::Grab,
        Action::Climb,
    ];
}

/// The five-sensor percept received at one time step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Percept {
    pub stench: bool,
    pub breeze: bool,
    pub glitter: bool,
    pub bump: bool,
    pub scream: bool,
}

impl Percept {
    /// A percept with every sensor quiet.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_stench(mut self) -> Self {
        self.stench = true;
        self
    }

    pub fn with_breeze(mut self) -> Self {
        self.breeze = true;
        self
    }

    pub fn with_glitter(mut self) -> Self {
        self.glitter = true;
        self
    }

    pub fn with_bump(mut self) -> Self {
        self.bump = true;
        self
    }

    pub fn with_scream(mut self) -> Self {
        self.scream = true;
        self
    }
}
