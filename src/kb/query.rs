//! Derived queries over the knowledge base.
//!
//! Every answer here comes from an entailment check against the current
//! theory. Room-set queries scan the whole cave, one check per room, and
//! never mutate the theory.

use serde::Serialize;

use crate::error::{InconsistencyError, KbResult};
use crate::logic::Sentence;
use crate::symbol::{Atom, Feature, Sense};
use crate::world::{AgentPosition, Orientation, Room, rooms};

use super::WumpusKnowledgeBase;

/// Ordered, duplicate-free set of rooms.
///
/// Rooms keep insertion order; query results are filled x-major, so they
/// come out as `[1,1], [1,2], ..., [2,1], ...`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoomSet {
    rooms: Vec<Room>,
}

impl RoomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `room` unless already present. Returns whether it was added.
    pub fn insert(&mut self, room: Room) -> bool {
        if self.rooms.contains(&room) {
            return false;
        }
        self.rooms.push(room);
        true
    }

    pub fn contains(&self, room: Room) -> bool {
        self.rooms.contains(&room)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    pub fn as_slice(&self) -> &[Room] {
        &self.rooms
    }
}

impl FromIterator<Room> for RoomSet {
    fn from_iter<I: IntoIterator<Item = Room>>(iter: I) -> Self {
        let mut set = RoomSet::new();
        for room in iter {
            set.insert(room);
        }
        set
    }
}

impl IntoIterator for RoomSet {
    type Item = Room;
    type IntoIter = std::vec::IntoIter<Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.into_iter()
    }
}

impl<'a> IntoIterator for &'a RoomSet {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

impl std::fmt::Display for RoomSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, room) in self.rooms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{room}")?;
        }
        write!(f, "}}")
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl WumpusKnowledgeBase {
    /// Whether the theory entails `query`.
    pub fn ask(&self, query: &Sentence) -> KbResult<bool> {
        let entailed = self.solver.entails(&self.theory, query)?;
        tracing::trace!(%query, entailed, solver = self.solver.name(), "ask");
        Ok(entailed)
    }

    fn ask_atom(&self, atom: Atom) -> KbResult<bool> {
        self.ask(&Sentence::atom(atom))
    }

    fn ask_not(&self, atom: Atom) -> KbResult<bool> {
        self.ask(&Sentence::not(atom))
    }

    /// Rooms of the cave, x-major, for which `keep` holds.
    fn rooms_where(&self, mut keep: impl FnMut(Room) -> KbResult<bool>) -> KbResult<RoomSet> {
        let mut set = RoomSet::new();
        for room in rooms(self.width(), self.height()) {
            if keep(room)? {
                set.insert(room);
            }
        }
        Ok(set)
    }

    /// The agent's room and heading at `t`.
    ///
    /// Exactly one location atom and exactly one facing atom must be
    /// entailed; anything else is reported as an [`InconsistencyError`]
    /// listing the entailed candidates.
    pub fn current_position(&self, t: u32) -> KbResult<AgentPosition> {
        let located = self.rooms_where(|room| {
            self.ask_atom(Atom::fluent_at(Feature::Location, t, room))
        })?;
        let room = match located.as_slice() {
            [room] => *room,
            candidates => {
                tracing::warn!(t, candidates = %located, "location not uniquely entailed");
                return Err(InconsistencyError::Position {
                    time: t,
                    candidates: candidates.to_vec(),
                }
                .into());
            }
        };

        let mut headings = Vec::new();
        for orientation in Orientation::ALL {
            if self.ask_atom(Atom::fluent(Feature::Facing(orientation), t))? {
                headings.push(orientation);
            }
        }
        let orientation = match headings.as_slice() {
            [orientation] => *orientation,
            candidates => {
                tracing::warn!(t, ?candidates, "orientation not uniquely entailed");
                return Err(InconsistencyError::Orientation {
                    time: t,
                    candidates: candidates.to_vec(),
                }
                .into());
            }
        };

        Ok(AgentPosition { room, orientation })
    }

    /// Rooms provably safe to enter at `t`.
    pub fn safe_rooms(&self, t: u32) -> KbResult<RoomSet> {
        self.rooms_where(|room| self.is_ok(t, room))
    }

    /// Rooms the agent is not known to have visited.
    pub fn unvisited_rooms(&self) -> KbResult<RoomSet> {
        self.rooms_where(|room| Ok(!self.ask_atom(Atom::at(Feature::Visited, room))?))
    }

    /// Rooms where the wumpus has not been ruled out.
    pub fn possible_wumpus_rooms(&self) -> KbResult<RoomSet> {
        self.rooms_where(|room| Ok(!self.ask_not(Atom::at(Feature::Wumpus, room))?))
    }

    /// Rooms not provably unsafe at `t`. Always a superset of
    /// [`safe_rooms`](Self::safe_rooms) on a consistent theory.
    pub fn not_unsafe_rooms(&self, t: u32) -> KbResult<RoomSet> {
        self.rooms_where(|room| {
            Ok(!self.ask_not(Atom::fluent_at(Feature::OkToMoveInto, t, room))?)
        })
    }

    /// Whether the agent provably still holds its arrow at `t`.
    pub fn has_arrow(&self, t: u32) -> KbResult<bool> {
        self.ask_atom(Atom::fluent(Feature::HaveArrow, t))
    }

    /// Whether glitter was provably perceived at `t`.
    pub fn glitter(&self, t: u32) -> KbResult<bool> {
        self.ask_atom(Atom::fluent(Feature::Percept(Sense::Glitter), t))
    }

    /// Whether `room` is provably safe to enter at `t`.
    pub fn is_ok(&self, t: u32, room: Room) -> KbResult<bool> {
        self.ask_atom(Atom::fluent_at(Feature::OkToMoveInto, t, room))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KbConfig;
    use crate::error::KbError;
    use crate::world::{Action, Percept};

    fn room(x: u32, y: u32) -> Room {
        Room::new(x, y)
    }

    #[test]
    fn room_set_deduplicates_in_order() {
        let set: RoomSet = [room(2, 1), room(1, 1), room(2, 1)].into_iter().collect();
        assert_eq!(set.as_slice(), &[room(2, 1), room(1, 1)]);
        assert!(set.contains(room(1, 1)));
        assert_eq!(set.to_string(), "{[2,1], [1,1]}");
    }

    #[test]
    fn room_set_serializes_as_list() {
        let set: RoomSet = [room(1, 2)].into_iter().collect();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!([{ "x": 1, "y": 2 }]));
    }

    #[test]
    fn start_position_is_known_at_time_zero() {
        let mut kb = WumpusKnowledgeBase::new(KbConfig::square(2)).unwrap();
        kb.tell_temporal_physics(0);
        assert_eq!(kb.current_position(0).unwrap(), AgentPosition::default());
    }

    #[test]
    fn empty_percept_makes_neighbours_safe() {
        let mut kb = WumpusKnowledgeBase::new(KbConfig::square(3)).unwrap();
        kb.record_percept(&Percept::none(), 0);
        kb.tell_temporal_physics(0);
        let safe = kb.safe_rooms(0).unwrap();
        assert_eq!(safe.as_slice(), &[room(1, 1), room(1, 2), room(2, 1)]);
        let candidates = kb.possible_wumpus_rooms().unwrap();
        assert!(!candidates.contains(room(1, 2)));
        assert!(candidates.contains(room(3, 3)));
    }

    #[test]
    fn unknown_rooms_are_not_unsafe() {
        let mut kb = WumpusKnowledgeBase::new(KbConfig::square(2)).unwrap();
        kb.tell_temporal_physics(0);
        assert_eq!(kb.not_unsafe_rooms(0).unwrap().len(), 4);
        assert_eq!(kb.safe_rooms(0).unwrap().as_slice(), &[room(1, 1)]);
    }

    #[test]
    fn only_start_is_visited_initially() {
        let mut kb = WumpusKnowledgeBase::new(KbConfig::square(2)).unwrap();
        kb.tell_temporal_physics(0);
        let unvisited = kb.unvisited_rooms().unwrap();
        assert_eq!(unvisited.as_slice(), &[room(1, 2), room(2, 1), room(2, 2)]);
    }

    #[test]
    fn shooting_spends_the_arrow() {
        let mut kb = WumpusKnowledgeBase::new(KbConfig::square(2)).unwrap();
        kb.record_percept(&Percept::none(), 0);
        kb.tell_temporal_physics(0);
        assert!(kb.has_arrow(0).unwrap());
        kb.record_action(Action::Shoot, 0);
        kb.tell_temporal_physics(1);
        assert!(!kb.has_arrow(1).unwrap());
        assert!(kb.ask(&Sentence::not(Atom::fluent(Feature::HaveArrow, 1))).unwrap());
    }

    #[test]
    fn glitter_follows_the_percept() {
        let mut kb = WumpusKnowledgeBase::new(KbConfig::square(2)).unwrap();
        kb.record_percept(&Percept::none().with_glitter(), 0);
        assert!(kb.glitter(0).unwrap());
        assert!(!kb.glitter(1).unwrap());
    }

    #[test]
    fn missing_position_is_reported_not_guessed() {
        let mut kb =
            WumpusKnowledgeBase::new(KbConfig::square(2).without_successor_axioms()).unwrap();
        kb.tell_temporal_physics(0);
        kb.record_action(Action::Forward, 0);
        kb.tell_temporal_physics(1);
        let err = kb.current_position(1).unwrap_err();
        match err {
            KbError::Inconsistent(InconsistencyError::Position { time, candidates }) => {
                assert_eq!(time, 1);
                assert!(candidates.is_empty());
            }
            other => panic!("expected a position inconsistency, got {other}"),
        }
    }

    #[test]
    fn missing_heading_is_reported_not_guessed() {
        let mut kb =
            WumpusKnowledgeBase::new(KbConfig::square(2).without_successor_axioms()).unwrap();
        kb.tell_temporal_physics(0);
        kb.tell(Sentence::atom(Atom::fluent_at(
            Feature::Location,
            1,
            Room::new(1, 1),
        )));
        match kb.current_position(1) {
            Err(KbError::Inconsistent(InconsistencyError::Orientation { time, candidates })) => {
                assert_eq!(time, 1);
                assert!(candidates.is_empty());
            }
            other => panic!("expected an orientation inconsistency, got {other:?}"),
        }
    }

    /// Counts TRACE-level events.
    struct TraceCounter(std::sync::Arc<std::sync::atomic::AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for TraceCounter {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() == tracing::Level::TRACE {
                self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn each_ask_traces_once() {
        use tracing_subscriber::layer::SubscriberExt;

        let kb = WumpusKnowledgeBase::new(KbConfig::square(2)).unwrap();
        let count = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(TraceCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, || {
            kb.ask(&Sentence::not(Atom::at(Feature::Pit, room(1, 1))))
                .unwrap();
        });
        assert_eq!(count.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
