//! Temporal axioms told once per time step.
//!
//! For step `t` this ties the percepts at `t` to the room the agent is in,
//! defines the `OK` safety fluent, carries the arrow and the wumpus's life
//! forward to `t + 1`, and (unless disabled) states the successor-state
//! axioms for location and orientation.

use crate::logic::Sentence;
use crate::symbol::{Atom, Feature, Sense};
use crate::world::{Action, AgentPosition, Orientation, Room, rooms};

fn location(t: u32, room: Room) -> Atom {
    Atom::fluent_at(Feature::Location, t, room)
}

fn facing(t: u32, orientation: Orientation) -> Atom {
    Atom::fluent(Feature::Facing(orientation), t)
}

fn action(t: u32, action: Action) -> Atom {
    Atom::fluent(Feature::Action(action), t)
}

fn percept(t: u32, sense: Sense) -> Atom {
    Atom::fluent(Feature::Percept(sense), t)
}

/// Ground facts at t = 0: start room and heading, arrow in hand, wumpus
/// alive, start room visited.
pub fn initial_state(start: AgentPosition) -> Vec<Sentence> {
    vec![
        Sentence::atom(location(0, start.room)),
        Sentence::atom(facing(0, start.orientation)),
        Sentence::atom(Atom::fluent(Feature::HaveArrow, 0)),
        Sentence::atom(Atom::fluent(Feature::WumpusAlive, 0)),
        Sentence::atom(Atom::at(Feature::Visited, start.room)),
    ]
}

/// `L_t(r) ⟹ (Breeze_t ⟺ B(r))` and `L_t(r) ⟹ (Stench_t ⟺ S(r))`.
pub fn percept_links(width: u32, height: u32, t: u32) -> Vec<Sentence> {
    let mut out = Vec::new();
    for room in rooms(width, height) {
        out.push(Sentence::implies(
            location(t, room),
            Sentence::iff(percept(t, Sense::Breeze), Atom::at(Feature::Breeze, room)),
        ));
        out.push(Sentence::implies(
            location(t, room),
            Sentence::iff(percept(t, Sense::Stench), Atom::at(Feature::Stench, room)),
        ));
    }
    out
}

/// `OK_t(r) ⟺ ¬P(r) ∧ ¬(W(r) ∧ WumpusAlive_t)`.
pub fn ok_to_move(width: u32, height: u32, t: u32) -> Vec<Sentence> {
    let alive = Atom::fluent(Feature::WumpusAlive, t);
    rooms(width, height)
        .map(|room| {
            Sentence::iff(
                Atom::fluent_at(Feature::OkToMoveInto, t, room),
                Sentence::and(
                    Sentence::not(Atom::at(Feature::Pit, room)),
                    Sentence::not(Sentence::and(Atom::at(Feature::Wumpus, room), alive)),
                ),
            )
        })
        .collect()
}

/// `HaveArrow_{t+1} ⟺ HaveArrow_t ∧ ¬Shoot_t`.
pub fn arrow_frame(t: u32) -> Sentence {
    Sentence::iff(
        Atom::fluent(Feature::HaveArrow, t + 1),
        Sentence::and(
            Atom::fluent(Feature::HaveArrow, t),
            Sentence::not(action(t, Action::Shoot)),
        ),
    )
}

/// `WumpusAlive_{t+1} ⟺ WumpusAlive_t ∧ ¬Scream_{t+1}`.
pub fn wumpus_alive_frame(t: u32) -> Sentence {
    Sentence::iff(
        Atom::fluent(Feature::WumpusAlive, t + 1),
        Sentence::and(
            Atom::fluent(Feature::WumpusAlive, t),
            Sentence::not(percept(t + 1, Sense::Scream)),
        ),
    )
}

/// Location successor-state axioms plus the `L_{t+1}(r) ⟹ LV(r)` shortcut.
///
/// The agent is in `r` at `t + 1` iff it was there at `t` and either did not
/// move forward or bumped into a wall, or it was in a neighbour facing `r`
/// and moved forward.
pub fn location_successors(width: u32, height: u32, t: u32) -> Vec<Sentence> {
    let forward = action(t, Action::Forward);
    let bump = percept(t + 1, Sense::Bump);
    let mut out = Vec::with_capacity((width * height * 2) as usize);
    for room in rooms(width, height) {
        let mut causes = vec![Sentence::and(
            location(t, room),
            Sentence::or(Sentence::not(forward), bump),
        )];
        for (neighbour, heading) in room.neighbours(width, height) {
            causes.push(Sentence::all([
                Sentence::atom(location(t, neighbour)),
                Sentence::atom(facing(t, heading)),
                Sentence::atom(forward),
            ]));
        }
        out.push(Sentence::iff(location(t + 1, room), Sentence::any(causes)));
        out.push(Sentence::implies(
            location(t + 1, room),
            Atom::at(Feature::Visited, room),
        ));
    }
    out
}

/// Orientation successor-state axioms, one per heading.
///
/// `Facing_d_{t+1}` holds iff the agent turned left from the heading whose
/// left turn is `d`, turned right from the heading whose right turn is `d`,
/// or already faced `d` and did not turn.
pub fn orientation_successors(t: u32) -> Vec<Sentence> {
    let left = action(t, Action::TurnLeft);
    let right = action(t, Action::TurnRight);
    Orientation::ALL
        .into_iter()
        .map(|d| {
            Sentence::iff(
                facing(t + 1, d),
                Sentence::any([
                    Sentence::and(facing(t, d.turn_left()), right),
                    Sentence::and(facing(t, d.turn_right()), left),
                    Sentence::all([
                        Sentence::atom(facing(t, d)),
                        Sentence::not(left),
                        Sentence::not(right),
                    ]),
                ]),
            )
        })
        .collect()
}

/// Everything told for step `t`, in order.
pub fn sentences(
    width: u32,
    height: u32,
    start: AgentPosition,
    t: u32,
    successor_axioms: bool,
) -> Vec<Sentence> {
    let mut out = if t == 0 { initial_state(start) } else { Vec::new() };
    out.extend(percept_links(width, height, t));
    out.extend(ok_to_move(width, height, t));
    out.push(arrow_frame(t));
    out.push(wumpus_alive_frame(t));
    if successor_axioms {
        out.extend(location_successors(width, height, t));
        out.extend(orientation_successors(t));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_only_at_time_zero() {
        let start = AgentPosition::default();
        let zero = sentences(2, 2, start, 0, true);
        let one = sentences(2, 2, start, 1, true);
        assert_eq!(zero.len(), one.len() + 5);
        assert_eq!(zero[0].to_string(), "L_0_1_1");
        assert_eq!(zero[1].to_string(), "FacingNorth_0");
    }

    #[test]
    fn disabling_successor_axioms_saves_per_room_sentences() {
        let start = AgentPosition::default();
        let full = sentences(3, 3, start, 1, true);
        let lean = sentences(3, 3, start, 1, false);
        // Two location sentences per room plus four orientation axioms.
        assert_eq!(full.len() - lean.len(), 9 * 2 + 4);
    }

    #[test]
    fn north_axiom_lists_both_turn_predecessors() {
        let axioms = orientation_successors(2);
        assert_eq!(
            axioms[0].to_string(),
            "FacingNorth_3 <=> ((FacingWest_2 & TurnRight_2) | (FacingEast_2 & TurnLeft_2) \
             | (FacingNorth_2 & ~TurnLeft_2 & ~TurnRight_2))"
        );
    }

    #[test]
    fn every_heading_has_exactly_two_turn_predecessors() {
        for d in Orientation::ALL {
            let via_right = d.turn_left();
            let via_left = d.turn_right();
            assert_ne!(via_left, via_right);
            assert_eq!(via_right.turn_right(), d);
            assert_eq!(via_left.turn_left(), d);
        }
    }

    #[test]
    fn corner_location_axiom_uses_facing_toward_the_room() {
        let axioms = location_successors(2, 2, 0);
        // Room (1,1): neighbours north (1,2) must face South, east (2,1) must face West.
        assert_eq!(
            axioms[0].to_string(),
            "L_1_1_1 <=> ((L_0_1_1 & (~Forward_0 | Bump_1)) \
             | (L_0_1_2 & FacingSouth_0 & Forward_0) \
             | (L_0_2_1 & FacingWest_0 & Forward_0))"
        );
        assert_eq!(axioms[1].to_string(), "L_1_1_1 => LV_1_1");
    }

    #[test]
    fn frame_axioms_reference_the_right_steps() {
        assert_eq!(
            arrow_frame(4).to_string(),
            "HaveArrow_5 <=> (HaveArrow_4 & ~Shoot_4)"
        );
        assert_eq!(
            wumpus_alive_frame(4).to_string(),
            "WumpusAlive_5 <=> (WumpusAlive_4 & ~Scream_5)"
        );
    }

    #[test]
    fn ok_axiom_shape() {
        let ok = ok_to_move(1, 1, 0);
        assert_eq!(
            ok[0].to_string(),
            "OK_0_1_1 <=> (~P_1_1 & ~(W_1_1 & WumpusAlive_0))"
        );
    }
}
