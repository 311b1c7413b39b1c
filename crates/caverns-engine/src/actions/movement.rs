//! Walking through exits.

use tracing::info;

use super::{Lines, look};
use crate::error::{ActionError, ActionResult};
use crate::map::{Destination, Direction, RoomId, resolve_exit};
use crate::world::WorldState;

/// Printed when an exit leads to a fatal fall.
pub const FALL_TO_DEATH: &str =
    "You stumble and fall into the chasm and smash yourself to a pulp on the rocks below.";

/// Move the player one exit.
///
/// A blocked exit changes nothing. A fatal exit ends the game. Otherwise the
/// player arrives, the flags are recomputed, and the new room is described.
pub fn go(state: &mut WorldState, direction: Direction) -> ActionResult<Lines> {
    match resolve_exit(state.flags(), state.room(), direction) {
        Destination::NoExit => Err(ActionError::NoExit),
        Destination::Death => {
            info!(room = %state.room(), %direction, "player fell to their death");
            state.end();
            Ok(vec![FALL_TO_DEATH.to_string()])
        }
        Destination::Room(room) => Ok(arrive(state, room)),
    }
}

/// Put the player in `room`, settle the flags, and describe it.
pub(crate) fn arrive(state: &mut WorldState, room: RoomId) -> Lines {
    state.set_room(room);
    state.recompute_flags();
    look::render(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Exit, exit_cell};

    fn room(n: usize) -> RoomId {
        RoomId::new(n).unwrap()
    }

    #[test]
    fn literal_exit_moves_and_describes() {
        let mut state = WorldState::new();
        let lines = go(&mut state, Direction::North).unwrap();
        assert_eq!(state.room(), room(2));
        assert_eq!(lines[0], room(2).description());
    }

    #[test]
    fn every_literal_exit_leads_where_the_table_says() {
        for from in RoomId::all() {
            for direction in Direction::ALL {
                if let Exit::Fixed(dest) = exit_cell(from, direction) {
                    let mut state = WorldState::new();
                    state.set_room(from);
                    go(&mut state, direction).unwrap();
                    assert_eq!(state.room(), dest);
                }
            }
        }
    }

    #[test]
    fn blocked_exit_changes_nothing() {
        let mut state = WorldState::new();
        let before = state.clone();
        assert_eq!(go(&mut state, Direction::South), Err(ActionError::NoExit));
        assert_eq!(state, before);
    }

    #[test]
    fn fatal_exit_ends_the_game() {
        let mut state = WorldState::new();
        state.set_room(room(9));
        let lines = go(&mut state, Direction::North).unwrap();
        assert_eq!(lines, vec![FALL_TO_DEATH]);
        assert!(!state.is_alive());
        assert_eq!(state.room(), room(9));
    }

    #[test]
    fn crossing_the_bridge_cuts_the_rope() {
        let mut state = WorldState::new();
        state.set_room(room(10));
        go(&mut state, Direction::South).unwrap();
        assert_eq!(state.room(), room(11));
        assert_eq!(state.flags().bridge_rope, Destination::Death);

        go(&mut state, Direction::North).unwrap();
        assert!(!state.is_alive());
    }

    #[test]
    fn drawbridge_is_fatal_until_lowered() {
        let mut state = WorldState::new();
        state.set_room(room(48));
        go(&mut state, Direction::East).unwrap();
        assert!(!state.is_alive());

        let mut state = WorldState::new();
        state.set_room(room(50));
        go(&mut state, Direction::West).unwrap();
        go(&mut state, Direction::West).unwrap();
        assert_eq!(state.room(), room(48));
        go(&mut state, Direction::East).unwrap();
        assert!(state.is_alive());
        assert_eq!(state.room(), room(49));
    }
}
