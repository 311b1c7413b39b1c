//! One-off trigger words.

use super::{Lines, movement};
use crate::catalog::EntityId;
use crate::error::{ActionError, ActionResult};
use crate::map::{Destination, ExitFlag, RoomId};
use crate::parser::Trigger;
use crate::rooms::landmarks;
use crate::world::{Position, WorldState};

fn require(state: &WorldState, item: EntityId) -> ActionResult<()> {
    if state.is_carried(item) {
        Ok(())
    } else {
        Err(ActionError::MissingItem(item))
    }
}

fn teleport(state: &mut WorldState, to: RoomId, narration: &str) -> Lines {
    let mut lines = vec![narration.to_string()];
    lines.extend(movement::arrive(state, to));
    lines
}

/// Carry out a trigger word in the current room.
pub fn perform(state: &mut WorldState, trigger: Trigger) -> ActionResult<Lines> {
    let room = state.room();
    match trigger {
        Trigger::Swim if room == landmarks::LAKE_SHORE => Ok(teleport(
            state,
            landmarks::FAR_SHORE,
            "You plunge into the icy water and swim across the lake.",
        )),
        Trigger::Swim if room == landmarks::FAR_SHORE => Ok(teleport(
            state,
            landmarks::LAKE_SHORE,
            "You plunge into the icy water and swim back across the lake.",
        )),
        Trigger::Jump if room == landmarks::WATERFALL => Ok(teleport(
            state,
            landmarks::PLUNGE_POOL,
            "You leap from the top of the waterfall and land with a splash.",
        )),
        Trigger::ClimbUp if room == landmarks::SHAFT_BOTTOM => {
            require(state, EntityId::ROPE)?;
            Ok(teleport(
                state,
                landmarks::SHAFT_TOP,
                "You hook the rope over a jutting rock and haul yourself up the shaft.",
            ))
        }
        Trigger::ClimbDown if room == landmarks::SHAFT_TOP => Ok(teleport(
            state,
            landmarks::SHAFT_BOTTOM,
            "You clamber down the shaft.",
        )),
        Trigger::Unlock if room == landmarks::CRYPT => {
            require(state, EntityId::KEY)?;
            state.set_flag(
                ExitFlag::CryptWall,
                Destination::Room(landmarks::SECRET_PASSAGE),
            );
            Ok(vec![
                "The key turns stiffly and a section of the crypt wall grinds open to the north."
                    .to_string(),
            ])
        }
        Trigger::Ignite if room == landmarks::IRON_DOOR => {
            require(state, EntityId::BOMB)?;
            if !state.has_light() {
                return Err(ActionError::TooDark);
            }
            state.set_position(EntityId::BOMB, Position::Removed);
            state.set_flag(
                ExitFlag::BombDoor,
                Destination::Room(landmarks::BLASTED_DOORWAY),
            );
            Ok(vec![
                "You light the fuse and dive for cover. The bomb blows the iron door apart!"
                    .to_string(),
            ])
        }
        _ => Err(ActionError::NothingHappens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(n: usize) -> RoomId {
        RoomId::new(n).unwrap()
    }

    fn state_in(n: usize) -> WorldState {
        let mut state = WorldState::new();
        state.set_room(room(n));
        state
    }

    #[test]
    fn swim_crosses_the_lake_both_ways() {
        let mut state = state_in(21);
        let lines = perform(&mut state, Trigger::Swim).unwrap();
        assert_eq!(state.room(), room(25));
        assert_eq!(lines[1], room(25).description());

        perform(&mut state, Trigger::Swim).unwrap();
        assert_eq!(state.room(), room(21));
    }

    #[test]
    fn trigger_in_wrong_room_does_nothing() {
        let mut state = WorldState::new();
        let before = state.clone();
        for trigger in Trigger::ALL {
            assert_eq!(perform(&mut state, trigger), Err(ActionError::NothingHappens));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn jump_from_waterfall() {
        let mut state = state_in(45);
        perform(&mut state, Trigger::Jump).unwrap();
        assert_eq!(state.room(), room(46));
    }

    #[test]
    fn climbing_up_needs_the_rope() {
        let mut state = state_in(33);
        assert_eq!(
            perform(&mut state, Trigger::ClimbUp),
            Err(ActionError::MissingItem(EntityId::ROPE))
        );
        assert_eq!(state.room(), room(33));

        state.set_position(EntityId::ROPE, Position::Carried);
        perform(&mut state, Trigger::ClimbUp).unwrap();
        assert_eq!(state.room(), room(37));

        perform(&mut state, Trigger::ClimbDown).unwrap();
        assert_eq!(state.room(), room(33));
    }

    #[test]
    fn key_opens_the_crypt_wall() {
        let mut state = state_in(31);
        assert_eq!(
            perform(&mut state, Trigger::Unlock),
            Err(ActionError::MissingItem(EntityId::KEY))
        );
        assert_eq!(state.flags().crypt_wall, Destination::NoExit);

        state.set_position(EntityId::KEY, Position::Carried);
        perform(&mut state, Trigger::Unlock).unwrap();
        assert_eq!(state.flags().crypt_wall, Destination::Room(room(32)));
        assert!(state.is_carried(EntityId::KEY));
    }

    #[test]
    fn bomb_blows_the_iron_door() {
        let mut state = state_in(52);
        state.set_position(EntityId::BOMB, Position::Carried);
        perform(&mut state, Trigger::Ignite).unwrap();
        assert_eq!(state.position(EntityId::BOMB), Position::Removed);
        assert_eq!(state.flags().bomb_door, Destination::Room(room(53)));

        state.recompute_flags();
        assert_eq!(state.flags().bomb_door, Destination::Room(room(53)));
    }

    #[test]
    fn bomb_needs_light() {
        let mut state = state_in(52);
        state.set_position(EntityId::BOMB, Position::Carried);
        state.extinguish();
        assert_eq!(perform(&mut state, Trigger::Ignite), Err(ActionError::TooDark));
        assert!(state.is_carried(EntityId::BOMB));
        assert_eq!(state.flags().bomb_door, Destination::NoExit);
    }
}
