//! The mutable world state.
//!
//! [`WorldState`] is the single aggregate threaded through every action:
//! where the player is, how many moves have passed, whether the candle still
//! burns, the six exit flags, the fight counter, and the position of every
//! catalog entity.

use tracing::debug;

use crate::catalog::{EntityId, NUM_ENTITIES};
use crate::map::{Destination, ExitFlag, RoomId};
use crate::rooms::landmarks;

/// Where an entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Lying or standing in a room.
    InRoom(RoomId),
    /// Out of play: killed, used up, or not yet introduced.
    Removed,
    /// In the player's inventory. Never true of a monster.
    Carried,
}

/// Current value of each flag that drives a dynamic exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldFlags {
    /// The rope bridge between the cliff and the far side of the chasm.
    pub bridge_rope: Destination,
    /// The drawbridge from the moat into the castle.
    pub drawbridge: Destination,
    /// The ledge behind the waterfall.
    pub waterfall_ledge: Destination,
    /// The grate below the ventilation grill.
    pub grate: Destination,
    /// The iron door.
    pub bomb_door: Destination,
    /// The crypt wall.
    pub crypt_wall: Destination,
}

impl Default for WorldFlags {
    fn default() -> Self {
        Self {
            bridge_rope: Destination::Room(landmarks::ROPE_BRIDGE),
            drawbridge: Destination::Death,
            waterfall_ledge: Destination::NoExit,
            grate: Destination::NoExit,
            bomb_door: Destination::NoExit,
            crypt_wall: Destination::NoExit,
        }
    }
}

impl WorldFlags {
    /// Read a flag.
    pub fn get(&self, flag: ExitFlag) -> Destination {
        match flag {
            ExitFlag::BridgeRope => self.bridge_rope,
            ExitFlag::Drawbridge => self.drawbridge,
            ExitFlag::WaterfallLedge => self.waterfall_ledge,
            ExitFlag::Grate => self.grate,
            ExitFlag::BombDoor => self.bomb_door,
            ExitFlag::CryptWall => self.crypt_wall,
        }
    }

    /// Write a flag.
    pub fn set(&mut self, flag: ExitFlag, value: Destination) {
        let slot = match flag {
            ExitFlag::BridgeRope => &mut self.bridge_rope,
            ExitFlag::Drawbridge => &mut self.drawbridge,
            ExitFlag::WaterfallLedge => &mut self.waterfall_ledge,
            ExitFlag::Grate => &mut self.grate,
            ExitFlag::BombDoor => &mut self.bomb_door,
            ExitFlag::CryptWall => &mut self.crypt_wall,
        };
        *slot = value;
    }
}

const GONE: Position = Position::Removed;

const fn at(room: u8) -> Position {
    Position::InRoom(RoomId::literal(room))
}

const INITIAL_POSITIONS: [Position; NUM_ENTITIES] = [
    // monsters
    at(36),
    at(19),
    at(10),
    at(14),
    at(17),
    at(47),
    // objects
    at(8),
    at(1),
    at(51),
    at(45),
    at(22),
    at(46),
    at(54),
    at(19),
    at(19),
    at(19),
    at(19),
    GONE,
    at(34),
    at(7),
    at(18),
    at(15),
    at(24),
    at(38),
];

/// The complete mutable state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldState {
    room: RoomId,
    moves: u32,
    alive: bool,
    light: bool,
    flags: WorldFlags,
    fights: u32,
    positions: [Position; NUM_ENTITIES],
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState {
    /// The fixed starting snapshot.
    pub fn new() -> Self {
        Self {
            room: RoomId::START,
            moves: 0,
            alive: true,
            light: true,
            flags: WorldFlags::default(),
            fights: 0,
            positions: INITIAL_POSITIONS,
        }
    }

    /// The room the player is in.
    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Turns processed so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// False once the player has died or quit.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether the candle still gives light.
    pub fn has_light(&self) -> bool {
        self.light
    }

    /// Current exit flags.
    pub fn flags(&self) -> &WorldFlags {
        &self.flags
    }

    /// Combat attempts made this session.
    pub fn fights(&self) -> u32 {
        self.fights
    }

    /// Where an entity is.
    pub fn position(&self, id: EntityId) -> Position {
        self.positions[id.index() - 1]
    }

    /// Whether the player carries an entity.
    pub fn is_carried(&self, id: EntityId) -> bool {
        self.position(id) == Position::Carried
    }

    /// Whether an entity is in the player's room.
    pub fn is_here(&self, id: EntityId) -> bool {
        self.position(id) == Position::InRoom(self.room)
    }

    /// Entities in the player's room, monsters first.
    pub fn entities_here(&self) -> impl Iterator<Item = EntityId> + '_ {
        EntityId::all().filter(|id| self.is_here(*id))
    }

    /// Monsters in the player's room.
    pub fn monsters_here(&self) -> impl Iterator<Item = EntityId> + '_ {
        EntityId::monsters().filter(|id| self.is_here(*id))
    }

    /// Carried objects in index order.
    pub fn carried(&self) -> impl Iterator<Item = EntityId> + '_ {
        EntityId::objects().filter(|id| self.is_carried(*id))
    }

    /// Number of carried objects.
    pub fn carried_count(&self) -> usize {
        self.carried().count()
    }

    pub(crate) fn set_room(&mut self, room: RoomId) {
        self.room = room;
    }

    pub(crate) fn set_position(&mut self, id: EntityId, position: Position) {
        debug_assert!(!(id.is_monster() && position == Position::Carried));
        self.positions[id.index() - 1] = position;
    }

    pub(crate) fn set_flag(&mut self, flag: ExitFlag, value: Destination) {
        self.flags.set(flag, value);
    }

    /// Count a turn; returns the new move number.
    pub(crate) fn tick(&mut self) -> u32 {
        self.moves += 1;
        self.moves
    }

    /// Count a combat attempt; returns the new total.
    pub(crate) fn record_fight(&mut self) -> u32 {
        self.fights += 1;
        self.fights
    }

    pub(crate) fn extinguish(&mut self) {
        self.light = false;
    }

    pub(crate) fn end(&mut self) {
        self.alive = false;
    }

    /// The flags implied by the current room and entity positions.
    ///
    /// Rules only ever assign; a flag whose condition does not hold keeps
    /// its current value.
    pub fn recomputed_flags(&self) -> WorldFlags {
        let mut flags = self.flags;
        if self.room == landmarks::ROPE_BRIDGE {
            flags.bridge_rope = Destination::Death;
        }
        if self.room == landmarks::WATERFALL {
            flags.waterfall_ledge = Destination::Room(landmarks::WATERFALL_LEDGE);
        }
        if self.room == landmarks::STATUE_ROOM {
            flags.waterfall_ledge = Destination::NoExit;
        }
        if self.position(EntityId::GRILL) != Position::InRoom(landmarks::GRILL_START) {
            flags.grate = Destination::Room(landmarks::BELOW_GRATE);
        }
        if self.room == landmarks::CASTLE_COURTYARD {
            flags.drawbridge = Destination::Room(landmarks::CASTLE_COURTYARD);
        }
        flags
    }

    /// Apply [`Self::recomputed_flags`].
    pub fn recompute_flags(&mut self) {
        let next = self.recomputed_flags();
        for flag in ExitFlag::ALL {
            let (old, new) = (self.flags.get(flag), next.get(flag));
            if old != new {
                debug!(%flag, %old, %new, "exit flag changed");
            }
        }
        self.flags = next;
    }
}
