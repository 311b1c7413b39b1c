//! Room graph and exit resolution.
//!
//! Every room has four exit slots. A slot is either fixed data or a
//! [`Exit::Dynamic`] token naming one of the six world flags; dynamic slots
//! are resolved against the current [`WorldFlags`] at lookup time.

use std::fmt;

use crate::error::{EngineError, EngineResult};
use crate::rooms::ROOMS;
use crate::world::WorldFlags;

/// Number of rooms in the map.
pub const NUM_ROOMS: usize = 54;

/// Exit slots per room.
pub const EXITS_PER_ROOM: usize = 4;

/// Identifier of a room, 1 to [`NUM_ROOMS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(u8);

impl RoomId {
    /// The room the player starts in.
    pub const START: Self = Self(1);

    /// Look up a room by number.
    pub fn new(number: usize) -> EngineResult<Self> {
        if (1..=NUM_ROOMS).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(EngineError::InvalidRoom(number))
        }
    }

    /// Construct from a number known to be in range. Only for static tables.
    pub(crate) const fn literal(number: u8) -> Self {
        Self(number)
    }

    /// The room number.
    pub fn number(self) -> usize {
        usize::from(self.0)
    }

    /// The static description of this room.
    pub fn description(self) -> &'static str {
        ROOMS[self.number() - 1].description
    }

    /// Every room in numeric order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=NUM_ROOMS as u8).map(Self)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of movement, in exit-slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// West.
    West,
    /// East.
    East,
}

impl Direction {
    /// All directions in the order commands test them.
    pub const ALL: [Self; EXITS_PER_ROOM] = [Self::North, Self::South, Self::West, Self::East];

    /// The command word for this direction.
    pub fn word(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::West => 2,
            Self::East => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// One of the six world flags that parameterize dynamic exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitFlag {
    /// The rope bridge over the chasm.
    BridgeRope,
    /// The castle drawbridge over the moat.
    Drawbridge,
    /// The ledge behind the waterfall.
    WaterfallLedge,
    /// The grate under the ventilation grill.
    Grate,
    /// The iron door that only a bomb can open.
    BombDoor,
    /// The locked section of the crypt wall.
    CryptWall,
}

impl ExitFlag {
    /// All flags.
    pub const ALL: [Self; 6] = [
        Self::BridgeRope,
        Self::Drawbridge,
        Self::WaterfallLedge,
        Self::Grate,
        Self::BombDoor,
        Self::CryptWall,
    ];

    /// Short name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::BridgeRope => "bridge-rope",
            Self::Drawbridge => "drawbridge",
            Self::WaterfallLedge => "waterfall-ledge",
            Self::Grate => "grate",
            Self::BombDoor => "bomb-door",
            Self::CryptWall => "crypt-wall",
        }
    }
}

impl fmt::Display for ExitFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where an exit currently leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// A room.
    Room(RoomId),
    /// Nowhere; the way is blocked.
    NoExit,
    /// A fatal fall.
    Death,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room(room) => write!(f, "{room}"),
            Self::NoExit => f.write_str("-"),
            Self::Death => f.write_str("death"),
        }
    }
}

/// A cell of the static exit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Always leads to this room.
    Fixed(RoomId),
    /// Never leads anywhere.
    NoExit,
    /// Always fatal.
    Death,
    /// Leads wherever the named flag currently points.
    Dynamic(ExitFlag),
}

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(room) => write!(f, "{room}"),
            Self::NoExit => f.write_str("-"),
            Self::Death => f.write_str("death"),
            Self::Dynamic(flag) => write!(f, "<{flag}>"),
        }
    }
}

/// The static table cell for a room and direction.
pub fn exit_cell(room: RoomId, direction: Direction) -> Exit {
    ROOMS[room.number() - 1].exits[direction.slot()]
}

/// Resolve where moving from `room` towards `direction` leads right now.
pub fn resolve_exit(flags: &WorldFlags, room: RoomId, direction: Direction) -> Destination {
    match exit_cell(room, direction) {
        Exit::Fixed(dest) => Destination::Room(dest),
        Exit::NoExit => Destination::NoExit,
        Exit::Death => Destination::Death,
        Exit::Dynamic(flag) => flags.get(flag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(n: usize) -> RoomId {
        RoomId::new(n).unwrap()
    }

    #[test]
    fn table_has_every_room() {
        assert_eq!(ROOMS.len(), NUM_ROOMS);
        assert!(RoomId::all().all(|r| !r.description().is_empty()));
    }

    #[test]
    fn fixed_exits_stay_inside_the_map() {
        for r in RoomId::all() {
            for d in Direction::ALL {
                if let Exit::Fixed(dest) = exit_cell(r, d) {
                    assert!(RoomId::new(dest.number()).is_ok(), "{r} {d} -> {dest}");
                }
            }
        }
    }

    #[test]
    fn looks_up_literal_exits() {
        let flags = WorldFlags::default();
        assert_eq!(
            resolve_exit(&flags, RoomId::START, Direction::North),
            Destination::Room(room(2))
        );
        assert_eq!(
            resolve_exit(&flags, RoomId::START, Direction::South),
            Destination::NoExit
        );
    }

    #[test]
    fn resolves_dynamic_tokens_against_flags() {
        let mut flags = WorldFlags::default();
        assert_eq!(
            exit_cell(room(10), Direction::South),
            Exit::Dynamic(ExitFlag::BridgeRope)
        );
        assert_eq!(
            resolve_exit(&flags, room(10), Direction::South),
            flags.get(ExitFlag::BridgeRope)
        );

        flags.set(ExitFlag::BridgeRope, Destination::Death);
        assert_eq!(
            resolve_exit(&flags, room(10), Direction::South),
            Destination::Death
        );
    }

    #[test]
    fn closed_flag_means_no_exit() {
        let flags = WorldFlags::default();
        assert_eq!(
            resolve_exit(&flags, room(38), Direction::South),
            Destination::NoExit
        );
    }

    #[test]
    fn every_flag_has_a_door() {
        for flag in ExitFlag::ALL {
            let used = RoomId::all()
                .flat_map(|r| Direction::ALL.map(|d| exit_cell(r, d)))
                .any(|cell| cell == Exit::Dynamic(flag));
            assert!(used, "{flag} is never referenced");
        }
    }

    #[test]
    fn invalid_room_numbers() {
        assert_eq!(RoomId::new(0), Err(EngineError::InvalidRoom(0)));
        assert_eq!(RoomId::new(55), Err(EngineError::InvalidRoom(55)));
    }
}
