//! Static room descriptions and exit table.
//!
//! Slot order is north, south, west, east.

use crate::map::{EXITS_PER_ROOM, Exit, ExitFlag, NUM_ROOMS, RoomId};

/// Immutable data for one room.
pub(crate) struct RoomData {
    pub(crate) description: &'static str,
    pub(crate) exits: [Exit; EXITS_PER_ROOM],
}

/// Rooms that world rules refer to by number.
pub(crate) mod landmarks {
    use crate::map::RoomId;

    pub(crate) const ROPE_BRIDGE: RoomId = RoomId::literal(11);
    pub(crate) const LAKE_SHORE: RoomId = RoomId::literal(21);
    pub(crate) const FAR_SHORE: RoomId = RoomId::literal(25);
    pub(crate) const CRYPT: RoomId = RoomId::literal(31);
    pub(crate) const SECRET_PASSAGE: RoomId = RoomId::literal(32);
    pub(crate) const SHAFT_BOTTOM: RoomId = RoomId::literal(33);
    pub(crate) const STATUE_ROOM: RoomId = RoomId::literal(35);
    pub(crate) const SHAFT_TOP: RoomId = RoomId::literal(37);
    pub(crate) const GRILL_START: RoomId = RoomId::literal(38);
    pub(crate) const BELOW_GRATE: RoomId = RoomId::literal(39);
    pub(crate) const WATERFALL_LEDGE: RoomId = RoomId::literal(43);
    pub(crate) const WATERFALL: RoomId = RoomId::literal(45);
    pub(crate) const PLUNGE_POOL: RoomId = RoomId::literal(46);
    pub(crate) const CASTLE_COURTYARD: RoomId = RoomId::literal(49);
    pub(crate) const IRON_DOOR: RoomId = RoomId::literal(52);
    pub(crate) const BLASTED_DOORWAY: RoomId = RoomId::literal(53);
}

const X: Exit = Exit::NoExit;
const DEATH: Exit = Exit::Death;

const fn to(number: u8) -> Exit {
    Exit::Fixed(RoomId::literal(number))
}

const fn flag(flag: ExitFlag) -> Exit {
    Exit::Dynamic(flag)
}

const fn room(description: &'static str, exits: [Exit; EXITS_PER_ROOM]) -> RoomData {
    RoomData { description, exits }
}

pub(crate) static ROOMS: [RoomData; NUM_ROOMS] = [
    // 1
    room(
        "You are standing at the entrance to a dark cave. A narrow path leads north into the hillside.",
        [to(2), X, X, X],
    ),
    room(
        "You are in a twisting tunnel. Passages lead north, south and east.",
        [to(3), to(1), X, to(4)],
    ),
    room(
        "You are at a junction of three passages. Water drips from the ceiling.",
        [to(5), to(2), to(6), X],
    ),
    room(
        "You are in a damp cave. A rusty gate hangs open to the north.",
        [to(7), X, to(2), X],
    ),
    room(
        "You are in a narrow passage running north to south.",
        [to(8), to(3), X, X],
    ),
    room(
        "You are in a low chamber littered with old bones. A dark opening leads north.",
        [to(9), X, X, to(3)],
    ),
    room(
        "You are in an old armoury. Empty weapon racks line the walls.",
        [X, to(4), X, X],
    ),
    room(
        "You are in a small grotto. A passage leads east towards the howl of the wind.",
        [X, to(5), X, to(10)],
    ),
    room(
        "You are at the edge of a bottomless pit. Only a fool would go any further north.",
        [DEATH, to(6), X, X],
    ),
    // 10
    room(
        "You are on a windswept cliff. A rickety rope bridge stretches south across the chasm.",
        [X, flag(ExitFlag::BridgeRope), to(8), X],
    ),
    room(
        "You are halfway across the rope bridge. The ropes creak and fray behind you.",
        [flag(ExitFlag::BridgeRope), to(12), X, X],
    ),
    room(
        "You are on the south side of the chasm. Tunnels lead south and east.",
        [to(11), to(13), X, to(14)],
    ),
    room(
        "You are in a wide cavern. Passages branch off to the south and west.",
        [to(12), to(16), to(15), X],
    ),
    room(
        "You are in a scorched lair. The air stinks of sulphur.",
        [X, X, to(12), X],
    ),
    room(
        "You are in a cramped store room. Rotten crates are piled in the corners.",
        [X, X, X, to(13)],
    ),
    room(
        "You are at a fork in the tunnel. Passages lead north, south and east.",
        [to(13), to(17), X, to(18)],
    ),
    room(
        "You are in a high, echoing cave. Something rustles far above you.",
        [to(16), to(20), X, X],
    ),
    room(
        "You are in a tiny chapel carved out of the rock.",
        [X, X, to(16), to(19)],
    ),
    room(
        "You are in a treasure chamber. Gold glitters in every crevice.",
        [X, X, to(18), X],
    ),
    // 20
    room(
        "You are in a sloping passage that descends to the south.",
        [to(17), to(21), X, X],
    ),
    room(
        "You are on the shore of an underground lake. The far side is lost in darkness.",
        [to(20), X, X, to(22)],
    ),
    room(
        "You are in a crystal grotto. The walls sparkle in the light.",
        [X, X, to(21), X],
    ),
    room(
        "You are in a collapsed cellar. Broken masonry is strewn everywhere.",
        [X, to(24), X, to(25)],
    ),
    room(
        "You are in a dead end beneath a crumbling wall.",
        [to(23), X, X, X],
    ),
    room(
        "You are on the far shore of the underground lake.",
        [to(26), X, to(23), X],
    ),
    room(
        "You are in a tunnel that climbs steeply to the north.",
        [to(27), to(25), X, X],
    ),
    room(
        "You are in a hall of pillars. Archways lead north, south and east.",
        [to(28), to(26), X, to(30)],
    ),
    room(
        "You are in a dusty corridor lined with empty niches.",
        [to(29), to(27), X, X],
    ),
    room(
        "You are at the entrance to the catacombs. A doorway opens to the west.",
        [X, to(28), to(31), X],
    ),
    // 30
    room(
        "You are in a guard room. An overturned table lies by the wall.",
        [X, X, to(27), to(34)],
    ),
    room(
        "You are in an ancient crypt. A section of the north wall has a keyhole set into it.",
        [flag(ExitFlag::CryptWall), X, X, to(29)],
    ),
    room(
        "You are in a secret passage behind the crypt wall.",
        [to(33), to(31), X, X],
    ),
    room(
        "You are at the bottom of a deep shaft. A faint light glimmers far above.",
        [X, to(32), X, X],
    ),
    room(
        "You are in a locksmith's workshop. Tools hang from rusty hooks.",
        [X, X, to(30), X],
    ),
    room(
        "You are in the statue room. A stone giant stares blindly at the ceiling.",
        [to(36), to(37), to(38), X],
    ),
    room(
        "You are in a sorcerer's study. Strange symbols are painted on the floor.",
        [X, to(35), X, X],
    ),
    room(
        "You are at the top of a deep shaft. A passage leads north.",
        [to(35), X, X, X],
    ),
    room(
        "You are in a ventilation chamber. Cold air blows up through the floor.",
        [X, flag(ExitFlag::Grate), X, to(35)],
    ),
    room(
        "You are in a ventilation duct beneath the grate.",
        [to(38), to(40), X, X],
    ),
    // 40
    room(
        "You are in a dripping tunnel. Passages lead north, south and east.",
        [to(39), to(41), X, to(42)],
    ),
    room(
        "You are on the lip of a deep chasm. Passages lead north and west.",
        [to(40), DEATH, to(44), X],
    ),
    room(
        "You are at a dead end. The sound of rushing water comes from the east.",
        [X, X, to(40), flag(ExitFlag::WaterfallLedge)],
    ),
    room(
        "You are on a narrow ledge behind the waterfall.",
        [X, X, to(42), to(47)],
    ),
    room(
        "You are in a misty cave. The roar of water fills the air.",
        [to(45), to(46), X, to(41)],
    ),
    room(
        "You are beside a thundering waterfall. A deep pool lies far below.",
        [X, to(44), X, X],
    ),
    room(
        "You are wading in the pool at the foot of the waterfall.",
        [to(44), X, X, to(48)],
    ),
    room(
        "You are in a cluttered workshop full of half-finished contraptions.",
        [X, to(50), to(43), X],
    ),
    room(
        "You are on the edge of a wide moat. A castle stands on the far side.",
        [X, X, to(46), flag(ExitFlag::Drawbridge)],
    ),
    room(
        "You are in the courtyard of a ruined castle. The drawbridge lies across the moat.",
        [X, X, to(48), to(50)],
    ),
    // 50
    room(
        "You are in a castle gatehouse. Passages lead north, south and west.",
        [to(47), to(51), to(49), X],
    ),
    room(
        "You are in a powder store. The floor is black with soot.",
        [to(50), X, X, to(52)],
    ),
    room(
        "You are before a massive iron door set into the east wall.",
        [X, X, to(51), flag(ExitFlag::BombDoor)],
    ),
    room(
        "You are in a blasted doorway. Smoke still hangs in the air.",
        [X, X, to(52), to(54)],
    ),
    room(
        "You are in the treasure vault at the heart of the caverns.",
        [X, X, to(53), X],
    ),
];
