//! Command interpretation.
//!
//! Rules are tried in a fixed order and the first one that matches decides
//! the action for the turn. The order matters: `north` wins over any
//! trigger word in the same line, and a trigger word wins over `take`.

use crate::catalog::EntityId;
use crate::map::Direction;

use super::normalize::contains_keyword;

/// A one-off word that teleports the player or opens a passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Swim across the underground lake.
    Swim,
    /// Jump from the top of the waterfall.
    Jump,
    /// Climb up the shaft.
    ClimbUp,
    /// Climb down the shaft.
    ClimbDown,
    /// Unlock the crypt wall.
    Unlock,
    /// Light the bomb.
    Ignite,
}

impl Trigger {
    /// All triggers in matching order.
    pub const ALL: [Self; 6] = [
        Self::Swim,
        Self::Jump,
        Self::ClimbUp,
        Self::ClimbDown,
        Self::Unlock,
        Self::Ignite,
    ];

    /// Words that fire this trigger.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Self::Swim => &["swim"],
            Self::Jump => &["jump"],
            Self::ClimbUp => &["up"],
            Self::ClimbDown => &["down"],
            Self::Unlock => &["unlock", "open"],
            Self::Ignite => &["light", "burn"],
        }
    }
}

/// The single action selected for a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the session.
    Quit,
    /// Describe the current room.
    Look,
    /// Walk through an exit.
    Move(Direction),
    /// A special trigger word.
    Trigger(Trigger),
    /// Pick up the first object named, if any.
    Take(Option<EntityId>),
    /// Put down the first object named, if any.
    Drop(Option<EntityId>),
    /// Attack, optionally naming a monster.
    Kill(Option<EntityId>),
    /// List the inventory.
    List,
    /// Nothing matched.
    Unknown,
}

const QUIT_WORDS: &[&str] = &["quit"];
const LOOK_WORDS: &[&str] = &["look"];
const TAKE_WORDS: &[&str] = &["get", "take"];
const DROP_WORDS: &[&str] = &["drop"];
const KILL_WORDS: &[&str] = &["kill", "attack"];
const LIST_WORDS: &[&str] = &["list"];

fn mentions_any(normalized: &str, words: &[&str]) -> bool {
    words.iter().any(|w| contains_keyword(normalized, w))
}

fn first_named(normalized: &str, mut candidates: impl Iterator<Item = EntityId>) -> Option<EntityId> {
    candidates.find(|id| id.is_named_in(normalized))
}

/// Select the action for a line of [normalized](super::normalize) input.
pub fn parse_command(normalized: &str) -> Action {
    if mentions_any(normalized, QUIT_WORDS) {
        return Action::Quit;
    }
    if mentions_any(normalized, LOOK_WORDS) {
        return Action::Look;
    }
    if let Some(direction) = Direction::ALL
        .into_iter()
        .find(|d| contains_keyword(normalized, d.word()))
    {
        return Action::Move(direction);
    }
    if let Some(trigger) = Trigger::ALL
        .into_iter()
        .find(|t| mentions_any(normalized, t.words()))
    {
        return Action::Trigger(trigger);
    }
    if mentions_any(normalized, TAKE_WORDS) {
        return Action::Take(first_named(normalized, EntityId::objects()));
    }
    if mentions_any(normalized, DROP_WORDS) {
        return Action::Drop(first_named(normalized, EntityId::objects()));
    }
    if mentions_any(normalized, KILL_WORDS) {
        return Action::Kill(first_named(normalized, EntityId::monsters()));
    }
    if mentions_any(normalized, LIST_WORDS) {
        return Action::List;
    }
    Action::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::normalize;

    fn parse(raw: &str) -> Action {
        parse_command(&normalize(raw))
    }

    fn entity(n: usize) -> EntityId {
        EntityId::new(n).unwrap()
    }

    #[test]
    fn parse_quit_and_look() {
        assert_eq!(parse("quit"), Action::Quit);
        assert_eq!(parse("QUIT"), Action::Quit);
        assert_eq!(parse("look"), Action::Look);
        assert_eq!(parse("look around"), Action::Look);
    }

    #[test]
    fn quit_beats_everything() {
        assert_eq!(parse("look north then quit"), Action::Quit);
    }

    #[test]
    fn parse_directions() {
        assert_eq!(parse("north"), Action::Move(Direction::North));
        assert_eq!(parse("go South"), Action::Move(Direction::South));
        assert_eq!(parse("west"), Action::Move(Direction::West));
        assert_eq!(parse("walk east"), Action::Move(Direction::East));
    }

    #[test]
    fn directions_tested_in_slot_order() {
        assert_eq!(parse("east or north"), Action::Move(Direction::North));
        assert_eq!(parse("west then south"), Action::Move(Direction::South));
    }

    #[test]
    fn direction_needs_word_boundaries() {
        assert_eq!(parse("northward"), Action::Unknown);
        assert_eq!(parse("north."), Action::Unknown);
    }

    #[test]
    fn parse_triggers() {
        assert_eq!(parse("swim"), Action::Trigger(Trigger::Swim));
        assert_eq!(parse("jump off"), Action::Trigger(Trigger::Jump));
        assert_eq!(parse("climb up"), Action::Trigger(Trigger::ClimbUp));
        assert_eq!(parse("climb down"), Action::Trigger(Trigger::ClimbDown));
        assert_eq!(parse("open wall"), Action::Trigger(Trigger::Unlock));
        assert_eq!(parse("unlock wall"), Action::Trigger(Trigger::Unlock));
        assert_eq!(parse("light bomb"), Action::Trigger(Trigger::Ignite));
        assert_eq!(parse("burn it"), Action::Trigger(Trigger::Ignite));
    }

    #[test]
    fn movement_beats_triggers() {
        assert_eq!(parse("jump north"), Action::Move(Direction::North));
    }

    #[test]
    fn triggers_beat_take() {
        assert_eq!(parse("take candle and light it"), Action::Trigger(Trigger::Ignite));
    }

    #[test]
    fn parse_take_and_drop() {
        assert_eq!(parse("take sword"), Action::Take(Some(EntityId::SWORD)));
        assert_eq!(parse("get the Sword"), Action::Take(Some(EntityId::SWORD)));
        assert_eq!(parse("take"), Action::Take(None));
        assert_eq!(parse("take troll"), Action::Take(None));
        assert_eq!(parse("drop coin"), Action::Drop(Some(entity(7))));
        assert_eq!(parse("drop it"), Action::Drop(None));
    }

    #[test]
    fn take_picks_lowest_index_object() {
        assert_eq!(parse("take sword and coin"), Action::Take(Some(entity(7))));
    }

    #[test]
    fn take_beats_drop() {
        assert_eq!(parse("drop coin take key"), Action::Take(Some(entity(7))));
    }

    #[test]
    fn parse_kill() {
        assert_eq!(parse("kill troll"), Action::Kill(Some(entity(3))));
        assert_eq!(parse("attack"), Action::Kill(None));
        assert_eq!(parse("kill sword"), Action::Kill(None));
    }

    #[test]
    fn parse_list_and_unknown() {
        assert_eq!(parse("list"), Action::List);
        assert_eq!(parse("dance wildly"), Action::Unknown);
        assert_eq!(parse(""), Action::Unknown);
        assert_eq!(parse("nörth"), Action::Unknown);
    }
}
