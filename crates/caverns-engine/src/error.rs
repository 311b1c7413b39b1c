//! Error types for the engine.

use thiserror::Error;

use crate::catalog::EntityId;

/// Result type for engine construction and lookups.
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type for player actions.
pub type ActionResult<T> = Result<T, ActionError>;

/// Errors raised when looking up rooms or entities by number.
///
/// Player input never produces these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A room number outside the map.
    #[error("room {0} does not exist (rooms are numbered 1 to 54)")]
    InvalidRoom(usize),

    /// An entity index outside the catalog.
    #[error("entity {0} does not exist (entities are numbered 1 to 24)")]
    InvalidEntity(usize),
}

/// A refused player action.
///
/// The `Display` text is the exact line shown to the player. A refusal
/// still consumes the turn but leaves the world unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No exit in the requested direction.
    #[error("You can't go that way.")]
    NoExit,

    /// The named object is not in the current room.
    #[error("I can't see it here.")]
    NotHere,

    /// The named object is not in the inventory.
    #[error("You are not carrying that.")]
    NotCarried,

    /// The carrying limit has been reached.
    #[error("You are carrying too many objects.")]
    TooManyObjects,

    /// No monster in the current room.
    #[error("There is nothing to kill here.")]
    NothingToKill,

    /// Fighting without the sword.
    #[error("You have no weapon. How am I supposed to use it?")]
    NoWeapon,

    /// A trigger word used somewhere it has no effect.
    #[error("Nothing happens.")]
    NothingHappens,

    /// A trigger needs an object the player is not carrying.
    #[error("You need {} to do that.", .0.name())]
    MissingItem(EntityId),

    /// A trigger needs light and the candle has gone out.
    #[error("It is too dark to do that.")]
    TooDark,

    /// Input that matched no rule.
    #[error(
        "That command is not implemented. Try look, list, take, drop, kill, or a direction (north, south, west, east)."
    )]
    UnknownCommand,
}
