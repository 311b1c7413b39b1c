//! Handlers for each player action.
//!
//! Each handler takes the world state plus what the parser matched and
//! either mutates the state and returns the lines to print, or returns an
//! [`ActionError`](crate::error::ActionError) and leaves the state alone.

pub mod combat;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod trigger;

/// Lines of output produced by one action.
pub type Lines = Vec<String>;
