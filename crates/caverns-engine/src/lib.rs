//! World engine for the Caverns text adventure.
//!
//! A player walks a fixed graph of 54 rooms, some of whose exits open or
//! close as the world changes, picks up and drops objects, and fights
//! monsters. Everything is driven by one free-text command per turn:
//! [`Engine::process_turn`] normalizes the line, selects exactly one action,
//! applies it to the [`WorldState`], recomputes the dynamic exit flags, and
//! returns the lines to print.

/// Handlers for each player action.
pub mod actions;
/// Static catalog of monsters and objects.
pub mod catalog;
/// Engine configuration.
pub mod config;
/// The turn-processing engine.
pub mod engine;
/// Error types for the engine.
pub mod error;
/// Room graph and exit resolution.
pub mod map;
/// Input normalization and command interpretation.
pub mod parser;
/// Static room descriptions and exit table.
mod rooms;
/// The mutable world state.
pub mod world;

pub use catalog::EntityId;
pub use config::EngineConfig;
pub use engine::{Engine, create_engine};
pub use error::{ActionError, ActionResult, EngineError, EngineResult};
pub use map::{Destination, Direction, Exit, ExitFlag, RoomId, resolve_exit};
pub use parser::{Action, Trigger, normalize, parse_command};
pub use world::{Position, WorldFlags, WorldState};
