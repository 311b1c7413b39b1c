//! Combat resolution.
//!
//! Every attempt first risks a fatal blow whose chance grows with the
//! session's fight count, then rolls to kill the foe, and otherwise reports a
//! harmless miss.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::Lines;
use crate::catalog::EntityId;
use crate::config::EngineConfig;
use crate::error::{ActionError, ActionResult};
use crate::world::{Position, WorldState};

/// Printed when the player is struck down.
pub const FATAL_BLOW: &str = "Your foe lands a mighty blow and you fall to the ground, dead.";

/// Flavour lines for a blow that decides nothing.
pub const MISS_LINES: [&str; 4] = [
    "You swing wildly and miss.",
    "Your foe dodges the blow.",
    "Your sword glances off harmlessly.",
    "You stumble, but recover your footing.",
];

/// The dice for one combat attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatRolls {
    /// d100 against the fatal-blow chance.
    pub fatal: u32,
    /// d100 against the kill chance.
    pub kill: u32,
    /// Index into [`MISS_LINES`].
    pub miss: usize,
}

impl CombatRolls {
    /// Roll all dice for an attempt.
    pub fn roll(rng: &mut StdRng) -> Self {
        Self {
            fatal: rng.random_range(1..=100),
            kill: rng.random_range(1..=100),
            miss: rng.random_range(0..MISS_LINES.len()),
        }
    }
}

/// How an attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// The player is killed.
    Fatal,
    /// The monster is killed.
    Kill,
    /// Nothing happens; the line to print.
    Miss(&'static str),
}

/// Percent chance that attempt number `fights` (1-based) is fatal.
///
/// The first fight is always safe.
pub fn fatal_chance(fights: u32, config: &EngineConfig) -> u32 {
    fights
        .saturating_sub(1)
        .saturating_mul(config.fatal_step)
        .min(config.fatal_cap)
}

/// Decide an attempt from its rolls.
pub fn resolve(fights: u32, rolls: CombatRolls, config: &EngineConfig) -> CombatOutcome {
    if rolls.fatal <= fatal_chance(fights, config) {
        CombatOutcome::Fatal
    } else if rolls.kill <= config.kill_chance {
        CombatOutcome::Kill
    } else {
        CombatOutcome::Miss(MISS_LINES[rolls.miss % MISS_LINES.len()])
    }
}

/// Attack a monster in the current room with the sword.
///
/// A named monster that is present is the target; otherwise the first
/// monster in the room is.
pub fn attack(
    state: &mut WorldState,
    target: Option<EntityId>,
    config: &EngineConfig,
    rng: &mut StdRng,
) -> ActionResult<Lines> {
    let foe = target
        .filter(|id| id.is_monster() && state.is_here(*id))
        .or_else(|| state.monsters_here().next())
        .ok_or(ActionError::NothingToKill)?;
    if !state.is_carried(EntityId::SWORD) {
        return Err(ActionError::NoWeapon);
    }

    let fights = state.record_fight();
    let rolls = CombatRolls::roll(rng);
    let outcome = resolve(fights, rolls, config);
    debug!(fights, ?rolls, ?outcome, foe = %foe, "combat round");

    match outcome {
        CombatOutcome::Fatal => {
            info!(fights, foe = %foe, "player killed in combat");
            state.end();
            Ok(vec![FATAL_BLOW.to_string()])
        }
        CombatOutcome::Kill => {
            state.set_position(foe, Position::Removed);
            Ok(vec![format!("You strike true and {foe} dies.")])
        }
        CombatOutcome::Miss(line) => Ok(vec![line.to_string()]),
    }
}
