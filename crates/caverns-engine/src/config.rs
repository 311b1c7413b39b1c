//! Configuration for an engine session.

/// Tunable constants for a session.
///
/// The defaults reproduce the classic game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// RNG seed for reproducible combat rolls.
    pub seed: u64,
    /// Maximum number of objects the player can carry.
    pub carry_limit: usize,
    /// Number of moves the candle lasts.
    pub light_turns: u32,
    /// Percent chance that a blow kills the monster.
    pub kill_chance: u32,
    /// Percent added to the fatal-blow chance for every fight after the first.
    pub fatal_step: u32,
    /// Upper bound of the fatal-blow chance, in percent.
    pub fatal_cap: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            carry_limit: 10,
            light_turns: 250,
            kill_chance: 40,
            fatal_step: 5,
            fatal_cap: 75,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the carrying limit.
    pub fn with_carry_limit(mut self, limit: usize) -> Self {
        self.carry_limit = limit;
        self
    }

    /// Set how many moves the candle lasts.
    pub fn with_light_turns(mut self, turns: u32) -> Self {
        self.light_turns = turns;
        self
    }

    /// Set the kill chance (clamped to 0-100).
    pub fn with_kill_chance(mut self, percent: u32) -> Self {
        self.kill_chance = percent.min(100);
        self
    }

    /// Set the fatal-blow escalation: `step` percent per fight, at most `cap` (clamped to 0-100).
    pub fn with_fatal_blow(mut self, step: u32, cap: u32) -> Self {
        self.fatal_step = step;
        self.fatal_cap = cap.min(100);
        self
    }
}
