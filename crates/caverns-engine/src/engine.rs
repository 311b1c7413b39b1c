//! The turn-processing engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::actions::{Lines, combat, inventory, look, movement, trigger};
use crate::config::EngineConfig;
use crate::error::{ActionError, ActionResult};
use crate::parser::{Action, normalize, parse_command};
use crate::world::WorldState;

/// Printed when the player quits.
pub const QUIT_LINE: &str = "Thanks for playing.";

/// Printed on the turn the candle runs out.
pub const CANDLE_OUT_LINE: &str = "Your candle flickers and goes out.";

/// A game session: the world state plus the dice that drive combat.
#[derive(Debug, Clone)]
pub struct Engine {
    state: WorldState,
    config: EngineConfig,
    rng: StdRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Start a session from the fixed initial snapshot with default settings.
pub fn create_engine() -> Engine {
    Engine::default()
}

impl Engine {
    /// Start a session from the fixed initial snapshot.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_state(WorldState::new(), config)
    }

    /// Resume from an arbitrary state.
    pub fn with_state(state: WorldState, config: EngineConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { state, config, rng }
    }

    /// The world state.
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// False once the player has died or quit; the shell must stop then.
    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// Describe the current room without using a turn.
    pub fn render_look(&self) -> Lines {
        look::render(&self.state)
    }

    /// Process one line of raw input and return the lines to print.
    ///
    /// Every call counts as a move, including refused and unknown commands.
    /// Once the session has ended this returns nothing and changes nothing.
    pub fn process_turn(&mut self, raw: &str) -> Lines {
        if !self.state.is_alive() {
            return Vec::new();
        }

        let turn = self.state.tick();
        let candle_out = self.state.has_light() && turn > self.config.light_turns;
        if candle_out {
            self.state.extinguish();
        }

        let action = parse_command(&normalize(raw));
        debug!(turn, ?action, "processing turn");

        let mut lines = self
            .execute(action)
            .unwrap_or_else(|refusal| vec![refusal.to_string()]);
        self.state.recompute_flags();

        if candle_out {
            lines.push(CANDLE_OUT_LINE.to_string());
        }
        if !self.state.is_alive() {
            info!(turn, room = %self.state.room(), "session over");
        }
        lines
    }

    fn execute(&mut self, action: Action) -> ActionResult<Lines> {
        match action {
            Action::Quit => {
                self.state.end();
                Ok(vec![QUIT_LINE.to_string()])
            }
            Action::Look => Ok(look::render(&self.state)),
            Action::Move(direction) => movement::go(&mut self.state, direction),
            Action::Trigger(t) => trigger::perform(&mut self.state, t),
            Action::Take(item) => inventory::take(&mut self.state, item, self.config.carry_limit),
            Action::Drop(item) => inventory::drop(&mut self.state, item),
            Action::Kill(target) => {
                combat::attack(&mut self.state, target, &self.config, &mut self.rng)
            }
            Action::List => Ok(inventory::list(&self.state)),
            Action::Unknown => Err(ActionError::UnknownCommand),
        }
    }
}
