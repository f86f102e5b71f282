//! Automated opponent driver.
//!
//! Decides when the computer side should move and feeds the policy's choice
//! through [`GameState::apply_move`]. The think delay is only reported; the
//! caller owns the timer and may cancel it.

use std::time::Duration;

use crate::engines::engine_trait::{MovePolicy, OpponentStrength};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentConfig {
    pub ai_color: Color,
    /// Pause before the computer's move is shown.
    pub think_delay: Duration,
    pub strength: OpponentStrength,
    pub seed: Option<u64>,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            ai_color: Color::Black,
            think_delay: Duration::from_millis(500),
            strength: OpponentStrength::Random,
            seed: None,
        }
    }
}

pub struct AutoOpponent {
    config: OpponentConfig,
    policy: Box<dyn MovePolicy>,
}

impl AutoOpponent {
    pub fn new(config: OpponentConfig) -> Self {
        let policy = config.strength.build(config.seed);
        Self { config, policy }
    }

    pub fn with_policy(config: OpponentConfig, policy: Box<dyn MovePolicy>) -> Self {
        Self { config, policy }
    }

    #[inline]
    pub fn config(&self) -> &OpponentConfig {
        &self.config
    }

    #[inline]
    pub fn think_delay(&self) -> Duration {
        self.config.think_delay
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// True when the game is undecided and it is the computer's turn.
    pub fn wants_to_move(&self, game_state: &GameState) -> bool {
        !game_state.is_over() && game_state.current_player == self.config.ai_color
    }

    /// Plays the computer's move, or returns the state unchanged when it is not
    /// the computer's turn or no move exists.
    pub fn play(&mut self, game_state: &GameState) -> GameState {
        if !self.wants_to_move(game_state) {
            return game_state.clone();
        }
        match self.policy.choose_move(game_state) {
            Some(choice) => {
                tracing::debug!(policy = self.policy.name(), %choice, "computer move");
                game_state.apply_move(choice.from, choice.to)
            }
            None => {
                tracing::info!(player = %game_state.current_player, "computer has no move");
                game_state.clone()
            }
        }
    }
}
