//! Move-policy abstraction for the automated opponent.
//!
//! A policy looks at a whole game snapshot and proposes one move for the side
//! to move. The game state machine applies the proposal through the same path
//! as a human move, so policies can be swapped freely.

use std::fmt;

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;

/// A proposed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveChoice {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for MoveChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

pub trait MovePolicy: Send {
    fn name(&self) -> &str;

    /// `None` when no own piece has any destination.
    fn choose_move(&mut self, game_state: &GameState) -> Option<MoveChoice>;
}

/// Which built-in policy an automated opponent plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpponentStrength {
    #[default]
    Random,
    GreedyCapture,
}

impl OpponentStrength {
    /// Builds the policy, seeded when `seed` is given.
    pub fn build(self, seed: Option<u64>) -> Box<dyn MovePolicy> {
        use crate::engines::engine_greedy::GreedyCapturePolicy;
        use crate::engines::engine_random::RandomPolicy;

        match (self, seed) {
            (OpponentStrength::Random, Some(seed)) => Box::new(RandomPolicy::with_seed(seed)),
            (OpponentStrength::Random, None) => Box::new(RandomPolicy::new()),
            (OpponentStrength::GreedyCapture, Some(seed)) => {
                Box::new(GreedyCapturePolicy::with_seed(seed))
            }
            (OpponentStrength::GreedyCapture, None) => Box::new(GreedyCapturePolicy::new()),
        }
    }
}
