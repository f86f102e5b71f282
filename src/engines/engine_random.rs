//! Uniform random opponent.
//!
//! Shuffles the mover's pieces, takes the first one that can move, and picks
//! one of its destinations uniformly. Not uniform over all moves: a piece with
//! one move is as likely to be played as a piece with twenty.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;

use crate::engines::engine_trait::{MoveChoice, MovePolicy};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};

pub struct RandomPolicy<G: MoveGenerator = PseudoLegalMoveGenerator> {
    move_generator: G,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self::with_generator(PseudoLegalMoveGenerator, StdRng::from_rng(&mut rand::rng()))
    }

    /// Reproducible sequence of choices.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(PseudoLegalMoveGenerator, StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MoveGenerator> RandomPolicy<G> {
    pub fn with_generator(move_generator: G, rng: StdRng) -> Self {
        Self {
            move_generator,
            rng,
        }
    }
}

impl<G: MoveGenerator> MovePolicy for RandomPolicy<G> {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<MoveChoice> {
        let board = &game_state.board;
        let mut pieces = board.squares_of(game_state.current_player);
        pieces.shuffle(&mut self.rng);

        for from in pieces {
            let destinations = self.move_generator.destinations(board, from);
            if let Some(&to) = destinations.choose(&mut self.rng) {
                tracing::trace!(%from, %to, options = destinations.len(), "random policy pick");
                return Some(MoveChoice { from, to });
            }
        }

        tracing::debug!(player = %game_state.current_player, "random policy found no move");
        None
    }
}
