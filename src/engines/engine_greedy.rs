//! Capture-greedy opponent.
//!
//! Looks one ply ahead: among all pseudo-legal moves of the side to move it
//! keeps those capturing the most valuable piece and picks one uniformly.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::{MoveChoice, MovePolicy};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};

pub struct GreedyCapturePolicy {
    move_generator: PseudoLegalMoveGenerator,
    rng: StdRng,
}

impl GreedyCapturePolicy {
    pub fn new() -> Self {
        Self {
            move_generator: PseudoLegalMoveGenerator,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: PseudoLegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }
}

impl Default for GreedyCapturePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for GreedyCapturePolicy {
    fn name(&self) -> &str {
        "greedy-capture"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<MoveChoice> {
        let board = &game_state.board;
        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();

        for from in board.squares_of(game_state.current_player) {
            for to in self.move_generator.destinations(board, from) {
                let value = board
                    .piece_at(to)
                    .map(|captured| Self::piece_value(captured.kind))
                    .unwrap_or(0);

                if value > best_value {
                    best_value = value;
                    best_moves.clear();
                    best_moves.push(MoveChoice { from, to });
                } else if value == best_value {
                    best_moves.push(MoveChoice { from, to });
                }
            }
        }

        let picked = best_moves.choose(&mut self.rng).copied();
        tracing::trace!(capture_score = best_value, candidates = best_moves.len(), "greedy policy pick");
        picked
    }
}
