//! Crate error type.
//!
//! The game operations themselves never fail: invalid requests are silent
//! no-ops. `ChessError` is the vocabulary for *why* a request was rejected and
//! for the parsing utilities that take user text.

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Coordinates outside `0..8`.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// Move requested from an empty square.
    #[error("no piece on {0}")]
    EmptyOrigin(Square),

    #[error("piece on {square} is {owner}, but {to_move} is to move")]
    NotSideToMove {
        square: Square,
        owner: Color,
        to_move: Color,
    },

    /// Origin and destination coincide.
    #[error("move from {0} to itself")]
    NullMove(Square),
}

pub type ChessResult<T> = Result<T, ChessError>;
