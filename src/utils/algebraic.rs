//! Square conversions for algebraic coordinates (`"e4"`).

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Parses `"a1"`..`"h8"` into a square.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    Ok(Square::new(rank - b'1', file - b'a'))
}

/// Formats a square as `"e4"`.
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Checked conversion from raw coordinates.
pub fn coords_to_square(row: i32, col: i32) -> ChessResult<Square> {
    Square::try_new(row, col).ok_or(ChessError::OutOfBounds { row, col })
}
