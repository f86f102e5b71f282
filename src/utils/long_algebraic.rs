//! Coordinate move text (`"e2e4"`) used by the terminal front end.

use crate::engines::engine_trait::MoveChoice;
use crate::errors::{ChessError, ChessResult};
use crate::utils::algebraic::algebraic_to_square;

pub fn long_algebraic_to_move(text: &str) -> ChessResult<MoveChoice> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }
    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok(MoveChoice { from, to })
}

pub fn move_to_long_algebraic(choice: &MoveChoice) -> String {
    choice.to_string()
}
