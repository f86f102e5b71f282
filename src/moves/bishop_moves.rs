use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::{trace_ray, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for direction in DIAGONAL_DIRECTIONS {
        trace_ray(board, from, color, direction, out);
    }
}
