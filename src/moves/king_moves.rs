use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::push_offsets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// One step in any direction. Attacked squares are not filtered and there is
/// no castling.
pub fn generate_king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_offsets(board, from, color, &KING_OFFSETS, out);
}
