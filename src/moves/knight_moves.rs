use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::push_offsets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_offsets(board, from, color, &KNIGHT_OFFSETS, out);
}
