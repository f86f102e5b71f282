use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::is_enemy_at;

/// Pawn pushes and diagonal captures. No en passant, no promotion.
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let direction = color.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);

            if from.row == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(direction, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(target) = from.offset(direction, d_col) else {
            continue;
        };
        if is_enemy_at(board, target, color) {
            out.push(target);
        }
    }
}
