//! Walkers shared by the per-piece rules.
//!
//! Sliding pieces use [`trace_ray`]; knights and kings use [`push_offsets`].

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Walks one ray from `from`, pushing every reachable square.
///
/// The ray ends at the board edge or at the first occupied square. An enemy on
/// that square is pushed as a capture; a friendly piece is not.
pub fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    (d_row, d_col): (i8, i8),
    out: &mut Vec<Square>,
) {
    let mut cursor = from.offset(d_row, d_col);
    while let Some(target) = cursor {
        match board.color_at(target) {
            None => out.push(target),
            Some(occupant) => {
                if occupant != color {
                    out.push(target);
                }
                break;
            }
        }
        cursor = target.offset(d_row, d_col);
    }
}

/// Pushes each in-bounds `from + offset` that is empty or enemy-occupied.
pub fn push_offsets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        let Some(target) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.color_at(target) != Some(color) {
            out.push(target);
        }
    }
}

#[inline]
pub fn is_enemy_at(board: &Board, square: Square, color: Color) -> bool {
    matches!(board.color_at(square), Some(occupant) if occupant != color)
}
