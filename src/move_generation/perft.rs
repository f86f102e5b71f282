//! Pseudo-legal perft.
//!
//! Counts leaf nodes of the move tree produced by [`legal_moves`] and
//! [`GameState::apply_move`]. Without self-check filtering the counts match
//! standard perft only while no side can be left in check.

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::legal_moves;

pub fn perft(game_state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let board = &game_state.board;
    let mut nodes = 0u64;
    for from in board.squares_of(game_state.current_player) {
        for to in legal_moves(board, from) {
            if depth == 1 {
                nodes += 1;
            } else {
                nodes += perft(&game_state.apply_move(from, to), depth - 1);
            }
        }
    }
    nodes
}

/// Node count below each root move, keyed by `"e2e4"`-style text.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(String, u64)> {
    let board = &game_state.board;
    let mut out = Vec::new();
    for from in board.squares_of(game_state.current_player) {
        for to in legal_moves(board, from) {
            let child = game_state.apply_move(from, to);
            out.push((format!("{from}{to}"), perft(&child, depth.saturating_sub(1))));
        }
    }
    out
}
