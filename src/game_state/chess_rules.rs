//! Canonical chess-rule constants.
//!
//! Board geometry, the standard back-rank layout used to build the initial
//! position, and the default clock.

use crate::game_state::chess_types::PieceKind;

/// Number of rows and columns.
pub const BOARD_SIZE: usize = 8;

/// Pieces per side in the starting position.
pub const PIECES_PER_SIDE: usize = 16;

/// Back-rank layout from column 0 to column 7 for both sides.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Default per-side clock (10 minutes).
pub const DEFAULT_CLOCK_SECS: u32 = 600;
