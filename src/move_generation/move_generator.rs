//! Pseudo-legal move generation for a single square.
//!
//! [`legal_moves`] dispatches on the occupying piece to one of the six rules in
//! [`crate::moves`]. Moves are "legal" only in the pseudo-legal sense: nothing
//! here checks whether the mover's own king is left attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Destinations for the piece on `from`. Empty and off-board squares have no
/// moves.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    if !from.is_on_board() {
        return Vec::new();
    }
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => generate_king_moves(board, from, piece.color, &mut out),
    }

    tracing::trace!(%from, kind = ?piece.kind, count = out.len(), "generated moves");
    out
}

/// Coordinate form of [`legal_moves`]; off-board coordinates yield nothing.
pub fn legal_moves_at(board: &Board, row: i32, col: i32) -> Vec<Square> {
    Square::try_new(row, col)
        .map(|from| legal_moves(board, from))
        .unwrap_or_default()
}

/// Source of destinations used by move policies.
///
/// A check-aware filter would be another implementor layered over
/// [`PseudoLegalMoveGenerator`].
pub trait MoveGenerator: Send + Sync {
    fn destinations(&self, board: &Board, from: Square) -> Vec<Square>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn destinations(&self, board: &Board, from: Square) -> Vec<Square> {
        legal_moves(board, from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece};

    #[test]
    fn empty_square_has_no_moves() {
        let board = Board::initial();
        assert!(legal_moves(&board, Square::new(4, 4)).is_empty());
    }

    #[test]
    fn off_board_coordinates_degrade_to_empty() {
        let board = Board::initial();
        assert!(legal_moves_at(&board, -1, 0).is_empty());
        assert!(legal_moves_at(&board, 0, 8).is_empty());
        assert_eq!(legal_moves_at(&board, 1, 4).len(), 2);
    }

    #[test]
    fn unchecked_off_board_square_has_no_moves() {
        let board = Board::initial();
        assert!(legal_moves(&board, Square::new(8, 0)).is_empty());
        assert!(legal_moves(&board, Square::new(0, 8)).is_empty());
        assert!(PseudoLegalMoveGenerator
            .destinations(&board, Square::new(255, 255))
            .is_empty());
    }

    #[test]
    fn e2_pawn_opens_with_e3_and_e4() {
        let board = Board::initial();
        assert_eq!(
            legal_moves(&board, Square::new(1, 4)),
            vec![Square::new(2, 4), Square::new(3, 4)]
        );
    }

    #[test]
    fn starting_position_offers_twenty_moves_per_side() {
        let board = Board::initial();
        for color in [Color::White, Color::Black] {
            let total: usize = board
                .squares_of(color)
                .into_iter()
                .map(|sq| legal_moves(&board, sq).len())
                .sum();
            assert_eq!(total, 20);
        }
    }

    #[test]
    fn only_pawns_and_knights_can_move_at_start() {
        let board = Board::initial();
        for (square, piece) in board.occupied() {
            let moves = legal_moves(&board, square);
            match piece.kind {
                PieceKind::Pawn => assert_eq!(moves.len(), 2),
                PieceKind::Knight => assert_eq!(moves.len(), 2),
                _ => assert!(moves.is_empty(), "{square} should be blocked"),
            }
        }
    }

    #[test]
    fn lone_corner_rook_reaches_fourteen_squares() {
        let mut board = Board::empty();
        board.place(Square::new(0, 0), Piece::new(PieceKind::Rook, Color::White));
        assert_eq!(legal_moves(&board, Square::new(0, 0)).len(), 14);
    }

    #[test]
    fn sliding_rays_never_pass_an_occupied_square() {
        let mut board = Board::initial();
        board.remove(Square::new(1, 3));
        board.place(Square::new(4, 3), Piece::new(PieceKind::Queen, Color::White));
        board.remove(Square::new(0, 3));

        let moves = legal_moves(&board, Square::new(4, 3));
        assert!(moves.contains(&Square::new(6, 3)));
        assert!(!moves.contains(&Square::new(7, 3)));
        assert!(moves.contains(&Square::new(6, 1)));
        assert!(!moves.contains(&Square::new(7, 0)));
        assert!(moves.contains(&Square::new(0, 3)));
    }

    #[test]
    fn trait_object_matches_free_function() {
        let board = Board::initial();
        let generator: &dyn MoveGenerator = &PseudoLegalMoveGenerator;
        assert_eq!(
            generator.destinations(&board, Square::new(0, 6)),
            legal_moves(&board, Square::new(0, 6))
        );
    }
}
