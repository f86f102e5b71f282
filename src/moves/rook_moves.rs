use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::{trace_ray, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for direction in ORTHOGONAL_DIRECTIONS {
        trace_ray(board, from, color, direction, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn corner_rook_on_empty_board_covers_rank_and_file() {
        let mut board = Board::empty();
        board.place(Square::new(0, 0), Piece::new(PieceKind::Rook, Color::White));
        let mut out = Vec::new();
        generate_rook_moves(&board, Square::new(0, 0), Color::White, &mut out);

        assert_eq!(out.len(), 14);
        assert!(out.iter().all(|sq| sq.row == 0 || sq.col == 0));
        assert!(!out.contains(&Square::new(0, 0)));
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::empty();
        board.place(Square::new(3, 0), Piece::new(PieceKind::Pawn, Color::Black));
        board.place(Square::new(0, 2), Piece::new(PieceKind::Pawn, Color::White));
        let mut out = Vec::new();
        generate_rook_moves(&board, Square::new(0, 0), Color::White, &mut out);

        assert!(out.contains(&Square::new(3, 0)));
        assert!(!out.contains(&Square::new(4, 0)));
        assert!(out.contains(&Square::new(0, 1)));
        assert!(!out.contains(&Square::new(0, 2)));
        assert_eq!(out.len(), 4);
    }
}
