//! Terminal-oriented Unicode board renderer.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;

/// Renders the board with White at the bottom. Squares listed in `marks` are
/// drawn as `*` when empty.
pub fn render_board(board: &Board, marks: &[Square]) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for row in (0..8u8).rev() {
        let rank = char::from(b'1' + row);
        out.push(rank);
        out.push(' ');
        for col in 0..8u8 {
            let square = Square::new(row, col);
            let glyph = match board.piece_at(square) {
                Some(piece) => piece_to_unicode(piece),
                None if marks.contains(&square) => '*',
                None => '·',
            };
            out.push(glyph);
            if col < 7 {
                out.push(' ');
            }
        }
        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

/// Board plus a status line (side to move, clocks, result).
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_board(&game_state.board, &game_state.legal_moves);
    out.push('\n');
    match game_state.winner {
        Some(winner) => out.push_str(&format!("{winner} wins")),
        None => out.push_str(&format!("{} to move", game_state.current_player)),
    }
    out.push_str(&format!(
        "  [white {} | black {}]",
        format_clock(game_state.white_time),
        format_clock(game_state.black_time)
    ));
    out
}

/// `m:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_renders_black_on_top() {
        let text = render_board(&Board::initial(), &[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
    }

    #[test]
    fn selection_marks_show_on_empty_squares() {
        let game = GameState::new_game().select_square(1, 4);
        let text = render_game_state(&game);
        assert!(text.contains("4 · · · · * · · · 4"));
        assert!(text.contains("white to move"));
        assert!(text.contains("[white 10:00 | black 10:00]"));
    }

    #[test]
    fn clock_format_pads_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65), "1:05");
    }
}
