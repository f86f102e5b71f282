//! 8x8 mailbox board.
//!
//! `Board` is pure data: a grid of optional pieces indexed `[row][col]`.
//! Cloning yields an independent grid, so move generation and speculative
//! application never alias a live game.

use crate::game_state::chess_rules::{BACK_RANK, BOARD_SIZE};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub use crate::game_state::chess_types::in_bounds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting position, White on rows 0 and 1.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().copied().enumerate() {
            let col = col as u8;
            for color in [Color::White, Color::Black] {
                board.place(Square::new(color.back_row(), col), Piece::new(kind, color));
                board.place(
                    Square::new(color.pawn_start_row(), col),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    /// `None` for empty and off-board squares alike.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells
            .get(square.row as usize)?
            .get(square.col as usize)
            .copied()
            .flatten()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    /// Puts `piece` on `square`, returning whatever stood there.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize].replace(piece)
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize].take()
    }

    /// Moves the piece on `from` to `to`, marking it moved.
    ///
    /// Returns the displaced piece on `to`, if any. Does nothing and returns
    /// `None` when `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.remove(from)?;
        self.place(to, piece.moved())
    }

    /// Every occupied square with its piece, row-major from a1.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::new(row as u8, col as u8), piece))
            })
        })
    }

    /// Squares holding a piece of `color`, row-major from a1.
    pub fn squares_of(&self, color: Color) -> Vec<Square> {
        self.occupied()
            .filter(|(_, piece)| piece.color == color)
            .map(|(square, _)| square)
            .collect()
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.occupied().filter(|(_, piece)| piece.color == color).count()
    }
}
