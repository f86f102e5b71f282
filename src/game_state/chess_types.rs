//! Value types shared by the board model, move generation and game state.
//!
//! Pieces carry their color and a `has_moved` marker; squares are addressed by
//! `(row, col)` with row 0 / col 0 being White's back-left corner.

use std::fmt;

use crate::game_state::chess_rules::BOARD_SIZE;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Notation letter; pawns have none.
    #[inline]
    pub const fn letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }
}

/// A piece standing on a square.
///
/// Pieces are plain values: moving one writes a fresh copy with
/// `has_moved == true` to the destination instead of mutating it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Set on every move of the piece. Nothing reads it yet; castling would.
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }
}

/// Board coordinate. Equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Builds a square without checking bounds. Callers hold the `0..8` invariant.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if in_bounds(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// False for squares built with [`Square::new`] outside `0..8`.
    #[inline]
    pub fn is_on_board(self) -> bool {
        in_bounds(i32::from(self.row), i32::from(self.col))
    }

    /// The square `(d_row, d_col)` away, if it is still on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(
            i32::from(self.row) + i32::from(d_row),
            i32::from(self.col) + i32::from(d_col),
        )
    }

    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.col)
    }

    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'1' + self.row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// True iff both coordinates are in `0..8`.
#[inline]
pub fn in_bounds(row: i32, col: i32) -> bool {
    let size = BOARD_SIZE as i32;
    (0..size).contains(&row) && (0..size).contains(&col)
}

/// Overall game status.
///
/// Move application never derives anything but `Playing`; `Checkmate` is
/// reused as the decisive game-over marker by resignation and timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}
