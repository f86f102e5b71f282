use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// One entry of the move history. Never edited after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood before moving.
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Reserved; pawns are never promoted.
    pub promotion: Option<PieceKind>,
    pub notation: String,
}

impl ChessMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
