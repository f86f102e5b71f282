//! Short algebraic-style move text.
//!
//! Only the information available before the move is used. There is no
//! disambiguation, no check suffix and no castling form.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// Renders `piece` moving `from -> to`, capturing `captured`.
///
/// Pieces get their letter (`K Q R B N`); a capturing pawn gets its origin
/// file instead. Captures insert `x` before the destination.
///
/// `_board` is the position before the move. The text depends only on the
/// explicit arguments, so a board that disagrees with them still formats.
pub fn notate(
    _board: &Board,
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
) -> String {
    let mut out = String::with_capacity(6);
    match piece.kind.letter() {
        Some(letter) => out.push(letter),
        None if captured.is_some() => out.push(from.file_char()),
        None => {}
    }
    if captured.is_some() {
        out.push('x');
    }
    out.push(to.file_char());
    out.push(to.rank_char());
    out
}

/// Numbered move list, one entry per full move: `"1. e4 e5"`, `"2. Nf3"`.
pub fn format_move_list<'a, I>(notations: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let notations: Vec<&str> = notations.into_iter().collect();
    notations
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| match pair {
            [white, black] => format!("{}. {} {}", i + 1, white, black),
            [white] => format!("{}. {}", i + 1, white),
            _ => unreachable!("chunks(2) yields one or two items"),
        })
        .collect()
}
