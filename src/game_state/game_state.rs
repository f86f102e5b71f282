//! Game state machine.
//!
//! `GameState` is a plain value. Every operation takes `&self` and returns the
//! next whole state; nothing is mutated in place from outside. Invalid
//! requests return an unchanged clone instead of an error.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus, Piece, Square};
use crate::game_state::game_config::GameConfig;
use crate::game_state::move_record::ChessMove;
use crate::move_generation::move_generator::legal_moves;
use crate::utils::move_notation::notate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub moves: Vec<ChessMove>,
    pub status: GameStatus,
    /// Remaining clock time in seconds.
    pub white_time: u32,
    pub black_time: u32,
    pub selected_square: Option<Square>,
    pub legal_moves: Vec<Square>,
    // Never derived by move application; kept for renderers.
    pub white_in_check: bool,
    pub black_in_check: bool,
    pub winner: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Initial position, White to move, full clocks, empty history.
    pub fn new_game() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            board: Board::initial(),
            current_player: Color::White,
            moves: Vec::new(),
            status: GameStatus::Playing,
            white_time: config.initial_clock_secs,
            black_time: config.initial_clock_secs,
            selected_square: None,
            legal_moves: Vec::new(),
            white_in_check: false,
            black_in_check: false,
            winner: None,
        }
    }

    #[inline]
    pub fn time_left(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_time,
            Color::Black => self.black_time,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn last_move(&self) -> Option<&ChessMove> {
        self.moves.last()
    }

    /// The piece that would move from `from` to `to`, or why the request
    /// would be refused.
    ///
    /// Both squares must be on the board. Beyond that only the origin is
    /// checked: the destination is trusted to come from [`legal_moves`].
    pub fn check_move_origin(&self, from: Square, to: Square) -> ChessResult<Piece> {
        for square in [from, to] {
            if !square.is_on_board() {
                return Err(ChessError::OutOfBounds {
                    row: i32::from(square.row),
                    col: i32::from(square.col),
                });
            }
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(ChessError::EmptyOrigin(from))?;
        if piece.color != self.current_player {
            return Err(ChessError::NotSideToMove {
                square: from,
                owner: piece.color,
                to_move: self.current_player,
            });
        }
        if from == to {
            return Err(ChessError::NullMove(from));
        }
        Ok(piece)
    }

    /// Plays `from -> to` for the side to move.
    ///
    /// Returns `self` unchanged when `from` does not hold a piece of the side to
    /// move. Captures are implicit: whatever stood on `to` is recorded and
    /// replaced.
    pub fn apply_move(&self, from: Square, to: Square) -> GameState {
        let piece = match self.check_move_origin(from, to) {
            Ok(piece) => piece,
            Err(err) => {
                tracing::debug!(%from, %to, error = %err, "ignoring move request");
                return self.clone();
            }
        };

        let (board, record) = play_on_board(&self.board, from, to, piece);
        tracing::debug!(notation = %record.notation, player = %self.current_player, "move applied");

        let mut moves = self.moves.clone();
        moves.push(record);

        GameState {
            board,
            current_player: self.current_player.opposite(),
            moves,
            selected_square: None,
            legal_moves: Vec::new(),
            ..self.clone()
        }
    }

    /// Selects `(row, col)` and lists its destinations. The board is untouched.
    ///
    /// Off-board coordinates clear the selection.
    pub fn select_square(&self, row: i32, col: i32) -> GameState {
        let Some(square) = Square::try_new(row, col) else {
            return self.clear_selection();
        };
        GameState {
            selected_square: Some(square),
            legal_moves: legal_moves(&self.board, square),
            ..self.clone()
        }
    }

    pub fn clear_selection(&self) -> GameState {
        GameState {
            selected_square: None,
            legal_moves: Vec::new(),
            ..self.clone()
        }
    }

    /// Interprets a click on `(row, col)`.
    ///
    /// - ignored once the game has a winner;
    /// - own piece: (re)select it;
    /// - listed destination of the current selection: play the move;
    /// - anything else: clear the selection.
    pub fn handle_square_click(&self, row: i32, col: i32) -> GameState {
        if self.is_over() {
            return self.clone();
        }
        let Some(square) = Square::try_new(row, col) else {
            return self.clear_selection();
        };

        if let Some(selected) = self.selected_square {
            if self.legal_moves.contains(&square) {
                return self.apply_move(selected, square);
            }
        }

        if self.board.color_at(square) == Some(self.current_player) {
            return self.select_square(row, col);
        }

        if self.selected_square.is_some() {
            self.clear_selection()
        } else {
            self.clone()
        }
    }

    /// Takes back the last move by replaying the remaining history from the
    /// initial position. No-op on an empty history.
    ///
    /// Clocks are kept; the game is reopened (`Playing`, no winner).
    pub fn undo(&self) -> GameState {
        let Some((_, remaining)) = self.moves.split_last() else {
            return self.clone();
        };

        let (board, current_player) = replay(remaining);
        tracing::debug!(plies = remaining.len(), "rebuilt position for undo");

        GameState {
            board,
            current_player,
            moves: remaining.to_vec(),
            status: GameStatus::Playing,
            selected_square: None,
            legal_moves: Vec::new(),
            winner: None,
            ..self.clone()
        }
    }

    /// The side to move gives up. Only valid while `Playing` without a winner.
    pub fn resign(&self) -> GameState {
        if self.status != GameStatus::Playing || self.is_over() {
            return self.clone();
        }
        tracing::info!(loser = %self.current_player, "resignation");
        self.decided_against(self.current_player)
    }

    /// The side to move ran out of time. Ignored once a winner exists.
    pub fn timeout(&self) -> GameState {
        if self.is_over() {
            return self.clone();
        }
        tracing::info!(loser = %self.current_player, "flag fell");
        self.decided_against(self.current_player)
    }

    /// Charges `elapsed_secs` to the side to move, flagging it at zero.
    pub fn tick_clock(&self, elapsed_secs: u32) -> GameState {
        if self.is_over() {
            return self.clone();
        }
        let mut next = self.clone();
        let clock = match self.current_player {
            Color::White => &mut next.white_time,
            Color::Black => &mut next.black_time,
        };
        *clock = clock.saturating_sub(elapsed_secs);
        if *clock == 0 {
            return next.timeout();
        }
        next
    }

    fn decided_against(&self, loser: Color) -> GameState {
        GameState {
            winner: Some(loser.opposite()),
            status: GameStatus::Checkmate,
            selected_square: None,
            legal_moves: Vec::new(),
            ..self.clone()
        }
    }
}

/// Moves `piece` from `from` to `to` on a copy of `board` and builds the
/// history record, notated against the pre-move board.
fn play_on_board(board: &Board, from: Square, to: Square, piece: Piece) -> (Board, ChessMove) {
    let mut next = board.clone();
    next.remove(from);
    let captured = next.place(to, piece.moved());
    let record = ChessMove {
        from,
        to,
        piece,
        captured,
        promotion: None,
        notation: notate(board, from, to, piece, captured),
    };
    (next, record)
}

/// Rebuilds board and side to move from the initial position.
///
/// A record whose origin is empty in the rebuilt position is skipped without
/// flipping the turn.
fn replay(moves: &[ChessMove]) -> (Board, Color) {
    let mut board = Board::initial();
    let mut current_player = Color::White;
    for record in moves {
        if board.is_empty_at(record.from) {
            continue;
        }
        board.relocate(record.from, record.to);
        current_player = current_player.opposite();
    }
    (board, current_player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::RandomPolicy;
    use crate::engines::engine_trait::MovePolicy;
    use crate::game_state::chess_types::PieceKind;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn new_game_is_playing_with_white_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.current_player, Color::White);
        assert_eq!(game.status, GameStatus::Playing);
        assert_eq!(game.white_time, 600);
        assert_eq!(game.black_time, 600);
        assert!(game.moves.is_empty());
        assert!(game.winner.is_none());
        assert_eq!(game.board, Board::initial());
    }

    #[test]
    fn with_config_sets_both_clocks() {
        let game = GameState::with_config(&GameConfig {
            initial_clock_secs: 180,
        });
        assert_eq!(game.time_left(Color::White), 180);
        assert_eq!(game.time_left(Color::Black), 180);
    }

    #[test]
    fn opening_pawn_push_is_recorded() {
        let game = GameState::new_game().apply_move(sq(1, 4), sq(3, 4));

        assert_eq!(game.current_player, Color::Black);
        assert!(game.board.is_empty_at(sq(1, 4)));
        let pawn = game.board.piece_at(sq(3, 4)).expect("pawn should be on e4");
        assert!(pawn.has_moved);

        let record = game.last_move().expect("move should be recorded");
        assert_eq!(record.notation, "e4");
        assert_eq!(record.piece, Piece::new(PieceKind::Pawn, Color::White));
        assert!(!record.piece.has_moved);
        assert_eq!(record.captured, None);
        assert_eq!(record.promotion, None);
    }

    #[test]
    fn moving_an_opponent_piece_is_a_no_op() {
        let game = GameState::new_game();
        let after = game.apply_move(sq(6, 4), sq(4, 4));
        assert_eq!(after, game);
        assert_eq!(
            game.check_move_origin(sq(6, 4), sq(4, 4)),
            Err(ChessError::NotSideToMove {
                square: sq(6, 4),
                owner: Color::Black,
                to_move: Color::White,
            })
        );
    }

    #[test]
    fn moving_from_an_empty_square_is_a_no_op() {
        let game = GameState::new_game().select_square(1, 1);
        let after = game.apply_move(sq(3, 3), sq(4, 3));
        assert_eq!(after, game);
        assert_eq!(
            game.check_move_origin(sq(3, 3), sq(4, 3)),
            Err(ChessError::EmptyOrigin(sq(3, 3)))
        );
    }

    #[test]
    fn moving_a_piece_onto_itself_is_a_no_op() {
        let game = GameState::new_game();
        assert_eq!(game.apply_move(sq(0, 1), sq(0, 1)), game);
        assert_eq!(
            game.check_move_origin(sq(0, 1), sq(0, 1)),
            Err(ChessError::NullMove(sq(0, 1)))
        );
        assert_eq!(
            game.check_move_origin(sq(0, 1), sq(2, 2)),
            Ok(Piece::new(PieceKind::Knight, Color::White))
        );
    }

    #[test]
    fn off_board_squares_are_refused_without_touching_the_board() {
        let game = GameState::new_game();
        assert_eq!(game.apply_move(sq(1, 4), sq(8, 4)), game);
        assert_eq!(game.apply_move(sq(9, 0), sq(2, 0)), game);
        assert_eq!(
            game.check_move_origin(sq(1, 4), sq(8, 4)),
            Err(ChessError::OutOfBounds { row: 8, col: 4 })
        );
        assert_eq!(
            game.check_move_origin(sq(0, 200), sq(2, 0)),
            Err(ChessError::OutOfBounds { row: 0, col: 200 })
        );
    }

    #[test]
    fn capture_records_displaced_piece_and_pawn_file() {
        let game = GameState::new_game()
            .apply_move(sq(1, 4), sq(3, 4))
            .apply_move(sq(6, 3), sq(4, 3))
            .apply_move(sq(3, 4), sq(4, 3));

        let record = game.last_move().expect("capture should be recorded");
        assert_eq!(record.notation, "exd5");
        assert_eq!(
            record.captured.map(|p| (p.kind, p.color)),
            Some((PieceKind::Pawn, Color::Black))
        );
        assert_eq!(game.board.piece_count(Color::Black), 15);
    }

    #[test]
    fn black_pawn_capture_on_e4_reads_dxe4() {
        let game = GameState::new_game()
            .apply_move(sq(1, 4), sq(3, 4))
            .apply_move(sq(6, 3), sq(4, 3))
            .apply_move(sq(0, 6), sq(2, 5))
            .apply_move(sq(4, 3), sq(3, 4));
        assert_eq!(game.last_move().map(|m| m.notation.as_str()), Some("dxe4"));
    }

    #[test]
    fn apply_move_clears_selection() {
        let game = GameState::new_game().select_square(1, 4);
        assert_eq!(game.selected_square, Some(sq(1, 4)));
        assert_eq!(game.legal_moves.len(), 2);

        let after = game.apply_move(sq(1, 4), sq(2, 4));
        assert_eq!(after.selected_square, None);
        assert!(after.legal_moves.is_empty());
    }

    #[test]
    fn select_square_does_not_touch_the_board() {
        let game = GameState::new_game();
        let selected = game.select_square(0, 1);
        assert_eq!(selected.board, game.board);
        assert_eq!(selected.legal_moves, vec![sq(2, 2), sq(2, 0)]);
        assert_eq!(game.select_square(9, 0).selected_square, None);
    }

    #[test]
    fn click_flow_selects_reselects_moves_and_clears() {
        let game = GameState::new_game();

        let clicked_enemy = game.handle_square_click(6, 0);
        assert_eq!(clicked_enemy, game);

        let selected = game.handle_square_click(1, 0);
        assert_eq!(selected.selected_square, Some(sq(1, 0)));

        let reselected = selected.handle_square_click(0, 1);
        assert_eq!(reselected.selected_square, Some(sq(0, 1)));
        assert_eq!(reselected.legal_moves, vec![sq(2, 2), sq(2, 0)]);

        let cleared = reselected.handle_square_click(5, 5);
        assert_eq!(cleared.selected_square, None);
        assert!(cleared.legal_moves.is_empty());
        assert_eq!(cleared.board, game.board);

        let moved = reselected.handle_square_click(2, 2);
        assert_eq!(moved.current_player, Color::Black);
        assert_eq!(moved.last_move().map(|m| m.notation.as_str()), Some("Nc3"));
    }

    #[test]
    fn clicks_are_ignored_after_the_game_ends() {
        let game = GameState::new_game().resign();
        assert_eq!(game.handle_square_click(1, 4), game);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let game = GameState::new_game();
        assert_eq!(game.undo(), game);
    }

    #[test]
    fn apply_then_undo_restores_board_and_turn() {
        let mut game = GameState::new_game();
        let mut policy = RandomPolicy::with_seed(7);
        for _ in 0..12 {
            let Some(choice) = policy.choose_move(&game) else {
                break;
            };
            let next = game.apply_move(choice.from, choice.to);
            let back = next.undo();
            assert_eq!(back.board, game.board);
            assert_eq!(back.current_player, game.current_player);
            assert_eq!(back.moves, game.moves);
            game = next;
        }
    }

    #[test]
    fn forty_moves_then_forty_undos_returns_to_the_start() {
        let mut game = GameState::new_game();
        let mut policy = RandomPolicy::with_seed(2024);
        for _ in 0..40 {
            let choice = policy
                .choose_move(&game)
                .expect("a side with pieces should have a move");
            game = game.apply_move(choice.from, choice.to);
        }
        assert_eq!(game.moves.len(), 40);
        assert_eq!(game.current_player, Color::White);

        for _ in 0..40 {
            game = game.undo();
        }
        assert!(game.moves.is_empty());
        assert_eq!(game.current_player, Color::White);
        assert_eq!(game.board, Board::initial());
    }

    #[test]
    fn undo_reopens_a_resigned_game() {
        let game = GameState::new_game()
            .apply_move(sq(1, 4), sq(3, 4))
            .resign();
        assert_eq!(game.winner, Some(Color::White));

        let back = game.undo();
        assert_eq!(back.winner, None);
        assert_eq!(back.status, GameStatus::Playing);
        assert_eq!(back.current_player, Color::White);
    }

    #[test]
    fn resign_awards_the_other_side() {
        let game = GameState::new_game().apply_move(sq(1, 4), sq(3, 4));
        let resigned = game.resign();
        assert_eq!(resigned.winner, Some(Color::White));
        assert_ne!(resigned.winner, Some(resigned.current_player));
        assert_eq!(resigned.status, GameStatus::Checkmate);
    }

    #[test]
    fn resign_outside_playing_is_a_no_op() {
        let over = GameState::new_game().resign();
        assert_eq!(over.resign(), over);

        let drawn = GameState {
            status: GameStatus::Draw,
            ..GameState::new_game()
        };
        assert_eq!(drawn.resign(), drawn);
    }

    #[test]
    fn timeout_is_ignored_once_decided() {
        let flagged = GameState::new_game().timeout();
        assert_eq!(flagged.winner, Some(Color::Black));
        assert_eq!(flagged.status, GameStatus::Checkmate);
        assert_eq!(flagged.timeout(), flagged);
    }

    #[test]
    fn clock_ticks_only_for_side_to_move() {
        let game = GameState::new_game().tick_clock(5);
        assert_eq!(game.white_time, 595);
        assert_eq!(game.black_time, 600);

        let game = game.apply_move(sq(1, 4), sq(3, 4)).tick_clock(3);
        assert_eq!(game.white_time, 595);
        assert_eq!(game.black_time, 597);
    }

    #[test]
    fn running_out_of_time_flags_the_mover() {
        let game = GameState::with_config(&GameConfig {
            initial_clock_secs: 2,
        })
        .apply_move(sq(1, 0), sq(2, 0));

        let flagged = game.tick_clock(1).tick_clock(5);
        assert_eq!(flagged.black_time, 0);
        assert_eq!(flagged.winner, Some(Color::White));

        let frozen = flagged.tick_clock(1);
        assert_eq!(frozen, flagged);
    }
}
