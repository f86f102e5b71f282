//! PGN-style export of a finished or running game.
//!
//! Move text is the history's own notation, so it inherits its limits: no
//! disambiguation and no check marks.

use chrono::{Local, NaiveDate};

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::utils::move_notation::format_move_list;

/// `1-0`, `0-1` or `*`.
pub fn result_tag(game_state: &GameState) -> &'static str {
    match game_state.winner {
        Some(Color::White) => "1-0",
        Some(Color::Black) => "0-1",
        None => "*",
    }
}

/// PGN dated today (local time).
pub fn write_pgn(game_state: &GameState) -> String {
    write_pgn_dated(game_state, Local::now().date_naive())
}

pub fn write_pgn_dated(game_state: &GameState, date: NaiveDate) -> String {
    // Seven Tag Roster, in roster order.
    let headers = [
        ("Event", "Casual Game".to_owned()),
        ("Site", "Local".to_owned()),
        ("Date", date.format("%Y.%m.%d").to_string()),
        ("Round", "-".to_owned()),
        ("White", "White".to_owned()),
        ("Black", "Black".to_owned()),
        ("Result", result_tag(game_state).to_owned()),
    ];

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{key} \"{}\"]\n", escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext = format_move_list(game_state.moves.iter().map(|m| m.notation.as_str()));
    movetext.push(result_tag(game_state).to_owned());
    out.push_str(&movetext.join(" "));
    out.push('\n');
    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date")
    }

    #[test]
    fn running_game_has_open_result() {
        let game = GameState::new_game()
            .apply_move(Square::new(1, 4), Square::new(3, 4))
            .apply_move(Square::new(6, 4), Square::new(4, 4))
            .apply_move(Square::new(0, 6), Square::new(2, 5));

        let pgn = write_pgn_dated(&game, date());
        assert!(pgn.contains("[Date \"2024.03.09\"]\n"));
        assert!(pgn.contains("[Result \"*\"]\n"));
        assert!(pgn.ends_with("\n1. e4 e5 2. Nf3 *\n"));
    }

    #[test]
    fn resignation_is_reported_for_the_winner() {
        let game = GameState::new_game()
            .apply_move(Square::new(1, 5), Square::new(2, 5))
            .resign();
        let pgn = write_pgn_dated(&game, date());
        assert_eq!(result_tag(&game), "1-0");
        assert!(pgn.ends_with("\n1. f3 1-0\n"));
    }

    #[test]
    fn headers_follow_roster_order_and_are_escaped() {
        assert_eq!(escape_pgn_value("a \"b\""), "a \\\"b\\\"");
        let pgn = write_pgn_dated(&GameState::new_game(), date());
        let tags: Vec<&str> = pgn
            .lines()
            .take_while(|line| line.starts_with('['))
            .filter_map(|line| line[1..].split(' ').next())
            .collect();
        assert_eq!(
            tags,
            ["Event", "Site", "Date", "Round", "White", "Black", "Result"]
        );
        assert!(pgn.ends_with("\n*\n"));
    }
}
