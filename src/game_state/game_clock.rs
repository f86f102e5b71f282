//! Wall-clock charging for [`GameState::tick_clock`].
//!
//! `tick_clock` works in whole seconds. `ClockCarry` keeps the sub-second
//! remainder per side so short turns still add up.

use std::time::Duration;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockCarry {
    white: Duration,
    black: Duration,
}

impl ClockCarry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time already spent by `color` that has not reached a whole second.
    pub fn pending(&self, color: Color) -> Duration {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Charges `elapsed` to the side to move. Whole seconds go to the clock,
    /// the remainder waits for that side's next charge.
    pub fn charge(&mut self, game_state: &GameState, elapsed: Duration) -> GameState {
        if game_state.is_over() {
            return game_state.clone();
        }
        let slot = match game_state.current_player {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        let total = *slot + elapsed;
        let whole = total.as_secs();
        *slot = total - Duration::from_secs(whole);
        if whole == 0 {
            return game_state.clone();
        }
        game_state.tick_clock(u32::try_from(whole).unwrap_or(u32::MAX))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
