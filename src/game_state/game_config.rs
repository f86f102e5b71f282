use crate::game_state::chess_rules::DEFAULT_CLOCK_SECS;

/// Settings fixed at the start of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Starting time on each side's clock, in seconds.
    pub initial_clock_secs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_clock_secs: DEFAULT_CLOCK_SECS,
        }
    }
}
