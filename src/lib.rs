//! Crate root module declarations for the Parlor Chess rules engine.
//!
//! The library holds the board model, per-piece pseudo-legal move generation,
//! the value-in/value-out game state machine, move policies for the automated
//! opponent, and the small utilities (notation, PGN, rendering, sound cues)
//! that front ends build on.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_clock;
    pub mod game_config;
    pub mod game_state;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod auto_opponent;
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod audio {
    pub mod sound_service;
}

pub mod utils {
    pub mod algebraic;
    pub mod long_algebraic;
    pub mod move_notation;
    pub mod pgn;
    pub mod render_game_state;
}
