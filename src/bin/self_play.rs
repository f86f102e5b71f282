//! Computer-vs-computer series runner.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --games 20 --white random --black greedy-capture`

use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use parlor_chess::engines::auto_opponent::{AutoOpponent, OpponentConfig};
use parlor_chess::engines::engine_trait::OpponentStrength;
use parlor_chess::game_state::chess_types::{Color, PieceKind};
use parlor_chess::game_state::game_state::GameState;
use parlor_chess::utils::pgn::write_pgn;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrengthArg {
    Random,
    GreedyCapture,
}

impl From<StrengthArg> for OpponentStrength {
    fn from(strength: StrengthArg) -> Self {
        match strength {
            StrengthArg::Random => OpponentStrength::Random,
            StrengthArg::GreedyCapture => OpponentStrength::GreedyCapture,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "self_play", about = "Play computer policies against each other")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Games stop undecided after this many plies.
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    #[arg(long, value_enum, default_value_t = StrengthArg::Random)]
    white: StrengthArg,

    #[arg(long, value_enum, default_value_t = StrengthArg::GreedyCapture)]
    black: StrengthArg,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Print each game as PGN.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct SeriesStats {
    white_wins: u32,
    black_wins: u32,
    unfinished: u32,
    plies: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let mut stats = SeriesStats::default();
    let started = Instant::now();

    for game_index in 0..args.games {
        let (white_seed, black_seed) = game_seeds(args.seed, game_index);
        let mut white = AutoOpponent::new(OpponentConfig {
            ai_color: Color::White,
            strength: args.white.into(),
            seed: Some(white_seed),
            ..OpponentConfig::default()
        });
        let mut black = AutoOpponent::new(OpponentConfig {
            ai_color: Color::Black,
            strength: args.black.into(),
            seed: Some(black_seed),
            ..OpponentConfig::default()
        });

        let game = play_one(&mut white, &mut black, args.max_plies);
        stats.plies += game.moves.len();
        match game.winner {
            Some(Color::White) => stats.white_wins += 1,
            Some(Color::Black) => stats.black_wins += 1,
            None => stats.unfinished += 1,
        }
        if args.verbose {
            println!("{}", write_pgn(&game));
        }
    }

    let elapsed = started.elapsed();
    println!(
        "{} games | white ({}) {} | black ({}) {} | unfinished {} | avg plies {:.1} | {:.3?}",
        args.games,
        strength_name(args.white),
        stats.white_wins,
        strength_name(args.black),
        stats.black_wins,
        stats.unfinished,
        stats.plies as f64 / f64::from(args.games.max(1)),
        elapsed
    );
}

/// Plays until a king is captured, a side cannot move, or `max_plies` is hit.
///
/// The rules engine has no checkmate; losing the king counts as resignation.
fn play_one(white: &mut AutoOpponent, black: &mut AutoOpponent, max_plies: usize) -> GameState {
    let mut game = GameState::new_game();
    while game.moves.len() < max_plies && !game.is_over() {
        let before = game.moves.len();
        game = match game.current_player {
            Color::White => white.play(&game),
            Color::Black => black.play(&game),
        };
        if game.moves.len() == before {
            break;
        }
        let king_taken = game
            .last_move()
            .and_then(|m| m.captured)
            .is_some_and(|captured| captured.kind == PieceKind::King);
        if king_taken {
            game = game.resign();
        }
    }
    game
}

/// Distinct per-game seeds for each side. Wraps at `u64::MAX`.
fn game_seeds(base: u64, game_index: u32) -> (u64, u64) {
    let white = base.wrapping_add(u64::from(game_index) * 2);
    (white, white.wrapping_add(1))
}

fn strength_name(strength: StrengthArg) -> &'static str {
    match strength {
        StrengthArg::Random => "random",
        StrengthArg::GreedyCapture => "greedy-capture",
    }
}
