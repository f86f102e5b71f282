//! Terminal front end: hot-seat play or play against the computer.
//!
//! Run with:
//! `cargo run --release -- --ai --ai-color black --strength greedy-capture`

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use parlor_chess::audio::sound_service::{SoundService, SoundSettings, TracingSoundSink};
use parlor_chess::engines::auto_opponent::{AutoOpponent, OpponentConfig};
use parlor_chess::engines::engine_trait::OpponentStrength;
use parlor_chess::game_state::chess_rules::DEFAULT_CLOCK_SECS;
use parlor_chess::game_state::chess_types::Color;
use parlor_chess::game_state::game_clock::ClockCarry;
use parlor_chess::game_state::game_config::GameConfig;
use parlor_chess::game_state::game_state::GameState;
use parlor_chess::utils::algebraic::algebraic_to_square;
use parlor_chess::utils::long_algebraic::long_algebraic_to_move;
use parlor_chess::utils::move_notation::format_move_list;
use parlor_chess::utils::pgn::write_pgn;
use parlor_chess::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    White,
    Black,
}

impl From<SideArg> for Color {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::White => Color::White,
            SideArg::Black => Color::Black,
        }
    }
}

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
#[command(name = "parlor_chess", about = "Play chess in the terminal")]
struct Args {
    /// Let the computer play one side.
    #[arg(long)]
    ai: bool,

    #[arg(long, value_enum, default_value_t = SideArg::Black)]
    ai_color: SideArg,

    #[arg(long, value_enum, default_value_t = StrengthArg::Random)]
    strength: StrengthArg,

    /// Seed for reproducible computer moves.
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds on each clock.
    #[arg(long, default_value_t = DEFAULT_CLOCK_SECS)]
    clock: u32,

    /// Pause before the computer moves, in milliseconds.
    #[arg(long, default_value_t = 500)]
    think_ms: u64,
}

const HELP: &str = "commands: <from><to> (e.g. e2e4) | moves <square> | undo | resign | new | history | pgn | help | quit";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let game_config = GameConfig {
        initial_clock_secs: args.clock,
    };
    let mut opponent = args.ai.then(|| {
        AutoOpponent::new(OpponentConfig {
            ai_color: args.ai_color.into(),
            think_delay: Duration::from_millis(args.think_ms),
            strength: args.strength.into(),
            seed: args.seed,
        })
    });
    let mut sounds = SoundService::new(TracingSoundSink, SoundSettings::default());

    let mut game = GameState::with_config(&game_config);
    let mut clocks = ClockCarry::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{HELP}");
    loop {
        if let Some(computer) = opponent.as_mut() {
            if computer.wants_to_move(&game) {
                let thinking_started = Instant::now();
                thread::sleep(computer.think_delay());
                let before = game.moves.len();
                let played = computer.play(&game);
                let charged = clocks.charge(&game, thinking_started.elapsed());
                // The move only stands if the computer did not flag while thinking.
                game = match played.moves.get(before) {
                    Some(record) if !charged.is_over() => charged.apply_move(record.from, record.to),
                    _ => charged.clone(),
                };
                announce(&game, before, &mut sounds);
                if charged.is_over() {
                    sounds.on_game_over();
                }
            }
        }

        println!("{}", render_game_state(&game));
        print!("> ");
        stdout.flush()?;

        let turn_started = Instant::now();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let before = game.moves.len();
        let was_over = game.is_over();
        game = clocks.charge(&game, turn_started.elapsed());

        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (None, _) => {}
            (Some("quit" | "exit"), _) => break,
            (Some("help"), _) => println!("{HELP}"),
            (Some("new"), _) => {
                game = GameState::with_config(&game_config);
                clocks.reset();
            }
            (Some("undo"), _) => game = game.undo(),
            (Some("resign"), _) => game = game.resign(),
            (Some("history"), _) => {
                for line in format_move_list(game.moves.iter().map(|m| m.notation.as_str())) {
                    println!("{line}");
                }
            }
            (Some("pgn"), _) => print!("{}", write_pgn(&game)),
            (Some("moves"), Some(square)) => match algebraic_to_square(square) {
                Ok(square) => game = game.select_square(square.row.into(), square.col.into()),
                Err(err) => println!("{err}"),
            },
            (Some(text), _) => match long_algebraic_to_move(text) {
                Ok(choice) => {
                    let selected = game
                        .clear_selection()
                        .handle_square_click(choice.from.row.into(), choice.from.col.into());
                    if selected.selected_square != Some(choice.from) {
                        if let Err(err) = game.check_move_origin(choice.from, choice.to) {
                            println!("{err}");
                        } else {
                            println!("game is over; try undo or new");
                        }
                    } else {
                        let next =
                            selected.handle_square_click(choice.to.row.into(), choice.to.col.into());
                        if next.moves.len() == game.moves.len() {
                            println!("{} cannot move to {}", choice.from, choice.to);
                        } else {
                            game = next;
                        }
                    }
                }
                Err(err) => println!("{err}"),
            },
        }

        announce(&game, before, &mut sounds);
        if !was_over && game.is_over() {
            sounds.on_game_over();
        }
    }

    Ok(())
}

fn announce(game: &GameState, moves_before: usize, sounds: &mut SoundService<TracingSoundSink>) {
    if game.moves.len() > moves_before {
        for record in &game.moves[moves_before..] {
            println!("played {}", record.notation);
            sounds.on_move(record);
        }
    }
}
