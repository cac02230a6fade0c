//! Headless Cluedo runner
//!
//! Plays AI-only games from a seed and prints one summary per game.

use std::path::PathBuf;

use clap::Parser;
use cluedo_ai::board::{classic_board, load_board};
use cluedo_ai::core::config::{load_ai_config, AiConfig, GameConfig};
use cluedo_ai::core::error::Result;
use cluedo_ai::game::{GameEnd, GameSession, GameSummary};
use serde::Serialize;

/// Headless Cluedo runner - AI vs AI games
#[derive(Parser, Debug)]
#[command(name = "cluedo-ai")]
#[command(about = "Run AI-only Cluedo games and report who solved the case")]
struct Args {
    /// Random seed for deterministic runs; game N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Board layout file (defaults to the bundled classic layout)
    #[arg(long)]
    board: Option<PathBuf>,

    /// AI config name (loaded from data/ai/)
    #[arg(long, default_value = "default")]
    ai_config: String,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Maximum turns before a game is declared unsolved
    #[arg(long, default_value_t = 500)]
    max_turns: u32,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Print the final board and every notebook after each game
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure for a batch
#[derive(Serialize)]
struct BatchResult {
    ai_config: String,
    games: Vec<GameSummary>,
    solved: usize,
    average_turns: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cluedo_ai=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let ai_config = load_ai_config(&args.ai_config).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load AI config '{}': {}", args.ai_config, e);
        eprintln!("Using default AI config");
        AiConfig::default()
    });

    let board = match &args.board {
        Some(path) => load_board(path)?,
        None => classic_board()?,
    };

    let mut summaries = Vec::with_capacity(args.games as usize);
    for game in 0..args.games {
        let config = GameConfig {
            max_turns: args.max_turns,
            ..GameConfig::with_seed(seed.wrapping_add(game as u64))
        };
        let mut session = GameSession::setup(board.clone(), &ai_config, config)?;
        let summary = session.run();

        if args.format != "json" {
            print_text(&summary);
        }
        if args.verbose {
            print_details(&session);
        }
        summaries.push(summary);
    }

    if args.format == "json" {
        let solved = summaries
            .iter()
            .filter(|s| matches!(s.end, GameEnd::Solved { .. }))
            .count();
        let average_turns = if summaries.is_empty() {
            0.0
        } else {
            summaries.iter().map(|s| s.turns as f32).sum::<f32>() / summaries.len() as f32
        };
        let result = BatchResult {
            ai_config: ai_config.name.clone(),
            games: summaries,
            solved,
            average_turns,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

fn print_text(summary: &GameSummary) {
    println!("=== GAME (seed {}) ===", summary.seed);
    println!("Solution: {}", summary.solution);
    match summary.end {
        GameEnd::Solved { .. } => println!(
            "Winner:   {} after {} turns",
            summary.winner.as_deref().unwrap_or("?"),
            summary.turns
        ),
        GameEnd::AllEliminated => println!("Every player eliminated after {} turns", summary.turns),
        GameEnd::TurnLimit => println!("Unsolved after {} turns", summary.turns),
    }
    if !summary.eliminated.is_empty() {
        println!("Eliminated: {}", summary.eliminated.join(", "));
    }
    println!();
}

fn print_details(session: &GameSession) {
    println!("{}", session.render());
    for p in session.players() {
        let status = if p.eliminated { " (eliminated)" } else { "" };
        println!("--- {} [{}]{} ---", p.name, p.token, status);
        if let Some(nb) = p.controller.as_ref().and_then(|c| c.notebook()) {
            println!("{}", nb.summary());
        }
    }
    println!();
}
