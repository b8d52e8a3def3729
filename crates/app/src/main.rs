use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use fastbreak_core::{Board, Match, MatchJournal, board_hash, goal_within_reach};

mod config;
mod journal_out;
mod render;

use config::SimConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config with the starting layout and loop limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured tick limit
    #[arg(long)]
    ticks: Option<u32>,

    /// Override the configured inter-tick delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Write the finished match journal to this path as JSON
    #[arg(long)]
    journal_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let tick_limit = args.ticks.unwrap_or(config.tick_limit);
    let delay = Duration::from_millis(args.delay_ms.unwrap_or(config.tick_delay_ms));

    let board = Board::from_rows(&config.layout)
        .map_err(|e| anyhow::anyhow!("invalid starting layout: {e:?}"))?;

    render::print_legend();
    println!("\nStarting lineup");
    render::print_board(&board, board.target_ring());
    println!("{}", "=".repeat(80));

    let mut journal = MatchJournal::new(config.layout.clone(), tick_limit);
    let mut game = Match::new(board);

    while game.current_tick() < u64::from(tick_limit) {
        let analytics = game.advance_tick();
        journal.record_tick(&analytics, board_hash(game.board()));

        println!("\nTick {}", analytics.tick);
        render::print_board(game.board(), analytics.target_ring);
        render::print_turn_analysis(&analytics);

        if analytics.goal_scored || goal_within_reach(game.board()) {
            println!("\nGoal! The ball is in the ring.");
            break;
        }

        thread::sleep(delay);
    }

    if !game.goal_scored() && !goal_within_reach(game.board()) {
        println!("\nNo goal within {tick_limit} ticks.");
    }
    println!("Match finished after {} ticks.", game.current_tick());

    if let Some(path) = &args.journal_out {
        journal_out::write_atomic(&journal, path)
            .with_context(|| format!("failed to write journal: {}", path.display()))?;
        println!("Journal written to {}", path.display());
    }

    Ok(())
}
