use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use fastbreak_core::{MatchJournal, ReplayResult, replay::replay_to_end};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the match journal JSON file to replay
    #[arg(short, long)]
    journal: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: MatchJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult = replay_to_end(&journal)
        .map_err(|e| anyhow::anyhow!("Replay diverged from the journal: {:?}", e))?;

    println!("Replay complete.");
    println!("Final Tick: {}", result.final_tick);
    println!("Goal Scored: {}", result.goal_scored);
    println!("Board Hash: {}", result.final_board_hash);

    Ok(())
}
