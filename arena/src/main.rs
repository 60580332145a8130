use std::path::PathBuf;

use clap::Parser;
use kivi::MatchEnd;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod config;
mod recording;
mod run;

use config::MatchConfig;
use recording::Recorder;
use run::play_match;

/// Plays Kivi matches between computer seats and reports who wins.
#[derive(Parser)]
struct Args {
    /// Path to a JSON match config; without one, Hard plays Easy
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How many matches to play
    #[arg(short, long, default_value_t = 100)]
    num_matches: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record each match's turns as a JSON file into this directory
    #[arg(short, long)]
    record_matches_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    config.ensure_playable()?;

    let mut recorder = if let Some(dir_path) = args.record_matches_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut wins = vec![0usize; config.players.len()];
    let mut total_scores = vec![0u64; config.players.len()];
    let mut full_boards = 0usize;

    for match_idx in 0..args.num_matches {
        let summary = play_match(&config, StdRng::seed_from_u64(rng.gen()), &mut recorder)?;
        debug!(
            match_idx,
            winner = config.players[summary.winner].name,
            turns = summary.turns,
            scores = ?summary.scores,
        );
        wins[summary.winner] += 1;
        for (total, score) in total_scores.iter_mut().zip(&summary.scores) {
            *total += u64::from(*score);
        }
        if summary.end == MatchEnd::BoardFull {
            full_boards += 1;
        }
    }

    eprintln!("End result over {} matches:", args.num_matches);
    for (seat, player) in config.players.iter().enumerate() {
        eprintln!(
            "- {} wins by {} (mean score {:.1})",
            wins[seat],
            player.name,
            total_scores[seat] as f64 / args.num_matches as f64
        );
    }
    if full_boards > 0 {
        eprintln!("- {} matches ended on a full board", full_boards);
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
