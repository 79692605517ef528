//! Match simulator CLI - plays all-bot matches in memory and writes one JSON
//! line per match.

mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use output::OutputWriter;
use simulator::Simulator;
use taffaran_engine::config::env::load_ruleset;
use taffaran_engine::{
    AiPlayer, Contract, FirstLegalPlayer, MatchConfig, RandomPlayer, SaveStore,
};
use tracing::{info, warn};
use types::{BotKind, DeckArg, MatchRecord};

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "Play bot-only Taffaran matches and record the results")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Base seed; match N uses seed + N - 1. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "short32")]
    deck: DeckArg,

    /// `classic`, `reduced`, or a path to a JSON ruleset
    #[arg(long, default_value = "classic")]
    ruleset: String,

    /// Comma-separated contracts; defaults to the seven classic ones
    #[arg(long, value_delimiter = ',')]
    contracts: Vec<Contract>,

    #[arg(long, value_enum, default_value = "first-legal")]
    bot: BotKind,

    /// JSONL destination (`-` for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Save the match state here after every hand
    #[arg(long)]
    save_state: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print a per-seat summary at the end
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ruleset = load_ruleset(&args.ruleset)?;
    let contracts = if args.contracts.is_empty() {
        Contract::CLASSIC.to_vec()
    } else {
        args.contracts.clone()
    };
    let base_seed = args.seed.unwrap_or_else(rand::random);
    let save_store = args.save_state.as_deref().map(SaveStore::new);
    let mut output = OutputWriter::new(&args.output)?;

    info!(
        matches = args.matches,
        base_seed,
        ruleset = %ruleset.name,
        contracts = ?contracts,
        "Starting simulation"
    );

    let start = Instant::now();
    let mut records = Vec::new();
    let mut errors = 0;

    for match_no in 1..=args.matches {
        let seed = base_seed.wrapping_add(u64::from(match_no - 1));
        let config = MatchConfig::default()
            .with_seed(seed)
            .with_deck(args.deck.into())
            .with_ruleset(ruleset.clone());
        let simulator = Simulator {
            config,
            contracts: &contracts,
            save_store: save_store.as_ref(),
        };

        match simulator.run(match_no, create_bot(args.bot, seed)) {
            Ok(record) => {
                if let Err(e) = output.write_match(&record) {
                    warn!("Failed to write result for match {}: {}", match_no, e);
                }
                records.push(record);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed: {}", match_no, e);
            }
        }
    }

    if let Some(path) = output.path() {
        info!("Results written to: {}", path.display());
    }
    output.finish()?;

    if args.summary {
        print_summary(&records, errors, start.elapsed(), args.matches);
    }
    Ok(())
}

fn create_bot(kind: BotKind, seed: u64) -> Box<dyn AiPlayer> {
    match kind {
        BotKind::FirstLegal => Box::new(FirstLegalPlayer),
        BotKind::Random => Box::new(RandomPlayer::new(Some(seed))),
    }
}

fn print_summary(records: &[MatchRecord], errors: u32, elapsed: std::time::Duration, total: u32) {
    eprintln!("\n=== Simulation Summary ===");
    eprintln!("Matches completed: {}/{}", records.len(), total);
    if errors > 0 {
        eprintln!("Errors: {errors}");
    }
    eprintln!("Total time: {elapsed:?}");
    if records.is_empty() {
        return;
    }

    let mut wins = [0u32; 4];
    let mut totals = [0i64; 4];
    for record in records {
        for &seat in &record.winners {
            wins[seat as usize] += 1;
        }
        for (seat, &score) in record.final_scores.iter().enumerate() {
            totals[seat] += i64::from(score);
        }
    }

    eprintln!("\n=== Results by Seat ===");
    for seat in 0..4 {
        let avg = totals[seat] as f64 / records.len() as f64;
        let win_rate = f64::from(wins[seat]) / records.len() as f64 * 100.0;
        eprintln!(
            "Seat {seat}: avg={avg:.1}, wins={} ({win_rate:.1}%)",
            wins[seat]
        );
    }
}
