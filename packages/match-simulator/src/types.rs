use clap::ValueEnum;
use serde::Serialize;
use taffaran_engine::{DeckKind, Seat};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DeckArg {
    Short32,
    Full52,
}

impl From<DeckArg> for DeckKind {
    fn from(arg: DeckArg) -> Self {
        match arg {
            DeckArg::Short32 => DeckKind::Short32,
            DeckArg::Full52 => DeckKind::Full52,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BotKind {
    FirstLegal,
    Random,
}

/// One JSONL record per simulated match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub match_no: u32,
    pub seed: u64,
    pub deck: DeckKind,
    pub ruleset: String,
    pub contracts: Vec<String>,
    pub hands_played: usize,
    pub final_scores: [i32; 4],
    pub winners: Vec<Seat>,
    pub duration_ms: f64,
}
