//! Engine configuration read from the process environment.
//!
//! - `TAFFARAN_DECK`: `short32` (default) or `full52`
//! - `TAFFARAN_RULESET`: `classic` (default), `reduced`, or a path to a JSON ruleset
//! - `TAFFARAN_SEED`: base seed for dealing; random when unset
//! - `TAFFARAN_SAVE_PATH`: where the save game lives; no persistence when unset

use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::config::MatchConfig;
use crate::domain::{DeckKind, Ruleset};
use crate::errors::domain::{DomainError, ValidationKind};

pub const DECK_VAR: &str = "TAFFARAN_DECK";
pub const RULESET_VAR: &str = "TAFFARAN_RULESET";
pub const SEED_VAR: &str = "TAFFARAN_SEED";
pub const SAVE_PATH_VAR: &str = "TAFFARAN_SAVE_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub match_config: MatchConfig,
    pub save_path: Option<PathBuf>,
}

fn invalid(detail: String) -> DomainError {
    DomainError::validation(ValidationKind::InvalidConfig, detail)
}

pub fn parse_deck(value: &str) -> Result<DeckKind, DomainError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "short32" | "32" => Ok(DeckKind::Short32),
        "full52" | "52" => Ok(DeckKind::Full52),
        other => Err(invalid(format!("{DECK_VAR}: unknown deck '{other}'"))),
    }
}

/// A built-in ruleset name, or else a path to a JSON ruleset file.
pub fn load_ruleset(value: &str) -> Result<Ruleset, DomainError> {
    let value = value.trim();
    if let Some(ruleset) = Ruleset::named(value) {
        return Ok(ruleset);
    }
    let json = fs::read_to_string(value)
        .map_err(|e| invalid(format!("{RULESET_VAR}: cannot read '{value}': {e}")))?;
    Ruleset::from_json_str(&json)
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut match_config = MatchConfig::default();

        if let Some(deck) = get(DECK_VAR) {
            match_config.deck = parse_deck(&deck)?;
        }
        if let Some(ruleset) = get(RULESET_VAR) {
            match_config.ruleset = load_ruleset(&ruleset)?;
        }
        match_config.seed = match get(SEED_VAR) {
            Some(seed) => seed
                .trim()
                .parse()
                .map_err(|e| invalid(format!("{SEED_VAR}: {e}")))?,
            None => rand::random(),
        };
        match_config.validate()?;

        let save_path = get(SAVE_PATH_VAR).map(PathBuf::from);
        debug!(
            deck = ?match_config.deck,
            ruleset = %match_config.ruleset.name,
            seed = match_config.seed,
            save_path = ?save_path,
            "engine config loaded"
        );
        Ok(Self {
            match_config,
            save_path,
        })
    }
}
