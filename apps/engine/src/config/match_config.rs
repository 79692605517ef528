use serde::{Deserialize, Serialize};

use crate::domain::rules::{DEFAULT_DOMINOES_START_RANK, PLAYERS};
use crate::domain::state::Seat;
use crate::domain::{DeckKind, Rank, Ruleset};
use crate::errors::domain::{DomainError, ValidationKind};

/// Settings fixed for the lifetime of one match. Saved with the match state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default)]
    pub deck: DeckKind,
    #[serde(default)]
    pub ruleset: Ruleset,
    /// Base seed; each hand derives its own dealing seed from it.
    #[serde(default)]
    pub seed: u64,
    pub player_names: [String; PLAYERS],
    /// Seats driven by the built-in bot.
    pub bots: [bool; PLAYERS],
    #[serde(default)]
    pub first_declarer: Seat,
    #[serde(default = "default_start_rank")]
    pub dominoes_start_rank: Rank,
}

fn default_start_rank() -> Rank {
    DEFAULT_DOMINOES_START_RANK
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            deck: DeckKind::default(),
            ruleset: Ruleset::default(),
            seed: 0,
            player_names: [
                "You".to_string(),
                "Player 2".to_string(),
                "Player 3".to_string(),
                "Player 4".to_string(),
            ],
            bots: [false, true, true, true],
            first_declarer: 0,
            dominoes_start_rank: DEFAULT_DOMINOES_START_RANK,
        }
    }
}

impl MatchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_deck(mut self, deck: DeckKind) -> Self {
        self.deck = deck;
        self
    }

    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    /// Every seat driven by the bot (simulations).
    pub fn all_bots(mut self) -> Self {
        self.bots = [true; PLAYERS];
        self
    }

    /// Reject configurations a match cannot be played with.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.first_declarer as usize >= PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!("first declarer {} is not a seat", self.first_declarer),
            ));
        }
        if !self.deck.ranks().contains(&self.dominoes_start_rank) {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!(
                    "dominoes start rank {:?} is not in the {:?} deck",
                    self.dominoes_start_rank, self.deck
                ),
            ));
        }
        Ok(())
    }
}
