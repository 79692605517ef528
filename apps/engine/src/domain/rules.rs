//! Ruleset configuration: which scoring rule applies to each contract.
//!
//! Two published variants of the game disagree on several constants, so the
//! numbers live here as named constants and are injected into a match as a
//! [`Ruleset`]. `classic` is the canonical configuration.

use serde::{Deserialize, Serialize};

use crate::domain::contracts::Contract;
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub const PLAYERS: usize = 4;

pub const NO_TRICKS_PER_TRICK: i32 = -2;
pub const NO_QUEENS_PER_QUEEN: i32 = -20;
pub const NO_LAST_TWO_SECOND_TO_LAST: i32 = -10;
pub const NO_LAST_TWO_LAST: i32 = -20;
pub const NO_HEARTS_PER_HEART: i32 = -10;
pub const NO_KING_PENALTY: i32 = -80;
pub const TRUMPS_PER_TRICK: i32 = 5;
pub const DOMINOES_FINISH_POINTS: [i32; PLAYERS] = [45, 20, 5, -5];

pub const REDUCED_NO_QUEENS_PER_QUEEN: i32 = -6;
pub const REDUCED_NO_HEARTS_PER_HEART: i32 = -2;
pub const REDUCED_ACE_OF_HEARTS_EXTRA: i32 = -6;
pub const REDUCED_NO_KING_PENALTY: i32 = -20;

pub const BELOTE_TRUMP_POINTS: [(Rank, i32); 6] = [
    (Rank::Jack, 20),
    (Rank::Nine, 14),
    (Rank::Ace, 11),
    (Rank::Ten, 10),
    (Rank::King, 4),
    (Rank::Queen, 3),
];
pub const BELOTE_PLAIN_POINTS: [(Rank, i32); 5] = [
    (Rank::Ace, 11),
    (Rank::Ten, 10),
    (Rank::King, 4),
    (Rank::Queen, 3),
    (Rank::Jack, 2),
];

pub const KING_OF_HEARTS: Card = Card::new(Suit::Hearts, Rank::King);
pub const ACE_OF_HEARTS: Card = Card::new(Suit::Hearts, Rank::Ace);

/// Rank that opens a suit in the dominoes layout unless configured otherwise.
pub const DEFAULT_DOMINOES_START_RANK: Rank = Rank::Jack;

/// Which captured cards a [`CardPenalty`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFilter {
    Suit(Suit),
    Rank(Rank),
    Card(Card),
}

impl CardFilter {
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            CardFilter::Suit(suit) => card.suit == *suit,
            CardFilter::Rank(rank) => card.rank == *rank,
            CardFilter::Card(c) => card == c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPenalty {
    pub filter: CardFilter,
    pub points: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankPoints {
    pub rank: Rank,
    pub points: i32,
}

/// How one contract turns a seat's hand into a score delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringRule {
    /// `points` for every trick won.
    PerTrick { points: i32 },
    /// Each penalty is charged once per captured card it matches.
    CapturedCards { penalties: Vec<CardPenalty> },
    /// Charged for winning the second-to-last and/or the last trick.
    LastTricks { second_to_last: i32, last: i32 },
    /// Points by finishing position (index 0 = first out).
    FinishOrder { points: [i32; PLAYERS] },
    /// Card-point values of captured cards, trump suit valued separately.
    CardPoints {
        trump: Vec<RankPoints>,
        plain: Vec<RankPoints>,
    },
    /// Sum of several rules.
    Combined { rules: Vec<ScoringRule> },
}

impl ScoringRule {
    /// True if scoring needs the dominoes finish order.
    pub fn needs_finish_order(&self) -> bool {
        match self {
            ScoringRule::FinishOrder { .. } => true,
            ScoringRule::Combined { rules } => rules.iter().any(ScoringRule::needs_finish_order),
            _ => false,
        }
    }

    /// True if scoring needs a trump suit.
    pub fn needs_trump(&self) -> bool {
        match self {
            ScoringRule::CardPoints { .. } => true,
            ScoringRule::Combined { rules } => rules.iter().any(ScoringRule::needs_trump),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRule {
    pub contract: Contract,
    pub rule: ScoringRule,
}

/// Contract → scoring rule table, selected once per match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    pub name: String,
    pub contracts: Vec<ContractRule>,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::classic()
    }
}

fn rank_points(table: &[(Rank, i32)]) -> Vec<RankPoints> {
    table
        .iter()
        .map(|&(rank, points)| RankPoints { rank, points })
        .collect()
}

fn per_card(filter: CardFilter, points: i32) -> CardPenalty {
    CardPenalty { filter, points }
}

impl Ruleset {
    /// Canonical constants: queens -20, hearts -10, king of hearts -80.
    pub fn classic() -> Self {
        Self::build(
            "classic",
            vec![per_card(CardFilter::Rank(Rank::Queen), NO_QUEENS_PER_QUEEN)],
            vec![per_card(CardFilter::Suit(Suit::Hearts), NO_HEARTS_PER_HEART)],
            vec![per_card(CardFilter::Card(KING_OF_HEARTS), NO_KING_PENALTY)],
        )
    }

    /// Lower-stakes variant: queens -6, hearts -2 (ace of hearts a further -6),
    /// king of hearts -20.
    pub fn reduced() -> Self {
        Self::build(
            "reduced",
            vec![per_card(
                CardFilter::Rank(Rank::Queen),
                REDUCED_NO_QUEENS_PER_QUEEN,
            )],
            vec![
                per_card(CardFilter::Suit(Suit::Hearts), REDUCED_NO_HEARTS_PER_HEART),
                per_card(CardFilter::Card(ACE_OF_HEARTS), REDUCED_ACE_OF_HEARTS_EXTRA),
            ],
            vec![per_card(
                CardFilter::Card(KING_OF_HEARTS),
                REDUCED_NO_KING_PENALTY,
            )],
        )
    }

    fn build(
        name: &str,
        queens: Vec<CardPenalty>,
        hearts: Vec<CardPenalty>,
        king: Vec<CardPenalty>,
    ) -> Self {
        let no_tricks = ScoringRule::PerTrick {
            points: NO_TRICKS_PER_TRICK,
        };
        let no_queens = ScoringRule::CapturedCards { penalties: queens };
        let no_last_two = ScoringRule::LastTricks {
            second_to_last: NO_LAST_TWO_SECOND_TO_LAST,
            last: NO_LAST_TWO_LAST,
        };
        let no_hearts = ScoringRule::CapturedCards { penalties: hearts };
        let no_king = ScoringRule::CapturedCards { penalties: king };
        let salade = ScoringRule::Combined {
            rules: vec![
                no_tricks.clone(),
                no_queens.clone(),
                no_hearts.clone(),
                no_king.clone(),
                no_last_two.clone(),
            ],
        };

        let contracts = vec![
            (Contract::NoTricks, no_tricks),
            (Contract::NoQueens, no_queens),
            (Contract::NoLastTwo, no_last_two),
            (Contract::NoHearts, no_hearts),
            (Contract::NoKing, no_king),
            (
                Contract::Trumps,
                ScoringRule::PerTrick {
                    points: TRUMPS_PER_TRICK,
                },
            ),
            (
                Contract::Dominoes,
                ScoringRule::FinishOrder {
                    points: DOMINOES_FINISH_POINTS,
                },
            ),
            (Contract::Salade, salade),
            (
                Contract::Belote,
                ScoringRule::CardPoints {
                    trump: rank_points(&BELOTE_TRUMP_POINTS),
                    plain: rank_points(&BELOTE_PLAIN_POINTS),
                },
            ),
        ]
        .into_iter()
        .map(|(contract, rule)| ContractRule { contract, rule })
        .collect();

        Self {
            name: name.to_string(),
            contracts,
        }
    }

    /// Look up a built-in ruleset by name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "reduced" => Some(Self::reduced()),
            _ => None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| {
            DomainError::validation(ValidationKind::InvalidConfig, format!("ruleset: {e}"))
        })
    }

    /// Scoring rule for `contract`; a contract missing from the table is an error.
    pub fn rule_for(&self, contract: Contract) -> Result<&ScoringRule, DomainError> {
        self.contracts
            .iter()
            .find(|entry| entry.contract == contract)
            .map(|entry| &entry.rule)
            .ok_or_else(|| {
                DomainError::unknown_contract(format!(
                    "{contract} has no scoring rule in ruleset '{}'",
                    self.name
                ))
            })
    }

    /// Like [`Ruleset::rule_for`], but also rejects a rule that cannot score
    /// the way `contract` is played: finish-order scoring only for the layout
    /// contract, card points only where a trump is named.
    pub fn checked_rule_for(&self, contract: Contract) -> Result<&ScoringRule, DomainError> {
        let rule = self.rule_for(contract)?;
        if rule.needs_finish_order() != contract.is_layout() {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!(
                    "ruleset '{}': {contract} is {} but its rule {} a finish order",
                    self.name,
                    if contract.is_layout() { "a layout" } else { "played in tricks" },
                    if rule.needs_finish_order() { "needs" } else { "ignores" },
                ),
            ));
        }
        if rule.needs_trump() && !contract.requires_trump() {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!(
                    "ruleset '{}': {contract} names no trump but its rule scores card points",
                    self.name
                ),
            ));
        }
        Ok(rule)
    }

    pub fn supports(&self, contract: Contract) -> bool {
        self.checked_rule_for(contract).is_ok()
    }
}
