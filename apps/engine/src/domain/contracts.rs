//! Contract kinds. Each hand is played under exactly one contract chosen by
//! the declarer; the contract decides which ruleset entry scores the hand.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Contract {
    NoTricks,
    NoQueens,
    NoLastTwo,
    NoHearts,
    NoKing,
    Trumps,
    Dominoes,
    /// Every penalty contract at once.
    Salade,
    /// Card-point scoring under a chosen trump.
    Belote,
}

impl Contract {
    /// The seven contracts of a standard match.
    pub const CLASSIC: [Contract; 7] = [
        Contract::NoTricks,
        Contract::NoQueens,
        Contract::NoLastTwo,
        Contract::NoHearts,
        Contract::NoKing,
        Contract::Trumps,
        Contract::Dominoes,
    ];

    /// Every contract the engine knows, classic first.
    pub const ALL: [Contract; 9] = [
        Contract::NoTricks,
        Contract::NoQueens,
        Contract::NoLastTwo,
        Contract::NoHearts,
        Contract::NoKing,
        Contract::Trumps,
        Contract::Dominoes,
        Contract::Salade,
        Contract::Belote,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Contract::NoTricks => "no-tricks",
            Contract::NoQueens => "no-queens",
            Contract::NoLastTwo => "no-last-two",
            Contract::NoHearts => "no-hearts",
            Contract::NoKing => "no-king",
            Contract::Trumps => "trumps",
            Contract::Dominoes => "dominoes",
            Contract::Salade => "salade",
            Contract::Belote => "belote",
        }
    }

    /// Declarer must name a trump suit before play starts.
    pub const fn requires_trump(self) -> bool {
        matches!(self, Contract::Trumps | Contract::Belote)
    }

    /// Played as a layout rather than as tricks.
    pub const fn is_layout(self) -> bool {
        matches!(self, Contract::Dominoes)
    }
}

impl Display for Contract {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Contract {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Contract::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::unknown_contract(s))
    }
}
