//! Deck construction, seedable shuffling, and round-robin dealing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Which rank set a match is played with. Fixed for the whole match.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckKind {
    /// 32 cards, seven through ace (eight tricks per hand).
    #[default]
    Short32,
    /// 52 cards, two through ace (thirteen tricks per hand).
    Full52,
}

impl DeckKind {
    /// Ranks of this deck, ace first.
    pub fn ranks(self) -> &'static [Rank] {
        match self {
            DeckKind::Short32 => &Rank::DESCENDING[..8],
            DeckKind::Full52 => &Rank::DESCENDING[..],
        }
    }

    pub fn size(self) -> usize {
        self.ranks().len() * Suit::ALL.len()
    }

    /// Cards each seat holds after the deal.
    pub fn hand_size(self) -> usize {
        self.size() / PLAYERS
    }
}

/// Build a deck for `ranks` in suit-major, rank-major order.
pub fn build_deck(ranks: &[Rank]) -> Vec<Card> {
    let mut deck = Vec::with_capacity(ranks.len() * Suit::ALL.len());
    for suit in Suit::ALL {
        for &rank in ranks {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Fisher-Yates shuffle driven by the supplied RNG.
///
/// `random_range` samples without modulo bias, so every permutation is
/// equally likely under a uniform generator.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}

/// Deal round-robin: card `i` goes to player `i % player_count`.
pub fn deal(deck: &[Card], player_count: usize) -> Result<Vec<Vec<Card>>, DomainError> {
    if player_count == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            "Player count must be at least 1",
        ));
    }

    let mut hands: Vec<Vec<Card>> = (0..player_count)
        .map(|_| Vec::with_capacity(deck.len() / player_count + 1))
        .collect();
    for (i, &card) in deck.iter().enumerate() {
        hands[i % player_count].push(card);
    }
    Ok(hands)
}

/// Build, shuffle, and deal a full deck of `kind` to the four seats.
pub fn deal_hands(kind: DeckKind, seed: u64) -> Result<[Vec<Card>; PLAYERS], DomainError> {
    let mut deck = build_deck(kind.ranks());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffle(&mut deck, &mut rng);

    let dealt = deal(&deck, PLAYERS)?;
    let hands: [Vec<Card>; PLAYERS] = dealt
        .try_into()
        .map_err(|_| DomainError::invariant("deal produced the wrong number of hands"))?;
    Ok(hands)
}
