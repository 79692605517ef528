//! Deck, shuffle and deal tests.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::dealing::{build_deck, deal, deal_hands, shuffle, DeckKind};
use crate::domain::{test_gens, test_prelude, Card, Rank};
use crate::errors::domain::ValidationKind;

#[test]
fn deck_integrity_for_both_kinds() {
    for kind in [DeckKind::Short32, DeckKind::Full52] {
        let deck = build_deck(kind.ranks());
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(deck.len(), kind.size());
        assert_eq!(unique.len(), kind.size());
    }
    let short = build_deck(DeckKind::Short32.ranks());
    assert!(short.iter().all(|c| c.rank >= Rank::Seven));
}

#[test]
fn same_seed_same_hands() {
    let a = deal_hands(DeckKind::Short32, 42).unwrap();
    let b = deal_hands(DeckKind::Short32, 42).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, deal_hands(DeckKind::Short32, 43).unwrap());
}

#[test]
fn zero_players_is_rejected() {
    let deck = build_deck(DeckKind::Short32.ranks());
    let err = deal(&deck, 0).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidPlayerCount));
}

#[test]
fn deal_is_round_robin() {
    let deck = build_deck(DeckKind::Short32.ranks());
    let hands = deal(&deck, 4).unwrap();
    assert_eq!(hands[1][0], deck[1]);
    assert_eq!(hands[0][1], deck[4]);
    assert_eq!(hands[3][7], deck[31]);
}

/// Position of one card over many seeded shuffles should be uniform.
///
/// 32 bins, 31 degrees of freedom; 75 sits far beyond the 0.1% critical
/// value, so only a badly biased shuffle fails.
#[test]
fn shuffle_positions_pass_chi_square() {
    const TRIALS: usize = 6400;
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let base = build_deck(DeckKind::Short32.ranks());
    let tracked = base[0];
    let mut counts = [0usize; 32];

    for _ in 0..TRIALS {
        let mut deck = base.clone();
        shuffle(&mut deck, &mut rng);
        if let Some(pos) = deck.iter().position(|&c| c == tracked) {
            counts[pos] += 1;
        }
    }

    let expected = TRIALS as f64 / counts.len() as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|&o| {
            let d = o as f64 - expected;
            d * d / expected
        })
        .sum();
    assert!(chi_square < 75.0, "chi-square {chi_square:.1} suggests bias: {counts:?}");
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every card of the deck lands in exactly one hand, evenly split.
    #[test]
    fn prop_deal_partitions_deck(kind in test_gens::deck_kind(), seed in any::<u64>()) {
        let hands = deal_hands(kind, seed).unwrap();
        let mut seen = HashSet::new();
        for hand in &hands {
            prop_assert_eq!(hand.len(), kind.hand_size());
            for card in hand {
                prop_assert!(seen.insert(*card), "duplicate {}", card);
            }
        }
        let deck: HashSet<Card> = build_deck(kind.ranks()).into_iter().collect();
        prop_assert_eq!(seen, deck);
    }
}
