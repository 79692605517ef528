// Proptest generators for domain types.
// Cards are drawn without replacement so generated hands never overlap.

use proptest::prelude::*;

use crate::domain::dealing::{build_deck, DeckKind};
use crate::domain::state::Seat;
use crate::domain::{Card, PlayedCard, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Trump suit or no trump.
pub fn trump() -> impl Strategy<Value = Option<Suit>> {
    prop::option::of(suit())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::DESCENDING.to_vec())
}

pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

pub fn deck_kind() -> impl Strategy<Value = DeckKind> {
    prop_oneof![Just(DeckKind::Short32), Just(DeckKind::Full52)]
}

/// `count` distinct cards from the full 52-card deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = build_deck(DeckKind::Full52.ranks());
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max_count).prop_flat_map(unique_cards)
}

/// Hand with no card of `excluded_suit`.
pub fn hand_without_suit(excluded_suit: Suit) -> impl Strategy<Value = Vec<Card>> {
    unique_cards_up_to(13).prop_map(move |cards| {
        cards
            .into_iter()
            .filter(|c| c.suit != excluded_suit)
            .collect()
    })
}

/// Four plays in seat order starting at a random leader.
pub fn complete_trick() -> impl Strategy<Value = Vec<PlayedCard>> {
    (seat(), unique_cards(4)).prop_map(|(leader, cards)| {
        cards
            .iter()
            .enumerate()
            .map(|(i, &card)| PlayedCard::new((leader + i as u8) % 4, card))
            .collect()
    })
}
