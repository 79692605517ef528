//! Display ordering for a hand: spades, hearts, diamonds, clubs, each suit
//! high to low. Never consulted by legality or scoring.

use std::cmp::Reverse;

use super::cards_types::Card;

/// Sort key used by [`sort_for_display`].
pub fn display_key(card: &Card) -> (u8, Reverse<u8>) {
    (card.suit.display_index(), Reverse(card.rank.value()))
}

pub fn sort_for_display(hand: &[Card]) -> Vec<Card> {
    let mut sorted = hand.to_vec();
    sorted.sort_by_key(display_key);
    sorted
}
