//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Does `a`, played after `b`, take the trick from `b`?
///
/// A trump beats any non-trump; within one suit the higher rank wins; a
/// lead-suit card beats a card that is neither trump nor lead. Anything
/// else leaves `b` winning.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Option<Suit>) -> bool {
    let a_trump = trump == Some(a.suit);
    let b_trump = trump == Some(b.suit);
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    if a.suit == b.suit {
        return a.rank > b.rank;
    }
    // Different suits, neither is trump: only following lead can win.
    a.suit == lead && b.suit != lead
}
