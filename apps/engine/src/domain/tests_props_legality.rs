/// Property-based tests for follow-suit legality rules
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::tricks::{is_playable, legal_moves};
use crate::domain::{test_gens, test_prelude, Card, PlayedCard};

fn lead_with(card: Card) -> Vec<PlayedCard> {
    vec![PlayedCard::new(0, card)]
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Holding the led suit: exactly the cards of that suit are legal.
    #[test]
    fn prop_follow_suit_legality(
        cards in test_gens::unique_cards(14),
    ) {
        let led = cards[0];
        let hand: Vec<Card> = cards[1..].to_vec();
        let trick = lead_with(led);

        let legal = legal_moves(&hand, &trick);
        let holds_lead = hand.iter().any(|c| c.suit == led.suit);

        if holds_lead {
            for card in &legal {
                prop_assert_eq!(card.suit, led.suit);
            }
            let lead_count = hand.iter().filter(|c| c.suit == led.suit).count();
            prop_assert_eq!(legal.len(), lead_count);
        } else {
            prop_assert_eq!(legal.len(), hand.len());
        }
    }

    /// Void in the led suit: the whole hand is legal.
    #[test]
    fn prop_follow_suit_when_void(
        (lead_suit, hand) in test_gens::suit().prop_flat_map(|s| {
            (Just(s), test_gens::hand_without_suit(s))
        }),
        rank in test_gens::rank(),
    ) {
        let trick = lead_with(Card::new(lead_suit, rank));
        let legal: HashSet<Card> = legal_moves(&hand, &trick).into_iter().collect();
        let expected: HashSet<Card> = hand.iter().copied().collect();
        prop_assert_eq!(legal, expected);
    }

    /// `legal_moves` and `is_playable` agree on every card of the deck.
    #[test]
    fn prop_legal_moves_match_is_playable(
        hand in test_gens::unique_cards_up_to(13),
        lead in prop::option::of(test_gens::unique_cards(1)),
    ) {
        let trick = match lead {
            Some(c) if !hand.contains(&c[0]) => lead_with(c[0]),
            _ => Vec::new(),
        };
        let legal = legal_moves(&hand, &trick);
        for card in crate::domain::dealing::build_deck(crate::domain::DeckKind::Full52.ranks()) {
            prop_assert_eq!(legal.contains(&card), is_playable(card, &hand, &trick));
        }
    }

    /// Leading is unrestricted and never empty for a non-empty hand.
    #[test]
    fn prop_any_card_may_lead(hand in test_gens::unique_cards_up_to(13)) {
        let legal = legal_moves(&hand, &[]);
        prop_assert_eq!(legal.len(), hand.len());
    }
}

#[test]
fn no_hearts_does_not_forbid_a_heart() {
    use crate::domain::cards_parsing::try_parse_cards;

    let hand = try_parse_cards(["AH", "7C"]).unwrap();
    assert!(is_playable("AH".parse().unwrap(), &hand, &[]));
    let trick = lead_with("8S".parse().unwrap());
    assert!(is_playable("AH".parse().unwrap(), &hand, &trick));
}
