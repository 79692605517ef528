use proptest::prelude::*;

use crate::domain::tricks::resolve_trick;
use crate::domain::{test_gens, test_prelude, Card, PlayedCard, Suit};

/// Independent oracle: highest trump if any was played, otherwise highest
/// card of the led suit.
fn oracle_winner(plays: &[PlayedCard], trump: Option<Suit>) -> PlayedCard {
    let lead = plays[0].card.suit;
    let best_of = |suit: Suit| {
        plays
            .iter()
            .filter(|p| p.card.suit == suit)
            .max_by_key(|p| p.card.rank)
            .copied()
    };
    trump
        .and_then(best_of)
        .or_else(|| best_of(lead))
        .unwrap_or(plays[0])
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_trick_winner_matches_oracle(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let lead = plays[0].card.suit;
        let winner = resolve_trick(&plays, lead, trump).unwrap();
        prop_assert_eq!(winner, oracle_winner(&plays, trump).seat);
    }

    /// Resolution is a pure function of its inputs.
    #[test]
    fn prop_trick_winner_deterministic(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let lead = plays[0].card.suit;
        let a = resolve_trick(&plays, lead, trump).unwrap();
        let b = resolve_trick(&plays, lead, trump).unwrap();
        prop_assert_eq!(a, b);
    }

    /// A winning card is either trump or of the led suit.
    #[test]
    fn prop_off_suit_never_wins(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let lead = plays[0].card.suit;
        let seat = resolve_trick(&plays, lead, trump).unwrap();
        let card = plays.iter().find(|p| p.seat == seat).map(|p| p.card).unwrap();
        prop_assert!(card.suit == lead || Some(card.suit) == trump);
    }
}

fn trick(tokens: [&str; 4]) -> Vec<PlayedCard> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| PlayedCard::new(i as u8, t.parse::<Card>().unwrap()))
        .collect()
}

#[test]
fn trump_dominates_lead_suit() {
    let plays = trick(["7S", "AD", "KS", "QS"]);
    assert_eq!(resolve_trick(&plays, Suit::Spades, Some(Suit::Diamonds)).unwrap(), 1);
}

#[test]
fn no_trump_takes_highest_of_lead() {
    let plays = trick(["9H", "KC", "AH", "2H"]);
    assert_eq!(resolve_trick(&plays, Suit::Hearts, None).unwrap(), 2);
}
