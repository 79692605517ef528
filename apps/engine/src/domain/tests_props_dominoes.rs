//! Layout play always terminates with a full finish order.

use proptest::prelude::*;

use crate::config::MatchConfig;
use crate::domain::dominoes::{pass_turn, play_domino, DominoLayout};
use crate::domain::rules::{DEFAULT_DOMINOES_START_RANK, PLAYERS};
use crate::domain::state::{MatchState, Phase, Seat};
use crate::domain::tricks::playable_cards;
use crate::domain::{deal_hands, test_gens, test_prelude, Card, Contract};

fn dominoes_state(hands: [Vec<Card>; PLAYERS], first: Seat) -> MatchState {
    let mut state = MatchState::new(MatchConfig::default());
    for (player, hand) in state.players.iter_mut().zip(hands) {
        player.hand = hand;
    }
    state.phase = Phase::Playing;
    state.contract = Some(Contract::Dominoes);
    state.hand.layout = Some(DominoLayout::new(DEFAULT_DOMINOES_START_RANK));
    state.turn = Some(first);
    state
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_layout_never_stalls(
        kind in test_gens::deck_kind(),
        seed in any::<u64>(),
        first in test_gens::seat(),
    ) {
        let hands = deal_hands(kind, seed).unwrap();
        let mut state = dominoes_state(hands, first);
        let mut consecutive_passes = 0;

        while let Some(seat) = state.turn {
            match playable_cards(&state, seat).first() {
                Some(&card) => {
                    play_domino(&mut state, seat, card).unwrap();
                    consecutive_passes = 0;
                }
                None => {
                    pass_turn(&mut state, seat).unwrap();
                    consecutive_passes += 1;
                    prop_assert!(consecutive_passes < PLAYERS, "every seat passed in a row");
                }
            }
        }

        prop_assert_eq!(state.hand.finish_order.len(), PLAYERS);
        let mut order = state.hand.finish_order.clone();
        order.sort_unstable();
        prop_assert_eq!(order, vec![0, 1, 2, 3]);
        prop_assert!(state.hand_is_over());
    }
}

#[test]
fn pass_is_refused_while_holding_a_playable_card() {
    let hands = [
        vec!["JS".parse().unwrap()],
        vec!["QS".parse().unwrap()],
        vec!["9S".parse().unwrap()],
        vec!["AS".parse().unwrap()],
    ];
    let mut state = dominoes_state(hands, 0);
    let err = pass_turn(&mut state, 0).unwrap_err();
    assert_eq!(
        err.kind(),
        Some(&crate::errors::domain::ValidationKind::MustPlayWhenAble)
    );
}

#[test]
fn three_finishers_close_the_hand() {
    let parse = |t: &str| -> Card { t.parse().unwrap() };
    let hands = [
        vec![parse("JS")],
        vec![parse("QS")],
        vec![parse("TS")],
        vec![parse("AS"), parse("7S")],
    ];
    let mut state = dominoes_state(hands, 0);

    assert_eq!(play_domino(&mut state, 0, parse("JS")).unwrap().finished_position, Some(1));
    assert_eq!(play_domino(&mut state, 1, parse("QS")).unwrap().finished_position, Some(2));
    let result = play_domino(&mut state, 2, parse("TS")).unwrap();
    assert_eq!(result.finished_position, Some(3));
    assert!(result.hand_complete);
    assert_eq!(state.hand.finish_order, vec![0, 1, 2, 3]);
    assert_eq!(state.turn, None);
}

#[test]
fn finished_seats_are_skipped() {
    let parse = |t: &str| -> Card { t.parse().unwrap() };
    let hands = [
        vec![parse("JS")],
        vec![parse("7D")],
        vec![parse("QS"), parse("KS")],
        vec![parse("TS"), parse("AS")],
    ];
    let mut state = dominoes_state(hands, 0);

    play_domino(&mut state, 0, parse("JS")).unwrap();
    pass_turn(&mut state, 1).unwrap();
    play_domino(&mut state, 2, parse("QS")).unwrap();
    play_domino(&mut state, 3, parse("TS")).unwrap();
    // seat 0 is out, so seat 1 follows seat 3
    assert_eq!(state.turn, Some(1));
}
