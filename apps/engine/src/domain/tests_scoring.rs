//! Hand scoring applied to a full match state.

use crate::config::MatchConfig;
use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::dominoes::DominoLayout;
use crate::domain::rules::DEFAULT_DOMINOES_START_RANK;
use crate::domain::scoring::apply_hand_scoring;
use crate::domain::state::{MatchState, Phase};
use crate::domain::{Contract, Ruleset, Suit};
use crate::errors::domain::DomainError;

fn finished_hand(contract: Contract) -> MatchState {
    let mut state = MatchState::new(MatchConfig::default());
    state.phase = Phase::Playing;
    state.round_no = 1;
    state.total_hands = 28;
    state.contract = Some(contract);
    state
}

#[test]
fn no_king_charges_only_the_taker() {
    let mut state = finished_hand(Contract::NoKing);
    state.hand.captured[2] = try_parse_cards(["KH", "7S", "8S", "9S"]).unwrap();
    state.hand.captured[0] = try_parse_cards(["AH", "QH", "JH", "TH"]).unwrap();
    state.hand.tricks_won = [1, 0, 1, 0];
    state.hand.trick_winners = vec![0, 2];

    let summary = apply_hand_scoring(&mut state).unwrap();
    assert_eq!(summary.deltas, [0, 0, -80, 0]);
    assert_eq!(state.scores(), [0, 0, -80, 0]);
    assert_eq!(state.phase, Phase::HandScored);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn no_tricks_three_tricks_is_minus_six() {
    let mut state = finished_hand(Contract::NoTricks);
    state.hand.tricks_won = [3, 2, 2, 1];
    let summary = apply_hand_scoring(&mut state).unwrap();
    assert_eq!(summary.deltas, [-6, -4, -4, -2]);
}

#[test]
fn no_last_two_uses_trick_winner_history() {
    let mut state = finished_hand(Contract::NoLastTwo);
    state.hand.trick_winners = vec![0, 1, 2, 3, 0, 1, 3, 2];
    let summary = apply_hand_scoring(&mut state).unwrap();
    assert_eq!(summary.deltas, [0, 0, -20, -10]);
}

#[test]
fn trumps_rewards_tricks() {
    let mut state = finished_hand(Contract::Trumps);
    state.trump = Some(Suit::Hearts);
    state.hand.tricks_won = [4, 2, 1, 1];
    let summary = apply_hand_scoring(&mut state).unwrap();
    assert_eq!(summary.deltas, [20, 10, 5, 5]);
    assert_eq!(summary.trump, Some(Suit::Hearts));
}

#[test]
fn dominoes_scores_by_finish_order() {
    let mut state = finished_hand(Contract::Dominoes);
    state.hand.layout = Some(DominoLayout::new(DEFAULT_DOMINOES_START_RANK));
    state.hand.finish_order = vec![2, 0, 3, 1];
    let summary = apply_hand_scoring(&mut state).unwrap();
    assert_eq!(summary.deltas, [20, -5, 45, 5]);
    assert_eq!(summary.finish_order, vec![2, 0, 3, 1]);
}

#[test]
fn unfinished_hand_is_not_scored() {
    let mut state = finished_hand(Contract::NoHearts);
    state.players[1].hand = try_parse_cards(["7H"]).unwrap();
    assert!(apply_hand_scoring(&mut state).is_err());
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn missing_rule_leaves_totals_untouched() {
    let mut config = MatchConfig::default();
    config.ruleset = Ruleset::classic();
    config.ruleset.contracts.retain(|e| e.contract != Contract::NoQueens);
    let mut state = MatchState::new(config);
    state.phase = Phase::Playing;
    state.contract = Some(Contract::NoQueens);
    state.players[0].score = 12;

    let before = state.clone();
    let err = apply_hand_scoring(&mut state).unwrap_err();
    assert!(matches!(err, DomainError::UnknownContract(_)));
    assert_eq!(state, before);
}

#[test]
fn reduced_ruleset_changes_hearts() {
    let mut config = MatchConfig::default();
    config.ruleset = Ruleset::reduced();
    let mut state = MatchState::new(config);
    state.phase = Phase::Playing;
    state.contract = Some(Contract::NoHearts);
    state.hand.captured[3] = try_parse_cards(["AH", "7H", "KC", "8D"]).unwrap();

    let summary = apply_hand_scoring(&mut state).unwrap();
    assert_eq!(summary.deltas, [0, 0, 0, -10]);
}
