use std::collections::HashSet;

use tracing::{debug, info};

use crate::domain::dealing::deal_hands;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::apply_hand_scoring;
use crate::domain::state::{
    declarer_for_round, prev_player, HandState, HandSummary, MatchState, Phase,
};
use crate::domain::{derive_dealing_seed, Contract};
use crate::errors::domain::{DomainError, ValidationKind};

pub(super) fn expect_phase(
    state: &MatchState,
    expected: Phase,
    action: &str,
) -> Result<(), DomainError> {
    if state.phase != expected {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("{action} needs phase {expected:?}, match is in {:?}", state.phase),
        ));
    }
    Ok(())
}

/// Fix the contracts for the match and deal the first hand.
pub(super) fn select_contract_pool(
    state: &mut MatchState,
    contracts: &[Contract],
) -> Result<(), DomainError> {
    expect_phase(state, Phase::AwaitingContractPool, "select_contract_pool")?;
    if contracts.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyContractPool,
            "Select at least one contract",
        ));
    }
    let mut seen = HashSet::new();
    for &contract in contracts {
        if !seen.insert(contract) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateContract,
                format!("{contract} selected twice"),
            ));
        }
        // Fail now rather than at the end of a hand.
        state.config.ruleset.checked_rule_for(contract)?;
    }
    state.config.validate()?;

    let hands = contracts.len() * PLAYERS;
    state.total_hands = u8::try_from(hands)
        .map_err(|_| DomainError::invariant(format!("{hands} hands do not fit a round counter")))?;
    state.contract_pool = contracts.to_vec();
    state.remaining = std::array::from_fn(|_| contracts.to_vec());
    state.round_no = 1;

    info!(
        contracts = ?state.contract_pool,
        total_hands = state.total_hands,
        ruleset = %state.config.ruleset.name,
        "Contract pool selected"
    );
    deal_hand(state)
}

/// Deal the hand for `state.round_no` and wait for the declarer's contract.
pub(super) fn deal_hand(state: &mut MatchState) -> Result<(), DomainError> {
    let round_no = state.round_no;
    let declarer = declarer_for_round(state.config.first_declarer, round_no);
    let dealer = prev_player(declarer);
    let seed = derive_dealing_seed(state.config.seed, round_no);
    let hands = deal_hands(state.config.deck, seed)?;

    for (player, hand) in state.players.iter_mut().zip(hands) {
        player.hand = hand;
        player.is_declarer = player.id == declarer;
        player.is_dealer = player.id == dealer;
    }
    state.declarer = declarer;
    state.dealer = dealer;
    state.hand = HandState::empty();
    state.contract = None;
    state.trump = None;
    state.turn = None;
    state.phase = Phase::AwaitingContract;

    info!(round_no, declarer, dealer, "Hand dealt");
    debug!(round_no, "Transition: -> AwaitingContract");
    Ok(())
}

/// Score the finished hand.
pub(super) fn score_hand(state: &mut MatchState) -> Result<HandSummary, DomainError> {
    let summary = apply_hand_scoring(state)?;
    info!(
        round_no = summary.round_no,
        contract = %summary.contract,
        deltas = ?summary.deltas,
        scores = ?state.scores(),
        "Hand scored"
    );
    Ok(summary)
}

/// Leave `HandScored`: deal the next hand or finish the match.
pub(super) fn advance_hand(state: &mut MatchState) -> Result<(), DomainError> {
    expect_phase(state, Phase::HandScored, "advance_hand")?;

    if state.round_no >= state.total_hands {
        state.phase = Phase::MatchComplete;
        state.turn = None;
        for player in state.players.iter_mut() {
            player.hand.clear();
        }
        info!(hands_played = state.round_no, scores = ?state.scores(), "Match complete");
        debug!("Transition: HandScored -> MatchComplete");
        return Ok(());
    }

    state.round_no += 1;
    debug!(round_no = state.round_no, "Transition: HandScored -> next hand");
    deal_hand(state)
}
