use tracing::debug;

use super::round_lifecycle::{expect_phase, score_hand};
use crate::domain::dominoes::{pass_turn, play_domino, DominoLayout};
use crate::domain::state::{HandSummary, MatchState, Phase, Seat};
use crate::domain::tricks::{play_card, PlayCardResult};
use crate::domain::{Card, Contract, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a card play (or pass) led to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct PlayOutcome {
    pub trick_winner: Option<Seat>,
    pub hand_scored: Option<HandSummary>,
}

fn require_declarer(state: &MatchState, seat: Seat) -> Result<(), DomainError> {
    if seat != state.declarer {
        return Err(DomainError::illegal_play(
            ValidationKind::OutOfTurn,
            format!("seat {seat} is not the declarer (seat {})", state.declarer),
        ));
    }
    Ok(())
}

pub(super) fn choose_contract(
    state: &mut MatchState,
    seat: Seat,
    contract: Contract,
) -> Result<(), DomainError> {
    expect_phase(state, Phase::AwaitingContract, "choose_contract")?;
    require_declarer(state, seat)?;

    let remaining = &mut state.remaining[seat as usize];
    let Some(pos) = remaining.iter().position(|&c| c == contract) else {
        return Err(DomainError::validation(
            ValidationKind::ContractUnavailable,
            format!("{contract} is not available to seat {seat}"),
        ));
    };
    remaining.remove(pos);
    state.contract = Some(contract);
    debug!(round_no = state.round_no, seat, %contract, "Contract chosen");

    if contract.requires_trump() {
        state.phase = Phase::AwaitingTrump;
        debug!(round_no = state.round_no, "Transition: AwaitingContract -> AwaitingTrump");
        Ok(())
    } else {
        start_play(state);
        Ok(())
    }
}

pub(super) fn choose_trump(
    state: &mut MatchState,
    seat: Seat,
    suit: Suit,
) -> Result<(), DomainError> {
    expect_phase(state, Phase::AwaitingTrump, "choose_trump")?;
    require_declarer(state, seat)?;

    state.trump = Some(suit);
    debug!(round_no = state.round_no, seat, trump = ?suit, "Trump chosen");
    start_play(state);
    Ok(())
}

/// The declarer leads the first trick, or opens the dominoes layout.
fn start_play(state: &mut MatchState) {
    if state.contract.is_some_and(|c| c.is_layout()) {
        state.hand.layout = Some(DominoLayout::new(state.config.dominoes_start_rank));
    }
    state.turn = Some(state.declarer);
    state.phase = Phase::Playing;
    debug!(round_no = state.round_no, leader = state.declarer, "Transition: -> Playing");
}

pub(super) fn play(
    state: &mut MatchState,
    seat: Seat,
    card: Card,
) -> Result<PlayOutcome, DomainError> {
    let layout = state.contract.is_some_and(|c| c.is_layout());
    let (trick_winner, hand_complete) = if layout {
        let result = play_domino(state, seat, card)?;
        if let Some(position) = result.finished_position {
            debug!(round_no = state.round_no, seat, position, "Seat went out");
        }
        (None, result.hand_complete)
    } else {
        let PlayCardResult {
            trick_winner,
            hand_complete,
            ..
        } = play_card(state, seat, card)?;
        (trick_winner, hand_complete)
    };
    debug!(round_no = state.round_no, seat, %card, "Card played");
    if let Some(winner) = trick_winner {
        debug!(
            round_no = state.round_no,
            trick_no = state.hand.trick_winners.len(),
            winner,
            "Trick won"
        );
    }

    let hand_scored = if hand_complete {
        Some(score_hand(state)?)
    } else {
        None
    };
    Ok(PlayOutcome {
        trick_winner,
        hand_scored,
    })
}

pub(super) fn pass(state: &mut MatchState, seat: Seat) -> Result<(), DomainError> {
    pass_turn(state, seat)?;
    debug!(round_no = state.round_no, seat, next = ?state.turn, "Passed");
    Ok(())
}
