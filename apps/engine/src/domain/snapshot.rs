//! Read-only view of a match for hosts and renderers.

use serde::{Deserialize, Serialize};

use crate::domain::contracts::Contract;
use crate::domain::dominoes::SuitRun;
use crate::domain::hand_order::sort_for_display;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{HandSummary, MatchState, Phase, Seat};
use crate::domain::tricks::playable_cards;
use crate::domain::{Card, PlayedCard, Suit};

/// Public info about a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub name: String,
    pub is_bot: bool,
    pub cards_held: usize,
}

/// Match-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHeader {
    pub round_no: u8,
    pub total_hands: u8,
    pub declarer: Seat,
    pub dealer: Seat,
    pub seating: [SeatPublic; PLAYERS],
    pub scores: [i32; PLAYERS],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub header: MatchHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    AwaitingContractPool,
    ChooseContract(ChooseContractSnapshot),
    ChooseTrump(ChooseTrumpSnapshot),
    Trick(TrickSnapshot),
    Dominoes(DominoesSnapshot),
    HandScored(HandSummary),
    MatchComplete { winners: Vec<Seat> },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooseContractSnapshot {
    pub to_act: Seat,
    pub available: Vec<Contract>,
    /// Declarer's hand, so the choice can be made with the cards in view.
    pub hand: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooseTrumpSnapshot {
    pub to_act: Seat,
    pub contract: Contract,
    pub hand: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickSnapshot {
    pub contract: Contract,
    pub trump: Option<Suit>,
    pub trick_no: u8,
    pub leader: Option<Seat>,
    pub current_trick: Vec<PlayedCard>,
    pub to_act: Option<Seat>,
    pub playable: Vec<Card>,
    pub tricks_won: [u8; PLAYERS],
    /// Last completed trick for display purposes.
    pub last_trick: Option<Vec<PlayedCard>>,
    pub last_trick_winner: Option<Seat>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoesSnapshot {
    pub runs: Vec<SuitRun>,
    pub finish_order: Vec<Seat>,
    pub to_act: Option<Seat>,
    /// Empty when the seat to act must pass.
    pub playable: Vec<Card>,
}

/// Produce a snapshot of the current match state. Never panics.
pub fn snapshot(state: &MatchState) -> MatchSnapshot {
    let seating = std::array::from_fn(|i| {
        let p = &state.players[i];
        SeatPublic {
            seat: p.id,
            name: p.name.clone(),
            is_bot: p.is_bot,
            cards_held: p.hand.len(),
        }
    });
    let header = MatchHeader {
        round_no: state.round_no,
        total_hands: state.total_hands,
        declarer: state.declarer,
        dealer: state.dealer,
        seating,
        scores: state.scores(),
    };

    let phase = match state.phase {
        Phase::AwaitingContractPool => PhaseSnapshot::AwaitingContractPool,
        Phase::AwaitingContract => PhaseSnapshot::ChooseContract(ChooseContractSnapshot {
            to_act: state.declarer,
            available: state.remaining[state.declarer as usize].clone(),
            hand: sort_for_display(state.hand_of(state.declarer)),
        }),
        Phase::AwaitingTrump => match state.contract {
            Some(contract) => PhaseSnapshot::ChooseTrump(ChooseTrumpSnapshot {
                to_act: state.declarer,
                contract,
                hand: sort_for_display(state.hand_of(state.declarer)),
            }),
            None => PhaseSnapshot::AwaitingContractPool,
        },
        Phase::Playing => snapshot_playing(state),
        Phase::HandScored => match state.history.last() {
            Some(summary) => PhaseSnapshot::HandScored(summary.clone()),
            None => snapshot_playing(state),
        },
        Phase::MatchComplete => PhaseSnapshot::MatchComplete {
            winners: winners(state),
        },
    };

    MatchSnapshot { header, phase }
}

fn snapshot_playing(state: &MatchState) -> PhaseSnapshot {
    let to_act = state.turn;
    let playable = to_act
        .map(|seat| playable_cards(state, seat))
        .unwrap_or_default();

    if let Some(layout) = state.hand.layout.as_ref() {
        return PhaseSnapshot::Dominoes(DominoesSnapshot {
            runs: layout.runs.clone(),
            finish_order: state.hand.finish_order.clone(),
            to_act,
            playable,
        });
    }

    PhaseSnapshot::Trick(TrickSnapshot {
        contract: state.contract.unwrap_or(Contract::NoTricks),
        trump: state.trump,
        trick_no: state.hand.trick_no,
        leader: state.hand.leader,
        current_trick: state.hand.trick.clone(),
        to_act,
        playable,
        tricks_won: state.hand.tricks_won,
        last_trick: state.hand.last_trick.clone(),
        last_trick_winner: state.hand.last_trick_winner,
    })
}

/// Seats sharing the highest cumulative score.
pub fn winners(state: &MatchState) -> Vec<Seat> {
    let scores = state.scores();
    let Some(best) = scores.iter().copied().max() else {
        return Vec::new();
    };
    (0..PLAYERS as Seat)
        .filter(|&s| scores[s as usize] == best)
        .collect()
}
