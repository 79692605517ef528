//! Dominoes layout play.
//!
//! A suit opens with its start-rank card; an open suit then grows one rank
//! at a time above its highest card or below its lowest. A seat must place
//! a card whenever it can and passes otherwise. Play ends once three seats
//! have emptied their hands; the fourth takes last place.

use serde::{Deserialize, Serialize};

use crate::domain::hand_order::sort_for_display;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{next_player, require_turn, MatchState, Phase, Seat};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Contiguous cards of one suit on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitRun {
    pub suit: Suit,
    pub low: Rank,
    pub high: Rank,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoLayout {
    pub start_rank: Rank,
    pub runs: Vec<SuitRun>,
}

impl DominoLayout {
    pub fn new(start_rank: Rank) -> Self {
        Self {
            start_rank,
            runs: Vec::with_capacity(Suit::ALL.len()),
        }
    }

    pub fn run(&self, suit: Suit) -> Option<&SuitRun> {
        self.runs.iter().find(|r| r.suit == suit)
    }

    /// Can `card` be placed right now?
    pub fn accepts(&self, card: Card) -> bool {
        match self.run(card.suit) {
            None => card.rank == self.start_rank,
            Some(run) => run.low.pred() == Some(card.rank) || run.high.succ() == Some(card.rank),
        }
    }

    fn place(&mut self, card: Card) -> Result<(), DomainError> {
        if !self.accepts(card) {
            return Err(DomainError::illegal_play(
                ValidationKind::NotPlayableOnLayout,
                format!("{card} does not extend the layout"),
            ));
        }
        match self.runs.iter_mut().find(|r| r.suit == card.suit) {
            None => self.runs.push(SuitRun {
                suit: card.suit,
                low: card.rank,
                high: card.rank,
            }),
            Some(run) if card.rank < run.low => run.low = card.rank,
            Some(run) => run.high = card.rank,
        }
        Ok(())
    }
}

/// Cards from `hand` the layout accepts, in display order.
pub fn layout_moves(hand: &[Card], layout: &DominoLayout) -> Vec<Card> {
    let playable: Vec<Card> = hand.iter().copied().filter(|&c| layout.accepts(c)).collect();
    sort_for_display(&playable)
}

/// What a single dominoes action changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominoPlayResult {
    /// Set when the acting seat emptied its hand with this play.
    pub finished_position: Option<usize>,
    /// All finishing positions are decided.
    pub hand_complete: bool,
}

fn require_layout_turn(state: &MatchState, who: Seat) -> Result<(), DomainError> {
    if state.phase != Phase::Playing || !state.contract.is_some_and(|c| c.is_layout()) {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Not playing a dominoes layout",
        ));
    }
    let turn = require_turn(state, "dominoes")?;
    if turn != who {
        return Err(DomainError::illegal_play(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }
    Ok(())
}

/// Next seat after `from` that still holds cards.
fn next_active(state: &MatchState, from: Seat) -> Option<Seat> {
    let mut seat = from;
    for _ in 0..PLAYERS {
        seat = next_player(seat);
        if !state.hand.finish_order.contains(&seat) {
            return Some(seat);
        }
    }
    None
}

/// Place `card` from `who`'s hand onto the layout.
pub fn play_domino(
    state: &mut MatchState,
    who: Seat,
    card: Card,
) -> Result<DominoPlayResult, DomainError> {
    require_layout_turn(state, who)?;

    let Some(pos) = state.players[who as usize]
        .hand
        .iter()
        .position(|&c| c == card)
    else {
        return Err(DomainError::illegal_play(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    };

    let mut layout = state
        .hand
        .layout
        .clone()
        .ok_or_else(|| DomainError::invariant("dominoes hand without a layout"))?;
    layout.place(card)?;

    state.hand.layout = Some(layout);
    state.players[who as usize].hand.remove(pos);

    let mut result = DominoPlayResult {
        finished_position: None,
        hand_complete: false,
    };

    if state.players[who as usize].hand.is_empty() {
        state.hand.finish_order.push(who);
        result.finished_position = Some(state.hand.finish_order.len());

        if state.hand.finish_order.len() == PLAYERS - 1 {
            // Whoever is left finishes last; their remaining cards are dead.
            if let Some(last) = (0..PLAYERS as Seat).find(|s| !state.hand.finish_order.contains(s))
            {
                state.hand.finish_order.push(last);
            }
            state.turn = None;
            result.hand_complete = true;
            return Ok(result);
        }
    }

    state.turn = next_active(state, who);
    Ok(result)
}

/// Pass the turn; only allowed when no held card fits the layout.
pub fn pass_turn(state: &mut MatchState, who: Seat) -> Result<(), DomainError> {
    require_layout_turn(state, who)?;

    let layout = state
        .hand
        .layout
        .as_ref()
        .ok_or_else(|| DomainError::invariant("dominoes hand without a layout"))?;
    if !layout_moves(&state.players[who as usize].hand, layout).is_empty() {
        return Err(DomainError::illegal_play(
            ValidationKind::MustPlayWhenAble,
            "Cannot pass while holding a playable card",
        ));
    }

    state.turn = next_active(state, who);
    Ok(())
}
