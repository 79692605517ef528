//! Trick play: follow-suit legality and trick resolution.

use crate::domain::dominoes::layout_moves;
use crate::domain::hand_order::sort_for_display;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{next_player, require_contract, require_turn, MatchState, Phase, Seat};
use crate::domain::{card_beats, hand_has_suit, Card, PlayedCard, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether a trick was completed (4 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Every card of the hand has been played.
    pub hand_complete: bool,
}

/// Cards from `hand` that may be added to `trick`, in display order.
///
/// Any card may lead; after that a seat holding the led suit must play it.
/// No contract restricts which card may be played beyond following suit.
pub fn legal_moves(hand: &[Card], trick: &[PlayedCard]) -> Vec<Card> {
    if let Some(lead) = trick.first().map(|p| p.card.suit) {
        if hand_has_suit(hand, lead) {
            let follow: Vec<Card> = hand.iter().copied().filter(|c| c.suit == lead).collect();
            return sort_for_display(&follow);
        }
    }
    sort_for_display(hand)
}

pub fn is_playable(card: Card, hand: &[Card], trick: &[PlayedCard]) -> bool {
    if !hand.contains(&card) {
        return false;
    }
    match trick.first() {
        Some(lead) => card.suit == lead.card.suit || !hand_has_suit(hand, lead.card.suit),
        None => true,
    }
}

/// Winner of a complete trick: highest trump if any trump was played,
/// otherwise highest card of the led suit.
pub fn resolve_trick(
    plays: &[PlayedCard],
    lead: Suit,
    trump: Option<Suit>,
) -> Result<Seat, DomainError> {
    if plays.len() != PLAYERS {
        return Err(DomainError::invariant(format!(
            "resolving a trick with {} plays",
            plays.len()
        )));
    }
    let mut best = plays[0];
    for play in &plays[1..] {
        if card_beats(play.card, best.card, lead, trump) {
            best = *play;
        }
    }
    Ok(best.seat)
}

/// Legal cards for `who` in the current state, whatever kind of hand is being played.
pub fn playable_cards(state: &MatchState, who: Seat) -> Vec<Card> {
    if state.phase != Phase::Playing || who as usize >= PLAYERS {
        return Vec::new();
    }
    let hand = state.hand_of(who);
    match (&state.hand.layout, state.contract) {
        (Some(layout), Some(c)) if c.is_layout() => {
            if state.hand.finish_order.contains(&who) {
                Vec::new()
            } else {
                layout_moves(hand, layout)
            }
        }
        _ => legal_moves(hand, &state.hand.trick),
    }
}

/// Play a card into the current trick, enforcing phase, turn and suit-following.
///
/// Nothing is mutated unless the play is accepted.
pub fn play_card(
    state: &mut MatchState,
    who: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Phase mismatch",
        ));
    }
    let contract = require_contract(state, "play_card")?;
    if contract.is_layout() {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Dominoes is played on the layout, not in tricks",
        ));
    }

    let turn = require_turn(state, "play_card")?;
    if turn != who {
        return Err(DomainError::illegal_play(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }
    if state.hand.trick.len() >= PLAYERS {
        return Err(DomainError::illegal_play(
            ValidationKind::TrickFull,
            "Trick already has four plays",
        ));
    }

    let hand = &state.players[who as usize].hand;
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::illegal_play(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    };
    if !is_playable(card, hand, &state.hand.trick) {
        return Err(DomainError::illegal_play(
            ValidationKind::MustFollowSuit,
            "Must follow suit",
        ));
    }

    // Resolve on a copy first so a failure cannot leave a half-applied trick.
    let mut plays = state.hand.trick.clone();
    plays.push(PlayedCard::new(who, card));
    let winner = if plays.len() == PLAYERS {
        let lead = plays[0].card.suit;
        Some(resolve_trick(&plays, lead, state.trump)?)
    } else {
        None
    };

    if state.hand.trick.is_empty() {
        state.hand.leader = Some(who);
    }
    state.players[who as usize].hand.remove(pos);

    let Some(winner) = winner else {
        state.hand.trick = plays;
        state.turn = Some(next_player(who));
        return Ok(PlayCardResult {
            trick_completed: false,
            trick_winner: None,
            hand_complete: false,
        });
    };

    let hand = &mut state.hand;
    hand.captured[winner as usize].extend(plays.iter().map(|p| p.card));
    hand.tricks_won[winner as usize] += 1;
    hand.trick_winners.push(winner);
    hand.last_trick = Some(plays);
    hand.last_trick_winner = Some(winner);
    hand.trick.clear();

    let hand_complete = state.players.iter().all(|p| p.hand.is_empty());
    if hand_complete {
        state.turn = None;
        state.hand.leader = None;
    } else {
        state.hand.trick_no = state.hand.trick_no.saturating_add(1);
        state.hand.leader = Some(winner);
        state.turn = Some(winner);
    }

    Ok(PlayCardResult {
        trick_completed: true,
        trick_winner: Some(winner),
        hand_complete,
    })
}
