//! AI player trait definition.

use thiserror::Error;

use crate::domain::hand_order::sort_for_display;
use crate::domain::state::{MatchState, Seat};
use crate::domain::tricks::playable_cards;
use crate::domain::{Card, Contract, PlayedCard, Suit};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// Asked to decide with nothing to choose from.
    #[error("AI has no legal choice: {0}")]
    NoLegalChoice(String),
    #[error("AI internal error: {0}")]
    Internal(String),
    /// The engine rejected what the AI chose.
    #[error("AI invalid move: {0}")]
    InvalidMove(#[from] DomainError),
}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::InvalidMove(inner) => inner,
            other => DomainError::invariant(format!("bot failed: {other}")),
        }
    }
}

/// A bot's decision for its turn in the playing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayChoice {
    Play(Card),
    /// Dominoes only, when no card fits the layout.
    Pass,
}

/// What one seat can see when it is asked to act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotView<'a> {
    pub seat: Seat,
    /// Own hand in display order.
    pub hand: Vec<Card>,
    /// Contracts this seat may still declare.
    pub available_contracts: &'a [Contract],
    pub contract: Option<Contract>,
    pub trump: Option<Suit>,
    pub current_trick: &'a [PlayedCard],
    /// Legal cards in display order; empty means the seat must pass.
    pub playable: Vec<Card>,
}

impl<'a> BotView<'a> {
    pub fn for_seat(state: &'a MatchState, seat: Seat) -> Self {
        Self {
            seat,
            hand: sort_for_display(state.hand_of(seat)),
            available_contracts: &state.remaining[seat as usize],
            contract: state.contract,
            trump: state.trump,
            current_trick: &state.hand.trick,
            playable: playable_cards(state, seat),
        }
    }
}

/// Decision-making for a computer-controlled seat.
///
/// Implementations only pick; the match flow validates and applies the choice.
pub trait AiPlayer: Send + Sync {
    fn choose_contract(&self, view: &BotView<'_>) -> Result<Contract, AiError>;

    fn choose_trump(&self, view: &BotView<'_>) -> Result<Suit, AiError>;

    fn choose_play(&self, view: &BotView<'_>) -> Result<PlayChoice, AiError>;
}
