use super::trait_def::{AiError, AiPlayer, BotView, PlayChoice};
use crate::domain::{Contract, Suit};

/// Deterministic bot: always the first option in display order.
///
/// Picks the first remaining contract, the first suit (spades, hearts,
/// diamonds, clubs) it holds as trump, and the first legal card, passing
/// only when the layout leaves it nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalPlayer;

impl FirstLegalPlayer {
    pub const NAME: &'static str = "FirstLegalPlayer";
}

impl AiPlayer for FirstLegalPlayer {
    fn choose_contract(&self, view: &BotView<'_>) -> Result<Contract, AiError> {
        view.available_contracts
            .first()
            .copied()
            .ok_or_else(|| AiError::NoLegalChoice(format!("seat {} has no contracts left", view.seat)))
    }

    fn choose_trump(&self, view: &BotView<'_>) -> Result<Suit, AiError> {
        // Hand is in display order, so its first card's suit is the first held suit.
        Ok(view.hand.first().map_or(Suit::Spades, |c| c.suit))
    }

    fn choose_play(&self, view: &BotView<'_>) -> Result<PlayChoice, AiError> {
        match view.playable.first() {
            Some(&card) => Ok(PlayChoice::Play(card)),
            None if view.contract.is_some_and(|c| c.is_layout()) => Ok(PlayChoice::Pass),
            None => Err(AiError::NoLegalChoice(format!(
                "seat {} has no legal card",
                view.seat
            ))),
        }
    }
}
