//! Seeded random bot; picks uniformly among legal options.

use std::sync::Mutex;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use super::trait_def::{AiError, AiPlayer, BotView, PlayChoice};
use crate::domain::{Contract, Suit};

pub struct RandomPlayer {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";

    /// `None` seeds from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick<T: Copy>(&self, options: &[T]) -> Result<Option<T>, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("rng lock poisoned: {e}")))?;
        Ok(options.choose(&mut *rng).copied())
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_contract(&self, view: &BotView<'_>) -> Result<Contract, AiError> {
        self.pick(view.available_contracts)?
            .ok_or_else(|| AiError::NoLegalChoice(format!("seat {} has no contracts left", view.seat)))
    }

    fn choose_trump(&self, _view: &BotView<'_>) -> Result<Suit, AiError> {
        let suits = Suit::ALL;
        Ok(self.pick(&suits)?.unwrap_or(Suit::Spades))
    }

    fn choose_play(&self, view: &BotView<'_>) -> Result<PlayChoice, AiError> {
        match self.pick(&view.playable)? {
            Some(card) => Ok(PlayChoice::Play(card)),
            None if view.contract.is_some_and(|c| c.is_layout()) => Ok(PlayChoice::Pass),
            None => Err(AiError::NoLegalChoice(format!(
                "seat {} has no legal card",
                view.seat
            ))),
        }
    }
}
