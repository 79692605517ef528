//! Bot players.

pub mod first_legal;
pub mod random;
pub mod trait_def;

pub use first_legal::FirstLegalPlayer;
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer, BotView, PlayChoice};
