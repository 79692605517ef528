//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod contracts;
pub mod dealing;
pub mod dominoes;
pub mod hand_order;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_dealing;
#[cfg(test)]
mod tests_props_dominoes;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, PlayedCard, Rank, Suit};
pub use contracts::Contract;
pub use dealing::{deal_hands, DeckKind};
pub use rules::Ruleset;
pub use seed_derivation::derive_dealing_seed;
pub use state::{MatchState, Phase, Seat};
