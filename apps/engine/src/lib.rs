#![deny(clippy::wildcard_imports)]

//! Rules engine for Taffaran, a four-player trick-taking card game played as
//! a series of contracts.

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod persistence;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use ai::{AiPlayer, FirstLegalPlayer, RandomPlayer};
pub use config::{EngineConfig, MatchConfig};
pub use domain::snapshot::{MatchSnapshot, PhaseSnapshot};
pub use domain::state::{HandSummary, MatchState, Phase, Seat};
pub use domain::{Card, Contract, DeckKind, Rank, Ruleset, Suit};
pub use errors::{DomainError, ValidationKind};
pub use persistence::{PersistenceError, SaveStore};
pub use services::match_flow::{Event, FollowUp, MatchFlow, Transition};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
