//! Match and engine configuration.

pub mod env;
pub mod match_config;

pub use env::EngineConfig;
pub use match_config::MatchConfig;
