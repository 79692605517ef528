//! Domain-level error type used by the rules engine and the match flow.
//!
//! The engine never panics on player input. Rejected events surface as
//! [`DomainError::IllegalPlay`] or [`DomainError::Validation`] and leave the
//! match state untouched; [`DomainError::InvariantViolation`] means the
//! orchestrator itself is inconsistent.

use thiserror::Error;

/// Specific reason an event was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    OutOfTurn,
    CardNotInHand,
    MustFollowSuit,
    NotPlayableOnLayout,
    MustPlayWhenAble,
    TrickFull,
    PhaseMismatch,
    ContractUnavailable,
    EmptyContractPool,
    DuplicateContract,
    TrumpRequired,
    ParseCard,
    InvalidPlayerCount,
    InvalidConfig,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A play or pass that the rules forbid; the caller may re-prompt.
    #[error("illegal play ({kind:?}): {detail}")]
    IllegalPlay { kind: ValidationKind, detail: String },
    /// Any other rejected event or malformed input.
    #[error("validation error ({kind:?}): {detail}")]
    Validation { kind: ValidationKind, detail: String },
    /// Internal inconsistency; indicates an engine bug, not bad input.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    /// Contract with no scoring rule, or an unrecognised contract name.
    #[error("unknown contract: {0}")]
    UnknownContract(String),
}

impl DomainError {
    pub fn illegal_play(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::IllegalPlay {
            kind,
            detail: detail.into(),
        }
    }

    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::InvariantViolation(detail.into())
    }

    pub fn unknown_contract(detail: impl Into<String>) -> Self {
        Self::UnknownContract(detail.into())
    }

    /// The rejection kind, if this error carries one.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            Self::IllegalPlay { kind, .. } | Self::Validation { kind, .. } => Some(kind),
            Self::InvariantViolation(_) | Self::UnknownContract(_) => None,
        }
    }

    /// True for rejections caused by player input (recoverable by re-prompting).
    pub fn is_player_error(&self) -> bool {
        matches!(self, Self::IllegalPlay { .. } | Self::Validation { .. })
    }
}
