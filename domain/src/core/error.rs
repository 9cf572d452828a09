//! Domain error types

use crate::session::status::{SessionAction, SessionStatus};
use thiserror::Error;

/// Broad classification of a [`DomainError`].
///
/// Outer layers map failures on this instead of matching message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input from the caller; resubmitting corrected input recovers.
    Validation,
    /// Operation attempted out of order for the session lifecycle.
    Sequencing,
    /// A strategy reached a state its inputs should have made impossible.
    LogicConflict,
    /// Unknown session or round.
    NotFound,
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Candidate validation failed: {0}")]
    CandidateValidation(String),

    #[error("Vote validation failed: {0}")]
    VoteValidation(String),

    #[error("First round must have provided candidates or strategy default options")]
    NoInitialCandidates,

    #[error("Invalid session configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid session status. Expected: {expected}, but got: {actual}")]
    SessionStatus {
        expected: SessionStatus,
        actual: SessionStatus,
    },

    #[error("Invalid state transition attempted from \"{status}\" via \"{action}\"")]
    InvalidStateTransition {
        status: SessionStatus,
        action: SessionAction,
    },

    #[error("Logic conflict: {0}")]
    LogicConflict(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl DomainError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::CandidateValidation(_)
            | DomainError::VoteValidation(_)
            | DomainError::NoInitialCandidates
            | DomainError::InvalidConfiguration(_) => ErrorKind::Validation,
            DomainError::SessionStatus { .. } | DomainError::InvalidStateTransition { .. } => {
                ErrorKind::Sequencing
            }
            DomainError::LogicConflict(_) => ErrorKind::LogicConflict,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    pub fn candidates(message: impl Into<String>) -> Self {
        DomainError::CandidateValidation(message.into())
    }

    pub fn votes(message: impl Into<String>) -> Self {
        DomainError::VoteValidation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::LogicConflict(message.into())
    }

    pub fn session_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity: "Session",
            id: id.into(),
        }
    }

    pub fn round_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity: "Round",
            id: id.into(),
        }
    }

    /// Check if this error is the caller's fault and can be fixed by resubmitting
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}
