//! Session lifecycle state machine
//!
//! ```text
//!   draft ──start_session──▶ awaiting_moderator ──finalize_session──▶ complete
//!                               │        ▲
//!                  advance_round│        │submit_votes
//!                               ▼        │
//!                             awaiting_votes
//! ```
//!
//! The only cycle is `awaiting_moderator ⇄ awaiting_votes`, one lap per round.

use super::status::{SessionAction, SessionStatus};
use crate::core::error::DomainError;

/// Pure lookup table of legal `(status, action) → next status` transitions
pub struct SessionStateMachine;

impl SessionStateMachine {
    /// Look up the next status. `None` means there is no legal transition.
    pub fn get_next_state(current: SessionStatus, action: SessionAction) -> Option<SessionStatus> {
        use SessionAction::*;
        use SessionStatus::*;

        match (current, action) {
            (Draft, StartSession) => Some(AwaitingModerator),
            (AwaitingModerator, AdvanceRound) => Some(AwaitingVotes),
            (AwaitingModerator, FinalizeSession) => Some(Complete),
            (AwaitingVotes, SubmitVotes) => Some(AwaitingModerator),
            _ => None,
        }
    }

    /// Fail with a status-mismatch error unless `actual == expected`
    pub fn guard(actual: SessionStatus, expected: SessionStatus) -> Result<(), DomainError> {
        if actual != expected {
            return Err(DomainError::SessionStatus { expected, actual });
        }
        Ok(())
    }

    /// Look up the next status, treating the missing-transition sentinel as fatal
    pub fn transition(
        current: SessionStatus,
        action: SessionAction,
    ) -> Result<SessionStatus, DomainError> {
        Self::get_next_state(current, action).ok_or(DomainError::InvalidStateTransition {
            status: current,
            action,
        })
    }
}
