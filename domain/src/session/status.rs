//! Session status and lifecycle actions

use serde::{Deserialize, Serialize};

/// Lifecycle status of a voting session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Created but not configured yet
    #[default]
    Draft,
    /// Waiting for the moderator to open the next round or finalize
    AwaitingModerator,
    /// A round is open and waiting for its vote tally
    AwaitingVotes,
    /// Terminal
    Complete,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Draft => "draft",
            SessionStatus::AwaitingModerator => "awaiting_moderator",
            SessionStatus::AwaitingVotes => "awaiting_votes",
            SessionStatus::Complete => "complete",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Complete)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operation that moves a session through its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionAction {
    StartSession,
    AdvanceRound,
    SubmitVotes,
    FinalizeSession,
}

impl SessionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::StartSession => "start_session",
            SessionAction::AdvanceRound => "advance_round",
            SessionAction::SubmitVotes => "submit_votes",
            SessionAction::FinalizeSession => "finalize_session",
        }
    }

    /// The status a session must be in before this action may run
    pub fn required_status(&self) -> SessionStatus {
        match self {
            SessionAction::StartSession => SessionStatus::Draft,
            SessionAction::AdvanceRound | SessionAction::FinalizeSession => {
                SessionStatus::AwaitingModerator
            }
            SessionAction::SubmitVotes => SessionStatus::AwaitingVotes,
        }
    }
}

impl std::fmt::Display for SessionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
