//! Round domain entities

use super::result::RoundResult;
use crate::ballot::VoteTally;
use crate::core::ids::{RoundId, SessionId};
use serde::{Deserialize, Serialize};

/// Strategy phase a round is evaluated under
///
/// Only the Solo strategy uses more than one phase: once a soloist is decided
/// without an understudy, following rounds elect the understudy alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EvalMode {
    #[default]
    Full,
    UnderstudyOnly,
}

impl EvalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvalMode::Full => "full",
            EvalMode::UnderstudyOnly => "understudy_only",
        }
    }
}

impl std::fmt::Display for EvalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the candidate strings of a round denote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CandidateType {
    /// People's names
    #[default]
    Names,
    /// A strategy's fixed option labels
    Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RoundMetadata {
    pub candidate_type: CandidateType,
}

/// A round proposal not yet persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDraft {
    pub session_id: SessionId,
    pub round_number: u32,
    pub eval_mode: EvalMode,
    pub candidates: Vec<String>,
    pub metadata: RoundMetadata,
}

/// One cycle of proposal, vote collection and decision (Entity)
///
/// Created pending by the initializer; receives votes and a result exactly
/// once from the finalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub session_id: SessionId,
    /// 1-based, gapless within a session
    pub round_number: u32,
    pub eval_mode: EvalMode,
    pub candidates: Vec<String>,
    #[serde(default)]
    pub metadata: RoundMetadata,
    #[serde(default)]
    pub votes: Vec<VoteTally>,
    #[serde(default)]
    pub result: Option<RoundResult>,
}

impl Round {
    /// Persist a draft under the given id
    pub fn from_draft(id: RoundId, draft: RoundDraft) -> Self {
        Self {
            id,
            session_id: draft.session_id,
            round_number: draft.round_number,
            eval_mode: draft.eval_mode,
            candidates: draft.candidates,
            metadata: draft.metadata,
            votes: Vec::new(),
            result: None,
        }
    }

    /// No votes or result attached yet
    pub fn is_pending(&self) -> bool {
        self.result.is_none()
    }

    /// Whether this round's result ends the election
    pub fn is_decisive(&self) -> bool {
        self.result.as_ref().is_some_and(RoundResult::is_complete)
    }
}
