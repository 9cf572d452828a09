//! Election decision strategies
//!
//! Every election type plugs the same three capabilities into the round
//! engine: [`ElectionStrategy::determine_mode`],
//! [`ElectionStrategy::suggest_next_candidates`] and
//! [`ElectionStrategy::get_result`]. [`strategy_for`] selects the
//! implementation for a [`SessionType`].
//!
//! ```text
//! ┌──────────────┬──────────────────────────┬───────────────────────────────┐
//! │ Strategy     │ Candidates               │ Winners                       │
//! ├──────────────┼──────────────────────────┼───────────────────────────────┤
//! │ Solo         │ names                    │ soloist + understudy          │
//! │ Exec         │ names (+ "No confidence")│ role                          │
//! │ Callback     │ 4 fixed options          │ bucket                        │
//! │ Pandahood    │ Yes / No                 │ bucket                        │
//! └──────────────┴──────────────────────────┴───────────────────────────────┘
//! ```

pub mod callback;
pub mod exec;
pub mod pandahood;
pub mod solo;

pub use callback::CallbackStrategy;
pub use exec::ExecStrategy;
pub use pandahood::PandahoodStrategy;
pub use solo::SoloStrategy;

use crate::ballot::{VoteTally, total_votes};
use crate::core::error::DomainError;
use crate::round::entities::{CandidateType, EvalMode, Round};
use crate::round::result::RoundResult;
use crate::session::entities::SessionType;

/// Inputs a strategy needs besides the votes themselves
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext<'a> {
    pub voter_count: u32,
    pub round_number: u32,
    pub previous_round: Option<&'a Round>,
    pub eval_mode: EvalMode,
}

impl<'a> StrategyContext<'a> {
    pub fn new(voter_count: u32, round_number: u32) -> Self {
        Self {
            voter_count,
            round_number,
            previous_round: None,
            eval_mode: EvalMode::Full,
        }
    }

    pub fn with_previous_round(mut self, previous_round: Option<&'a Round>) -> Self {
        self.previous_round = previous_round;
        self
    }

    pub fn with_eval_mode(mut self, eval_mode: EvalMode) -> Self {
        self.eval_mode = eval_mode;
        self
    }

    /// `count / voter_count >= numerator / denominator`, in exact integer arithmetic
    pub fn share_at_least(&self, count: u32, numerator: u32, denominator: u32) -> bool {
        u64::from(count) * u64::from(denominator)
            >= u64::from(self.voter_count) * u64::from(numerator)
    }
}

/// A computed result plus non-fatal diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyOutcome {
    pub result: RoundResult,
    /// Suspicious but processable input, e.g. more votes than voters
    pub warnings: Vec<String>,
}

impl StrategyOutcome {
    /// Wrap a result, attaching the overvote warning when the tally exceeds the voter count
    pub fn checked(result: RoundResult, votes: &[VoteTally], voter_count: u32) -> Self {
        let mut warnings = Vec::new();
        let total = total_votes(votes);
        if total > u64::from(voter_count) {
            warnings.push(format!(
                "Total votes ({}) exceed voter count ({})",
                total, voter_count
            ));
        }
        Self { result, warnings }
    }
}

/// Decision rules for one election type
pub trait ElectionStrategy: Send + Sync {
    /// The session type this strategy decides
    fn session_type(&self) -> SessionType;

    /// Fixed option set every round must use, if any
    fn expected_options(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Candidates for round 1 when none are provided
    fn default_candidates(&self) -> Option<Vec<String>> {
        self.expected_options()
            .map(|options| options.iter().map(|o| o.to_string()).collect())
    }

    fn candidate_type(&self) -> CandidateType {
        if self.expected_options().is_some() {
            CandidateType::Options
        } else {
            CandidateType::Names
        }
    }

    /// Phase the next round runs under, given the last finalized round
    fn determine_mode(&self, _previous_round: Option<&Round>) -> EvalMode {
        EvalMode::Full
    }

    /// Candidates carried into the next round when none are provided
    fn suggest_next_candidates(
        &self,
        previous_round: &Round,
        _eval_mode: EvalMode,
    ) -> Result<Vec<String>, DomainError> {
        Ok(previous_round.candidates.clone())
    }

    /// Decide a round from its validated votes
    fn get_result(
        &self,
        votes: &[VoteTally],
        context: &StrategyContext<'_>,
    ) -> Result<StrategyOutcome, DomainError>;
}

static SOLO: SoloStrategy = SoloStrategy;
static EXEC: ExecStrategy = ExecStrategy;
static CALLBACK: CallbackStrategy = CallbackStrategy;
static PANDAHOOD: PandahoodStrategy = PandahoodStrategy;

/// Type-keyed strategy lookup
pub fn strategy_for(session_type: SessionType) -> &'static dyn ElectionStrategy {
    match session_type {
        SessionType::Solo => &SOLO,
        SessionType::Exec => &EXEC,
        SessionType::Callback => &CALLBACK,
        SessionType::Pandahood => &PANDAHOOD,
    }
}

/// Look up a fixed-option count, failing if the option was not submitted
pub(crate) fn option_count(votes: &[VoteTally], option: &str) -> Result<u32, DomainError> {
    crate::ballot::count_for(votes, option)
        .ok_or_else(|| DomainError::votes(format!("Votes missing for option '{}'", option)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::ids::{RoundId, SessionId};
    use crate::round::entities::RoundMetadata;

    pub fn tallies(list: &[(&str, u32)]) -> Vec<VoteTally> {
        list.iter().map(|(c, n)| VoteTally::new(*c, *n)).collect()
    }

    /// A finalized round with the given votes and result
    pub fn finalized_round(
        round_number: u32,
        eval_mode: EvalMode,
        votes: &[(&str, u32)],
        result: RoundResult,
    ) -> Round {
        let votes = tallies(votes);
        Round {
            id: RoundId::new(format!("round-{}", round_number)),
            session_id: SessionId::new("session-123"),
            round_number,
            eval_mode,
            candidates: votes.iter().map(|v| v.candidate_id.clone()).collect(),
            metadata: RoundMetadata::default(),
            votes,
            result: Some(result),
        }
    }
}
