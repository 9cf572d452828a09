//! Solo audition strategy: one soloist plus an understudy
//!
//! Two phases, threaded through every call as [`EvalMode`]:
//!
//! - **Full**: soloist and understudy are both open. The soloist needs a clear
//!   lead (`first > second + 1` before round 4, `first > second` from round 4);
//!   the runner-up becomes understudy only if it beats third place outright.
//! - **UnderstudyOnly**: a soloist was decided without an understudy. Only the
//!   understudy is voted on, among the non-soloists tied at the top.

use super::{ElectionStrategy, StrategyContext, StrategyOutcome};
use crate::ballot::{VoteTally, rank_votes};
use crate::core::error::DomainError;
use crate::round::entities::{EvalMode, Round};
use crate::round::result::RoundResult;
use crate::session::entities::SessionType;

/// Rounds before this one require a two-vote lead
const STRICT_LEAD_ROUNDS: u32 = 4;

/// Candidates within this many votes of the top score advance
const ADVANCE_MARGIN: u32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct SoloStrategy;

impl SoloStrategy {
    fn soloist_of(round: &Round) -> Option<&str> {
        round
            .result
            .as_ref()
            .and_then(RoundResult::solo_winners)
            .and_then(|w| w.soloist.as_deref())
    }

    fn understudy_result(
        votes: &[VoteTally],
        context: &StrategyContext<'_>,
    ) -> Result<RoundResult, DomainError> {
        let soloist = context
            .previous_round
            .and_then(Self::soloist_of)
            .ok_or_else(|| {
                DomainError::conflict("Missing soloist in previous round for understudy_only mode")
            })?
            .to_string();

        let ranked = rank_votes(votes.iter().filter(|v| v.candidate_id != soloist));
        let understudy = match ranked.as_slice() {
            [] => None,
            [only] => Some(only.candidate_id.clone()),
            [first, second, ..] => {
                (first.count > second.count).then(|| first.candidate_id.clone())
            }
        };

        let is_complete = understudy.is_some();
        Ok(RoundResult::solo(Some(soloist), understudy, is_complete))
    }

    fn full_result(votes: &[VoteTally], context: &StrategyContext<'_>) -> RoundResult {
        let ranked = rank_votes(votes);

        match ranked.as_slice() {
            [] => RoundResult::solo(None, None, false),
            // A lone candidate needs an absolute majority of voters
            [only] => {
                let soloist = context
                    .share_at_least(only.count, 1, 2)
                    .then(|| only.candidate_id.clone());
                let is_complete = soloist.is_some();
                RoundResult::solo(soloist, None, is_complete)
            }
            [first, second, rest @ ..] => {
                let threshold_met = if context.round_number < STRICT_LEAD_ROUNDS {
                    first.count > second.count.saturating_add(1)
                } else {
                    first.count > second.count
                };

                let soloist = threshold_met.then(|| first.candidate_id.clone());
                let runner_up_clear = rest.first().is_none_or(|third| second.count > third.count);
                let understudy =
                    (soloist.is_some() && runner_up_clear).then(|| second.candidate_id.clone());

                let is_complete = soloist.is_some() && understudy.is_some();
                RoundResult::solo(soloist, understudy, is_complete)
            }
        }
    }
}

impl ElectionStrategy for SoloStrategy {
    fn session_type(&self) -> SessionType {
        SessionType::Solo
    }

    fn determine_mode(&self, previous_round: Option<&Round>) -> EvalMode {
        let awaits_understudy = previous_round
            .and_then(|r| r.result.as_ref())
            .and_then(RoundResult::solo_winners)
            .is_some_and(|w| w.awaits_understudy());

        if awaits_understudy {
            EvalMode::UnderstudyOnly
        } else {
            EvalMode::Full
        }
    }

    fn suggest_next_candidates(
        &self,
        previous_round: &Round,
        eval_mode: EvalMode,
    ) -> Result<Vec<String>, DomainError> {
        if previous_round.votes.is_empty() {
            return Err(DomainError::conflict(format!(
                "Round {} has no votes to suggest candidates from",
                previous_round.round_number
            )));
        }

        match eval_mode {
            EvalMode::UnderstudyOnly => {
                let soloist = Self::soloist_of(previous_round);
                let contenders: Vec<&VoteTally> = previous_round
                    .votes
                    .iter()
                    .filter(|v| Some(v.candidate_id.as_str()) != soloist)
                    .collect();

                let top = contenders
                    .iter()
                    .map(|v| v.count)
                    .max()
                    .ok_or_else(|| {
                        DomainError::conflict(
                            "No non-soloist candidates found for understudy round",
                        )
                    })?;

                Ok(contenders
                    .into_iter()
                    .filter(|v| v.count == top)
                    .map(|v| v.candidate_id.clone())
                    .collect())
            }
            EvalMode::Full => {
                let top = previous_round
                    .votes
                    .iter()
                    .map(|v| v.count)
                    .max()
                    .unwrap_or(0);

                Ok(previous_round
                    .votes
                    .iter()
                    .filter(|v| top - v.count < ADVANCE_MARGIN)
                    .map(|v| v.candidate_id.clone())
                    .collect())
            }
        }
    }

    fn get_result(
        &self,
        votes: &[VoteTally],
        context: &StrategyContext<'_>,
    ) -> Result<StrategyOutcome, DomainError> {
        if votes.is_empty() {
            return Err(DomainError::votes("Solo rounds need at least one vote entry"));
        }

        let result = match context.eval_mode {
            EvalMode::UnderstudyOnly => Self::understudy_result(votes, context)?,
            EvalMode::Full => Self::full_result(votes, context),
        };

        Ok(StrategyOutcome::checked(result, votes, context.voter_count))
    }
}
