//! Officer election strategy
//!
//! "No confidence" is a valid ballot option but never a winner: it is dropped
//! before ranking. Thresholds tighten into a runoff and end at round 3.

use super::{ElectionStrategy, StrategyContext, StrategyOutcome};
use crate::ballot::{VoteTally, rank_votes};
use crate::core::error::DomainError;
use crate::round::result::RoundResult;
use crate::session::entities::SessionType;

/// Ballot option that counts toward turnout but cannot win
pub const NO_CONFIDENCE: &str = "No confidence";

/// Round that always ends the election
const FINAL_ROUND: u32 = 3;

/// Lead over the runner-up required in round 2
const RUNOFF_MARGIN: u32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecStrategy;

impl ElectionStrategy for ExecStrategy {
    fn session_type(&self) -> SessionType {
        SessionType::Exec
    }

    fn get_result(
        &self,
        votes: &[VoteTally],
        context: &StrategyContext<'_>,
    ) -> Result<StrategyOutcome, DomainError> {
        if votes.is_empty() {
            return Err(DomainError::votes("Exec rounds need at least one vote entry"));
        }

        let ranked = rank_votes(votes.iter().filter(|v| v.candidate_id != NO_CONFIDENCE));
        let first = ranked.first();
        let second = ranked.get(1);

        let elected = first.filter(|first| match context.round_number {
            1 => context.share_at_least(first.count, 3, 4),
            2 => {
                context.share_at_least(first.count, 1, 2)
                    && second.is_none_or(|second| {
                        first.count >= second.count.saturating_add(RUNOFF_MARGIN)
                    })
            }
            FINAL_ROUND => context.share_at_least(first.count, 1, 2),
            _ => false,
        });

        let role = elected.map(|v| v.candidate_id.clone());
        let is_complete = role.is_some() || context.round_number == FINAL_ROUND;

        Ok(StrategyOutcome::checked(
            RoundResult::exec(role, is_complete),
            votes,
            context.voter_count,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::tallies;

    fn decide(votes: &[(&str, u32)], voter_count: u32, round_number: u32) -> RoundResult {
        ExecStrategy
            .get_result(&tallies(votes), &StrategyContext::new(voter_count, round_number))
            .unwrap()
            .result
    }

    fn exec(role: Option<&str>, complete: bool) -> RoundResult {
        RoundResult::exec(role.map(str::to_string), complete)
    }

    #[test]
    fn test_round_one_supermajority_wins() {
        assert_eq!(decide(&[("Alice", 15), ("Bob", 4)], 20, 1), exec(Some("Alice"), true));
    }

    #[test]
    fn test_round_one_below_supermajority_continues() {
        assert_eq!(decide(&[("Alice", 14), ("Bob", 6)], 20, 1), exec(None, false));
    }

    #[test]
    fn test_no_confidence_is_excluded_from_ranking() {
        assert_eq!(
            decide(&[(NO_CONFIDENCE, 16), ("Alice", 4)], 20, 1),
            exec(None, false)
        );
        assert_eq!(
            decide(&[(NO_CONFIDENCE, 5), ("Alice", 15)], 20, 1),
            exec(Some("Alice"), true)
        );
    }

    #[test]
    fn test_only_no_confidence_votes_decide_nothing() {
        assert_eq!(decide(&[(NO_CONFIDENCE, 20)], 20, 2), exec(None, false));
        assert_eq!(decide(&[(NO_CONFIDENCE, 20)], 20, 3), exec(None, true));
    }

    #[test]
    fn test_round_two_majority_with_margin_wins() {
        assert_eq!(
            decide(&[("Alice", 11), ("Bob", 9)], 20, 2),
            exec(Some("Alice"), true)
        );
    }

    #[test]
    fn test_round_two_majority_without_margin_continues() {
        assert_eq!(decide(&[("Alice", 10), ("Bob", 9)], 20, 2), exec(None, false));
    }

    #[test]
    fn test_round_two_unopposed_majority_wins() {
        assert_eq!(decide(&[("Alice", 10)], 20, 2), exec(Some("Alice"), true));
    }

    #[test]
    fn test_round_two_below_majority_continues() {
        assert_eq!(
            decide(&[("Alice", 9), ("Bob", 3), (NO_CONFIDENCE, 8)], 20, 2),
            exec(None, false)
        );
    }

    #[test]
    fn test_round_three_majority_wins_without_margin() {
        assert_eq!(
            decide(&[("Alice", 10), ("Bob", 9)], 20, 3),
            exec(Some("Alice"), true)
        );
    }

    #[test]
    fn test_round_three_always_completes() {
        assert_eq!(decide(&[("Alice", 9), ("Bob", 9)], 20, 3), exec(None, true));
    }

    #[test]
    fn test_rounds_after_three_decide_nothing() {
        assert_eq!(decide(&[("Alice", 20), ("Bob", 0)], 20, 4), exec(None, false));
    }

    #[test]
    fn test_overvote_warns() {
        let outcome = ExecStrategy
            .get_result(
                &tallies(&[("Alice", 18), ("Bob", 4)]),
                &StrategyContext::new(20, 1),
            )
            .unwrap();
        assert_eq!(outcome.result, exec(Some("Alice"), true));
        assert_eq!(outcome.warnings.len(), 1);
    }
}
