//! Vote application for a pending round

use super::entities::Round;
use crate::ballot::{VoteTally, validate_votes};
use crate::core::error::DomainError;
use crate::strategy::{ElectionStrategy, StrategyContext};

/// A round with votes and result attached, plus non-fatal diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedRound {
    pub round: Round,
    pub warnings: Vec<String>,
}

/// Applies one vote submission to a pending round
pub struct RoundFinalizer<'a> {
    strategy: &'a dyn ElectionStrategy,
    current_round: &'a Round,
    previous_round: Option<&'a Round>,
    voter_count: u32,
}

impl<'a> RoundFinalizer<'a> {
    pub fn new(
        strategy: &'a dyn ElectionStrategy,
        current_round: &'a Round,
        previous_round: Option<&'a Round>,
        voter_count: u32,
    ) -> Self {
        Self {
            strategy,
            current_round,
            previous_round,
            voter_count,
        }
    }

    /// Validate `votes` against the round and decide it
    ///
    /// Returns a new round value; the borrowed current round is left untouched.
    pub fn finalize(&self, votes: Vec<VoteTally>) -> Result<FinalizedRound, DomainError> {
        if self.voter_count == 0 {
            return Err(DomainError::InvalidConfiguration(
                "voter_count must be at least 1".to_string(),
            ));
        }
        if !self.current_round.is_pending() {
            return Err(DomainError::conflict(format!(
                "Round {} has already been finalized",
                self.current_round.id
            )));
        }
        if votes.is_empty() {
            return Err(DomainError::votes("No votes submitted"));
        }

        validate_votes(
            &votes,
            &self.current_round.candidates,
            self.strategy.expected_options(),
        )?;

        let context = StrategyContext::new(self.voter_count, self.current_round.round_number)
            .with_previous_round(self.previous_round)
            .with_eval_mode(self.current_round.eval_mode);
        let outcome = self.strategy.get_result(&votes, &context)?;

        let mut round = self.current_round.clone();
        round.votes = votes;
        round.result = Some(outcome.result);

        Ok(FinalizedRound {
            round,
            warnings: outcome.warnings,
        })
    }
}
