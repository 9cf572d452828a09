//! Callback triage strategy over four fixed options

use super::{ElectionStrategy, StrategyContext, StrategyOutcome, option_count};
use crate::ballot::VoteTally;
use crate::core::error::DomainError;
use crate::round::result::{CallbackBucket, RoundResult};
use crate::session::entities::SessionType;

pub const DEFINITE: &str = "Definite callback";
pub const MAYBE: &str = "Maybe callback";
pub const NO_CALLBACK: &str = "No callback";
pub const ABSTAIN: &str = "Abstain";

const OPTIONS: [&str; 4] = [DEFINITE, MAYBE, NO_CALLBACK, ABSTAIN];

/// The single re-vote round for undecided candidates
const REVOTE_ROUND: u32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct CallbackStrategy;

impl ElectionStrategy for CallbackStrategy {
    fn session_type(&self) -> SessionType {
        SessionType::Callback
    }

    fn expected_options(&self) -> Option<&'static [&'static str]> {
        Some(&OPTIONS)
    }

    fn get_result(
        &self,
        votes: &[VoteTally],
        context: &StrategyContext<'_>,
    ) -> Result<StrategyOutcome, DomainError> {
        let definite = option_count(votes, DEFINITE)?;
        let maybe = option_count(votes, MAYBE)?;

        // (definite + maybe) / voters < 0.4
        let result = if !context.share_at_least(definite.saturating_add(maybe), 2, 5) {
            RoundResult::callback(CallbackBucket::NoCallback, true)
        } else if context.share_at_least(definite, 3, 4) {
            RoundResult::callback(CallbackBucket::Definite, true)
        } else {
            RoundResult::callback(
                CallbackBucket::Possible,
                context.round_number == REVOTE_ROUND,
            )
        };

        Ok(StrategyOutcome::checked(result, votes, context.voter_count))
    }
}
