//! Membership proposal strategy: Yes / No with an 80% bar

use super::{ElectionStrategy, StrategyContext, StrategyOutcome, option_count};
use crate::ballot::VoteTally;
use crate::core::error::DomainError;
use crate::round::result::{ProposalBucket, RoundResult};
use crate::session::entities::SessionType;

pub const YES: &str = "Yes";
pub const NO: &str = "No";

const OPTIONS: [&str; 2] = [YES, NO];

const FINAL_ROUND: u32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct PandahoodStrategy;

impl ElectionStrategy for PandahoodStrategy {
    fn session_type(&self) -> SessionType {
        SessionType::Pandahood
    }

    fn expected_options(&self) -> Option<&'static [&'static str]> {
        Some(&OPTIONS)
    }

    fn get_result(
        &self,
        votes: &[VoteTally],
        context: &StrategyContext<'_>,
    ) -> Result<StrategyOutcome, DomainError> {
        let yes = option_count(votes, YES)?;

        let result = if context.share_at_least(yes, 4, 5) {
            RoundResult::pandahood(ProposalBucket::Passed, true)
        } else {
            RoundResult::pandahood(ProposalBucket::Struck, context.round_number == FINAL_ROUND)
        };

        Ok(StrategyOutcome::checked(result, votes, context.voter_count))
    }
}
