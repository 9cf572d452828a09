//! Next-round proposal builder

use super::entities::{Round, RoundDraft, RoundMetadata};
use crate::ballot::validate_candidates;
use crate::core::error::DomainError;
use crate::core::ids::SessionId;
use crate::strategy::ElectionStrategy;
use std::collections::HashSet;

/// Builds the pending draft for a session's next round
///
/// Round history is passed in as the ordered slice of every prior round of
/// the session; the draft's number is always `prior_rounds.len() + 1`.
pub struct RoundInitializer<'a> {
    strategy: &'a dyn ElectionStrategy,
    session_id: &'a SessionId,
    prior_rounds: &'a [Round],
}

impl<'a> RoundInitializer<'a> {
    pub fn new(
        strategy: &'a dyn ElectionStrategy,
        session_id: &'a SessionId,
        prior_rounds: &'a [Round],
    ) -> Self {
        Self {
            strategy,
            session_id,
            prior_rounds,
        }
    }

    /// Resolve candidates and phase for the next round
    ///
    /// Candidates come from `provided` when non-empty, otherwise from the
    /// strategy: its suggestion after a prior round, its default options for
    /// round 1. A first round with neither fails with
    /// [`DomainError::NoInitialCandidates`].
    pub fn initialize(&self, provided: Option<&[String]>) -> Result<RoundDraft, DomainError> {
        let previous = self.prior_rounds.last();
        if previous.is_some_and(Round::is_pending) {
            return Err(DomainError::conflict("Previous round has not been finalized"));
        }

        let provided = provided.filter(|list| !list.is_empty());
        if let Some(list) = provided {
            validate_candidates(Some(list), self.prior_rounds.len())?;
            self.check_fixed_options(list)?;
        }

        let eval_mode = self.strategy.determine_mode(previous);
        let candidates = match (provided, previous) {
            (Some(list), _) => list.to_vec(),
            (None, Some(previous)) => self.strategy.suggest_next_candidates(previous, eval_mode)?,
            (None, None) => self
                .strategy
                .default_candidates()
                .ok_or(DomainError::NoInitialCandidates)?,
        };

        if candidates.is_empty() {
            return Err(DomainError::candidates("No candidates to advance"));
        }

        Ok(RoundDraft {
            session_id: self.session_id.clone(),
            round_number: self.next_round_number(),
            eval_mode,
            candidates,
            metadata: RoundMetadata {
                candidate_type: self.strategy.candidate_type(),
            },
        })
    }

    fn next_round_number(&self) -> u32 {
        u32::try_from(self.prior_rounds.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    fn check_fixed_options(&self, candidates: &[String]) -> Result<(), DomainError> {
        let Some(options) = self.strategy.expected_options() else {
            return Ok(());
        };
        let given: HashSet<&str> = candidates.iter().map(String::as_str).collect();
        let expected: HashSet<&str> = options.iter().copied().collect();
        if given != expected {
            return Err(DomainError::candidates(format!(
                "{} rounds must use exactly the options: {}",
                self.strategy.session_type(),
                options.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::RoundId;
    use crate::round::entities::{CandidateType, EvalMode};
    use crate::round::result::RoundResult;
    use crate::session::entities::SessionType;
    use crate::strategy::strategy_for;
    use crate::strategy::test_support::finalized_round;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn session_id() -> SessionId {
        SessionId::new("session-123")
    }

    #[test]
    fn test_first_round_uses_provided_candidates() {
        let id = session_id();
        let seed = names(&["Alice", "Bob", "Connor"]);
        let draft = RoundInitializer::new(strategy_for(SessionType::Solo), &id, &[])
            .initialize(Some(seed.as_slice()))
            .unwrap();

        assert_eq!(draft.round_number, 1);
        assert_eq!(draft.candidates, seed);
        assert_eq!(draft.eval_mode, EvalMode::Full);
        assert_eq!(draft.metadata.candidate_type, CandidateType::Names);
        assert_eq!(draft.session_id, id);
    }

    #[test]
    fn test_first_round_without_candidates_fails_for_named_strategies() {
        let id = session_id();
        for kind in [SessionType::Solo, SessionType::Exec] {
            let result = RoundInitializer::new(strategy_for(kind), &id, &[]).initialize(None);
            assert_eq!(result, Err(DomainError::NoInitialCandidates));
        }
    }

    #[test]
    fn test_first_round_falls_back_to_default_options() {
        let id = session_id();
        let draft = RoundInitializer::new(strategy_for(SessionType::Pandahood), &id, &[])
            .initialize(Some(Vec::new().as_slice()))
            .unwrap();
        assert_eq!(draft.candidates, vec!["Yes", "No"]);
        assert_eq!(draft.metadata.candidate_type, CandidateType::Options);
    }

    #[test]
    fn test_fixed_options_must_match_exactly() {
        let id = session_id();
        let initializer = RoundInitializer::new(strategy_for(SessionType::Pandahood), &id, &[]);

        let reordered = names(&["No", "Yes"]);
        assert!(initializer.initialize(Some(reordered.as_slice())).is_ok());

        let extra = names(&["Yes", "No", "Maybe"]);
        assert!(matches!(
            initializer.initialize(Some(extra.as_slice())),
            Err(DomainError::CandidateValidation(_))
        ));
    }

    #[test]
    fn test_provided_candidates_are_validated() {
        let id = session_id();
        let dupes = names(&["Alice", " alice "]);
        let result = RoundInitializer::new(strategy_for(SessionType::Exec), &id, &[])
            .initialize(Some(dupes.as_slice()));
        assert!(matches!(result, Err(DomainError::CandidateValidation(_))));
    }

    #[test]
    fn test_later_round_uses_strategy_suggestion() {
        let id = session_id();
        let prior = vec![finalized_round(
            1,
            EvalMode::Full,
            &[("Alice", 8), ("Bob", 7), ("Connor", 5)],
            RoundResult::solo(None, None, false),
        )];
        let draft = RoundInitializer::new(strategy_for(SessionType::Solo), &id, &prior)
            .initialize(None)
            .unwrap();

        assert_eq!(draft.round_number, 2);
        assert_eq!(draft.candidates, vec!["Alice", "Bob"]);
        assert_eq!(draft.eval_mode, EvalMode::Full);
    }

    #[test]
    fn test_later_round_enters_understudy_phase() {
        let id = session_id();
        let prior = vec![finalized_round(
            1,
            EvalMode::Full,
            &[("Alice", 8), ("Bob", 6), ("Connor", 6)],
            RoundResult::solo(Some("Alice".to_string()), None, false),
        )];
        let draft = RoundInitializer::new(strategy_for(SessionType::Solo), &id, &prior)
            .initialize(None)
            .unwrap();

        assert_eq!(draft.eval_mode, EvalMode::UnderstudyOnly);
        assert_eq!(draft.candidates, vec!["Bob", "Connor"]);
    }

    #[test]
    fn test_provided_candidates_override_suggestion() {
        let id = session_id();
        let prior = vec![finalized_round(
            1,
            EvalMode::Full,
            &[("Alice", 8), ("Bob", 7), ("Connor", 5)],
            RoundResult::exec(None, false),
        )];
        let override_list = names(&["Connor", "Dana"]);
        let draft = RoundInitializer::new(strategy_for(SessionType::Exec), &id, &prior)
            .initialize(Some(override_list.as_slice()))
            .unwrap();
        assert_eq!(draft.candidates, override_list);
    }

    #[test]
    fn test_pending_previous_round_is_rejected() {
        let id = session_id();
        let mut pending = finalized_round(
            1,
            EvalMode::Full,
            &[("Yes", 10), ("No", 10)],
            RoundResult::pandahood(crate::round::result::ProposalBucket::Struck, false),
        );
        pending.result = None;
        let prior = vec![pending];

        let result = RoundInitializer::new(strategy_for(SessionType::Pandahood), &id, &prior)
            .initialize(None);
        assert!(matches!(result, Err(DomainError::LogicConflict(_))));
    }

    #[test]
    fn test_round_numbers_are_gapless() {
        let id = session_id();
        let strategy = strategy_for(SessionType::Exec);
        let mut rounds: Vec<Round> = Vec::new();
        let seed = names(&["Alice", "Bob"]);

        for expected in 1..=3u32 {
            let provided = if rounds.is_empty() {
                Some(seed.as_slice())
            } else {
                None
            };
            let draft = RoundInitializer::new(strategy, &id, &rounds)
                .initialize(provided)
                .unwrap();
            assert_eq!(draft.round_number, expected);

            let mut round = Round::from_draft(RoundId::new(format!("r-{}", expected)), draft);
            round.result = Some(RoundResult::exec(None, false));
            rounds.push(round);
        }
    }
}
