//! Vote validation against a round's declared candidates
//!
//! This is the single gate that keeps strategies from ever computing a result
//! over votes that do not line up with the round's candidates.

use super::tally::VoteTally;
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Check that submitted votes exactly match a round's candidate set
///
/// 1. Neither `candidates` nor the vote candidate ids may contain duplicates.
/// 2. With `expected_options` (fixed-option strategies), both sets must contain
///    every expected option and nothing else.
/// 3. The candidate set and the vote set must be equal.
pub fn validate_votes(
    votes: &[VoteTally],
    candidates: &[String],
    expected_options: Option<&[&str]>,
) -> Result<(), DomainError> {
    let candidate_set: HashSet<&str> = candidates.iter().map(String::as_str).collect();
    if candidate_set.len() != candidates.len() {
        return Err(DomainError::votes("Duplicate candidates found"));
    }

    let vote_set: HashSet<&str> = votes.iter().map(|v| v.candidate_id.as_str()).collect();
    if vote_set.len() != votes.len() {
        return Err(DomainError::votes("Duplicate votes found"));
    }

    if let Some(options) = expected_options {
        check_fixed_options(&candidate_set, options, "candidates")?;
        check_fixed_options(&vote_set, options, "votes")?;
    }

    if candidate_set.len() != vote_set.len() {
        return Err(DomainError::votes(format!(
            "Vote count mismatch: {} candidates but {} votes",
            candidate_set.len(),
            vote_set.len()
        )));
    }

    // Report in submission order so the message is deterministic
    if let Some(stray) = votes
        .iter()
        .find(|v| !candidate_set.contains(v.candidate_id.as_str()))
    {
        return Err(DomainError::votes(format!(
            "Vote for undeclared candidate '{}'",
            stray.candidate_id
        )));
    }

    Ok(())
}

fn check_fixed_options(
    present: &HashSet<&str>,
    options: &[&str],
    label: &str,
) -> Result<(), DomainError> {
    if let Some(missing) = options.iter().find(|o| !present.contains(*o)) {
        return Err(DomainError::votes(format!(
            "Missing option '{}' in {}",
            missing, label
        )));
    }
    if present.iter().any(|p| !options.contains(p)) {
        return Err(DomainError::votes(format!(
            "Unexpected option found in {}",
            label
        )));
    }
    Ok(())
}
