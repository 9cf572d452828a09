//! Candidate list validation

use crate::core::error::DomainError;
use std::collections::HashSet;

/// Check that a proposed candidate list is well-formed
///
/// - The first round (`previous_round_count == 0`) must be seeded: a missing
///   or empty list fails. Later rounds may omit candidates and fall back to
///   the strategy's suggestion.
/// - Every candidate must be non-blank after trimming.
/// - No two candidates may be equal after trimming and lowercasing.
///
/// Normalization is for comparison only; callers keep the original strings.
pub fn validate_candidates(
    candidates: Option<&[String]>,
    previous_round_count: usize,
) -> Result<(), DomainError> {
    let candidates = match candidates {
        Some(list) if !list.is_empty() => list,
        _ if previous_round_count == 0 => {
            return Err(DomainError::candidates(
                "No initial candidates provided for 1st round",
            ));
        }
        _ => return Ok(()),
    };

    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(DomainError::candidates("Candidate names must be non-empty"));
        }
        if !seen.insert(trimmed.to_lowercase()) {
            return Err(DomainError::candidates(format!(
                "Duplicate candidates are not allowed: '{}'",
                trimmed
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_list_passes() {
        let list = names(&["Alice", "Bob", "Connor"]);
        assert!(validate_candidates(Some(list.as_slice()), 0).is_ok());
    }

    #[test]
    fn test_first_round_requires_candidates() {
        assert!(matches!(
            validate_candidates(None, 0),
            Err(DomainError::CandidateValidation(_))
        ));
        assert!(validate_candidates(Some(Vec::new().as_slice()), 0).is_err());
    }

    #[test]
    fn test_later_rounds_may_omit_candidates() {
        assert!(validate_candidates(None, 1).is_ok());
        assert!(validate_candidates(Some(Vec::new().as_slice()), 3).is_ok());
    }

    #[test]
    fn test_blank_candidate_fails() {
        let list = names(&["Alice", "   "]);
        let err = validate_candidates(Some(list.as_slice()), 2).unwrap_err();
        assert_eq!(
            err,
            DomainError::candidates("Candidate names must be non-empty")
        );
    }

    #[test]
    fn test_case_insensitive_duplicate_fails() {
        let list = names(&["alice", "Bob", " Alice "]);
        assert!(matches!(
            validate_candidates(Some(list.as_slice()), 0),
            Err(DomainError::CandidateValidation(msg)) if msg.contains("Duplicate")
        ));
    }

    #[test]
    fn test_duplicates_and_blanks_together_fail() {
        let list = names(&["alice", "Alice", " ", "Bob"]);
        assert!(validate_candidates(Some(list.as_slice()), 0).is_err());
    }
}
