//! Vote tallies and ranking
//!
//! A round's votes arrive already aggregated: one [`VoteTally`] per candidate.
//! [`aggregate_ballots`] builds those tallies from individual scored ballots;
//! [`tally_ballots`] does the same for a known candidate list, so candidates
//! nobody scored still get a zero count.

use serde::{Deserialize, Serialize};

/// Aggregated vote count for a single candidate
///
/// # Example
///
/// ```
/// use chorus_domain::ballot::VoteTally;
///
/// let tally = VoteTally::new("Alice", 10);
/// assert_eq!(tally.candidate_id, "Alice");
/// assert_eq!(tally.count, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoteTally {
    pub candidate_id: String,
    pub count: u32,
}

impl VoteTally {
    pub fn new(candidate_id: impl Into<String>, count: u32) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            count,
        }
    }
}

/// One voter's score for one candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub candidate_id: String,
    pub score: u32,
}

impl Ballot {
    pub fn new(candidate_id: impl Into<String>, score: u32) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            score,
        }
    }
}

/// Rank tallies by count, highest first
///
/// The sort is stable: candidates with equal counts keep their submitted order.
pub fn rank_votes<'a, I>(votes: I) -> Vec<&'a VoteTally>
where
    I: IntoIterator<Item = &'a VoteTally>,
{
    let mut ranked: Vec<&VoteTally> = votes.into_iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Sum of all counts
pub fn total_votes(votes: &[VoteTally]) -> u64 {
    votes.iter().map(|v| u64::from(v.count)).sum()
}

/// Look up the count recorded for `candidate_id`
pub fn count_for(votes: &[VoteTally], candidate_id: &str) -> Option<u32> {
    votes
        .iter()
        .find(|v| v.candidate_id == candidate_id)
        .map(|v| v.count)
}

/// Sum per-candidate scores from individual ballots
///
/// Candidates appear in the order they were first seen.
pub fn aggregate_ballots<I>(ballots: I) -> Vec<VoteTally>
where
    I: IntoIterator<Item = Ballot>,
{
    let mut tallies: Vec<VoteTally> = Vec::new();
    for ballot in ballots {
        match tallies
            .iter_mut()
            .find(|t| t.candidate_id == ballot.candidate_id)
        {
            Some(tally) => tally.count = tally.count.saturating_add(ballot.score),
            None => tallies.push(VoteTally::new(ballot.candidate_id, ballot.score)),
        }
    }
    tallies
}

/// Tally ballots against a round's candidates
///
/// Every candidate gets a tally, in candidate order, zero if unscored.
/// Scores for names outside `candidates` are appended after them so vote
/// validation can reject the submission.
pub fn tally_ballots<I>(candidates: &[String], ballots: I) -> Vec<VoteTally>
where
    I: IntoIterator<Item = Ballot>,
{
    let mut tallies: Vec<VoteTally> = candidates
        .iter()
        .map(|candidate| VoteTally::new(candidate.as_str(), 0))
        .collect();
    for summed in aggregate_ballots(ballots) {
        match tallies
            .iter_mut()
            .find(|t| t.candidate_id == summed.candidate_id)
        {
            Some(tally) => tally.count = summed.count,
            None => tallies.push(summed),
        }
    }
    tallies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_orders_by_count_descending() {
        let votes = vec![
            VoteTally::new("Alice", 3),
            VoteTally::new("Bob", 9),
            VoteTally::new("Connor", 5),
        ];
        let ranked: Vec<&str> = rank_votes(&votes)
            .iter()
            .map(|v| v.candidate_id.as_str())
            .collect();
        assert_eq!(ranked, vec!["Bob", "Connor", "Alice"]);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let votes = vec![
            VoteTally::new("Diana", 4),
            VoteTally::new("Alice", 7),
            VoteTally::new("Connor", 4),
            VoteTally::new("Bob", 7),
        ];
        let ranked: Vec<&str> = rank_votes(&votes)
            .iter()
            .map(|v| v.candidate_id.as_str())
            .collect();
        assert_eq!(ranked, vec!["Alice", "Bob", "Diana", "Connor"]);
    }

    #[test]
    fn test_total_and_lookup() {
        let votes = vec![VoteTally::new("Yes", 16), VoteTally::new("No", 4)];
        assert_eq!(total_votes(&votes), 20);
        assert_eq!(count_for(&votes, "No"), Some(4));
        assert_eq!(count_for(&votes, "Maybe"), None);
    }

    #[test]
    fn test_aggregate_ballots_sums_scores() {
        let ballots = vec![
            Ballot::new("Alice", 1),
            Ballot::new("Bob", 1),
            Ballot::new("Alice", 1),
            Ballot::new("Connor", 0),
            Ballot::new("Alice", 2),
        ];
        assert_eq!(
            aggregate_ballots(ballots),
            vec![
                VoteTally::new("Alice", 4),
                VoteTally::new("Bob", 1),
                VoteTally::new("Connor", 0),
            ]
        );
    }

    #[test]
    fn test_aggregate_no_ballots() {
        assert!(aggregate_ballots(Vec::new()).is_empty());
    }

    #[test]
    fn test_tally_ballots_fills_unscored_candidates() {
        let candidates = vec!["Alice".to_string(), "Bob".to_string(), "Connor".to_string()];
        let ballots = vec![
            Ballot::new("Bob", 1),
            Ballot::new("Alice", 1),
            Ballot::new("Bob", 1),
        ];
        assert_eq!(
            tally_ballots(&candidates, ballots),
            vec![
                VoteTally::new("Alice", 1),
                VoteTally::new("Bob", 2),
                VoteTally::new("Connor", 0),
            ]
        );
    }

    #[test]
    fn test_tally_ballots_keeps_unknown_names() {
        let candidates = vec!["Yes".to_string(), "No".to_string()];
        let tallies = tally_ballots(&candidates, vec![Ballot::new("Maybe", 2)]);
        assert_eq!(tallies.last(), Some(&VoteTally::new("Maybe", 2)));
        assert_eq!(tallies.len(), 3);
    }
}
