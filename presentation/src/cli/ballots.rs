//! Ballot files for `vote --ballots`
//!
//! A ballot file is a JSON array. Each element is either one voter's ballot
//! (an array of scores) or a single score:
//!
//! ```json
//! [
//!   [{"candidate_id": "Alice", "score": 1}],
//!   {"candidate_id": "Bob", "score": 1}
//! ]
//! ```

use chorus_domain::Ballot;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BallotEntry {
    Voter(Vec<Ballot>),
    Single(Ballot),
}

/// Parse a ballot file into individual scores, in file order
pub fn parse_ballots(json: &str) -> Result<Vec<Ballot>, serde_json::Error> {
    let entries: Vec<BallotEntry> = serde_json::from_str(json)?;
    Ok(entries
        .into_iter()
        .flat_map(|entry| match entry {
            BallotEntry::Voter(scores) => scores,
            BallotEntry::Single(score) => vec![score],
        })
        .collect())
}
