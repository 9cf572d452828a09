//! Ballot primitives and the two input gates.
//!
//! - [`tally::VoteTally`]: aggregated count for one candidate
//! - [`tally::tally_ballots`]: individual ballots into a round's tallies
//! - [`candidates::validate_candidates`]: CandidateValidator
//! - [`votes::validate_votes`]: VoteValidator

pub mod candidates;
pub mod tally;
pub mod votes;

pub use candidates::validate_candidates;
pub use tally::{
    Ballot, VoteTally, aggregate_ballots, count_for, rank_votes, tally_ballots, total_votes,
};
pub use votes::validate_votes;
