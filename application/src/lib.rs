//! Application layer for chorus-vote
//!
//! This crate contains the voting use case and the ports it drives.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    session_repository::{RepositoryError, SessionRepository},
    shuffler::{CandidateShuffler, NoShuffle},
};
pub use use_cases::voting_service::{
    ServiceError, StartSessionInput, SubmitVotesOutput, VotingService,
};
