//! Domain layer for chorus-vote
//!
//! This crate contains the round-progression engine: entities, the session
//! lifecycle, the two input validators and the four election strategies.
//! It performs no I/O and has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session and Round
//!
//! A [`Session`] resolves one decision (an audition, an officer election, a
//! callback triage, a membership proposal) over one or more [`Round`]s.
//! Each round proposes candidates, collects aggregated [`VoteTally`]s and is
//! decided by the session's [`ElectionStrategy`].
//!
//! ## Lifecycle
//!
//! ```text
//! draft ──start──▶ awaiting_moderator ──advance──▶ awaiting_votes
//!                    │        ▲                         │
//!                    │        └─────────submit──────────┘
//!                    └──finalize──▶ complete
//! ```

pub mod ballot;
pub mod config;
pub mod core;
pub mod round;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use config::OutputFormat;
pub use ballot::{
    Ballot, VoteTally, aggregate_ballots, rank_votes, tally_ballots, total_votes,
    validate_candidates, validate_votes,
};
pub use core::{
    error::{DomainError, ErrorKind},
    ids::{RoundId, SessionId},
};
pub use round::{
    CallbackBucket, CandidateType, EvalMode, FinalizedRound, ProposalBucket, Round, RoundDraft,
    RoundFinalizer, RoundInitializer, RoundMetadata, RoundResult, SoloWinners,
};
pub use session::{
    entities::{Session, SessionConfiguration, SessionType},
    state_machine::SessionStateMachine,
    status::{SessionAction, SessionStatus},
};
pub use strategy::{ElectionStrategy, StrategyContext, StrategyOutcome, strategy_for};
