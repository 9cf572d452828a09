//! Rounds: entities, results and the initialize / finalize protocol
//!
//! A round is drafted by [`initializer::RoundInitializer`], persisted pending,
//! and decided exactly once by [`finalizer::RoundFinalizer`].

pub mod entities;
pub mod finalizer;
pub mod initializer;
pub mod result;

pub use entities::{CandidateType, EvalMode, Round, RoundDraft, RoundMetadata};
pub use finalizer::{FinalizedRound, RoundFinalizer};
pub use initializer::RoundInitializer;
pub use result::{
    CallbackBucket, CallbackWinners, ExecWinners, PandahoodWinners, ProposalBucket, RoundResult,
    SoloWinners,
};
