//! Session storage port
//!
//! Every call is a whole-value load or save. Calls that move a session
//! forward store the round and the session in one write, so a failed call
//! leaves both as they were. There is no version token: two writers racing
//! on the same load-modify-save cycle are not detected here.

use async_trait::async_trait;
use chorus_domain::{Round, RoundDraft, RoundId, Session, SessionId};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("Round not found: {0}")]
    RoundNotFound(RoundId),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Persistence for sessions and their rounds
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a fresh draft session under a newly generated id
    async fn create_session(&self) -> Result<Session, RepositoryError>;

    async fn load_session(&self, id: &SessionId) -> Result<Session, RepositoryError>;

    async fn save_session(&self, session: &Session) -> Result<(), RepositoryError>;

    /// Load the given rounds ordered by `round_number` ascending
    async fn load_rounds_for_session(&self, ids: &[RoundId])
    -> Result<Vec<Round>, RepositoryError>;

    /// Persist a pending round under a newly generated id and store `session`
    /// with that id appended to its rounds, in one write
    async fn create_round(
        &self,
        draft: RoundDraft,
        session: &Session,
    ) -> Result<Round, RepositoryError>;

    /// Replace a stored round and its session in one write
    async fn save_round(&self, round: &Round, session: &Session) -> Result<(), RepositoryError>;
}
