//! In-process session store

use super::snapshot::StoreSnapshot;
use async_trait::async_trait;
use chorus_application::{RepositoryError, SessionRepository};
use chorus_domain::{Round, RoundDraft, RoundId, Session, SessionId};
use tokio::sync::RwLock;

/// Keeps every session and round in memory for the life of the process.
#[derive(Default)]
pub struct InMemorySessionRepository {
    store: RwLock<StoreSnapshot>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create_session(&self) -> Result<Session, RepositoryError> {
        Ok(self.store.write().await.create_session())
    }

    async fn load_session(&self, id: &SessionId) -> Result<Session, RepositoryError> {
        self.store.read().await.session(id)
    }

    async fn save_session(&self, session: &Session) -> Result<(), RepositoryError> {
        self.store.write().await.save_session(session)
    }

    async fn load_rounds_for_session(
        &self,
        ids: &[RoundId],
    ) -> Result<Vec<Round>, RepositoryError> {
        self.store.read().await.rounds(ids)
    }

    async fn create_round(
        &self,
        draft: RoundDraft,
        session: &Session,
    ) -> Result<Round, RepositoryError> {
        self.store.write().await.create_round(draft, session)
    }

    async fn save_round(&self, round: &Round, session: &Session) -> Result<(), RepositoryError> {
        self.store.write().await.save_round(round, session)
    }
}
