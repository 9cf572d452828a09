//! Whole-store value shared by the storage adapters

use chorus_application::RepositoryError;
use chorus_domain::{Round, RoundDraft, RoundId, Session, SessionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every session and round, keyed by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StoreSnapshot {
    pub sessions: BTreeMap<SessionId, Session>,
    pub rounds: BTreeMap<RoundId, Round>,
}

impl StoreSnapshot {
    pub fn create_session(&mut self) -> Session {
        let session = Session::draft(SessionId::generate());
        self.sessions.insert(session.id.clone(), session.clone());
        session
    }

    pub fn session(&self, id: &SessionId) -> Result<Session, RepositoryError> {
        self.sessions
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::SessionNotFound(id.clone()))
    }

    /// Replace a stored session; saving an unknown id is an error
    pub fn save_session(&mut self, session: &Session) -> Result<(), RepositoryError> {
        match self.sessions.get_mut(&session.id) {
            Some(stored) => {
                *stored = session.clone();
                Ok(())
            }
            None => Err(RepositoryError::SessionNotFound(session.id.clone())),
        }
    }

    /// The requested rounds ordered by round number
    pub fn rounds(&self, ids: &[RoundId]) -> Result<Vec<Round>, RepositoryError> {
        let mut rounds = ids
            .iter()
            .map(|id| {
                self.rounds
                    .get(id)
                    .cloned()
                    .ok_or_else(|| RepositoryError::RoundNotFound(id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        rounds.sort_by_key(|r| r.round_number);
        Ok(rounds)
    }

    /// Insert a new round and link it to `session`; nothing changes on error
    pub fn create_round(
        &mut self,
        draft: RoundDraft,
        session: &Session,
    ) -> Result<Round, RepositoryError> {
        if !self.sessions.contains_key(&session.id) {
            return Err(RepositoryError::SessionNotFound(session.id.clone()));
        }

        let round = Round::from_draft(RoundId::generate(), draft);
        let mut linked = session.clone();
        linked.round_ids.push(round.id.clone());

        self.rounds.insert(round.id.clone(), round.clone());
        self.sessions.insert(linked.id.clone(), linked);
        Ok(round)
    }

    /// Replace a stored round and its session; both ids must already exist
    pub fn save_round(&mut self, round: &Round, session: &Session) -> Result<(), RepositoryError> {
        if !self.rounds.contains_key(&round.id) {
            return Err(RepositoryError::RoundNotFound(round.id.clone()));
        }
        if !self.sessions.contains_key(&session.id) {
            return Err(RepositoryError::SessionNotFound(session.id.clone()));
        }

        self.rounds.insert(round.id.clone(), round.clone());
        self.sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }
}
