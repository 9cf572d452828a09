//! JSON snapshot file store
//!
//! The whole store is one JSON document. Every call reads it, and every
//! mutation rewrites it through a sibling temp file and a rename, so a crash
//! mid-write leaves the previous snapshot intact.

use super::snapshot::StoreSnapshot;
use async_trait::async_trait;
use chorus_application::{RepositoryError, SessionRepository};
use chorus_domain::{Round, RoundDraft, RoundId, Session, SessionId};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

/// Session store persisted as a single JSON file.
///
/// A missing file reads as an empty store. Writes within one process are
/// serialized; separate processes sharing the file are not coordinated.
pub struct JsonFileSessionRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileSessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<StoreSnapshot, RepositoryError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreSnapshot::default()),
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "Could not read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::Serialization(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn write(&self, snapshot: &StoreSnapshot) -> Result<(), RepositoryError> {
        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::storage_error("create directory", parent, e))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| Self::storage_error("write", &tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| Self::storage_error("replace", &self.path, e))?;

        debug!(
            path = %self.path.display(),
            sessions = snapshot.sessions.len(),
            rounds = snapshot.rounds.len(),
            "Wrote store snapshot"
        );
        Ok(())
    }

    /// Read, apply `change`, and write back under the write lock
    async fn update<T>(
        &self,
        change: impl FnOnce(&mut StoreSnapshot) -> Result<T, RepositoryError> + Send,
    ) -> Result<T, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = self.read().await?;
        let value = change(&mut snapshot)?;
        self.write(&snapshot).await?;
        Ok(value)
    }

    fn storage_error(action: &str, path: &Path, error: std::io::Error) -> RepositoryError {
        RepositoryError::Storage(format!("Could not {} {}: {}", action, path.display(), error))
    }
}

#[async_trait]
impl SessionRepository for JsonFileSessionRepository {
    async fn create_session(&self) -> Result<Session, RepositoryError> {
        self.update(|store| Ok(store.create_session())).await
    }

    async fn load_session(&self, id: &SessionId) -> Result<Session, RepositoryError> {
        self.read().await?.session(id)
    }

    async fn save_session(&self, session: &Session) -> Result<(), RepositoryError> {
        self.update(|store| store.save_session(session)).await
    }

    async fn load_rounds_for_session(
        &self,
        ids: &[RoundId],
    ) -> Result<Vec<Round>, RepositoryError> {
        self.read().await?.rounds(ids)
    }

    async fn create_round(
        &self,
        draft: RoundDraft,
        session: &Session,
    ) -> Result<Round, RepositoryError> {
        self.update(|store| store.create_round(draft, session)).await
    }

    async fn save_round(&self, round: &Round, session: &Session) -> Result<(), RepositoryError> {
        self.update(|store| store.save_round(round, session)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_domain::{EvalMode, RoundMetadata, RoundResult, SessionStatus};

    fn draft(session_id: &SessionId) -> RoundDraft {
        RoundDraft {
            session_id: session_id.clone(),
            round_number: 1,
            eval_mode: EvalMode::Full,
            candidates: vec!["Yes".to_string(), "No".to_string()],
            metadata: RoundMetadata::default(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileSessionRepository::new(dir.path().join("store.json"));
        assert!(matches!(
            repo.load_session(&SessionId::new("missing")).await,
            Err(RepositoryError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_state_survives_a_new_repository() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let (session_id, round_id) = {
            let repo = JsonFileSessionRepository::new(&path);
            let session = repo.create_session().await.unwrap();
            let mut round = repo.create_round(draft(&session.id), &session).await.unwrap();

            let mut session = repo.load_session(&session.id).await.unwrap();
            assert_eq!(session.round_ids, vec![round.id.clone()]);

            round.result = Some(RoundResult::pandahood(
                chorus_domain::ProposalBucket::Passed,
                true,
            ));
            session.status = SessionStatus::AwaitingModerator;
            repo.save_round(&round, &session).await.unwrap();
            (session.id, round.id)
        };

        let reopened = JsonFileSessionRepository::new(&path);
        let session = reopened.load_session(&session_id).await.unwrap();
        assert_eq!(session.status, SessionStatus::AwaitingModerator);
        assert_eq!(session.round_ids, vec![round_id.clone()]);

        let rounds = reopened.load_rounds_for_session(&[round_id]).await.unwrap();
        assert!(rounds[0].is_decisive());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_uses_tagged_result_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let repo = JsonFileSessionRepository::new(&path);

        let session = repo.create_session().await.unwrap();
        let mut round = repo.create_round(draft(&session.id), &session).await.unwrap();
        round.result = Some(RoundResult::exec(None, false));
        repo.save_round(&round, &session).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        let stored = &raw["rounds"][round.id.as_str()];
        assert_eq!(stored["result"]["type"], "exec");
        assert_eq!(stored["result"]["is_complete"], false);
        assert_eq!(raw["sessions"][session.id.as_str()]["status"], "draft");
    }

    #[tokio::test]
    async fn test_rejected_round_commit_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let repo = JsonFileSessionRepository::new(&path);

        let session = repo.create_session().await.unwrap();
        let before = std::fs::read(&path).unwrap();

        let ghost = Session::draft(SessionId::new("ghost"));
        assert!(matches!(
            repo.create_round(draft(&ghost.id), &ghost).await,
            Err(RepositoryError::SessionNotFound(_))
        ));
        assert_eq!(std::fs::read(&path).unwrap(), before);
        assert!(repo.load_session(&session.id).await.unwrap().round_ids.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let repo = JsonFileSessionRepository::new(&path);
        assert!(matches!(
            repo.load_session(&SessionId::new("any")).await,
            Err(RepositoryError::Serialization(_))
        ));
    }
}
