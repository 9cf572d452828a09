//! Voting service use case.
//!
//! Orchestrates the round-progression engine against the storage port:
//! each operation loads the session, checks its status, runs one domain
//! step and saves the result. A round and the session status it moves to
//! are stored in one repository call.
//!
//! ```text
//! create_session → start_session → loop {
//!     advance_to_next_round → submit_votes
//! } → finalize_session
//! ```

use crate::ports::session_repository::{RepositoryError, SessionRepository};
use crate::ports::shuffler::{CandidateShuffler, NoShuffle};
use chorus_domain::{
    Ballot, DomainError, ErrorKind, Round, RoundFinalizer, RoundId, RoundInitializer, Session,
    SessionAction, SessionConfiguration, SessionId, SessionStateMachine, SessionStatus,
    SessionType, VoteTally, strategy_for, tally_ballots,
};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a voting operation
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::SessionNotFound(id) => {
                ServiceError::Domain(DomainError::session_not_found(id.as_str()))
            }
            RepositoryError::RoundNotFound(id) => {
                ServiceError::Domain(DomainError::round_not_found(id.as_str()))
            }
            other => ServiceError::Repository(other),
        }
    }
}

impl ServiceError {
    /// Domain classification; `None` for storage failures
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ServiceError::Domain(e) => Some(e.kind()),
            ServiceError::Repository(_) => None,
        }
    }
}

/// Input for [`VotingService::start_session`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StartSessionInput {
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Seed candidates; may be empty for fixed-option election types
    #[serde(default)]
    pub candidates: Vec<String>,
    pub voter_count: u32,
    #[serde(default)]
    pub proposal: Option<String>,
    #[serde(default)]
    pub song: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl StartSessionInput {
    pub fn new(session_type: SessionType, voter_count: u32) -> Self {
        Self {
            session_type,
            candidates: Vec::new(),
            voter_count,
            proposal: None,
            song: None,
            role: None,
        }
    }

    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_proposal(mut self, proposal: impl Into<String>) -> Self {
        self.proposal = Some(proposal.into());
        self
    }

    pub fn with_song(mut self, song: impl Into<String>) -> Self {
        self.song = Some(song.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    fn configuration(&self) -> SessionConfiguration {
        SessionConfiguration {
            voter_count: self.voter_count,
            proposal: self.proposal.clone(),
            song: self.song.clone(),
            role: self.role.clone(),
        }
    }
}

/// Output of [`VotingService::submit_votes`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitVotesOutput {
    /// The round with votes and result attached
    pub round: Round,
    /// Non-fatal diagnostics, e.g. more votes than voters
    pub warnings: Vec<String>,
    /// Session status after the submission
    pub status: SessionStatus,
}

/// Use case for driving a session through its rounds.
pub struct VotingService {
    repository: Arc<dyn SessionRepository>,
    shuffler: Arc<dyn CandidateShuffler>,
}

impl Clone for VotingService {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            shuffler: self.shuffler.clone(),
        }
    }
}

impl VotingService {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            repository,
            shuffler: Arc::new(NoShuffle),
        }
    }

    /// Use a shuffler for seed candidates
    pub fn with_shuffler(mut self, shuffler: Arc<dyn CandidateShuffler>) -> Self {
        self.shuffler = shuffler;
        self
    }

    /// Create an empty draft session
    pub async fn create_session(&self) -> Result<Session, ServiceError> {
        let session = self.repository.create_session().await?;
        info!(session_id = %session.id, "Created session");
        Ok(session)
    }

    pub async fn get_session(&self, session_id: &SessionId) -> Result<Session, ServiceError> {
        Ok(self.repository.load_session(session_id).await?)
    }

    /// Load one round, which must belong to the session
    pub async fn get_round(
        &self,
        session_id: &SessionId,
        round_id: &RoundId,
    ) -> Result<Round, ServiceError> {
        let session = self.repository.load_session(session_id).await?;
        if !session.round_ids.contains(round_id) {
            return Err(DomainError::round_not_found(round_id.as_str()).into());
        }

        self.repository
            .load_rounds_for_session(std::slice::from_ref(round_id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::round_not_found(round_id.as_str()).into())
    }

    /// All rounds of a session, oldest first
    pub async fn get_rounds(&self, session_id: &SessionId) -> Result<Vec<Round>, ServiceError> {
        let session = self.repository.load_session(session_id).await?;
        Ok(self
            .repository
            .load_rounds_for_session(&session.round_ids)
            .await?)
    }

    /// Configure a draft session and open it for rounds
    ///
    /// Seed candidates are shuffled once here and stored; they must be able to
    /// open round 1 (the same checks the first round runs are applied now).
    pub async fn start_session(
        &self,
        session_id: &SessionId,
        input: StartSessionInput,
    ) -> Result<Session, ServiceError> {
        let mut session = self.repository.load_session(session_id).await?;
        let next_status = Self::next_status(&session, SessionAction::StartSession)?;

        let configuration = input.configuration();
        configuration.validate()?;

        let strategy = strategy_for(input.session_type);
        let mut candidates = input.candidates;
        self.shuffler.shuffle(&mut candidates);
        RoundInitializer::new(strategy, &session.id, &[])
            .initialize(Some(candidates.as_slice()))?;

        session.session_type = Some(input.session_type);
        session.configuration = Some(configuration);
        session.initial_candidates = candidates;
        session.status = next_status;
        self.repository.save_session(&session).await?;

        info!(
            session_id = %session.id,
            session_type = %input.session_type,
            candidates = session.initial_candidates.len(),
            "Started session"
        );
        Ok(session)
    }

    /// Open the next round
    ///
    /// Round 1 uses `provided` candidates, else the session's seed candidates,
    /// else the strategy's default options. Later rounds use `provided`, else
    /// the strategy's suggestion from the previous round.
    pub async fn advance_to_next_round(
        &self,
        session_id: &SessionId,
        provided: Option<Vec<String>>,
    ) -> Result<Round, ServiceError> {
        let mut session = self.repository.load_session(session_id).await?;
        let next_status = Self::next_status(&session, SessionAction::AdvanceRound)?;
        let strategy = strategy_for(session.require_type()?);

        let rounds = self
            .repository
            .load_rounds_for_session(&session.round_ids)
            .await?;

        if rounds.last().is_some_and(Round::is_decisive) {
            warn!(
                session_id = %session.id,
                "Latest round already decided the election; opening another round anyway"
            );
        }

        let provided = provided.filter(|c| !c.is_empty()).or_else(|| {
            (rounds.is_empty() && !session.initial_candidates.is_empty())
                .then(|| session.initial_candidates.clone())
        });

        let draft =
            RoundInitializer::new(strategy, &session.id, &rounds).initialize(provided.as_deref())?;
        debug!(
            session_id = %session.id,
            round_number = draft.round_number,
            eval_mode = %draft.eval_mode,
            "Round draft resolved"
        );

        session.status = next_status;
        let round = self.repository.create_round(draft, &session).await?;
        session.round_ids.push(round.id.clone());

        info!(
            session_id = %session.id,
            round = %round.id,
            round_number = round.round_number,
            candidates = round.candidates.len(),
            "Advanced to next round"
        );
        Ok(round)
    }

    /// Record the votes for the session's pending round and decide it
    pub async fn submit_votes(
        &self,
        session_id: &SessionId,
        round_id: &RoundId,
        votes: Vec<VoteTally>,
    ) -> Result<SubmitVotesOutput, ServiceError> {
        let mut session = self.repository.load_session(session_id).await?;
        let next_status = Self::next_status(&session, SessionAction::SubmitVotes)?;
        let strategy = strategy_for(session.require_type()?);
        let voter_count = session.require_configuration()?.voter_count;

        if !session.round_ids.contains(round_id) {
            return Err(DomainError::round_not_found(round_id.as_str()).into());
        }

        let rounds = self
            .repository
            .load_rounds_for_session(&session.round_ids)
            .await?;
        let Some((current, earlier)) = rounds.split_last() else {
            return Err(DomainError::round_not_found(round_id.as_str()).into());
        };
        if &current.id != round_id {
            return Err(DomainError::conflict(format!(
                "Round {} is not the latest round of session {}",
                round_id, session.id
            ))
            .into());
        }

        let finalized =
            RoundFinalizer::new(strategy, current, earlier.last(), voter_count).finalize(votes)?;
        for warning in &finalized.warnings {
            warn!(session_id = %session.id, round = %round_id, "{}", warning);
        }

        session.status = next_status;
        self.repository.save_round(&finalized.round, &session).await?;

        if let Some(result) = &finalized.round.result {
            info!(
                session_id = %session.id,
                round_number = finalized.round.round_number,
                complete = result.is_complete(),
                "Round decided: {}",
                result.winners_summary()
            );
        }

        Ok(SubmitVotesOutput {
            round: finalized.round,
            warnings: finalized.warnings,
            status: session.status,
        })
    }

    /// Tally individual ballots for the session's pending round and decide it
    ///
    /// Candidates of the round that no ballot scored count as zero.
    pub async fn submit_ballots(
        &self,
        session_id: &SessionId,
        round_id: &RoundId,
        ballots: Vec<Ballot>,
    ) -> Result<SubmitVotesOutput, ServiceError> {
        let round = self.get_round(session_id, round_id).await?;
        let votes = tally_ballots(&round.candidates, ballots);
        debug!(
            session_id = %session_id,
            round = %round_id,
            candidates = votes.len(),
            "Tallied ballots"
        );
        self.submit_votes(session_id, round_id, votes).await
    }

    /// Close the session
    pub async fn finalize_session(&self, session_id: &SessionId) -> Result<Session, ServiceError> {
        let mut session = self.repository.load_session(session_id).await?;
        session.status = Self::next_status(&session, SessionAction::FinalizeSession)?;
        self.repository.save_session(&session).await?;

        info!(session_id = %session.id, rounds = session.round_count(), "Finalized session");
        Ok(session)
    }

    /// Check the session is in the status `action` requires and look up where it leads
    fn next_status(session: &Session, action: SessionAction) -> Result<SessionStatus, DomainError> {
        SessionStateMachine::guard(session.status, action.required_status())?;
        SessionStateMachine::transition(session.status, action)
    }
}
