//! Session domain entities

use super::status::SessionStatus;
use crate::core::error::DomainError;
use crate::core::ids::{RoundId, SessionId};
use serde::{Deserialize, Serialize};

/// Kind of election a session runs; selects the decision strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    /// Solo audition: soloist plus understudy
    Solo,
    /// Officer election for a single role
    Exec,
    /// Callback triage over fixed options
    Callback,
    /// Yes/No membership proposal
    Pandahood,
}

impl SessionType {
    pub const ALL: [SessionType; 4] = [
        SessionType::Solo,
        SessionType::Exec,
        SessionType::Callback,
        SessionType::Pandahood,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Solo => "solo",
            SessionType::Exec => "exec",
            SessionType::Callback => "callback",
            SessionType::Pandahood => "pandahood",
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solo" => Ok(SessionType::Solo),
            "exec" => Ok(SessionType::Exec),
            "callback" => Ok(SessionType::Callback),
            "pandahood" => Ok(SessionType::Pandahood),
            other => Err(format!(
                "Unknown session type: {}. Valid: solo, exec, callback, pandahood",
                other
            )),
        }
    }
}

/// Per-session configuration fixed at start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfiguration {
    /// Number of eligible voters; thresholds are fractions of this
    pub voter_count: u32,
    /// Proposal text for membership votes
    pub proposal: Option<String>,
    /// Song performed in an audition
    pub song: Option<String>,
    /// Officer role being elected
    pub role: Option<String>,
}

impl SessionConfiguration {
    pub fn new(voter_count: u32) -> Self {
        Self {
            voter_count,
            proposal: None,
            song: None,
            role: None,
        }
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

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.voter_count == 0 {
            return Err(DomainError::InvalidConfiguration(
                "voter_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A multi-round voting session (Entity)
///
/// Owned by the orchestration layer; the core only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub status: SessionStatus,
    #[serde(rename = "type")]
    pub session_type: Option<SessionType>,
    pub configuration: Option<SessionConfiguration>,
    /// Seed candidates in their shuffled order
    #[serde(default)]
    pub initial_candidates: Vec<String>,
    /// Round references in creation order
    #[serde(default)]
    pub round_ids: Vec<RoundId>,
}

impl Session {
    /// A fresh, unconfigured session
    pub fn draft(id: SessionId) -> Self {
        Self {
            id,
            status: SessionStatus::Draft,
            session_type: None,
            configuration: None,
            initial_candidates: Vec::new(),
            round_ids: Vec::new(),
        }
    }

    /// The session's election type, once started
    pub fn require_type(&self) -> Result<SessionType, DomainError> {
        self.session_type.ok_or_else(|| {
            DomainError::conflict(format!("Session {} has no election type", self.id))
        })
    }

    /// The session's configuration, once started
    pub fn require_configuration(&self) -> Result<&SessionConfiguration, DomainError> {
        self.configuration.as_ref().ok_or_else(|| {
            DomainError::conflict(format!("Session {} has no configuration", self.id))
        })
    }

    pub fn round_count(&self) -> usize {
        self.round_ids.len()
    }

    pub fn latest_round_id(&self) -> Option<&RoundId> {
        self.round_ids.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_type() {
        assert_eq!("solo".parse::<SessionType>().ok(), Some(SessionType::Solo));
        assert_eq!("EXEC".parse::<SessionType>().ok(), Some(SessionType::Exec));
        assert_eq!(
            " callback ".parse::<SessionType>().ok(),
            Some(SessionType::Callback)
        );
        assert_eq!(
            "pandahood".parse::<SessionType>().ok(),
            Some(SessionType::Pandahood)
        );
        assert!("membership".parse::<SessionType>().is_err());
    }

    #[test]
    fn test_session_type_roundtrips_through_display() {
        for kind in SessionType::ALL {
            assert_eq!(kind.to_string().parse::<SessionType>().ok(), Some(kind));
        }
    }

    #[test]
    fn test_configuration_builder() {
        let config = SessionConfiguration::new(20)
            .with_song("Mirrors")
            .with_role("Music Director");
        assert_eq!(config.voter_count, 20);
        assert_eq!(config.song.as_deref(), Some("Mirrors"));
        assert_eq!(config.role.as_deref(), Some("Music Director"));
        assert_eq!(config.proposal, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_voter_count_is_invalid() {
        let err = SessionConfiguration::new(0).validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_draft_session_has_no_type() {
        let session = Session::draft(SessionId::new("s-1"));
        assert_eq!(session.status, SessionStatus::Draft);
        assert!(session.require_type().is_err());
        assert!(session.require_configuration().is_err());
        assert_eq!(session.round_count(), 0);
        assert!(session.latest_round_id().is_none());
    }

    #[test]
    fn test_session_serializes_type_field() {
        let mut session = Session::draft(SessionId::new("s-1"));
        session.session_type = Some(SessionType::Pandahood);
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["type"], "pandahood");
        assert_eq!(value["status"], "draft");
    }
}
