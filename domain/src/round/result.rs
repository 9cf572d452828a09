//! Round result shapes
//!
//! Each strategy tags its result with its own type so one storage shape
//! can hold any of the four variants.

use crate::session::entities::SessionType;
use serde::{Deserialize, Serialize};

/// Solo audition outcome: primary winner plus runner-up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoloWinners {
    pub soloist: Option<String>,
    pub understudy: Option<String>,
}

impl SoloWinners {
    pub fn new(soloist: Option<String>, understudy: Option<String>) -> Self {
        Self {
            soloist,
            understudy,
        }
    }

    /// Soloist decided but understudy still open
    pub fn awaits_understudy(&self) -> bool {
        self.soloist.is_some() && self.understudy.is_none()
    }
}

/// Officer election outcome
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecWinners {
    pub role: Option<String>,
}

/// Callback triage outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallbackBucket {
    #[serde(rename = "Definite callback")]
    Definite,
    #[serde(rename = "Possible callback")]
    Possible,
    #[serde(rename = "No callback")]
    NoCallback,
}

impl CallbackBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackBucket::Definite => "Definite callback",
            CallbackBucket::Possible => "Possible callback",
            CallbackBucket::NoCallback => "No callback",
        }
    }
}

/// Membership proposal outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalBucket {
    #[serde(rename = "Proposal passed")]
    Passed,
    #[serde(rename = "Proposal struck")]
    Struck,
}

impl ProposalBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalBucket::Passed => "Proposal passed",
            ProposalBucket::Struck => "Proposal struck",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackWinners {
    pub bucket: CallbackBucket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PandahoodWinners {
    pub bucket: ProposalBucket,
}

/// Decision attached to a finalized round
///
/// Serializes as `{"type": "...", "winners": {...}, "is_complete": bool}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundResult {
    Solo {
        winners: SoloWinners,
        is_complete: bool,
    },
    Exec {
        winners: ExecWinners,
        is_complete: bool,
    },
    Callback {
        winners: CallbackWinners,
        is_complete: bool,
    },
    Pandahood {
        winners: PandahoodWinners,
        is_complete: bool,
    },
}

impl RoundResult {
    pub fn solo(soloist: Option<String>, understudy: Option<String>, is_complete: bool) -> Self {
        RoundResult::Solo {
            winners: SoloWinners::new(soloist, understudy),
            is_complete,
        }
    }

    pub fn exec(role: Option<String>, is_complete: bool) -> Self {
        RoundResult::Exec {
            winners: ExecWinners { role },
            is_complete,
        }
    }

    pub fn callback(bucket: CallbackBucket, is_complete: bool) -> Self {
        RoundResult::Callback {
            winners: CallbackWinners { bucket },
            is_complete,
        }
    }

    pub fn pandahood(bucket: ProposalBucket, is_complete: bool) -> Self {
        RoundResult::Pandahood {
            winners: PandahoodWinners { bucket },
            is_complete,
        }
    }

    /// Whether the election is decided and needs no further round
    pub fn is_complete(&self) -> bool {
        match self {
            RoundResult::Solo { is_complete, .. }
            | RoundResult::Exec { is_complete, .. }
            | RoundResult::Callback { is_complete, .. }
            | RoundResult::Pandahood { is_complete, .. } => *is_complete,
        }
    }

    pub fn session_type(&self) -> SessionType {
        match self {
            RoundResult::Solo { .. } => SessionType::Solo,
            RoundResult::Exec { .. } => SessionType::Exec,
            RoundResult::Callback { .. } => SessionType::Callback,
            RoundResult::Pandahood { .. } => SessionType::Pandahood,
        }
    }

    pub fn solo_winners(&self) -> Option<&SoloWinners> {
        match self {
            RoundResult::Solo { winners, .. } => Some(winners),
            _ => None,
        }
    }

    /// Human-readable winners line, e.g. `soloist=Alice, understudy=-`
    pub fn winners_summary(&self) -> String {
        fn or_dash(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("-")
        }

        match self {
            RoundResult::Solo { winners, .. } => format!(
                "soloist={}, understudy={}",
                or_dash(&winners.soloist),
                or_dash(&winners.understudy)
            ),
            RoundResult::Exec { winners, .. } => format!("role={}", or_dash(&winners.role)),
            RoundResult::Callback { winners, .. } => {
                format!("bucket={}", winners.bucket.as_str())
            }
            RoundResult::Pandahood { winners, .. } => {
                format!("bucket={}", winners.bucket.as_str())
            }
        }
    }
}
