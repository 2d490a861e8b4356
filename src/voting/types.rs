//! Vote submissions and decision outcomes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single vote submission.
///
/// Created by the caller and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vote {
    pub shareholder_id: String,
    pub meeting_id: String,
    pub proposal_id: String,
}

impl Vote {
    pub fn new(
        shareholder_id: impl Into<String>,
        meeting_id: impl Into<String>,
        proposal_id: impl Into<String>,
    ) -> Self {
        Self {
            shareholder_id: shareholder_id.into(),
            meeting_id: meeting_id.into(),
            proposal_id: proposal_id.into(),
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vote[shareholder={}, meeting={}, proposal={}]",
            self.shareholder_id, self.meeting_id, self.proposal_id
        )
    }
}

/// Why a vote was rejected.
///
/// Callers branch on the variant (or on [`code`](Self::code)); the message is
/// for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    /// The shareholder already voted and the record date has been reached.
    RecordDatePassed { record_date: NaiveDate },
}

impl RejectionReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::RecordDatePassed { .. } => "RECORD_DATE_PASSED",
        }
    }

    /// Human-readable explanation (never empty).
    pub fn message(&self) -> String {
        match self {
            RejectionReason::RecordDatePassed { record_date } => format!(
                "Vote change not allowed after record date ({})",
                record_date
            ),
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// Outcome of processing one vote. Exactly one variant per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VoteResult {
    /// First vote from this shareholder.
    Accepted { shareholder_id: String },
    /// Shareholder already voted and changed their vote before the record date.
    Changed { shareholder_id: String },
    /// Shareholder already voted and tried to change it on or after the record date.
    Rejected {
        shareholder_id: String,
        reason: RejectionReason,
    },
}

impl VoteResult {
    pub fn shareholder_id(&self) -> &str {
        match self {
            VoteResult::Accepted { shareholder_id }
            | VoteResult::Changed { shareholder_id }
            | VoteResult::Rejected { shareholder_id, .. } => shareholder_id,
        }
    }

    /// True for `Accepted` and `Changed`.
    pub fn is_counted(&self) -> bool {
        !matches!(self, VoteResult::Rejected { .. })
    }
}

impl fmt::Display for VoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteResult::Accepted { shareholder_id } => {
                write!(f, "Accepted[shareholder={}]", shareholder_id)
            }
            VoteResult::Changed { shareholder_id } => {
                write!(f, "Changed[shareholder={}]", shareholder_id)
            }
            VoteResult::Rejected {
                shareholder_id,
                reason,
            } => write!(
                f,
                "Rejected[shareholder={}, reason={}]",
                shareholder_id,
                reason.message()
            ),
        }
    }
}
