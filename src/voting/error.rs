//! Error types for vote processing and catalog construction.

use thiserror::Error;

/// Result type for vote processing.
pub type ProcessResult<T> = Result<T, VoteError>;

/// Errors returned by [`VoteProcessor::process_vote`](super::engine::VoteProcessor::process_vote).
///
/// Recoverable: the caller branches on the variant and reports it back to the
/// submitter. Retrying the same input yields the same error until the
/// catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    /// Unknown meeting, or a proposal that is not on the meeting's agenda.
    #[error("Proposal '{proposal_id}' is not valid for meeting '{meeting_id}'")]
    InvalidProposal {
        meeting_id: String,
        proposal_id: String,
    },
}

impl VoteError {
    pub(crate) fn invalid_proposal(meeting_id: &str, proposal_id: &str) -> Self {
        VoteError::InvalidProposal {
            meeting_id: meeting_id.to_string(),
            proposal_id: proposal_id.to_string(),
        }
    }
}

/// Errors that can occur while building a [`ProposalCatalog`](super::catalog::ProposalCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Meeting id must not be empty")]
    EmptyMeetingId,

    #[error("Meeting '{meeting_id}' has no proposals")]
    EmptyProposalSet { meeting_id: String },

    #[error("Meeting '{meeting_id}' is defined more than once")]
    DuplicateMeeting { meeting_id: String },
}
