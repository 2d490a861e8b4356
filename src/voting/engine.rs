//! Vote decision engine.
//!
//! Applies the record-date vote-change policy to one submission:
//!
//! 1. Proposal must be on the meeting's agenda (gates everything else)
//! 2. First vote from a shareholder is always accepted and recorded
//! 3. A repeat vote before the record date is a change
//! 4. A repeat vote on or after the record date is rejected
//!
//! The engine holds no voter state. The registry is passed in by the caller,
//! who serializes access to it per meeting.

use super::catalog::ProposalCatalog;
use super::error::{ProcessResult, VoteError};
use super::registry::VoterRegistry;
use super::types::{RejectionReason, Vote, VoteResult};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Decides the outcome of vote submissions against a proposal catalog.
#[derive(Debug, Clone, Default)]
pub struct VoteProcessor {
    catalog: ProposalCatalog,
}

impl VoteProcessor {
    pub fn new(catalog: ProposalCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ProposalCatalog {
        &self.catalog
    }

    /// Process a vote for a shareholder meeting.
    ///
    /// On a first vote the shareholder is inserted into `voters`; no other
    /// path touches the registry. Dates compare by calendar day only.
    ///
    /// # Errors
    /// [`VoteError::InvalidProposal`] if the meeting is unknown or the
    /// proposal is not on its agenda. The registry is left untouched.
    pub fn process_vote(
        &self,
        vote: &Vote,
        voters: &mut VoterRegistry,
        record_date: NaiveDate,
        current_date: NaiveDate,
    ) -> ProcessResult<VoteResult> {
        self.validate_proposal(&vote.meeting_id, &vote.proposal_id)?;

        let shareholder_id = vote.shareholder_id.clone();

        if !voters.contains(&vote.shareholder_id) {
            voters.record(vote.shareholder_id.as_str());
            debug!(
                shareholder = %vote.shareholder_id,
                meeting = %vote.meeting_id,
                proposal = %vote.proposal_id,
                "first vote accepted"
            );
            return Ok(VoteResult::Accepted { shareholder_id });
        }

        if current_date < record_date {
            debug!(
                shareholder = %vote.shareholder_id,
                meeting = %vote.meeting_id,
                proposal = %vote.proposal_id,
                %current_date,
                %record_date,
                "vote changed before record date"
            );
            return Ok(VoteResult::Changed { shareholder_id });
        }

        debug!(
            shareholder = %vote.shareholder_id,
            meeting = %vote.meeting_id,
            %current_date,
            %record_date,
            "vote change rejected, record date reached"
        );
        Ok(VoteResult::Rejected {
            shareholder_id,
            reason: RejectionReason::RecordDatePassed { record_date },
        })
    }

    fn validate_proposal(&self, meeting_id: &str, proposal_id: &str) -> ProcessResult<()> {
        if self.catalog.is_valid(meeting_id, proposal_id) {
            return Ok(());
        }

        warn!(
            meeting = %meeting_id,
            proposal = %proposal_id,
            "proposal not on meeting agenda"
        );
        Err(VoteError::invalid_proposal(meeting_id, proposal_id))
    }
}
