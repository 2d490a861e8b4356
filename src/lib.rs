//! Proxyvote - Shareholder Vote Recording
//!
//! Decides, per vote submission, whether it is a first vote, a change to a
//! prior vote, or a rejected late change, based on the meeting's record date.
//!
//! Key principles:
//! - Proposal validation gates every other check
//! - First votes are always accepted, even after the record date
//! - Vote changes are allowed strictly before the record date
//! - Voter state is owned by the caller, never global

pub mod voting;

pub use voting::{
    CatalogError, ProposalCatalog, RejectionReason, Vote, VoteError, VoteProcessor, VoteResult,
    VoterRegistry,
};
