//! Shareholder vote processing.
//!
//! - `catalog`: which proposals are open at which meeting
//! - `registry`: caller-owned set of shareholders who have voted
//! - `engine`: the record-date vote-change decision
//!
//! The engine is synchronous and holds no voter state. Callers own one
//! `VoterRegistry` per meeting and serialize access to it.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod registry;
pub mod types;

#[cfg(test)]
mod proptests;

pub use catalog::ProposalCatalog;
pub use engine::VoteProcessor;
pub use error::{CatalogError, ProcessResult, VoteError};
pub use registry::VoterRegistry;
pub use types::{RejectionReason, Vote, VoteResult};
