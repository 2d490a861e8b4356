//! Property-based tests for the vote decision engine
//!
//! Tests for:
//! - Invalid proposals never mutate the registry
//! - New shareholders are always accepted regardless of dates
//! - Repeat votes split on the record date (Changed before, Rejected on/after)

use super::catalog::ProposalCatalog;
use super::engine::VoteProcessor;
use super::error::VoteError;
use super::registry::VoterRegistry;
use super::types::{Vote, VoteResult};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn day(offset: i64) -> NaiveDate {
    base_date() + Duration::days(offset)
}

/// Any (meeting, proposal) pair from the standard catalog.
fn valid_pair() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        Just(("M1", "P1")),
        Just(("M1", "P2")),
        Just(("M1", "P3")),
        Just(("M2", "P4")),
        Just(("M2", "P5")),
        Just(("M3", "P6")),
        Just(("M3", "P7")),
    ]
    .prop_map(|(m, p)| (m.to_string(), p.to_string()))
}

fn shareholder() -> impl Strategy<Value = String> {
    "SH[0-9]{1,4}"
}

fn registry() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(shareholder(), 0..20)
}

proptest! {
    /// Property: invalid proposals leave the registry untouched
    #[test]
    fn invalid_proposal_never_mutates_registry(
        existing in registry(),
        sh in shareholder(),
        meeting in "[A-Z]{1,3}[0-9]?",
        proposal in "[A-Za-z]{1,8}",
        record_offset in 0i64..60,
        current_offset in 0i64..60,
    ) {
        let processor = VoteProcessor::default();
        prop_assume!(!processor.catalog().is_valid(&meeting, &proposal));

        let mut voters: VoterRegistry = existing.iter().cloned().collect();
        let before = voters.clone();

        let result = processor.process_vote(
            &Vote::new(sh, meeting.clone(), proposal.clone()),
            &mut voters,
            day(record_offset),
            day(current_offset),
        );

        prop_assert_eq!(
            result,
            Err(VoteError::InvalidProposal { meeting_id: meeting, proposal_id: proposal })
        );
        prop_assert_eq!(voters, before);
    }

    /// Property: a shareholder not yet in the registry is always accepted
    #[test]
    fn new_shareholder_always_accepted(
        existing in registry(),
        sh in shareholder(),
        (meeting, proposal) in valid_pair(),
        record_offset in 0i64..60,
        current_offset in 0i64..60,
    ) {
        prop_assume!(!existing.contains(&sh));

        let processor = VoteProcessor::default();
        let mut voters: VoterRegistry = existing.iter().cloned().collect();
        let before_len = voters.len();

        let result = processor
            .process_vote(
                &Vote::new(sh.clone(), meeting, proposal),
                &mut voters,
                day(record_offset),
                day(current_offset),
            )
            .unwrap();

        prop_assert_eq!(result, VoteResult::Accepted { shareholder_id: sh.clone() });
        prop_assert!(voters.contains(&sh));
        prop_assert_eq!(voters.len(), before_len + 1);
    }

    /// Property: repeat votes are Changed strictly before the record date, Rejected otherwise
    #[test]
    fn repeat_vote_splits_on_record_date(
        existing in registry(),
        sh in shareholder(),
        (meeting, proposal) in valid_pair(),
        record_offset in 0i64..60,
        current_offset in 0i64..60,
    ) {
        let processor = VoteProcessor::default();
        let mut voters: VoterRegistry = existing.iter().cloned().collect();
        voters.record(sh.clone());
        let before = voters.clone();

        let record_date = day(record_offset);
        let current_date = day(current_offset);

        let result = processor
            .process_vote(
                &Vote::new(sh.clone(), meeting, proposal),
                &mut voters,
                record_date,
                current_date,
            )
            .unwrap();

        if current_date < record_date {
            prop_assert_eq!(result, VoteResult::Changed { shareholder_id: sh });
        } else {
            match result {
                VoteResult::Rejected { shareholder_id, reason } => {
                    prop_assert_eq!(shareholder_id, sh);
                    prop_assert!(!reason.message().is_empty());
                }
                other => prop_assert!(false, "expected Rejected, got {:?}", other),
            }
        }
        prop_assert_eq!(voters, before);
    }

    /// Property: catalog lookup is exact, any case change misses
    #[test]
    fn catalog_lookup_is_case_sensitive((meeting, proposal) in valid_pair()) {
        let catalog = ProposalCatalog::standard();
        prop_assert!(catalog.is_valid(&meeting, &proposal));
        prop_assert!(!catalog.is_valid(&meeting.to_lowercase(), &proposal));
        prop_assert!(!catalog.is_valid(&meeting, &proposal.to_lowercase()));
    }
}
