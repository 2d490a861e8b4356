//! Proposal catalog: which proposals are open for voting at which meeting.
//!
//! The catalog is fixed once built. Lookups are exact and case-sensitive.

use super::error::CatalogError;
use std::collections::{BTreeMap, BTreeSet};

/// Agenda used when no meetings are configured.
const STANDARD_MEETINGS: &[(&str, &[&str])] = &[
    ("M1", &["P1", "P2", "P3"]),
    ("M2", &["P4", "P5"]),
    ("M3", &["P6", "P7"]),
];

/// Immutable mapping from meeting id to its set of valid proposal ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalCatalog {
    meetings: BTreeMap<String, BTreeSet<String>>,
}

impl ProposalCatalog {
    /// Build a catalog from `(meeting_id, proposal_ids)` pairs.
    ///
    /// Fails on an empty meeting id, a meeting without proposals, or a meeting
    /// listed twice. Duplicate proposal ids within a meeting collapse.
    pub fn new<M, P, I>(meetings: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (M, P)>,
        M: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let mut catalog = BTreeMap::new();

        for (meeting_id, proposals) in meetings {
            let meeting_id: String = meeting_id.into();
            if meeting_id.is_empty() {
                return Err(CatalogError::EmptyMeetingId);
            }

            let proposals: BTreeSet<String> = proposals.into_iter().map(Into::into).collect();
            if proposals.is_empty() {
                return Err(CatalogError::EmptyProposalSet { meeting_id });
            }

            if catalog.contains_key(&meeting_id) {
                return Err(CatalogError::DuplicateMeeting { meeting_id });
            }
            catalog.insert(meeting_id, proposals);
        }

        Ok(Self { meetings: catalog })
    }

    /// The built-in agenda: M1→{P1,P2,P3}, M2→{P4,P5}, M3→{P6,P7}.
    pub fn standard() -> Self {
        let meetings: BTreeMap<String, BTreeSet<String>> = STANDARD_MEETINGS
            .iter()
            .map(|(meeting, proposals)| {
                (
                    meeting.to_string(),
                    proposals.iter().map(|p| p.to_string()).collect::<BTreeSet<_>>(),
                )
            })
            .collect();

        Self { meetings }
    }

    /// Valid proposals for a meeting, or `None` if the meeting is unknown.
    pub fn valid_proposals(&self, meeting_id: &str) -> Option<&BTreeSet<String>> {
        self.meetings.get(meeting_id)
    }

    /// True if `proposal_id` is on the agenda of `meeting_id`.
    pub fn is_valid(&self, meeting_id: &str, proposal_id: &str) -> bool {
        self.valid_proposals(meeting_id)
            .is_some_and(|proposals| proposals.contains(proposal_id))
    }

    /// Meetings in id order.
    pub fn meetings(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.meetings
            .iter()
            .map(|(meeting, proposals)| (meeting.as_str(), proposals))
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

impl Default for ProposalCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = ProposalCatalog::standard();

        assert_eq!(catalog.len(), 3);
        assert!(catalog.is_valid("M1", "P1"));
        assert!(catalog.is_valid("M1", "P3"));
        assert!(catalog.is_valid("M2", "P5"));
        assert!(catalog.is_valid("M3", "P6"));

        let m2: Vec<&str> = catalog
            .valid_proposals("M2")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(m2, vec!["P4", "P5"]);
    }

    #[test]
    fn test_proposal_from_other_meeting_is_invalid() {
        let catalog = ProposalCatalog::standard();
        assert!(!catalog.is_valid("M1", "P4"));
        assert!(!catalog.is_valid("M3", "P1"));
    }

    #[test]
    fn test_unknown_meeting() {
        let catalog = ProposalCatalog::standard();
        assert!(catalog.valid_proposals("UNKNOWN").is_none());
        assert!(!catalog.is_valid("UNKNOWN", "P1"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = ProposalCatalog::standard();
        assert!(catalog.valid_proposals("m1").is_none());
        assert!(!catalog.is_valid("M1", "p1"));
        assert!(!catalog.is_valid("M1", " P1"));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog =
            ProposalCatalog::new([("AGM-2025", vec!["dividend", "auditor"])]).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.is_valid("AGM-2025", "auditor"));
        assert!(!catalog.is_valid("M1", "P1"));
    }

    #[test]
    fn test_empty_proposal_set_rejected() {
        let result = ProposalCatalog::new([("M9", Vec::<String>::new())]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::EmptyProposalSet {
                meeting_id: "M9".to_string()
            }
        );
    }

    #[test]
    fn test_empty_meeting_id_rejected() {
        let result = ProposalCatalog::new([("", vec!["P1"])]);
        assert_eq!(result.unwrap_err(), CatalogError::EmptyMeetingId);
    }

    #[test]
    fn test_duplicate_meeting_rejected() {
        let result = ProposalCatalog::new([("M1", vec!["P1"]), ("M1", vec!["P2"])]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateMeeting {
                meeting_id: "M1".to_string()
            }
        );
    }

    #[test]
    fn test_meetings_iterate_in_id_order() {
        let catalog = ProposalCatalog::new([
            ("M3", vec!["P6"]),
            ("M1", vec!["P1"]),
            ("M2", vec!["P4"]),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.meetings().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["M1", "M2", "M3"]);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(ProposalCatalog::default(), ProposalCatalog::standard());
    }
}
