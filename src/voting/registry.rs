//! Voter registry: shareholders who have voted in one meeting's window.
//!
//! Owned by the caller. The engine reads membership and inserts on a
//! first-time acceptance; it never clears the registry.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Set of shareholder ids that have cast at least one vote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterRegistry {
    voters: HashSet<String>,
}

impl VoterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, shareholder_id: &str) -> bool {
        self.voters.contains(shareholder_id)
    }

    /// Record a shareholder. Returns `false` if they were already present.
    pub fn record(&mut self, shareholder_id: impl Into<String>) -> bool {
        self.voters.insert(shareholder_id.into())
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.voters.iter().map(String::as_str)
    }

    /// Shareholder ids in sorted order (stable output for display).
    pub fn sorted(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.iter().collect();
        ids.sort_unstable();
        ids
    }
}

impl<S: Into<String>> FromIterator<S> for VoterRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            voters: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for VoterRegistry {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.voters.extend(iter.into_iter().map(Into::into));
    }
}

impl fmt::Display for VoterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.sorted().join(", "))
    }
}
