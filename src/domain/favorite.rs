//! Favourite entry projection.
//!
//! A favourite keeps only the identity triple of a job. Membership identity is
//! the `(title, company)` pair rather than the job id: two listings with the
//! same title at the same company count as one favourite, even when the board
//! assigned them different identifiers. Every membership check in the app goes
//! through this rule, and it is pinned by tests in [`crate::app::favorites`]
//! so a future switch to id-based identity has to be made deliberately.

use serde::{Deserialize, Serialize};

use crate::domain::JobRecord;

/// A user-bookmarked job, reduced to its identity fields.
///
/// The `id` is retained only so the UI can link back to the detail page; it
/// plays no part in membership checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Identifier of the job this entry was created from.
    pub id: String,
    /// Position title at bookmark time.
    pub title: String,
    /// Company name at bookmark time.
    pub company: String,
}

impl FavoriteEntry {
    /// True iff this entry and `job` share the same `(title, company)` pair.
    #[must_use]
    pub fn matches(&self, job: &JobRecord) -> bool {
        self.title == job.title && self.company == job.company
    }
}

impl From<&JobRecord> for FavoriteEntry {
    fn from(job: &JobRecord) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignores_the_identifier() {
        let entry = FavoriteEntry::from(&JobRecord::new("5", "Dev", "Acme"));
        assert!(entry.matches(&JobRecord::new("9", "Dev", "Acme")));
    }

    #[test]
    fn matches_requires_both_title_and_company() {
        let entry = FavoriteEntry::from(&JobRecord::new("5", "Dev", "Acme"));
        assert!(!entry.matches(&JobRecord::new("5", "Dev", "Globex")));
        assert!(!entry.matches(&JobRecord::new("5", "Designer", "Acme")));
    }
}
