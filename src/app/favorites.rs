//! Session-lived favourites store.
//!
//! [`FavoritesStore`] replaces the ambient context state of a typical web UI
//! with an explicitly constructed object: created empty at session start,
//! passed by reference to whichever views need it, and dropped with the
//! session. Nothing here is persisted.
//!
//! Two deliberate contracts are worth calling out:
//!
//! - Membership identity is the `(title, company)` pair, not the job id (see
//!   [`FavoriteEntry`]). [`add`](FavoritesStore::add) performs no internal
//!   de-duplication; call sites check
//!   [`is_favorite`](FavoritesStore::is_favorite) first.
//! - Removal is by index and an out-of-range index is an explicit
//!   [`OutOfRange`](crate::domain::JobdeckError::OutOfRange) error rather
//!   than a silent no-op.

use std::fmt;

use crate::domain::error::{JobdeckError, Result};
use crate::domain::{FavoriteEntry, JobRecord};
use crate::notify::{NotificationKind, NotificationSink};

/// Ordered collection of the session's favourited jobs.
///
/// Mutations notify the sink handed in at construction so the embedding UI
/// can show its toasts without the store knowing anything about rendering.
pub struct FavoritesStore {
    /// Entries in insertion order.
    entries: Vec<FavoriteEntry>,
    /// Observer for add/remove side effects.
    sink: Box<dyn NotificationSink>,
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl FavoritesStore {
    /// Creates an empty store reporting to `sink`.
    #[must_use]
    pub fn new(sink: Box<dyn NotificationSink>) -> Self {
        Self {
            entries: Vec::new(),
            sink,
        }
    }

    /// Appends the favourite projection of `job` to the end of the collection.
    ///
    /// No membership check is performed here; callers gate on
    /// [`is_favorite`](Self::is_favorite) first. Notifies the sink with the
    /// job's title.
    pub fn add(&mut self, job: &JobRecord) {
        tracing::debug!(job_id = %job.id, title = %job.title, "adding favorite");

        self.entries.push(FavoriteEntry::from(job));
        self.sink.notify(
            NotificationKind::Success,
            "Added to Favorites",
            &format!("{} has been added to your favorites.", job.title),
        );
    }

    /// Removes and returns the entry at `index`.
    ///
    /// Notifies the sink with the removed job's title after a successful
    /// removal.
    ///
    /// # Errors
    ///
    /// Returns [`JobdeckError::OutOfRange`] when `index` is past the end of
    /// the collection; the sink is not notified in that case.
    pub fn remove_at(&mut self, index: usize) -> Result<FavoriteEntry> {
        if index >= self.entries.len() {
            return Err(JobdeckError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        let removed = self.entries.remove(index);
        tracing::debug!(job_id = %removed.id, title = %removed.title, "removed favorite");

        self.sink.notify(
            NotificationKind::Error,
            "Removed from Favorites",
            &format!("{} has been removed from your favorites.", removed.title),
        );
        Ok(removed)
    }

    /// True iff an entry matches `job`'s `(title, company)` pair.
    ///
    /// O(n) scan; fine at session scale, where the collection holds at most a
    /// few dozen entries.
    #[must_use]
    pub fn is_favorite(&self, job: &JobRecord) -> bool {
        self.entries.iter().any(|entry| entry.matches(job))
    }

    /// Index of the first entry matching `job`, if any.
    #[must_use]
    pub fn position_of(&self, job: &JobRecord) -> Option<usize> {
        self.entries.iter().position(|entry| entry.matches(job))
    }

    /// Adds `job` when absent, removes its first matching entry when present.
    ///
    /// Returns whether the job is a favourite after the call: `true` when it
    /// was just added, `false` when it was just removed.
    ///
    /// # Errors
    ///
    /// Propagates [`JobdeckError::OutOfRange`] from the removal path; with a
    /// position found by this method the index is always valid, so this only
    /// fails if the store was mutated between lookup and removal.
    pub fn toggle(&mut self, job: &JobRecord) -> Result<bool> {
        match self.position_of(job) {
            Some(index) => {
                self.remove_at(index)?;
                Ok(false)
            }
            None => {
                self.add(job);
                Ok(true)
            }
        }
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Number of favourited jobs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff nothing has been favourited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Sink that records every notification for assertions.
    #[derive(Clone, Default)]
    struct RecordingSink {
        seen: Rc<RefCell<Vec<(NotificationKind, String, String)>>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, kind: NotificationKind, title: &str, detail: &str) {
            self.seen
                .borrow_mut()
                .push((kind, title.to_string(), detail.to_string()));
        }
    }

    fn store() -> (FavoritesStore, RecordingSink) {
        let sink = RecordingSink::default();
        (FavoritesStore::new(Box::new(sink.clone())), sink)
    }

    #[test]
    fn add_then_is_favorite_matches_on_title_and_company() {
        let (mut favorites, _sink) = store();
        let job = JobRecord::new("1", "Dev", "Acme");

        favorites.add(&job);

        assert!(favorites.is_favorite(&job));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn is_favorite_ignores_the_job_identifier() {
        let (mut favorites, _sink) = store();
        favorites.add(&JobRecord::new("5", "Dev", "Acme"));

        // Same (title, company) under a different id still counts as a
        // favourite. Deliberate: changing this to id-based identity must be
        // an intentional decision, not a drive-by fix.
        assert!(favorites.is_favorite(&JobRecord::new("9", "Dev", "Acme")));
    }

    #[test]
    fn duplicate_pairs_are_appended_not_merged() {
        let (mut favorites, _sink) = store();
        favorites.add(&JobRecord::new("5", "Dev", "Acme"));
        favorites.add(&JobRecord::new("9", "Dev", "Acme"));

        assert_eq!(favorites.len(), 2);
        assert!(favorites.is_favorite(&JobRecord::new("7", "Dev", "Acme")));
    }

    #[test]
    fn remove_at_clears_membership() {
        let (mut favorites, _sink) = store();
        let job = JobRecord::new("1", "Dev", "Acme");
        favorites.add(&job);

        let removed = favorites.remove_at(0).unwrap();

        assert_eq!(removed.title, "Dev");
        assert!(!favorites.is_favorite(&job));
        assert!(favorites.is_empty());
    }

    #[test]
    fn remove_at_out_of_range_is_an_error_and_stays_silent() {
        let (mut favorites, sink) = store();
        favorites.add(&JobRecord::new("1", "Dev", "Acme"));
        let before = sink.seen.borrow().len();

        let err = favorites.remove_at(3).unwrap_err();

        assert!(matches!(
            err,
            JobdeckError::OutOfRange { index: 3, len: 1 }
        ));
        assert_eq!(favorites.len(), 1);
        assert_eq!(sink.seen.borrow().len(), before);
    }

    #[test]
    fn add_and_remove_notify_with_the_job_title() {
        let (mut favorites, sink) = store();
        favorites.add(&JobRecord::new("1", "Dev", "Acme"));
        favorites.remove_at(0).unwrap();

        let seen = sink.seen.borrow();
        assert_eq!(seen.len(), 2);

        let (kind, title, detail) = &seen[0];
        assert_eq!(*kind, NotificationKind::Success);
        assert_eq!(title, "Added to Favorites");
        assert!(detail.contains("Dev"));

        let (kind, title, detail) = &seen[1];
        assert_eq!(*kind, NotificationKind::Error);
        assert_eq!(title, "Removed from Favorites");
        assert!(detail.contains("Dev"));
    }

    #[test]
    fn toggle_round_trips() {
        let (mut favorites, _sink) = store();
        let job = JobRecord::new("1", "Dev", "Acme");

        assert!(favorites.toggle(&job).unwrap());
        assert!(favorites.is_favorite(&job));

        assert!(!favorites.toggle(&job).unwrap());
        assert!(!favorites.is_favorite(&job));
    }

    #[test]
    fn position_of_finds_the_first_match() {
        let (mut favorites, _sink) = store();
        favorites.add(&JobRecord::new("1", "Dev", "Acme"));
        favorites.add(&JobRecord::new("2", "Designer", "Globex"));

        assert_eq!(
            favorites.position_of(&JobRecord::new("8", "Designer", "Globex")),
            Some(1)
        );
        assert_eq!(favorites.position_of(&JobRecord::new("8", "PM", "Initech")), None);
    }
}
