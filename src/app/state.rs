//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for a
//! browsing session, along with methods for search filtering, page
//! navigation, and UI view model generation. It is the single source of truth
//! for all transient client state.
//!
//! # Architecture
//!
//! `AppState` separates fetched data (job and application snapshots) from
//! derived state (filtered jobs, current page) to keep transitions simple.
//! View models are computed on demand from state snapshots and contain only
//! display-ready data.
//!
//! # State Components
//!
//! - **Jobs**: Snapshot of listings from the most recent fetch
//! - **Filtered Jobs**: Subset after applying the search query
//! - **Pages**: 1-based page numbers for the jobs and applications lists
//! - **Favorites**: The session's [`FavoritesStore`]
//! - **Selected Job**: The record shown on the detail page, if any
//! - **Phases**: Loading/ready/failed status per fetched collection

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::app::favorites::FavoritesStore;
use crate::app::pagination::{self, PageWindow};
use crate::domain::{ApplicationRecord, JobRecord};
use crate::notify::NotificationSink;
use crate::ui::helpers::{applied_on_label, page_label, posted_on_label, salary_display};
use crate::ui::viewmodel::{
    ApplicationRow, ApplicationsViewModel, EmptyState, FavoriteButton, FavoriteRow,
    FavoritesViewModel, HeaderInfo, JobCardView, JobDetailViewModel, JobListViewModel,
    PaginationControls,
};

/// Load status of a remotely fetched collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// A fetch is in flight; nothing usable yet.
    Loading,
    /// The snapshot in state is current as of the last fetch.
    Ready,
    /// The last fetch failed; carries the user-facing message.
    Failed(String),
}

/// Central application state container.
///
/// Holds all transient client state for one browsing session. Mutated by the
/// event handler in response to user input and remote responses; view models
/// are computed on demand from state snapshots.
#[derive(Debug)]
pub struct AppState {
    /// Snapshot of job listings from the most recent successful fetch.
    pub jobs: Vec<JobRecord>,

    /// Jobs matching the current search query.
    ///
    /// Recomputed by `apply_search_filter()` after state changes; the page
    /// window is always taken over this list, never over `jobs` directly.
    pub filtered_jobs: Vec<JobRecord>,

    /// 1-based page number into `filtered_jobs`.
    ///
    /// Kept within `[1, total_pages]` by `apply_search_filter()` and the
    /// navigation methods.
    pub current_page: usize,

    /// Jobs shown per page; normalized to at least 1.
    pub page_size: usize,

    /// Current search query string; empty means no filtering.
    pub search_query: String,

    /// The session's favourites.
    pub favorites: FavoritesStore,

    /// Record shown on the detail page, populated by a detail fetch.
    pub selected_job: Option<JobRecord>,

    /// Snapshot of the user's submitted applications.
    pub applications: Vec<ApplicationRecord>,

    /// 1-based page number into `applications`.
    pub applications_page: usize,

    /// Load status of the jobs snapshot.
    pub jobs_phase: LoadPhase,

    /// Load status of the applications snapshot.
    pub applications_phase: LoadPhase,
}

impl AppState {
    /// Creates session state with an empty favourites store.
    ///
    /// Both collections start empty in the `Loading` phase, matching a UI
    /// that fetches immediately after mount. `page_size` is normalized to at
    /// least 1.
    #[must_use]
    pub fn new(page_size: usize, sink: Box<dyn NotificationSink>) -> Self {
        Self {
            jobs: Vec::new(),
            filtered_jobs: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
            search_query: String::new(),
            favorites: FavoritesStore::new(sink),
            selected_job: None,
            applications: Vec::new(),
            applications_page: 1,
            jobs_phase: LoadPhase::Loading,
            applications_phase: LoadPhase::Loading,
        }
    }

    /// Moves the jobs list to the next page, capped at the last page.
    pub fn advance_page(&mut self) {
        self.current_page = pagination::advance(self.current_page, self.job_pages());
    }

    /// Moves the jobs list to the previous page, floored at page 1.
    pub fn retreat_page(&mut self) {
        self.current_page = pagination::retreat(self.current_page);
    }

    /// Moves the applications list to the next page, capped at the last page.
    pub fn advance_applications_page(&mut self) {
        let total = pagination::total_pages(self.applications.len(), self.page_size);
        self.applications_page = pagination::advance(self.applications_page, total);
    }

    /// Moves the applications list to the previous page, floored at page 1.
    pub fn retreat_applications_page(&mut self) {
        self.applications_page = pagination::retreat(self.applications_page);
    }

    /// Replaces the search query, resets to page 1, and re-filters.
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.current_page = 1;
        self.apply_search_filter();
    }

    /// Applies the search query to the master job list.
    ///
    /// The query is split into whitespace tokens, lowercased, and every token
    /// must fuzzy-match somewhere in the job's title, company, or location.
    /// Updates `filtered_jobs` and clamps `current_page` into the new page
    /// range.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_jobs = self.jobs.len(),
            query_len = self.search_query.len()
        )
        .entered();

        let tokens: Vec<String> = self
            .search_query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        if tokens.is_empty() {
            self.filtered_jobs = self.jobs.clone();
        } else {
            let matcher = SkimMatcherV2::default();
            self.filtered_jobs = self
                .jobs
                .iter()
                .filter(|job| {
                    let haystack =
                        format!("{} {} {}", job.title, job.company, job.location).to_lowercase();
                    tokens
                        .iter()
                        .all(|token| matcher.fuzzy_match(&haystack, token).is_some())
                })
                .cloned()
                .collect();
        }

        self.current_page = self.current_page.clamp(1, self.job_pages());

        tracing::debug!(
            filtered_count = self.filtered_jobs.len(),
            current_page = self.current_page,
            "search filter applied"
        );
    }

    /// The slice of filtered jobs visible on the current page.
    #[must_use]
    pub fn current_page_jobs(&self) -> &[JobRecord] {
        pagination::page(&self.filtered_jobs, self.page_size, self.current_page)
    }

    /// Total pages for the filtered jobs list, at least 1.
    #[must_use]
    pub fn job_pages(&self) -> usize {
        pagination::total_pages(self.filtered_jobs.len(), self.page_size)
    }

    /// Computes the job list view model for the current page.
    ///
    /// Cards carry their favourite flag so the card renderer can show the
    /// right heart state without reaching into the store.
    #[must_use]
    pub fn compute_viewmodel(&self) -> JobListViewModel {
        let window = PageWindow::compute(
            self.page_size,
            self.current_page,
            self.filtered_jobs.len(),
        );

        let cards: Vec<JobCardView> = self
            .current_page_jobs()
            .iter()
            .map(|job| JobCardView {
                id: job.id.clone(),
                title: job.title.clone(),
                company: job.company.clone(),
                job_type: job.job_type.clone(),
                posted: posted_on_label(job.created_at),
                description: job.description.clone(),
                tags: job.tags.clone(),
                is_favorite: self.favorites.is_favorite(job),
            })
            .collect();

        let empty_state = cards.is_empty().then(|| EmptyState {
            message: "No jobs available.".to_string(),
        });

        JobListViewModel {
            header: HeaderInfo {
                title: format!("{} Jobs Available Now", self.filtered_jobs.len()),
            },
            cards,
            pagination: Self::controls(&window),
            empty_state,
            status: Self::status_text(&self.jobs_phase, "Loading jobs..."),
        }
    }

    /// Computes the detail view model for the selected job, if one is loaded.
    #[must_use]
    pub fn compute_detail_viewmodel(&self) -> Option<JobDetailViewModel> {
        let job = self.selected_job.as_ref()?;
        let is_favorite = self.favorites.is_favorite(job);

        Some(JobDetailViewModel {
            title: format!("{} Position", job.title),
            company: job.company.clone(),
            location: job.location.clone(),
            posted: job.posted_ago(),
            job_type: job.job_type.clone(),
            salary: salary_display(job.salary_range.as_deref()),
            description: job.description.clone(),
            logo: job.logo.clone(),
            favorite_button: FavoriteButton {
                is_favorite,
                label: if is_favorite {
                    "Added to favourite".to_string()
                } else {
                    "Add to favourite".to_string()
                },
            },
        })
    }

    /// Computes the favourites badge/panel view model.
    #[must_use]
    pub fn compute_favorites_viewmodel(&self) -> FavoritesViewModel {
        let rows: Vec<FavoriteRow> = self
            .favorites
            .entries()
            .iter()
            .map(|entry| FavoriteRow {
                job_id: entry.id.clone(),
                label: format!("{} at {}", entry.title, entry.company),
            })
            .collect();

        FavoritesViewModel {
            count: rows.len(),
            empty_text: rows
                .is_empty()
                .then(|| "No favorites added yet.".to_string()),
            rows,
        }
    }

    /// Computes the submitted-applications view model for its current page.
    #[must_use]
    pub fn compute_applications_viewmodel(&self) -> ApplicationsViewModel {
        let window = PageWindow::compute(
            self.page_size,
            self.applications_page,
            self.applications.len(),
        );

        let rows: Vec<ApplicationRow> = pagination::page(
            &self.applications,
            self.page_size,
            self.applications_page,
        )
        .iter()
        .map(|record| ApplicationRow {
            job_title: record.job_title.clone(),
            applicant: record.full_name.clone(),
            applied_on: applied_on_label(record.submitted_at),
        })
        .collect();

        let empty_state = rows.is_empty().then(|| EmptyState {
            message: "No applications submitted yet.".to_string(),
        });

        ApplicationsViewModel {
            header: HeaderInfo {
                title: format!("{} Applications Submitted", self.applications.len()),
            },
            rows,
            pagination: Self::controls(&window),
            empty_state,
            status: Self::status_text(&self.applications_phase, "Loading applications..."),
        }
    }

    /// Builds pagination controls from a page window.
    fn controls(window: &PageWindow) -> PaginationControls {
        PaginationControls {
            label: page_label(window.page_number, window.total_pages),
            current_page: window.page_number,
            total_pages: window.total_pages,
            can_advance: window.has_next(),
            can_retreat: window.has_previous(),
        }
    }

    /// Maps a load phase onto the status line shown above the list.
    fn status_text(phase: &LoadPhase, loading: &str) -> Option<String> {
        match phase {
            LoadPhase::Loading => Some(loading.to_string()),
            LoadPhase::Failed(message) => Some(message.clone()),
            LoadPhase::Ready => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::TracingSink;

    fn jobs(n: usize) -> Vec<JobRecord> {
        (1..=n)
            .map(|i| {
                let mut job = JobRecord::new(i.to_string(), format!("Job {i}"), "Acme");
                job.location = "Remote".to_string();
                job
            })
            .collect()
    }

    fn state_with(n: usize) -> AppState {
        let mut state = AppState::new(8, Box::new(TracingSink));
        state.jobs = jobs(n);
        state.jobs_phase = LoadPhase::Ready;
        state.apply_search_filter();
        state
    }

    #[test]
    fn page_navigation_clamps_at_both_ends() {
        let mut state = state_with(20);

        state.retreat_page();
        assert_eq!(state.current_page, 1);

        state.advance_page();
        state.advance_page();
        state.advance_page();
        state.advance_page();
        assert_eq!(state.current_page, 3);

        assert_eq!(state.current_page_jobs().len(), 4);
    }

    #[test]
    fn search_resets_to_page_one() {
        let mut state = state_with(20);
        state.advance_page();
        assert_eq!(state.current_page, 2);

        state.set_search_query("job 1".to_string());

        assert_eq!(state.current_page, 1);
        assert!(!state.filtered_jobs.is_empty());
        assert!(state.filtered_jobs.len() < 20);
    }

    #[test]
    fn clearing_the_query_restores_the_full_list() {
        let mut state = state_with(20);
        state.set_search_query("job 7".to_string());
        state.set_search_query(String::new());

        assert_eq!(state.filtered_jobs.len(), 20);
    }

    #[test]
    fn shrinking_snapshot_clamps_the_current_page() {
        let mut state = state_with(20);
        state.advance_page();
        state.advance_page();
        assert_eq!(state.current_page, 3);

        state.jobs = jobs(5);
        state.apply_search_filter();

        assert_eq!(state.current_page, 1);
        assert_eq!(state.current_page_jobs().len(), 5);
    }

    #[test]
    fn viewmodel_reports_counts_and_button_states() {
        let mut state = state_with(20);
        let vm = state.compute_viewmodel();

        assert_eq!(vm.header.title, "20 Jobs Available Now");
        assert_eq!(vm.cards.len(), 8);
        assert_eq!(vm.pagination.label, "Page 1 of 3");
        assert!(vm.pagination.can_advance);
        assert!(!vm.pagination.can_retreat);
        assert!(vm.empty_state.is_none());
        assert!(vm.status.is_none());

        state.advance_page();
        state.advance_page();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.pagination.label, "Page 3 of 3");
        assert!(!vm.pagination.can_advance);
        assert!(vm.pagination.can_retreat);
    }

    #[test]
    fn empty_list_still_reads_page_one_of_one() {
        let state = state_with(0);
        let vm = state.compute_viewmodel();

        assert_eq!(vm.pagination.label, "Page 1 of 1");
        assert_eq!(
            vm.empty_state.map(|e| e.message),
            Some("No jobs available.".to_string())
        );
    }

    #[test]
    fn cards_carry_their_favorite_flag() {
        let mut state = state_with(3);
        let job = state.jobs[1].clone();
        state.favorites.add(&job);

        let vm = state.compute_viewmodel();
        let flags: Vec<bool> = vm.cards.iter().map(|c| c.is_favorite).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn detail_viewmodel_tracks_favorite_button_state() {
        let mut state = state_with(1);
        let job = state.jobs[0].clone();
        state.selected_job = Some(job.clone());

        let vm = state.compute_detail_viewmodel().unwrap();
        assert_eq!(vm.favorite_button.label, "Add to favourite");

        state.favorites.add(&job);
        let vm = state.compute_detail_viewmodel().unwrap();
        assert!(vm.favorite_button.is_favorite);
        assert_eq!(vm.favorite_button.label, "Added to favourite");
    }

    #[test]
    fn favorites_viewmodel_formats_rows_and_empty_text() {
        let mut state = state_with(2);
        assert_eq!(
            state.compute_favorites_viewmodel().empty_text,
            Some("No favorites added yet.".to_string())
        );

        let job = state.jobs[0].clone();
        state.favorites.add(&job);
        let vm = state.compute_favorites_viewmodel();

        assert_eq!(vm.count, 1);
        assert_eq!(vm.rows[0].label, "Job 1 at Acme");
        assert_eq!(vm.rows[0].job_id, "1");
        assert!(vm.empty_text.is_none());
    }
}
