//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and remote API responses, translating them into state changes and action
//! sequences. It is the primary control flow coordinator for a session.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the UI shell or the API bridge
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`AppState`] methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `NextPage`, `PreviousPage` and their applications-list
//!   counterparts
//! - **Search**: `SearchChanged`, `ClearSearch`
//! - **Favourites**: `ToggleFavorite`, `RemoveFavorite`
//! - **Detail & forms**: `OpenJob`, `SubmitApplication`
//! - **Remote**: `SessionStarted` (kicks off the initial fetches),
//!   `ApiResponse` (typed outcomes from the bridge)

use crate::app::state::LoadPhase;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{ApplicationDraft, JobRecord};
use crate::notify::NotificationKind;
use crate::remote::{ApiRequest, ApiRequestKind, ApiResponse};

/// Message shown when the job list fetch fails.
const JOBS_FAILED: &str = "Failed to load jobs. Please try again.";

/// Message shown when the applications fetch fails.
const APPLICATIONS_FAILED: &str = "Failed to load applications. Please try again.";

/// Events triggered by user input or remote responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially; the
/// execution model is single-threaded, so each event completes before the
/// next is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The browsing session began; triggers the initial fetches.
    SessionStarted,
    /// Moves the job list to the next page (capped at the last page).
    NextPage,
    /// Moves the job list to the previous page (floored at page 1).
    PreviousPage,
    /// Moves the applications list to the next page.
    ApplicationsNextPage,
    /// Moves the applications list to the previous page.
    ApplicationsPreviousPage,
    /// Replaces the search query and resets to page 1.
    SearchChanged {
        /// The new query text.
        query: String,
    },
    /// Clears the search query.
    ClearSearch,
    /// Adds or removes a job from the favourites, depending on membership.
    ToggleFavorite {
        /// The job whose card or detail button was clicked.
        job: JobRecord,
    },
    /// Removes the favourite at `index` (the favourites panel's trash icon).
    RemoveFavorite {
        /// Index into the favourites collection.
        index: usize,
    },
    /// Opens a job detail page; triggers a detail fetch.
    OpenJob {
        /// Identifier of the job to load.
        id: String,
    },
    /// Submits the application form for the currently selected job.
    SubmitApplication {
        /// Validated-on-entry form fields.
        draft: ApplicationDraft,
    },
    /// Wraps a response from the remote API bridge.
    ApiResponse(ApiResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns a `(needs_render, actions)` pair: `needs_render` tells the shell
/// whether visible state changed, `actions` are the side effects to run.
///
/// # Errors
///
/// Returns [`JobdeckError::OutOfRange`](crate::domain::JobdeckError::OutOfRange)
/// when a favourites removal index is stale. Fetch failures are NOT errors at
/// this level: they arrive as [`ApiResponse::Error`] events and are turned
/// into state changes and notifications.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::SessionStarted => {
            state.jobs_phase = LoadPhase::Loading;
            state.applications_phase = LoadPhase::Loading;
            Ok((
                true,
                vec![
                    Action::CallApi(ApiRequest::FetchJobs),
                    Action::CallApi(ApiRequest::FetchApplications),
                ],
            ))
        }
        Event::NextPage => {
            state.advance_page();
            Ok((true, vec![]))
        }
        Event::PreviousPage => {
            state.retreat_page();
            Ok((true, vec![]))
        }
        Event::ApplicationsNextPage => {
            state.advance_applications_page();
            Ok((true, vec![]))
        }
        Event::ApplicationsPreviousPage => {
            state.retreat_applications_page();
            Ok((true, vec![]))
        }
        Event::SearchChanged { query } => {
            state.set_search_query(query.clone());
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            state.set_search_query(String::new());
            Ok((true, vec![]))
        }
        Event::ToggleFavorite { job } => {
            let now_favorite = state.favorites.toggle(job)?;
            tracing::debug!(job_id = %job.id, now_favorite, "favorite toggled");
            Ok((true, vec![]))
        }
        Event::RemoveFavorite { index } => {
            state.favorites.remove_at(*index)?;
            Ok((true, vec![]))
        }
        Event::OpenJob { id } => {
            tracing::debug!(job_id = %id, "opening job detail");
            state.selected_job = None;
            Ok((
                true,
                vec![Action::CallApi(ApiRequest::FetchJob { id: id.clone() })],
            ))
        }
        Event::SubmitApplication { draft } => {
            let Some(job) = state.selected_job.as_ref() else {
                tracing::debug!("submit requested with no job selected");
                return Ok((false, vec![]));
            };

            match draft.clone().into_record(job) {
                Ok(record) => Ok((
                    false,
                    vec![Action::CallApi(ApiRequest::Submit { record })],
                )),
                Err(error) => Ok((
                    false,
                    vec![Action::notify(
                        NotificationKind::Error,
                        "Invalid Application",
                        error.to_string(),
                    )],
                )),
            }
        }
        Event::ApiResponse(response) => handle_api_response(state, response),
    }
}

/// Applies a remote response to state and derives follow-up actions.
fn handle_api_response(state: &mut AppState, response: &ApiResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        ApiResponse::JobsLoaded { jobs } => {
            tracing::debug!(count = jobs.len(), "jobs loaded");
            state.jobs.clone_from(jobs);
            state.jobs_phase = LoadPhase::Ready;
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        ApiResponse::JobLoaded { job } => {
            tracing::debug!(job_id = %job.id, "job detail loaded");
            state.selected_job = Some(job.clone());
            Ok((true, vec![]))
        }
        ApiResponse::ApplicationsLoaded { applications } => {
            tracing::debug!(count = applications.len(), "applications loaded");
            state.applications.clone_from(applications);
            state.applications_phase = LoadPhase::Ready;
            let total = crate::app::pagination::total_pages(
                state.applications.len(),
                state.page_size,
            );
            state.applications_page = state.applications_page.clamp(1, total);
            Ok((true, vec![]))
        }
        ApiResponse::Submitted { ack } => {
            tracing::debug!(ack_id = ?ack.id, "application submitted");
            Ok((
                false,
                vec![
                    Action::notify(
                        NotificationKind::Success,
                        "Application Submitted",
                        "Your application has been sent.",
                    ),
                    Action::CallApi(ApiRequest::FetchApplications),
                ],
            ))
        }
        ApiResponse::Error { request, message } => {
            tracing::error!(request = ?request, message = %message, "api request failed");
            Ok(handle_api_error(state, *request))
        }
    }
}

/// Routes an API failure to the phase it affects and the matching notification.
fn handle_api_error(state: &mut AppState, request: ApiRequestKind) -> (bool, Vec<Action>) {
    match request {
        ApiRequestKind::Jobs => {
            state.jobs_phase = LoadPhase::Failed(JOBS_FAILED.to_string());
            (
                true,
                vec![Action::notify(
                    NotificationKind::Error,
                    "Loading Failed",
                    JOBS_FAILED,
                )],
            )
        }
        ApiRequestKind::Applications => {
            state.applications_phase = LoadPhase::Failed(APPLICATIONS_FAILED.to_string());
            (
                true,
                vec![Action::notify(
                    NotificationKind::Error,
                    "Loading Failed",
                    APPLICATIONS_FAILED,
                )],
            )
        }
        ApiRequestKind::JobDetail => (
            false,
            vec![Action::notify(
                NotificationKind::Error,
                "Loading Failed",
                "Failed to load job details",
            )],
        ),
        ApiRequestKind::Submit => (
            false,
            vec![Action::notify(
                NotificationKind::Error,
                "Submission Failed",
                "Failed to submit application. Please try again.",
            )],
        ),
    }
}

/// Short name of an event for span fields, without its payload.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::SessionStarted => "session_started",
        Event::NextPage => "next_page",
        Event::PreviousPage => "previous_page",
        Event::ApplicationsNextPage => "applications_next_page",
        Event::ApplicationsPreviousPage => "applications_previous_page",
        Event::SearchChanged { .. } => "search_changed",
        Event::ClearSearch => "clear_search",
        Event::ToggleFavorite { .. } => "toggle_favorite",
        Event::RemoveFavorite { .. } => "remove_favorite",
        Event::OpenJob { .. } => "open_job",
        Event::SubmitApplication { .. } => "submit_application",
        Event::ApiResponse(_) => "api_response",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobdeckError;
    use crate::notify::TracingSink;

    fn state() -> AppState {
        AppState::new(8, Box::new(TracingSink))
    }

    fn loaded_state(n: usize) -> AppState {
        let mut s = state();
        let jobs: Vec<JobRecord> = (1..=n)
            .map(|i| JobRecord::new(i.to_string(), format!("Job {i}"), "Acme"))
            .collect();
        let (_, _) = handle_event(&mut s, &Event::ApiResponse(ApiResponse::JobsLoaded { jobs }))
            .unwrap();
        s
    }

    #[test]
    fn session_start_requests_both_collections() {
        let mut s = state();
        let (_, actions) = handle_event(&mut s, &Event::SessionStarted).unwrap();

        assert_eq!(
            actions,
            vec![
                Action::CallApi(ApiRequest::FetchJobs),
                Action::CallApi(ApiRequest::FetchApplications),
            ]
        );
    }

    #[test]
    fn jobs_loaded_fills_state_and_marks_ready() {
        let s = loaded_state(20);

        assert_eq!(s.jobs.len(), 20);
        assert_eq!(s.filtered_jobs.len(), 20);
        assert_eq!(s.jobs_phase, LoadPhase::Ready);
    }

    #[test]
    fn page_navigation_clamps() {
        let mut s = loaded_state(20);

        for _ in 0..5 {
            handle_event(&mut s, &Event::NextPage).unwrap();
        }
        assert_eq!(s.current_page, 3);

        for _ in 0..5 {
            handle_event(&mut s, &Event::PreviousPage).unwrap();
        }
        assert_eq!(s.current_page, 1);
    }

    #[test]
    fn jobs_fetch_failure_sets_phase_and_notifies() {
        let mut s = state();
        let (_, actions) = handle_event(
            &mut s,
            &Event::ApiResponse(ApiResponse::Error {
                request: ApiRequestKind::Jobs,
                message: "connection refused".to_string(),
            }),
        )
        .unwrap();

        assert_eq!(s.jobs_phase, LoadPhase::Failed(JOBS_FAILED.to_string()));
        assert!(matches!(
            actions.as_slice(),
            [Action::Notify { kind: NotificationKind::Error, .. }]
        ));
    }

    #[test]
    fn toggle_favorite_flips_membership() {
        let mut s = loaded_state(3);
        let job = s.jobs[0].clone();

        handle_event(&mut s, &Event::ToggleFavorite { job: job.clone() }).unwrap();
        assert!(s.favorites.is_favorite(&job));

        handle_event(&mut s, &Event::ToggleFavorite { job: job.clone() }).unwrap();
        assert!(!s.favorites.is_favorite(&job));
    }

    #[test]
    fn stale_remove_index_surfaces_out_of_range() {
        let mut s = loaded_state(3);

        let err = handle_event(&mut s, &Event::RemoveFavorite { index: 0 }).unwrap_err();
        assert!(matches!(err, JobdeckError::OutOfRange { .. }));
    }

    #[test]
    fn open_job_clears_selection_and_requests_detail() {
        let mut s = loaded_state(3);
        s.selected_job = Some(s.jobs[0].clone());

        let (_, actions) =
            handle_event(&mut s, &Event::OpenJob { id: "2".to_string() }).unwrap();

        assert!(s.selected_job.is_none());
        assert_eq!(
            actions,
            vec![Action::CallApi(ApiRequest::FetchJob { id: "2".to_string() })]
        );
    }

    #[test]
    fn submit_with_valid_draft_emits_a_submit_request() {
        let mut s = loaded_state(3);
        s.selected_job = Some(s.jobs[0].clone());

        let draft = ApplicationDraft {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            cover_letter: None,
            resume: None,
        };

        let (_, actions) = handle_event(&mut s, &Event::SubmitApplication { draft }).unwrap();

        match actions.as_slice() {
            [Action::CallApi(ApiRequest::Submit { record })] => {
                assert_eq!(record.job_id, "1");
                assert_eq!(record.job_title, "Job 1");
                assert!(record.resume.is_placeholder());
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn submit_with_invalid_draft_notifies_instead_of_calling_the_api() {
        let mut s = loaded_state(3);
        s.selected_job = Some(s.jobs[0].clone());

        let draft = ApplicationDraft {
            full_name: "A".to_string(),
            email: "ada@example.com".to_string(),
            cover_letter: None,
            resume: None,
        };

        let (_, actions) = handle_event(&mut s, &Event::SubmitApplication { draft }).unwrap();

        assert!(matches!(
            actions.as_slice(),
            [Action::Notify { kind: NotificationKind::Error, .. }]
        ));
    }

    #[test]
    fn submit_without_a_selected_job_is_a_no_op() {
        let mut s = loaded_state(3);

        let draft = ApplicationDraft {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            cover_letter: None,
            resume: None,
        };

        let (rerender, actions) =
            handle_event(&mut s, &Event::SubmitApplication { draft }).unwrap();

        assert!(!rerender);
        assert!(actions.is_empty());
    }

    #[test]
    fn successful_submission_refreshes_the_applications_list() {
        let mut s = loaded_state(3);
        let (_, actions) = handle_event(
            &mut s,
            &Event::ApiResponse(ApiResponse::Submitted {
                ack: crate::remote::Acknowledgement { id: Some("app-1".to_string()) },
            }),
        )
        .unwrap();

        assert!(actions.contains(&Action::CallApi(ApiRequest::FetchApplications)));
        assert!(matches!(
            actions.first(),
            Some(Action::Notify { kind: NotificationKind::Success, .. })
        ));
    }
}
