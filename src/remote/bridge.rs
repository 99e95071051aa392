//! Bridge executing API requests against the collaborator traits.
//!
//! [`ApiBridge`] is the single place where the core's request protocol meets
//! the [`JobFetcher`] and [`ApplicationSubmitter`] implementations. It never
//! returns an error: every trait failure is folded into
//! [`ApiResponse::Error`] carrying the originating request kind, because the
//! core treats remote failures as data, not as control flow.

use crate::domain::error::Result;
use crate::remote::client::{ApplicationSubmitter, JobFetcher};
use crate::remote::messages::{ApiRequest, ApiRequestKind, ApiResponse};

/// Executes [`ApiRequest`]s against boxed collaborator implementations.
///
/// The embedding shell owns one bridge per session and feeds each returned
/// [`ApiResponse`] back into the event handler.
pub struct ApiBridge {
    /// Read side of the remote API.
    fetcher: Box<dyn JobFetcher>,
    /// Write side of the remote API.
    submitter: Box<dyn ApplicationSubmitter>,
}

impl ApiBridge {
    /// Creates a bridge over the given collaborators.
    #[must_use]
    pub fn new(fetcher: Box<dyn JobFetcher>, submitter: Box<dyn ApplicationSubmitter>) -> Self {
        Self { fetcher, submitter }
    }

    /// Executes one request and returns its response.
    #[must_use]
    pub fn process(&self, request: ApiRequest) -> ApiResponse {
        let kind = request.kind();
        let _span = tracing::debug_span!("api_request", kind = ?kind).entered();

        match request {
            ApiRequest::FetchJobs => Self::respond(kind, self.fetcher.list_jobs(), |jobs| {
                tracing::debug!(count = jobs.len(), "jobs fetched");
                ApiResponse::JobsLoaded { jobs }
            }),
            ApiRequest::FetchJob { id } => {
                Self::respond(kind, self.fetcher.get_job(&id), |job| {
                    tracing::debug!(job_id = %job.id, "job fetched");
                    ApiResponse::JobLoaded { job }
                })
            }
            ApiRequest::FetchApplications => {
                Self::respond(kind, self.submitter.list_applications(), |applications| {
                    tracing::debug!(count = applications.len(), "applications fetched");
                    ApiResponse::ApplicationsLoaded { applications }
                })
            }
            ApiRequest::Submit { record } => {
                Self::respond(kind, self.submitter.submit(&record), |ack| {
                    tracing::debug!(ack_id = ?ack.id, "application submitted");
                    ApiResponse::Submitted { ack }
                })
            }
        }
    }

    /// Folds a trait result into a response, logging failures.
    fn respond<T, F>(kind: ApiRequestKind, result: Result<T>, on_success: F) -> ApiResponse
    where
        F: FnOnce(T) -> ApiResponse,
    {
        match result {
            Ok(value) => on_success(value),
            Err(e) => {
                tracing::debug!(kind = ?kind, error = %e, "api request failed");
                ApiResponse::Error {
                    request: kind,
                    message: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApplicationDraft, JobRecord};
    use crate::remote::memory::InMemoryApi;

    fn bridge_with(api: &InMemoryApi) -> ApiBridge {
        ApiBridge::new(Box::new(api.clone()), Box::new(api.clone()))
    }

    fn seeded_api() -> InMemoryApi {
        InMemoryApi::with_jobs(vec![
            JobRecord::new("1", "Dev", "Acme"),
            JobRecord::new("2", "Designer", "Globex"),
        ])
    }

    #[test]
    fn fetch_jobs_returns_the_seeded_listings() {
        let api = seeded_api();
        let response = bridge_with(&api).process(ApiRequest::FetchJobs);

        match response {
            ApiResponse::JobsLoaded { jobs } => assert_eq!(jobs.len(), 2),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn fetch_unknown_job_reports_a_detail_error() {
        let api = seeded_api();
        let response = bridge_with(&api).process(ApiRequest::FetchJob {
            id: "404".to_string(),
        });

        match response {
            ApiResponse::Error { request, message } => {
                assert_eq!(request, ApiRequestKind::JobDetail);
                assert!(message.contains("404"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn offline_api_maps_to_an_error_with_the_request_kind() {
        let api = seeded_api();
        api.set_offline(true);

        let response = bridge_with(&api).process(ApiRequest::FetchJobs);

        assert!(matches!(
            response,
            ApiResponse::Error { request: ApiRequestKind::Jobs, .. }
        ));
    }

    #[test]
    fn submit_is_acknowledged_and_recorded() {
        let api = seeded_api();
        let job = JobRecord::new("1", "Dev", "Acme");
        let record = ApplicationDraft {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            cover_letter: None,
            resume: None,
        }
        .into_record(&job)
        .unwrap();

        let response = bridge_with(&api).process(ApiRequest::Submit { record });

        match response {
            ApiResponse::Submitted { ack } => assert!(ack.id.is_some()),
            other => panic!("unexpected response: {other:?}"),
        }
        assert_eq!(api.submitted().len(), 1);
        assert_eq!(api.submitted()[0].job_id, "1");
    }
}
