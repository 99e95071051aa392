//! Request/response protocol between the core and the API bridge.
//!
//! The core's event handler emits [`ApiRequest`] values (wrapped in
//! [`Action::CallApi`](crate::app::Action::CallApi)) and later consumes
//! [`ApiResponse`] values as events. Keeping this a plain serializable
//! protocol means the bridge can run anywhere the embedding shell wants: on
//! the calling thread, a worker, or the far side of a message port.

use serde::{Deserialize, Serialize};

use crate::domain::{ApplicationRecord, JobRecord};
use crate::remote::Acknowledgement;

/// Requests the core can issue against the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiRequest {
    /// Fetch all job listings.
    FetchJobs,

    /// Fetch one job by identifier (detail page navigation).
    FetchJob {
        /// The job identifier from the route.
        id: String,
    },

    /// Fetch the applications submitted so far.
    FetchApplications,

    /// Submit a validated application.
    Submit {
        /// The record to deliver.
        record: ApplicationRecord,
    },
}

impl ApiRequest {
    /// The request's kind, used to route failures back to the right state.
    #[must_use]
    pub fn kind(&self) -> ApiRequestKind {
        match self {
            Self::FetchJobs => ApiRequestKind::Jobs,
            Self::FetchJob { .. } => ApiRequestKind::JobDetail,
            Self::FetchApplications => ApiRequestKind::Applications,
            Self::Submit { .. } => ApiRequestKind::Submit,
        }
    }
}

/// Payload-free classification of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiRequestKind {
    /// A [`ApiRequest::FetchJobs`] request.
    Jobs,
    /// A [`ApiRequest::FetchJob`] request.
    JobDetail,
    /// A [`ApiRequest::FetchApplications`] request.
    Applications,
    /// A [`ApiRequest::Submit`] request.
    Submit,
}

/// Outcomes delivered back to the core as events.
///
/// Every request produces exactly one response; failures collapse into
/// [`ApiResponse::Error`] with the originating request kind so the handler
/// can mark the right collection as failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiResponse {
    /// Job listings were fetched successfully.
    JobsLoaded {
        /// The decoded listings.
        jobs: Vec<JobRecord>,
    },

    /// A single job was fetched successfully.
    JobLoaded {
        /// The decoded record.
        job: JobRecord,
    },

    /// The applications listing was fetched successfully.
    ApplicationsLoaded {
        /// The decoded records.
        applications: Vec<ApplicationRecord>,
    },

    /// An application was accepted by the remote side.
    Submitted {
        /// The remote acknowledgement.
        ack: Acknowledgement,
    },

    /// A request failed.
    Error {
        /// Which request failed.
        request: ApiRequestKind,
        /// Human-readable failure description.
        message: String,
    },
}
