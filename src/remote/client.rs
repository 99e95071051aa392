//! Remote API collaborator traits.
//!
//! This module defines the seams through which the core reaches the remote
//! job board. The traits are intentionally minimal and mirror the handful of
//! endpoints the UI actually uses; HTTP client construction, base URLs, and
//! transport concerns all live behind the implementations.
//!
//! Implementations are synchronous from the trait's point of view: the core
//! drives them through the [`ApiBridge`](crate::remote::ApiBridge) off the
//! interaction path, so a blocking implementation never stalls the UI.

use serde::{Deserialize, Serialize};

use crate::domain::error::Result;
use crate::domain::{ApplicationRecord, JobRecord};

/// Receipt returned by the remote side for a submitted application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Identifier the remote side assigned to the application, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Read access to job listings.
pub trait JobFetcher {
    /// Fetches all current job listings.
    ///
    /// # Errors
    ///
    /// Returns [`Network`](crate::domain::JobdeckError::Network) when the
    /// remote cannot be reached and
    /// [`Decode`](crate::domain::JobdeckError::Decode) when the response is
    /// malformed.
    fn list_jobs(&self) -> Result<Vec<JobRecord>>;

    /// Fetches a single job by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`](crate::domain::JobdeckError::NotFound) when no
    /// record matches `id`, plus the same transport errors as
    /// [`list_jobs`](Self::list_jobs).
    fn get_job(&self, id: &str) -> Result<JobRecord>;
}

/// Write access for job applications.
pub trait ApplicationSubmitter {
    /// Submits one application and returns the remote acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`Validation`](crate::domain::JobdeckError::Validation) when
    /// the remote side rejects the payload and
    /// [`Network`](crate::domain::JobdeckError::Network) when it cannot be
    /// reached.
    fn submit(&self, record: &ApplicationRecord) -> Result<Acknowledgement>;

    /// Fetches the applications submitted so far.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`JobFetcher::list_jobs`].
    fn list_applications(&self) -> Result<Vec<ApplicationRecord>>;
}
