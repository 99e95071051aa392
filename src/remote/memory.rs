//! In-memory remote API for tests and local development.
//!
//! [`InMemoryApi`] implements both collaborator traits over seeded vectors.
//! Clones share state through an `Rc`, so the same instance can serve as the
//! bridge's fetcher and submitter while a test keeps a handle for
//! inspection. Single-threaded, like the rest of the core.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::error::{JobdeckError, Result};
use crate::domain::{ApplicationRecord, JobRecord};
use crate::remote::client::{Acknowledgement, ApplicationSubmitter, JobFetcher};

/// Shared backing state for cloned handles.
#[derive(Debug, Default)]
struct Inner {
    jobs: Vec<JobRecord>,
    applications: Vec<ApplicationRecord>,
    offline: bool,
    next_ack: u64,
}

/// In-memory implementation of the remote API.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApi {
    inner: Rc<RefCell<Inner>>,
}

impl InMemoryApi {
    /// Creates an empty API with no listings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an API seeded with the given listings.
    #[must_use]
    pub fn with_jobs(jobs: Vec<JobRecord>) -> Self {
        let api = Self::new();
        api.inner.borrow_mut().jobs = jobs;
        api
    }

    /// Creates an API seeded from a JSON listings fixture.
    ///
    /// The fixture uses the same wire format as the real API, so recorded
    /// responses can be replayed as-is during local development.
    ///
    /// # Errors
    ///
    /// Returns [`Decode`](JobdeckError::Decode) when the fixture is not a
    /// JSON array of job records.
    pub fn from_json(body: &str) -> Result<Self> {
        let jobs = crate::remote::models::decode_jobs(body)?;
        tracing::debug!(count = jobs.len(), "seeded in-memory api from fixture");
        Ok(Self::with_jobs(jobs))
    }

    /// Simulates losing or regaining connectivity.
    ///
    /// While offline, every operation fails with a
    /// [`Network`](JobdeckError::Network) error.
    pub fn set_offline(&self, offline: bool) {
        self.inner.borrow_mut().offline = offline;
    }

    /// Applications submitted so far, in submission order.
    #[must_use]
    pub fn submitted(&self) -> Vec<ApplicationRecord> {
        self.inner.borrow().applications.clone()
    }

    /// Fails when the simulated connection is down.
    fn check_online(&self) -> Result<()> {
        if self.inner.borrow().offline {
            return Err(JobdeckError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

impl JobFetcher for InMemoryApi {
    fn list_jobs(&self) -> Result<Vec<JobRecord>> {
        self.check_online()?;
        Ok(self.inner.borrow().jobs.clone())
    }

    fn get_job(&self, id: &str) -> Result<JobRecord> {
        self.check_online()?;
        self.inner
            .borrow()
            .jobs
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .ok_or_else(|| JobdeckError::NotFound(id.to_string()))
    }
}

impl ApplicationSubmitter for InMemoryApi {
    fn submit(&self, record: &ApplicationRecord) -> Result<Acknowledgement> {
        self.check_online()?;

        let mut inner = self.inner.borrow_mut();
        inner.next_ack += 1;
        let id = format!("app-{}", inner.next_ack);
        inner.applications.push(record.clone());

        Ok(Acknowledgement { id: Some(id) })
    }

    fn list_applications(&self) -> Result<Vec<ApplicationRecord>> {
        self.check_online()?;
        Ok(self.inner.borrow().applications.clone())
    }
}
