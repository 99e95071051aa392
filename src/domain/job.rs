//! Job domain model and operations.
//!
//! This module defines the core `JobRecord` type representing a single job
//! listing fetched from the remote board. Records are immutable once fetched:
//! the UI layer references them but never mutates them, and every mutation-like
//! concern (favouriting, applying) lives in its own type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A single job listing.
///
/// Owned by the fetch flow and treated as immutable by everything downstream.
/// The `id` is unique per job on the remote board; note that the favourites
/// mechanism deliberately does NOT use it for membership checks (see
/// [`FavoriteEntry`](crate::domain::FavoriteEntry)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Unique identifier assigned by the remote board.
    pub id: String,
    /// Position title, e.g. "Backend Engineer".
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Free-form location, e.g. "Berlin" or "Remote".
    pub location: String,
    /// Long-form description shown on the detail page.
    pub description: String,
    /// Employment kind, e.g. "Full Time" or "Contract".
    pub job_type: String,
    /// When the listing was created on the board.
    pub created_at: DateTime<Utc>,
    /// Optional company logo URL.
    pub logo: Option<String>,
    /// Optional salary range text, e.g. "$90k-$120k".
    pub salary_range: Option<String>,
    /// Ordered skill tags; may be empty.
    pub tags: Vec<String>,
}

impl JobRecord {
    /// Creates a job record with the given identity fields.
    ///
    /// `created_at` is set to the current time and every other field starts
    /// empty. Intended for call sites that only care about the identity
    /// triple, such as favourites round-trips; fetched records arrive fully
    /// populated through the wire layer instead.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            location: String::new(),
            description: String::new(),
            job_type: String::from("Full Time"),
            created_at: Utc::now(),
            logo: None,
            salary_range: None,
            tags: Vec::new(),
        }
    }

    /// Returns a human-readable string describing how long ago the job was posted.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    #[must_use]
    pub fn posted_ago(&self) -> String {
        let now = Utc::now().timestamp();
        let diff = now - self.created_at.timestamp();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}
