//! Jobdeck: the client-side core of a job-board application.
//!
//! Jobdeck holds everything a job-board front end needs that is not pixels:
//! - Paged, searchable job listings with deterministic page-window math
//! - A session-lived favourites store with explicit add/remove semantics
//! - Application drafting with basic field validation
//! - A request/response seam to the remote job API, with typed failures
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding shell (excluded)                         │  ← Rendering, routing
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Favourites store
//! │  - Pagination                                       │  ← Page windows
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Remote Layer  │   │ Notify Layer  │
//! │ (ui/)         │   │ (remote/)     │   │ (notify)      │
//! │ - View models │   │ - API traits  │   │ - Sink trait  │
//! │ - Formatting  │   │ - Wire DTOs   │   │ - Tracing sink│
//! │               │   │ - Bridge      │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Job, application, favourite models               │
//! │  - Error taxonomy                                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Event Loop
//!
//! The embedding shell owns the loop:
//!
//! 1. Build a [`Config`], call [`observability::init_tracing`], and create
//!    state with [`initialize`].
//! 2. Feed [`Event`](app::Event)s into [`app::handle_event`].
//! 3. Execute the returned [`Action`](app::Action)s: API requests go through
//!    a [`remote::ApiBridge`], notifications go to the session's
//!    [`NotificationSink`](notify::NotificationSink).
//! 4. Feed each [`ApiResponse`](remote::ApiResponse) back in as an event.
//!
//! # Example
//!
//! ```rust
//! use jobdeck::app::{handle_event, Action, Event};
//! use jobdeck::notify::TracingSink;
//! use jobdeck::remote::{ApiBridge, InMemoryApi};
//! use jobdeck::{initialize, Config};
//!
//! let api = InMemoryApi::new();
//! let bridge = ApiBridge::new(Box::new(api.clone()), Box::new(api));
//!
//! let mut state = initialize(&Config::default(), Box::new(TracingSink));
//! let (_, actions) = handle_event(&mut state, &Event::SessionStarted)?;
//!
//! for action in actions {
//!     if let Action::CallApi(request) = action {
//!         let response = bridge.process(request);
//!         handle_event(&mut state, &Event::ApiResponse(response))?;
//!     }
//! }
//!
//! assert_eq!(state.compute_viewmodel().pagination.label, "Page 1 of 1");
//! # Ok::<(), jobdeck::domain::JobdeckError>(())
//! ```

pub mod app;
pub mod domain;
pub mod notify;
pub mod observability;
pub mod remote;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FavoritesStore, LoadPhase};
pub use domain::{
    ApplicationDraft, ApplicationRecord, FavoriteEntry, JobRecord, JobdeckError, Result,
};
pub use notify::{NotificationKind, NotificationSink, TracingSink};

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

/// Jobs (and applications) shown per page when not configured otherwise.
const DEFAULT_PAGE_SIZE: usize = 8;

/// Session configuration.
///
/// Values come from whatever the embedding shell has: build-time environment,
/// a key/value map, or a TOML file.
///
/// # TOML Format
///
/// ```toml
/// api_base_url = "https://boards.example.com/api"
/// jobs_per_page = 8
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the remote job API.
    ///
    /// Consumed by transport implementations of the remote traits; the core
    /// itself never dereferences it.
    pub api_base_url: Option<String>,

    /// Listings shown per page. Default: 8
    pub jobs_per_page: usize,

    /// Tracing level for the subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            jobs_per_page: DEFAULT_PAGE_SIZE,
            trace_level: None,
        }
    }
}

impl Config {
    /// Builds configuration from a string key/value map.
    ///
    /// Recognized keys: `api_base_url`, `jobs_per_page`, `trace_level`.
    /// `jobs_per_page` falls back to the default when missing, unparsable,
    /// or zero.
    #[must_use]
    pub fn from_pairs(pairs: &BTreeMap<String, String>) -> Self {
        let jobs_per_page = pairs
            .get("jobs_per_page")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            api_base_url: pairs.get("api_base_url").cloned(),
            jobs_per_page,
            trace_level: pairs.get("trace_level").cloned(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Missing keys take their defaults; a zero `jobs_per_page` is
    /// normalized to the default.
    ///
    /// # Errors
    ///
    /// Returns [`JobdeckError::Config`] when the file cannot be read or
    /// parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| JobdeckError::Config(format!("failed to read config file: {e}")))?;

        let mut config: Self = toml::from_str(&contents)
            .map_err(|e| JobdeckError::Config(format!("failed to parse config TOML: {e}")))?;

        if config.jobs_per_page == 0 {
            config.jobs_per_page = DEFAULT_PAGE_SIZE;
        }
        Ok(config)
    }
}

/// Creates session state from configuration.
///
/// The favourites store is created empty and lives as long as the returned
/// state; dropping the state ends the session with nothing persisted.
#[must_use]
pub fn initialize(config: &Config, sink: Box<dyn NotificationSink>) -> AppState {
    tracing::debug!(
        jobs_per_page = config.jobs_per_page,
        api_base_url = ?config.api_base_url,
        "initializing session"
    );

    AppState::new(config.jobs_per_page, sink)
}
