//! Actions representing side effects to be executed by the embedding runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing user input or remote responses.
//! Actions bridge pure state transformations and effectful operations: the
//! core never performs I/O itself, it only asks the runtime to.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! The embedding runtime executes them in sequence: API requests go through
//! an [`ApiBridge`](crate::remote::ApiBridge) (or any other executor) and
//! notifications go to the session's
//! [`NotificationSink`](crate::notify::NotificationSink). Responses to API
//! requests come back later as `Event::ApiResponse` values, closing the loop.

use crate::notify::NotificationKind;
use crate::remote::ApiRequest;

/// Commands representing side effects to be executed by the embedding runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issues a request against the remote job/application API.
    ///
    /// Fire-and-forget from the core's perspective: the runtime performs the
    /// request however it likes (thread, task, browser fetch) and feeds the
    /// outcome back as an `Event::ApiResponse`. A request in flight when the
    /// user navigates away is simply abandoned.
    CallApi(ApiRequest),

    /// Shows a user-facing notification.
    ///
    /// Used for outcomes the handler itself reports (fetch failures,
    /// submission results); favourites mutations notify their own sink
    /// directly.
    Notify {
        /// Severity of the notification.
        kind: NotificationKind,
        /// Short headline.
        title: String,
        /// Longer body text.
        detail: String,
    },
}

impl Action {
    /// Convenience constructor for a notification action.
    #[must_use]
    pub fn notify(kind: NotificationKind, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Notify {
            kind,
            title: title.into(),
            detail: detail.into(),
        }
    }
}
