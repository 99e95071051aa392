//! Notification sink abstraction.
//!
//! The core never renders toasts itself; it reports user-facing outcomes
//! through the [`NotificationSink`] trait and lets the embedding UI decide how
//! to show them. Notifications are fire-and-forget: no return value is
//! consumed and a sink must never fail.

/// Severity of a notification, mapped by the UI to its toast variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A completed user action, e.g. a favourite added.
    Success,
    /// A failed or destructive outcome, e.g. a fetch failure or a removal.
    Error,
    /// A recoverable oddity the user should know about.
    Warning,
}

/// Abstraction over the user-visible notification channel.
///
/// Implementations are expected to be cheap and infallible; the core calls
/// them synchronously from user-interaction handlers.
pub trait NotificationSink {
    /// Delivers one notification.
    ///
    /// `title` is the short headline, `detail` the longer body text.
    fn notify(&self, kind: NotificationKind, title: &str, detail: &str);
}

/// Sink that routes notifications into the `tracing` pipeline.
///
/// Useful as a default in tests and headless embeddings where no toast UI
/// exists. Kinds map to levels: success and warning keep their obvious
/// levels, errors log at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, kind: NotificationKind, title: &str, detail: &str) {
        match kind {
            NotificationKind::Success => {
                tracing::info!(title = %title, detail = %detail, "notification");
            }
            NotificationKind::Warning => {
                tracing::warn!(title = %title, detail = %detail, "notification");
            }
            NotificationKind::Error => {
                tracing::error!(title = %title, detail = %detail, "notification");
            }
        }
    }
}
