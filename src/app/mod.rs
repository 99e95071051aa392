//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic, sitting between the UI
//! shell and the domain/remote layers. It implements the event-driven
//! architecture that powers a browsing session.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └───────── API Responses ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`favorites`]: Session-lived favourites store
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`pagination`]: Pure page-window derivation over list snapshots
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod favorites;
pub mod handler;
pub mod pagination;
pub mod state;

pub use actions::Action;
pub use favorites::FavoritesStore;
pub use handler::{handle_event, Event};
pub use pagination::PageWindow;
pub use state::{AppState, LoadPhase};
