//! User interface layer: view models and display formatting.
//!
//! This crate does not render. The UI layer ends at immutable view models
//! computed from state, which the embedding shell (web components, a native
//! toolkit, a test harness) turns into pixels however it likes.
//!
//! ```text
//! AppState → compute_*_viewmodel → view model → renderer (excluded)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types for every page of the board
//! - [`helpers`]: Display formatting utilities shared across view models

pub mod helpers;
pub mod viewmodel;

pub use viewmodel::{
    ApplicationRow, ApplicationsViewModel, EmptyState, FavoriteButton, FavoriteRow,
    FavoritesViewModel, HeaderInfo, JobCardView, JobDetailViewModel, JobListViewModel,
    PaginationControls,
};
