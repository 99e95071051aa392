//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from
//! [`AppState`](crate::app::AppState) and consumed by whatever renderer the
//! embedding shell uses. They contain no business logic, only display-ready
//! data: labels are pre-formatted, the favourite flag is pre-resolved, and
//! button enablement is pre-computed so the renderer never needs to reach
//! back into state.

/// Header information for a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Headline text, e.g. "20 Jobs Available Now".
    pub title: String,
}

/// Pagination control state for a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    /// Position label, e.g. "Page 2 of 3".
    pub label: String,
    /// 1-based current page number.
    pub current_page: usize,
    /// Total pages, at least 1.
    pub total_pages: usize,
    /// Whether the "Next" button is enabled.
    pub can_advance: bool,
    /// Whether the "Previous" button is enabled.
    pub can_retreat: bool,
}

/// Empty-list message shown in place of cards or rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Message text, e.g. "No jobs available.".
    pub message: String,
}

/// One job card on the listings grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    /// Job identifier, used to build the detail link.
    pub id: String,
    /// Position title.
    pub title: String,
    /// Company name.
    pub company: String,
    /// Employment kind shown next to the date.
    pub job_type: String,
    /// Posted-on date label.
    pub posted: String,
    /// Description body (the renderer clamps it visually).
    pub description: String,
    /// Skill tags in order.
    pub tags: Vec<String>,
    /// Whether the heart on this card is filled.
    pub is_favorite: bool,
}

/// The complete job listings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListViewModel {
    /// Count headline.
    pub header: HeaderInfo,
    /// Cards for the current page, in order.
    pub cards: Vec<JobCardView>,
    /// Pagination controls under the grid.
    pub pagination: PaginationControls,
    /// Present when there are no cards to show.
    pub empty_state: Option<EmptyState>,
    /// Loading or failure text replacing the grid, when applicable.
    pub status: Option<String>,
}

/// Favourite toggle button state on the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteButton {
    /// Whether the job is currently favourited.
    pub is_favorite: bool,
    /// Button text: "Added to favourite" or "Add to favourite".
    pub label: String,
}

/// The job detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetailViewModel {
    /// Headline, e.g. "Backend Engineer Position".
    pub title: String,
    /// Company name.
    pub company: String,
    /// Location text.
    pub location: String,
    /// Posted-ago label, e.g. "3h ago".
    pub posted: String,
    /// Employment kind badge.
    pub job_type: String,
    /// Salary text with its sign-in fallback applied.
    pub salary: String,
    /// Full description body.
    pub description: String,
    /// Company logo URL, if any.
    pub logo: Option<String>,
    /// Favourite toggle state.
    pub favorite_button: FavoriteButton,
}

/// One row in the favourites panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteRow {
    /// Job identifier for the detail link.
    pub job_id: String,
    /// Row text, e.g. "Backend Engineer at Acme".
    pub label: String,
}

/// The favourites badge and dropdown panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesViewModel {
    /// Badge count over the heart icon.
    pub count: usize,
    /// Rows in insertion order; indices match the store's, so a row's
    /// position is what a remove event sends back.
    pub rows: Vec<FavoriteRow>,
    /// Present when there are no favourites.
    pub empty_text: Option<String>,
}

/// One row on the submitted-applications page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRow {
    /// Title of the job applied to.
    pub job_title: String,
    /// Applicant name.
    pub applicant: String,
    /// Applied-on date label.
    pub applied_on: String,
}

/// The submitted-applications page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationsViewModel {
    /// Count headline.
    pub header: HeaderInfo,
    /// Rows for the current page, in order.
    pub rows: Vec<ApplicationRow>,
    /// Pagination controls under the list.
    pub pagination: PaginationControls,
    /// Present when there are no rows to show.
    pub empty_state: Option<EmptyState>,
    /// Loading or failure text replacing the list, when applicable.
    pub status: Option<String>,
}
