//! Shared display formatting utilities.
//!
//! Small pure functions that turn domain values into the strings the view
//! models carry. Kept out of the view models themselves so formatting rules
//! live in exactly one place.

use chrono::{DateTime, Utc};

/// Fallback salary text for listings without a published range.
const SALARY_FALLBACK: &str = "Sign in to view salary";

/// Formats the "Page X of Y" position label.
#[must_use]
pub fn page_label(current: usize, total: usize) -> String {
    format!("Page {current} of {total}")
}

/// Formats a card's posted-on date, e.g. "Jul 1, 2026".
#[must_use]
pub fn posted_on_label(posted_at: DateTime<Utc>) -> String {
    posted_at.format("%b %-d, %Y").to_string()
}

/// Formats an application row's date, e.g. "Applied on: Jul 3, 2026".
#[must_use]
pub fn applied_on_label(submitted_at: DateTime<Utc>) -> String {
    format!("Applied on: {}", submitted_at.format("%b %-d, %Y"))
}

/// Salary text with the sign-in fallback applied.
#[must_use]
pub fn salary_display(salary_range: Option<&str>) -> String {
    salary_range.map_or_else(|| SALARY_FALLBACK.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn page_label_formats_position() {
        assert_eq!(page_label(2, 3), "Page 2 of 3");
    }

    #[test]
    fn date_labels_use_short_month_names() {
        let date = Utc.with_ymd_and_hms(2026, 7, 3, 12, 0, 0).unwrap();

        assert_eq!(posted_on_label(date), "Jul 3, 2026");
        assert_eq!(applied_on_label(date), "Applied on: Jul 3, 2026");
    }

    #[test]
    fn salary_falls_back_to_sign_in_text() {
        assert_eq!(salary_display(Some("$90k-$120k")), "$90k-$120k");
        assert_eq!(salary_display(None), "Sign in to view salary");
    }
}
