//! Deterministic pagination over a list snapshot.
//!
//! All operations here are total functions: out-of-range inputs are clamped
//! rather than rejected, matching a UI that disables navigation buttons at the
//! boundaries instead of producing errors. Nothing in this module allocates or
//! performs I/O; callers slice whatever snapshot they currently hold.
//!
//! Page numbers are 1-based throughout, as displayed to the user.

/// Returns the slice of `items` visible on `page_number`.
///
/// Equivalent to `items[(page_number - 1) * page_size .. page_number * page_size]`
/// clipped to the bounds of `items`. A page number past the last page yields
/// an empty slice.
#[must_use]
pub fn page<T>(items: &[T], page_size: usize, page_number: usize) -> &[T] {
    let first = page_number
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let last = first.saturating_add(page_size).min(items.len());
    &items[first..last]
}

/// Number of pages needed to show `item_count` items, `page_size` at a time.
///
/// Always at least 1: an empty list still reads "Page 1 of 1" in the UI. A
/// `page_size` of zero is treated as 1 to keep the function total.
#[must_use]
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    let pages = item_count.saturating_add(size - 1) / size;
    pages.max(1)
}

/// Moves to the next page, capped at `total`.
#[must_use]
pub fn advance(current: usize, total: usize) -> usize {
    current.saturating_add(1).min(total.max(1))
}

/// Moves to the previous page, floored at 1.
#[must_use]
pub fn retreat(current: usize) -> usize {
    current.saturating_sub(1).max(1)
}

/// Derived metadata for one page of a list.
///
/// Computed on demand, never stored: the window is a pure function of the
/// page size, page number, and item count of the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Index of the first visible item.
    pub first_index: usize,
    /// One past the index of the last visible item.
    pub last_index: usize,
    /// Total number of pages for the snapshot, at least 1.
    pub total_pages: usize,
    /// The page number the window was computed for.
    pub page_number: usize,
}

impl PageWindow {
    /// Computes the window for `page_number` over `total_items` items.
    #[must_use]
    pub fn compute(page_size: usize, page_number: usize, total_items: usize) -> Self {
        let first_index = page_number
            .saturating_sub(1)
            .saturating_mul(page_size)
            .min(total_items);
        let last_index = first_index.saturating_add(page_size).min(total_items);

        Self {
            first_index,
            last_index,
            total_pages: total_pages(total_items, page_size),
            page_number,
        }
    }

    /// True iff a later page exists; drives the "Next" button state.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// True iff an earlier page exists; drives the "Previous" button state.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 8, 1)]
    #[case(1, 8, 1)]
    #[case(8, 8, 1)]
    #[case(9, 8, 2)]
    #[case(16, 8, 2)]
    #[case(20, 8, 3)]
    #[case(5, 1, 5)]
    fn total_pages_is_ceiling_with_floor_of_one(
        #[case] count: usize,
        #[case] size: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(total_pages(count, size), expected);
    }

    #[test]
    fn twenty_items_at_eight_per_page() {
        let items: Vec<u32> = (1..=20).collect();

        assert_eq!(page(&items, 8, 1), (1..=8).collect::<Vec<_>>());
        assert_eq!(page(&items, 8, 2), (9..=16).collect::<Vec<_>>());
        assert_eq!(page(&items, 8, 3), (17..=20).collect::<Vec<_>>());
        assert_eq!(total_pages(items.len(), 8), 3);
        assert!(page(&items, 8, 4).is_empty());
    }

    #[rstest]
    #[case(3)]
    #[case(7)]
    #[case(8)]
    #[case(25)]
    fn concatenated_pages_reconstruct_the_input(#[case] size: usize) {
        let items: Vec<u32> = (0..23).collect();
        let total = total_pages(items.len(), size);

        let mut rebuilt = Vec::new();
        for n in 1..=total {
            let slice = page(&items, size, n);
            assert!(slice.len() <= size);
            rebuilt.extend_from_slice(slice);
        }

        assert_eq!(rebuilt, items);
    }

    #[test]
    fn advance_caps_at_total_and_retreat_floors_at_one() {
        assert_eq!(advance(1, 3), 2);
        assert_eq!(advance(3, 3), 3);
        assert_eq!(retreat(1), 1);
        assert_eq!(retreat(2), 1);
    }

    #[test]
    fn advance_and_retreat_invert_away_from_boundaries() {
        for p in 2..5 {
            assert_eq!(advance(retreat(p), 6), p);
            assert_eq!(retreat(advance(p, 6)), p);
        }
    }

    #[test]
    fn window_reports_boundary_states() {
        let first = PageWindow::compute(8, 1, 20);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!((first.first_index, first.last_index), (0, 8));

        let last = PageWindow::compute(8, 3, 20);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!((last.first_index, last.last_index), (16, 20));
    }

    #[test]
    fn window_of_empty_list_is_a_single_empty_page() {
        let window = PageWindow::compute(8, 1, 0);

        assert_eq!(window.total_pages, 1);
        assert_eq!((window.first_index, window.last_index), (0, 0));
        assert!(!window.has_next());
        assert!(!window.has_previous());
    }
}
