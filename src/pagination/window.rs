//! Page window calculation.
//!
//! A window is the contiguous run of page numbers rendered as links around the
//! current page. The ideal window is `radius` pages either side of `page`;
//! when it runs off one end of `[1, total_pages]` the pages lost there are
//! moved to the other end, so the window stays `2 * radius + 1` wide whenever
//! the page count allows it.

use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::debug;

use crate::error::{ErrorCode, PagingError, PagingResult};

/// Contiguous, strictly increasing run of page numbers. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<i64>")]
pub struct PageWindow {
    bounds: Option<(i64, i64)>,
}

impl PageWindow {
    /// The window with no pages, used when there are no results.
    pub fn empty() -> Self {
        Self { bounds: None }
    }

    fn new(low: i64, high: i64) -> Self {
        debug_assert!(1 <= low && low <= high);
        Self {
            bounds: Some((low, high)),
        }
    }

    /// First page of the window.
    pub fn first(&self) -> Option<i64> {
        self.bounds.map(|(low, _)| low)
    }

    /// Last page of the window.
    pub fn last(&self) -> Option<i64> {
        self.bounds.map(|(_, high)| high)
    }

    /// Number of pages in the window.
    pub fn len(&self) -> usize {
        self.bounds
            .map(|(low, high)| usize::try_from(high - low).map_or(usize::MAX, |n| n.saturating_add(1)))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Returns whether `page` is one of the window's pages.
    pub fn contains(&self, page: i64) -> bool {
        self.bounds
            .is_some_and(|(low, high)| (low..=high).contains(&page))
    }

    /// Iterates the pages in increasing order.
    pub fn iter(&self) -> RangeInclusive<i64> {
        match self.bounds {
            Some((low, high)) => low..=high,
            // 1..=0 yields nothing.
            None => 1..=0,
        }
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

impl From<PageWindow> for Vec<i64> {
    fn from(window: PageWindow) -> Self {
        window.to_vec()
    }
}

impl IntoIterator for &PageWindow {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Clamps a requested page into `[1, max(total_pages, 1)]`.
///
/// Callers may pass stale page numbers (the result set shrank between two
/// requests), so out-of-range pages are pulled back instead of rejected.
pub fn clamp_page(page: i64, total_pages: i64) -> i64 {
    page.clamp(1, total_pages.max(1))
}

/// Computes the window of pages to show around `page`.
///
/// `radius` is the number of pages wanted on each side of `page`. The result
/// has `min(total_pages, 2 * radius + 1)` pages, all within
/// `[1, total_pages]`, and includes `page` whenever it is in range.
///
/// * `radius < 0` or `total_pages < 0` fails with [`ErrorCode::InvalidArgument`].
/// * `total_pages == 0` yields an empty window.
/// * `page` outside `[1, total_pages]` is clamped first (see [`clamp_page`]).
///
/// ```
/// use cert_paging::pagination::compute_window;
///
/// let window = compute_window(1, 3, 10).unwrap();
/// assert_eq!(window.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn compute_window(page: i64, radius: i64, total_pages: i64) -> PagingResult<PageWindow> {
    if radius < 0 {
        return Err(PagingError::with_message(
            ErrorCode::InvalidArgument,
            format!("Window radius must not be negative, got {radius}."),
        ));
    }
    shift_window(page, radius, radius, total_pages)
}

/// Computes a window holding `size` pages where the page count allows it.
///
/// The current page sits in the middle: `(size - 1) / 2` pages before it and
/// the rest after it, so an even `size` leans one page forward. For an odd
/// `size` this matches [`compute_window`] with `radius = (size - 1) / 2`.
pub fn compute_window_of_size(page: i64, size: i64, total_pages: i64) -> PagingResult<PageWindow> {
    if size < 1 {
        return Err(PagingError::with_message(
            ErrorCode::InvalidArgument,
            format!("Window size must be at least 1, got {size}."),
        ));
    }
    let before = (size - 1) / 2;
    let after = size - 1 - before;
    shift_window(page, before, after, total_pages)
}

/// Ideal window `[page - before, page + after]`, clamped to the page range
/// with the overshoot at one end given to the other end.
fn shift_window(page: i64, before: i64, after: i64, total_pages: i64) -> PagingResult<PageWindow> {
    if total_pages < 0 {
        return Err(PagingError::with_message(
            ErrorCode::InvalidArgument,
            format!("Total page count must not be negative, got {total_pages}."),
        ));
    }
    if total_pages == 0 {
        return Ok(PageWindow::empty());
    }

    let clamped = clamp_page(page, total_pages);
    if clamped != page {
        debug!(page, clamped, total_pages, "Clamped out-of-range page");
    }
    let page = clamped;

    let mut low = page.saturating_sub(before);
    let mut high = page.saturating_add(after);

    let mut shortfall = 0;
    if low < 1 {
        shortfall = 1i64.saturating_sub(low);
        low = 1;
    }

    if high > total_pages {
        // Both ends overshot: nothing left to redistribute.
        if shortfall == 0 {
            low = low.saturating_sub(high - total_pages).max(1);
        }
        high = total_pages;
    } else {
        high = high.saturating_add(shortfall).min(total_pages);
    }

    Ok(PageWindow::new(low, high))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(page: i64, radius: i64, total_pages: i64) -> Vec<i64> {
        compute_window(page, radius, total_pages).unwrap().to_vec()
    }

    #[test]
    fn test_pagination() {
        assert_eq!(pages(3, 2, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_lower_bound_is_caught_and_added_to_top_bound() {
        assert_eq!(pages(1, 3, 10), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_upper_bound_is_caught_and_added_to_lower_bound() {
        assert_eq!(pages(9, 2, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_total_smaller_than_window() {
        assert_eq!(pages(2, 4, 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_single_page() {
        assert_eq!(pages(1, 3, 1), vec![1]);
    }

    #[test]
    fn test_centered_window() {
        assert_eq!(pages(50, 3, 100), vec![47, 48, 49, 50, 51, 52, 53]);
    }

    #[test]
    fn test_zero_radius() {
        assert_eq!(pages(4, 0, 10), vec![4]);
    }

    #[test]
    fn test_last_page() {
        assert_eq!(pages(10, 4, 10), vec![2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_zero_total_pages_is_empty() {
        let window = compute_window(1, 2, 0).unwrap();
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert_eq!(window.first(), None);
        assert!(window.to_vec().is_empty());
    }

    #[test]
    fn test_negative_radius_is_invalid() {
        for (page, total_pages) in [(1, 10), (5, 0), (-3, 4)] {
            let err = compute_window(page, -1, total_pages).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidArgument);
        }
    }

    #[test]
    fn test_negative_total_pages_is_invalid() {
        let err = compute_window(1, 2, -1).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_page_below_range_is_clamped() {
        assert_eq!(pages(0, 2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(pages(-7, 1, 10), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_above_range_is_clamped() {
        assert_eq!(pages(25, 2, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let window = compute_window(i64::MAX, i64::MAX, i64::MAX).unwrap();
        assert_eq!(window.first(), Some(1));
        assert_eq!(window.last(), Some(i64::MAX));

        let window = compute_window(i64::MIN, 1, 5).unwrap();
        assert_eq!(window.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_window_of_size_matches_radius_for_odd_sizes() {
        for total_pages in 1..15 {
            for page in 1..=total_pages {
                for radius in 0..6 {
                    assert_eq!(
                        compute_window_of_size(page, 2 * radius + 1, total_pages).unwrap(),
                        compute_window(page, radius, total_pages).unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn test_window_of_even_size_leans_forward() {
        let window = compute_window_of_size(5, 4, 10).unwrap();
        assert_eq!(window.to_vec(), vec![4, 5, 6, 7]);

        let window = compute_window_of_size(10, 4, 10).unwrap();
        assert_eq!(window.to_vec(), vec![7, 8, 9, 10]);
    }

    #[test]
    fn test_window_of_size_zero_is_invalid() {
        let err = compute_window_of_size(1, 0, 10).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_window_serializes_as_page_list() {
        let window = compute_window(9, 2, 10).unwrap();
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(json, "[6,7,8,9,10]");
        assert_eq!(serde_json::to_string(&PageWindow::empty()).unwrap(), "[]");
    }

    #[test]
    fn test_contains() {
        let window = compute_window(3, 1, 10).unwrap();
        assert!(window.contains(2));
        assert!(window.contains(4));
        assert!(!window.contains(5));
        assert!(!PageWindow::empty().contains(1));
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(6, 5), 5);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(3, 0), 1);
    }
}
