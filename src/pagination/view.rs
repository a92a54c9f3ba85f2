//! Pagination view-model consumed by listing templates.

use serde::Serialize;

use crate::error::{ErrorCode, PagingError, PagingResult};

use super::window::{clamp_page, compute_window, compute_window_of_size, PageWindow};

/// Number of pages needed to show `total_items` at `page_size` items per page.
pub fn total_pages(total_items: u64, page_size: u64) -> PagingResult<i64> {
    if page_size == 0 {
        return Err(PagingError::with_message(
            ErrorCode::InvalidArgument,
            "Page size must be at least 1.",
        ));
    }
    i64::try_from(total_items.div_ceil(page_size)).map_err(|_| {
        PagingError::with_message(
            ErrorCode::InvalidArgument,
            format!("{total_items} items at {page_size} per page is too many pages."),
        )
    })
}

/// How wide the window should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowShape {
    /// Pages on each side of the current page.
    Radius(i64),
    /// Total number of pages in the window.
    Size(i64),
}

impl WindowShape {
    fn compute(self, page: i64, total_pages: i64) -> PagingResult<PageWindow> {
        match self {
            WindowShape::Radius(radius) => compute_window(page, radius, total_pages),
            WindowShape::Size(size) => compute_window_of_size(page, size, total_pages),
        }
    }
}

/// Everything a listing page needs to draw its pagination links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page after clamping into range.
    pub page: i64,
    pub total_pages: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
    /// Page links around the current page.
    pub window: PageWindow,
    pub previous: Option<i64>,
    pub next: Option<i64>,
    /// The window stops short of page 1, so a jump link to it is useful.
    pub show_first: bool,
    /// The window stops short of the last page.
    pub show_last: bool,
}

impl Pagination {
    /// Builds the view-model from a known page count.
    pub fn from_total_pages(page: i64, shape: WindowShape, total_pages: i64) -> PagingResult<Self> {
        let window = shape.compute(page, total_pages)?;

        if window.is_empty() {
            return Ok(Self {
                page: 1,
                total_pages,
                total_items: None,
                window,
                previous: None,
                next: None,
                show_first: false,
                show_last: false,
            });
        }

        let page = clamp_page(page, total_pages);
        let show_first = window.first().is_some_and(|first| first > 1);
        let show_last = window.last().is_some_and(|last| last < total_pages);

        Ok(Self {
            page,
            total_pages,
            total_items: None,
            window,
            previous: (page > 1).then(|| page - 1),
            next: (page < total_pages).then(|| page + 1),
            show_first,
            show_last,
        })
    }

    /// Builds the view-model from an upstream item count and page size.
    pub fn from_items(
        page: i64,
        shape: WindowShape,
        total_items: u64,
        page_size: u64,
    ) -> PagingResult<Self> {
        let total_pages = total_pages(total_items, page_size)?;
        let mut pagination = Self::from_total_pages(page, shape, total_pages)?;
        pagination.total_items = Some(total_items);
        Ok(pagination)
    }
}
