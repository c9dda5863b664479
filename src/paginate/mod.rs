//! Page window computation for large paginated listings.
//!
//! A listing with thousands of pages cannot render a link for every page.
//! Instead we show a *semantic zoom* window: fine-grained links near the
//! current page and progressively coarser ones further away, so long-distance
//! jumps stay one click away while the link count stays bounded.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

/// Sampling resolutions around the current page: unit, tens, hundreds.
const TIER_STEPS: [u32; 3] = [1, 10, 100];

/// Each tier contributes at most this many pages.
const PER_TIER_LIMIT: usize = 10;

/// Pagination errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("current page must be at least 1")]
    InvalidCurrentPage,

    #[error("page size must be at least 1")]
    InvalidPageSize,
}

/// A validated (current page, total pages) pair.
///
/// Pages are 1-based; construction rejects `current_page == 0` so the window
/// computation itself never has to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRequest {
    current_page: u32,
    total_pages: u32,
}

impl PaginationRequest {
    pub fn new(current_page: u32, total_pages: u32) -> Result<Self, PaginationError> {
        if current_page == 0 {
            return Err(PaginationError::InvalidCurrentPage);
        }
        Ok(Self {
            current_page,
            total_pages,
        })
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }
}

/// Compute the sparse, ascending set of page numbers to show as links.
///
/// Three zoom tiers sample pages around the current one, each clipped to the
/// valid range, stepped at its own resolution and capped at ten entries. A
/// single alignment offset (`current_page % 10`) is shared by all tiers so
/// that the coarse links land on multiples of 10 and 100 wherever the user
/// happens to be; the tens and hundreds tiers are deliberately not re-aligned
/// to their own modulus.
///
/// Total, deterministic and side-effect free: an empty listing yields an
/// empty window, clipping near either end just shortens it. At most 30
/// entries for any input.
pub fn page_window(request: &PaginationRequest) -> Vec<u32> {
    let current = i64::from(request.current_page);
    let total = i64::from(request.total_pages);
    let offset = current % 10;

    let mut pages: BTreeSet<i64> = BTreeSet::new();

    for step in TIER_STEPS {
        let step = i64::from(step);
        let start = (current - (5 * step + offset)).max(0);
        let stop = (current + (10 * step - offset)).min(total);

        let mut value = start;
        let mut taken = 0;
        while value < stop && taken < PER_TIER_LIMIT {
            pages.insert(value);
            value += step;
            taken += 1;
        }
    }

    // The tier arithmetic can sample past the page being viewed; anchor it
    // explicitly so the window always contains it.
    if current < total {
        pages.insert(current);
    }

    // Page 0 can fall out of the clipped coarse tiers; pages are 1-based.
    pages.remove(&0);

    pages.into_iter().map(|page| page as u32).collect()
}

/// Splits a collection of known size into fixed-size pages.
///
/// Out-of-range page requests resolve to the nearest valid page instead of
/// failing, which is what listing endpoints want for hand-edited query
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: u32,
    total_items: u32,
}

impl Paginator {
    pub fn new(per_page: u32, total_items: u32) -> Result<Self, PaginationError> {
        if per_page == 0 {
            return Err(PaginationError::InvalidPageSize);
        }
        Ok(Self {
            per_page,
            total_items,
        })
    }

    /// Total page count. An empty collection still has one (empty) page.
    pub fn num_pages(&self) -> u32 {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    /// Resolve a requested page number, clamping out-of-range values, and
    /// build its navigation window.
    pub fn page(&self, number: u32) -> PageInfo {
        let total_pages = self.num_pages();
        let number = number.clamp(1, total_pages);
        let request = PaginationRequest {
            current_page: number,
            total_pages,
        };

        PageInfo {
            number,
            total_pages,
            offset: (number - 1) * self.per_page,
            has_next: number < total_pages,
            has_prev: number > 1,
            window: page_window(&request),
        }
    }
}

/// A resolved page plus everything the rendering layer needs to paginate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub number: u32,
    pub total_pages: u32,
    /// Index of the first item on this page.
    pub offset: u32,
    pub has_next: bool,
    pub has_prev: bool,
    /// Navigation links, strictly ascending.
    pub window: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn window(current_page: u32, total_pages: u32) -> Vec<u32> {
        page_window(&PaginationRequest::new(current_page, total_pages).unwrap())
    }

    #[test]
    fn test_request_rejects_page_zero() {
        assert_eq!(
            PaginationRequest::new(0, 100),
            Err(PaginationError::InvalidCurrentPage)
        );
    }

    #[test]
    fn test_window_empty_listing() {
        assert_eq!(window(1, 0), Vec::<u32>::new());
    }

    #[test]
    fn test_window_contains_current_page() {
        let pages = window(25, 1000);

        assert!(pages.contains(&25));
        assert!(!pages.contains(&0));
        assert!(pages[0] > 0);
    }

    #[test]
    fn test_window_near_start_stays_in_range() {
        let pages = window(1, 5);

        assert!(!pages.is_empty());
        for page in &pages {
            assert!((1..5).contains(page), "page {page} out of range");
        }
    }

    #[test]
    fn test_window_mixes_zoom_tiers() {
        let pages = window(500, 10_000);

        // Unit tier around the current page.
        assert!(pages.contains(&500));
        assert!(pages.contains(&501));
        // Tens tier.
        assert!(pages.contains(&540));
        // Hundreds tier.
        assert!(pages.contains(&900));
    }

    #[test]
    fn test_window_coarse_tiers_land_on_round_numbers() {
        // The shared offset cancels the current page's last digit, so coarse
        // links are multiples of 10 and 100 even from page 503.
        let pages = window(503, 10_000);

        assert!(pages.contains(&540));
        assert!(pages.contains(&900));
        assert!(!pages.contains(&543));
    }

    #[test]
    fn test_window_properties_hold_across_inputs() {
        for current in [1, 2, 7, 9, 10, 25, 99, 100, 101, 555, 999, 1000, 5000] {
            for total in [0, 1, 2, 5, 50, 100, 1000, 10_000] {
                let pages = window(current, total);

                assert!(pages.len() <= 30, "window too large for ({current}, {total})");
                for value in &pages {
                    assert!(
                        *value > 0 && *value < total,
                        "value {value} out of bounds for ({current}, {total})"
                    );
                }
                for pair in pages.windows(2) {
                    assert!(pair[0] < pair[1], "window not strictly ascending");
                }
                if current < total {
                    assert!(pages.contains(&current), "current page missing");
                }
            }
        }
    }

    #[test]
    fn test_paginator_rejects_zero_page_size() {
        assert_eq!(
            Paginator::new(0, 10).unwrap_err(),
            PaginationError::InvalidPageSize
        );
    }

    #[test]
    fn test_paginator_num_pages() {
        assert_eq!(Paginator::new(50, 0).unwrap().num_pages(), 1);
        assert_eq!(Paginator::new(50, 50).unwrap().num_pages(), 1);
        assert_eq!(Paginator::new(50, 51).unwrap().num_pages(), 2);
        assert_eq!(Paginator::new(50, 5000).unwrap().num_pages(), 100);
    }

    #[test]
    fn test_paginator_clamps_out_of_range_requests() {
        let paginator = Paginator::new(50, 5000).unwrap();

        assert_eq!(paginator.page(0).number, 1);
        assert_eq!(paginator.page(7).number, 7);
        assert_eq!(paginator.page(9999).number, 100);
    }

    #[test]
    fn test_paginator_page_info() {
        let paginator = Paginator::new(50, 5000).unwrap();
        let page = paginator.page(3);

        assert_eq!(page.total_pages, 100);
        assert_eq!(page.offset, 100);
        assert!(page.has_next);
        assert!(page.has_prev);
        assert!(page.window.contains(&3));

        let first = paginator.page(1);
        assert!(!first.has_prev);
        assert!(first.has_next);
    }
}
