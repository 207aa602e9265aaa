//! Client-side pagination.
//!
//! The paginator slices an already filtered list. It does not clamp page
//! numbers itself; callers clamp with [`clamp_page`] before slicing.

use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

/// Books shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(size) => size,
    None => unreachable!(),
};

/// Pages shown on either side of the current one in the page-number control
const WINDOW_RADIUS: usize = 2;

/// Fixed page size plus the current (1-indexed) page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
    current_page: usize,
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// `ceil(count / page_size)`; 0 for an empty list
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size.get())
    }

    /// The records of `page` (1-indexed).
    ///
    /// Pages before the first or past the last yield an empty slice.
    pub fn page_slice<'s, T>(&self, records: &'s [T], page: usize) -> &'s [T] {
        let size = self.page_size.get();
        let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(size)) else {
            return &[];
        };
        if start >= records.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(records.len());
        &records[start..end]
    }

    /// Store the current page. No range check.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// The page to actually show for a request.
///
/// `min(requested, total_pages)` when there is at least one page, otherwise
/// 1. A request for page 0 also lands on page 1.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        return 1;
    }
    requested.clamp(1, total_pages)
}

/// Page numbers for the page-number control: `[C-2, C+2] ∩ [1, T]`.
///
/// Empty when there are no pages.
pub fn page_window(current: usize, total_pages: usize) -> RangeInclusive<usize> {
    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = current.saturating_add(WINDOW_RADIUS).min(total_pages);
    start..=end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator(size: usize) -> Paginator {
        Paginator::new(NonZeroUsize::new(size).unwrap())
    }

    #[test]
    fn test_total_pages() {
        let p = paginator(12);
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(12), 1);
        assert_eq!(p.total_pages(13), 2);
        assert_eq!(p.total_pages(14), 2);
        assert_eq!(p.total_pages(60), 5);
    }

    #[test]
    fn test_fourteen_records() {
        let p = paginator(12);
        let records: Vec<u32> = (1..=14).collect();

        assert_eq!(p.total_pages(records.len()), 2);
        assert_eq!(p.page_slice(&records, 1).len(), 12);
        assert_eq!(p.page_slice(&records, 2), &[13, 14]);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let p = paginator(12);
        let records: Vec<u32> = (1..=14).collect();

        assert!(p.page_slice(&records, 5).is_empty());
        assert!(p.page_slice(&records, 0).is_empty());
        assert!(p.page_slice(&records, usize::MAX).is_empty());
        assert!(p.page_slice::<u32>(&[], 1).is_empty());
    }

    #[test]
    fn test_pages_concatenate_to_input() {
        for size in 1..=7 {
            let p = paginator(size);
            for n in 0..=30 {
                let records: Vec<usize> = (0..n).collect();
                let total = p.total_pages(n);
                let rebuilt: Vec<usize> = (1..=total)
                    .flat_map(|page| p.page_slice(&records, page).iter().copied())
                    .collect();
                assert_eq!(rebuilt, records, "size {size}, n {n}");

                if n > 0 {
                    let last = p.page_slice(&records, total).len();
                    let expected = if n % size == 0 { size } else { n % size };
                    assert_eq!(last, expected);
                }
            }
        }
    }

    #[test]
    fn test_current_page_is_not_validated() {
        let mut p = Paginator::default();
        assert_eq!(p.page_size(), 12);
        assert_eq!(p.current_page(), 1);

        p.set_current_page(99);
        assert_eq!(p.current_page(), 99);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(5, 2), 2);
        assert_eq!(clamp_page(2, 5), 2);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 10), 1..=3);
        assert_eq!(page_window(5, 10), 3..=7);
        assert_eq!(page_window(10, 10), 8..=10);
        assert_eq!(page_window(2, 2), 1..=2);
        assert_eq!(page_window(1, 1), 1..=1);
        assert!(page_window(1, 0).is_empty());
    }
}
