//! # Catalog Browser
//!
//! Ties the filter engine and the paginator together:
//! 1. Filter the whole catalog with the current criteria
//! 2. Clamp the requested page against the page count
//! 3. Remember it as the current page
//! 4. Slice out that page
//!
//! The result is a [`PageView`] carrying everything a renderer needs, so
//! rendering code does no arithmetic of its own.

use std::num::NonZeroUsize;
use std::ops::RangeInclusive;
use std::sync::Arc;

use catalog::{Book, Catalog};
use tracing::{debug, warn};

use crate::book_filter::BookFilter;
use crate::criteria::FilterKey;
use crate::pagination::{Paginator, clamp_page, page_window};

/// One rendered page of the filtered catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub books: Vec<&'a Book>,
    pub current_page: usize,
    pub total_pages: usize,
    /// 1-based ordinal of the first book on this page, 0 when nothing matched
    pub first_ordinal: usize,
    /// 1-based ordinal of the last book on this page, 0 when nothing matched
    pub last_ordinal: usize,
    pub total_matches: usize,
}

impl PageView<'_> {
    /// Nothing matched the criteria
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page numbers to offer around the current page
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        page_window(self.current_page, self.total_pages)
    }
}

/// Owns the browsing state for one catalog.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    catalog: Arc<Catalog>,
    filter: BookFilter,
    paginator: Paginator,
}

impl CatalogBrowser {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            filter: BookFilter::new(),
            paginator: Paginator::default(),
        }
    }

    pub fn with_page_size(catalog: Arc<Catalog>, page_size: NonZeroUsize) -> Self {
        Self {
            catalog,
            filter: BookFilter::new(),
            paginator: Paginator::new(page_size),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &BookFilter {
        &self.filter
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    /// Show `page` of the filtered catalog, clamping it first.
    pub fn load(&mut self, page: usize) -> PageView<'_> {
        let matching = self.filter.apply(self.catalog.books());
        let total_matches = matching.len();
        let total_pages = self.paginator.total_pages(total_matches);

        let current_page = clamp_page(page, total_pages);
        self.paginator.set_current_page(current_page);

        let books = self.paginator.page_slice(&matching, current_page).to_vec();
        let page_size = self.paginator.page_size();
        let (first_ordinal, last_ordinal) = if books.is_empty() {
            (0, 0)
        } else {
            let first = (current_page - 1) * page_size + 1;
            (first, first + books.len() - 1)
        };

        debug!(
            "Loaded page {}/{} ({} of {} matches)",
            current_page,
            total_pages,
            books.len(),
            total_matches
        );

        PageView {
            books,
            current_page,
            total_pages,
            first_ordinal,
            last_ordinal,
            total_matches,
        }
    }

    /// Navigate to `page`, ignoring requests outside `[1, total_pages]`.
    pub fn change_page(&mut self, page: usize) -> Option<PageView<'_>> {
        let total_matches = self.filter.apply(self.catalog.books()).len();
        let total_pages = self.paginator.total_pages(total_matches);
        if page < 1 || page > total_pages {
            warn!("Ignoring request for page {} of {}", page, total_pages);
            return None;
        }
        Some(self.load(page))
    }

    /// Re-render the current page, e.g. after a favorite was toggled.
    pub fn reload(&mut self) -> PageView<'_> {
        let page = self.paginator.current_page();
        self.load(page)
    }

    /// Change one criterion and go back to the first page.
    pub fn update_filter(&mut self, key: FilterKey, value: impl Into<String>) -> PageView<'_> {
        self.filter.update(key, value);
        self.load(1)
    }

    /// Clear all criteria and go back to the first page.
    pub fn reset_filters(&mut self) -> PageView<'_> {
        self.filter.reset();
        self.load(1)
    }
}
