//! Filtering and pagination of the book catalog.
//!
//! This crate provides:
//! - Filter trait and implementations for the supported criteria
//! - FilterPipeline for composing filters
//! - BookFilter, the filter engine driven by UI events
//! - Paginator and the page clamping / page-window rules
//! - CatalogBrowser, which combines them into a renderable PageView
//!
//! ## Architecture
//! A request is processed in stages:
//! 1. BookFilter turns the active criteria into a FilterPipeline
//! 2. The pipeline reduces the catalog to the matching books
//! 3. The requested page is clamped and sliced out by the Paginator
//!
//! ## Example Usage
//! ```ignore
//! use browse::{CatalogBrowser, FilterKey};
//! use catalog::Catalog;
//! use std::sync::Arc;
//!
//! let mut browser = CatalogBrowser::new(Arc::new(Catalog::demo()));
//! browser.update_filter(FilterKey::Language, "english");
//! let view = browser.load(2);
//! println!("Showing {}-{} of {}", view.first_ordinal, view.last_ordinal, view.total_matches);
//! ```

pub mod book_filter;
pub mod browser;
pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod pagination;
pub mod traits;

// Re-export main types
pub use book_filter::BookFilter;
pub use browser::{CatalogBrowser, PageView};
pub use criteria::{FilterCriteria, FilterKey, UnknownFilterKey};
pub use filter_pipeline::FilterPipeline;
pub use pagination::{DEFAULT_PAGE_SIZE, Paginator, clamp_page, page_window};
pub use traits::Filter;
