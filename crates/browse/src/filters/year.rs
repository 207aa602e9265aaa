//! Publication year filter.
//!
//! The criterion arrives as text (it comes from a select box or a command
//! line flag). Both sides are compared as numbers: the text is trimmed and
//! parsed, so `"2023"`, `" 2023 "` and `"2023.0"` all select 2023. Text that
//! is not a number selects nothing.

use crate::traits::Filter;
use catalog::Book;

/// Keeps books published in the given year.
pub struct YearFilter {
    year: Option<f64>,
}

impl YearFilter {
    pub fn new(criterion: &str) -> Self {
        Self {
            year: criterion.trim().parse::<f64>().ok().filter(|y| y.is_finite()),
        }
    }
}

impl Filter for YearFilter {
    fn name(&self) -> &str {
        "YearFilter"
    }

    fn matches(&self, book: &Book) -> bool {
        self.year == Some(f64::from(book.year))
    }
}
