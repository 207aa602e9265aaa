//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a candidate list.

use catalog::Book;

/// A single criterion over book records.
///
/// Filters are pure predicates: they never mutate the books they look at,
/// and `apply` keeps the relative order of the books that pass.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `book` satisfies this criterion
    fn matches(&self, book: &Book) -> bool;

    /// Keep the books that satisfy this criterion, in their original order.
    fn apply<'a>(&self, books: Vec<&'a Book>) -> Vec<&'a Book> {
        books.into_iter().filter(|book| self.matches(book)).collect()
    }
}
