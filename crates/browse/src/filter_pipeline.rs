//! The FilterPipeline chains filters.
//!
//! Every filter sees the output of the previous one, so the result is the
//! logical AND of all filters. An empty pipeline passes everything through.

use crate::traits::Filter;
use catalog::Book;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SubstringFilter::new(TextField::Title, "теория"))
///     .add_filter(ExactMatchFilter::new(ExactField::Format, "PDF"));
///
/// let matching = pipeline.apply(catalog.books());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.push(Box::new(filter));
        self
    }

    /// Add an already boxed filter.
    pub fn push(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    ///
    /// Returns references into `books`, in their original order.
    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        let mut current: Vec<&'a Book> = books.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{ExactField, ExactMatchFilter, YearFilter};
    use catalog::demo::demo_books;

    #[test]
    fn test_empty_pipeline() {
        let books = demo_books();
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.apply(&books);
        assert_eq!(filtered.len(), books.len());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let books = demo_books();
        let pipeline = FilterPipeline::new()
            .add_filter(ExactMatchFilter::new(ExactField::Language, "english"))
            .add_filter(YearFilter::new("2020"));

        let filtered = pipeline.apply(&books);
        assert!(!filtered.is_empty());
        assert!(
            filtered
                .iter()
                .all(|b| b.language == "english" && b.year == 2020)
        );
        let expected = books
            .iter()
            .filter(|b| b.language == "english" && b.year == 2020)
            .count();
        assert_eq!(filtered.len(), expected);
    }
}
