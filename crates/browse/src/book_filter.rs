//! The filter engine.
//!
//! Holds the current criteria and evaluates them against a candidate list.
//! Each active criterion becomes one `Filter` in a `FilterPipeline`.

use crate::criteria::{FilterCriteria, FilterKey};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{ExactField, ExactMatchFilter, SubstringFilter, TextField, YearFilter};
use crate::traits::Filter;
use catalog::Book;

/// Current filter criteria plus the operations the UI drives.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    criteria: FilterCriteria,
}

impl BookFilter {
    /// A filter with no active criteria
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Set one criterion. An empty value clears it.
    pub fn update(&mut self, key: FilterKey, value: impl Into<String>) {
        self.criteria.set(key, value);
    }

    /// Clear every criterion.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Build the pipeline for the criteria as they are now.
    pub fn pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        for (key, value) in self.criteria.active() {
            pipeline.push(filter_for(key, value));
        }
        pipeline
    }

    /// Books matching every active criterion, in catalog order.
    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        self.pipeline().apply(books)
    }
}

fn filter_for(key: FilterKey, value: &str) -> Box<dyn Filter> {
    match key {
        FilterKey::Title => Box::new(SubstringFilter::new(TextField::Title, value)),
        FilterKey::Author => Box::new(SubstringFilter::new(TextField::Author, value)),
        FilterKey::Year => Box::new(YearFilter::new(value)),
        FilterKey::Language => Box::new(ExactMatchFilter::new(ExactField::Language, value)),
        FilterKey::Format => Box::new(ExactMatchFilter::new(ExactField::Format, value)),
        FilterKey::Category => Box::new(ExactMatchFilter::new(ExactField::Category, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::demo::demo_books;

    fn ids(books: &[&Book]) -> Vec<u32> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let books = demo_books();
        let filter = BookFilter::new();

        let all: Vec<&Book> = books.iter().collect();
        assert_eq!(filter.apply(&books), all);
        assert!(filter.pipeline().is_empty());
    }

    #[test]
    fn test_update_builds_one_filter_per_active_key() {
        let mut filter = BookFilter::new();
        filter.update(FilterKey::Language, "english");
        filter.update(FilterKey::Year, "2021");
        filter.update(FilterKey::Title, "");

        assert_eq!(filter.pipeline().len(), 2);
        assert_eq!(filter.criteria().get(FilterKey::Language), "english");
    }

    #[test]
    fn test_every_third_generated_book_is_english() {
        let books = demo_books();
        let mut filter = BookFilter::new();
        filter.update(FilterKey::Language, "english");

        let matched = filter.apply(&books);
        let expected: Vec<u32> = (0..58).filter(|i| i % 3 == 0).map(|i| i + 3).collect();
        assert_eq!(ids(&matched), expected);
    }

    #[test]
    fn test_reset_restores_identity() {
        let books = demo_books();
        let mut filter = BookFilter::new();
        filter.update(FilterKey::Author, "Автор B");
        filter.update(FilterKey::Format, "EPUB");
        filter.update(FilterKey::Category, "Research");
        assert!(filter.apply(&books).len() < books.len());

        filter.reset();
        assert_eq!(filter.apply(&books).len(), books.len());
        assert!(filter.criteria().is_empty());
    }

    #[test]
    fn test_apply_does_not_touch_input_or_criteria() {
        let books = demo_books();
        let snapshot = books.clone();
        let mut filter = BookFilter::new();
        filter.update(FilterKey::Title, "книга 1");
        let before = filter.criteria().clone();

        let matched = filter.apply(&books);
        assert!(matched.iter().all(|b| b.title.to_lowercase().contains("книга 1")));
        assert_eq!(books, snapshot);
        assert_eq!(filter.criteria(), &before);
    }
}
