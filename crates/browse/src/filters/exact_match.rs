//! Exact, case-sensitive match on attribute fields.

use crate::traits::Filter;
use catalog::Book;

/// Attribute fields compared for equality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExactField {
    Language,
    Format,
    Category,
}

impl ExactField {
    fn get(self, book: &Book) -> &str {
        match self {
            ExactField::Language => &book.language,
            ExactField::Format => &book.format,
            ExactField::Category => &book.category,
        }
    }
}

/// Keeps books whose field equals the value exactly.
pub struct ExactMatchFilter {
    field: ExactField,
    value: String,
}

impl ExactMatchFilter {
    pub fn new(field: ExactField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl Filter for ExactMatchFilter {
    fn name(&self) -> &str {
        match self.field {
            ExactField::Language => "LanguageFilter",
            ExactField::Format => "FormatFilter",
            ExactField::Category => "CategoryFilter",
        }
    }

    fn matches(&self, book: &Book) -> bool {
        self.field.get(book) == self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::demo::demo_books;

    #[test]
    fn test_language_is_case_sensitive() {
        let books = demo_books();

        let english = ExactMatchFilter::new(ExactField::Language, "english");
        assert_eq!(english.apply(books.iter().collect()).len(), 20);

        let shouting = ExactMatchFilter::new(ExactField::Language, "English");
        assert!(shouting.apply(books.iter().collect()).is_empty());
    }

    #[test]
    fn test_format_filter() {
        let books = demo_books();
        let filter = ExactMatchFilter::new(ExactField::Format, "DJVU");

        let matched = filter.apply(books.iter().collect());
        assert!(!matched.is_empty());
        assert!(matched.iter().all(|b| b.format == "DJVU"));
    }
}
